//! Seeded self-play driver: random deployments and uniformly random legal
//! moves for both sides. Used for smoke tests and the `sim` command.

use log::info;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::{
    config::GameConfig,
    game::GameState,
    piece::Side,
    setup::{random_placement, SetupSession},
    win::{GameStatus, WinReason},
};

/// Summary of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    pub seed: u64,
    pub winner: Option<Side>,
    pub reason: Option<WinReason>,
    pub moves: u32,
    pub battles: usize,
    /// The move cap was reached before the game ended.
    pub capped: bool,
}

/// Deploy both sides at random from `seed` and start the game.
pub fn random_game(config: &GameConfig, rng: &mut SmallRng) -> anyhow::Result<GameState> {
    let mut session = SetupSession::new(config.clone());
    for side in Side::BOTH {
        let placement = random_placement(config, side, rng);
        session
            .submit_setup(side, &placement)
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    session.start_game().map_err(|e| anyhow::anyhow!(e))
}

/// Play one game of random moves, stopping after `max_moves`.
pub fn simulate(config: &GameConfig, seed: u64, max_moves: u32) -> anyhow::Result<SimReport> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut state = random_game(config, &mut rng)?;

    while !state.game_status().is_over() && state.move_count() < max_moves {
        let moves = state.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        state.apply_move(mv).map_err(|e| anyhow::anyhow!(e))?;
    }

    let status = state.game_status();
    let report = SimReport {
        seed,
        winner: status.winner(),
        reason: match status {
            GameStatus::Won { reason, .. } => Some(reason),
            GameStatus::Ongoing => None,
        },
        moves: state.move_count(),
        battles: state.battle_log().len(),
        capped: !status.is_over(),
    };
    info!("simulated seed {}: {}", seed, status);
    Ok(report)
}
