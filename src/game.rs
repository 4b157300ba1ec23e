//! Turn sequencing over the authoritative game state.

use alloc::vec::Vec;

use log::{debug, info};

use crate::{
    board::{Board, Coord},
    combat::{engage, CombatOutcome},
    common::{MoveError, SetupError, SetupErrorKind},
    config::GameConfig,
    piece::{Piece, PieceId, Rank, RankCounts, Side},
    rules::{self, Move, MoveKind},
    setup::ValidatedPlacement,
    win::{self, GameStatus},
};

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Sides are still deploying; see [`crate::SetupSession`].
    AwaitingSetup,
    InProgress,
    Concluded,
}

/// The last accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub side: Side,
    pub piece: PieceId,
    pub from: Coord,
    pub to: Coord,
    pub combat: Option<CombatOutcome>,
}

/// Authoritative game state: true ranks for every piece, whose turn it is,
/// and how the game stands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    config: GameConfig,
    board: Board,
    turn: Side,
    move_count: u32,
    status: GameStatus,
    last_move: Option<MoveRecord>,
    battle_log: Vec<CombatOutcome>,
}

impl GameState {
    /// Opening position from two validated placements. Red moves first.
    pub(crate) fn from_setup(
        config: GameConfig,
        red: &ValidatedPlacement,
        blue: &ValidatedPlacement,
    ) -> Self {
        let mut board = Board::new(&config);
        let geometry = config.geometry();
        for placement in [red, blue] {
            for &(coord, rank) in placement.entries() {
                if let Some(idx) = geometry.index(coord) {
                    board.add_piece(placement.side(), rank, idx);
                }
            }
        }
        Self::open(config, board, Side::Red)
    }

    /// Arbitrary position, e.g. a puzzle or a test scenario. Cells must be
    /// playable and unique, and no rank may exceed its quota.
    pub fn from_position<I>(config: GameConfig, turn: Side, pieces: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = (Side, Rank, Coord)>,
    {
        let mut board = Board::new(&config);
        let geometry = config.geometry();
        let mut counts = [RankCounts::default(); 2];
        for (side, rank, coord) in pieces {
            let idx = geometry
                .index(coord)
                .filter(|_| !board.is_lake(coord))
                .ok_or(SetupError::new(side, SetupErrorKind::ZoneViolation(coord)))?;
            if !board.is_vacant(coord) {
                return Err(SetupError::new(side, SetupErrorKind::DuplicateCell(coord)));
            }
            let tally = &mut counts[side.index()];
            tally.bump(rank);
            let expected = config.quota()[rank];
            if tally[rank] > expected {
                return Err(SetupError::new(
                    side,
                    SetupErrorKind::QuotaMismatch {
                        rank,
                        expected,
                        found: tally[rank],
                    },
                ));
            }
            board.add_piece(side, rank, idx);
        }
        Ok(Self::open(config, board, turn))
    }

    fn open(config: GameConfig, board: Board, turn: Side) -> Self {
        let status = win::detect(&board, turn);
        if status.is_over() {
            info!("game over before the first move: {}", status);
        }
        GameState {
            config,
            board,
            turn,
            move_count: 0,
            status,
            last_move: None,
            battle_log: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only access to the true layout. Not for display to a player;
    /// use [`GameState::current_view`] for that.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn game_status(&self) -> GameStatus {
        self.status
    }

    pub fn phase(&self) -> Phase {
        if self.status.is_over() {
            Phase::Concluded
        } else {
            Phase::InProgress
        }
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Every combat of the game, oldest first.
    pub fn battle_log(&self) -> &[CombatOutcome] {
        &self.battle_log
    }

    pub fn casualties(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.board.casualties(side)
    }

    pub fn remaining(&self, side: Side) -> RankCounts {
        self.board.remaining(side)
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_over() {
            return Vec::new();
        }
        rules::legal_moves(&self.board, self.turn)
    }

    /// Classify `mv` without applying it.
    pub fn check_move(&self, mv: &Move) -> Result<MoveKind, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        rules::check_move(&self.board, self.turn, mv)
    }

    /// Apply `mv` to a copy of this state, leaving `self` untouched.
    pub fn attempt_move(&self, mv: Move) -> Result<(GameState, Option<CombatOutcome>), MoveError> {
        let mut next = self.clone();
        let outcome = next.apply_move(mv)?;
        Ok((next, outcome))
    }

    /// Apply `mv` in place. On error nothing changes.
    pub fn apply_move(&mut self, mv: Move) -> Result<Option<CombatOutcome>, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        let checked = rules::validate(&self.board, self.turn, &mv).map_err(|e| {
            debug!("rejected {}: {}", mv, e);
            e
        })?;

        let combat = match (checked.kind, checked.defender) {
            (MoveKind::Contested { .. }, Some(defender)) => Some(engage(
                &mut self.board,
                &checked.piece,
                &defender,
                checked.to,
            )),
            _ => {
                self.board.relocate(checked.piece.id, checked.to);
                None
            }
        };
        if let Some(outcome) = combat {
            self.battle_log.push(outcome);
        }

        self.move_count += 1;
        self.last_move = Some(MoveRecord {
            side: mv.side,
            piece: checked.piece.id,
            from: mv.from,
            to: mv.to,
            combat,
        });
        let next = self.turn.opponent();
        self.status = win::detect(&self.board, next);
        if !self.status.is_over() {
            self.turn = next;
        }
        debug!("applied {} (move {})", mv, self.move_count);
        if self.status.is_over() {
            info!("game over after {} moves: {}", self.move_count, self.status);
        }
        Ok(combat)
    }
}
