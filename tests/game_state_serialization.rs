use rand::{rngs::SmallRng, seq::IndexedRandom, SeedableRng};
use stratego::{random_game, BoardView, GameConfig, GameState, Side};

fn played_state(seed: u64, moves: usize) -> GameState {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut state = random_game(&GameConfig::classic(), &mut rng).unwrap();
    for _ in 0..moves {
        let legal = state.legal_moves();
        let Some(&mv) = legal.choose(&mut rng) else {
            break;
        };
        state.apply_move(mv).unwrap();
    }
    state
}

#[test]
fn test_game_state_bincode_roundtrip() {
    let state = played_state(42, 120);
    let bytes = bincode::serialize(&state).unwrap();
    let restored: GameState = bincode::deserialize(&bytes).unwrap();
    assert_eq!(state, restored);

    // the restored game carries on identically
    assert_eq!(state.legal_moves(), restored.legal_moves());
}

#[test]
fn test_view_json_roundtrip() {
    let state = played_state(9, 80);
    for side in Side::BOTH {
        let view = state.current_view(side);
        let json = serde_json::to_string(&view).unwrap();
        let restored: BoardView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, restored);
    }
}

#[test]
fn test_truncated_snapshot_is_rejected() {
    let state = played_state(5, 10);
    let bytes = bincode::serialize(&state).unwrap();
    let cut = &bytes[..bytes.len() / 2];
    assert!(bincode::deserialize::<GameState>(cut).is_err());
}
