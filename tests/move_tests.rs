use stratego::{
    destinations, Coord, GameConfig, GameState, Move, MoveError, MoveKind, Phase, Rank, Side,
};

fn c(row: u8, col: u8) -> Coord {
    Coord::new(row, col)
}

/// Both flags in the corners plus one Sergeant each with room to move, so a
/// scenario never ends on immobilization by accident.
fn position(turn: Side, extra: &[(Side, Rank, (u8, u8))]) -> GameState {
    let base = [
        (Side::Red, Rank::Flag, (9, 0)),
        (Side::Red, Rank::Sergeant, (9, 9)),
        (Side::Blue, Rank::Flag, (0, 9)),
        (Side::Blue, Rank::Sergeant, (0, 0)),
    ];
    GameState::from_position(
        GameConfig::classic(),
        turn,
        base.iter()
            .chain(extra)
            .map(|&(side, rank, (row, col))| (side, rank, c(row, col))),
    )
    .unwrap()
}

fn assert_rejected(state: &mut GameState, mv: Move, expected: MoveError) {
    let before = state.clone();
    assert_eq!(state.check_move(&mv), Err(expected));
    assert_eq!(state.apply_move(mv), Err(expected));
    assert_eq!(*state, before);
}

#[test]
fn test_simple_step_flips_turn() {
    let state = position(Side::Red, &[(Side::Red, Rank::Major, (3, 4))]);
    assert_eq!(state.phase(), Phase::InProgress);

    let mv = Move::new(Side::Red, c(3, 4), c(3, 5));
    assert_eq!(state.check_move(&mv), Ok(MoveKind::Simple));
    let (next, combat) = state.attempt_move(mv).unwrap();
    assert!(combat.is_none());
    assert_eq!(next.turn(), Side::Blue);
    assert_eq!(next.move_count(), 1);
    assert!(next.board().is_vacant(c(3, 4)));
    let major = next.board().piece_at(c(3, 5)).unwrap();
    assert_eq!(major.rank, Rank::Major);
    assert!(!major.revealed);

    let last = next.last_move().unwrap();
    assert_eq!((last.from, last.to, last.side), (c(3, 4), c(3, 5), Side::Red));

    // the source state is untouched
    assert_eq!(state.turn(), Side::Red);
    assert_eq!(state.move_count(), 0);
    assert!(state.board().piece_at(c(3, 4)).is_some());
}

#[test]
fn test_scout_runs_along_clear_row() {
    let state = position(Side::Blue, &[(Side::Blue, Rank::Scout, (6, 2))]);
    let (next, combat) = state
        .attempt_move(Move::new(Side::Blue, c(6, 2), c(6, 7)))
        .unwrap();
    assert!(combat.is_none());
    assert_eq!(
        next.board().piece_at(c(6, 7)).map(|p| p.rank),
        Some(Rank::Scout)
    );
    assert_eq!(next.turn(), Side::Red);
}

#[test]
fn test_scout_blocked_by_any_piece() {
    let mut enemy = position(
        Side::Blue,
        &[
            (Side::Blue, Rank::Scout, (6, 2)),
            (Side::Red, Rank::Captain, (6, 5)),
        ],
    );
    assert_rejected(
        &mut enemy,
        Move::new(Side::Blue, c(6, 2), c(6, 7)),
        MoveError::BlockedPath,
    );

    let mut friend = position(
        Side::Blue,
        &[
            (Side::Blue, Rank::Scout, (6, 2)),
            (Side::Blue, Rank::Miner, (6, 4)),
        ],
    );
    assert_rejected(
        &mut friend,
        Move::new(Side::Blue, c(6, 2), c(6, 7)),
        MoveError::BlockedPath,
    );
}

#[test]
fn test_scout_cannot_cross_lakes() {
    let mut state = position(Side::Red, &[(Side::Red, Rank::Scout, (6, 2))]);
    assert_rejected(
        &mut state,
        Move::new(Side::Red, c(6, 2), c(3, 2)),
        MoveError::BlockedPath,
    );
}

#[test]
fn test_scout_line_rules() {
    let mut state = position(
        Side::Red,
        &[
            (Side::Red, Rank::Scout, (8, 1)),
            (Side::Red, Rank::Lieutenant, (8, 4)),
            (Side::Blue, Rank::Captain, (2, 1)),
        ],
    );
    assert_rejected(
        &mut state,
        Move::new(Side::Red, c(8, 1), c(7, 2)),
        MoveError::IllegalDestination,
    );
    assert_rejected(
        &mut state,
        Move::new(Side::Red, c(8, 1), c(8, 4)),
        MoveError::FriendlyFireAttempt,
    );

    // attack from a distance
    let mv = Move::new(Side::Red, c(8, 1), c(2, 1));
    assert!(matches!(
        state.check_move(&mv),
        Ok(MoveKind::Contested { .. })
    ));
    let combat = state.apply_move(mv).unwrap().unwrap();
    assert_eq!(combat.attacker.rank, Rank::Scout);
    assert_eq!(combat.defender.rank, Rank::Captain);
    assert_eq!(combat.at, c(2, 1));
}

#[test]
fn test_not_your_piece() {
    let mut state = position(Side::Red, &[(Side::Red, Rank::Major, (5, 5))]);
    // empty cell
    assert_rejected(
        &mut state,
        Move::new(Side::Red, c(5, 4), c(5, 3)),
        MoveError::NotYourPiece,
    );
    // opponent's piece
    assert_rejected(
        &mut state,
        Move::new(Side::Red, c(0, 0), c(1, 0)),
        MoveError::NotYourPiece,
    );
    // out of turn
    assert_rejected(
        &mut state,
        Move::new(Side::Blue, c(0, 0), c(1, 0)),
        MoveError::NotYourPiece,
    );
    // off the board
    assert_rejected(
        &mut state,
        Move::new(Side::Red, c(12, 0), c(11, 0)),
        MoveError::NotYourPiece,
    );
}

#[test]
fn test_immobile_pieces() {
    let mut state = position(Side::Red, &[(Side::Red, Rank::Bomb, (7, 4))]);
    assert_rejected(
        &mut state,
        Move::new(Side::Red, c(7, 4), c(6, 4)),
        MoveError::ImmobilePiece,
    );
    assert_rejected(
        &mut state,
        Move::new(Side::Red, c(9, 0), c(8, 0)),
        MoveError::ImmobilePiece,
    );
}

#[test]
fn test_illegal_destinations() {
    let mut state = position(Side::Red, &[(Side::Red, Rank::Sergeant, (6, 2))]);
    let bad = [
        (c(6, 2), c(5, 2)),  // lake
        (c(9, 9), c(10, 9)), // off the board
        (c(9, 9), c(8, 8)),  // diagonal
        (c(9, 9), c(7, 9)),  // two steps
        (c(9, 9), c(9, 9)),  // standing still
    ];
    for (from, to) in bad {
        assert_rejected(
            &mut state,
            Move::new(Side::Red, from, to),
            MoveError::IllegalDestination,
        );
    }
}

#[test]
fn test_friendly_fire() {
    let mut state = position(
        Side::Red,
        &[
            (Side::Red, Rank::Major, (7, 5)),
            (Side::Red, Rank::Captain, (7, 6)),
        ],
    );
    assert_rejected(
        &mut state,
        Move::new(Side::Red, c(7, 5), c(7, 6)),
        MoveError::FriendlyFireAttempt,
    );
}

#[test]
fn test_destinations_and_legal_moves() {
    let state = position(Side::Red, &[]);
    let moves = state.legal_moves();
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&Move::new(Side::Red, c(9, 9), c(8, 9))));
    assert!(moves.contains(&Move::new(Side::Red, c(9, 9), c(9, 8))));

    let state = position(Side::Red, &[(Side::Red, Rank::Scout, (6, 0))]);
    let scout = state.board().piece_at(c(6, 0)).copied().unwrap();
    let reach = destinations(state.board(), &scout);
    // five up plus the Blue Sergeant, two down to the flag, nine across
    assert_eq!(reach.len(), 17);
    assert!(reach.contains(&c(0, 0)));
    assert!(!reach.contains(&c(9, 0)));
    assert_eq!(state.legal_moves().len(), 19);

    let flag = state.board().piece_at(c(9, 0)).copied().unwrap();
    assert!(destinations(state.board(), &flag).is_empty());
}

#[test]
fn test_from_position_rejects_bad_cells() {
    let config = GameConfig::classic();
    let lake = GameState::from_position(
        config.clone(),
        Side::Red,
        [(Side::Red, Rank::Flag, c(4, 2))],
    );
    assert!(lake.is_err());

    let twice = GameState::from_position(
        config.clone(),
        Side::Red,
        [
            (Side::Red, Rank::Flag, c(9, 0)),
            (Side::Blue, Rank::Flag, c(9, 0)),
        ],
    );
    assert!(twice.is_err());

    let extra_flag = GameState::from_position(
        config,
        Side::Red,
        [
            (Side::Red, Rank::Flag, c(9, 0)),
            (Side::Red, Rank::Flag, c(9, 1)),
        ],
    );
    assert!(extra_flag.is_err());
}
