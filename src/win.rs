//! Terminal-condition detection.

use core::fmt;

use crate::board::Board;
use crate::piece::{Rank, Side};
use crate::rules::has_legal_move;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum WinReason {
    /// The loser's Flag was captured.
    FlagCaptured,
    /// The loser had no piece able to make a legal move.
    NoMovablePieces,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Ongoing,
    Won { winner: Side, reason: WinReason },
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Won { winner, .. } => Some(*winner),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Won {
                winner,
                reason: WinReason::FlagCaptured,
            } => write!(f, "{} wins by capturing the flag", winner),
            GameStatus::Won {
                winner,
                reason: WinReason::NoMovablePieces,
            } => write!(f, "{} wins, {} cannot move", winner, winner.opponent()),
        }
    }
}

fn flag_lost(board: &Board, side: Side) -> bool {
    board.casualties(side).any(|p| p.rank == Rank::Flag)
}

/// Evaluate the board with `next` about to move.
///
/// A captured Flag decides first. Otherwise the side to move loses when it
/// cannot move, then the side that just moved.
pub fn detect(board: &Board, next: Side) -> GameStatus {
    for side in [next, next.opponent()] {
        if flag_lost(board, side) {
            return GameStatus::Won {
                winner: side.opponent(),
                reason: WinReason::FlagCaptured,
            };
        }
    }
    for side in [next, next.opponent()] {
        if !has_legal_move(board, side) {
            return GameStatus::Won {
                winner: side.opponent(),
                reason: WinReason::NoMovablePieces,
            };
        }
    }
    GameStatus::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;
    use crate::config::GameConfig;

    fn idx(board: &Board, row: u8, col: u8) -> usize {
        board.geometry().index(Coord::new(row, col)).unwrap()
    }

    #[test]
    fn flag_capture_outranks_immobilization() {
        let mut board = Board::new(&GameConfig::classic());
        board.add_piece(Side::Red, Rank::Flag, idx(&board, 9, 0));
        let miner = board.add_piece(Side::Red, Rank::Miner, idx(&board, 1, 9));
        let flag = board.add_piece(Side::Blue, Rank::Flag, idx(&board, 0, 9));
        board.add_piece(Side::Blue, Rank::Bomb, idx(&board, 0, 0));
        assert!(!has_legal_move(&board, Side::Blue));

        // the Miner takes the flag; Blue is left with a lone Bomb
        board.reveal(miner);
        board.reveal(flag);
        board.capture(flag);
        board.relocate(miner, idx(&board, 0, 9));

        for next in Side::BOTH {
            assert_eq!(
                detect(&board, next),
                GameStatus::Won {
                    winner: Side::Red,
                    reason: WinReason::FlagCaptured
                }
            );
        }
    }

    #[test]
    fn immobilized_side_loses_without_capture() {
        let mut board = Board::new(&GameConfig::classic());
        board.add_piece(Side::Red, Rank::Flag, idx(&board, 9, 0));
        board.add_piece(Side::Red, Rank::Scout, idx(&board, 9, 9));
        board.add_piece(Side::Blue, Rank::Flag, idx(&board, 0, 9));
        board.add_piece(Side::Blue, Rank::Bomb, idx(&board, 0, 0));
        assert_eq!(
            detect(&board, Side::Red),
            GameStatus::Won {
                winner: Side::Red,
                reason: WinReason::NoMovablePieces
            }
        );
    }
}
