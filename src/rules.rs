//! Move legality: the ordered checks gating every move, plus move
//! generation for a side.

use alloc::vec::Vec;
use core::fmt;

use crate::board::{Board, Cell, Coord, Direction};
use crate::common::MoveError;
use crate::piece::{Piece, PieceId, Side};

/// A move request from `side`. Carries no legality guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub side: Side,
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub const fn new(side: Side, from: Coord, to: Coord) -> Self {
        Self { side, from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.side, self.from, self.to)
    }
}

/// How an accepted move resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Relocation onto an empty cell.
    Simple,
    /// Attack on the opposing piece at the destination.
    Contested { defender: PieceId },
}

/// A move that passed every check, with its cell indices resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CheckedMove {
    pub piece: Piece,
    pub defender: Option<Piece>,
    pub to: usize,
    pub kind: MoveKind,
}

/// Decide whether `mv` is legal with `turn` to move.
pub fn check_move(board: &Board, turn: Side, mv: &Move) -> Result<MoveKind, MoveError> {
    validate(board, turn, mv).map(|checked| checked.kind)
}

pub(crate) fn validate(board: &Board, turn: Side, mv: &Move) -> Result<CheckedMove, MoveError> {
    let geometry = board.geometry();

    let piece = board
        .piece_at(mv.from)
        .filter(|p| mv.side == turn && p.side == turn)
        .ok_or(MoveError::NotYourPiece)?;

    if !piece.rank.is_movable() {
        return Err(MoveError::ImmobilePiece);
    }

    let to = geometry
        .index(mv.to)
        .filter(|_| !board.is_lake(mv.to) && mv.to != mv.from)
        .ok_or(MoveError::IllegalDestination)?;

    if piece.rank.moves_in_lines() {
        let path = board
            .cells_between(mv.from, mv.to)
            .map_err(|_| MoveError::IllegalDestination)?;
        if path.iter().any(|&c| !board.is_vacant(c)) {
            return Err(MoveError::BlockedPath);
        }
    } else if !board
        .is_adjacent(mv.from, mv.to)
        .map_err(|_| MoveError::IllegalDestination)?
    {
        return Err(MoveError::IllegalDestination);
    }

    let (kind, defender) = match board.cell_at(to) {
        Cell::Empty => (MoveKind::Simple, None),
        Cell::Occupied(id) => match board.piece(id) {
            Some(target) if target.side == piece.side => {
                return Err(MoveError::FriendlyFireAttempt)
            }
            Some(target) => (MoveKind::Contested { defender: id }, Some(*target)),
            None => return Err(MoveError::IllegalDestination),
        },
        Cell::Lake => return Err(MoveError::IllegalDestination),
    };

    Ok(CheckedMove {
        piece: *piece,
        defender,
        to,
        kind,
    })
}

/// Cells `piece` may legally move to.
pub fn destinations(board: &Board, piece: &Piece) -> Vec<Coord> {
    let mut out = Vec::new();
    let Some(from) = piece.location else {
        return out;
    };
    if !piece.rank.is_movable() {
        return out;
    }
    let geometry = board.geometry();
    let reach = if piece.rank.moves_in_lines() {
        usize::MAX
    } else {
        1
    };
    for dir in Direction::ALL {
        for to in geometry.ray(from, dir).take(reach) {
            if board.is_vacant(to) {
                out.push(to);
                continue;
            }
            if board.piece_at(to).is_some_and(|p| p.side != piece.side) {
                out.push(to);
            }
            break;
        }
    }
    out
}

/// Every legal move for `side`.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .live_pieces(side)
        .flat_map(|p| {
            let from = p.location;
            destinations(board, p)
                .into_iter()
                .filter_map(move |to| from.map(|from| Move::new(side, from, to)))
        })
        .collect()
}

/// Whether `side` has at least one legal move.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board
        .live_pieces(side)
        .any(|p| !destinations(board, p).is_empty())
}

