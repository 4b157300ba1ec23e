//! Per-side projections of the game with opposing unrevealed ranks masked.

use alloc::vec::Vec;

use crate::board::{Cell, Coord, Geometry};
use crate::combat::CombatOutcome;
use crate::game::GameState;
use crate::piece::{Piece, PieceId, Rank, Side};
use crate::win::GameStatus;

/// A piece as one side sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct VisiblePiece {
    pub id: PieceId,
    pub side: Side,
    /// `None` for an opposing piece that has not fought yet.
    pub rank: Option<Rank>,
    pub revealed: bool,
}

impl VisiblePiece {
    fn project(piece: &Piece, viewer: Side) -> Self {
        let visible = piece.side == viewer || piece.revealed;
        VisiblePiece {
            id: piece.id,
            side: piece.side,
            rank: visible.then_some(piece.rank),
            revealed: piece.revealed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewCell {
    Empty,
    Lake,
    Piece(VisiblePiece),
}

/// Snapshot of the game from `viewer`'s seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardView {
    pub viewer: Side,
    pub geometry: Geometry,
    /// Row-major.
    pub cells: Vec<ViewCell>,
    pub turn: Side,
    pub move_count: u32,
    pub status: GameStatus,
    /// Captured ranks per side (`Side::index` order); combat disclosed them.
    pub casualties: [Vec<Rank>; 2],
    pub last_combat: Option<CombatOutcome>,
}

impl BoardView {
    pub fn cell(&self, coord: Coord) -> Option<&ViewCell> {
        self.geometry.index(coord).and_then(|idx| self.cells.get(idx))
    }

    pub fn casualties(&self, side: Side) -> &[Rank] {
        &self.casualties[side.index()]
    }
}

impl GameState {
    /// Board as `viewer` may see it: own pieces and revealed opposing
    /// pieces show their rank, everything else of the opponent is hidden.
    pub fn current_view(&self, viewer: Side) -> BoardView {
        let board = self.board();
        let geometry = board.geometry();
        let cells = geometry
            .coords()
            .map(|coord| match board.cell(coord) {
                Ok(Cell::Lake) => ViewCell::Lake,
                Ok(Cell::Occupied(id)) => board.piece(id).map_or(ViewCell::Empty, |p| {
                    ViewCell::Piece(VisiblePiece::project(p, viewer))
                }),
                Ok(Cell::Empty) | Err(_) => ViewCell::Empty,
            })
            .collect();
        let casualties: [Vec<Rank>; 2] =
            Side::BOTH.map(|side| board.casualties(side).map(|p| p.rank).collect());
        BoardView {
            viewer,
            geometry,
            cells,
            turn: self.turn(),
            move_count: self.move_count(),
            status: self.game_status(),
            casualties,
            last_combat: self.last_move().and_then(|m| m.combat),
        }
    }
}
