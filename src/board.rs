//! Board geometry and the authoritative piece layout.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::bitboard::CellMask;
use crate::config::GameConfig;
use crate::piece::{Piece, PieceId, Rank, RankCounts, Side};

/// A cell coordinate, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// `A1` notation: column letter, then 1-based row.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.col < 26 {
            write!(f, "{}{}", (b'A' + self.col) as char, self.row as u16 + 1)
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

/// Error returned when text is not a coordinate in `A1` notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordError;

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a coordinate like A1")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseCoordError {}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParseCoordError)?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(ParseCoordError);
        }
        let row: u16 = chars.as_str().parse().map_err(|_| ParseCoordError)?;
        if row == 0 || row > u8::MAX as u16 {
            return Err(ParseCoordError);
        }
        Ok(Coord::new((row - 1) as u8, letter as u8 - b'A'))
    }
}

/// The four orthogonal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Errors from geometry queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    InvalidCoordinate(Coord),
    /// The two cells share neither a row nor a column.
    NotInLine { from: Coord, to: Coord },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidCoordinate(c) => write!(f, "Coordinate {} is off the board", c),
            BoardError::NotInLine { from, to } => {
                write!(f, "{} and {} are not on a common row or column", from, to)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Grid dimensions and the coordinate/index mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    rows: u8,
    cols: u8,
}

impl Geometry {
    pub const fn new(rows: u8, cols: u8) -> Self {
        Self { rows, cols }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Linear index of an in-bounds coordinate.
    pub fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| coord.row as usize * self.cols as usize + coord.col as usize)
    }

    /// Inverse of [`Geometry::index`] for indices below `cell_count`.
    pub fn coord_of(&self, index: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((index / cols) as u8, (index % cols) as u8)
    }

    fn check(&self, coord: Coord) -> Result<usize, BoardError> {
        self.index(coord).ok_or(BoardError::InvalidCoordinate(coord))
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }

    /// One step from `coord`, if it stays on the grid.
    pub fn step(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        let next = match dir {
            Direction::Up => Coord::new(coord.row.checked_sub(1)?, coord.col),
            Direction::Down => Coord::new(coord.row.checked_add(1)?, coord.col),
            Direction::Left => Coord::new(coord.row, coord.col.checked_sub(1)?),
            Direction::Right => Coord::new(coord.row, coord.col.checked_add(1)?),
        };
        self.in_bounds(next).then_some(next)
    }

    /// Cells walked from `coord` (exclusive) to the edge of the grid.
    pub fn ray(&self, coord: Coord, dir: Direction) -> impl Iterator<Item = Coord> + '_ {
        let mut cursor = Some(coord);
        core::iter::from_fn(move || {
            cursor = cursor.and_then(|c| self.step(c, dir));
            cursor
        })
    }

    /// Orthogonal neighbours that lie on the grid.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(coord, dir))
    }

    /// True when the cells are orthogonal neighbours.
    pub fn is_adjacent(&self, a: Coord, b: Coord) -> Result<bool, BoardError> {
        self.check(a)?;
        self.check(b)?;
        Ok(a.row.abs_diff(b.row) as u16 + a.col.abs_diff(b.col) as u16 == 1)
    }

    /// Cells strictly between `a` and `b` on a shared row or column, ordered
    /// from `a` towards `b`.
    pub fn cells_between(&self, a: Coord, b: Coord) -> Result<Vec<Coord>, BoardError> {
        self.check(a)?;
        self.check(b)?;
        if a.row == b.row {
            let cols: Vec<u8> = if a.col < b.col {
                (a.col + 1..b.col).collect()
            } else {
                (b.col + 1..a.col).rev().collect()
            };
            Ok(cols.into_iter().map(|col| Coord::new(a.row, col)).collect())
        } else if a.col == b.col {
            let rows: Vec<u8> = if a.row < b.row {
                (a.row + 1..b.row).collect()
            } else {
                (b.row + 1..a.row).rev().collect()
            };
            Ok(rows.into_iter().map(|row| Coord::new(row, a.col)).collect())
        } else {
            Err(BoardError::NotInLine { from: a, to: b })
        }
    }
}

/// What a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Lake,
    Occupied(PieceId),
}

/// Canonical layout: every piece with its true rank, plus the casualty lists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    geometry: Geometry,
    lakes: CellMask,
    grid: Vec<Option<PieceId>>,
    occupied: [CellMask; 2],
    pieces: Vec<Piece>,
    casualties: [Vec<PieceId>; 2],
}

impl Board {
    /// An empty board with the config's lakes.
    pub fn new(config: &GameConfig) -> Self {
        let geometry = config.geometry();
        Board {
            geometry,
            lakes: config.lake_mask(),
            grid: alloc::vec![None; geometry.cell_count()],
            occupied: [CellMask::new(); 2],
            pieces: Vec::new(),
            casualties: [Vec::new(), Vec::new()],
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// State of the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        let idx = self.geometry.check(coord)?;
        Ok(self.cell_at(idx))
    }

    pub(crate) fn cell_at(&self, idx: usize) -> Cell {
        if self.lakes.contains(idx) {
            Cell::Lake
        } else {
            match self.grid[idx] {
                Some(id) => Cell::Occupied(id),
                None => Cell::Empty,
            }
        }
    }

    pub fn is_lake(&self, coord: Coord) -> bool {
        self.geometry
            .index(coord)
            .is_some_and(|idx| self.lakes.contains(idx))
    }

    /// In bounds, not a lake, and unoccupied.
    pub fn is_vacant(&self, coord: Coord) -> bool {
        self.geometry
            .index(coord)
            .is_some_and(|idx| self.cell_at(idx) == Cell::Empty)
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0 as usize)
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        let idx = self.geometry.index(coord)?;
        self.grid[idx].and_then(|id| self.piece(id))
    }

    /// Every piece ever placed, captured ones included.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Pieces of `side` still on the board.
    pub fn live_pieces(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(move |p| p.side == side && !p.is_captured())
    }

    /// Captured pieces of `side`, in capture order.
    pub fn casualties(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.casualties[side.index()]
            .iter()
            .filter_map(|&id| self.piece(id))
    }

    /// Tally of live pieces per rank.
    pub fn remaining(&self, side: Side) -> RankCounts {
        self.live_pieces(side).map(|p| p.rank).collect()
    }

    /// Cells held by `side`.
    pub fn occupied(&self, side: Side) -> CellMask {
        self.occupied[side.index()]
    }

    pub fn lake_mask(&self) -> CellMask {
        self.lakes
    }

    pub fn is_adjacent(&self, a: Coord, b: Coord) -> Result<bool, BoardError> {
        self.geometry.is_adjacent(a, b)
    }

    pub fn cells_between(&self, a: Coord, b: Coord) -> Result<Vec<Coord>, BoardError> {
        self.geometry.cells_between(a, b)
    }

    /// Put a new piece on a vacant playable cell.
    pub(crate) fn add_piece(&mut self, side: Side, rank: Rank, idx: usize) -> PieceId {
        let id = PieceId(self.pieces.len() as u16);
        self.pieces.push(Piece {
            id,
            side,
            rank,
            revealed: false,
            location: Some(self.geometry.coord_of(idx)),
        });
        self.grid[idx] = Some(id);
        self.occupied[side.index()].insert(idx);
        id
    }

    /// Move a live piece onto a vacant cell.
    pub(crate) fn relocate(&mut self, id: PieceId, to: usize) {
        let to_coord = self.geometry.coord_of(to);
        let geometry = self.geometry;
        let Some(piece) = self.pieces.get_mut(id.0 as usize) else {
            return;
        };
        if let Some(from) = piece.location.and_then(|c| geometry.index(c)) {
            self.grid[from] = None;
            self.occupied[piece.side.index()].remove(from);
        }
        piece.location = Some(to_coord);
        self.grid[to] = Some(id);
        self.occupied[piece.side.index()].insert(to);
    }

    /// Take a piece off the board and record it as a casualty.
    pub(crate) fn capture(&mut self, id: PieceId) {
        let geometry = self.geometry;
        let Some(piece) = self.pieces.get_mut(id.0 as usize) else {
            return;
        };
        if let Some(at) = piece.location.take().and_then(|c| geometry.index(c)) {
            if self.grid[at] == Some(id) {
                self.grid[at] = None;
            }
            self.occupied[piece.side.index()].remove(at);
            self.casualties[piece.side.index()].push(id);
        }
    }

    pub(crate) fn reveal(&mut self, id: PieceId) {
        if let Some(piece) = self.pieces.get_mut(id.0 as usize) {
            piece.revealed = true;
        }
    }
}
