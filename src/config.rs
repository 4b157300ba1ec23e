//! Board dimensions, lake layout, home zones and piece quotas.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::{BitBoardError, CellMask};
use crate::board::{Coord, Geometry};
use crate::piece::{Rank, RankCounts, Side};

pub const BOARD_SIZE: u8 = 10;

pub const CLASSIC_LAKES: [(u8, u8); 8] = [
    (4, 2),
    (4, 3),
    (5, 2),
    (5, 3),
    (4, 6),
    (4, 7),
    (5, 6),
    (5, 7),
];

/// Pieces per rank in `Rank::ALL` order.
pub const CLASSIC_QUOTA: RankCounts = RankCounts::new([1, 6, 1, 8, 5, 4, 4, 4, 3, 2, 1, 1]);

/// Total pieces per side in the classic setup.
pub const PIECES_PER_SIDE: usize = 1 + 6 + 1 + 8 + 5 + 4 + 4 + 4 + 3 + 2 + 1 + 1;

/// Inclusive band of rows a side deploys into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HomeRows {
    pub first: u8,
    pub last: u8,
}

impl HomeRows {
    pub const fn new(first: u8, last: u8) -> Self {
        Self { first, last }
    }

    pub fn contains(&self, row: u8) -> bool {
        self.first <= row && row <= self.last
    }

    fn overlaps(&self, other: &HomeRows) -> bool {
        self.first <= other.last && other.first <= self.last
    }
}

/// Errors detected while validating a [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Zero rows or columns.
    EmptyBoard,
    /// The grid does not fit a cell mask.
    TooManyCells(BitBoardError),
    LakeOutOfBounds(Coord),
    DuplicateLake(Coord),
    HomeRowsOutOfBounds(Side),
    HomeZonesOverlap,
    /// Each side needs exactly one flag.
    FlagCount(u8),
    /// Playable home cells cannot hold every piece.
    ZoneTooSmall { side: Side, capacity: usize, pieces: usize },
}

impl From<BitBoardError> for ConfigError {
    fn from(err: BitBoardError) -> Self {
        ConfigError::TooManyCells(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "Board must have at least one row and column"),
            ConfigError::TooManyCells(e) => write!(f, "Board too large: {}", e),
            ConfigError::LakeOutOfBounds(c) => write!(f, "Lake {} is off the board", c),
            ConfigError::DuplicateLake(c) => write!(f, "Lake {} listed twice", c),
            ConfigError::HomeRowsOutOfBounds(s) => write!(f, "{} home rows are off the board", s),
            ConfigError::HomeZonesOverlap => write!(f, "Home zones overlap"),
            ConfigError::FlagCount(n) => write!(f, "Quota must hold exactly one Flag, found {}", n),
            ConfigError::ZoneTooSmall {
                side,
                capacity,
                pieces,
            } => write!(
                f,
                "{} home zone has {} playable cells for {} pieces",
                side, capacity, pieces
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Static rules data for one game. Validated on construction, including
/// when deserialized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "RawConfig"))]
pub struct GameConfig {
    rows: u8,
    cols: u8,
    lakes: Vec<Coord>,
    home_rows: [HomeRows; 2],
    quota: RankCounts,
}

/// Wire form of [`GameConfig`] before validation.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawConfig {
    rows: u8,
    cols: u8,
    lakes: Vec<Coord>,
    home_rows: [HomeRows; 2],
    quota: RankCounts,
}

#[cfg(feature = "std")]
impl TryFrom<RawConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let [red_home, blue_home] = raw.home_rows;
        GameConfig::new(raw.rows, raw.cols, raw.lakes, red_home, blue_home, raw.quota)
    }
}

impl GameConfig {
    /// Build and validate a configuration.
    pub fn new(
        rows: u8,
        cols: u8,
        lakes: Vec<Coord>,
        red_home: HomeRows,
        blue_home: HomeRows,
        quota: RankCounts,
    ) -> Result<Self, ConfigError> {
        let config = GameConfig {
            rows,
            cols,
            lakes,
            home_rows: [red_home, blue_home],
            quota,
        };
        config.validate()?;
        Ok(config)
    }

    /// The standard 10×10 board with two lakes and 40 pieces per side.
    pub fn classic() -> Self {
        GameConfig {
            rows: BOARD_SIZE,
            cols: BOARD_SIZE,
            lakes: CLASSIC_LAKES
                .iter()
                .map(|&(row, col)| Coord::new(row, col))
                .collect(),
            home_rows: [HomeRows::new(6, 9), HomeRows::new(0, 3)],
            quota: CLASSIC_QUOTA,
        }
    }

    /// Re-run validation, e.g. after deserializing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        let geometry = self.geometry();
        CellMask::check_fits(geometry.cell_count())?;

        let mut seen = CellMask::new();
        for &lake in &self.lakes {
            let idx = geometry
                .index(lake)
                .ok_or(ConfigError::LakeOutOfBounds(lake))?;
            if seen.contains(idx) {
                return Err(ConfigError::DuplicateLake(lake));
            }
            seen.insert(idx);
        }

        for side in Side::BOTH {
            let rows = self.home_rows(side);
            if rows.first > rows.last || rows.last >= self.rows {
                return Err(ConfigError::HomeRowsOutOfBounds(side));
            }
        }
        if self.home_rows[0].overlaps(&self.home_rows[1]) {
            return Err(ConfigError::HomeZonesOverlap);
        }

        if self.quota[Rank::Flag] != 1 {
            return Err(ConfigError::FlagCount(self.quota[Rank::Flag]));
        }
        let pieces = self.quota.total();
        for side in Side::BOTH {
            let capacity = self.home_zone(side).count_ones();
            if capacity < pieces {
                return Err(ConfigError::ZoneTooSmall {
                    side,
                    capacity,
                    pieces,
                });
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.rows, self.cols)
    }

    pub fn lakes(&self) -> &[Coord] {
        &self.lakes
    }

    /// Lake cells as a mask.
    pub fn lake_mask(&self) -> CellMask {
        let geometry = self.geometry();
        self.lakes.iter().filter_map(|&c| geometry.index(c)).collect()
    }

    pub fn is_lake(&self, coord: Coord) -> bool {
        self.lakes.contains(&coord)
    }

    pub fn home_rows(&self, side: Side) -> HomeRows {
        self.home_rows[side.index()]
    }

    /// Playable cells a side may deploy into.
    pub fn home_zone(&self, side: Side) -> CellMask {
        let geometry = self.geometry();
        let rows = self.home_rows(side);
        let zone: CellMask = geometry
            .coords()
            .filter(|c| rows.contains(c.row))
            .filter_map(|c| geometry.index(c))
            .collect();
        zone - self.lake_mask()
    }

    /// The home row farthest from the opponent.
    pub fn back_row(&self, side: Side) -> u8 {
        let own = self.home_rows(side);
        let other = self.home_rows(side.opponent());
        if own.first > other.last {
            own.last
        } else {
            own.first
        }
    }

    pub fn quota(&self) -> &RankCounts {
        &self.quota
    }

    pub fn pieces_per_side(&self) -> usize {
        self.quota.total()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
