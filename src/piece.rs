//! Sides, ranks and piece instances.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;

use crate::board::Coord;

/// One of the two armies. Red holds the bottom rows and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Red, Side::Blue];

    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// Slot for per-side arrays.
    pub fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Blue => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Blue => write!(f, "Blue"),
        }
    }
}

/// Piece ranks ordered from weakest to strongest; Flag and Bomb come first
/// and have no combat strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    Flag,
    Bomb,
    Spy,
    Scout,
    Miner,
    Sergeant,
    Lieutenant,
    Captain,
    Major,
    Colonel,
    General,
    Marshal,
}

impl Rank {
    pub const COUNT: usize = 12;

    pub const ALL: [Rank; Rank::COUNT] = [
        Rank::Flag,
        Rank::Bomb,
        Rank::Spy,
        Rank::Scout,
        Rank::Miner,
        Rank::Sergeant,
        Rank::Lieutenant,
        Rank::Captain,
        Rank::Major,
        Rank::Colonel,
        Rank::General,
        Rank::Marshal,
    ];

    /// Slot for per-rank arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Combat strength, `None` for the non-combatant Flag and Bomb.
    pub fn strength(self) -> Option<u8> {
        match self {
            Rank::Flag | Rank::Bomb => None,
            Rank::Spy => Some(1),
            Rank::Scout => Some(2),
            Rank::Miner => Some(3),
            Rank::Sergeant => Some(4),
            Rank::Lieutenant => Some(5),
            Rank::Captain => Some(6),
            Rank::Major => Some(7),
            Rank::Colonel => Some(8),
            Rank::General => Some(9),
            Rank::Marshal => Some(10),
        }
    }

    /// Flag and Bomb never leave their cell.
    pub fn is_movable(self) -> bool {
        self.strength().is_some()
    }

    /// Scouts travel any distance along a clear row or column.
    pub fn moves_in_lines(self) -> bool {
        self == Rank::Scout
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Flag => "Flag",
            Rank::Bomb => "Bomb",
            Rank::Spy => "Spy",
            Rank::Scout => "Scout",
            Rank::Miner => "Miner",
            Rank::Sergeant => "Sergeant",
            Rank::Lieutenant => "Lieutenant",
            Rank::Captain => "Captain",
            Rank::Major => "Major",
            Rank::Colonel => "Colonel",
            Rank::General => "General",
            Rank::Marshal => "Marshal",
        }
    }

    /// Single character used by text boards.
    pub fn symbol(self) -> char {
        match self {
            Rank::Flag => 'F',
            Rank::Bomb => 'B',
            Rank::Spy => 'S',
            Rank::Scout => '2',
            Rank::Miner => '3',
            Rank::Sergeant => '4',
            Rank::Lieutenant => '5',
            Rank::Captain => '6',
            Rank::Major => '7',
            Rank::Colonel => '8',
            Rank::General => '9',
            Rank::Marshal => 'M',
        }
    }
}

/// Free function form of [`Rank::strength`].
pub fn rank_strength(rank: Rank) -> Option<u8> {
    rank.strength()
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a rank name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRank;

impl fmt::Display for UnknownRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rank")
    }
}

impl FromStr for Rank {
    type Err = UnknownRank;

    /// Accepts the rank name (any case) or its board symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Rank::ALL
            .iter()
            .copied()
            .find(|r| {
                r.name().eq_ignore_ascii_case(s)
                    || (s.chars().count() == 1
                        && s.chars().next().map(|c| c.to_ascii_uppercase()) == Some(r.symbol()))
            })
            .ok_or(UnknownRank)
    }
}

/// Count of pieces per rank, used for quotas and tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RankCounts([u8; Rank::COUNT]);

impl RankCounts {
    pub const fn new(counts: [u8; Rank::COUNT]) -> Self {
        Self(counts)
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|&n| n as usize).sum()
    }

    /// Non-zero entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::ALL
            .iter()
            .map(move |&r| (r, self.0[r.index()]))
            .filter(|&(_, n)| n > 0)
    }

    /// Add one piece of `rank`, saturating.
    pub fn bump(&mut self, rank: Rank) {
        let slot = &mut self.0[rank.index()];
        *slot = slot.saturating_add(1);
    }
}

impl Index<Rank> for RankCounts {
    type Output = u8;
    fn index(&self, rank: Rank) -> &u8 {
        &self.0[rank.index()]
    }
}

impl IndexMut<Rank> for RankCounts {
    fn index_mut(&mut self, rank: Rank) -> &mut u8 {
        &mut self.0[rank.index()]
    }
}

impl FromIterator<Rank> for RankCounts {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut counts = RankCounts::default();
        for rank in iter {
            counts.bump(rank);
        }
        counts
    }
}

/// Stable identity of a piece for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(pub u16);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece and its live status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub id: PieceId,
    pub side: Side,
    pub rank: Rank,
    /// Set once the piece has fought; its rank is public from then on.
    pub revealed: bool,
    /// `None` once captured.
    pub location: Option<Coord>,
}

impl Piece {
    pub fn is_captured(&self) -> bool {
        self.location.is_none()
    }
}
