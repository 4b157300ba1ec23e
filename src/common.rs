//! Error types shared by setup, move validation and game start.

use core::fmt;

use crate::board::Coord;
use crate::piece::{Rank, Side};

/// Which setup constraint a placement broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupErrorKind {
    /// Cell is off the board, a lake, or outside the side's home rows.
    ZoneViolation(Coord),
    /// Placed count of `rank` differs from its quota.
    QuotaMismatch { rank: Rank, expected: u8, found: u8 },
    /// Same cell used for two pieces.
    DuplicateCell(Coord),
    /// The game has already started; deployments are fixed.
    SetupClosed,
}

/// Rejected placement for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SetupError {
    pub side: Side,
    pub kind: SetupErrorKind,
}

impl SetupError {
    pub fn new(side: Side, kind: SetupErrorKind) -> Self {
        Self { side, kind }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SetupErrorKind::ZoneViolation(c) => {
                write!(f, "{} cannot place a piece at {}", self.side, c)
            }
            SetupErrorKind::QuotaMismatch {
                rank,
                expected,
                found,
            } => write!(
                f,
                "{} placed {} {} pieces, expected {}",
                self.side, found, rank, expected
            ),
            SetupErrorKind::DuplicateCell(c) => {
                write!(f, "{} placed more than one piece at {}", self.side, c)
            }
            SetupErrorKind::SetupClosed => {
                write!(f, "{} cannot change its setup after the game started", self.side)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SetupError {}

/// Reasons a move is refused. The game state is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    /// Source holds no piece of the side to move.
    NotYourPiece,
    /// Flags and bombs never move.
    ImmobilePiece,
    /// Off the board, a lake, the source itself, or out of the piece's reach.
    IllegalDestination,
    /// Destination holds a piece of the mover's own side.
    FriendlyFireAttempt,
    /// A Scout line move crosses an occupied cell or a lake.
    BlockedPath,
    /// The game has concluded.
    GameAlreadyOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotYourPiece => write!(f, "No piece of yours on that cell"),
            MoveError::ImmobilePiece => write!(f, "Flags and bombs cannot move"),
            MoveError::IllegalDestination => write!(f, "That piece cannot reach the destination"),
            MoveError::FriendlyFireAttempt => write!(f, "Cannot attack your own piece"),
            MoveError::BlockedPath => write!(f, "The path is blocked"),
            MoveError::GameAlreadyOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}

/// Failure to leave the setup phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum StartError {
    /// The named side has not submitted a valid placement.
    IncompleteSetup { missing: Side },
    /// `start_game` already succeeded for this session.
    AlreadyStarted,
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartError::IncompleteSetup { missing } => {
                write!(f, "{} has not submitted a valid setup", missing)
            }
            StartError::AlreadyStarted => write!(f, "The game has already started"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StartError {}
