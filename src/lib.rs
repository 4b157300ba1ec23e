//! Rules engine for Stratego: board model, deployment checks, move
//! legality, combat, turn sequencing and win detection, with per-side views
//! that keep unrevealed opposing ranks hidden.
//!
//! ```
//! use stratego::{random_placement, GameConfig, SetupSession, Side};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut session = SetupSession::new(GameConfig::classic());
//! for side in Side::BOTH {
//!     let placement = random_placement(session.config(), side, &mut rng);
//!     session.submit_setup(side, &placement).unwrap();
//! }
//! let state = session.start_game().unwrap();
//! let mv = state.legal_moves()[0];
//! let (next, combat) = state.attempt_move(mv).unwrap();
//! assert!(combat.is_none());
//! assert_eq!(next.turn(), Side::Blue);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod combat;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod piece;
mod rules;
mod setup;
mod sim;
#[cfg(feature = "std")]
mod ui;
mod view;
mod win;

pub use bitboard::{BitBoard, BitBoardError, CellMask, SetBits};
pub use board::*;
pub use combat::{resolve, CombatOutcome, CombatResult, Combatant};
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use piece::*;
pub use rules::{check_move, destinations, has_legal_move, legal_moves, Move, MoveKind};
pub use setup::*;
pub use sim::*;
#[cfg(feature = "std")]
pub use ui::*;
pub use view::*;
pub use win::*;
