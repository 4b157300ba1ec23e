//! Combat resolution between an attacking and a defending piece.

use core::cmp::Ordering;
use core::fmt;

use log::debug;

use crate::board::{Board, Coord};
use crate::piece::{Piece, PieceId, Rank, Side};

/// Attacker/defender pairs where the attacker wins regardless of strength.
/// Only applies in this direction.
const OVERRIDES: [(Rank, Rank); 2] = [(Rank::Spy, Rank::Marshal), (Rank::Miner, Rank::Bomb)];

/// Who survives a combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatResult {
    AttackerWins,
    DefenderWins,
    BothDestroyed,
}

/// Decide a combat from the two ranks alone.
pub fn resolve(attacker: Rank, defender: Rank) -> CombatResult {
    if OVERRIDES.contains(&(attacker, defender)) {
        return CombatResult::AttackerWins;
    }
    match (attacker.strength(), defender) {
        (_, Rank::Bomb) => CombatResult::DefenderWins,
        (_, Rank::Flag) => CombatResult::AttackerWins,
        (Some(a), _) => match defender.strength().map(|d| a.cmp(&d)) {
            Some(Ordering::Greater) | None => CombatResult::AttackerWins,
            Some(Ordering::Less) => CombatResult::DefenderWins,
            Some(Ordering::Equal) => CombatResult::BothDestroyed,
        },
        // Immobile pieces never attack; treat as a failed attack.
        (None, _) => CombatResult::DefenderWins,
    }
}

/// Public identity of a combatant; its rank is disclosed by the fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: PieceId,
    pub side: Side,
    pub rank: Rank,
}

impl From<&Piece> for Combatant {
    fn from(p: &Piece) -> Self {
        Combatant {
            id: p.id,
            side: p.side,
            rank: p.rank,
        }
    }
}

/// Full record of one combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatOutcome {
    pub attacker: Combatant,
    pub defender: Combatant,
    /// Cell the defender stood on.
    pub at: Coord,
    pub result: CombatResult,
}

impl CombatOutcome {
    /// The surviving piece, if any.
    pub fn winner(&self) -> Option<Combatant> {
        match self.result {
            CombatResult::AttackerWins => Some(self.attacker),
            CombatResult::DefenderWins => Some(self.defender),
            CombatResult::BothDestroyed => None,
        }
    }

    pub fn flag_captured(&self) -> bool {
        self.defender.rank == Rank::Flag && self.result == CombatResult::AttackerWins
    }
}

impl fmt::Display for CombatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} attacks {} {} at {}: ",
            self.attacker.side, self.attacker.rank, self.defender.side, self.defender.rank, self.at
        )?;
        match self.result {
            CombatResult::AttackerWins => write!(f, "attacker wins"),
            CombatResult::DefenderWins => write!(f, "defender holds"),
            CombatResult::BothDestroyed => write!(f, "both destroyed"),
        }
    }
}

/// Fight it out on the board: reveal both pieces, remove the loser(s), and
/// move a victorious attacker onto the defender's cell.
pub(crate) fn engage(board: &mut Board, attacker: &Piece, defender: &Piece, at: usize) -> CombatOutcome {
    let result = resolve(attacker.rank, defender.rank);
    board.reveal(attacker.id);
    board.reveal(defender.id);
    match result {
        CombatResult::AttackerWins => {
            board.capture(defender.id);
            board.relocate(attacker.id, at);
        }
        CombatResult::DefenderWins => board.capture(attacker.id),
        CombatResult::BothDestroyed => {
            board.capture(attacker.id);
            board.capture(defender.id);
        }
    }
    let outcome = CombatOutcome {
        attacker: attacker.into(),
        defender: defender.into(),
        at: board.geometry().coord_of(at),
        result,
    };
    debug!("{}", outcome);
    outcome
}
