//! Initial deployment: placement validation, incremental setup and the
//! pre-game session.

use alloc::vec::Vec;

use log::{debug, info};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::bitboard::CellMask;
use crate::board::Coord;
use crate::common::{SetupError, SetupErrorKind, StartError};
use crate::config::GameConfig;
use crate::game::{GameState, Phase};
use crate::piece::{Rank, RankCounts, Side};

/// A proposed deployment for one side: cell and rank pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    entries: Vec<(Coord, Rank)>,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, coord: Coord, rank: Rank) {
        self.entries.push((coord, rank));
    }

    pub fn entries(&self) -> &[(Coord, Rank)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Coord, Rank)> for Placement {
    fn from_iter<I: IntoIterator<Item = (Coord, Rank)>>(iter: I) -> Self {
        Placement {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A placement that passed [`validate_placement`] for `side`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidatedPlacement {
    side: Side,
    entries: Vec<(Coord, Rank)>,
}

impl ValidatedPlacement {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn entries(&self) -> &[(Coord, Rank)] {
        &self.entries
    }
}

/// Check a full placement: every cell in the side's zone, no cell reused,
/// and the ranks matching the quota exactly.
pub fn validate_placement(
    config: &GameConfig,
    side: Side,
    placement: &Placement,
) -> Result<ValidatedPlacement, SetupError> {
    let geometry = config.geometry();
    let zone = config.home_zone(side);
    let mut used = CellMask::new();
    let mut counts = RankCounts::default();

    for &(coord, rank) in placement.entries() {
        let idx = geometry
            .index(coord)
            .filter(|&idx| zone.contains(idx))
            .ok_or(SetupError::new(side, SetupErrorKind::ZoneViolation(coord)))?;
        if used.contains(idx) {
            return Err(SetupError::new(side, SetupErrorKind::DuplicateCell(coord)));
        }
        used.insert(idx);
        counts.bump(rank);
    }

    let quota = config.quota();
    for rank in Rank::ALL {
        if counts[rank] != quota[rank] {
            return Err(SetupError::new(
                side,
                SetupErrorKind::QuotaMismatch {
                    rank,
                    expected: quota[rank],
                    found: counts[rank],
                },
            ));
        }
    }

    Ok(ValidatedPlacement {
        side,
        entries: placement.entries.clone(),
    })
}

/// Incremental deployment for one side, checked piece by piece.
#[derive(Debug, Clone)]
pub struct SetupContext {
    side: Side,
    config: GameConfig,
    zone: CellMask,
    used: CellMask,
    remaining: RankCounts,
    placed: Vec<(Coord, Rank)>,
}

impl SetupContext {
    pub fn new(config: &GameConfig, side: Side) -> Self {
        SetupContext {
            side,
            zone: config.home_zone(side),
            used: CellMask::new(),
            remaining: *config.quota(),
            placed: Vec::new(),
            config: config.clone(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Cells this side may deploy into.
    pub fn zone(&self) -> Vec<Coord> {
        let geometry = self.config.geometry();
        self.zone.iter().map(|idx| geometry.coord_of(idx)).collect()
    }

    /// Pieces still to place, per rank.
    pub fn remaining(&self) -> RankCounts {
        self.remaining
    }

    pub fn placed(&self) -> &[(Coord, Rank)] {
        &self.placed
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.total() == 0
    }

    /// Place one piece.
    pub fn place(&mut self, coord: Coord, rank: Rank) -> Result<(), SetupError> {
        let side = self.side;
        let idx = self
            .config
            .geometry()
            .index(coord)
            .filter(|&idx| self.zone.contains(idx))
            .ok_or(SetupError::new(side, SetupErrorKind::ZoneViolation(coord)))?;
        if self.used.contains(idx) {
            return Err(SetupError::new(side, SetupErrorKind::DuplicateCell(coord)));
        }
        if self.remaining[rank] == 0 {
            let expected = self.config.quota()[rank];
            return Err(SetupError::new(
                side,
                SetupErrorKind::QuotaMismatch {
                    rank,
                    expected,
                    found: expected.saturating_add(1),
                },
            ));
        }
        self.put(idx, rank);
        Ok(())
    }

    /// Take back the piece at `coord`, returning its rank.
    pub fn remove(&mut self, coord: Coord) -> Option<Rank> {
        let pos = self.placed.iter().position(|&(c, _)| c == coord)?;
        let (_, rank) = self.placed.swap_remove(pos);
        if let Some(idx) = self.config.geometry().index(coord) {
            self.used.remove(idx);
        }
        self.remaining[rank] += 1;
        Some(rank)
    }

    /// Deploy every remaining piece on random free cells. An unplaced Flag
    /// goes to the back row when a cell there is free.
    pub fn random_fill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let geometry = self.config.geometry();
        let mut free: Vec<usize> = (self.zone - self.used).iter().collect();

        if self.remaining[Rank::Flag] > 0 {
            let back_row = self.config.back_row(self.side);
            let back: Vec<usize> = free
                .iter()
                .copied()
                .filter(|&idx| geometry.coord_of(idx).row == back_row)
                .collect();
            if let Some(&idx) = back.choose(rng) {
                free.retain(|&i| i != idx);
                self.put(idx, Rank::Flag);
            }
        }

        let mut pending: Vec<Rank> = self
            .remaining
            .iter()
            .flat_map(|(rank, n)| core::iter::repeat(rank).take(n as usize))
            .collect();
        pending.shuffle(rng);
        free.shuffle(rng);
        for (idx, rank) in free.into_iter().zip(pending) {
            self.put(idx, rank);
        }
    }

    pub fn into_placement(self) -> Placement {
        Placement {
            entries: self.placed,
        }
    }

    fn put(&mut self, idx: usize, rank: Rank) {
        self.used.insert(idx);
        self.remaining[rank] -= 1;
        self.placed
            .push((self.config.geometry().coord_of(idx), rank));
    }
}

/// A complete random deployment for `side`.
pub fn random_placement<R: Rng + ?Sized>(config: &GameConfig, side: Side, rng: &mut R) -> Placement {
    let mut ctx = SetupContext::new(config, side);
    ctx.random_fill(rng);
    ctx.into_placement()
}

/// Pre-game session collecting both sides' placements.
#[derive(Debug, Clone)]
pub struct SetupSession {
    config: GameConfig,
    placements: [Option<ValidatedPlacement>; 2],
    started: bool,
}

impl SetupSession {
    pub fn new(config: GameConfig) -> Self {
        SetupSession {
            config,
            placements: [None, None],
            started: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// `AwaitingSetup` until `start_game` succeeds, `InProgress` after.
    /// The returned [`GameState`] tracks its own phase from then on.
    pub fn phase(&self) -> Phase {
        if self.started {
            Phase::InProgress
        } else {
            Phase::AwaitingSetup
        }
    }

    /// Start building a placement for `side`.
    pub fn begin_setup(&self, side: Side) -> SetupContext {
        SetupContext::new(&self.config, side)
    }

    /// Validate and record `side`'s placement, replacing any earlier one.
    /// A rejected placement leaves the previous submission in place.
    pub fn submit_setup(
        &mut self,
        side: Side,
        placement: &Placement,
    ) -> Result<ValidatedPlacement, SetupError> {
        if self.started {
            return Err(SetupError::new(side, SetupErrorKind::SetupClosed));
        }
        let validated = validate_placement(&self.config, side, placement).map_err(|e| {
            debug!("rejected setup: {}", e);
            e
        })?;
        debug!("{} setup accepted", side);
        self.placements[side.index()] = Some(validated.clone());
        Ok(validated)
    }

    pub fn is_submitted(&self, side: Side) -> bool {
        self.placements[side.index()].is_some()
    }

    /// Build the opening position once both sides are deployed. Succeeds
    /// once per session.
    pub fn start_game(&mut self) -> Result<GameState, StartError> {
        if self.started {
            return Err(StartError::AlreadyStarted);
        }
        let [red, blue] = &self.placements;
        let red = red.as_ref().ok_or(StartError::IncompleteSetup {
            missing: Side::Red,
        })?;
        let blue = blue.as_ref().ok_or(StartError::IncompleteSetup {
            missing: Side::Blue,
        })?;
        let state = GameState::from_setup(self.config.clone(), red, blue);
        self.started = true;
        info!("starting game");
        Ok(state)
    }
}
