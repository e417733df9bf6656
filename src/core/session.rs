//! The session aggregate.
//!
//! ## Session
//!
//! One game's complete state: stage, round, roster, night and day
//! sub-state, witch potions, discussion timer, verdict, and the event log.
//! Everything lives in this one owned aggregate; there is no ambient
//! global state. Mutation goes through the engine (crate-internal);
//! external callers get read accessors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::phase::{DayPhase, NightPhase, Stage};
use super::player::{PlayerId, Roster};
use super::role::{Role, Verdict};
use crate::history::EventLog;

/// Smallest legal table.
pub const MIN_PLAYERS: usize = 6;
/// Largest legal table.
pub const MAX_PLAYERS: usize = 12;
/// Length of the day discussion countdown, in seconds.
pub const DISCUSSION_SECONDS: u32 = 600;

/// The witch's two single-use potions.
///
/// Each flag is monotonic true -> false: once spent, a potion stays spent
/// for the rest of the game, across rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potions {
    /// Antidote: cancels the werewolves' pending elimination.
    pub save: bool,
    /// Poison: adds one extra elimination to the night.
    pub poison: bool,
}

impl Default for Potions {
    fn default() -> Self {
        Self {
            save: true,
            poison: true,
        }
    }
}

/// Complete state of one hosted game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub(crate) stage: Stage,
    pub(crate) round: u32,
    pub(crate) roster: Roster,
    pub(crate) day_phase: DayPhase,
    pub(crate) night_phase: NightPhase,
    /// The werewolves' marked target, revocable by the witch's save.
    pub(crate) pending_elimination: Option<PlayerId>,
    /// Extra night eliminations (witch poison).
    pub(crate) extra_eliminations: SmallVec<[PlayerId; 2]>,
    /// The single pending day ballot.
    pub(crate) pending_vote: Option<PlayerId>,
    pub(crate) potions: Potions,
    pub(crate) timer_seconds: u32,
    /// Set exactly when `stage == Stage::End`.
    pub(crate) verdict: Option<Verdict>,
    pub(crate) history: EventLog,
}

impl Session {
    /// A fresh session at the setup screen: no roster, no history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Setup,
            round: 1,
            roster: Roster::default(),
            day_phase: DayPhase::Discussion,
            night_phase: NightPhase::Waiting,
            pending_elimination: None,
            extra_eliminations: SmallVec::new(),
            pending_vote: None,
            potions: Potions::default(),
            timer_seconds: 0,
            verdict: None,
            history: EventLog::new(),
        }
    }

    // === Read accessors ===

    /// Current macro stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Current round, starting at 1. Increments at the start of each new
    /// night after the first.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The player roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Day sub-phase. Meaningful only while `stage() == Stage::Day`.
    #[must_use]
    pub fn day_phase(&self) -> DayPhase {
        self.day_phase
    }

    /// Night sub-phase. Meaningful only while `stage() == Stage::Night`.
    #[must_use]
    pub fn night_phase(&self) -> NightPhase {
        self.night_phase
    }

    /// The werewolves' marked target for tonight, if any.
    #[must_use]
    pub fn pending_elimination(&self) -> Option<PlayerId> {
        self.pending_elimination
    }

    /// Extra eliminations queued for tonight (witch poison).
    #[must_use]
    pub fn extra_eliminations(&self) -> &[PlayerId] {
        &self.extra_eliminations
    }

    /// The single pending day ballot, if one has been submitted.
    #[must_use]
    pub fn pending_vote(&self) -> Option<PlayerId> {
        self.pending_vote
    }

    /// Witch potion availability.
    #[must_use]
    pub fn potions(&self) -> Potions {
        self.potions
    }

    /// Remaining discussion seconds.
    #[must_use]
    pub fn timer_seconds(&self) -> u32 {
        self.timer_seconds
    }

    /// The verdict, once the game has ended.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// The event log, oldest first.
    #[must_use]
    pub fn history(&self) -> &EventLog {
        &self.history
    }

    /// At a night confirm phase, is the "yes, act" choice offered?
    ///
    /// It is offered exactly when the phase's role has a living holder;
    /// otherwise skip is the only valid response. Mirrors the conditional
    /// button set of the host screen. `false` outside confirm phases.
    #[must_use]
    pub fn night_act_offered(&self) -> bool {
        if self.stage != Stage::Night {
            return false;
        }
        match self.night_phase.acting_role() {
            Some(role) if self.night_phase.is_confirm() => self.roster.has_living(role),
            _ => false,
        }
    }

    /// Living players eligible as a target for `phase`, in seat order.
    ///
    /// Encodes the per-role target filters: werewolves may target any
    /// living player (themselves included), witch poison excludes the
    /// witch, the seer excludes the seer.
    pub fn eligible_targets(&self, phase: NightPhase) -> Vec<PlayerId> {
        let excluded = match phase {
            NightPhase::WitchAction => Some(Role::Witch),
            NightPhase::SeerAction => Some(Role::Seer),
            _ => None,
        };
        self.roster
            .living()
            .filter(|p| excluded.is_none() || p.role() != excluded)
            .map(|p| p.id)
            .collect()
    }

    // === Crate-internal state resets ===

    /// Reset everything for a new game of `count` players. The history
    /// starts empty; the caller appends the opening event.
    pub(crate) fn reset_for_game(&mut self, count: usize) {
        *self = Session::new();
        self.roster = Roster::new(count);
        self.stage = Stage::Assign;
    }

    /// Clear the night buffers and the day ballot for a new round.
    /// Potions persist for the whole game.
    pub(crate) fn clear_round_substate(&mut self) {
        self.night_phase = NightPhase::Waiting;
        self.pending_elimination = None;
        self.extra_eliminations.clear();
        self.pending_vote = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
