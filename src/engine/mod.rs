//! The phase controller.
//!
//! `GameEngine` owns one [`Session`] and exposes the boundary operations a
//! presentation layer (or a test harness) drives. Every operation runs to
//! completion synchronously: validate against the current state, mutate,
//! append to the event log, notify narration sinks, and — after anything
//! that eliminates a player — run the win-condition evaluator.
//!
//! Rejected actions return a [`GameError`] and leave the session untouched.
//!
//! ## Modules
//!
//! - `night`: the night sub-phase state machine and night resolution
//! - `day`: the discussion timer and the vote
//! - `victory`: the pure win-condition evaluator

pub mod day;
pub mod night;
pub mod victory;

use tracing::debug;

use crate::core::{NightPhase, PlayerId, Role, Session, Stage, Verdict, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::GameError;
use crate::history::{Event, EventLog, EventSink};

pub use night::{SeerReveal, WitchChoice};
pub use victory::evaluate;

/// Drives one hosted game from setup to verdict.
pub struct GameEngine {
    session: Session,
    sinks: Vec<Box<dyn EventSink>>,
}

impl GameEngine {
    /// Create an engine at the setup screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            sinks: Vec::new(),
        }
    }

    /// Register a narration/audio sink. Sinks survive re-initialization.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Read-only view of the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read-only view of the event log, oldest first.
    #[must_use]
    pub fn history(&self) -> &EventLog {
        self.session.history()
    }

    // === Setup ===

    /// Start a fresh game of `count` players.
    ///
    /// Valid from any stage; all prior state including the history is
    /// reset. Fails with `InvalidPlayerCount` outside 6..=12, in which
    /// case nothing is touched.
    pub fn initialize_game(&mut self, count: usize) -> Result<&Session, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::InvalidPlayerCount { count });
        }

        self.session.reset_for_game(count);
        debug!(count, "game initialized");
        self.emit("The game begins. Round 1.");
        Ok(&self.session)
    }

    // === Role assignment ===

    /// Enter the physically dealt role for one seat.
    ///
    /// Each seat is assigned exactly once. When the last seat is filled
    /// the game leaves Assign and the first night begins.
    pub fn assign_role(&mut self, player_id: PlayerId, role: Role) -> Result<&Session, GameError> {
        if self.session.stage != Stage::Assign {
            return Err(self.illegal("assign_role"));
        }
        let player = self
            .session
            .roster
            .get_mut(player_id)
            .ok_or(GameError::UnknownPlayer(player_id))?;
        if player.role().is_some() {
            return Err(GameError::AlreadyAssigned(player_id));
        }
        player.set_role(role);

        if self.session.roster.fully_assigned() {
            self.emit("All roles are assigned. Everyone, close your eyes.");
            self.start_night();
        }
        Ok(&self.session)
    }

    // === Shared transitions ===

    /// Enter the night stage at the top of the confirm chain.
    pub(crate) fn start_night(&mut self) {
        self.session.stage = Stage::Night;
        self.session.night_phase = NightPhase::WerewolfConfirm;
        debug!(round = self.session.round, "night begins");
        self.emit("Night falls. Werewolves, open your eyes.");
    }

    /// Finish the game with a verdict.
    pub(crate) fn end_game(&mut self, verdict: Verdict) {
        self.session.stage = Stage::End;
        self.session.verdict = Some(verdict);
        debug!(round = self.session.round, %verdict, "game over");
        self.emit(format!("The game is over: {}.", verdict));
    }

    // === Event emission ===

    /// Append a broadcast event and notify sinks.
    pub(crate) fn emit(&mut self, text: impl Into<String>) {
        self.commit(Event::new(text));
    }

    /// Append an event carrying private info and notify sinks. The private
    /// part never enters the broadcast text.
    pub(crate) fn emit_private(
        &mut self,
        text: impl Into<String>,
        private_info: impl Into<String>,
    ) {
        self.commit(Event::with_private(text, private_info));
    }

    fn commit(&mut self, event: Event) {
        self.session.history.push(event.clone());
        // Notify only after the append is committed; sinks are
        // fire-and-forget and cannot touch game state.
        for sink in &mut self.sinks {
            sink.on_event(&event);
        }
    }

    /// Build the rejection for an action that does not belong to the
    /// current phase.
    pub(crate) fn illegal(&self, action: &'static str) -> GameError {
        GameError::IllegalPhaseTransition {
            action,
            stage: self.session.stage,
            night_phase: self.session.night_phase,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
