//! # werewolf-host
//!
//! An engine for hosting live, in-person Werewolf/Mafia games from a
//! single device. The device narrates the game; the players sit around a
//! table with physical role cards.
//!
//! ## Design Principles
//!
//! 1. **One owned aggregate**: the whole game lives in a [`Session`]
//!    value mutated only through the engine. No ambient global state.
//!
//! 2. **Phases are tagged enums**: every stage and sub-phase is an enum
//!    compared structurally, never a string.
//!
//! 3. **Presentation-free core**: the engine exposes plain state and
//!    transition operations. Rendering, text-to-speech, and audio cues
//!    hang off the [`EventSink`] observer and can never affect game state.
//!
//! ## Architecture
//!
//! - **Synchronous transitions**: each operation validates against the
//!   current state, mutates, appends to the event log, and runs the
//!   win-condition evaluator after any elimination. Rejected actions
//!   return an error and leave the session untouched.
//!
//! - **External clock**: the discussion countdown advances only through
//!   [`GameEngine::on_tick`], called by the host at 1 Hz. The engine
//!   never reads wall-clock time for game logic.
//!
//! ## Modules
//!
//! - `core`: roles, players, phases, the session aggregate
//! - `engine`: the phase controller, night/day state machines, evaluator
//! - `history`: the append-only event log and the narration sink
//! - `error`: the error taxonomy for rejected actions
//!
//! ## Example
//!
//! ```
//! use werewolf_host::{GameEngine, PlayerId, Role, Stage};
//!
//! let mut engine = GameEngine::new();
//! engine.initialize_game(6)?;
//!
//! let roles = [
//!     Role::Werewolf, Role::Werewolf, Role::Villager,
//!     Role::Villager, Role::Witch, Role::Seer,
//! ];
//! for (seat, role) in roles.into_iter().enumerate() {
//!     engine.assign_role(PlayerId::new(seat as u8 + 1), role)?;
//! }
//!
//! // All roles entered: the first night has begun.
//! assert_eq!(engine.session().stage(), Stage::Night);
//! # Ok::<(), werewolf_host::GameError>(())
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod history;

// Re-export commonly used types
pub use crate::core::{
    DayPhase, Faction, NightPhase, Player, PlayerId, Potions, Role, Roster, Session, Stage,
    Verdict, DISCUSSION_SECONDS, MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::engine::{evaluate, GameEngine, SeerReveal, WitchChoice};

pub use crate::error::GameError;

pub use crate::history::{Event, EventLog, EventSink};
