//! Core state types: roles, players, phases, and the session aggregate.
//!
//! Everything here is plain data. The transition rules that drive it live
//! in [`crate::engine`].

pub mod phase;
pub mod player;
pub mod role;
pub mod session;

pub use phase::{DayPhase, NightPhase, Stage};
pub use player::{Player, PlayerId, Roster};
pub use role::{Faction, Role, Verdict};
pub use session::{Potions, Session, DISCUSSION_SECONDS, MAX_PLAYERS, MIN_PLAYERS};
