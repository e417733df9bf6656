//! Error taxonomy for rejected actions.
//!
//! Every variant is a local validation failure returned to the caller;
//! none is fatal, and a rejected action leaves the session untouched.
//! Resubmitting after correcting the input is always safe. Violated
//! internal invariants are programming faults and assert instead.

use thiserror::Error;

use crate::core::{NightPhase, PlayerId, Stage};

/// A rejected action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The requested table size is outside 6..=12.
    #[error("player count must be between 6 and 12, got {count}")]
    InvalidPlayerCount { count: usize },

    /// No player with this id exists in the roster.
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// The player already has a role; roles are assigned exactly once.
    #[error("{0} already has a role")]
    AlreadyAssigned(PlayerId),

    /// The selected target is dead, forbidden for this action, or missing.
    #[error("invalid target: {reason}")]
    InvalidTarget { reason: &'static str },

    /// The witch's potion for this choice was already spent.
    #[error("the witch's potion has already been used")]
    PotionAlreadyUsed,

    /// The action does not belong to the current stage/phase.
    #[error("illegal in stage '{stage}' (night phase '{night_phase}'): {action}")]
    IllegalPhaseTransition {
        /// The rejected action, by name.
        action: &'static str,
        /// Stage at the time of the attempt.
        stage: Stage,
        /// Night phase at the time of the attempt.
        night_phase: NightPhase,
    },
}

impl GameError {
    pub(crate) fn invalid_target(reason: &'static str) -> Self {
        GameError::InvalidTarget { reason }
    }
}
