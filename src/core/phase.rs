//! Game stages and phase transition tables.
//!
//! The source of truth for "what comes next" at night. The night traversal
//! order is fixed:
//!
//! WerewolfConfirm -> {WerewolfAction | skip} -> WitchConfirm ->
//! {WitchAction | skip} -> SeerConfirm -> {SeerAction | skip} -> Done
//!
//! Phases are tagged enums compared structurally; there is no string
//! comparison anywhere in the engine.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Macro stage of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Pre-game: no roster yet, waiting for a player count.
    #[default]
    Setup,
    /// Roster built, roles being entered seat by seat.
    Assign,
    /// Night: role sub-phases run in traversal order.
    Night,
    /// Day: discussion, then the vote.
    Day,
    /// Terminal; the session verdict is set.
    End,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Setup => "setup",
            Stage::Assign => "assign",
            Stage::Night => "night",
            Stage::Day => "day",
            Stage::End => "end",
        };
        write!(f, "{}", name)
    }
}

/// Sub-phase of the day stage. Meaningful only while `Stage::Day`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPhase {
    #[default]
    Discussion,
    Vote,
}

impl std::fmt::Display for DayPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DayPhase::Discussion => "discussion",
            DayPhase::Vote => "vote",
        };
        write!(f, "{}", name)
    }
}

/// Sub-phase of the night stage. Meaningful only while `Stage::Night`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NightPhase {
    /// Night sub-state reset and idle; no night is running.
    #[default]
    Waiting,
    WerewolfConfirm,
    WerewolfAction,
    WitchConfirm,
    WitchAction,
    SeerConfirm,
    SeerAction,
    /// All role turns taken; resolution fires.
    Done,
}

impl NightPhase {
    /// Is this one of the `*Confirm` phases?
    #[must_use]
    pub const fn is_confirm(self) -> bool {
        matches!(
            self,
            NightPhase::WerewolfConfirm | NightPhase::WitchConfirm | NightPhase::SeerConfirm
        )
    }

    /// Is this one of the `*Action` phases?
    #[must_use]
    pub const fn is_action(self) -> bool {
        matches!(
            self,
            NightPhase::WerewolfAction | NightPhase::WitchAction | NightPhase::SeerAction
        )
    }

    /// The role that acts in this phase, for both the confirm and action
    /// halves of a role's turn.
    #[must_use]
    pub const fn acting_role(self) -> Option<Role> {
        match self {
            NightPhase::WerewolfConfirm | NightPhase::WerewolfAction => Some(Role::Werewolf),
            NightPhase::WitchConfirm | NightPhase::WitchAction => Some(Role::Witch),
            NightPhase::SeerConfirm | NightPhase::SeerAction => Some(Role::Seer),
            NightPhase::Waiting | NightPhase::Done => None,
        }
    }

    /// The paired action phase of a confirm phase.
    #[must_use]
    pub const fn action_phase(self) -> Option<NightPhase> {
        match self {
            NightPhase::WerewolfConfirm => Some(NightPhase::WerewolfAction),
            NightPhase::WitchConfirm => Some(NightPhase::WitchAction),
            NightPhase::SeerConfirm => Some(NightPhase::SeerAction),
            _ => None,
        }
    }

    /// The transition table: next stop after finishing (or skipping) a
    /// role's turn. `Waiting` and `Done` are fixed points.
    #[must_use]
    pub const fn next(self) -> NightPhase {
        match self {
            NightPhase::WerewolfConfirm | NightPhase::WerewolfAction => NightPhase::WitchConfirm,
            NightPhase::WitchConfirm | NightPhase::WitchAction => NightPhase::SeerConfirm,
            NightPhase::SeerConfirm | NightPhase::SeerAction => NightPhase::Done,
            NightPhase::Waiting | NightPhase::Done => self,
        }
    }
}

impl std::fmt::Display for NightPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NightPhase::Waiting => "waiting",
            NightPhase::WerewolfConfirm => "werewolf-confirm",
            NightPhase::WerewolfAction => "werewolf-action",
            NightPhase::WitchConfirm => "witch-confirm",
            NightPhase::WitchAction => "witch-action",
            NightPhase::SeerConfirm => "seer-confirm",
            NightPhase::SeerAction => "seer-action",
            NightPhase::Done => "done",
        };
        write!(f, "{}", name)
    }
}
