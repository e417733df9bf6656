//! Roles, factions, and game verdicts.
//!
//! ## Role
//!
//! The four roles of the base game. Every role except the werewolf belongs
//! to the village faction; the seer and witch differ from the villager only
//! in their night actions, not their faction.
//!
//! ## Verdict
//!
//! The terminal outcome of a game: one faction has eliminated the other.

use serde::{Deserialize, Serialize};

/// A player's role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Antagonist. Wins when no non-werewolf remains alive.
    Werewolf,
    /// Passive role with no night action.
    Villager,
    /// Holds a one-time save potion and a one-time poison potion.
    Witch,
    /// Privately learns one target's faction per night.
    Seer,
}

impl Role {
    /// The faction this role wins with.
    #[must_use]
    pub const fn faction(self) -> Faction {
        match self {
            Role::Werewolf => Faction::Werewolves,
            Role::Villager | Role::Witch | Role::Seer => Faction::Village,
        }
    }

    /// Iterate over all assignable roles, in the order the setup screen
    /// offers them.
    pub fn all() -> impl Iterator<Item = Role> {
        [Role::Werewolf, Role::Villager, Role::Witch, Role::Seer].into_iter()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Werewolf => "Werewolf",
            Role::Villager => "Villager",
            Role::Witch => "Witch",
            Role::Seer => "Seer",
        };
        write!(f, "{}", name)
    }
}

/// A win faction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Werewolves,
    Village,
}

/// Terminal outcome of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Every living player is a werewolf.
    WerewolfVictory,
    /// No werewolf remains alive.
    VillageVictory,
}

impl Verdict {
    /// The faction this verdict awards the game to.
    #[must_use]
    pub const fn winner(self) -> Faction {
        match self {
            Verdict::WerewolfVictory => Faction::Werewolves,
            Verdict::VillageVictory => Faction::Village,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::WerewolfVictory => write!(f, "the werewolves win"),
            Verdict::VillageVictory => write!(f, "the village wins"),
        }
    }
}
