//! The night sub-phase state machine.
//!
//! Traversal order is fixed by the table in [`NightPhase::next`]:
//! werewolves, then the witch, then the seer, each as a confirm/action
//! pair. A role with no living holder is skipped (the host still taps
//! through the confirm screen so the table learns nothing from timing).
//! Reaching `Done` resolves the night: the werewolf target — unless the
//! witch revoked it — plus any poison victims die at once, then the
//! evaluator decides between dawn and the end of the game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::{victory, GameEngine};
use crate::core::{NightPhase, PlayerId, Role, Session, Stage};
use crate::error::GameError;

/// The witch's choice at her action phase. The three are mutually
/// exclusive; any of them ends her turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WitchChoice {
    /// Spend the save potion to revoke the werewolves' pending kill.
    Save,
    /// Spend the poison potion on a living player.
    Poison(PlayerId),
    /// Keep both potions.
    Skip,
}

/// What the seer learned, returned to the caller for the private reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeerReveal {
    /// The inspected player.
    pub target: PlayerId,
    /// True when the target's role is Werewolf.
    pub is_werewolf: bool,
}

impl GameEngine {
    /// Answer the current confirm screen.
    ///
    /// `accept = true` while the phase's role has a living holder moves to
    /// the paired action phase and prompts that role. Declining — or
    /// accepting when the act choice is not offered (see
    /// [`Session::night_act_offered`]) — skips the role and advances the
    /// confirm chain.
    pub fn confirm_night_action(&mut self, accept: bool) -> Result<&Session, GameError> {
        if self.session.stage != Stage::Night {
            return Err(self.illegal("confirm_night_action"));
        }
        let (action, prompt) = match self.session.night_phase {
            NightPhase::WerewolfConfirm => {
                (NightPhase::WerewolfAction, "Werewolves, choose a victim.")
            }
            NightPhase::WitchConfirm => (
                NightPhase::WitchAction,
                "Witch, decide whether to use a potion.",
            ),
            NightPhase::SeerConfirm => (NightPhase::SeerAction, "Seer, choose a player to inspect."),
            _ => return Err(self.illegal("confirm_night_action")),
        };

        if accept && self.session.night_act_offered() {
            self.session.night_phase = action;
            self.emit(prompt);
        } else {
            self.advance_night();
        }
        Ok(&self.session)
    }

    /// The werewolves mark their victim.
    pub fn submit_werewolf_target(&mut self, target: PlayerId) -> Result<&Session, GameError> {
        if self.session.stage != Stage::Night
            || self.session.night_phase != NightPhase::WerewolfAction
        {
            return Err(self.illegal("submit_werewolf_target"));
        }
        let player = self
            .session
            .roster
            .get(target)
            .ok_or(GameError::UnknownPlayer(target))?;
        if !player.is_alive() {
            return Err(GameError::invalid_target("the target is already dead"));
        }

        self.session.pending_elimination = Some(target);
        self.emit("The werewolves have acted.");
        self.advance_night();
        Ok(&self.session)
    }

    /// The witch spends a potion, or keeps both.
    pub fn submit_witch_choice(&mut self, choice: WitchChoice) -> Result<&Session, GameError> {
        if self.session.stage != Stage::Night || self.session.night_phase != NightPhase::WitchAction
        {
            return Err(self.illegal("submit_witch_choice"));
        }

        match choice {
            WitchChoice::Save => {
                if !self.session.potions.save {
                    return Err(GameError::PotionAlreadyUsed);
                }
                if self.session.pending_elimination.is_none() {
                    return Err(GameError::invalid_target("no pending elimination to save"));
                }
                self.session.pending_elimination = None;
                self.session.potions.save = false;
            }
            WitchChoice::Poison(target) => {
                if !self.session.potions.poison {
                    return Err(GameError::PotionAlreadyUsed);
                }
                let player = self
                    .session
                    .roster
                    .get(target)
                    .ok_or(GameError::UnknownPlayer(target))?;
                if !player.is_alive() {
                    return Err(GameError::invalid_target("the target is already dead"));
                }
                if player.role() == Some(Role::Witch) {
                    return Err(GameError::invalid_target("poison cannot target the witch"));
                }
                self.session.extra_eliminations.push(target);
                self.session.potions.poison = false;
            }
            WitchChoice::Skip => {}
        }

        self.emit("The witch has acted.");
        self.advance_night();
        Ok(&self.session)
    }

    /// The seer inspects one player and privately learns their faction.
    ///
    /// The reveal goes back to the caller and onto the event's private
    /// info; the broadcast text never contains it.
    pub fn submit_seer_target(&mut self, target: PlayerId) -> Result<SeerReveal, GameError> {
        if self.session.stage != Stage::Night || self.session.night_phase != NightPhase::SeerAction
        {
            return Err(self.illegal("submit_seer_target"));
        }
        let player = self
            .session
            .roster
            .get(target)
            .ok_or(GameError::UnknownPlayer(target))?;
        if !player.is_alive() {
            return Err(GameError::invalid_target("the target is already dead"));
        }
        if player.role() == Some(Role::Seer) {
            return Err(GameError::invalid_target("the seer cannot inspect a seer"));
        }

        let is_werewolf = player.role() == Some(Role::Werewolf);
        let private = if is_werewolf {
            format!("{} is a werewolf", target)
        } else {
            format!("{} is not a werewolf", target)
        };
        self.emit_private("The seer has finished the inspection.", private);
        self.advance_night();
        Ok(SeerReveal {
            target,
            is_werewolf,
        })
    }

    /// Step the confirm chain and narrate the entry of the next role's
    /// turn. Reaching `Done` resolves the night.
    fn advance_night(&mut self) {
        let next = self.session.night_phase.next();
        self.session.night_phase = next;

        match next {
            NightPhase::WitchConfirm => {
                if self.session.roster.has_living(Role::Witch) {
                    self.emit("Witch, open your eyes.");
                } else {
                    self.emit("The witch is out of the game; skip the witch's turn.");
                }
            }
            NightPhase::SeerConfirm => {
                if self.session.roster.has_living(Role::Seer) {
                    self.emit("Seer, open your eyes.");
                } else {
                    self.emit("The seer is out of the game; skip the seer's turn.");
                }
            }
            NightPhase::Done => self.resolve_night(),
            _ => {}
        }
    }

    /// Apply the night's eliminations and decide what dawn brings.
    fn resolve_night(&mut self) {
        let mut victims: SmallVec<[PlayerId; 3]> = SmallVec::new();
        if let Some(id) = self.session.pending_elimination {
            victims.push(id);
        }
        for &id in &self.session.extra_eliminations {
            if !victims.contains(&id) {
                victims.push(id);
            }
        }

        debug!(round = self.session.round, count = victims.len(), "night resolves");

        if victims.is_empty() {
            self.emit("A peaceful night: no one was eliminated.");
        } else {
            for id in victims {
                if let Some(player) = self.session.roster.get_mut(id) {
                    player.eliminate();
                }
                self.emit(format!("{} was eliminated.", id));
            }
        }

        match victory::evaluate(&self.session.roster) {
            Some(verdict) => self.end_game(verdict),
            None => self.start_day(),
        }
    }
}
