//! The day stage: discussion countdown, then the vote.
//!
//! The countdown is driven externally: the host environment calls
//! [`GameEngine::on_tick`] at roughly 1 Hz. The engine only ever reacts to
//! the counter reaching zero — never to wall-clock time — so missed or
//! irregular ticks merely stretch the discussion.
//!
//! Voting is a single ballot: the table agrees on one name, the host
//! selects it and confirms. Confirming eliminates the target, runs the
//! evaluator, and on no verdict rolls the game into the next round.

use tracing::debug;

use super::{victory, GameEngine};
use crate::core::{DayPhase, PlayerId, Session, Stage, DISCUSSION_SECONDS};
use crate::error::GameError;

impl GameEngine {
    /// Enter the day stage and start the discussion countdown.
    pub(crate) fn start_day(&mut self) {
        self.session.stage = Stage::Day;
        self.session.day_phase = DayPhase::Discussion;
        self.session.timer_seconds = DISCUSSION_SECONDS;
        debug!(round = self.session.round, "day begins");
        self.emit("Dawn breaks. Discussion begins.");
    }

    /// One second of discussion has passed.
    ///
    /// Decrements the countdown while the day discussion is running; on
    /// reaching zero, moves to the vote exactly once. In every other state
    /// this is a no-op, so the host may keep (or stop, or resume) its
    /// scheduler without corrupting the session.
    pub fn on_tick(&mut self) -> &Session {
        if self.session.stage == Stage::Day
            && self.session.day_phase == DayPhase::Discussion
            && self.session.timer_seconds > 0
        {
            self.session.timer_seconds -= 1;
            if self.session.timer_seconds == 0 {
                self.session.day_phase = DayPhase::Vote;
                self.emit("Discussion time is up; voting begins.");
            }
        }
        &self.session
    }

    /// Cut the discussion short and move to the vote.
    pub fn end_discussion(&mut self) -> Result<&Session, GameError> {
        if self.session.stage != Stage::Day || self.session.day_phase != DayPhase::Discussion {
            return Err(self.illegal("end_discussion"));
        }
        self.session.timer_seconds = 0;
        self.session.day_phase = DayPhase::Vote;
        self.emit("Discussion is over; voting begins.");
        Ok(&self.session)
    }

    /// Record the table's single ballot. Re-submitting replaces it.
    pub fn submit_vote(&mut self, target: PlayerId) -> Result<&Session, GameError> {
        if self.session.stage != Stage::Day || self.session.day_phase != DayPhase::Vote {
            return Err(self.illegal("submit_vote"));
        }
        let player = self
            .session
            .roster
            .get(target)
            .ok_or(GameError::UnknownPlayer(target))?;
        if !player.is_alive() {
            return Err(GameError::invalid_target("the target is already dead"));
        }

        self.session.pending_vote = Some(target);
        Ok(&self.session)
    }

    /// Confirm the pending ballot: eliminate the target and either finish
    /// the game or start the next round.
    pub fn confirm_vote(&mut self) -> Result<&Session, GameError> {
        if self.session.stage != Stage::Day || self.session.day_phase != DayPhase::Vote {
            return Err(self.illegal("confirm_vote"));
        }
        let target = self
            .session
            .pending_vote
            .ok_or(GameError::invalid_target("no ballot has been submitted"))?;

        self.session.pending_vote = None;
        if let Some(player) = self.session.roster.get_mut(target) {
            player.eliminate();
        }
        self.emit(format!("{} was voted out.", target));

        match victory::evaluate(&self.session.roster) {
            Some(verdict) => self.end_game(verdict),
            None => self.start_new_round(),
        }
        Ok(&self.session)
    }

    /// Roll into the next round: bump the counter, clear the night buffers
    /// and the ballot (potions persist), and fall into night.
    fn start_new_round(&mut self) {
        self.session.round += 1;
        self.session.clear_round_substate();
        debug!(round = self.session.round, "new round");
        self.emit(format!("Round {} begins.", self.session.round));
        self.start_night();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NightPhase, Role};

    /// Drive a 6-seat game through a peaceful first night into the day.
    fn day_one_engine() -> GameEngine {
        let mut engine = GameEngine::new();
        engine.initialize_game(6).unwrap();
        let roles = [
            Role::Werewolf,
            Role::Werewolf,
            Role::Villager,
            Role::Villager,
            Role::Witch,
            Role::Seer,
        ];
        for (i, role) in roles.iter().enumerate() {
            engine.assign_role(PlayerId::new(i as u8 + 1), *role).unwrap();
        }
        engine.confirm_night_action(false).unwrap();
        engine.confirm_night_action(false).unwrap();
        engine.confirm_night_action(false).unwrap();
        assert_eq!(engine.session().stage(), Stage::Day);
        engine
    }

    #[test]
    fn test_day_starts_with_full_timer() {
        let engine = day_one_engine();
        assert_eq!(engine.session().day_phase(), DayPhase::Discussion);
        assert_eq!(engine.session().timer_seconds(), DISCUSSION_SECONDS);
    }

    #[test]
    fn test_ticks_drive_discussion_to_vote_exactly_once() {
        let mut engine = day_one_engine();

        for _ in 0..DISCUSSION_SECONDS {
            engine.on_tick();
        }
        assert_eq!(engine.session().timer_seconds(), 0);
        assert_eq!(engine.session().day_phase(), DayPhase::Vote);

        let transitions = engine
            .history()
            .iter()
            .filter(|e| e.text.contains("voting begins"))
            .count();
        assert_eq!(transitions, 1);

        // Further ticks at zero change nothing.
        engine.on_tick();
        engine.on_tick();
        assert_eq!(engine.session().timer_seconds(), 0);
        assert_eq!(
            engine
                .history()
                .iter()
                .filter(|e| e.text.contains("voting begins"))
                .count(),
            1
        );
    }

    #[test]
    fn test_tick_is_a_noop_outside_discussion() {
        let mut engine = GameEngine::new();
        engine.initialize_game(6).unwrap();
        let before = engine.history().len();
        engine.on_tick();
        assert_eq!(engine.history().len(), before);
        assert_eq!(engine.session().timer_seconds(), 0);
    }

    #[test]
    fn test_end_discussion_cuts_the_timer() {
        let mut engine = day_one_engine();
        engine.on_tick();
        engine.end_discussion().unwrap();

        assert_eq!(engine.session().timer_seconds(), 0);
        assert_eq!(engine.session().day_phase(), DayPhase::Vote);

        let err = engine.end_discussion().unwrap_err();
        assert!(matches!(err, GameError::IllegalPhaseTransition { .. }));
    }

    #[test]
    fn test_vote_requires_living_target() {
        let mut engine = day_one_engine();
        engine.end_discussion().unwrap();

        assert_eq!(
            engine.submit_vote(PlayerId::new(9)).unwrap_err(),
            GameError::UnknownPlayer(PlayerId::new(9))
        );

        engine.submit_vote(PlayerId::new(1)).unwrap();
        assert_eq!(engine.session().pending_vote(), Some(PlayerId::new(1)));

        // Re-submitting replaces the ballot.
        engine.submit_vote(PlayerId::new(2)).unwrap();
        assert_eq!(engine.session().pending_vote(), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_confirm_without_ballot_is_rejected() {
        let mut engine = day_one_engine();
        engine.end_discussion().unwrap();

        let living_before = engine.session().roster().living().count();
        let err = engine.confirm_vote().unwrap_err();
        assert!(matches!(err, GameError::InvalidTarget { .. }));
        assert_eq!(engine.session().roster().living().count(), living_before);
        assert_eq!(engine.session().day_phase(), DayPhase::Vote);
    }

    #[test]
    fn test_vote_outside_vote_phase_is_rejected() {
        let mut engine = day_one_engine();
        let err = engine.submit_vote(PlayerId::new(1)).unwrap_err();
        assert!(matches!(err, GameError::IllegalPhaseTransition { .. }));
    }

    #[test]
    fn test_confirmed_vote_rolls_into_next_round() {
        let mut engine = day_one_engine();
        engine.end_discussion().unwrap();
        engine.submit_vote(PlayerId::new(3)).unwrap();
        engine.confirm_vote().unwrap();

        assert!(!engine
            .session()
            .roster()
            .get(PlayerId::new(3))
            .unwrap()
            .is_alive());
        assert_eq!(engine.session().round(), 2);
        assert_eq!(engine.session().stage(), Stage::Night);
        assert_eq!(engine.session().night_phase(), NightPhase::WerewolfConfirm);
        assert!(engine.session().pending_vote().is_none());
        assert!(engine.session().pending_elimination().is_none());
    }

    #[test]
    fn test_vote_can_end_the_game() {
        let mut engine = day_one_engine();
        engine.end_discussion().unwrap();

        // Vote out werewolf 1, then next round vote out werewolf 2.
        engine.submit_vote(PlayerId::new(1)).unwrap();
        engine.confirm_vote().unwrap();
        assert_eq!(engine.session().stage(), Stage::Night);

        engine.confirm_night_action(false).unwrap();
        engine.confirm_night_action(false).unwrap();
        engine.confirm_night_action(false).unwrap();
        engine.end_discussion().unwrap();
        engine.submit_vote(PlayerId::new(2)).unwrap();
        engine.confirm_vote().unwrap();

        assert_eq!(engine.session().stage(), Stage::End);
        assert_eq!(
            engine.session().verdict(),
            Some(crate::core::Verdict::VillageVictory)
        );
        assert!(engine
            .history()
            .iter()
            .any(|e| e.text.contains("the village wins")));
    }
}
