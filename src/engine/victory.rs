//! Win-condition evaluator.

use crate::core::{Role, Roster, Verdict};

/// Check whether one faction has eliminated the other.
///
/// Pure function of the roster: `W` = living werewolves, `G` = living
/// players of any other role. Werewolves win when `G` is empty and at
/// least one wolf survives; the village wins when `W` is empty — even
/// with no other survivors, since no threat remains. A single night can
/// empty both sides (the last werewolf marks the witch while the witch
/// poisons the werewolf), so `W == 0 && G == 0` is a reachable input.
///
/// Must be invoked after every elimination-producing transition.
#[must_use]
pub fn evaluate(roster: &Roster) -> Option<Verdict> {
    let wolves = roster.living_count(Role::Werewolf);
    let others = roster.living().count() - wolves;

    if wolves == 0 {
        Some(Verdict::VillageVictory)
    } else if others == 0 {
        Some(Verdict::WerewolfVictory)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Roster};

    fn roster_with(roles: &[(u8, Role, bool)]) -> Roster {
        let mut roster = Roster::new(roles.len());
        for &(seat, role, alive) in roles {
            let player = roster.get_mut(PlayerId::new(seat)).unwrap();
            player.set_role(role);
            if !alive {
                player.eliminate();
            }
        }
        roster
    }

    #[test]
    fn test_werewolf_victory() {
        let roster = roster_with(&[(1, Role::Werewolf, true), (2, Role::Villager, false)]);
        assert_eq!(evaluate(&roster), Some(Verdict::WerewolfVictory));
    }

    #[test]
    fn test_village_victory() {
        let roster = roster_with(&[
            (1, Role::Werewolf, false),
            (2, Role::Villager, true),
            (3, Role::Seer, true),
        ]);
        assert_eq!(evaluate(&roster), Some(Verdict::VillageVictory));
    }

    #[test]
    fn test_game_continues() {
        let roster = roster_with(&[(1, Role::Werewolf, true), (2, Role::Villager, true)]);
        assert_eq!(evaluate(&roster), None);
    }

    #[test]
    fn test_no_survivors_is_a_village_victory() {
        // Mutual elimination can empty the whole table in one night; with
        // no werewolf left breathing, the village wins.
        let roster = roster_with(&[(1, Role::Werewolf, false), (2, Role::Witch, false)]);
        assert_eq!(evaluate(&roster), Some(Verdict::VillageVictory));
    }

    #[test]
    fn test_witch_and_seer_count_for_the_village() {
        let roster = roster_with(&[
            (1, Role::Werewolf, true),
            (2, Role::Witch, true),
            (3, Role::Seer, false),
        ]);
        assert_eq!(evaluate(&roster), None);
    }
}
