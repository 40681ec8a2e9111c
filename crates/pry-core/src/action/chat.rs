//! Talking to NPCs

use crate::NO_SUCH_NPC;
use crate::action::ActionResult;
use crate::gameloop::GameState;

/// Say hello to a live NPC in the current room
pub fn do_talk(state: &mut GameState, npc_name: &str) -> ActionResult {
    let Some(line) = state.world.current_room().find_npc(npc_name).map(|n| n.talk()) else {
        return ActionResult::Failed(NO_SUCH_NPC.to_string());
    };
    state.message(line);
    ActionResult::NoTime
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_talk_to_sibling() {
        let mut state = GameState::new(GameRng::new(9));
        assert_eq!(do_talk(&mut state, "карл"), ActionResult::NoTime);
        assert_eq!(
            state.take_messages(),
            ["Карл: \"Привіт! Якщо знайдеш монету — покажи.\""]
        );
    }

    #[test]
    fn test_talk_to_hostile() {
        let mut state = GameState::new(GameRng::new(9));
        state.world.set_current("street").unwrap();
        do_talk(&mut state, "Гоблін");
        assert_eq!(state.take_messages(), ["Гоблін: \"Не підходь ближче!\""]);
    }

    #[test]
    fn test_talk_to_merchant() {
        let mut state = GameState::new(GameRng::new(9));
        state.world.set_current("shop").unwrap();
        do_talk(&mut state, "Марко");
        assert_eq!(
            state.take_messages(),
            ["Марко: \"Дивись товари. Якщо маєш яблуко — я люблю яблука.\""]
        );
    }

    #[test]
    fn test_dead_npc_cannot_be_found() {
        let mut state = GameState::new(GameRng::new(9));
        state.world.current_room_mut().npc_mut("Карл").unwrap().hp = 0;
        assert_eq!(
            do_talk(&mut state, "Карл"),
            ActionResult::Failed(NO_SUCH_NPC.to_string())
        );
    }

    #[test]
    fn test_npc_in_other_room() {
        let mut state = GameState::new(GameRng::new(9));
        assert!(matches!(do_talk(&mut state, "Марко"), ActionResult::Failed(_)));
    }
}
