//! Picking up and dropping items

use crate::action::ActionResult;
use crate::gameloop::GameState;

/// Move an item from the current room into the inventory
pub fn do_take(state: &mut GameState, item: &str) -> ActionResult {
    let Some(found) = state.world.current_room_mut().take_item(item) else {
        return ActionResult::Failed("Тут такого немає.".to_string());
    };

    tracing::debug!(item = %found, room = %state.world.current_id(), "took item");
    state.message(format!("Ти взяв: {}", found));
    state.inventory.add(found);
    ActionResult::Success
}

/// Move an item from the inventory into the current room
pub fn do_drop(state: &mut GameState, item: &str) -> ActionResult {
    let Some(found) = state.inventory.remove(item) else {
        return ActionResult::Failed("У тебе цього немає.".to_string());
    };

    tracing::debug!(item = %found, room = %state.world.current_id(), "dropped item");
    state.message(format!("Ти викинув: {}", found));
    state.world.current_room_mut().add_item(found);
    ActionResult::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_take_moves_item() {
        let mut state = GameState::new(GameRng::new(5));
        assert_eq!(do_take(&mut state, "КЛЮЧ"), ActionResult::Success);
        assert_eq!(state.inventory.items(), ["ключ"]);
        assert!(state.world.current_room().items.is_empty());
        assert_eq!(state.take_messages(), ["Ти взяв: ключ"]);
    }

    #[test]
    fn test_take_missing() {
        let mut state = GameState::new(GameRng::new(5));
        assert_eq!(
            do_take(&mut state, "монета"),
            ActionResult::Failed("Тут такого немає.".to_string())
        );
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn test_drop_keeps_stored_casing() {
        let mut state = GameState::new(GameRng::new(5));
        state.inventory.add("Монета");
        assert_eq!(do_drop(&mut state, "монета"), ActionResult::Success);
        assert!(state.inventory.is_empty());
        assert_eq!(state.world.current_room().items, ["ключ", "Монета"]);
        assert_eq!(state.take_messages(), ["Ти викинув: Монета"]);
    }

    #[test]
    fn test_drop_missing() {
        let mut state = GameState::new(GameRng::new(5));
        assert_eq!(
            do_drop(&mut state, "ключ"),
            ActionResult::Failed("У тебе цього немає.".to_string())
        );
        assert_eq!(state.world.current_room().items, ["ключ"]);
    }
}
