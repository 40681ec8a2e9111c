//! Read-only status commands

use crate::action::ActionResult;
use crate::gameloop::GameState;

pub fn show_inventory(state: &mut GameState) -> ActionResult {
    let line = state.inventory.describe();
    state.message(line);
    ActionResult::NoTime
}

pub fn show_stats(state: &mut GameState) -> ActionResult {
    let p = &state.player;
    let lines = [
        format!("{} ({})", p.name, p.class),
        format!("HP: {}/{}", p.hp, p.max_hp),
        format!("Power: {}", p.power),
    ];
    for line in lines {
        state.message(line);
    }
    ActionResult::NoTime
}

/// List live NPCs here with hp and hostility
pub fn show_npcs(state: &mut GameState) -> ActionResult {
    let lines: Vec<String> = state
        .world
        .current_room()
        .live_npcs()
        .map(|n| {
            format!(
                "- {} HP:{}{}",
                n.label(),
                n.hp,
                if n.hostile { " [ворожий]" } else { "" }
            )
        })
        .collect();

    if lines.is_empty() {
        state.message("Тут немає персонажів.");
    }
    for line in lines {
        state.message(line);
    }
    ActionResult::NoTime
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;
    use crate::player::Player;

    #[test]
    fn test_stats() {
        let mut state = GameState::with_player(Player::new("Оля", "воїн"), GameRng::new(1));
        show_stats(&mut state);
        assert_eq!(state.take_messages(), ["Оля (воїн)", "HP: 30/30", "Power: 7"]);
    }

    #[test]
    fn test_inventory() {
        let mut state = GameState::new(GameRng::new(1));
        show_inventory(&mut state);
        state.inventory.add("ключ");
        show_inventory(&mut state);
        assert_eq!(
            state.take_messages(),
            ["Інвентар порожній.", "Інвентар: ключ"]
        );
    }

    #[test]
    fn test_npcs() {
        let mut state = GameState::new(GameRng::new(1));
        state.world.set_current("street").unwrap();
        show_npcs(&mut state);
        assert_eq!(state.take_messages(), ["- Гоблін (Розбійник) HP:10 [ворожий]"]);

        state.world.current_room_mut().npc_mut("Гоблін").unwrap().hp = -2;
        show_npcs(&mut state);
        assert_eq!(state.take_messages(), ["Тут немає персонажів."]);
    }
}
