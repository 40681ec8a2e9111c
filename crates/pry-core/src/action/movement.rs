//! Looking around and moving between rooms

use crate::NO_EXITS;
use crate::action::ActionResult;
use crate::gameloop::GameState;
use crate::world::Room;

const NO_WAY: &str = "Туди не пройти.";

/// Lines printed by `look` for a room
pub fn describe_room(room: &Room) -> Vec<String> {
    let mut lines = vec![format!("\n[{}]", room.name), room.description.clone()];

    let exits = room.exit_names();
    lines.push(format!(
        "Виходи: {}",
        if exits.is_empty() {
            NO_EXITS.to_string()
        } else {
            exits.join(", ")
        }
    ));

    if !room.items.is_empty() {
        lines.push(format!("Предмети: {}", room.items.join(", ")));
    }

    let npcs: Vec<String> = room.live_npcs().map(|n| n.label()).collect();
    if !npcs.is_empty() {
        lines.push(format!("Персонажі: {}", npcs.join(", ")));
    }

    lines
}

/// Describe the current room
pub fn do_look(state: &mut GameState) -> ActionResult {
    let lines = describe_room(state.world.current_room());
    for line in lines {
        state.message(line);
    }
    ActionResult::NoTime
}

/// Follow the exit stored under `dir`, then look
pub fn do_go(state: &mut GameState, dir: &str) -> ActionResult {
    let Some(target) = state.world.current_room().exit(dir).map(str::to_string) else {
        return ActionResult::Failed(NO_WAY.to_string());
    };

    let from = state.world.current_id().to_string();
    if let Err(e) = state.world.set_current(&target) {
        tracing::warn!(%from, %target, error = %e, "exit leads nowhere");
        return ActionResult::Failed(NO_WAY.to_string());
    }
    tracing::debug!(%from, to = %target, "moved");

    do_look(state);
    ActionResult::Success
}
