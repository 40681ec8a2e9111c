//! Giving items to NPCs

use crate::action::ActionResult;
use crate::gameloop::GameState;
use crate::{GIFT_HEAL, GIFT_REWARD_ITEM, NO_SUCH_NPC};

/// What a grateful NPC hands back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftReward {
    /// Player healed by [`GIFT_HEAL`], capped at max hp
    Healed,
    /// [`GIFT_REWARD_ITEM`] added to the inventory
    Item,
}

/// Hand an inventory item to a live NPC in the current room
///
/// The item leaves the inventory whatever the NPC thinks of it. A liked item
/// makes the NPC friendly and earns a reward; any other item is simply gone.
pub fn do_give(state: &mut GameState, item: &str, npc_name: &str) -> ActionResult {
    let Some(npc) = state.world.current_room_mut().find_npc_mut(npc_name) else {
        return ActionResult::Failed(NO_SUCH_NPC.to_string());
    };

    let Some(given) = state.inventory.remove(item) else {
        return ActionResult::Failed("У тебе немає цього предмета.".to_string());
    };

    if !npc.likes(&given) {
        tracing::debug!(npc = %npc.name, item = %given, "gift refused, item lost");
        let line = format!(
            "{}: \"Ем... навіщо мені це?\" (предмет загубився десь у світі)",
            npc.name
        );
        state.message(line);
        return ActionResult::Success;
    }

    npc.hostile = false;
    let thanks = format!("{}: \"О, дякую! Тепер я до тебе добре ставлюсь.\"", npc.name);
    tracing::debug!(npc = %npc.name, item = %given, "gift accepted");
    state.message(thanks);

    match roll_reward(state) {
        GiftReward::Healed => {
            state.player.heal(GIFT_HEAL);
            state.message(format!("Ти почуваєшся краще (+{} HP).", GIFT_HEAL));
        }
        GiftReward::Item => {
            state.inventory.add(GIFT_REWARD_ITEM);
            state.message(format!("Тобі дали подарунок: {}.", GIFT_REWARD_ITEM));
        }
    }
    ActionResult::Success
}

fn roll_reward(state: &mut GameState) -> GiftReward {
    if state.rng.coin_flip() {
        GiftReward::Healed
    } else {
        GiftReward::Item
    }
}
