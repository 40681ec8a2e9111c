//! Combat system
//!
//! One exchange per `attack`: the player strikes, and a surviving NPC hits
//! back once. Attacking always makes the target hostile.

pub mod mhitu;
pub mod uhitm;

use crate::NO_SUCH_NPC;
use crate::action::ActionResult;
use crate::gameloop::GameState;

/// How one exchange went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackOutcome {
    pub target: String,
    /// Damage dealt by the player
    pub damage: i32,
    /// Target's hp dropped to zero or below
    pub defeated: bool,
    /// Damage dealt back to the player, if the target survived
    pub retaliation: Option<i32>,
}

/// Resolve one exchange against a live NPC in the current room
///
/// Returns `None` when no such NPC is here.
pub fn resolve_attack(state: &mut GameState, npc_name: &str) -> Option<AttackOutcome> {
    let power = state.player.power;
    let npc = state.world.current_room_mut().find_npc_mut(npc_name)?;

    npc.hostile = true;
    let damage = uhitm::player_damage(&mut state.rng, power);
    npc.hp = npc.hp.saturating_sub(damage);
    let target = npc.name.clone();
    let defeated = !npc.is_alive();

    let retaliation = if defeated {
        None
    } else {
        let hit = mhitu::retaliation_damage(&mut state.rng);
        state.player.take_damage(hit);
        Some(hit)
    };

    tracing::debug!(npc = %target, damage, defeated, ?retaliation, "attack");
    Some(AttackOutcome {
        target,
        damage,
        defeated,
        retaliation,
    })
}

pub fn do_attack(state: &mut GameState, npc_name: &str) -> ActionResult {
    let Some(outcome) = resolve_attack(state, npc_name) else {
        return ActionResult::Failed(NO_SUCH_NPC.to_string());
    };

    state.message(format!("Ти вдарив {} на {}.", outcome.target, outcome.damage));
    if outcome.defeated {
        state.message(format!("{} переможений.", outcome.target));
    }
    if let Some(hit) = outcome.retaliation {
        let line = format!(
            "{} відповів атакою на {}. Твоє HP: {}/{}",
            outcome.target, hit, state.player.hp, state.player.max_hp
        );
        state.message(line);
    }
    ActionResult::Success
}
