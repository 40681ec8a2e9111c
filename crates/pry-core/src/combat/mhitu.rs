//! NPC hits player

use crate::rng::GameRng;
use crate::{RETALIATION_MAX, RETALIATION_MIN};

/// Damage of a counterattack, uniform in 2..=5
pub fn retaliation_damage(rng: &mut GameRng) -> i32 {
    rng.range(RETALIATION_MIN, RETALIATION_MAX)
}
