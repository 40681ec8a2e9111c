//! Player hits NPC

use crate::rng::GameRng;

/// Damage of one player blow: uniform in `power-1..=power+1`, at least 1
///
/// The band is clamped to the `i32` range.
pub fn player_damage(rng: &mut GameRng, power: i32) -> i32 {
    rng.range(power.saturating_sub(1), power.saturating_add(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_weak_player_still_hits() {
        let mut rng = GameRng::new(1);
        for _ in 0..100 {
            assert_eq!(player_damage(&mut rng, 0), 1);
            assert!(player_damage(&mut rng, 1) >= 1);
        }
    }

    #[test]
    fn test_extreme_power() {
        let mut rng = GameRng::new(5);
        for _ in 0..100 {
            assert!(player_damage(&mut rng, i32::MAX) >= i32::MAX - 1);
            assert_eq!(player_damage(&mut rng, i32::MIN), 1);
        }
    }

    proptest! {
        #[test]
        fn damage_within_power_band(seed in any::<u64>(), power in -5i32..50) {
            let mut rng = GameRng::new(seed);
            let dmg = player_damage(&mut rng, power);
            prop_assert!(dmg >= 1);
            prop_assert!(dmg >= power - 1);
            prop_assert!(dmg <= (power + 1).max(1));
        }
    }
}
