//! The player character

use serde::{Deserialize, Serialize};

use super::init::ClassPreset;

/// Default name when character creation is skipped
pub const DEFAULT_NAME: &str = "Гравець";

/// Default class label when character creation is skipped
pub const DEFAULT_CLASS: &str = "Мандрівник";

/// Player stat block
///
/// This is saved and restored as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player name
    pub name: String,
    /// Class label, free text
    pub class: String,
    /// Current hit points
    pub hp: i32,
    /// Maximum hit points
    pub max_hp: i32,
    /// Attack strength
    pub power: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            class: DEFAULT_CLASS.to_string(),
            hp: 20,
            max_hp: 20,
            power: 5,
        }
    }
}

impl Player {
    /// Create a player from creation answers
    ///
    /// Blank answers keep the defaults. A class label matching one of the
    /// presets replaces hp, max hp and power.
    pub fn new(name: &str, class: &str) -> Self {
        let mut player = Self::default();
        let name = name.trim();
        if !name.is_empty() {
            player.name = name.to_string();
        }
        let class = class.trim();
        if !class.is_empty() {
            player.class = class.to_string();
        }
        if let Some(preset) = ClassPreset::for_label(&player.class) {
            preset.apply(&mut player);
        }
        player
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Restore hit points, never past the maximum
    pub fn heal(&mut self, amount: i32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// `Готово:` line printed after character creation
    pub fn creation_summary(&self) -> String {
        format!(
            "Готово: {} ({}), HP {}/{}, Power {}",
            self.name, self.class, self.hp, self.max_hp, self.power
        )
    }
}
