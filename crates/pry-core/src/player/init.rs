//! Starting stats by class

use super::Player;

/// Starting stats for a class keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassPreset {
    /// Matched as a substring of the lower-cased class label
    pub keyword: &'static str,
    pub hp: i32,
    pub power: i32,
}

/// Checked in order; the first keyword found in the label wins
pub const CLASS_PRESETS: &[ClassPreset] = &[
    ClassPreset {
        keyword: "воїн",
        hp: 30,
        power: 7,
    },
    ClassPreset {
        keyword: "розвідник",
        hp: 22,
        power: 6,
    },
    ClassPreset {
        keyword: "маг",
        hp: 18,
        power: 8,
    },
];

impl ClassPreset {
    /// Find the preset for a free-text class label
    pub fn for_label(label: &str) -> Option<&'static ClassPreset> {
        let label = label.trim().to_lowercase();
        CLASS_PRESETS.iter().find(|p| label.contains(p.keyword))
    }

    /// Overwrite hit points and power; a fresh character starts at full health
    pub fn apply(&self, player: &mut Player) {
        player.max_hp = self.hp;
        player.hp = self.hp;
        player.power = self.power;
    }
}
