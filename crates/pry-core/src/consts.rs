//! Game-wide constants

/// Room the player starts in, and falls back to when a save names an unknown room
pub const START_ROOM: &str = "home";

/// Hit points restored by a liked gift
pub const GIFT_HEAL: i32 = 3;

/// Item handed out by a grateful NPC
pub const GIFT_REWARD_ITEM: &str = "ліхтарик";

/// Lowest retaliation damage an NPC deals
pub const RETALIATION_MIN: i32 = 2;

/// Highest retaliation damage an NPC deals
pub const RETALIATION_MAX: i32 = 5;

/// Shown by `look` when a room has no exits
pub const NO_EXITS: &str = "немає";

/// Printed when the player's hit points run out
pub const LOSS_MESSAGE: &str = "Ти програв. Персонаж без сил.";

/// Printed on `exit`/`quit`
pub const QUIT_MESSAGE: &str = "Вихід з гри.";

pub(crate) const NO_SUCH_NPC: &str = "Тут немає такого персонажа.";
