//! The fixed starting world

use super::{Room, World};
use crate::START_ROOM;
use crate::action::Direction;
use crate::monster::{Npc, NpcRole};

/// Build the three-room world in its initial state
///
/// home <-> street <-> shop, each room seeded with one item and one NPC.
/// Called at startup and again on every load, which overlays saved state
/// onto a fresh copy.
pub fn default_world() -> World {
    let home = Room::new(
        "home",
        "Дім",
        "Ти вдома, нічого так заспокоює як бути у своєму домі.",
    )
    .with_item("ключ")
    .with_exit(Direction::North, "street")
    .with_npc(Npc::new("Карл", NpcRole::Sibling, 12).liking("монета"));

    let street = Room::new(
        "street",
        "Вулиця",
        "Кажуть що сьогодні буде особливо холодно на вулиці.",
    )
    .with_item("монета")
    .with_exit(Direction::South, "home")
    .with_exit(Direction::East, "shop")
    .with_npc(Npc::new("Гоблін", NpcRole::from_label("Розбійник"), 10).hostile());

    let shop = Room::new(
        "shop",
        "Крамниця",
        "Маленька крамниця. Продавець мовчить. Є полиці.",
    )
    .with_item("яблуко")
    .with_exit(Direction::West, "street")
    .with_npc(Npc::new("Марко", NpcRole::Merchant, 15).liking("яблуко"));

    World::from_rooms_unchecked(vec![home, street, shop], START_ROOM)
}
