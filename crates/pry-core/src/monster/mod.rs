//! Non-player characters

mod npc;
mod role;

pub use npc::Npc;
pub use role::NpcRole;
