//! Player character: stat block and class presets

mod init;
mod you;

pub use init::{CLASS_PRESETS, ClassPreset};
pub use you::Player;
