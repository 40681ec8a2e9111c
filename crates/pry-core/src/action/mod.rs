//! Player action system
//!
//! Implements player commands and actions.

pub mod chat;
pub mod extended;
pub mod give;
pub mod help;
pub mod info;
pub mod movement;
pub mod parser;
pub mod pickup;

use strum::{Display, EnumIter};

pub use parser::{CommandError, parse_command, split_args};

/// Player command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Movement
    Look,
    /// Raw direction token as typed
    Go(String),

    // Object manipulation
    Take(String),
    Drop(String),
    Give { item: String, npc: String },

    // Characters
    Talk(String),
    Attack(String),

    // Information
    Inventory,
    Stats,
    Npcs,
    Help,

    // Meta
    Save,
    Load,
    Quit,
}

/// Exit directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Long form, as listed by `look`
    pub const fn name(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// One-letter form
    pub const fn short(&self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::South => "s",
            Direction::East => "e",
            Direction::West => "w",
        }
    }

    /// Parse either form, ignoring case
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "n" | "north" => Some(Direction::North),
            "s" | "south" => Some(Direction::South),
            "e" | "east" => Some(Direction::East),
            "w" | "west" => Some(Direction::West),
            _ => None,
        }
    }

    /// Get the opposite direction
    pub const fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Action completed and changed the world
    Success,
    /// Action completed without changing anything
    NoTime,
    /// Action failed with message
    Failed(String),
    /// Game should be saved
    Save,
    /// Saved game should be restored
    Load,
    /// Game should quit
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_direction_forms() {
        for dir in Direction::iter() {
            assert_eq!(Direction::from_token(dir.name()), Some(dir));
            assert_eq!(Direction::from_token(dir.short()), Some(dir));
            assert_eq!(Direction::from_token(&dir.name().to_uppercase()), Some(dir));
            assert_eq!(dir.to_string(), dir.name());
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(Direction::from_token("up"), None);
    }
}
