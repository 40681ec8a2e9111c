//! Command verb registry
//!
//! Every verb the interpreter understands, with its aliases and the help text
//! shown by `help`.

/// What a verb does, before its arguments are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Look,
    Go,
    Take,
    Drop,
    Inventory,
    Stats,
    Npcs,
    Talk,
    Give,
    Attack,
    Save,
    Load,
    Help,
    Quit,
}

/// Metadata for a command verb
#[derive(Debug, Clone)]
pub struct ExtendedCommand {
    /// Accepted spellings, lower case
    pub names: &'static [&'static str],
    pub verb: Verb,
    /// Left column of the help table
    pub synopsis: &'static str,
    /// Right column of the help table
    pub description: &'static str,
}

/// Registry of all command verbs, in help order
pub const EXTENDED_COMMANDS_LIST: &[ExtendedCommand] = &[
    ExtendedCommand {
        names: &["look", "l"],
        verb: Verb::Look,
        synopsis: "look / l",
        description: "оглянути локацію",
    },
    ExtendedCommand {
        names: &["go", "move"],
        verb: Verb::Go,
        synopsis: "go <dir>",
        description: "піти (north/south/east/west або n/s/e/w)",
    },
    ExtendedCommand {
        names: &["take", "get"],
        verb: Verb::Take,
        synopsis: "take <item>",
        description: "взяти предмет",
    },
    ExtendedCommand {
        names: &["drop"],
        verb: Verb::Drop,
        synopsis: "drop <item>",
        description: "викинути предмет",
    },
    ExtendedCommand {
        names: &["inv", "inventory", "i"],
        verb: Verb::Inventory,
        synopsis: "inv / i",
        description: "інвентар",
    },
    ExtendedCommand {
        names: &["stats"],
        verb: Verb::Stats,
        synopsis: "stats",
        description: "характеристики персонажа",
    },
    ExtendedCommand {
        names: &["npcs"],
        verb: Verb::Npcs,
        synopsis: "npcs",
        description: "список NPC у локації",
    },
    ExtendedCommand {
        names: &["talk"],
        verb: Verb::Talk,
        synopsis: "talk <npc>",
        description: "поговорити з NPC",
    },
    ExtendedCommand {
        names: &["give"],
        verb: Verb::Give,
        synopsis: "give <item> <npc>",
        description: "дати предмет NPC",
    },
    ExtendedCommand {
        names: &["attack"],
        verb: Verb::Attack,
        synopsis: "attack <npc>",
        description: "атакувати NPC",
    },
    ExtendedCommand {
        names: &["save"],
        verb: Verb::Save,
        synopsis: "save",
        description: "зберегти гру",
    },
    ExtendedCommand {
        names: &["load"],
        verb: Verb::Load,
        synopsis: "load",
        description: "завантажити збережену гру",
    },
    ExtendedCommand {
        names: &["help", "?"],
        verb: Verb::Help,
        synopsis: "help / ?",
        description: "довідка",
    },
    ExtendedCommand {
        names: &["exit", "quit"],
        verb: Verb::Quit,
        synopsis: "exit",
        description: "вихід",
    },
];

/// Find a verb by any of its spellings; `name` must already be lower case
pub fn lookup(name: &str) -> Option<&'static ExtendedCommand> {
    EXTENDED_COMMANDS_LIST
        .iter()
        .find(|cmd| cmd.names.iter().any(|n| *n == name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(lookup("l").map(|c| c.verb), Some(Verb::Look));
        assert_eq!(lookup("move").map(|c| c.verb), Some(Verb::Go));
        assert_eq!(lookup("get").map(|c| c.verb), Some(Verb::Take));
        assert_eq!(lookup("inventory").map(|c| c.verb), Some(Verb::Inventory));
        assert_eq!(lookup("?").map(|c| c.verb), Some(Verb::Help));
        assert_eq!(lookup("quit").map(|c| c.verb), Some(Verb::Quit));
        assert!(lookup("dance").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = EXTENDED_COMMANDS_LIST
            .iter()
            .flat_map(|c| c.names.iter().copied())
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
