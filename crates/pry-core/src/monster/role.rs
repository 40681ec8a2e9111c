//! NPC roles and their dialogue

use std::fmt;

use strum::EnumString;

/// What an NPC does for a living; selects its greeting
///
/// Role labels are free text. Labels without a dedicated greeting are kept
/// verbatim in [`NpcRole::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
pub enum NpcRole {
    #[strum(serialize = "Продавець")]
    Merchant,
    #[strum(serialize = "Брат")]
    Sibling,
    #[strum(default)]
    Other(String),
}

impl NpcRole {
    /// Parse a role label; never fails
    pub fn from_label(label: &str) -> Self {
        label
            .parse()
            .unwrap_or_else(|_| NpcRole::Other(label.to_string()))
    }

    /// Label shown next to the NPC's name
    pub fn label(&self) -> &str {
        match self {
            NpcRole::Merchant => "Продавець",
            NpcRole::Sibling => "Брат",
            NpcRole::Other(label) => label,
        }
    }

    /// Greeting spoken to a player the NPC is not hostile to
    pub fn greeting(&self) -> &'static str {
        match self {
            NpcRole::Merchant => "Дивись товари. Якщо маєш яблуко — я люблю яблука.",
            NpcRole::Sibling => "Привіт! Якщо знайдеш монету — покажи.",
            NpcRole::Other(_) => "Привіт.",
        }
    }
}

impl fmt::Display for NpcRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
