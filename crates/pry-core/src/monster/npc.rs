//! A single NPC

use hashbrown::HashSet;

use super::NpcRole;
use crate::names::fold;

/// A non-player character
///
/// A dead NPC (hp <= 0) stays in its room but is hidden from views and
/// cannot be talked to, given items or attacked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    /// Unique within its room
    pub name: String,
    pub role: NpcRole,
    pub hp: i32,
    /// Set by attacks, cleared by a liked gift
    pub hostile: bool,
    /// Folded item names this NPC is happy to receive
    likes: HashSet<String>,
}

impl Npc {
    pub fn new(name: impl Into<String>, role: NpcRole, hp: i32) -> Self {
        Self {
            name: name.into(),
            role,
            hp,
            hostile: false,
            likes: HashSet::new(),
        }
    }

    /// Builder: start hostile
    pub fn hostile(mut self) -> Self {
        self.hostile = true;
        self
    }

    /// Builder: add a liked item
    pub fn liking(mut self, item: &str) -> Self {
        self.likes.insert(fold(item));
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn likes(&self, item: &str) -> bool {
        self.likes.contains(&fold(item))
    }

    /// Liked items, in no particular order
    pub fn liked_items(&self) -> impl Iterator<Item = &str> {
        self.likes.iter().map(String::as_str)
    }

    /// What the NPC says when talked to
    pub fn talk(&self) -> String {
        if !self.is_alive() {
            return format!("{} мовчить... (він/вона вже не може відповідати).", self.name);
        }
        if self.hostile {
            return format!("{}: \"Не підходь ближче!\"", self.name);
        }
        format!("{}: \"{}\"", self.name, self.role.greeting())
    }

    /// `Name (Role)` as shown by `look`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likes_ignore_case() {
        let npc = Npc::new("Марко", NpcRole::Merchant, 15).liking("Яблуко");
        assert!(npc.likes("яблуко"));
        assert!(npc.likes("ЯБЛУКО"));
        assert!(!npc.likes("монета"));
    }

    #[test]
    fn test_talk_branches() {
        let mut npc = Npc::new("Карл", NpcRole::Sibling, 12);
        assert_eq!(npc.talk(), "Карл: \"Привіт! Якщо знайдеш монету — покажи.\"");

        npc.hostile = true;
        assert_eq!(npc.talk(), "Карл: \"Не підходь ближче!\"");

        npc.hp = 0;
        assert!(npc.talk().starts_with("Карл мовчить..."));
    }

    #[test]
    fn test_label() {
        let npc = Npc::new("Гоблін", NpcRole::from_label("Розбійник"), 10).hostile();
        assert_eq!(npc.label(), "Гоблін (Розбійник)");
        assert!(npc.hostile);
    }
}
