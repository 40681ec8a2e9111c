//! Rooms and their contents

use hashbrown::HashMap;

use crate::action::Direction;
use crate::monster::Npc;
use crate::names::{fold, same_name};
use crate::object::find_item;

/// A location in the world
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Folded room id, the key in the world map
    pub id: String,
    pub name: String,
    pub description: String,
    /// Folded exit token -> folded target room id
    exits: HashMap<String, String>,
    /// Items lying here, in the order they were dropped
    pub items: Vec<String>,
    pub npcs: Vec<Npc>,
}

impl Room {
    pub fn new(id: &str, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: fold(id),
            name: name.into(),
            description: description.into(),
            exits: HashMap::new(),
            items: Vec::new(),
            npcs: Vec::new(),
        }
    }

    /// Add an exit under both its long and short token
    pub fn add_exit(&mut self, dir: Direction, target: &str) {
        let target = fold(target);
        self.exits.insert(dir.name().to_string(), target.clone());
        self.exits.insert(dir.short().to_string(), target);
    }

    /// Builder form of [`Room::add_exit`]
    pub fn with_exit(mut self, dir: Direction, target: &str) -> Self {
        self.add_exit(dir, target);
        self
    }

    /// Builder: place an item
    pub fn with_item(mut self, item: &str) -> Self {
        self.items.push(item.to_string());
        self
    }

    /// Builder: place an NPC
    pub fn with_npc(mut self, npc: Npc) -> Self {
        self.npcs.push(npc);
        self
    }

    /// Target of the exit stored under `token`
    ///
    /// The token is matched as written (ignoring case), so only literal exit
    /// keys such as `north` or `n` resolve.
    pub fn exit(&self, token: &str) -> Option<&str> {
        self.exits.get(&fold(token)).map(String::as_str)
    }

    /// All exit targets, one per stored token
    pub fn exit_targets(&self) -> impl Iterator<Item = &str> {
        self.exits.values().map(String::as_str)
    }

    /// Exit names in long form, deduplicated and sorted
    pub fn exit_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .exits
            .keys()
            .map(|key| match Direction::from_token(key) {
                Some(dir) => dir.name().to_string(),
                None => key.clone(),
            })
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Remove an item by name and return its stored spelling
    pub fn take_item(&mut self, name: &str) -> Option<String> {
        find_item(&self.items, name).map(|i| self.items.remove(i))
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// NPCs with hp > 0
    pub fn live_npcs(&self) -> impl Iterator<Item = &Npc> {
        self.npcs.iter().filter(|n| n.is_alive())
    }

    /// A live NPC by name
    pub fn find_npc(&self, name: &str) -> Option<&Npc> {
        self.live_npcs().find(|n| same_name(&n.name, name))
    }

    /// A live NPC by name, mutably
    pub fn find_npc_mut(&mut self, name: &str) -> Option<&mut Npc> {
        self.npcs
            .iter_mut()
            .find(|n| n.is_alive() && same_name(&n.name, name))
    }

    /// Any NPC by name, dead or alive
    pub fn npc_mut(&mut self, name: &str) -> Option<&mut Npc> {
        self.npcs.iter_mut().find(|n| same_name(&n.name, name))
    }
}
