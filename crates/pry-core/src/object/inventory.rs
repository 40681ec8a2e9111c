//! Player inventory

use serde::{Deserialize, Serialize};

use crate::names::same_name;

/// Index of the first item matching `name`, ignoring case
pub fn find_item(items: &[String], name: &str) -> Option<usize> {
    items.iter().position(|item| same_name(item, name))
}

/// Ordered list of carried item names; duplicates allowed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        find_item(&self.items, name).is_some()
    }

    /// The stored spelling of an item, if carried
    pub fn find(&self, name: &str) -> Option<&str> {
        find_item(&self.items, name).map(|i| self.items[i].as_str())
    }

    pub fn add(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Remove the first match and return it with its stored casing
    pub fn remove(&mut self, name: &str) -> Option<String> {
        find_item(&self.items, name).map(|i| self.items.remove(i))
    }

    /// `Інвентар:` line
    pub fn describe(&self) -> String {
        if self.items.is_empty() {
            "Інвентар порожній.".to_string()
        } else {
            format!("Інвентар: {}", self.items.join(", "))
        }
    }
}
