//! Items
//!
//! Items have no identity beyond their name string.

mod inventory;

pub use inventory::{Inventory, find_item};
