//! Case-insensitive names
//!
//! Room ids, exit tokens, item names and NPC names are all compared without
//! regard to case. Keys are folded to lower case when stored and when looked up.

/// Fold a name to its lookup key
pub fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// Compare two names ignoring case
pub fn same_name(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
