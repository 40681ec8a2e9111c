//! World model: rooms, exits and the player's location

mod build;
pub mod options;
mod room;

use hashbrown::HashMap;
use thiserror::Error;

use crate::names::fold;

pub use build::default_world;
pub use options::{GameOptions, OptionsError};
pub use room::Room;

/// Topology errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    #[error("exit from {room} leads to unknown room {target}")]
    DanglingExit { room: String, target: String },
}

/// All rooms plus the current location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    rooms: HashMap<String, Room>,
    current: String,
}

impl World {
    /// Build a world and check that the start room and every exit exist
    pub fn from_rooms(rooms: Vec<Room>, start: &str) -> Result<Self, WorldError> {
        let world = Self::from_rooms_unchecked(rooms, start);
        world.validate()?;
        Ok(world)
    }

    pub(crate) fn from_rooms_unchecked(rooms: Vec<Room>, start: &str) -> Self {
        Self {
            rooms: rooms.into_iter().map(|r| (r.id.clone(), r)).collect(),
            current: fold(start),
        }
    }

    /// Check the location and exit invariants
    pub fn validate(&self) -> Result<(), WorldError> {
        if !self.rooms.contains_key(&self.current) {
            return Err(WorldError::UnknownRoom(self.current.clone()));
        }
        for room in self.rooms.values() {
            for target in room.exit_targets() {
                if !self.rooms.contains_key(target) {
                    return Err(WorldError::DanglingExit {
                        room: room.id.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(&fold(id))
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(&fold(id))
    }

    pub fn contains_room(&self, id: &str) -> bool {
        self.rooms.contains_key(&fold(id))
    }

    /// Room ids in sorted order
    pub fn room_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.rooms.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn current_id(&self) -> &str {
        &self.current
    }

    pub fn current_room(&self) -> &Room {
        &self.rooms[&self.current]
    }

    pub fn current_room_mut(&mut self) -> &mut Room {
        let current = &self.current;
        self.rooms
            .get_mut(current)
            .unwrap_or_else(|| unreachable!("current room {current} is always a world key"))
    }

    /// Move the player; unknown ids are rejected and the location is kept
    pub fn set_current(&mut self, id: &str) -> Result<(), WorldError> {
        let id = fold(id);
        if !self.rooms.contains_key(&id) {
            return Err(WorldError::UnknownRoom(id));
        }
        self.current = id;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Direction;

    #[test]
    fn test_from_rooms_rejects_unknown_start() {
        let rooms = vec![Room::new("a", "A", "")];
        assert_eq!(
            World::from_rooms(rooms, "b"),
            Err(WorldError::UnknownRoom("b".to_string()))
        );
    }

    #[test]
    fn test_from_rooms_rejects_dangling_exit() {
        let rooms = vec![Room::new("a", "A", "").with_exit(Direction::North, "nowhere")];
        assert!(matches!(
            World::from_rooms(rooms, "a"),
            Err(WorldError::DanglingExit { .. })
        ));
    }

    #[test]
    fn test_room_lookup_ignores_case() {
        let world = World::from_rooms(vec![Room::new("Home", "Дім", "")], "HOME").unwrap();
        assert_eq!(world.current_id(), "home");
        assert!(world.room("HoMe").is_some());
        assert!(world.contains_room("home"));
    }

    #[test]
    fn test_set_current() {
        let rooms = vec![Room::new("a", "A", ""), Room::new("b", "B", "")];
        let mut world = World::from_rooms(rooms, "a").unwrap();

        world.set_current("B").unwrap();
        assert_eq!(world.current_room().name, "B");

        assert!(world.set_current("c").is_err());
        assert_eq!(world.current_id(), "b");
    }
}
