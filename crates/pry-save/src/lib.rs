//! pry-save: Save/restore system for Pryhoda
//!
//! A save holds only the mutable part of a game: the player's stat block and
//! inventory, the current room, and for every room its items and the hp and
//! hostility of its NPCs. Room layout, NPC roles and liked items are not
//! saved; loading rebuilds the default world and lays the saved state over it.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pry_core::GameState;
use pry_core::object::Inventory;
use pry_core::player::Player;
use pry_core::world::{World, default_world};

/// Current save file format version
pub const SAVE_VERSION: u32 = 1;

/// File name used when no save path is configured
pub const SAVE_FILE_NAME: &str = "savegame.json";

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Save file not found")]
    NotFound,

    #[error("Incompatible save version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },
}

/// Saved state of one NPC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcState {
    pub name: String,
    pub hp: i32,
    pub hostile: bool,
}

/// Saved state of one room
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomState {
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub npcs: Vec<NpcState>,
}

/// Complete save file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Save format version
    pub version: u32,
    /// Seconds since the Unix epoch, informational only
    #[serde(default)]
    pub saved_at: u64,
    pub current_room: String,
    pub player: Player,
    pub inventory: Vec<String>,
    /// Keyed by room id
    pub rooms: BTreeMap<String, RoomState>,
}

/// Game state rebuilt from a snapshot, not yet applied
#[derive(Debug, Clone)]
pub struct Restored {
    pub player: Player,
    pub inventory: Inventory,
    pub world: World,
}

impl Restored {
    /// Replace the live state in one step
    ///
    /// The RNG and pending messages are kept.
    pub fn commit(self, state: &mut GameState) {
        state.player = self.player;
        state.inventory = self.inventory;
        state.world = self.world;
    }
}

impl Snapshot {
    /// Capture the mutable part of a game
    pub fn capture(state: &GameState) -> Self {
        let rooms = state
            .world
            .rooms()
            .map(|room| {
                let npcs = room
                    .npcs
                    .iter()
                    .map(|npc| NpcState {
                        name: npc.name.clone(),
                        hp: npc.hp,
                        hostile: npc.hostile,
                    })
                    .collect();
                (
                    room.id.clone(),
                    RoomState {
                        items: room.items.clone(),
                        npcs,
                    },
                )
            })
            .collect();

        Self {
            version: SAVE_VERSION,
            saved_at: current_timestamp(),
            current_room: state.world.current_id().to_string(),
            player: state.player.clone(),
            inventory: state.inventory.items().to_vec(),
            rooms,
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.version != SAVE_VERSION {
            return Err(SaveError::IncompatibleVersion {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }

    /// Rebuild the default world and lay this snapshot over it
    ///
    /// Rooms and NPCs the default world does not have are skipped. An unknown
    /// current room falls back to the starting room.
    pub fn restore(&self) -> Restored {
        let mut world = default_world();

        for (room_id, saved) in &self.rooms {
            let Some(room) = world.room_mut(room_id) else {
                tracing::warn!(room = %room_id, "save names an unknown room, skipping");
                continue;
            };
            room.items = saved.items.clone();
            for npc_state in &saved.npcs {
                match room.npc_mut(&npc_state.name) {
                    Some(npc) => {
                        npc.hp = npc_state.hp;
                        npc.hostile = npc_state.hostile;
                    }
                    None => {
                        tracing::warn!(
                            room = %room_id,
                            npc = %npc_state.name,
                            "save names an unknown NPC, skipping"
                        );
                    }
                }
            }
        }

        if let Err(e) = world.set_current(&self.current_room) {
            let start = world.current_id();
            tracing::warn!(error = %e, %start, "saved location is gone");
        }

        Restored {
            player: self.player.clone(),
            inventory: Inventory::from_items(self.inventory.clone()),
            world,
        }
    }
}

/// Save game state to a file, replacing any earlier save
///
/// Every write error is returned, including the ones only seen when the
/// buffer is flushed.
pub fn save_game(state: &GameState, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    let snapshot = Snapshot::capture(state);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &snapshot)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), "game saved");
    Ok(())
}

/// Read and validate a save without touching any game
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, SaveError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SaveError::NotFound,
        _ => SaveError::Io(e),
    })?;
    let reader = BufReader::new(file);
    let snapshot: Snapshot = serde_json::from_reader(reader)?;

    snapshot.validate()?;
    Ok(snapshot)
}

/// Load a save into `state`
///
/// The whole file is read and checked before anything is applied; on error
/// `state` is left as it was.
pub fn load_game(state: &mut GameState, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    let restored = read_snapshot(path)?.restore();
    restored.commit(state);
    tracing::info!(path = %path.display(), "game loaded");
    Ok(())
}

/// Check if a save file exists
pub fn save_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// `savegame.json` beside the running executable, or in the working
/// directory if the executable's location is unknown
pub fn default_save_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SAVE_FILE_NAME)
}

fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
