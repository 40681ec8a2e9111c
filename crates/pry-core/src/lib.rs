//! pry-core: Core game logic for the Pryhoda text adventure
//!
//! This crate contains the world model, the command interpreter and the
//! action handlers. It does no console or file I/O of its own; narration is
//! collected as messages on [`GameState`] and printed by the caller.

pub mod action;
pub mod combat;
pub mod monster;
pub mod names;
pub mod object;
pub mod player;
pub mod world;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use gameloop::{GameLoop, GameLoopResult, GameState};
pub use rng::GameRng;
