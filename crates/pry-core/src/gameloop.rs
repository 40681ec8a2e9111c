//! Main game loop

use crate::action::{self, ActionResult, Command, parse_command};
use crate::combat;
use crate::object::Inventory;
use crate::player::Player;
use crate::rng::GameRng;
use crate::world::{World, default_world};
use crate::{LOSS_MESSAGE, QUIT_MESSAGE};

/// Result of a game loop tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Player's hit points ran out
    PlayerDied(String),
    /// Player quit
    PlayerQuit,
    /// Caller should write a save
    SaveRequested,
    /// Caller should restore the save
    LoadRequested,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Player character
    pub player: Player,

    /// Player inventory
    pub inventory: Inventory,

    /// Rooms and the player's location
    pub world: World,

    /// Random number generator
    pub rng: GameRng,

    /// Narration produced since the caller last drained it
    pub messages: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl GameState {
    /// Create a new game with a default player in the starting world
    pub fn new(rng: GameRng) -> Self {
        Self::with_player(Player::default(), rng)
    }

    /// Create a new game for a created character
    pub fn with_player(player: Player, rng: GameRng) -> Self {
        Self {
            player,
            inventory: Inventory::new(),
            world: default_world(),
            rng,
            messages: Vec::new(),
        }
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    /// Drain pending messages
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

/// Game loop controller
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consume the game loop and return the owned game state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Parse and run one input line
    ///
    /// Blank lines do nothing; parse errors become messages.
    pub fn execute_line(&mut self, line: &str) -> GameLoopResult {
        match parse_command(line) {
            Ok(Some(command)) => self.tick(command),
            Ok(None) => GameLoopResult::Continue,
            Err(e) => {
                tracing::debug!(%line, error = %e, "rejected input");
                self.state.message(e.to_string());
                GameLoopResult::Continue
            }
        }
    }

    /// Execute a single command
    pub fn tick(&mut self, command: Command) -> GameLoopResult {
        tracing::trace!(?command, "tick");
        let result = self.execute_command(command);

        match result {
            ActionResult::Success | ActionResult::NoTime => {}
            ActionResult::Failed(msg) => {
                self.state.message(msg);
                return GameLoopResult::Continue;
            }
            ActionResult::Save => return GameLoopResult::SaveRequested,
            ActionResult::Load => return GameLoopResult::LoadRequested,
            ActionResult::Quit => {
                self.state.message(QUIT_MESSAGE);
                return GameLoopResult::PlayerQuit;
            }
        }

        if self.state.player.is_dead() {
            tracing::info!(hp = self.state.player.hp, "player died");
            return GameLoopResult::PlayerDied(LOSS_MESSAGE.to_string());
        }
        GameLoopResult::Continue
    }

    fn execute_command(&mut self, command: Command) -> ActionResult {
        let state = &mut self.state;
        match command {
            Command::Look => action::movement::do_look(state),
            Command::Go(ref dir) => action::movement::do_go(state, dir),
            Command::Take(ref item) => action::pickup::do_take(state, item),
            Command::Drop(ref item) => action::pickup::do_drop(state, item),
            Command::Give { ref item, ref npc } => action::give::do_give(state, item, npc),
            Command::Talk(ref npc) => action::chat::do_talk(state, npc),
            Command::Attack(ref npc) => combat::do_attack(state, npc),
            Command::Inventory => action::info::show_inventory(state),
            Command::Stats => action::info::show_stats(state),
            Command::Npcs => action::info::show_npcs(state),
            Command::Help => action::help::do_help(state),
            Command::Save => ActionResult::Save,
            Command::Load => ActionResult::Load,
            Command::Quit => ActionResult::Quit,
        }
    }
}
