//! Help and welcome text

use super::extended::EXTENDED_COMMANDS_LIST;
use crate::action::ActionResult;
use crate::gameloop::GameState;

/// One-line command summary printed at start
pub const WELCOME: &str = "Команди: look, go <dir>, take <item>, drop <item>, inv, stats, talk <npc>, give <item> <npc>, attack <npc>, save, load, help, exit";

/// The `help` table, one line per command
pub fn help_lines() -> Vec<String> {
    let mut lines = vec!["Команди:".to_string()];
    lines.extend(
        EXTENDED_COMMANDS_LIST
            .iter()
            .map(|cmd| format!("  {:<30}— {}", cmd.synopsis, cmd.description)),
    );
    lines
}

pub fn do_help(state: &mut GameState) -> ActionResult {
    for line in help_lines() {
        state.message(line);
    }
    ActionResult::NoTime
}
