//! Turning an input line into a [`Command`]

use thiserror::Error;

use super::extended::{self, Verb};
use super::{Command, Direction};

/// Why a line could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Невідома команда: {0}. Напиши help.")]
    UnknownCommand(String),

    #[error("{0}")]
    Usage(&'static str),
}

/// Split a line on whitespace, keeping double-quoted spans together
///
/// Quote characters are dropped and empty tokens are never produced. A line
/// with no tokens yields a single empty string.
pub fn split_args(input: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;

    for ch in input.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            continue;
        }

        if !in_quotes && ch.is_whitespace() {
            if !cur.is_empty() {
                result.push(std::mem::take(&mut cur));
            }
            continue;
        }

        cur.push(ch);
    }
    if !cur.is_empty() {
        result.push(cur);
    }

    if result.is_empty() {
        result.push(String::new());
    }
    result
}

/// Parse one input line
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let parts = split_args(line);
    let verb = parts[0].to_lowercase();
    if verb.is_empty() {
        return Ok(None);
    }
    let arg = parts[1..].join(" ");

    if Direction::from_token(&verb).is_some() {
        return Ok(Some(Command::Go(verb)));
    }

    let Some(entry) = extended::lookup(&verb) else {
        return Err(CommandError::UnknownCommand(verb));
    };

    let require = |usage: &'static str| -> Result<String, CommandError> {
        if arg.trim().is_empty() {
            Err(CommandError::Usage(usage))
        } else {
            Ok(arg.clone())
        }
    };

    let command = match entry.verb {
        Verb::Look => Command::Look,
        Verb::Go => Command::Go(require("Куди? Приклад: go north")?),
        Verb::Take => Command::Take(require("Що взяти? Приклад: take ключ")?),
        Verb::Drop => Command::Drop(require("Що викинути? Приклад: drop монета")?),
        Verb::Inventory => Command::Inventory,
        Verb::Stats => Command::Stats,
        Verb::Npcs => Command::Npcs,
        Verb::Talk => Command::Talk(require("З ким говорити? Приклад: talk Марко")?),
        Verb::Give => {
            if parts.len() < 3 {
                return Err(CommandError::Usage(
                    "Формат: give <предмет> <npc>. Приклад: give яблуко Марко",
                ));
            }
            Command::Give {
                item: parts[1].clone(),
                npc: parts[2..].join(" "),
            }
        }
        Verb::Attack => Command::Attack(require("Кого атакувати? Приклад: attack Гопник")?),
        Verb::Save => Command::Save,
        Verb::Load => Command::Load,
        Verb::Help => Command::Help,
        Verb::Quit => Command::Quit,
    };
    Ok(Some(command))
}
