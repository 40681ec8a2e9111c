//! Interactive session over a line reader and a writer

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use pry_core::action::Command;
use pry_core::action::help::WELCOME;
use pry_core::player::Player;
use pry_core::world::GameOptions;
use pry_core::{GameLoop, GameLoopResult, GameRng, GameState, LOSS_MESSAGE};
use pry_save::{SaveError, default_save_path, load_game, save_game};

const CREATION_HEADER: &str = "\nСтворення персонажа:";
const NAME_PROMPT: &str = "Ім'я: ";
const CLASS_PROMPT: &str = "Клас (воїн/розвідник/маг) або будь-який текст: ";
const PROMPT: &str = "\n> ";

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `exit` or `quit`
    Quit,
    /// Player's hp ran out
    Died,
    /// Input closed
    EndOfInput,
}

/// One play-through from character creation to the end
pub struct Session<R, W> {
    input: R,
    output: W,
    game: GameLoop,
    options: GameOptions,
    save_path: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: GameOptions, rng: GameRng) -> Self {
        let save_path = options.save_file.clone().unwrap_or_else(default_save_path);
        Self {
            input,
            output,
            game: GameLoop::new(GameState::new(rng)),
            options,
            save_path,
        }
    }

    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Consume the session and return the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until quit, death or end of input
    ///
    /// Only I/O errors on the reader or writer are returned; game and save
    /// errors are printed.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        if self.options.welcome {
            writeln!(self.output, "{}", WELCOME)?;
        }
        self.create_character()?;
        self.game.tick(Command::Look);
        self.flush_messages()?;

        loop {
            if self.game.state().player.is_dead() {
                writeln!(self.output, "\n{}", LOSS_MESSAGE)?;
                self.output.flush()?;
                return Ok(SessionEnd::Died);
            }

            if self.options.prompt {
                write!(self.output, "{}", PROMPT)?;
                self.output.flush()?;
            }
            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed");
                return Ok(SessionEnd::EndOfInput);
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let result = self.game.execute_line(line);
            self.flush_messages()?;

            match result {
                GameLoopResult::Continue | GameLoopResult::PlayerDied(_) => {}
                GameLoopResult::SaveRequested => self.save()?,
                GameLoopResult::LoadRequested => self.load()?,
                GameLoopResult::PlayerQuit => {
                    self.output.flush()?;
                    return Ok(SessionEnd::Quit);
                }
            }
        }
    }

    /// Ask for whatever the options left open, then apply class presets
    fn create_character(&mut self) -> io::Result<()> {
        let (name, class) = match (self.options.name.clone(), self.options.class.clone()) {
            (Some(name), Some(class)) => (name, class),
            (name, class) => {
                writeln!(self.output, "{}", CREATION_HEADER)?;
                let name = match name {
                    Some(name) => name,
                    None => self.ask(NAME_PROMPT)?,
                };
                let class = match class {
                    Some(class) => class,
                    None => self.ask(CLASS_PROMPT)?,
                };
                (name, class)
            }
        };

        let player = Player::new(&name, &class);
        writeln!(self.output, "{}", player.creation_summary())?;
        tracing::info!(name = %player.name, class = %player.class, "character created");
        self.game.state_mut().player = player;
        Ok(())
    }

    /// Prompt and read one answer; a closed input counts as blank
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn flush_messages(&mut self) -> io::Result<()> {
        for msg in self.game.state_mut().take_messages() {
            writeln!(self.output, "{}", msg)?;
        }
        self.output.flush()
    }

    fn save(&mut self) -> io::Result<()> {
        match save_game(self.game.state(), &self.save_path) {
            Ok(()) => writeln!(self.output, "Гру збережено."),
            Err(e) => {
                tracing::warn!(path = %self.save_path.display(), error = %e, "save failed");
                writeln!(self.output, "Не вдалося зберегти гру: {}", e)
            }
        }
    }

    fn load(&mut self) -> io::Result<()> {
        match load_game(self.game.state_mut(), &self.save_path) {
            Ok(()) => {
                writeln!(self.output, "Гру завантажено.")?;
                self.game.tick(Command::Look);
                self.flush_messages()
            }
            Err(SaveError::NotFound) => writeln!(self.output, "Немає збереження."),
            Err(e) => {
                tracing::warn!(path = %self.save_path.display(), error = %e, "load failed");
                writeln!(self.output, "Не вдалося завантажити гру: {}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quiet_options() -> GameOptions {
        GameOptions {
            name: Some("Оля".to_string()),
            class: Some("маг".to_string()),
            save_file: Some(PathBuf::from("/nonexistent/dir/save.json")),
            prompt: false,
            welcome: false,
            ..GameOptions::default()
        }
    }

    fn run(input: &str, options: GameOptions) -> (SessionEnd, String) {
        let mut session = Session::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            options,
            GameRng::new(1),
        );
        let end = session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (end, output)
    }

    #[test]
    fn test_prompts_skipped_when_options_complete() {
        let (end, output) = run("", quiet_options());
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(!output.contains(NAME_PROMPT));
        assert!(output.starts_with("Готово: Оля (маг), HP 18/18, Power 8\n"));
        assert!(output.contains("[Дім]"));
    }

    #[test]
    fn test_only_missing_answers_are_asked() {
        let options = GameOptions {
            class: None,
            ..quiet_options()
        };
        let (_, output) = run("воїн\n", options);
        assert!(!output.contains(NAME_PROMPT));
        assert!(output.contains(CLASS_PROMPT));
        assert!(output.contains("Готово: Оля (воїн), HP 30/30, Power 7"));
    }

    #[test]
    fn test_welcome_and_prompt() {
        let options = GameOptions {
            prompt: true,
            welcome: true,
            ..quiet_options()
        };
        let (_, output) = run("look\n", options);
        assert!(output.starts_with(WELCOME));
        assert_eq!(output.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let (end, output) = run("save\nexit\n", quiet_options());
        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("Не вдалося зберегти гру: "));
        assert!(output.ends_with("Вихід з гри.\n"));
    }
}
