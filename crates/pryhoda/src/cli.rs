//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use pry_core::world::{GameOptions, OptionsError};

/// Name of the rc file under the user's config directory
pub const RC_FILE_NAME: &str = "pryhodarc";

/// Прихода: текстова пригода
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "pryhoda")]
#[command(
    author,
    version,
    about = "Прихода - текстова пригода у трьох локаціях",
    long_about = None
)]
pub struct Args {
    /// Character name
    #[arg(short = 'u', long = "name")]
    pub name: Option<String>,

    /// Character class (воїн, розвідник, маг or any text)
    #[arg(short = 'p', long = "class")]
    pub class: Option<String>,

    /// Save file path
    #[arg(long = "save-file")]
    pub save_file: Option<PathBuf>,

    /// Options file in the rc format
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible game
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// Read the rc file and apply command-line overrides
    ///
    /// An explicit `--config` must exist. A missing default rc file means
    /// default options.
    pub fn load_options(&self) -> Result<GameOptions, OptionsError> {
        let options = match &self.config {
            Some(path) => GameOptions::load_from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => {
                    tracing::debug!(path = %path.display(), "reading rc file");
                    GameOptions::load_from_file(&path)?
                }
                _ => GameOptions::default(),
            },
        };
        Ok(self.apply(options))
    }

    /// Command-line values override rc values
    pub fn apply(&self, mut options: GameOptions) -> GameOptions {
        if let Some(name) = &self.name {
            options.name = Some(name.clone());
        }
        if let Some(class) = &self.class {
            options.class = Some(class.clone());
        }
        if let Some(path) = &self.save_file {
            options.save_file = Some(path.clone());
        }
        if self.seed.is_some() {
            options.seed = self.seed;
        }
        options
    }
}

/// `<config dir>/pryhoda/pryhodarc`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pryhoda").join(RC_FILE_NAME))
}
