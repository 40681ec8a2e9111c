//! Game options and configuration
//!
//! Options come from an rc file of `OPTIONS=` lines:
//!
//! ```text
//! # comment
//! OPTIONS=name:Оля,class:маг
//! OPTIONS=savefile:/tmp/pryhoda.json,seed:42,!prompt
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    // Character options
    pub name: Option<String>,
    pub class: Option<String>,

    // Persistence
    pub save_file: Option<PathBuf>,

    // RNG
    pub seed: Option<u64>,

    // Interface options
    /// Print `> ` before reading each command
    pub prompt: bool,
    /// Print the command summary at start
    pub welcome: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            name: None,
            class: None,
            save_file: None,
            seed: None,
            prompt: true,
            welcome: true,
        }
    }
}

/// Options parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}

impl GameOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::IoError(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    let opt = opt.trim();
                    if !opt.is_empty() {
                        options.parse_option(opt)?;
                    }
                }
            } else {
                tracing::warn!(%line, "ignoring config line without OPTIONS=");
            }
        }

        Ok(options)
    }

    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':') {
            return self.set_option(key.trim(), value.trim());
        }
        if let Some((key, value)) = opt.split_once('=') {
            return self.set_option(key.trim(), value.trim());
        }

        let (negated, name) = if let Some(name) = opt.strip_prefix('!') {
            (true, name)
        } else if let Some(name) = opt.strip_prefix("no") {
            (true, name)
        } else {
            (false, opt)
        };
        self.set_bool_option(name, !negated)
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "prompt" => self.prompt = value,
            "welcome" => self.welcome = value,
            "name" | "class" | "savefile" | "seed" => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        if value.is_empty() {
            return Err(OptionsError::MissingValue(name.to_string()));
        }
        match name {
            "name" => self.name = Some(value.to_string()),
            "class" => self.class = Some(value.to_string()),
            "savefile" => self.save_file = Some(PathBuf::from(value)),
            "seed" => {
                let seed = value
                    .parse()
                    .map_err(|_| OptionsError::InvalidValue(name.to_string(), value.to_string()))?;
                self.seed = Some(seed);
            }
            "prompt" | "welcome" => {
                let flag = match value {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    _ => {
                        return Err(OptionsError::InvalidValue(
                            name.to_string(),
                            value.to_string(),
                        ));
                    }
                };
                self.set_bool_option(name, flag)?;
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        let contents = self.to_config_string();
        std::fs::write(path, contents).map_err(|e| OptionsError::IoError(e.to_string()))
    }

    /// Convert options to config file format
    pub fn to_config_string(&self) -> String {
        let mut lines = Vec::new();
        lines.push("# Pryhoda configuration file".to_string());
        lines.push(String::new());

        if let Some(name) = &self.name {
            lines.push(format!("OPTIONS=name:{}", name));
        }
        if let Some(class) = &self.class {
            lines.push(format!("OPTIONS=class:{}", class));
        }
        if let Some(path) = &self.save_file {
            lines.push(format!("OPTIONS=savefile:{}", path.display()));
        }
        if let Some(seed) = self.seed {
            lines.push(format!("OPTIONS=seed:{}", seed));
        }
        lines.push(format!(
            "OPTIONS={}prompt,{}welcome",
            if self.prompt { "" } else { "!" },
            if self.welcome { "" } else { "!" }
        ));

        lines.join("\n") + "\n"
    }
}
