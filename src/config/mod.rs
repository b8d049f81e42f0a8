//! Card configuration: display toggles, entity id, locale.
//!
//! Stored as YAML in the platform config directory, one file per user.
//! Every toggle defaults to on; only `entity` is mandatory and its absence
//! is a configuration error reported before any rendering is attempted.

use crate::errors::{AppError, AppResult};
use crate::utils::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Identifier of the timetable entity inside the state file.
    #[serde(default)]
    pub entity: String,

    /// Insert the lunch-break separator before the first afternoon lesson.
    #[serde(default = "default_true")]
    pub display_lunch_break: bool,

    /// Show the classroom ("Salle 101") next to the lesson name.
    #[serde(default = "default_true")]
    pub display_classroom: bool,

    /// Show the teacher name next to the lesson name.
    #[serde(default = "default_true")]
    pub display_teacher: bool,

    /// Dim lessons (and the lunch break) whose time has already passed.
    #[serde(default = "default_true")]
    pub darken_ended_lessons: bool,

    /// Show the day hours range in the first day header when known.
    #[serde(default = "default_true")]
    pub display_day_hours: bool,

    /// Formatting locale for dates and labels ("fr" or "en").
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Default path of the JSON state file (overridable with --state).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_locale() -> String {
    "fr".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entity: String::new(),
            display_lunch_break: true,
            display_classroom: true,
            display_teacher: true,
            darken_ended_lessons: true,
            display_day_hours: true,
            locale: default_locale(),
            state_file: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ttcard")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ttcard.conf")
    }

    /// Load and validate the configuration.
    ///
    /// `path` overrides the default location (the CLI's global `--config`).
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {} (run `ttcard init` first)",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Fail fast on a missing entity or an unknown locale.
    pub fn validate(&self) -> AppResult<()> {
        if self.entity.is_empty() {
            return Err(AppError::MissingEntity);
        }
        Locale::parse(&self.locale)?;
        Ok(())
    }

    /// Parsed locale; `validate()` guarantees this succeeds after load.
    pub fn locale(&self) -> AppResult<Locale> {
        Locale::parse(&self.locale)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
