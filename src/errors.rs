//! Unified application error type.
//! All modules (config, source, core, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid state file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timestamp: {0} (expected YYYY-MM-DD HH:MM)")]
    InvalidTimestamp(String),

    #[error("Unknown locale: {0} (supported: fr, en)")]
    UnknownLocale(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("You need to define an entity (set `entity` in the configuration file)")]
    MissingEntity,

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // State errors
    // ---------------------------
    #[error("State file not found: {0}")]
    StateNotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;
