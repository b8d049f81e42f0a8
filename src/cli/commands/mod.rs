pub mod config;
pub mod init;
pub mod render;

use crate::cli::parser::Cli;
use crate::config::Config;
use std::path::PathBuf;

/// Effective configuration file path: global --config or the default.
pub(crate) fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file)
}
