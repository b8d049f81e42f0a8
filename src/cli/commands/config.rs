use crate::cli::commands::config_path;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::fs;

pub fn handle(cli: &Cli, cmd: &Commands) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = config_path(cli);

        if *print_config {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "configuration file not found: {}",
                    path.display()
                )));
            }
            print!("{}", fs::read_to_string(&path)?);
        }

        if *check {
            // load() validates entity and locale
            let cfg = Config::load(Some(&path))?;
            messages::success(format!("Configuration OK (entity: {})", cfg.entity));
        }

        if !*print_config && !*check {
            println!("{}", path.display());
        }
    }
    Ok(())
}
