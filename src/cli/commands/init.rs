use crate::cli::commands::config_path;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

pub fn handle(cli: &Cli, cmd: &Commands) -> AppResult<()> {
    if let Commands::Init {
        entity,
        state,
        force,
    } = cmd
    {
        let path = config_path(cli);

        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "configuration file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        let mut cfg = Config::default();
        if let Some(entity) = entity {
            cfg.entity = entity.clone();
        }
        cfg.state_file = state.clone();

        cfg.save(&path)?;
        messages::success(format!("Configuration file created: {}", path.display()));

        if cfg.entity.is_empty() {
            messages::warning("No entity set yet: edit the file or re-run init with --entity");
        }
    }
    Ok(())
}
