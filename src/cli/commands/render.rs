use crate::cli::commands::config_path;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::grouper::{self, DayHoursIndex};
use crate::errors::{AppError, AppResult};
use crate::source::StateStore;
use crate::ui::{messages, render};
use chrono::{Local, NaiveDateTime};
use std::path::Path;

pub fn handle(cli: &Cli, cmd: &Commands) -> AppResult<()> {
    if let Commands::Render {
        entity,
        state,
        now,
        plain,
    } = cmd
    {
        let cfg = Config::load(Some(&config_path(cli)))?;
        let locale = cfg.locale()?;

        let entity = entity.clone().unwrap_or_else(|| cfg.entity.clone());

        let state_path = state
            .clone()
            .or_else(|| cfg.state_file.clone())
            .ok_or_else(|| {
                AppError::Config(
                    "no state file configured (set `state_file` or pass --state)".to_string(),
                )
            })?;

        let now = match now {
            Some(ts) => parse_now(ts)?,
            None => Local::now().naive_local(),
        };

        let store = StateStore::load(Path::new(&state_path))?;

        // No state yet for this entity: nothing to render, not an error.
        let Some(timetable) = store.state(&entity) else {
            messages::info(format!("No timetable data for `{}` yet", entity));
            return Ok(());
        };

        let hours = DayHoursIndex::for_first_day(
            &timetable.lessons,
            timetable.day_start_at,
            timetable.day_end_at,
            &locale,
        );

        let groups = grouper::group(&timetable.lessons, &hours, &cfg, &locale, now);
        print!("{}", render::render_groups(&groups, &locale, !*plain));
    }
    Ok(())
}

fn parse_now(ts: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::InvalidTimestamp(ts.to_string()))
}
