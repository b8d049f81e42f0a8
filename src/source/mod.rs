//! Timetable data source: a JSON state file keyed by entity id.
//!
//! The file plays the role of the dashboard state store: each entity maps
//! to its lesson list plus the day start/end instants (null when unknown).
//! An entity with no state is "nothing to render yet", not an error.

use crate::errors::{AppError, AppResult};
use crate::models::lesson::Lesson;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The attributes a data source yields for one entity.
#[derive(Debug, Clone, Deserialize)]
pub struct TimetableState {
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub day_start_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub day_end_at: Option<NaiveDateTime>,
}

/// All entity states loaded from one state file.
#[derive(Debug, Clone, Deserialize)]
pub struct StateStore {
    #[serde(flatten)]
    states: HashMap<String, TimetableState>,
}

impl StateStore {
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::StateNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let store: StateStore = serde_json::from_str(&content)?;
        Ok(store)
    }

    /// State for one entity, or None while no data has been published yet.
    pub fn state(&self, entity: &str) -> Option<&TimetableState> {
        self.states.get(entity)
    }
}
