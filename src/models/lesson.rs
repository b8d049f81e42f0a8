use chrono::NaiveDateTime;
use serde::Deserialize;

/// A single timetable entry as supplied by the data source.
///
/// Lessons are assumed to be pre-sorted ascending by `start_at`; nothing
/// enforces this and an unsorted input produces incorrect grouping.
#[derive(Debug, Clone, Deserialize)]
pub struct Lesson {
    pub start_at: NaiveDateTime, // ⇔ "2025-09-01T09:00:00"
    pub end_at: NaiveDateTime,
    pub start_time: String, // pre-formatted "HH:MM" labels from the source
    pub end_time: String,
    pub lesson: String, // subject name
    #[serde(default)]
    pub teacher_name: String,
    #[serde(default)]
    pub classroom: String,
    #[serde(default)]
    pub background_color: String, // "#RRGGBB", may be empty
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub canceled: bool,
    #[serde(default)]
    pub is_afternoon: bool, // true once the lesson falls after midday
}

impl Lesson {
    /// Status label, with empty strings treated as "no status".
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}
