//! Day grouping pass.
//!
//! Partitions an ordered lesson sequence into day groups by formatted
//! calendar date, handing each lesson to the annotator as it goes. One
//! pass, no caching: the output is rebuilt from scratch on every render.

use crate::config::Config;
use crate::core::annotator;
use crate::models::day_group::{DayGroup, DayHeader};
use crate::models::lesson::Lesson;
use crate::models::row::Row;
use crate::utils::locale::Locale;
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Per-day hours ranges, keyed by day-identity key.
///
/// Day headers only show an hours range for keys present here; absent keys
/// fall back to a date-only header.
#[derive(Debug, Default)]
pub struct DayHoursIndex {
    map: HashMap<String, (NaiveDateTime, NaiveDateTime)>,
}

impl DayHoursIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day_key: String, start: NaiveDateTime, end: NaiveDateTime) {
        self.map.insert(day_key, (start, end));
    }

    pub fn get(&self, day_key: &str) -> Option<&(NaiveDateTime, NaiveDateTime)> {
        self.map.get(day_key)
    }

    /// Index holding hours only for the first lesson's day.
    ///
    /// The data source supplies a single start/end pair per render call, so
    /// only the first day group can show an hours range; later days render
    /// a date-only header.
    pub fn for_first_day(
        lessons: &[Lesson],
        day_start_at: Option<NaiveDateTime>,
        day_end_at: Option<NaiveDateTime>,
        locale: &Locale,
    ) -> Self {
        let mut index = Self::new();
        if let (Some(first), Some(start), Some(end)) = (lessons.first(), day_start_at, day_end_at) {
            index.insert(locale.date_key(&first.start_at), start, end);
        }
        index
    }
}

/// Group a sorted lesson sequence into day groups.
///
/// Day identity is exact string equality of the locale date key; two
/// lessons that format identically land in the same group. Output groups
/// are contiguous partitions of the input in original order, and the total
/// lesson-row count equals the input length.
pub fn group<'a>(
    lessons: &'a [Lesson],
    hours: &DayHoursIndex,
    cfg: &Config,
    locale: &Locale,
    now: NaiveDateTime,
) -> Vec<DayGroup<'a>> {
    let mut groups: Vec<DayGroup<'a>> = Vec::new();
    let mut current_key = String::new();

    // Per-day one-shot lunch flag. Local to this pass, reset on every day
    // transition; stale state cannot survive into the next render.
    let mut lunch_done = false;

    for lesson in lessons {
        let key = locale.date_key(&lesson.start_at);

        if groups.is_empty() || key != current_key {
            lunch_done = false;

            let hours_label = if cfg.display_day_hours {
                hours.get(&key).map(|(start, end)| locale.hours_range(start, end))
            } else {
                None
            };

            groups.push(DayGroup::new(DayHeader {
                date: key.clone(),
                hours: hours_label,
            }));
            current_key = key;
        }

        let annotated = annotator::annotate(lesson, now, cfg, locale, &mut lunch_done);

        if let Some(group) = groups.last_mut() {
            if let Some(lunch) = annotated.lunch_break {
                group.rows.push(Row::LunchBreak(lunch));
            }
            group.rows.push(Row::Lesson(annotated.lesson));
        }
    }

    groups
}
