//! Row-level presentation derivation.
//!
//! For each lesson this computes the derived display flags (ended, lunch
//! break insertion, classroom/teacher text) against the current instant
//! and configuration. Pure except for the threaded per-day lunch flag.

use crate::config::Config;
use crate::models::lesson::Lesson;
use crate::models::row::{LessonRow, LunchBreakRow};
use crate::utils::locale::Locale;
use chrono::NaiveDateTime;

/// Result of annotating one lesson: at most one lunch-break separator
/// followed by the lesson row itself.
#[derive(Debug)]
pub struct AnnotatedRow<'a> {
    pub lunch_break: Option<LunchBreakRow>,
    pub lesson: LessonRow<'a>,
}

/// Derive the display flags for one lesson.
///
/// `lunch_done` is the per-day one-shot flag. It is owned by the grouping
/// pass and reset on every day transition, so it can never leak across
/// render invocations or concurrent calls.
pub fn annotate<'a>(
    lesson: &'a Lesson,
    now: NaiveDateTime,
    cfg: &Config,
    locale: &Locale,
    lunch_done: &mut bool,
) -> AnnotatedRow<'a> {
    let mut lunch_break = None;
    if cfg.display_lunch_break && lesson.is_afternoon && !*lunch_done {
        // The separator "ends" together with the start of the first
        // afternoon lesson, not with its end.
        lunch_break = Some(LunchBreakRow {
            ended: cfg.darken_ended_lessons && lesson.start_at < now,
        });
        *lunch_done = true;
    }

    let row = LessonRow {
        lesson,
        ended: cfg.darken_ended_lessons && lesson.end_at < now,
        lunch_break_before: lunch_break.is_some(),
        details: compose_details(lesson, cfg, locale),
    };

    AnnotatedRow {
        lunch_break,
        lesson: row,
    }
}

/// "Salle 101, Dupont" — classroom first, comma only when both parts exist.
fn compose_details(lesson: &Lesson, cfg: &Config, locale: &Locale) -> String {
    let mut out = String::new();

    if cfg.display_classroom && !lesson.classroom.is_empty() {
        out.push_str(locale.classroom_prefix());
        out.push_str(&lesson.classroom);
    }

    if cfg.display_teacher && !lesson.teacher_name.is_empty() {
        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push_str(&lesson.teacher_name);
    }

    out
}
