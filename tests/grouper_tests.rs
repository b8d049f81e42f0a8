mod common;
use common::{lesson, test_config, ts};

use ttcard::core::grouper::{self, DayHoursIndex};
use ttcard::models::day_group::DayGroup;
use ttcard::models::row::Row;
use ttcard::utils::locale::Locale;

fn kinds(group: &DayGroup) -> Vec<&'static str> {
    group
        .rows
        .iter()
        .map(|r| match r {
            Row::Lesson(_) => "lesson",
            Row::LunchBreak(_) => "lunch",
        })
        .collect()
}

#[test]
fn test_empty_input_yields_no_groups() {
    let cfg = test_config();
    let groups = grouper::group(
        &[],
        &DayHoursIndex::new(),
        &cfg,
        &Locale::Fr,
        ts("2025-09-01 08:00"),
    );
    assert!(groups.is_empty());
}

#[test]
fn test_single_day_preserves_count_and_order() {
    let cfg = test_config();
    let lessons = vec![
        lesson("2025-09-01 09:00", "2025-09-01 10:00", "Maths", false),
        lesson("2025-09-01 10:00", "2025-09-01 11:00", "Français", false),
        lesson("2025-09-01 11:00", "2025-09-01 12:00", "Histoire", false),
    ];

    let groups = grouper::group(
        &lessons,
        &DayHoursIndex::new(),
        &cfg,
        &Locale::Fr,
        ts("2025-09-01 08:00"),
    );

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].lesson_count(), 3);

    let names: Vec<&str> = groups[0]
        .rows
        .iter()
        .filter_map(|r| match r {
            Row::Lesson(lr) => Some(lr.lesson.lesson.as_str()),
            Row::LunchBreak(_) => None,
        })
        .collect();
    assert_eq!(names, vec!["Maths", "Français", "Histoire"]);
}

#[test]
fn test_lunch_break_precedes_first_afternoon_lesson() {
    let cfg = test_config();
    let lessons = vec![
        lesson("2025-09-01 09:00", "2025-09-01 10:00", "Maths", false),
        lesson("2025-09-01 14:00", "2025-09-01 15:00", "Sport", true),
    ];

    let groups = grouper::group(
        &lessons,
        &DayHoursIndex::new(),
        &cfg,
        &Locale::Fr,
        ts("2025-09-01 08:00"),
    );

    assert_eq!(groups.len(), 1);
    assert_eq!(kinds(&groups[0]), vec!["lesson", "lunch", "lesson"]);
}

#[test]
fn test_at_most_one_lunch_break_per_day() {
    let cfg = test_config();
    let lessons = vec![
        lesson("2025-09-01 14:00", "2025-09-01 15:00", "Sport", true),
        lesson("2025-09-01 15:00", "2025-09-01 16:00", "Musique", true),
    ];

    let groups = grouper::group(
        &lessons,
        &DayHoursIndex::new(),
        &cfg,
        &Locale::Fr,
        ts("2025-09-01 08:00"),
    );

    assert_eq!(kinds(&groups[0]), vec!["lunch", "lesson", "lesson"]);
}

#[test]
fn test_no_lunch_break_when_disabled() {
    let mut cfg = test_config();
    cfg.display_lunch_break = false;

    let lessons = vec![
        lesson("2025-09-01 09:00", "2025-09-01 10:00", "Maths", false),
        lesson("2025-09-01 14:00", "2025-09-01 15:00", "Sport", true),
    ];

    let groups = grouper::group(
        &lessons,
        &DayHoursIndex::new(),
        &cfg,
        &Locale::Fr,
        ts("2025-09-01 08:00"),
    );

    assert_eq!(kinds(&groups[0]), vec!["lesson", "lesson"]);
}

#[test]
fn test_lunch_flag_resets_on_day_transition() {
    let cfg = test_config();
    let lessons = vec![
        lesson("2025-09-01 14:00", "2025-09-01 15:00", "Sport", true),
        lesson("2025-09-02 14:00", "2025-09-02 15:00", "Musique", true),
    ];

    let groups = grouper::group(
        &lessons,
        &DayHoursIndex::new(),
        &cfg,
        &Locale::Fr,
        ts("2025-09-01 08:00"),
    );

    assert_eq!(groups.len(), 2);
    assert_eq!(kinds(&groups[0]), vec!["lunch", "lesson"]);
    assert_eq!(kinds(&groups[1]), vec!["lunch", "lesson"]);
}

#[test]
fn test_two_days_first_header_has_hours_second_date_only() {
    let cfg = test_config();
    let lessons = vec![
        lesson("2025-09-01 09:00", "2025-09-01 10:00", "Maths", false),
        lesson("2025-09-02 09:00", "2025-09-02 10:00", "Français", false),
    ];

    let hours = DayHoursIndex::for_first_day(
        &lessons,
        Some(ts("2025-09-01 08:30")),
        Some(ts("2025-09-01 17:00")),
        &Locale::Fr,
    );

    let groups = grouper::group(&lessons, &hours, &cfg, &Locale::Fr, ts("2025-09-01 08:00"));

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].header.date, "Lundi 01/09");
    assert_eq!(groups[0].header.hours.as_deref(), Some("08:30 - 17:00"));
    assert_eq!(groups[1].header.date, "Mardi 02/09");
    assert_eq!(groups[1].header.hours, None);
}

#[test]
fn test_no_hours_when_display_day_hours_disabled() {
    let mut cfg = test_config();
    cfg.display_day_hours = false;

    let lessons = vec![lesson("2025-09-01 09:00", "2025-09-01 10:00", "Maths", false)];
    let hours = DayHoursIndex::for_first_day(
        &lessons,
        Some(ts("2025-09-01 08:30")),
        Some(ts("2025-09-01 17:00")),
        &Locale::Fr,
    );

    let groups = grouper::group(&lessons, &hours, &cfg, &Locale::Fr, ts("2025-09-01 08:00"));
    assert_eq!(groups[0].header.hours, None);
}

#[test]
fn test_no_hours_when_day_boundaries_unknown() {
    let lessons = vec![lesson("2025-09-01 09:00", "2025-09-01 10:00", "Maths", false)];
    let hours = DayHoursIndex::for_first_day(&lessons, None, None, &Locale::Fr);
    assert!(hours.get("Lundi 01/09").is_none());
}

#[test]
fn test_ended_flags_all_false_when_darken_disabled() {
    let mut cfg = test_config();
    cfg.darken_ended_lessons = false;

    let lessons = vec![
        lesson("2025-09-01 09:00", "2025-09-01 10:00", "Maths", false),
        lesson("2025-09-01 14:00", "2025-09-01 15:00", "Sport", true),
    ];

    // "now" is well past every lesson
    let groups = grouper::group(
        &lessons,
        &DayHoursIndex::new(),
        &cfg,
        &Locale::Fr,
        ts("2025-09-08 08:00"),
    );

    for row in &groups[0].rows {
        match row {
            Row::Lesson(lr) => assert!(!lr.ended),
            Row::LunchBreak(lb) => assert!(!lb.ended),
        }
    }
}

#[test]
fn test_ended_flag_set_for_past_lessons() {
    let cfg = test_config();
    let lessons = vec![
        lesson("2025-09-01 09:00", "2025-09-01 10:00", "Maths", false),
        lesson("2025-09-01 14:00", "2025-09-01 15:00", "Sport", true),
    ];

    // between the two lessons: the first has ended, the second has not
    let groups = grouper::group(
        &lessons,
        &DayHoursIndex::new(),
        &cfg,
        &Locale::Fr,
        ts("2025-09-01 11:00"),
    );

    let flags: Vec<bool> = groups[0]
        .rows
        .iter()
        .filter_map(|r| match r {
            Row::Lesson(lr) => Some(lr.ended),
            Row::LunchBreak(_) => None,
        })
        .collect();
    assert_eq!(flags, vec![true, false]);
}

#[test]
fn test_total_lesson_rows_match_input_across_groups() {
    let cfg = test_config();
    let lessons = vec![
        lesson("2025-09-01 09:00", "2025-09-01 10:00", "Maths", false),
        lesson("2025-09-01 14:00", "2025-09-01 15:00", "Sport", true),
        lesson("2025-09-02 09:00", "2025-09-02 10:00", "Français", false),
        lesson("2025-09-03 14:00", "2025-09-03 15:00", "Musique", true),
    ];

    let groups = grouper::group(
        &lessons,
        &DayHoursIndex::new(),
        &cfg,
        &Locale::Fr,
        ts("2025-09-01 08:00"),
    );

    let total: usize = groups.iter().map(|g| g.lesson_count()).sum();
    assert_eq!(total, lessons.len());
    assert_eq!(groups.len(), 3);
}

#[test]
fn test_render_pass_is_idempotent() {
    let cfg = test_config();
    let lessons = vec![
        lesson("2025-09-01 09:00", "2025-09-01 10:00", "Maths", false),
        lesson("2025-09-01 14:00", "2025-09-01 15:00", "Sport", true),
        lesson("2025-09-02 14:00", "2025-09-02 15:00", "Musique", true),
    ];
    let now = ts("2025-09-01 12:00");

    let first = grouper::group(&lessons, &DayHoursIndex::new(), &cfg, &Locale::Fr, now);
    let second = grouper::group(&lessons, &DayHoursIndex::new(), &cfg, &Locale::Fr, now);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.header.date, b.header.date);
        assert_eq!(a.header.hours, b.header.hours);
        assert_eq!(kinds(a), kinds(b));
    }
}
