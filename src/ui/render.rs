//! Terminal renderer for day groups.
//!
//! Consumes the grouped view models and produces aligned text output:
//! one header line per day (date left, hours right) followed by one line
//! per row. Plain mode strips all ANSI styling for piping and tests.

use crate::models::day_group::{DayGroup, DayHeader};
use crate::models::row::{LessonRow, LunchBreakRow, Row};
use crate::utils::formatting::{badge, badge_canceled, bold, color_bar, dim, pad_right, strike};
use crate::utils::locale::Locale;
use unicode_width::UnicodeWidthStr;

/// Column widths of one day table, measured per group.
struct ColWidths {
    time: usize,
    name: usize,
}

fn measure(group: &DayGroup, locale: &Locale) -> ColWidths {
    let mut time = 0;
    let mut name = UnicodeWidthStr::width(locale.lunch_label());

    for row in &group.rows {
        if let Row::Lesson(lesson_row) = row {
            let t = time_cell(lesson_row);
            time = time.max(UnicodeWidthStr::width(t.as_str()));
            name = name.max(UnicodeWidthStr::width(lesson_row.lesson.lesson.as_str()));
        }
    }

    ColWidths { time, name }
}

fn time_cell(row: &LessonRow) -> String {
    format!("{}-{}", row.lesson.start_time, row.lesson.end_time)
}

/// Render all day groups into one string.
pub fn render_groups(groups: &[DayGroup], locale: &Locale, color: bool) -> String {
    let mut out = String::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let widths = measure(group, locale);
        out.push_str(&render_header(&group.header, &widths, color));

        for row in &group.rows {
            match row {
                Row::Lesson(lesson_row) => {
                    out.push_str(&render_lesson(lesson_row, &widths, color));
                }
                Row::LunchBreak(lunch) => {
                    out.push_str(&render_lunch(lunch, locale, &widths, color));
                }
            }
        }
    }

    out
}

fn render_header(header: &DayHeader, widths: &ColWidths, color: bool) -> String {
    // Hours are right-aligned to the end of the name column.
    let table_width = widths.time + 3 + widths.name;

    let line = match &header.hours {
        Some(hours) => {
            let used =
                UnicodeWidthStr::width(header.date.as_str()) + UnicodeWidthStr::width(hours.as_str());
            let gap = table_width.saturating_sub(used).max(2);
            format!("{}{}{}", header.date, " ".repeat(gap), hours)
        }
        None => header.date.clone(),
    };

    if color {
        format!("{}\n", bold(&line))
    } else {
        format!("{}\n", line)
    }
}

fn render_lesson(row: &LessonRow, widths: &ColWidths, color: bool) -> String {
    let time = pad_right(&time_cell(row), widths.time);
    let name = pad_right(&row.lesson.lesson, widths.name);
    let status = row.lesson.status_text();

    if !color {
        let mut line = format!("{}  | {}", time, name);
        if !row.details.is_empty() {
            line.push_str("  ");
            line.push_str(&row.details);
        }
        if let Some(st) = status {
            line.push_str("  [");
            line.push_str(st);
            line.push(']');
        }
        line.push('\n');
        return line;
    }

    if row.ended {
        // Whole-row dim, no nested styling (inner resets would cancel it).
        let mut line = format!("{}  ▍ {}", time, name);
        if !row.details.is_empty() {
            line.push_str("  ");
            line.push_str(&row.details);
        }
        if let Some(st) = status {
            line.push_str("  ");
            line.push_str(st);
        }
        return format!("{}\n", dim(&line));
    }

    let styled_name = if row.lesson.canceled {
        strike(&name)
    } else {
        bold(&name)
    };

    let mut line = format!(
        "{}  {} {}",
        time,
        color_bar(&row.lesson.background_color),
        styled_name
    );
    if !row.details.is_empty() {
        line.push_str("  ");
        line.push_str(&row.details);
    }
    if let Some(st) = status {
        line.push_str("  ");
        let b = if row.lesson.canceled {
            badge_canceled(st)
        } else {
            badge(st)
        };
        line.push_str(&b);
    }
    format!("{}\n", line)
}

fn render_lunch(lunch: &LunchBreakRow, locale: &Locale, widths: &ColWidths, color: bool) -> String {
    let time = pad_right("", widths.time);
    let label = locale.lunch_label();

    if !color {
        return format!("{}  | {}\n", time, label);
    }

    if lunch.ended {
        return format!("{}\n", dim(&format!("{}  ▍ {}", time, label)));
    }

    format!("{}  ▍ {}\n", time, bold(label))
}
