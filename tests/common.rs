#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use std::env;
use std::fs;
use std::path::PathBuf;
use ttcard::config::Config;
use ttcard::models::lesson::Lesson;

pub fn ttc() -> Command {
    cargo_bin_cmd!("ttcard")
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("timestamp")
}

/// Lesson with the usual classroom/teacher filled in.
pub fn lesson(start: &str, end: &str, name: &str, afternoon: bool) -> Lesson {
    let start_at = ts(start);
    let end_at = ts(end);
    Lesson {
        start_at,
        end_at,
        start_time: start_at.format("%H:%M").to_string(),
        end_time: end_at.format("%H:%M").to_string(),
        lesson: name.to_string(),
        teacher_name: "Dupont".to_string(),
        classroom: "101".to_string(),
        background_color: "#6fa8dc".to_string(),
        status: None,
        canceled: false,
        is_afternoon: afternoon,
    }
}

pub fn test_config() -> Config {
    Config {
        entity: "sensor.timetable_eleve".to_string(),
        ..Config::default()
    }
}

/// Unique path inside the system temp dir with any leftover file removed
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ttcard.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}
