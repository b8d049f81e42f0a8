//! Locale formatting capability: day-identity keys and time labels.
//!
//! The date key replicates the source dashboard's fr-FR formatting
//! (long weekday + dd/mm, first letter capitalized). Two lessons whose
//! formatted strings are equal belong to the same day group, so the day
//! boundary is purely presentational by design.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDateTime, Timelike};

const FR_WEEKDAYS: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

const EN_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Fr,
    En,
}

impl Locale {
    pub fn parse(code: &str) -> AppResult<Self> {
        match code.to_ascii_lowercase().as_str() {
            "fr" => Ok(Locale::Fr),
            "en" => Ok(Locale::En),
            other => Err(AppError::UnknownLocale(other.to_string())),
        }
    }

    /// Day-identity key: capitalized weekday + dd/mm (no year, no time).
    pub fn date_key(&self, t: &NaiveDateTime) -> String {
        let idx = t.weekday().num_days_from_monday() as usize;
        let weekday = match self {
            Locale::Fr => FR_WEEKDAYS[idx],
            Locale::En => EN_WEEKDAYS[idx],
        };
        format!("{} {:02}/{:02}", weekday, t.day(), t.month())
    }

    /// "HH:MM" time label.
    pub fn time_label(&self, t: &NaiveDateTime) -> String {
        format!("{:02}:{:02}", t.hour(), t.minute())
    }

    /// "HH:MM - HH:MM" range label for the day header.
    pub fn hours_range(&self, start: &NaiveDateTime, end: &NaiveDateTime) -> String {
        format!("{} - {}", self.time_label(start), self.time_label(end))
    }

    pub fn lunch_label(&self) -> &'static str {
        match self {
            Locale::Fr => "Repas",
            Locale::En => "Lunch break",
        }
    }

    pub fn classroom_prefix(&self) -> &'static str {
        match self {
            Locale::Fr => "Salle ",
            Locale::En => "Room ",
        }
    }
}
