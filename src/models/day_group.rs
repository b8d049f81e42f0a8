use crate::models::row::Row;

/// Header of a day group: formatted date plus an optional hours range.
#[derive(Debug, Clone)]
pub struct DayHeader {
    /// Capitalized locale date, e.g. "Lundi 02/09". Also the day-identity key.
    pub date: String,
    /// "08:30 - 17:00" when day hours are known and enabled.
    pub hours: Option<String>,
}

/// All rows belonging to one calendar day, with one header.
#[derive(Debug, Clone)]
pub struct DayGroup<'a> {
    pub header: DayHeader,
    pub rows: Vec<Row<'a>>,
}

impl<'a> DayGroup<'a> {
    pub fn new(header: DayHeader) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Number of lesson rows, excluding the lunch-break separator.
    pub fn lesson_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| matches!(r, Row::Lesson(_)))
            .count()
    }
}
