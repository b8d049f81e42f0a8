use crate::models::lesson::Lesson;

/// One displayable row inside a day group.
///
/// Rows borrow the source lesson: view models are rebuilt on every render
/// pass and never outlive the input slice.
#[derive(Debug, Clone)]
pub enum Row<'a> {
    Lesson(LessonRow<'a>),
    LunchBreak(LunchBreakRow),
}

/// A lesson row with its derived display flags.
#[derive(Debug, Clone)]
pub struct LessonRow<'a> {
    pub lesson: &'a Lesson,
    /// The lesson already finished (only when darken_ended_lessons is on).
    pub ended: bool,
    /// A lunch-break separator was emitted right before this row.
    pub lunch_break_before: bool,
    /// Composed classroom/teacher text, e.g. "Salle 101, Dupont".
    pub details: String,
}

/// The synthetic lunch-break separator, at most one per day group.
#[derive(Debug, Clone)]
pub struct LunchBreakRow {
    /// Computed against the first afternoon lesson's start time.
    pub ended: bool,
}
