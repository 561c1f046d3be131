// File: ./src/model/item.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One item of a todo list, parsed from a single line of text.
///
/// A task is built exactly once by [`crate::model::parser::parse`] and
/// never mutated afterwards; sorting and filtering only reorder or
/// select references.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Free text of the line: every word not claimed by a date, context,
    /// tag, or completion marker, joined by single spaces in encounter
    /// order.
    pub title: String,
    pub start: Option<NaiveDate>,
    pub due: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub contexts: Vec<String>,
    pub done: bool,
    /// The exact line this task was parsed from, kept verbatim.
    pub raw: String,
    /// 1-based line in the source stream; 0 until the list aggregator
    /// assigns it.
    #[serde(default)]
    pub line_number: usize,
}

impl Task {
    pub(crate) fn push_title_word(&mut self, word: &str) {
        if !self.title.is_empty() {
            self.title.push(' ');
        }
        self.title.push_str(word);
    }
}

// Earlier first; a missing date sorts after any present one.
fn cmp_optional_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// --- SORTING ---
impl Ord for Task {
    /// Display order: open tasks before done ones, then by due date,
    /// then start date, then title.
    fn cmp(&self, other: &Self) -> Ordering {
        self.done
            .cmp(&other.done)
            .then_with(|| cmp_optional_dates(self.due, other.due))
            .then_with(|| cmp_optional_dates(self.start, other.start))
            .then_with(|| self.title.cmp(&other.title))
    }
}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(due: Option<NaiveDate>, start: Option<NaiveDate>) -> Task {
        Task {
            due,
            start,
            ..Task::default()
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn missing_dates_sort_last() {
        let with_due = dated(Some(day(5)), None);
        let without = dated(None, None);
        assert_eq!(with_due.cmp(&without), Ordering::Less);
        assert_eq!(without.cmp(&with_due), Ordering::Greater);
    }

    #[test]
    fn start_date_breaks_due_ties() {
        let early = dated(Some(day(5)), Some(day(1)));
        let late = dated(Some(day(5)), Some(day(2)));
        assert_eq!(early.cmp(&late), Ordering::Less);

        let unset = dated(Some(day(5)), None);
        assert_eq!(late.cmp(&unset), Ordering::Less);
    }

    #[test]
    fn title_is_the_final_tiebreak() {
        let mut a = dated(None, None);
        a.title = "apples".to_string();
        let mut b = dated(None, None);
        b.title = "bananas".to_string();
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }
}
