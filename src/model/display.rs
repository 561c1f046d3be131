// File: ./src/model/display.rs
use crate::model::Task;
use crate::model::parser::DATE_FORMAT;
use std::fmt;

pub trait TaskDisplay {
    fn to_line(&self) -> String;
}

impl TaskDisplay for Task {
    /// Renders the task back into the line syntax understood by the
    /// parser, in fixed field order: completion marker, title, due
    /// date, start date, contexts, tags.
    ///
    /// The result may differ from `raw` in spelling and token order,
    /// but parses back to an equal task.
    fn to_line(&self) -> String {
        let mut line = String::new();
        if self.done {
            line.push_str("x ");
        }
        line.push_str(&self.title);
        if let Some(due) = self.due {
            line.push_str(&format!(" {}", due.format(DATE_FORMAT)));
        }
        if let Some(start) = self.start {
            line.push_str(&format!(" s:{}", start.format(DATE_FORMAT)));
        }
        for context in &self.contexts {
            line.push_str(&format!(" @{}", context));
        }
        for tag in &self.tags {
            line.push_str(&format!(" +{}", tag));
        }
        line
    }
}

/// Tab-separated row for tabular or debug output, trailing tab
/// included: line number, done marker, title, due, start, contexts,
/// tags. Not meant to be re-parsed.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let done = if self.done { "x" } else { "" };
        let due = self
            .due
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        let start = self
            .start
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t",
            self.line_number,
            done,
            self.title,
            due,
            start,
            self.contexts.join(", "),
            self.tags.join(", "),
        )
    }
}
