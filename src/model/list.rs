/*
 * afaire/src/model/list.rs
 *
 * Line-by-line aggregation of a task stream into an ordered list.
 *
 * The aggregator owns the line counter; `parse` itself never assigns
 * line numbers. A single failing line aborts the whole batch — there
 * is no skip-and-continue mode, callers wanting lenient behavior must
 * filter lines before handing them in.
 */

use crate::model::Task;
use crate::model::parser::{self, ParseError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::ops::Deref;
use thiserror::Error;

/// Errors surfaced while aggregating a stream of lines.
#[derive(Debug, Error)]
pub enum ListError {
    /// A line failed to parse; aggregation stopped there.
    #[error("{source} on line {line}")]
    Parse { line: usize, source: ParseError },
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

/// An ordered list of tasks, one per source line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    /// Parses every line into a task, numbering lines from 1.
    ///
    /// Blank and whitespace-only lines count like any other line and
    /// fail to parse. The first failure aborts the whole aggregation;
    /// no partial list is returned.
    pub fn from_lines<I>(lines: I) -> Result<Self, ListError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut tasks = Vec::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let line_number = idx + 1;
            let mut task = parser::parse(line.as_ref()).map_err(|source| {
                warn!("aborting aggregation: {source} on line {line_number}");
                ListError::Parse {
                    line: line_number,
                    source,
                }
            })?;
            task.line_number = line_number;
            tasks.push(task);
        }
        debug!("aggregated {} tasks", tasks.len());
        Ok(Self(tasks))
    }

    /// Reads newline-separated tasks from a buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ListError> {
        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
        Self::from_lines(lines)
    }

    /// Returns the tasks matching the query, in original order. The
    /// list itself is left untouched.
    pub fn filter(&self, query: &str) -> Self {
        Self(self.0.iter().filter(|t| t.matches(query)).cloned().collect())
    }

    /// Returns the tasks *not* matching the query, in original order.
    pub fn filter_not(&self, query: &str) -> Self {
        Self(
            self.0
                .iter()
                .filter(|t| !t.matches(query))
                .cloned()
                .collect(),
        )
    }

    /// Sorts tasks in place for display: open before done, then due
    /// date, start date, title. The sort is stable, so tasks tied on
    /// all keys keep their line order.
    pub fn sort(&mut self) {
        self.0.sort();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for TaskList {
    type Target = [Task];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }
}

impl IntoIterator for TaskList {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
