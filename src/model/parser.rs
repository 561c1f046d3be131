// File: src/model/parser.rs
use crate::model::Task;
use chrono::NaiveDate;
use thiserror::Error;

/// Date format used throughout the line syntax: year, month, and day
/// joined by hyphens, no leading-zero requirement, no time component.
/// `2024-3-5` and `2024-03-05` both parse; formatting emits the former
/// style for month and day.
pub const DATE_FORMAT: &str = "%Y-%-m-%-d";

/// Whole-line parse failures. Individual tokens never fail: anything
/// unrecognized becomes title text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("parse empty string")]
    EmptyInput,
    #[error("parse only whitespace")]
    WhitespaceOnly,
    #[error("line contains only completion marker")]
    CompletionMarkerOnly,
}

/// Classification of one whitespace-delimited token of a task line.
///
/// Produced by [`classify`], which tries the variants in declaration
/// order and stops at the first match; [`Word`](TokenKind::Word) is the
/// total fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A bare date. Becomes the due date; if several appear on one
    /// line, the last one wins.
    Due(NaiveDate),
    /// `@name`: a context. A lone `@` is ordinary text.
    Context(String),
    /// `+name`: a tag. A lone `+` is ordinary text.
    Tag(String),
    /// `s:` directly followed by a date: the start date. `s:` with
    /// anything else after it is ordinary text.
    Start(NaiveDate),
    /// Any other token: one word of the title.
    Word(String),
}

fn parse_date(token: &str) -> Option<NaiveDate> {
    // parse_from_str rejects trailing garbage, so partial date matches
    // like `2024-3-5x` fall through to the next rule.
    NaiveDate::parse_from_str(token, DATE_FORMAT).ok()
}

/// Classifies a single token. First matching rule wins.
pub fn classify(token: &str) -> TokenKind {
    if let Some(date) = parse_date(token) {
        return TokenKind::Due(date);
    }
    if let Some(name) = token.strip_prefix('@')
        && !name.is_empty()
    {
        return TokenKind::Context(name.to_string());
    }
    if let Some(name) = token.strip_prefix('+')
        && !name.is_empty()
    {
        return TokenKind::Tag(name.to_string());
    }
    if let Some(rest) = token.strip_prefix("s:")
        && let Some(date) = parse_date(rest)
    {
        return TokenKind::Start(date);
    }
    TokenKind::Word(token.to_string())
}

/// Parses one line of a todo list into a [`Task`].
///
/// The line is split on whitespace (runs collapse, edges are ignored).
/// A first token of exactly `x` marks the task done and is consumed;
/// every remaining token goes through [`classify`] and lands in exactly
/// one task field. `raw` keeps the input verbatim; `line_number` stays
/// 0 until the list aggregator assigns it.
pub fn parse(line: &str) -> Result<Task, ParseError> {
    if line.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut task = Task {
        raw: line.to_string(),
        ..Task::default()
    };

    let mut tokens = line.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return Err(ParseError::WhitespaceOnly);
    }

    if tokens.peek() == Some(&"x") {
        task.done = true;
        tokens.next();
        if tokens.peek().is_none() {
            return Err(ParseError::CompletionMarkerOnly);
        }
    }

    for token in tokens {
        match classify(token) {
            TokenKind::Due(date) => task.due = Some(date),
            TokenKind::Context(name) => task.contexts.push(name),
            TokenKind::Tag(name) => task.tags.push(name),
            TokenKind::Start(date) => task.start = Some(date),
            TokenKind::Word(word) => task.push_title_word(&word),
        }
    }

    Ok(task)
}
