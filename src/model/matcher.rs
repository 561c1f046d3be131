// Logic for checking if tasks match filter queries.
//
// A query is a single predicate decided by its first character:
//
//   @name  -> task carries exactly that context
//   +name  -> task carries exactly that tag
//   text   -> case-sensitive substring of the title
//
// The empty query matches every task. Context and tag matching is
// exact set membership, never substring.

use crate::model::Task;

impl Task {
    /// Checks whether the task matches the given query.
    pub fn matches(&self, query: &str) -> bool {
        let Some(first) = query.chars().next() else {
            return true;
        };
        match first {
            '@' => element_of(&query[1..], &self.contexts),
            '+' => element_of(&query[1..], &self.tags),
            _ => self.title.contains(query),
        }
    }
}

fn element_of(name: &str, set: &[String]) -> bool {
    set.iter().any(|s| s == name)
}
