// Crate root library declaration and module exports.
pub mod model;

pub use model::Task;
pub use model::display::TaskDisplay;
pub use model::list::{ListError, TaskList};
pub use model::parser::{DATE_FORMAT, ParseError, TokenKind, classify, parse};
