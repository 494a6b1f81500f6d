//! CLI command handlers, one per file. Each writes to the given writer.

mod completions;
mod man;
mod parse;
mod taxonomy;

pub use completions::run_completions;
pub use man::run_man;
pub use parse::{run_parse, ParseOptions};
pub use taxonomy::run_taxonomy;
