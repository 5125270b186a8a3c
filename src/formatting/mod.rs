//! Formatting of laid-out interlinear blocks into tagged fragments

pub mod formatter;
mod syntax;

pub use formatter::format_table;
pub use syntax::*;
