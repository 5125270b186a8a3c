// Types representing interlinear documents and their grammar annotations

mod error;
pub mod grammar;
mod tag;
mod types;

// Re-export all public symbols
pub use error::*;
pub use tag::*;
pub use types::*;
