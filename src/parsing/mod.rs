//! parser for interlinear documents

use std::path::Path;
use tracing::debug;

use crate::language::{Document, LoadingError};

pub mod document;
pub mod token;

pub use document::parse_document;
pub use token::{parse_token, strip_tags};

/// Read a file and return an owned String. A filename of "-" reads standard
/// input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a Document. Malformed annotations degrade to plain text,
/// so this always succeeds.
pub fn parse(content: &str) -> Document {
    let document = parse_document(content);

    let tokens: usize = document
        .blocks
        .iter()
        .map(|block| {
            block
                .tokens
                .len()
        })
        .sum();

    debug!(
        "Found {} block{} with {} token{}",
        document
            .blocks
            .len(),
        if document.blocks.len() == 1 { "" } else { "s" },
        tokens,
        if tokens == 1 { "" } else { "s" }
    );

    document
}
