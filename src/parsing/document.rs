//! Parser for the block structure of an interlinear document

use tracing::{debug, warn};

use crate::language::{Block, Document};
use crate::parsing::token::parse_token;

/// Split a document into blocks at blank lines and read each one. Lines
/// beginning with `%` are comments.
pub fn parse_document(content: &str) -> Document {
    let mut blocks = Vec::new();
    let mut lines: Vec<&str> = Vec::new();

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with('%') {
            continue;
        }

        if line.is_empty() {
            if !lines.is_empty() {
                blocks.push(read_block(&lines));
                lines.clear();
            }
            continue;
        }

        lines.push(line);
    }

    if !lines.is_empty() {
        blocks.push(read_block(&lines));
    }

    Document { blocks }
}

/// The first line carries the source tokens, optionally preceded by a line
/// label and a speaker. Every further line is one target language.
pub fn read_block(lines: &[&str]) -> Block {
    let (label, speaker, rest) = match lines.first() {
        Some(first) => read_heading(first),
        None => return Block::default(),
    };

    let tokens: Vec<_> = rest
        .split_whitespace()
        .map(parse_token)
        .collect();

    let mut translations = Vec::with_capacity(lines.len() - 1);

    for line in &lines[1..] {
        let mut entries: Vec<String> = line
            .split_whitespace()
            .map(str::to_string)
            .collect();

        if entries.len() > tokens.len() {
            warn!(
                "Translation has {} entries for {} tokens{}; ignoring the surplus",
                entries.len(),
                tokens.len(),
                match &label {
                    Some(label) => format!(" on line ({})", label),
                    None => String::new(),
                }
            );
        }
        entries.resize(tokens.len(), String::new());

        translations.push(entries);
    }

    debug!(?label, ?speaker, tokens = tokens.len(), languages = translations.len());

    Block {
        label,
        speaker,
        tokens,
        translations,
    }
}

/// Take the optional `(18a)` label and `[Speaker]` off the front of a source
/// line, returning what remains.
fn read_heading(line: &str) -> (Option<String>, Option<String>, &str) {
    let mut rest = line;

    let re = regex!(r"^\((\d+[A-Za-z]?)\)\s*");
    let label = match re.captures(rest) {
        Some(cap) => {
            let label = cap
                .get(1)
                .map(|m| m.as_str().to_string());
            rest = &rest[cap
                .get(0)
                .map(|m| m.end())
                .unwrap_or(0)..];
            label
        }
        None => None,
    };

    let re = regex!(r"^\[([^\]]*)\]\s*");
    let speaker = match re.captures(rest) {
        Some(cap) => {
            let speaker = cap
                .get(1)
                .map(|m| m.as_str().trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            rest = &rest[cap
                .get(0)
                .map(|m| m.end())
                .unwrap_or(0)..];
            speaker
        }
        None => None,
    };

    (label, speaker, rest)
}
