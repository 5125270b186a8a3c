//! Horizontal placement of staggered lines.
//!
//! A line numbered `18a`, `18b`, ... is an aside inserted under line `18`
//! and is drawn indented past everything already drawn under that number.
//! Each pass keeps a running width total per base number; a staggered
//! line's indent is the total as it stood before the line itself is added,
//! and every line under the base number adds to the total afterwards,
//! staggered or not.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

mod measure;

pub use measure::*;

/// A line label such as `18`, `(18b)`, or `9i`, split into its base number
/// and an alphabetic suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub base: String,
    pub suffix: Option<char>,
}

impl Label {
    pub fn parse(text: &str) -> Label {
        let text = text.trim();
        let text = match text
            .strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
        {
            Some(inner) => inner.trim(),
            None => text,
        };

        match text
            .chars()
            .last()
        {
            Some(c) if c.is_alphabetic() => Label {
                base: text[..text.len() - c.len_utf8()].to_string(),
                suffix: Some(c),
            },
            _ => Label {
                base: text.to_string(),
                suffix: None,
            },
        }
    }

    /// Only the suffixes a to g mark a staggered line; later letters are used
    /// for other kinds of insertion.
    pub fn is_staggered(&self) -> bool {
        let numbered = !self
            .base
            .is_empty()
            && self
                .base
                .chars()
                .all(|c| c.is_ascii_digit());

        numbered && matches!(self.suffix, Some('a'..='g'))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineRecord {
    pub label: String,
    pub speaker: Option<String>,
    pub token_width: f64,
    pub speaker_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub indent: f64,
    pub is_staggered: bool,
    pub base: String,
}

/// Running width totals for one layout pass, keyed by base line number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CumulativeWidths {
    totals: HashMap<String, f64>,
}

impl CumulativeWidths {
    pub fn new() -> CumulativeWidths {
        CumulativeWidths::default()
    }

    pub fn total(&self, base: &str) -> f64 {
        self.totals
            .get(base)
            .copied()
            .unwrap_or(0.0)
    }

    /// Place one line. The indent is read before this line's own widths are
    /// added to the total for its base number.
    pub fn place(&mut self, record: &LineRecord) -> Placement {
        let label = Label::parse(&record.label);
        let is_staggered = label.is_staggered();

        let indent = if is_staggered {
            self.total(&label.base)
        } else {
            0.0
        };

        *self
            .totals
            .entry(label.base.clone())
            .or_insert(0.0) += record.token_width + record.speaker_width;

        Placement {
            indent,
            is_staggered,
            base: label.base,
        }
    }
}

/// Lay out a sequence of lines in document order with a fresh state.
pub fn lay_out(records: &[LineRecord]) -> Vec<Placement> {
    let mut state = CumulativeWidths::new();
    lay_out_with(records, &mut state)
}

/// Lay out a sequence of lines, continuing from a caller-owned state.
pub fn lay_out_with(records: &[LineRecord], state: &mut CumulativeWidths) -> Vec<Placement> {
    records
        .iter()
        .map(|record| {
            let placement = state.place(record);
            if placement.is_staggered {
                debug!(label = %record.label, indent = placement.indent, "Staggered line");
            }
            placement
        })
        .collect()
}
