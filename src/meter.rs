//! Detection of prosodic (meter) markup.
//!
//! The letters `i` and `L` double as meter markers, so ordinary prose will
//! always contain a few. A line only counts as metered when it carries
//! enough markers, and a document only when one line carries many or
//! several lines carry some.

use serde::Serialize;
use tracing::debug;

use crate::language::{Block, Document, MeterPositions, Token};

/// Thresholds for deciding whether markup is prosodic. The per-line
/// threshold and the number of lines needed are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterThresholds {
    /// Markers on a line for it to count toward the document tally.
    pub per_line: usize,
    /// Markers on a single line that settle the question outright.
    pub total: usize,
    /// Lines at or above `per_line` needed for the document to be metered.
    pub min_lines: usize,
}

impl Default for MeterThresholds {
    fn default() -> Self {
        MeterThresholds {
            per_line: 3,
            total: 10,
            min_lines: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MeterSignal {
    None,
    Weak,
    Strong,
}

pub fn count_markers(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .map(Token::marker_count)
        .sum()
}

pub fn classify_line(tokens: &[Token], thresholds: &MeterThresholds) -> MeterSignal {
    let count = count_markers(tokens);

    if count >= thresholds.total {
        MeterSignal::Strong
    } else if count >= thresholds.per_line {
        MeterSignal::Weak
    } else {
        MeterSignal::None
    }
}

pub fn line_has_meter(tokens: &[Token], per_line_threshold: usize, total_threshold: usize) -> bool {
    let thresholds = MeterThresholds {
        per_line: per_line_threshold,
        total: total_threshold,
        ..MeterThresholds::default()
    };

    classify_line(tokens, &thresholds) != MeterSignal::None
}

pub fn document_has_meter(
    blocks: &[Block],
    min_lines_with_markers: usize,
    per_line_threshold: usize,
) -> bool {
    let thresholds = MeterThresholds {
        per_line: per_line_threshold,
        min_lines: min_lines_with_markers,
        ..MeterThresholds::default()
    };

    is_metered(blocks, &thresholds)
}

pub fn is_metered(blocks: &[Block], thresholds: &MeterThresholds) -> bool {
    let mut lines = 0;

    for block in blocks {
        match classify_line(&block.tokens, thresholds) {
            MeterSignal::Strong => return true,
            MeterSignal::Weak => lines += 1,
            MeterSignal::None => {}
        }
    }

    lines >= thresholds.min_lines
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkerCounts {
    #[serde(rename = "i")]
    pub short: usize,
    #[serde(rename = "L")]
    pub long: usize,
    #[serde(rename = "|")]
    pub foot: usize,
}

/// Marker positions for every source token, in document order, along with
/// totals by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MeterReport {
    pub tokens: Vec<MeterPositions>,
    pub counts: MarkerCounts,
}

/// Report the meter markers of a document, or None if the document does not
/// carry prosodic markup.
pub fn detect_meter(document: &Document, thresholds: &MeterThresholds) -> Option<MeterReport> {
    if !is_metered(&document.blocks, thresholds) {
        debug!("No meter markup detected");
        return None;
    }

    let mut report = MeterReport::default();

    for token in document
        .blocks
        .iter()
        .flat_map(|block| block.tokens.iter())
    {
        report
            .counts
            .short += token
            .meter
            .short
            .len();
        report
            .counts
            .long += token
            .meter
            .long
            .len();
        report
            .counts
            .foot += token
            .meter
            .foot
            .len();
        report
            .tokens
            .push(token.meter.clone());
    }

    debug!(counts = ?report.counts, "Meter markup detected");

    Some(report)
}
