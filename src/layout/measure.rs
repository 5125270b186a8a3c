//! Width measurement of visible blocks.

use crate::layout::LineRecord;
use crate::visibility::VisibleBlock;

/// Supplies the rendered width of a piece of text. Units are whatever the
/// output medium uses; the layout only adds them up.
pub trait Measure {
    fn width(&self, text: &str) -> f64;

    /// Space left between adjacent columns.
    fn gap(&self) -> f64 {
        self.width(" ")
    }
}

/// Every character takes the same advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monospace {
    pub advance: f64,
}

impl Default for Monospace {
    fn default() -> Self {
        Monospace { advance: 1.0 }
    }
}

impl Measure for Monospace {
    fn width(&self, text: &str) -> f64 {
        text.chars()
            .count() as f64
            * self.advance
    }
}

/// Width of each token column: the widest of the token and its translations.
pub fn column_widths(block: &VisibleBlock, measure: &impl Measure) -> Vec<f64> {
    block
        .tokens
        .iter()
        .enumerate()
        .map(|(position, token)| {
            block
                .glosses(position)
                .map(|gloss| measure.width(gloss))
                .fold(measure.width(&token.display()), f64::max)
        })
        .collect()
}

/// Build the layout input for each block: the token columns plus a gap each,
/// and the speaker plus a gap if there is one.
pub fn line_records(blocks: &[VisibleBlock], measure: &impl Measure) -> Vec<LineRecord> {
    blocks
        .iter()
        .map(|block| {
            let token_width: f64 = column_widths(block, measure)
                .iter()
                .map(|width| width + measure.gap())
                .sum();

            let speaker_width = match &block.speaker {
                Some(speaker) => measure.width(speaker) + measure.gap(),
                None => 0.0,
            };

            LineRecord {
                label: block
                    .label
                    .clone()
                    .unwrap_or_default(),
                speaker: block
                    .speaker
                    .clone(),
                token_width,
                speaker_width,
            }
        })
        .collect()
}
