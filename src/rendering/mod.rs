//! Renderers for interlinear tables

use crate::formatting::*;
use crate::layout::{Measure, Placement};
use crate::visibility::VisibleBlock;

mod terminal;

pub use terminal::Terminal;

/// We do the table rendering in two passes. First we lay the blocks out into
/// a Vec of "fragments" (Syntax tag, String pairs). Then second we apply the
/// specified renderer to each pair to result in an embellished String.
pub fn render(
    renderer: &impl Render,
    blocks: &[VisibleBlock],
    placements: &[Placement],
    measure: &impl Measure,
) -> String {
    // Pass 1: Format blocks to tagged fragments
    let fragments = format_table(blocks, placements, measure);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    output
}
