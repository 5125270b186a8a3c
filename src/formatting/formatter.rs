//! Table formatter for interlinear blocks

use crate::formatting::*;
use crate::layout::{column_widths, Measure, Placement};
use crate::visibility::VisibleBlock;

/// Convert laid-out blocks into tagged fragments. Each block becomes its
/// source line followed by one line per target language, with columns
/// padded so that every translation sits under its token. Staggered lines
/// are shifted right by their placement indent.
pub fn format_table(
    blocks: &[VisibleBlock],
    placements: &[Placement],
    measure: &impl Measure,
) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new(label_width(blocks));

    for (i, (block, placement)) in blocks
        .iter()
        .zip(placements)
        .enumerate()
    {
        if i > 0 {
            output.append_char('\n');
        }
        output.format_block(block, placement, measure);
    }

    output.fragments
}

fn label_text(label: &str) -> String {
    format!("({})", label)
}

fn label_width(blocks: &[VisibleBlock]) -> usize {
    blocks
        .iter()
        .filter_map(|block| {
            block
                .label
                .as_deref()
        })
        .map(|label| {
            label_text(label)
                .chars()
                .count()
                + 1
        })
        .max()
        .unwrap_or(0)
}

// widths become character columns in units of one gap
fn to_columns(width: f64, measure: &impl Measure) -> usize {
    let unit = measure.gap();
    if unit > 0.0 {
        (width / unit).round() as usize
    } else {
        0
    }
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
    label_width: usize,
}

impl Formatter {
    fn new(label_width: usize) -> Formatter {
        Formatter {
            fragments: Vec::new(),
            label_width,
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        if content.is_empty() {
            return;
        }
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn append_char(&mut self, c: char) {
        if c == '\n' {
            self.trim_line();
            self.fragments
                .push((Syntax::Newline, "\n".to_string()));
        } else {
            self.append(Syntax::Neutral, &c.to_string());
        }
    }

    fn pad(&mut self, width: usize) {
        if width > 0 {
            self.append(Syntax::Indent, &" ".repeat(width));
        }
    }

    // drop padding left dangling at the end of a line
    fn trim_line(&mut self) {
        while let Some((Syntax::Indent, _)) = self
            .fragments
            .last()
        {
            self.fragments
                .pop();
        }
    }

    fn format_block(
        &mut self,
        block: &VisibleBlock,
        placement: &Placement,
        measure: &impl Measure,
    ) {
        let columns: Vec<usize> = column_widths(block, measure)
            .into_iter()
            .map(|width| to_columns(width, measure))
            .collect();
        let indent = to_columns(placement.indent, measure);
        let speaker_width = block
            .speaker
            .as_deref()
            .map(|speaker| {
                speaker
                    .chars()
                    .count()
                    + 1
            })
            .unwrap_or(0);

        // source line

        match &block.label {
            Some(label) => {
                let text = label_text(label);
                let used = text
                    .chars()
                    .count();
                self.append(Syntax::Label, &text);
                self.pad(self.label_width - used);
            }
            None => self.pad(self.label_width),
        }
        self.pad(indent);

        if let Some(speaker) = &block.speaker {
            self.append(Syntax::Speaker, speaker);
            self.pad(1);
        }

        for (position, token) in block
            .tokens
            .iter()
            .enumerate()
        {
            let text = token.display();
            let syntax = match token.color {
                Some(marker) => Syntax::Highlight(marker),
                None => Syntax::Word,
            };
            self.append(syntax, &text);
            self.pad_column(&text, columns[position]);
        }
        self.append_char('\n');

        // one line per target language

        for language in &block.translations {
            self.pad(self.label_width + indent + speaker_width);

            for (position, width) in columns
                .iter()
                .enumerate()
            {
                let gloss = language
                    .get(position)
                    .map(String::as_str)
                    .unwrap_or("");
                self.append(Syntax::Translation, gloss);
                self.pad_column(gloss, *width);
            }
            self.append_char('\n');
        }
    }

    // fill out the rest of a column plus the gap before the next one
    fn pad_column(&mut self, content: &str, width: usize) {
        let used = content
            .chars()
            .count();
        self.pad(width.saturating_sub(used) + 1);
    }
}
