//! Renderer for colourizing interlinear tables in a terminal

use owo_colors::OwoColorize;

use crate::formatting::*;
use crate::language::ColorMarker;

/// Embellish fragments with ANSI escapes so that color-marked words show in
/// their colour.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Indent => content.to_string(),
            Syntax::Newline => "\n".to_string(),
            Syntax::Label => content // #999999 (grey)
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .to_string(),
            Syntax::Speaker => content // #75507b (plum) bold
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .bold()
                .to_string(),
            Syntax::Word => content
                .bright_white()
                .bold()
                .to_string(),
            Syntax::Highlight(marker) => highlight(marker, content),
            Syntax::Translation => content.to_string(),
        }
    }
}

fn highlight(marker: ColorMarker, content: &str) -> String {
    match marker {
        ColorMarker::Hash => content // #cc0000 (red) bold
            .color(owo_colors::Rgb(0xcc, 0x00, 0x00))
            .bold()
            .to_string(),
        ColorMarker::Plus => content // #4e9a06 (green) bold
            .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
            .bold()
            .to_string(),
        ColorMarker::Minus => content // #3465a4 (blue) bold
            .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
            .bold()
            .to_string(),
        ColorMarker::Section => content // #ad7fa8 (purple) bold
            .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
            .bold()
            .to_string(),
        ColorMarker::Dollar => content // #f57900 (orange) bold
            .color(owo_colors::Rgb(0xf5, 0x79, 0x00))
            .bold()
            .to_string(),
    }
}
