//! Types representing a parsed interlinear document

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// One numbered line of the text: the source tokens and, for each target
/// language, a translation entry per source token position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub label: Option<String>,
    pub speaker: Option<String>,
    pub tokens: Vec<Token>,
    pub translations: Vec<Vec<String>>,
}

impl Block {
    /// The translation of the token at `position` in every target language.
    pub fn glosses(&self, position: usize) -> impl Iterator<Item = &str> {
        self.translations
            .iter()
            .map(move |language| {
                language
                    .get(position)
                    .map(String::as_str)
                    .unwrap_or("")
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub raw: String,
    pub core: String,
    pub color: Option<ColorMarker>,
    pub tags: Vec<String>,
    pub meter: MeterPositions,
}

impl Token {
    pub fn marker_count(&self) -> usize {
        self.meter
            .count()
    }

    /// Render the token back into its source form: color marker, core, then
    /// every tag in parentheses.
    pub fn display(&self) -> String {
        let mut result = String::with_capacity(self.raw.len());
        if let Some(marker) = self.color {
            result.push(marker.as_char());
        }
        result.push_str(&self.core);
        for tag in &self.tags {
            result.push('(');
            result.push_str(tag);
            result.push(')');
        }
        result
    }
}

// Color markers are a single control character at the front of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMarker {
    Hash,    // #
    Plus,    // +
    Minus,   // -
    Section, // §
    Dollar,  // $
}

impl ColorMarker {
    pub fn from_char(c: char) -> Option<ColorMarker> {
        match c {
            '#' => Some(ColorMarker::Hash),
            '+' => Some(ColorMarker::Plus),
            '-' => Some(ColorMarker::Minus),
            '§' => Some(ColorMarker::Section),
            '$' => Some(ColorMarker::Dollar),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            ColorMarker::Hash => '#',
            ColorMarker::Plus => '+',
            ColorMarker::Minus => '-',
            ColorMarker::Section => '§',
            ColorMarker::Dollar => '$',
        }
    }
}

impl fmt::Display for ColorMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterKind {
    Short, // i
    Long,  // L
    Foot,  // |
}

impl MeterKind {
    pub fn from_char(c: char) -> Option<MeterKind> {
        match c {
            'i' => Some(MeterKind::Short),
            'L' => Some(MeterKind::Long),
            '|' => Some(MeterKind::Foot),
            _ => None,
        }
    }
}

/// Character offsets into a token's core, by kind of meter marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MeterPositions {
    #[serde(rename = "i")]
    pub short: Vec<usize>,
    #[serde(rename = "L")]
    pub long: Vec<usize>,
    #[serde(rename = "|")]
    pub foot: Vec<usize>,
}

impl MeterPositions {
    pub fn record(&mut self, kind: MeterKind, offset: usize) {
        match kind {
            MeterKind::Short => self
                .short
                .push(offset),
            MeterKind::Long => self
                .long
                .push(offset),
            MeterKind::Foot => self
                .foot
                .push(offset),
        }
    }

    pub fn count(&self) -> usize {
        self.short
            .len()
            + self
                .long
                .len()
            + self
                .foot
                .len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
