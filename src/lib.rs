//! Interlinear ("Birkenbihl method") texts: source tokens with word-for-word
//! glosses, grammar tags, color markers, and meter markers, laid out into
//! aligned tables.

#[macro_use]
mod regex;

pub mod config;
pub mod formatting;
pub mod language;
pub mod layout;
pub mod meter;
pub mod parsing;
pub mod rendering;
pub mod visibility;
