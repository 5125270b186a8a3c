//! Decide what of each token's annotation is shown, given the configured
//! tag rules.
//!
//! Every tag on a token is resolved to its own identifier and looked up on
//! its own: hiding the group tag `adj` leaves the case tag `adj_A` in place
//! and the other way around. Translations are hidden defensively; only when
//! every tag on a token asks for its translation to be hidden does it go.

use tracing::debug;

use crate::language::grammar;
use crate::language::{Block, ColorMarker, ColorMode, RuleTable, TagId, Token};

/// Settings that apply to the whole render rather than to one tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityOptions {
    pub color_mode: ColorMode,
    /// When set, only tokens of these part-of-speech groups keep their
    /// color marker.
    pub permitted_groups: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleToken {
    /// The core text followed by every tag that remains shown.
    pub text: String,
    pub color: Option<ColorMarker>,
}

impl VisibleToken {
    pub fn display(&self) -> String {
        match self.color {
            Some(marker) => format!("{}{}", marker, self.text),
            None => self
                .text
                .clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleBlock {
    pub label: Option<String>,
    pub speaker: Option<String>,
    pub tokens: Vec<VisibleToken>,
    pub translations: Vec<Vec<String>>,
}

impl VisibleBlock {
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

/// Apply the rules to every block. The input blocks and the rule table are
/// left untouched.
pub fn apply_visibility(
    blocks: &[Block],
    rules: &RuleTable,
    options: &VisibilityOptions,
) -> Vec<VisibleBlock> {
    blocks
        .iter()
        .map(|block| apply_to_block(block, rules, options))
        .collect()
}

fn apply_to_block(block: &Block, rules: &RuleTable, options: &VisibilityOptions) -> VisibleBlock {
    let mut translations = block
        .translations
        .clone();
    let mut tokens = Vec::with_capacity(
        block
            .tokens
            .len(),
    );

    for (position, token) in block
        .tokens
        .iter()
        .enumerate()
    {
        let ids = grammar::resolve(&token.tags);

        if hides_translation(&ids, rules) {
            debug!(token = %token.raw, "Hiding translation");
            for language in &mut translations {
                if let Some(entry) = language.get_mut(position) {
                    entry.clear();
                }
            }
        }

        tokens.push(visible_token(token, &ids, rules, options));
    }

    VisibleBlock {
        label: block
            .label
            .clone(),
        speaker: block
            .speaker
            .clone(),
        tokens,
        translations,
    }
}

/// Count the translation entries that the rules cleared. Entries that were
/// already empty in the source are not counted.
pub fn cleared_translations(blocks: &[Block], visible: &[VisibleBlock]) -> usize {
    blocks
        .iter()
        .zip(visible)
        .flat_map(|(block, shown)| {
            block
                .translations
                .iter()
                .zip(&shown.translations)
        })
        .flat_map(|(before, after)| before.iter().zip(after))
        .filter(|(before, after)| !before.is_empty() && after.is_empty())
        .count()
}

/// True only if there is at least one tag and every one of them is
/// configured to hide the translation.
pub fn hides_translation(ids: &[TagId], rules: &RuleTable) -> bool {
    !ids.is_empty()
        && ids
            .iter()
            .all(|id| {
                rules
                    .rule(id)
                    .hide_translation
            })
}

fn visible_token(
    token: &Token,
    ids: &[TagId],
    rules: &RuleTable,
    options: &VisibilityOptions,
) -> VisibleToken {
    let mut text = token
        .core
        .clone();

    for (tag, id) in token
        .tags
        .iter()
        .zip(ids)
    {
        if rules
            .rule(id)
            .hide
        {
            continue;
        }
        text.push('(');
        text.push_str(tag);
        text.push(')');
    }

    let color = match token.color {
        Some(marker) if keeps_color(ids, rules, options) => Some(marker),
        _ => None,
    };

    VisibleToken { text, color }
}

fn keeps_color(ids: &[TagId], rules: &RuleTable, options: &VisibilityOptions) -> bool {
    if options.color_mode == ColorMode::BlackWhite {
        return false;
    }

    if ids
        .iter()
        .any(|id| {
            rules
                .rule(id)
                .color_mode
                == ColorMode::BlackWhite
        })
    {
        return false;
    }

    match &options.permitted_groups {
        Some(groups) => ids
            .iter()
            .any(|id| groups.contains(&id.group)),
        None => true,
    }
}
