//! Parser for the annotations carried by a single source token

use std::borrow::Cow;

use crate::language::{ColorMarker, MeterKind, MeterPositions, Token};

/// Parse a raw token such as `#Sorōrem(Adj)(A)` into its core text, color
/// marker, grammar tags, and meter marker positions. This never fails;
/// anything not recognized as an annotation stays in the core.
pub fn parse_token(raw: &str) -> Token {
    let (color, rest) = split_color_marker(raw);
    let (core, tags) = strip_tags(&rest);
    let meter = scan_meter(&core);

    Token {
        raw: raw.to_string(),
        core,
        color,
        tags,
        meter,
    }
}

/// Remove a leading color marker. A `|` in front of the marker is a foot
/// separator and stays with the text.
fn split_color_marker(raw: &str) -> (Option<ColorMarker>, Cow<'_, str>) {
    let mut chars = raw.chars();

    match chars.next() {
        Some('|') => {
            let mut rest = chars.clone();
            if let Some(marker) = rest
                .next()
                .and_then(ColorMarker::from_char)
            {
                let mut text = String::with_capacity(raw.len());
                text.push('|');
                text.push_str(rest.as_str());
                return (Some(marker), Cow::Owned(text));
            }
            (None, Cow::Borrowed(raw))
        }
        Some(c) => match ColorMarker::from_char(c) {
            Some(marker) => (Some(marker), Cow::Borrowed(chars.as_str())),
            None => (None, Cow::Borrowed(raw)),
        },
        None => (None, Cow::Borrowed(raw)),
    }
}

/// Repeatedly take the leftmost `(...)` group out of the text, collecting
/// its contents as a tag. Unbalanced parentheses are left in place.
pub fn strip_tags(text: &str) -> (String, Vec<String>) {
    let re = regex!(r"\(([^()]*)\)");

    let mut remaining = text.to_string();
    let mut tags = Vec::new();

    loop {
        let found = re
            .captures(&remaining)
            .and_then(|cap| {
                let whole = cap
                    .get(0)?
                    .range();
                let inner = cap
                    .get(1)
                    .map(|m| m.as_str())
                    .unwrap_or("")
                    .to_string();
                Some((whole, inner))
            });

        let Some((whole, inner)) = found else {
            break;
        };

        tags.push(inner);
        remaining.replace_range(whole, "");
    }

    (remaining, tags)
}

fn scan_meter(core: &str) -> MeterPositions {
    let mut positions = MeterPositions::default();

    for (offset, c) in core
        .chars()
        .enumerate()
    {
        if let Some(kind) = MeterKind::from_char(c) {
            positions.record(kind, offset);
        }
    }

    positions
}
