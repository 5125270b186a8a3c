//! Resolution of the grammar abbreviations written on tokens, such as
//! `(Adj)` or `(A)`, into the tag identifiers rules are configured against.

use crate::language::TagId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    PartOfSpeech(&'static str),
    Case,
    VerbForm,
    Other,
}

// default group for specific tags on a token without a part of speech
const CASE_GROUP: &str = "nomen";
const FORM_GROUP: &str = "verb";

pub fn classify(tag: &str) -> TagKind {
    match tag {
        "Adj" => TagKind::PartOfSpeech("adj"),
        "Adv" => TagKind::PartOfSpeech("adv"),
        "Art" => TagKind::PartOfSpeech("artikel"),
        "Pr" | "Pron" => TagKind::PartOfSpeech("pronomen"),
        "Prp" => TagKind::PartOfSpeech("praeposition"),
        "Kon" => TagKind::PartOfSpeech("konjunktion"),
        "Pt" => TagKind::PartOfSpeech("partikel"),
        "Int" => TagKind::PartOfSpeech("interjektion"),
        "Num" => TagKind::PartOfSpeech("numerale"),
        "Subst" => TagKind::PartOfSpeech("nomen"),
        "Verb" => TagKind::PartOfSpeech("verb"),

        "N" | "G" | "D" | "A" | "V" | "Abl" | "Lok" => TagKind::Case,

        "Inf" | "Imp" | "Ptz" | "PPA" | "PPP" | "PFA" | "Ger" | "Gdv" | "Prs" | "Impf" | "Pf"
        | "Plqpf" | "Fut" | "Akt" | "Pass" | "Med" | "Aor" => TagKind::VerbForm,

        _ => TagKind::Other,
    }
}

/// The first part-of-speech group among a token's tags, if any.
pub fn part_of_speech(tags: &[String]) -> Option<&'static str> {
    tags.iter()
        .find_map(|tag| match classify(tag) {
            TagKind::PartOfSpeech(group) => Some(group),
            _ => None,
        })
}

/// Resolve every tag on a token to its identifier, one per tag and in the
/// same order. A case or verb form becomes a specific identifier under the
/// token's part of speech.
pub fn resolve(tags: &[String]) -> Vec<TagId> {
    let pos = part_of_speech(tags);

    tags.iter()
        .map(|tag| match classify(tag) {
            TagKind::PartOfSpeech(group) => TagId::group(group),
            TagKind::Case => TagId::specific(pos.unwrap_or(CASE_GROUP), tag),
            TagKind::VerbForm => TagId::specific(pos.unwrap_or(FORM_GROUP), tag),
            TagKind::Other => TagId::group(&tag.to_lowercase()),
        })
        .collect()
}
