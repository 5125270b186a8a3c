//! Grammar tag identifiers and the rules configured against them

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A tag identifier is either a group (`adj`) or a group qualified by a
/// specific case or form (`adj_A`). The two are distinct keys; a rule on
/// one never applies to the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId {
    pub group: String,
    pub specific: Option<String>,
}

impl TagId {
    pub fn group(group: &str) -> TagId {
        TagId {
            group: group.to_string(),
            specific: None,
        }
    }

    pub fn specific(group: &str, specific: &str) -> TagId {
        TagId {
            group: group.to_string(),
            specific: Some(specific.to_string()),
        }
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.specific {
            Some(specific) => write!(f, "{}_{}", self.group, specific),
            None => write!(f, "{}", self.group),
        }
    }
}

/// Validate an identifier as written in a tag configuration, returning None
/// if it is not of the form `group` or `group_specific`.
pub fn validate_tag_id(input: &str) -> Option<TagId> {
    let re = regex!(r"^([a-z][a-z0-9]*)(?:_([A-Za-z][A-Za-z0-9]*))?$");

    let cap = re.captures(input)?;
    let group = cap
        .get(1)?
        .as_str();

    match cap.get(2) {
        Some(specific) => Some(TagId::specific(group, specific.as_str())),
        None => Some(TagId::group(group)),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    #[default]
    #[serde(rename = "COLOR")]
    Color,
    #[serde(rename = "BLACK_WHITE")]
    BlackWhite,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagRule {
    #[serde(default)]
    pub hide: bool,
    #[serde(default, rename = "hideTranslation", alias = "hide_translation")]
    pub hide_translation: bool,
    #[serde(default)]
    pub color_mode: ColorMode,
}

/// Rules keyed by tag identifier. Identifiers without an entry are fully
/// visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleTable {
    rules: HashMap<TagId, TagRule>,
}

impl RuleTable {
    pub fn new() -> RuleTable {
        RuleTable::default()
    }

    pub fn insert(&mut self, id: TagId, rule: TagRule) {
        self.rules
            .insert(id, rule);
    }

    pub fn get(&self, id: &TagId) -> Option<&TagRule> {
        self.rules
            .get(id)
    }

    /// The rule for an identifier, or the fully visible default.
    pub fn rule(&self, id: &TagId) -> TagRule {
        self.get(id)
            .copied()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rules
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules
            .is_empty()
    }
}

impl FromIterator<(TagId, TagRule)> for RuleTable {
    fn from_iter<T: IntoIterator<Item = (TagId, TagRule)>>(iter: T) -> Self {
        RuleTable {
            rules: iter
                .into_iter()
                .collect(),
        }
    }
}
