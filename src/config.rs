//! Decoding of tag configuration into a validated rule table

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::language::{validate_tag_id, ConfigError, RuleTable, TagRule};

/// Build the rule table for a render. No configuration means every tag is
/// visible; a configuration that cannot be decoded is an error.
pub fn load_rules(content: Option<&str>) -> Result<RuleTable, ConfigError> {
    match content {
        Some(content) => parse_rules(content),
        None => {
            debug!("No tag configuration supplied; all tags visible");
            Ok(RuleTable::new())
        }
    }
}

/// Decode a JSON object mapping tag identifiers to rules. Every identifier
/// is validated here so that a typo fails loudly instead of never matching.
pub fn parse_rules(content: &str) -> Result<RuleTable, ConfigError> {
    let records: BTreeMap<String, TagRule> =
        serde_json::from_str(content).map_err(|error| ConfigError::Malformed {
            line: error.line(),
            column: error.column(),
            details: error.to_string(),
        })?;

    let mut table = RuleTable::new();

    for (key, rule) in records {
        let id = match validate_tag_id(&key) {
            Some(id) => id,
            None => return Err(ConfigError::InvalidTagId(key)),
        };
        table.insert(id, rule);
    }

    info!(
        "Loaded {} tag rule{}",
        table.len(),
        if table.len() == 1 { "" } else { "s" }
    );

    Ok(table)
}
