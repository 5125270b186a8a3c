use birkenbihl::language::ConfigError;

/// Generate problem and detail messages for tag configuration errors
pub fn generate_config_message(error: &ConfigError) -> (String, String) {
    match error {
        ConfigError::Malformed { details, .. } => (
            "Malformed tag configuration".to_string(),
            format!(
                r#"
The tag configuration must be a JSON object mapping tag identifiers to
rules, for example:

    {{ "adj": {{ "hide": true }}, "adj_A": {{ "hideTranslation": true }} }}

The decoder reported: {}
                "#,
                details
            )
            .trim_ascii()
            .to_string(),
        ),
        ConfigError::InvalidTagId(id) => (
            format!("Invalid tag identifier '{}'", id),
            r#"
Tag identifiers are either a group such as "adj" or "nomen", written in
lower case, or a group and a specific case or form joined by a single
underscore, such as "adj_A" or "verb_Inf".
            "#
            .trim_ascii()
            .to_string(),
        ),
    }
}
