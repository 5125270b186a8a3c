use owo_colors::OwoColorize;
use std::path::Path;

use birkenbihl::language::{ConfigError, LoadingError};

use super::messages::generate_config_message;

/// Format a configuration error with full details, quoting the offending
/// line of the configuration where it can be located.
pub fn full_config_error(error: &ConfigError, filename: &Path, source: &str) -> String {
    let (problem, details) = generate_config_message(error);

    let position = match error {
        ConfigError::Malformed { line, column, .. } => Some((*line, *column)),
        ConfigError::InvalidTagId(id) => locate(source, &format!("\"{}\"", id)),
    };

    let (line, column) = match position {
        Some((line, column)) if line > 0 => (line, column.max(1)),
        _ => {
            return format!(
                "{}: {}: {}\n\n{}",
                "error".bright_red(),
                filename.to_string_lossy(),
                problem.bold(),
                details
            );
        }
    };

    let code = source
        .lines()
        .nth(line - 1)
        .unwrap_or("?");
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a configuration error with concise single-line output
pub fn concise_config_error(error: &ConfigError, filename: &Path) -> String {
    let (problem, _) = generate_config_message(error);

    format!(
        "{}: {}: {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        problem.bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    let mut result = format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    );
    if !error
        .details
        .is_empty()
    {
        result.push_str(" (");
        result.push_str(&error.details);
        result.push(')');
    }
    result
}

// One-origin line and column of the first occurrence of needle
fn locate(source: &str, needle: &str) -> Option<(usize, usize)> {
    let offset = source.find(needle)?;
    let line = calculate_line_number(source, offset);
    let column = calculate_column_number(source, offset);
    Some((line + 1, column + 1))
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
