use std::{fmt, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// Problems decoding a tag configuration. Having no configuration at all is
/// not an error; it means every tag is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Malformed {
        line: usize,
        column: usize,
        details: String,
    },
    InvalidTagId(String),
}

impl ConfigError {
    pub fn problem(&self) -> String {
        match self {
            ConfigError::Malformed { .. } => "malformed tag configuration".to_string(),
            ConfigError::InvalidTagId(id) => format!("invalid tag identifier '{}'", id),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Malformed {
                line,
                column,
                details,
            } => write!(f, "{} at {}:{}: {}", self.problem(), line, column, details),
            ConfigError::InvalidTagId(_) => write!(f, "{}", self.problem()),
        }
    }
}

impl std::error::Error for ConfigError {}
