use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AxeReportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scan engine error: {0}")]
    Engine(String),

    #[error("Invalid configuration for rule '{rule_id}': {reason}")]
    InvalidRuleConfiguration { rule_id: String, reason: String },

    #[error("Unknown rule: {0}")]
    UnknownRule(String),
}

impl AxeReportError {
    /// Stable variant name, used in machine-readable error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::Json(_) => "Json",
            Self::Engine(_) => "Engine",
            Self::InvalidRuleConfiguration { .. } => "InvalidRuleConfiguration",
            Self::UnknownRule(_) => "UnknownRule",
        }
    }

    /// Build an `InvalidRuleConfiguration` error.
    #[must_use]
    pub fn invalid_rule(rule_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRuleConfiguration {
            rule_id: rule_id.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AxeReportError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
