mod error_output;
mod json;
mod text;

pub use error_output::{ErrorOutput, print_error};
pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use serde::Serialize;

use crate::error::Result;
use crate::model::{ScanResults, UnifiedResult, UnifiedRule};
use crate::scan::ScannerRuleInfo;

/// Unified rules and results produced from one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnifiedReport {
    pub rules: Vec<UnifiedRule>,
    pub results: Vec<UnifiedResult>,
}

/// Trait for rendering pipeline output in a given format.
pub trait OutputFormatter {
    /// Format decorated scan results.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_scan(&self, results: &ScanResults) -> Result<String>;

    /// Format unified rules and results.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_unified(&self, report: &UnifiedReport) -> Result<String>;

    /// Format the sifted rule catalog.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_rules(&self, rules: &[ScannerRuleInfo]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
