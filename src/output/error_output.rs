//! Colored error output on stderr.
//!
//! Format: `✖ {error_type}: {message}` followed by an optional `help:` line.

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;
use crate::error::AxeReportError;

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    fn stderr_supports_color() -> bool {
        // https://no-color.org: presence of the variable disables color
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Prints an error with a hint derived from its variant.
    pub fn print(&self, error: &AxeReportError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error);
    }

    /// Writes error to a writer (for testing).
    pub fn write_error<W: Write>(&self, w: &mut W, error: &AxeReportError) {
        // Write failures on stderr are not recoverable here.
        let error_type = error.error_type();
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {error}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {error}");
        }

        if let Some(source) = std::error::Error::source(error) {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {source}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {source}");
            }
        }

        if let Some(hint) = suggestion(error) {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {hint}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {hint}");
            }
        }
    }
}

const fn suggestion(error: &AxeReportError) -> Option<&'static str> {
    match error {
        AxeReportError::TomlParse(_) | AxeReportError::Config(_) => {
            Some("check the config file or pass --no-config to use defaults")
        }
        AxeReportError::InvalidRuleConfiguration { .. } => {
            Some("every check id must be an engine check or defined in [[rules.checks]]")
        }
        AxeReportError::Json(_) => Some("input must be engine results JSON"),
        AxeReportError::UnknownRule(_) => Some("run `axe-report rules <CATALOG>` to list rules"),
        _ => None,
    }
}

/// Prints an error using auto-detected color mode.
pub fn print_error(error: &AxeReportError) {
    ErrorOutput::new(ColorMode::Auto).print(error);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
