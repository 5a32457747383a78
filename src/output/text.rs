use std::fmt::Write;

use crate::error::Result;
use crate::model::{Bucket, InstanceResultStatus, RuleResult, ScanResults, UnifiedResolution};
use crate::scan::ScannerRuleInfo;

use super::{OutputFormatter, UnifiedReport, ansi};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    /// Passes and inapplicable rules are listed only when `verbose > 0`.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn bucket_style(bucket: Bucket) -> (&'static str, &'static str, &'static str) {
        match bucket {
            Bucket::Violations => ("✗", "VIOLATION", ansi::RED),
            Bucket::Incomplete => ("?", "INCOMPLETE", ansi::YELLOW),
            Bucket::Passes => ("✓", "PASS", ansi::GREEN),
            Bucket::Inapplicable => ("-", "INAPPLICABLE", ansi::DIM),
        }
    }

    const fn status_style(status: InstanceResultStatus) -> (&'static str, &'static str) {
        match status {
            InstanceResultStatus::Fail => ("FAIL", ansi::RED),
            InstanceResultStatus::Unknown => ("REVIEW", ansi::YELLOW),
            InstanceResultStatus::Pass => ("PASS", ansi::GREEN),
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_rule(&self, bucket: Bucket, rule: &RuleResult, output: &mut String) {
        let (icon, label, color) = Self::bucket_style(bucket);
        let nodes = rule.nodes.len();
        let noun = if nodes == 1 { "node" } else { "nodes" };
        let _ = writeln!(
            output,
            "{icon} {}: {} ({nodes} {noun})",
            self.colorize(label, color),
            rule.id
        );

        if let Some(help) = &rule.help {
            let _ = writeln!(output, "   {help}");
        }
        if let Some(url) = &rule.help_url {
            let _ = writeln!(output, "   Help: {url}");
        }
        if !rule.guidance_links.is_empty() {
            let names: Vec<&str> = rule.guidance_links.iter().map(|l| l.text.as_str()).collect();
            let _ = writeln!(output, "   Guidance: {}", names.join(", "));
        }
        if bucket == Bucket::Violations && self.verbose > 1 {
            for node in &rule.nodes {
                let _ = writeln!(output, "     - {}", node.target);
            }
        }
    }

    fn visible_buckets(&self) -> Vec<Bucket> {
        let mut buckets = vec![Bucket::Violations, Bucket::Incomplete];
        if self.verbose > 0 {
            buckets.extend([Bucket::Passes, Bucket::Inapplicable]);
        }
        buckets
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format_scan(&self, results: &ScanResults) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "Page: {} ({})",
            results.target_page_title, results.target_page_url
        );
        if !results.timestamp.is_empty() {
            let _ = writeln!(output, "Scanned: {}", results.timestamp);
        }
        let _ = writeln!(output);

        for bucket in self.visible_buckets() {
            for rule in results.bucket(bucket) {
                self.format_rule(bucket, rule, &mut output);
                let _ = writeln!(output);
            }
        }

        if results.frames_skipped {
            let note = self.colorize("Some frames were not scanned", ansi::YELLOW);
            let _ = writeln!(output, "Note: {note}");
        }

        let summary = results.summary();
        let _ = writeln!(
            output,
            "Summary: {} passed, {} violations ({} instances), {} incomplete, {} inapplicable",
            self.colorize(&summary.passes.to_string(), ansi::GREEN),
            self.colorize(&summary.violations.to_string(), ansi::RED),
            summary.failed_instances,
            self.colorize(&summary.incomplete.to_string(), ansi::YELLOW),
            summary.inapplicable
        );

        Ok(output)
    }

    fn format_unified(&self, report: &UnifiedReport) -> Result<String> {
        let mut output = String::new();

        for result in &report.results {
            if result.status == InstanceResultStatus::Pass && self.verbose == 0 {
                continue;
            }
            let (label, color) = Self::status_style(result.status);
            let _ = writeln!(
                output,
                "{} {}: {}",
                self.colorize(label, color),
                result.rule_id,
                result.identifiers.css_selector
            );
            match &result.resolution {
                UnifiedResolution::HowToFix { any, all, none } => {
                    for message in all.iter().chain(none).chain(any) {
                        let _ = writeln!(output, "   - {message}");
                    }
                }
                UnifiedResolution::HowToCheck { text } if !text.is_empty() => {
                    let _ = writeln!(output, "   {text}");
                }
                UnifiedResolution::HowToCheck { .. } => {}
            }
        }

        let count = |status: InstanceResultStatus| {
            report
                .results
                .iter()
                .filter(|r| r.status == status)
                .count()
        };
        let _ = writeln!(
            output,
            "Summary: {} rules, {} results ({} pass, {} fail, {} unknown)",
            report.rules.len(),
            report.results.len(),
            count(InstanceResultStatus::Pass),
            self.colorize(&count(InstanceResultStatus::Fail).to_string(), ansi::RED),
            count(InstanceResultStatus::Unknown)
        );

        Ok(output)
    }

    fn format_rules(&self, rules: &[ScannerRuleInfo]) -> Result<String> {
        let mut output = String::new();

        for rule in rules {
            let _ = writeln!(output, "{}", self.colorize(&rule.id, ansi::CYAN));
            if let Some(help) = &rule.help {
                let _ = writeln!(output, "   {help}");
            }
            if let Some(url) = &rule.url {
                let _ = writeln!(output, "   Help: {url}");
            }
            let criteria: Vec<&str> = rule.a11y_criteria.iter().map(|l| l.text.as_str()).collect();
            let _ = writeln!(output, "   Criteria: {}", criteria.join(", "));
        }
        let _ = writeln!(output, "Total: {} rules", rules.len());

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
