//! Configuration semantic validation.
//!
//! Runs after parsing and before the config is turned into a rule registry.

use super::model::{CONFIG_VERSION, Config};
use crate::error::{AxeReportError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns `Config` for an unsupported version and `InvalidRuleConfiguration`
/// for rule overrides with empty rule or check ids.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_version(config)?;
    validate_rules(config)?;
    Ok(())
}

fn validate_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(AxeReportError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

fn validate_rules(config: &Config) -> Result<()> {
    for (i, rule) in config.rules.iter().enumerate() {
        if rule.id.trim().is_empty() {
            return Err(AxeReportError::invalid_rule(
                format!("rules[{i}]"),
                "rule id must not be empty",
            ));
        }
        if rule.checks.iter().any(|check| check.id.trim().is_empty()) {
            return Err(AxeReportError::invalid_rule(
                &rule.id,
                "check id must not be empty",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
