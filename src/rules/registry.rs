use std::collections::HashSet;

use tracing::warn;

use super::configuration::{CheckConfiguration, RuleConfiguration};
use super::custom;
use crate::error::{AxeReportError, Result};

/// Engine check ids referenced by the built-in custom rules.
pub const ENGINE_BUILTIN_CHECKS: &[&str] = &[
    "has-widget-role",
    "aria-label",
    "aria-labelledby",
    "non-empty-alt",
    "non-empty-title",
    "role-presentation",
    "role-none",
    "has-alt",
    "presentational-role",
];

/// Ordered list of rule configurations.
///
/// Lookups by rule id follow list order: later entries win, which lets
/// user overrides appended after the built-ins take precedence.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    configurations: Vec<RuleConfiguration>,
}

impl RuleRegistry {
    #[must_use]
    pub const fn new(configurations: Vec<RuleConfiguration>) -> Self {
        Self { configurations }
    }

    /// Registry holding the built-in custom rules.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::new(custom::builtin_rules())
    }

    /// Append configurations after the existing ones.
    #[must_use]
    pub fn extended(mut self, configurations: impl IntoIterator<Item = RuleConfiguration>) -> Self {
        self.configurations.extend(configurations);
        self
    }

    #[must_use]
    pub fn configurations(&self) -> &[RuleConfiguration] {
        &self.configurations
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    /// Last configuration registered for `rule_id`.
    #[must_use]
    pub fn find_rule(&self, rule_id: &str) -> Option<&RuleConfiguration> {
        self.configurations
            .iter()
            .rev()
            .find(|config| config.rule.id == rule_id)
    }

    /// First configured help URL for `rule_id`, in registration order.
    #[must_use]
    pub fn find_help_url(&self, rule_id: &str) -> Option<&str> {
        self.configurations
            .iter()
            .filter(|config| config.rule.id == rule_id)
            .find_map(|config| config.rule.help_url.as_deref())
    }

    /// Whether a rule should run. Rules without configuration are enabled.
    #[must_use]
    pub fn is_enabled(&self, rule_id: &str) -> bool {
        self.find_rule(rule_id).is_none_or(|config| config.rule.enabled)
    }

    /// Every check configuration across all rules, in registration order.
    pub fn checks(&self) -> impl Iterator<Item = &CheckConfiguration> {
        self.configurations.iter().flat_map(|config| config.checks.iter())
    }

    /// Ensure every referenced check id is either an engine built-in or registered here.
    ///
    /// # Errors
    /// Returns `InvalidRuleConfiguration` for the first rule with an empty id
    /// or an unknown check reference.
    pub fn validate(&self, engine_checks: &[&str]) -> Result<()> {
        let mut known: HashSet<&str> = engine_checks.iter().copied().collect();
        known.extend(self.checks().map(|check| check.id.as_str()));

        for config in &self.configurations {
            let rule = &config.rule;
            if rule.id.trim().is_empty() {
                return Err(AxeReportError::invalid_rule(&rule.id, "rule id must not be empty"));
            }
            if let Some(missing) = rule.check_ids().find(|id| !known.contains(id)) {
                warn!(rule_id = %rule.id, check_id = missing, "Rule references an unknown check");
                return Err(AxeReportError::invalid_rule(
                    &rule.id,
                    format!("unknown check '{missing}'"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
