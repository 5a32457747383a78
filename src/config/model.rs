use serde::{Deserialize, Serialize};

use crate::decorator::RuleProcessor;
use crate::error::Result;
use crate::rules::{
    CheckConfiguration, ENGINE_BUILTIN_CHECKS, RuleConfiguration, RuleDefinition, RuleRegistry,
};
use crate::unified::DEFAULT_NEEDS_REVIEW_RULES;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

const fn default_true() -> bool {
    true
}

fn default_needs_review_rules() -> Vec<String> {
    DEFAULT_NEEDS_REVIEW_RULES
        .iter()
        .map(|id| (*id).to_string())
        .collect()
}

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config schema version. Only "1" is accepted.
    #[serde(default)]
    pub version: Option<String>,

    /// Check messages whose checks are dropped from `any` lists.
    /// Matched case-insensitively after trimming.
    #[serde(default)]
    pub suppressed_messages: Vec<String>,

    /// Drop aria-hidden-focus failures caused by Fluent UI tabster dummy elements.
    #[serde(default = "default_true")]
    pub exclude_fluent_ui_tabster: bool,

    /// Data-only rule overrides [[rules]], applied after the built-in rules.
    #[serde(default)]
    pub rules: Vec<RuleOverride>,

    #[serde(default)]
    pub needs_review: NeedsReviewConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: None,
            suppressed_messages: Vec::new(),
            exclude_fluent_ui_tabster: true,
            rules: Vec::new(),
            needs_review: NeedsReviewConfig::default(),
        }
    }
}

impl Config {
    /// Built-in custom rules followed by this config's overrides.
    ///
    /// # Errors
    /// Returns `InvalidRuleConfiguration` when a rule references a check that
    /// is neither an engine built-in nor registered by another rule.
    pub fn rule_registry(&self) -> Result<RuleRegistry> {
        let registry = RuleRegistry::with_builtins()
            .extended(self.rules.iter().map(RuleOverride::to_rule_configuration));
        registry.validate(ENGINE_BUILTIN_CHECKS)?;
        Ok(registry)
    }

    #[must_use]
    pub fn rule_processor(&self) -> RuleProcessor {
        RuleProcessor::new(self.suppressed_messages.iter().map(String::as_str))
    }
}

// ============================================================================
// Rule overrides
// ============================================================================

/// Rule override [[rules]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleOverride {
    pub id: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub help: Option<String>,

    #[serde(default)]
    pub help_url: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Message overrides [[rules.checks]].
    #[serde(default)]
    pub checks: Vec<CheckOverride>,
}

impl RuleOverride {
    /// Rule configuration whose message generators return the configured strings.
    #[must_use]
    pub fn to_rule_configuration(&self) -> RuleConfiguration {
        let mut rule = RuleDefinition::new(&self.id)
            .with_enabled(self.enabled)
            .with_tags(self.tags.clone());
        rule.description.clone_from(&self.description);
        rule.help.clone_from(&self.help);
        rule.help_url.clone_from(&self.help_url);

        let checks = self
            .checks
            .iter()
            .map(CheckOverride::to_check_configuration)
            .collect();
        RuleConfiguration::new(rule, checks)
    }
}

/// Check message override [[rules.checks]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckOverride {
    pub id: String,

    #[serde(default)]
    pub pass_message: Option<String>,

    #[serde(default)]
    pub fail_message: Option<String>,
}

impl CheckOverride {
    #[must_use]
    pub fn to_check_configuration(&self) -> CheckConfiguration {
        let mut check = CheckConfiguration::new(&self.id);
        if let Some(message) = &self.pass_message {
            check = check.with_pass_message(message.clone());
        }
        if let Some(message) = &self.fail_message {
            check = check.with_fail_message(message.clone());
        }
        check
    }
}

// ============================================================================
// Needs review
// ============================================================================

/// Needs-review conversion settings [needs_review].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NeedsReviewConfig {
    /// Violation rule ids surfaced for manual review.
    #[serde(default = "default_needs_review_rules")]
    pub rules: Vec<String>,
}

impl Default for NeedsReviewConfig {
    fn default() -> Self {
        Self {
            rules: default_needs_review_rules(),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
