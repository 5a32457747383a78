use super::*;
use crate::rules::RuleDefinition;

fn rule(id: &str) -> RuleDefinition {
    RuleDefinition::new(id)
}

#[test]
fn find_rule_returns_last_match() {
    let registry = RuleRegistry::new(vec![
        RuleConfiguration::new(rule("r1").with_help("first"), vec![]),
        RuleConfiguration::new(rule("r2"), vec![]),
        RuleConfiguration::new(rule("r1").with_help("second"), vec![]),
    ]);

    let found = registry.find_rule("r1").unwrap();
    assert_eq!(found.rule.help.as_deref(), Some("second"));
    assert!(registry.find_rule("missing").is_none());
}

#[test]
fn find_help_url_returns_first_defined() {
    let registry = RuleRegistry::new(vec![
        RuleConfiguration::new(rule("r1"), vec![]),
        RuleConfiguration::new(rule("r1").with_help_url("https://a.test"), vec![]),
        RuleConfiguration::new(rule("r1").with_help_url("https://b.test"), vec![]),
    ]);
    assert_eq!(registry.find_help_url("r1"), Some("https://a.test"));
    assert_eq!(registry.find_help_url("r2"), None);
}

#[test]
fn unconfigured_rules_are_enabled() {
    let registry = RuleRegistry::new(vec![RuleConfiguration::new(
        rule("off").with_enabled(false),
        vec![],
    )]);
    assert!(!registry.is_enabled("off"));
    assert!(registry.is_enabled("color-contrast"));
}

#[test]
fn extended_entries_override_builtins() {
    let registry = RuleRegistry::with_builtins().extended([RuleConfiguration::new(
        rule("image-function").with_enabled(false),
        vec![],
    )]);
    assert!(!registry.is_enabled("image-function"));
    assert!(registry.is_enabled("link-function"));
}

#[test]
fn builtins_validate_against_engine_checks() {
    RuleRegistry::with_builtins()
        .validate(ENGINE_BUILTIN_CHECKS)
        .unwrap();
}

#[test]
fn validate_rejects_unknown_check() {
    let registry = RuleRegistry::new(vec![RuleConfiguration::new(
        rule("custom").with_any(&["missing-check"]),
        vec![],
    )]);
    let err = registry.validate(&[]).unwrap_err();
    assert_eq!(err.error_type(), "InvalidRuleConfiguration");
    assert!(err.to_string().contains("missing-check"));
}

#[test]
fn validate_accepts_checks_from_other_configurations() {
    let registry = RuleRegistry::new(vec![
        RuleConfiguration::new(rule("a"), vec![CheckConfiguration::new("shared")]),
        RuleConfiguration::new(rule("b").with_none(&["shared"]), vec![]),
    ]);
    assert!(registry.validate(&[]).is_ok());
}

#[test]
fn validate_rejects_empty_rule_id() {
    let registry = RuleRegistry::new(vec![RuleConfiguration::new(rule("  "), vec![])]);
    assert!(registry.validate(&[]).is_err());
}
