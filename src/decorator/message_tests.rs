use super::*;
use crate::model::CheckResult;
use crate::rules::{CheckConfiguration, RuleDefinition};

fn registry() -> RuleRegistry {
    RuleRegistry::new(vec![
        RuleConfiguration::new(
            RuleDefinition::new("custom-rule")
                .with_description("stale description")
                .with_help("stale help"),
            vec![],
        ),
        RuleConfiguration::new(
            RuleDefinition::new("custom-rule")
                .with_description("Custom description")
                .with_help("Custom help")
                .with_decorate_node(|mut node| {
                    node.snippet = Some("decorated".to_string());
                    node
                }),
            vec![
                CheckConfiguration::new("c")
                    .with_pass_message("pass")
                    .with_fail_message("fail"),
            ],
        ),
        RuleConfiguration::new(RuleDefinition::new("no-description"), vec![]),
    ])
}

fn raw_rule(id: &str) -> RawRuleResult {
    RawRuleResult {
        description: Some("engine description".to_string()),
        help: Some("engine help".to_string()),
        ..RawRuleResult::new(
            id,
            vec![RawNodeResult {
                any: vec![CheckResult::new("c", "engine").with_result(false)],
                all: vec![CheckResult::new("c", "engine").with_result(true)],
                none: vec![CheckResult::new("other", "engine").with_result(true)],
                ..RawNodeResult::default()
            }],
        )
    }
}

#[test]
fn unconfigured_rule_is_unchanged() {
    let registry = registry();
    let decorator = MessageDecorator::new(&registry);
    let rule = raw_rule("unknown");
    assert_eq!(decorator.decorate_result_with_messages(rule.clone()), rule);
}

#[test]
fn configured_rule_gets_text_messages_and_hook() {
    let registry = registry();
    let decorator = MessageDecorator::new(&registry);
    let rule = decorator.decorate_result_with_messages(raw_rule("custom-rule"));

    assert_eq!(rule.description.as_deref(), Some("Custom description"));
    assert_eq!(rule.help.as_deref(), Some("Custom help"));
    let node = &rule.nodes[0];
    assert_eq!(node.any[0].message.as_deref(), Some("fail"));
    assert_eq!(node.all[0].message.as_deref(), Some("pass"));
    assert_eq!(node.none[0].message.as_deref(), Some("engine"));
    assert_eq!(node.snippet.as_deref(), Some("decorated"));
}

#[test]
fn missing_description_uses_fallback() {
    let registry = registry();
    let decorator = MessageDecorator::new(&registry);
    let rule = decorator.decorate_result_with_messages(raw_rule("no-description"));
    assert_eq!(rule.description.as_deref(), Some(NO_DESCRIPTION));
    assert!(rule.help.is_none());
}

#[test]
fn decoration_is_idempotent() {
    let registry = registry();
    let decorator = MessageDecorator::new(&registry);
    let once = decorator.decorate_result_with_messages(raw_rule("custom-rule"));
    let twice = decorator.decorate_result_with_messages(once.clone());
    assert_eq!(once, twice);
}
