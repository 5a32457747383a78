use super::*;
use crate::model::{CheckResult, RawNodeResult};

fn node_with_any(messages: &[Option<&str>]) -> RawNodeResult {
    RawNodeResult {
        any: messages
            .iter()
            .map(|m| CheckResult {
                id: "check".to_string(),
                message: m.map(str::to_string),
                ..CheckResult::default()
            })
            .collect(),
        ..RawNodeResult::default()
    }
}

#[test]
fn suppression_list_is_normalized() {
    let processor = RuleProcessor::new(["  Some MESSAGE "]);
    assert_eq!(processor.suppressed_messages(), ["some message".to_string()]);
}

#[test]
fn suppressed_check_is_removed_and_empty_rule_dropped() {
    let processor = RuleProcessor::new(["msg"]);
    let rule = RawRuleResult::new("image-alt", vec![node_with_any(&[Some(" MSG ")])]);
    assert!(processor.suppress_checks_by_messages(rule, true).is_none());
}

#[test]
fn empty_rule_kept_when_not_removing() {
    let processor = RuleProcessor::new(["msg"]);
    let rule = RawRuleResult::new("image-alt", vec![node_with_any(&[Some("msg")])]);
    let kept = processor.suppress_checks_by_messages(rule, false).unwrap();
    assert!(kept.nodes.is_empty());
}

#[test]
fn null_message_is_never_suppressed() {
    let processor = RuleProcessor::new(["msg"]);
    let rule = RawRuleResult::new("r", vec![node_with_any(&[None, Some("msg")])]);
    let kept = processor.suppress_checks_by_messages(rule, true).unwrap();
    assert_eq!(kept.nodes[0].any.len(), 1);
    assert!(kept.nodes[0].any[0].message.is_none());
}

#[test]
fn node_kept_when_all_or_none_remain() {
    let processor = RuleProcessor::new(["msg"]);
    let mut node = node_with_any(&[Some("msg")]);
    node.none = vec![CheckResult::new("n", "msg")];
    let rule = RawRuleResult::new("r", vec![node]);

    let kept = processor.suppress_checks_by_messages(rule, true).unwrap();
    assert!(kept.nodes[0].any.is_empty());
    assert_eq!(kept.nodes[0].none.len(), 1, "none is not filtered");
}

#[test]
fn nodes_without_checks_are_removed() {
    let processor = RuleProcessor::default();
    let rule = RawRuleResult::new(
        "r",
        vec![RawNodeResult::default(), node_with_any(&[Some("keep")])],
    );
    let kept = processor.suppress_checks_by_messages(rule, true).unwrap();
    assert_eq!(kept.nodes.len(), 1);
}

#[test]
fn suppression_never_grows_nodes() {
    let processor = RuleProcessor::new(["a", "b"]);
    let nodes = vec![
        node_with_any(&[Some("a")]),
        node_with_any(&[Some("b"), Some("c")]),
        node_with_any(&[None]),
        RawNodeResult::default(),
    ];
    let count = nodes.len();
    let kept = processor
        .suppress_checks_by_messages(RawRuleResult::new("r", nodes), false)
        .unwrap();
    assert!(kept.nodes.len() <= count);
    assert!(kept.nodes.iter().all(|n| !n.has_no_checks()));
}

#[test]
fn tabster_dummy_nodes_are_removed_for_aria_hidden_focus() {
    let processor = RuleProcessor::default();
    let dummy = RawNodeResult {
        html: Some("<i data-tabster-dummy=\"\" tabindex=\"0\">".to_string()),
        ..node_with_any(&[Some("x")])
    };
    let real = RawNodeResult {
        html: Some("<div aria-hidden=\"true\"><a href=\"#\">".to_string()),
        ..node_with_any(&[Some("x")])
    };
    let rule = RawRuleResult::new(ARIA_HIDDEN_FOCUS_RULE_ID, vec![dummy.clone(), real.clone()]);
    let out = processor.suppress_fluent_ui_tabster_result(rule);
    assert_eq!(out.nodes, vec![real]);

    let other = RawRuleResult::new("color-contrast", vec![dummy.clone()]);
    let out = processor.suppress_fluent_ui_tabster_result(other);
    assert_eq!(out.nodes, vec![dummy]);
}
