use indexmap::IndexMap;
use serde::Serialize;

use super::uid::UidGenerator;
use crate::guidance::GuidanceLink;
use crate::model::{CheckResult, RawNodeResult, RuleResult, ScanResults};

/// One rule's result on one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedNodeResult {
    pub rule_id: String,
    /// `Some(true)` pass, `Some(false)` fail, `None` needs review.
    pub status: Option<bool>,
    pub selector: String,
    pub html: Option<String>,
    pub snippet: Option<String>,
    pub failure_summary: Option<String>,
    pub help: Option<String>,
    pub help_url: Option<String>,
    pub guidance_links: Vec<GuidanceLink>,
    pub id: Option<String>,
    pub fingerprint: String,
    pub any: Vec<CheckResult>,
    pub all: Vec<CheckResult>,
    pub none: Vec<CheckResult>,
}

/// All rule results recorded for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementResults {
    pub target: Vec<String>,
    pub rule_results: IndexMap<String, DecoratedNodeResult>,
}

/// Element results keyed by joined selector, in first-seen order.
pub type SelectorMap = IndexMap<String, ElementResults>;

/// Stable identity of a (rule, node) pair.
#[must_use]
pub fn fingerprint(rule_id: &str, node: &RawNodeResult) -> String {
    format!(
        "fp--{rule_id}--{}--{}",
        node.target.joined(),
        node.snippet_or_html().unwrap_or_default()
    )
}

fn add_rules(
    map: &mut SelectorMap,
    rules: &[RuleResult],
    status: Option<bool>,
    uid: Option<&dyn UidGenerator>,
) {
    for rule in rules {
        for node in &rule.nodes {
            let selector = node.target.joined();
            let id = node
                .instance_id
                .clone()
                .or_else(|| uid.map(|generator| generator.generate()));
            let result = DecoratedNodeResult {
                rule_id: rule.id.clone(),
                status,
                selector: selector.clone(),
                html: node.html.clone(),
                snippet: node.snippet.clone(),
                failure_summary: node.failure_summary.clone(),
                help: rule.help.clone(),
                help_url: rule.help_url.clone(),
                guidance_links: rule.guidance_links.clone(),
                id,
                fingerprint: fingerprint(&rule.id, node),
                any: node.any.clone(),
                all: node.all.clone(),
                none: node.none.clone(),
            };
            map.entry(selector)
                .or_insert_with(|| ElementResults {
                    target: node.target.to_strings(),
                    rule_results: IndexMap::new(),
                })
                .rule_results
                .insert(rule.id.clone(), result);
        }
    }
}

/// Violations keyed by selector.
#[must_use]
pub fn failing_instances(results: &ScanResults) -> SelectorMap {
    let mut map = SelectorMap::new();
    add_rules(&mut map, &results.violations, Some(false), None);
    map
}

/// Passes keyed by selector.
#[must_use]
pub fn passing_instances(results: &ScanResults) -> SelectorMap {
    let mut map = SelectorMap::new();
    add_rules(&mut map, &results.passes, Some(true), None);
    map
}

/// Incomplete results keyed by selector.
#[must_use]
pub fn incomplete_instances(results: &ScanResults) -> SelectorMap {
    let mut map = SelectorMap::new();
    add_rules(&mut map, &results.incomplete, None, None);
    map
}

/// Passes then violations; a violation replaces a pass of the same rule on
/// the same element. Nodes without an instance id get a generated one.
#[must_use]
pub fn all_completed_instances(results: &ScanResults, uid: &dyn UidGenerator) -> SelectorMap {
    let mut map = SelectorMap::new();
    add_rules(&mut map, &results.passes, Some(true), Some(uid));
    add_rules(&mut map, &results.violations, Some(false), Some(uid));
    map
}

/// Failing instances when there are any violations, otherwise passing instances.
#[must_use]
pub fn failing_or_passing_instances(results: &ScanResults) -> SelectorMap {
    if results.violations.is_empty() {
        passing_instances(results)
    } else {
        failing_instances(results)
    }
}

#[cfg(test)]
#[path = "instances_tests.rs"]
mod tests;
