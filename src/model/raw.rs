//! Result shapes as reported by the scanning engine.
//!
//! Field names follow the engine's JSON (camelCase). Optional collections
//! accept `null` as well as absence, since the engine emits both.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::target::Target;

/// Deserialize `null` or a missing value as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Tags must be an array of strings; anything else reads as "no tags".
fn lenient_tags<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
    ))
}

/// A node referenced by a check as related to the node under test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedNode {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: Target,
}

/// Outcome of one atomic check on one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub id: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Payload set by the check's evaluate function.
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<bool>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub related_nodes: Vec<RelatedNode>,
}

impl CheckResult {
    #[must_use]
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: Some(message.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_result(mut self, result: bool) -> Self {
        self.result = Some(result);
        self
    }

    #[must_use]
    pub fn with_related_nodes(mut self, related_nodes: Vec<RelatedNode>) -> Self {
        self.related_nodes = related_nodes;
        self
    }
}

/// Result of evaluating one rule against one matched node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNodeResult {
    /// At least one must pass.
    #[serde(default, deserialize_with = "null_as_default")]
    pub any: Vec<CheckResult>,
    /// Every one must pass.
    #[serde(default, deserialize_with = "null_as_default")]
    pub all: Vec<CheckResult>,
    /// None may pass.
    #[serde(default, deserialize_with = "null_as_default")]
    pub none: Vec<CheckResult>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: Target,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl RawNodeResult {
    /// True when every check bucket is empty.
    #[must_use]
    pub const fn has_no_checks(&self) -> bool {
        self.any.is_empty() && self.all.is_empty() && self.none.is_empty()
    }

    /// The snippet override if present, otherwise the engine's HTML.
    #[must_use]
    pub fn snippet_or_html(&self) -> Option<&str> {
        self.snippet.as_deref().or(self.html.as_deref())
    }

    /// Checks in `all`, `any`, `none` order.
    pub fn checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.all.iter().chain(self.any.iter()).chain(self.none.iter())
    }
}

/// Per-rule result as reported by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRuleResult {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<RawNodeResult>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_tags",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<String>>,
}

impl RawRuleResult {
    #[must_use]
    pub fn new(id: impl Into<String>, nodes: Vec<RawNodeResult>) -> Self {
        Self {
            id: id.into(),
            nodes,
            ..Self::default()
        }
    }

    /// Tags, treating a missing list as empty.
    #[must_use]
    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// Complete engine output for one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScanResults {
    #[serde(default, deserialize_with = "null_as_default")]
    pub passes: Vec<RawRuleResult>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub violations: Vec<RawRuleResult>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inapplicable: Vec<RawRuleResult>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub incomplete: Vec<RawRuleResult>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

impl RawScanResults {
    /// Keep only rules whose id is in `rule_ids`, in every bucket.
    #[must_use]
    pub fn restricted_to(mut self, rule_ids: &[String]) -> Self {
        let keep = |rule: &RawRuleResult| rule_ids.iter().any(|id| id == &rule.id);
        self.passes.retain(keep);
        self.violations.retain(keep);
        self.inapplicable.retain(keep);
        self.incomplete.retain(keep);
        self
    }
}
