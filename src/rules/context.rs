use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::configuration::{CheckConfiguration, RuleConfiguration};
use crate::model::{CheckResult, RawNodeResult, Target};

/// DOM-free view of an element, captured by the page before evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementSnapshot {
    /// Lower-case tag name.
    pub tag_name: String,
    pub attributes: IndexMap<String, String>,
    pub accessible_name: Option<String>,
    pub outer_html: String,
    pub parent_outer_html: Option<String>,
    pub text_content: String,
    /// Computed `background-image`; `None` when the value is `none`.
    pub background_image: Option<String>,
    pub has_custom_widget_markup: bool,
    pub target: Target,
}

impl ElementSnapshot {
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            outer_html: format!("<{0}></{0}>", tag_name.to_ascii_lowercase()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.attribute("role")
    }

    /// `aria-*` attributes in document order.
    #[must_use]
    pub fn aria_attributes(&self) -> IndexMap<String, String> {
        self.attributes
            .iter()
            .filter(|(name, _)| name.starts_with("aria-"))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    #[must_use]
    pub fn has_text(&self) -> bool {
        !self.text_content.trim().is_empty()
    }
}

/// Evaluation context handed to a check; the only way a check attaches data.
#[derive(Debug, Default)]
pub struct CheckContext {
    data: Value,
}

impl CheckContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, data: Value) {
        self.data = data;
    }

    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> Value {
        self.data
    }
}

/// Run a check against an element and produce its result.
///
/// A check without an evaluate function yields no outcome and no message.
#[must_use]
pub fn evaluate_check(config: &CheckConfiguration, element: &ElementSnapshot) -> CheckResult {
    let Some(evaluate) = &config.evaluate else {
        return CheckResult {
            id: config.id.clone(),
            ..CheckResult::default()
        };
    };

    let mut context = CheckContext::new();
    let passed = evaluate(&mut context, element);
    CheckResult {
        id: config.id.clone(),
        message: config.message_for(passed),
        data: context.into_data(),
        result: Some(passed),
        related_nodes: Vec::new(),
    }
}

/// Run every locally configured check of a rule against an element.
///
/// Returns `None` when the rule's `matches` predicate rejects the element.
/// Check ids with no local configuration (engine built-ins) are skipped.
/// The rule's `decorate_node` hook is applied to the produced node.
#[must_use]
pub fn evaluate_rule(
    config: &RuleConfiguration,
    element: &ElementSnapshot,
) -> Option<RawNodeResult> {
    if !config.rule.matches(element) {
        return None;
    }

    let run = |ids: &[String]| -> Vec<CheckResult> {
        ids.iter()
            .filter_map(|id| config.find_check(id))
            .map(|check| evaluate_check(check, element))
            .collect()
    };

    let node = RawNodeResult {
        any: run(&config.rule.any),
        all: run(&config.rule.all),
        none: run(&config.rule.none),
        html: Some(element.outer_html.clone()),
        target: element.target.clone(),
        ..RawNodeResult::default()
    };

    Some(match &config.rule.decorate_node {
        Some(decorate) => decorate(node),
        None => node,
    })
}
