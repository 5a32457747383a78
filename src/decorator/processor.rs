use tracing::debug;

use crate::model::{CheckResult, RawRuleResult};

/// Rule whose results are filtered for the Fluent UI tabster false positive.
pub const ARIA_HIDDEN_FOCUS_RULE_ID: &str = "aria-hidden-focus";

/// Marker attribute on the focus-trap dummies Fluent UI tabster injects.
pub const TABSTER_DUMMY_MARKER: &str = "data-tabster-dummy";

/// Filters suppressed check messages and known false positives out of rule results.
#[derive(Debug, Clone, Default)]
pub struct RuleProcessor {
    suppressed_messages: Vec<String>,
}

impl RuleProcessor {
    /// Create a processor with the given suppression list.
    ///
    /// Entries are normalized with trim + lowercase.
    pub fn new<I, S>(suppressed_messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            suppressed_messages: suppressed_messages
                .into_iter()
                .map(|m| normalize(m.as_ref()))
                .collect(),
        }
    }

    #[must_use]
    pub fn suppressed_messages(&self) -> &[String] {
        &self.suppressed_messages
    }

    fn is_suppressed(&self, check: &CheckResult) -> bool {
        check.message.as_deref().is_some_and(|message| {
            let message = normalize(message);
            self.suppressed_messages.contains(&message)
        })
    }

    /// Drop suppressed `any` checks and the nodes left with no checks at all.
    ///
    /// Only `any` is filtered; `all` and `none` still count toward keeping a
    /// node. Returns `None` when `remove_empty_rules` is set and no node survives.
    #[must_use]
    pub fn suppress_checks_by_messages(
        &self,
        mut rule: RawRuleResult,
        remove_empty_rules: bool,
    ) -> Option<RawRuleResult> {
        rule.nodes = std::mem::take(&mut rule.nodes)
            .into_iter()
            .filter_map(|mut node| {
                node.any.retain(|check| !self.is_suppressed(check));
                (!node.has_no_checks()).then_some(node)
            })
            .collect();

        if remove_empty_rules && rule.nodes.is_empty() {
            debug!(rule_id = %rule.id, "Dropping rule with no remaining nodes");
            return None;
        }
        Some(rule)
    }

    /// Drop `aria-hidden-focus` nodes that are Fluent UI tabster dummies.
    #[must_use]
    pub fn suppress_fluent_ui_tabster_result(&self, mut rule: RawRuleResult) -> RawRuleResult {
        if rule.id != ARIA_HIDDEN_FOCUS_RULE_ID {
            return rule;
        }
        let before = rule.nodes.len();
        rule.nodes.retain(|node| {
            !node
                .html
                .as_deref()
                .is_some_and(|html| html.contains(TABSTER_DUMMY_MARKER))
        });
        let removed = before - rule.nodes.len();
        if removed > 0 {
            debug!(rule_id = %rule.id, removed, "Removed tabster dummy nodes");
        }
        rule
    }
}

fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

#[cfg(test)]
#[path = "processor_tests.rs"]
mod tests;
