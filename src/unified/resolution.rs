use crate::model::{CheckResult, RawNodeResult, UnifiedResolution};

/// Produces the resolution text for one (rule, node) pair.
pub trait ResolutionCreator {
    fn create(&self, rule_id: &str, node: &RawNodeResult) -> UnifiedResolution;
}

/// How-to-fix guidance built from the node's check messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixResolutionCreator;

fn messages(checks: &[CheckResult]) -> Vec<String> {
    checks
        .iter()
        .filter_map(|check| check.message.clone())
        .collect()
}

impl ResolutionCreator for FixResolutionCreator {
    fn create(&self, _rule_id: &str, node: &RawNodeResult) -> UnifiedResolution {
        UnifiedResolution::HowToFix {
            any: messages(&node.any),
            all: messages(&node.all),
            none: messages(&node.none),
        }
    }
}

/// Manual verification steps for rules that need human review.
const HOW_TO_CHECK: &[(&str, &str)] = &[
    (
        "aria-input-field-name",
        "Inspect the element and verify that its accessible name describes the purpose of the input.",
    ),
    (
        "color-contrast",
        "Measure the contrast between the text and its background with a colour contrast analyser. \
         Normal text needs 4.5:1 and large text needs 3:1.",
    ),
    (
        "th-has-data-cells",
        "Verify that each header cell is associated with the data cells it describes.",
    ),
    (
        "link-in-text-block",
        "Verify that the link is distinguishable from the surrounding text without relying on colour.",
    ),
    (
        "p-as-heading",
        "Verify that text styled to look like a heading is coded as a heading.",
    ),
    (
        "label-content-name-mismatch",
        "Verify that the element's accessible name contains its visible label text.",
    ),
    (
        "td-has-header",
        "Verify that each data cell in a large table is associated with a header.",
    ),
    (
        "td-headers-attr",
        "Verify that every headers attribute refers to header cells in the same table.",
    ),
];

/// How-to-check guidance: known manual steps for the rule, else the failure summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckResolutionCreator;

impl CheckResolutionCreator {
    #[must_use]
    pub fn guidance_for(rule_id: &str) -> Option<&'static str> {
        HOW_TO_CHECK
            .iter()
            .find(|(id, _)| *id == rule_id)
            .map(|(_, text)| *text)
    }
}

impl ResolutionCreator for CheckResolutionCreator {
    fn create(&self, rule_id: &str, node: &RawNodeResult) -> UnifiedResolution {
        let text = Self::guidance_for(rule_id)
            .map(str::to_string)
            .or_else(|| node.failure_summary.clone())
            .unwrap_or_default();
        UnifiedResolution::HowToCheck { text }
    }
}

#[cfg(test)]
#[path = "resolution_tests.rs"]
mod tests;
