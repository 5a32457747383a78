use indexmap::IndexSet;

use super::related::extract_related_selectors;
use super::resolution::{CheckResolutionCreator, FixResolutionCreator, ResolutionCreator};
use super::uid::{UidGenerator, UuidGenerator};
use crate::model::{
    InstanceResultStatus, RawNodeResult, RuleResult, ScanResults, UnifiedDescriptors,
    UnifiedIdentifiers, UnifiedResult, selector_last_part,
};

/// Violation rules surfaced for manual review by default.
pub const DEFAULT_NEEDS_REVIEW_RULES: &[&str] = &[
    "aria-input-field-name",
    "color-contrast",
    "th-has-data-cells",
    "link-in-text-block",
    "p-as-heading",
    "label-content-name-mismatch",
    "td-has-header",
    "td-headers-attr",
];

/// Flattens decorated results into per-node unified results.
#[derive(Debug, Clone)]
pub struct ConvertScanResultsToUnifiedResults<G: UidGenerator = UuidGenerator> {
    uid_generator: G,
    fix_resolution: FixResolutionCreator,
    check_resolution: CheckResolutionCreator,
    needs_review_rules: IndexSet<String>,
}

impl ConvertScanResultsToUnifiedResults<UuidGenerator> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_uid_generator(UuidGenerator)
    }
}

impl Default for ConvertScanResultsToUnifiedResults<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: UidGenerator> ConvertScanResultsToUnifiedResults<G> {
    #[must_use]
    pub fn with_uid_generator(uid_generator: G) -> Self {
        Self {
            uid_generator,
            fix_resolution: FixResolutionCreator,
            check_resolution: CheckResolutionCreator,
            needs_review_rules: DEFAULT_NEEDS_REVIEW_RULES
                .iter()
                .map(|id| (*id).to_string())
                .collect(),
        }
    }

    /// Replace the set of violation rule ids kept by [`Self::needs_review_conversion`].
    #[must_use]
    pub fn with_needs_review_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.needs_review_rules = rules.into_iter().map(Into::into).collect();
        self
    }

    /// Passes and violations with how-to-fix resolutions.
    #[must_use]
    pub fn automated_checks_conversion(&self, results: &ScanResults) -> Vec<UnifiedResult> {
        let mut unified = Vec::new();
        self.convert(
            &mut unified,
            &results.passes,
            InstanceResultStatus::Pass,
            &self.fix_resolution,
        );
        self.convert(
            &mut unified,
            &results.violations,
            InstanceResultStatus::Fail,
            &self.fix_resolution,
        );
        unified
    }

    /// Passes, needs-review violations and incomplete results with how-to-check resolutions.
    #[must_use]
    pub fn needs_review_conversion(&self, results: &ScanResults) -> Vec<UnifiedResult> {
        let violations: Vec<RuleResult> = results
            .violations
            .iter()
            .filter(|rule| self.needs_review_rules.contains(&rule.id))
            .cloned()
            .collect();

        let mut unified = Vec::new();
        self.convert(
            &mut unified,
            &results.passes,
            InstanceResultStatus::Pass,
            &self.check_resolution,
        );
        self.convert(
            &mut unified,
            &violations,
            InstanceResultStatus::Fail,
            &self.check_resolution,
        );
        self.convert(
            &mut unified,
            &results.incomplete,
            InstanceResultStatus::Unknown,
            &self.check_resolution,
        );
        unified
    }

    fn convert(
        &self,
        out: &mut Vec<UnifiedResult>,
        rules: &[RuleResult],
        status: InstanceResultStatus,
        resolution: &impl ResolutionCreator,
    ) {
        for rule in rules {
            out.extend(
                rule.nodes
                    .iter()
                    .map(|node| self.create_unified_result(&rule.id, node, status, resolution)),
            );
        }
    }

    fn create_unified_result(
        &self,
        rule_id: &str,
        node: &RawNodeResult,
        status: InstanceResultStatus,
        resolution: &impl ResolutionCreator,
    ) -> UnifiedResult {
        let selector = node.target.joined();
        UnifiedResult {
            uid: self.uid_generator.generate(),
            status,
            rule_id: rule_id.to_string(),
            identifiers: UnifiedIdentifiers {
                identifier: selector.clone(),
                concise_name: selector_last_part(&selector).to_string(),
                css_selector: selector,
                target: node.target.clone(),
            },
            descriptors: UnifiedDescriptors {
                snippet: node.snippet_or_html().map(str::to_string),
            },
            resolution: resolution.create(rule_id, node),
            related_css_selectors: extract_related_selectors(node),
        }
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
