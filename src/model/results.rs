use serde::Serialize;

use super::raw::RawNodeResult;
use crate::guidance::GuidanceLink;

/// Id of the engine rule that tracks whether every frame was scanned.
pub const FRAME_TESTED_RULE_ID: &str = "frame-tested";

/// A rule result after decoration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleResult {
    pub id: String,
    pub nodes: Vec<RawNodeResult>,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Configured override, or the engine's URL.
    pub help_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub guidance_links: Vec<GuidanceLink>,
}

/// The four result buckets of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Passes,
    Violations,
    Inapplicable,
    Incomplete,
}

impl Bucket {
    pub const ALL: [Self; 4] = [
        Self::Passes,
        Self::Violations,
        Self::Inapplicable,
        Self::Incomplete,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passes => "passes",
            Self::Violations => "violations",
            Self::Inapplicable => "inapplicable",
            Self::Incomplete => "incomplete",
        }
    }
}

/// Decorated output of one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResults {
    pub passes: Vec<RuleResult>,
    pub violations: Vec<RuleResult>,
    pub inapplicable: Vec<RuleResult>,
    pub incomplete: Vec<RuleResult>,
    pub timestamp: String,
    pub target_page_url: String,
    pub target_page_title: String,
    pub frames_skipped: bool,
}

impl ScanResults {
    #[must_use]
    pub fn bucket(&self, bucket: Bucket) -> &[RuleResult] {
        match bucket {
            Bucket::Passes => &self.passes,
            Bucket::Violations => &self.violations,
            Bucket::Inapplicable => &self.inapplicable,
            Bucket::Incomplete => &self.incomplete,
        }
    }

    #[must_use]
    pub const fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Rule counts per bucket.
    #[must_use]
    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            passes: self.passes.len(),
            violations: self.violations.len(),
            inapplicable: self.inapplicable.len(),
            incomplete: self.incomplete.len(),
            failed_instances: self.violations.iter().map(|r| r.nodes.len()).sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub passes: usize,
    pub violations: usize,
    pub inapplicable: usize,
    pub incomplete: usize,
    pub failed_instances: usize,
}

/// True iff the decorated incomplete bucket still reports unscanned frames.
#[must_use]
pub fn frames_skipped(incomplete: &[RuleResult]) -> bool {
    incomplete.iter().any(|rule| rule.id == FRAME_TESTED_RULE_ID)
}
