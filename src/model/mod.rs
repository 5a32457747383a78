mod raw;
mod results;
mod target;
mod unified;

pub use raw::{CheckResult, RawNodeResult, RawRuleResult, RawScanResults, RelatedNode};
pub use results::{
    Bucket, FRAME_TESTED_RULE_ID, ResultSummary, RuleResult, ScanResults, frames_skipped,
};
pub use target::{SEGMENT_SEPARATOR, SHADOW_SEPARATOR, Selector, Target, selector_last_part};
pub use unified::{
    InstanceResultStatus, UnifiedDescriptors, UnifiedIdentifiers, UnifiedResolution,
    UnifiedResult, UnifiedRule,
};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
