//! Report-ready unified rules and results.

mod instances;
mod related;
mod resolution;
mod results;
mod rules;
mod uid;

pub use instances::{
    DecoratedNodeResult, ElementResults, SelectorMap, all_completed_instances,
    failing_instances, failing_or_passing_instances, fingerprint, incomplete_instances,
    passing_instances,
};
pub use related::extract_related_selectors;
pub use resolution::{CheckResolutionCreator, FixResolutionCreator, ResolutionCreator};
pub use results::{ConvertScanResultsToUnifiedResults, DEFAULT_NEEDS_REVIEW_RULES};
pub use rules::convert_scan_results_to_unified_rules;
pub use uid::{UidGenerator, UuidGenerator};
