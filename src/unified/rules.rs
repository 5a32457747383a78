use indexmap::IndexMap;

use crate::model::{ScanResults, UnifiedRule};

/// One unified rule per distinct rule id.
///
/// Buckets are read passes, violations, incomplete, inapplicable; the first
/// occurrence of an id wins.
#[must_use]
pub fn convert_scan_results_to_unified_rules(results: &ScanResults) -> Vec<UnifiedRule> {
    let mut rules: IndexMap<&str, UnifiedRule> = IndexMap::new();
    let ordered = results
        .passes
        .iter()
        .chain(&results.violations)
        .chain(&results.incomplete)
        .chain(&results.inapplicable);

    for rule in ordered {
        rules.entry(rule.id.as_str()).or_insert_with(|| UnifiedRule {
            id: rule.id.clone(),
            description: rule.description.clone(),
            url: rule.help_url.clone(),
            guidance: rule.guidance_links.clone(),
        });
    }
    rules.into_values().collect()
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
