use indexmap::IndexSet;

use crate::model::RawNodeResult;

/// Selectors of nodes the checks reported as related to this one.
///
/// Collected from `all`, `any`, `none` in that order, deduplicated, and
/// excluding the node itself. `None` when nothing is left.
#[must_use]
pub fn extract_related_selectors(node: &RawNodeResult) -> Option<Vec<String>> {
    let own = node.target.joined();
    let selectors: IndexSet<String> = node
        .checks()
        .flat_map(|check| check.related_nodes.iter())
        .map(|related| related.target.joined())
        .filter(|selector| *selector != own)
        .collect();

    (!selectors.is_empty()).then(|| selectors.into_iter().collect())
}

#[cfg(test)]
#[path = "related_tests.rs"]
mod tests;
