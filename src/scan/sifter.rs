use serde::{Deserialize, Serialize};

use crate::decorator::HelpUrlGetter;
use crate::error::{AxeReportError, Result};
use crate::guidance::{GuidanceLink, map_catalog_tags_to_guidance_links};
use crate::rules::RuleRegistry;

/// One entry of the engine's rule catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCatalogEntry {
    pub rule_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub help_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Rule metadata surfaced to users and used to scope scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannerRuleInfo {
    pub id: String,
    pub help: Option<String>,
    pub url: Option<String>,
    pub a11y_criteria: Vec<GuidanceLink>,
}

/// Narrows the engine catalog to enabled rules backed by real guidance.
#[derive(Debug, Clone, Copy)]
pub struct RuleSifter<'a> {
    catalog: &'a [RuleCatalogEntry],
    registry: &'a RuleRegistry,
}

impl<'a> RuleSifter<'a> {
    #[must_use]
    pub const fn new(catalog: &'a [RuleCatalogEntry], registry: &'a RuleRegistry) -> Self {
        Self { catalog, registry }
    }

    /// Enabled rules with at least one guidance link other than Best Practice.
    #[must_use]
    pub fn sift(&self) -> Vec<ScannerRuleInfo> {
        self.catalog
            .iter()
            .filter(|entry| self.registry.is_enabled(&entry.rule_id))
            .filter_map(|entry| {
                let criteria = map_catalog_tags_to_guidance_links(&entry.tags);
                criteria
                    .iter()
                    .any(|link| !link.is_best_practice())
                    .then(|| self.info_for(entry, criteria))
            })
            .collect()
    }

    /// Ids of the sifted rules, in catalog order.
    #[must_use]
    pub fn rule_ids(&self) -> Vec<String> {
        self.sift().into_iter().map(|info| info.id).collect()
    }

    /// Metadata for one catalog rule, without sifting.
    ///
    /// # Errors
    /// Returns `UnknownRule` when the catalog has no such rule.
    pub fn rule_info(&self, rule_id: &str) -> Result<ScannerRuleInfo> {
        self.catalog
            .iter()
            .find(|entry| entry.rule_id == rule_id)
            .map(|entry| {
                self.info_for(entry, map_catalog_tags_to_guidance_links(&entry.tags))
            })
            .ok_or_else(|| AxeReportError::UnknownRule(rule_id.to_string()))
    }

    fn info_for(
        &self,
        entry: &RuleCatalogEntry,
        a11y_criteria: Vec<GuidanceLink>,
    ) -> ScannerRuleInfo {
        ScannerRuleInfo {
            id: entry.rule_id.clone(),
            help: entry.help.clone(),
            url: HelpUrlGetter::new(self.registry)
                .get_help_url(&entry.rule_id, entry.help_url.as_deref()),
            a11y_criteria,
        }
    }
}

#[cfg(test)]
#[path = "sifter_tests.rs"]
mod tests;
