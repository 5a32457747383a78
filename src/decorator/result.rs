use tracing::debug;

use super::help_url::HelpUrlGetter;
use super::message::MessageDecorator;
use super::processor::RuleProcessor;
use crate::guidance::{GuidanceLink, map_axe_tags_to_guidance_links};
use crate::model::{Bucket, RawRuleResult, RawScanResults, RuleResult, ScanResults, frames_skipped};
use crate::rules::RuleRegistry;

/// Maps a rule's tags to guidance links.
pub type TagToLinkMapper = fn(Option<&[String]>) -> Vec<GuidanceLink>;

/// Source of the scanned page's title.
pub trait PageTitleSource {
    fn title(&self) -> String;
}

/// Fixed title, for results replayed outside the page.
#[derive(Debug, Clone, Default)]
pub struct StaticTitle(pub String);

impl PageTitleSource for StaticTitle {
    fn title(&self) -> String {
        self.0.clone()
    }
}

/// Turns raw engine output into decorated [`ScanResults`].
pub struct ResultDecorator<'a, T: PageTitleSource> {
    title_source: T,
    message_decorator: MessageDecorator<'a>,
    help_url_getter: HelpUrlGetter<'a>,
    processor: RuleProcessor,
    tag_to_links: TagToLinkMapper,
    exclude_fluent_ui_tabster: bool,
}

impl<'a, T: PageTitleSource> ResultDecorator<'a, T> {
    #[must_use]
    pub fn new(title_source: T, registry: &'a RuleRegistry, processor: RuleProcessor) -> Self {
        Self {
            title_source,
            message_decorator: MessageDecorator::new(registry),
            help_url_getter: HelpUrlGetter::new(registry),
            processor,
            tag_to_links: map_axe_tags_to_guidance_links,
            exclude_fluent_ui_tabster: true,
        }
    }

    #[must_use]
    pub const fn with_tag_mapper(mut self, mapper: TagToLinkMapper) -> Self {
        self.tag_to_links = mapper;
        self
    }

    /// Toggle the Fluent UI tabster false-positive exclusion.
    #[must_use]
    pub const fn with_fluent_ui_tabster_exclusion(mut self, enabled: bool) -> Self {
        self.exclude_fluent_ui_tabster = enabled;
        self
    }

    /// Decorate every bucket and collect page metadata.
    #[must_use]
    pub fn decorate_results(&self, raw: RawScanResults) -> ScanResults {
        let incomplete = self.decorate_bucket(raw.incomplete, Bucket::Incomplete);
        ScanResults {
            passes: self.decorate_bucket(raw.passes, Bucket::Passes),
            violations: self.decorate_bucket(raw.violations, Bucket::Violations),
            inapplicable: self.decorate_bucket(raw.inapplicable, Bucket::Inapplicable),
            frames_skipped: frames_skipped(&incomplete),
            incomplete,
            timestamp: raw.timestamp,
            target_page_url: raw.url,
            target_page_title: self.title_source.title(),
        }
    }

    fn decorate_bucket(&self, rules: Vec<RawRuleResult>, bucket: Bucket) -> Vec<RuleResult> {
        // An inapplicable rule has no nodes by definition and is kept regardless.
        let remove_empty_rules = bucket != Bucket::Inapplicable;
        let before = rules.len();
        let decorated: Vec<_> = rules
            .into_iter()
            .filter_map(|rule| self.decorate_rule(rule, remove_empty_rules))
            .collect();
        if decorated.len() < before {
            debug!(
                bucket = bucket.as_str(),
                dropped = before - decorated.len(),
                "Rules removed during decoration"
            );
        }
        decorated
    }

    fn decorate_rule(&self, rule: RawRuleResult, remove_empty_rules: bool) -> Option<RuleResult> {
        let rule = self.message_decorator.decorate_result_with_messages(rule);
        let mut rule = self
            .processor
            .suppress_checks_by_messages(rule, remove_empty_rules)?;
        if self.exclude_fluent_ui_tabster {
            rule = self.processor.suppress_fluent_ui_tabster_result(rule);
            if remove_empty_rules && rule.nodes.is_empty() {
                debug!(rule_id = %rule.id, "Dropping rule left with only tabster dummies");
                return None;
            }
        }

        let guidance_links = (self.tag_to_links)(rule.tags.as_deref());
        let help_url = self
            .help_url_getter
            .get_help_url(&rule.id, rule.help_url.as_deref());
        Some(RuleResult {
            id: rule.id,
            nodes: rule.nodes,
            description: rule.description,
            help: rule.help,
            help_url,
            tags: rule.tags,
            guidance_links,
        })
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
