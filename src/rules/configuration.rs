use std::fmt;
use std::sync::Arc;

use super::context::{CheckContext, ElementSnapshot};
use crate::model::RawNodeResult;

/// Element filter applied before a rule's checks run.
pub type MatchesFn = Arc<dyn Fn(&ElementSnapshot) -> bool + Send + Sync>;

/// Post-processing hook run on every decorated node of a rule.
pub type DecorateNodeFn = Arc<dyn Fn(RawNodeResult) -> RawNodeResult + Send + Sync>;

/// Check body. Returns the boolean outcome and may attach data through the context.
pub type EvaluateFn = Arc<dyn Fn(&mut CheckContext, &ElementSnapshot) -> bool + Send + Sync>;

/// Lazily produced pass or fail message.
pub type MessageFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Static definition of a rule: what it selects and which checks it combines.
#[derive(Clone, Default)]
pub struct RuleDefinition {
    pub id: String,
    pub selector: String,
    pub enabled: bool,
    pub any: Vec<String>,
    pub all: Vec<String>,
    pub none: Vec<String>,
    pub matches: Option<MatchesFn>,
    pub decorate_node: Option<DecorateNodeFn>,
    pub help: Option<String>,
    pub help_url: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl RuleDefinition {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            selector: "*".to_string(),
            enabled: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_any(mut self, ids: &[&str]) -> Self {
        self.any = ids.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_all(mut self, ids: &[&str]) -> Self {
        self.all = ids.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_none(mut self, ids: &[&str]) -> Self {
        self.none = ids.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_matches(
        mut self,
        matches: impl Fn(&ElementSnapshot) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.matches = Some(Arc::new(matches));
        self
    }

    #[must_use]
    pub fn with_decorate_node(
        mut self,
        hook: impl Fn(RawNodeResult) -> RawNodeResult + Send + Sync + 'static,
    ) -> Self {
        self.decorate_node = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    #[must_use]
    pub fn with_help_url(mut self, help_url: impl Into<String>) -> Self {
        self.help_url = Some(help_url.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Every check id referenced by the rule, in `any`, `all`, `none` order.
    pub fn check_ids(&self) -> impl Iterator<Item = &str> {
        self.any
            .iter()
            .chain(self.all.iter())
            .chain(self.none.iter())
            .map(String::as_str)
    }

    /// Apply the `matches` predicate; rules without one match everything.
    #[must_use]
    pub fn matches(&self, element: &ElementSnapshot) -> bool {
        self.matches.as_ref().is_none_or(|matches| matches(element))
    }
}

impl fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("id", &self.id)
            .field("selector", &self.selector)
            .field("enabled", &self.enabled)
            .field("any", &self.any)
            .field("all", &self.all)
            .field("none", &self.none)
            .field("matches", &self.matches.is_some())
            .field("decorate_node", &self.decorate_node.is_some())
            .field("help", &self.help)
            .field("help_url", &self.help_url)
            .field("description", &self.description)
            .field("tags", &self.tags)
            .finish()
    }
}

/// A check definition with optional behaviors.
#[derive(Clone, Default)]
pub struct CheckConfiguration {
    pub id: String,
    pub evaluate: Option<EvaluateFn>,
    pub pass_message: Option<MessageFn>,
    pub fail_message: Option<MessageFn>,
}

impl CheckConfiguration {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_evaluate(
        mut self,
        evaluate: impl Fn(&mut CheckContext, &ElementSnapshot) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.evaluate = Some(Arc::new(evaluate));
        self
    }

    #[must_use]
    pub fn with_pass_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.pass_message = Some(Arc::new(move || message.clone()));
        self
    }

    #[must_use]
    pub fn with_fail_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.fail_message = Some(Arc::new(move || message.clone()));
        self
    }

    /// Message for the given outcome, if a generator for it is defined.
    #[must_use]
    pub fn message_for(&self, passed: bool) -> Option<String> {
        let generator = if passed {
            self.pass_message.as_ref()
        } else {
            self.fail_message.as_ref()
        };
        generator.map(|generate| generate())
    }
}

impl fmt::Debug for CheckConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckConfiguration")
            .field("id", &self.id)
            .field("evaluate", &self.evaluate.is_some())
            .field("pass_message", &self.pass_message.is_some())
            .field("fail_message", &self.fail_message.is_some())
            .finish()
    }
}

/// A rule paired with the checks it brings along.
#[derive(Debug, Clone, Default)]
pub struct RuleConfiguration {
    pub rule: RuleDefinition,
    pub checks: Vec<CheckConfiguration>,
}

impl RuleConfiguration {
    #[must_use]
    pub const fn new(rule: RuleDefinition, checks: Vec<CheckConfiguration>) -> Self {
        Self { rule, checks }
    }

    /// Last check configuration with the given id.
    #[must_use]
    pub fn find_check(&self, id: &str) -> Option<&CheckConfiguration> {
        self.checks.iter().rev().find(|check| check.id == id)
    }
}
