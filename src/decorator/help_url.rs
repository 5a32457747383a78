use crate::rules::RuleRegistry;

/// Resolves the help URL shown for a rule.
#[derive(Debug, Clone, Copy)]
pub struct HelpUrlGetter<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> HelpUrlGetter<'a> {
    #[must_use]
    pub const fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// The first configured override for `rule_id`, else `engine_help_url` unchanged.
    #[must_use]
    pub fn get_help_url(&self, rule_id: &str, engine_help_url: Option<&str>) -> Option<String> {
        self.registry
            .find_help_url(rule_id)
            .or(engine_help_url)
            .map(str::to_string)
    }
}

#[cfg(test)]
#[path = "help_url_tests.rs"]
mod tests;
