use super::check_messages::add_messages_to_checks;
use crate::model::{RawNodeResult, RawRuleResult};
use crate::rules::{RuleConfiguration, RuleRegistry};

pub const NO_DESCRIPTION: &str = "No description is available";

/// Applies configured rule text and check messages to raw rule results.
#[derive(Debug, Clone, Copy)]
pub struct MessageDecorator<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> MessageDecorator<'a> {
    #[must_use]
    pub const fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// Decorate a rule from its last matching configuration.
    ///
    /// Rules without configuration are returned unchanged.
    #[must_use]
    pub fn decorate_result_with_messages(&self, mut rule: RawRuleResult) -> RawRuleResult {
        let Some(config) = self.registry.find_rule(&rule.id) else {
            return rule;
        };

        rule.description = Some(
            config
                .rule
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        );
        rule.help.clone_from(&config.rule.help);
        rule.nodes = rule
            .nodes
            .into_iter()
            .map(|node| decorate_node(node, config))
            .collect();
        rule
    }
}

fn decorate_node(mut node: RawNodeResult, config: &RuleConfiguration) -> RawNodeResult {
    node.all = add_messages_to_checks(node.all, &config.checks);
    node.none = add_messages_to_checks(node.none, &config.checks);
    node.any = add_messages_to_checks(node.any, &config.checks);
    match &config.rule.decorate_node {
        Some(hook) => hook(node),
        None => node,
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
