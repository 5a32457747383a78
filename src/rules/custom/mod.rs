//! Data-collecting rules that ship with the crate.

pub mod image_function;
pub mod link_function;

use super::RuleConfiguration;

/// Built-in custom rule configurations, in registration order.
#[must_use]
pub fn builtin_rules() -> Vec<RuleConfiguration> {
    vec![image_function::configuration(), link_function::configuration()]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
