//! Static rule and check configuration.

mod configuration;
mod context;
pub mod custom;
mod registry;

pub use configuration::{
    CheckConfiguration, DecorateNodeFn, EvaluateFn, MatchesFn, MessageFn, RuleConfiguration,
    RuleDefinition,
};
pub use context::{CheckContext, ElementSnapshot, evaluate_check, evaluate_rule};
pub use registry::{ENGINE_BUILTIN_CHECKS, RuleRegistry};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
