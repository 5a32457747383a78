use crate::cli::{Cli, RulesArgs};
use crate::output::print_error;
use crate::scan::RuleSifter;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{formatter_for, load_catalog, load_config, write_output};

#[must_use]
pub fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Prints the catalog rules that are enabled and backed by a standard.
///
/// # Errors
/// Returns an error if configuration, catalog or output handling fails.
pub fn run_rules_impl(args: &RulesArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let registry = config.rule_registry()?;
    let catalog = load_catalog(&args.catalog)?;

    let rules = RuleSifter::new(&catalog, &registry).sift();
    let output = formatter_for(args.format, cli).format_rules(&rules)?;
    write_output(cli.output.as_deref(), &output)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
