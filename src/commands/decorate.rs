use crate::cli::{Cli, DecorateArgs};
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, Result};

use super::context::{exit_code_for, formatter_for, load_config, run_pipeline, write_output};

#[must_use]
pub fn run_decorate(args: &DecorateArgs, cli: &Cli) -> i32 {
    match run_decorate_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Decorates a results file and prints the decorated scan results.
///
/// # Errors
/// Returns an error if configuration, input or output handling fails.
pub fn run_decorate_impl(args: &DecorateArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;
    let results = run_pipeline(&args.scan, &config)?;

    let output = formatter_for(args.format, cli).format_scan(&results)?;
    write_output(cli.output.as_deref(), &output)?;

    Ok(exit_code_for(
        args.scan.fail_on_violations,
        results.has_violations(),
    ))
}

#[cfg(test)]
#[path = "decorate_tests.rs"]
mod tests;
