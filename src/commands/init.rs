use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::output::print_error;
use crate::{AxeReportError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a starter configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs, cli: &Cli) -> Result<()> {
    let path = &args.path;

    if path.exists() && !args.force {
        return Err(AxeReportError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            path.display()
        )));
    }

    fs::write(path, generate_config_template())?;

    if !cli.quiet {
        println!("Created configuration file: {}", path.display());
    }
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# axe-report configuration file
version = "1"

# Check messages to drop from "any" check lists (case-insensitive).
# Nodes left without checks are removed, and rules left without nodes too.
suppressed_messages = []

# Ignore aria-hidden-focus failures on Fluent UI tabster dummy elements.
exclude_fluent_ui_tabster = true

# Rule overrides are applied after the built-in rules; the last one wins.
# help_url is the exception: the first entry for a rule id that sets one is
# used, so it cannot replace a help_url already set by a built-in rule.
# [[rules]]
# id = "image-alt"
# description = "Images must have alternate text"
# help = "Provide a text alternative for every meaningful image"
# help_url = "https://example.com/guides/image-alt"
# tags = ["wcag2a", "wcag111"]
# enabled = true
#
# [[rules.checks]]
# id = "has-alt"
# pass_message = "Element has an alt attribute"
# fail_message = "Element does not have an alt attribute"

[needs_review]
# Violations of these rules are surfaced for manual review.
rules = [
    "aria-input-field-name",
    "color-contrast",
    "th-has-data-cells",
    "link-in-text-block",
    "p-as-heading",
    "label-content-name-mismatch",
    "td-has-header",
    "td-headers-attr",
]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
