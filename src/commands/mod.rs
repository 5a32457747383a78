//! Subcommand implementations behind the binary.

mod context;
mod decorate;
mod init;
mod rules;
mod unified;

pub use context::{
    color_choice_to_mode, exit_code_for, formatter_for, load_catalog, load_config, run_pipeline,
    write_output,
};
pub use decorate::{run_decorate, run_decorate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rules::{run_rules, run_rules_impl};
pub use unified::{build_unified_report, run_unified, run_unified_impl};

#[cfg(test)]
mod test_support;
