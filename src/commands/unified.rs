use crate::cli::{Cli, UnifiedArgs, UnifiedMode};
use crate::model::{InstanceResultStatus, ScanResults};
use crate::output::{UnifiedReport, print_error};
use crate::unified::{
    ConvertScanResultsToUnifiedResults, UidGenerator, convert_scan_results_to_unified_rules,
};
use crate::{EXIT_CONFIG_ERROR, Result};

use super::context::{exit_code_for, formatter_for, load_config, run_pipeline, write_output};

#[must_use]
pub fn run_unified(args: &UnifiedArgs, cli: &Cli) -> i32 {
    match run_unified_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Unified rules plus the results of the selected conversion.
#[must_use]
pub fn build_unified_report<G: UidGenerator>(
    results: &ScanResults,
    mode: UnifiedMode,
    converter: &ConvertScanResultsToUnifiedResults<G>,
) -> UnifiedReport {
    let unified_results = match mode {
        UnifiedMode::Automated => converter.automated_checks_conversion(results),
        UnifiedMode::NeedsReview => converter.needs_review_conversion(results),
    };
    UnifiedReport {
        rules: convert_scan_results_to_unified_rules(results),
        results: unified_results,
    }
}

/// Converts a results file into unified rules and results.
///
/// # Errors
/// Returns an error if configuration, input or output handling fails.
pub fn run_unified_impl(args: &UnifiedArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;
    let results = run_pipeline(&args.scan, &config)?;

    let converter = ConvertScanResultsToUnifiedResults::new()
        .with_needs_review_rules(config.needs_review.rules.iter().cloned());
    let report = build_unified_report(&results, args.mode, &converter);

    let output = formatter_for(args.format, cli).format_unified(&report)?;
    write_output(cli.output.as_deref(), &output)?;

    let has_failures = report
        .results
        .iter()
        .any(|result| result.status == InstanceResultStatus::Fail);
    Ok(exit_code_for(args.scan.fail_on_violations, has_failures))
}

#[cfg(test)]
#[path = "unified_tests.rs"]
mod tests;
