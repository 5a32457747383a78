use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::cli::{Cli, ColorChoice, ScanArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::decorator::{ResultDecorator, StaticTitle};
use crate::error::{AxeReportError, Result};
use crate::model::ScanResults;
use crate::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::scan::{
    RecordedEngine, RuleCatalogEntry, RuleSifter, ScanOptions, ScanParameterGenerator, Scanner,
};
use crate::{EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Resolve the configuration for this invocation.
///
/// `--no-config` yields defaults, `--config` loads that file, otherwise the
/// usual discovery order applies.
///
/// # Errors
/// Returns an error if a config file is found but cannot be read, parsed or validated.
pub fn load_config(cli: &Cli) -> Result<Config> {
    if cli.no_config {
        debug!("Config loading disabled");
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = match &cli.config {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    if let Some(source) = &result.source {
        info!(path = %source.display(), "Using config file");
    }
    Ok(result.config)
}

/// Read a rule catalog JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a catalog array.
pub fn load_catalog(path: &Path) -> Result<Vec<RuleCatalogEntry>> {
    let content = fs::read_to_string(path).map_err(|source| AxeReportError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Replay a results file through the decoration pipeline.
///
/// # Errors
/// Returns an error if the results or catalog cannot be loaded, the rule
/// configuration is invalid, or the engine fails.
pub fn run_pipeline(args: &ScanArgs, config: &Config) -> Result<ScanResults> {
    let registry = config.rule_registry()?;

    let parameter_generator = match &args.catalog {
        Some(path) => {
            let catalog = load_catalog(path)?;
            ScanParameterGenerator::new(RuleSifter::new(&catalog, &registry).rule_ids())
        }
        None => ScanParameterGenerator::unrestricted(),
    };

    let title = StaticTitle(args.title.clone().unwrap_or_default());
    let decorator = ResultDecorator::new(title, &registry, config.rule_processor())
        .with_fluent_ui_tabster_exclusion(config.exclude_fluent_ui_tabster);

    let engine = RecordedEngine::from_path(&args.results)?;
    let scanner = Scanner::new(engine, parameter_generator, decorator);
    let options = ScanOptions {
        tests_to_run: args.rules.clone(),
        ..ScanOptions::default()
    };

    scanner.scan(&options, |err| {
        debug!(error_type = err.error_type(), "Engine failure reported");
    })
}

#[must_use]
pub fn formatter_for(format: OutputFormat, cli: &Cli) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::with_verbose(
            color_choice_to_mode(cli.color),
            cli.verbose,
        )),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Write to the output file, or stdout when none is given.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            info!(path = %path.display(), "Wrote output");
        }
        None => print!("{content}"),
    }
    Ok(())
}

#[must_use]
pub const fn exit_code_for(fail_on_violations: bool, has_violations: bool) -> i32 {
    if fail_on_violations && has_violations {
        EXIT_VIOLATIONS_FOUND
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
