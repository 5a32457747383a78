use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Which unified-result conversion to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum UnifiedMode {
    /// Passes and violations with how-to-fix guidance
    #[default]
    Automated,
    /// Passes, needs-review violations and incomplete results with how-to-check guidance
    NeedsReview,
}

#[derive(Parser, Debug)]
#[command(name = "axe-report")]
#[command(author, version, about = "Decorate and normalize axe-core accessibility results")]
#[command(long_about = "Turns raw axe-core results into decorated scan results, \
    unified report rules and results, or a sifted rule catalog.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Violations found (with --fail-on-violations)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decorate raw engine results with messages, help URLs and guidance links
    Decorate(DecorateArgs),

    /// Convert results into unified rules and per-element results
    Unified(UnifiedArgs),

    /// List catalog rules that are enabled and map to accessibility standards
    Rules(RulesArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

/// Inputs shared by the commands that run the decoration pipeline.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Engine results JSON file
    pub results: PathBuf,

    /// Page title recorded in the decorated results
    #[arg(long)]
    pub title: Option<String>,

    /// Only keep these rule ids (comma-separated, e.g., image-alt,label)
    #[arg(long, value_delimiter = ',')]
    pub rules: Option<Vec<String>>,

    /// Rule catalog JSON; restricts the scan to sifted rules when --rules is absent
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Exit with code 1 when any violation remains after decoration
    #[arg(long)]
    pub fail_on_violations: bool,
}

#[derive(Parser, Debug)]
pub struct DecorateArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct UnifiedArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Conversion mode
    #[arg(long, value_enum, default_value = "automated")]
    pub mode: UnifiedMode,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Rule catalog JSON (array of {ruleId, description, help, helpUrl, tags})
    pub catalog: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Path of the configuration file to create
    #[arg(default_value = ".axe-report.toml")]
    pub path: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
