use clap::Parser;
use tracing_subscriber::EnvFilter;

use axe_report::cli::{Cli, Commands};
use axe_report::commands::{run_decorate, run_init, run_rules, run_unified};

/// Log level from `-v`/`--quiet`; `RUST_LOG` takes precedence when set.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "off"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let exit_code = match &cli.command {
        Commands::Decorate(args) => run_decorate(args, &cli),
        Commands::Unified(args) => run_unified(args, &cli),
        Commands::Rules(args) => run_rules(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}
