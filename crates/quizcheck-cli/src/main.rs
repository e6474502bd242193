//! quizcheck - Check the question numbering of a quiz page.

use clap::Parser;
use quizcheck_cli::config::OutputFormat;
use quizcheck_cli::{run_check, Cli, Config, Formatter};
use std::io::{self, IsTerminal};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    if let Err(e) = run(cli) {
        let formatter = Formatter::new(OutputFormat::Text, io::stderr().is_terminal());
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> quizcheck_cli::Result<()> {
    // Defaults < config file < command line
    let mut config = Config::discover(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    let color_enabled = config.settings.color && io::stdout().is_terminal();
    let formatter = Formatter::new(config.settings.format, color_enabled);

    let outcome = run_check(&cli.path, &config.extractor, cli.expect)?;
    println!("{}", formatter.format_outcome(&outcome)?);

    Ok(())
}

/// Log to stderr so report output on stdout stays clean.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
