use std::io;
use std::process;

use clap::Parser;
use colored::Colorize;
use ordered_tree::cli::{execute_command, Cli};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("{}", format!("Error: {}", e).red());
        process::exit(e.exit_code());
    }
}

/// Logs go to stderr so they never interleave with the programs' own output. `RUST_LOG`
/// directives take precedence over the `-d` level.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!(%level, "logging initialised");
}
