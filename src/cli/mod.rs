// CLI module
// Command-line interface, argument parsing and log setup

mod args;

pub use args::{CliArgs, ReportFormat};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, --help), clap displays an error or
/// help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the verbosity flags. Logs go to stderr
/// so they never mix with the report on stdout.
pub fn init_logging(args: &CliArgs) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_filter().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
