//! ghdump - clone every public repository of a GitHub user or organization.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ghdump_cmd::dump::DumpArgs;
use ghdump_cmd::factory::Factory;
use ghdump_cmd::report::report_error;
use ghdump_core::cmdutil::is_user_cancellation;
use ghdump_core::ios_println;

/// Process exit codes.
mod exit_codes {
    pub const OK: i32 = 0;
    pub const ERROR: i32 = 1;
    pub const CANCEL: i32 = 2;
}

/// GitHub Repository Cloner.
#[derive(Debug, Parser)]
#[command(
    name = "ghdump",
    version,
    about = "Clone every public repository of a GitHub user or organization",
    long_about = "Prompts for an account, lists its public repositories through the \
                  GitHub REST API, and clones each one into <output-dir>/<kind>_<username> \
                  next to a README.md manifest."
)]
struct Cli {
    #[command(flatten)]
    dump: DumpArgs,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GHDUMP_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let factory = Factory::new(env!("CARGO_PKG_VERSION").to_string());
    let ios = &factory.io;
    let cs = ios.color_scheme();
    ios_println!(ios, "{}", cs.warning("GitHub Repository Cloner"));
    ios_println!(ios);

    let exit_code = match cli.dump.run(&factory).await {
        Ok(summary) => {
            tracing::info!(
                path = %summary.target.display(),
                count = summary.cloned.len(),
                "Finished"
            );
            exit_codes::OK
        }
        Err(e) => {
            report_error(ios, &e);
            if is_user_cancellation(&e) {
                exit_codes::CANCEL
            } else {
                exit_codes::ERROR
            }
        }
    };

    std::process::exit(exit_code);
}
