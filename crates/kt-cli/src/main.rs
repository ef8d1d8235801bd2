use kt_core::logging;

mod cli;

use crate::cli::{failure_report, CliCommand};

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; never fail the CLI because of it.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        tracing::error!("command failed: {:#}", err);
        for line in failure_report(&err) {
            eprintln!("{}", line);
        }
        std::process::exit(1);
    }
}
