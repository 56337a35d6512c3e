//! EasySendSMS CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run one API call, exit
//! with the appropriate status. For programmatic use, prefer the library
//! API (`easysendsms`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    cli::init_tracing();
    let args = cli::Args::parse();
    cli::run(args).await
}
