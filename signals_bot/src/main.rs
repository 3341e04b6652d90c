//! Signal Bot — posts the current price of a token to a social-media account.
//!
//! One invocation is one pass: read the credentials and the token contract from the
//! environment, fetch the token's first trading pair from DexScreener, render a short
//! status and publish it through the posting API. It is meant to be started by an
//! external scheduler.
//!
//! Usage example (CLI):
//! ```bash
//! CONSUMER_KEY=... CONSUMER_SECRET=... ACCESS_TOKEN=... ACCESS_TOKEN_SECRET=... \
//! TOKEN_CONTRACT=0x... signals_bot --symbol SIGN
//! ```
//!
//! Missing configuration exits non-zero before any network call. Fetch and post
//! failures are logged and the process still exits zero.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use chrono::Utc;
use clap::Parser;
use log::{error, info, warn};
use signals_core::Config;
use signals_core::fetcher::PriceFetcher;
use signals_core::pipeline::{self, RunOutcome};
use signals_core::publisher::PostPublisher;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => args.apply(config),
        Err(e) => {
            error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("🚀 Starting signal bot for ${} ...", config.symbol);

    let fetcher = match PriceFetcher::from_config(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("❌ Error building market-data client: {}", e);
            return ExitCode::SUCCESS;
        }
    };
    let publisher = match PostPublisher::from_config(&config) {
        Ok(publisher) => publisher,
        Err(e) => {
            error!("❌ Error building posting client: {}", e);
            return ExitCode::SUCCESS;
        }
    };

    match pipeline::run(&config, &fetcher, &publisher, Utc::now()) {
        RunOutcome::Posted(receipt) => info!("Done, post id {}.", receipt.id),
        RunOutcome::DryRun(_) => info!("Done (dry run)."),
        RunOutcome::NoQuote(_) | RunOutcome::PublishFailed(_) => {
            warn!("Finished without posting.")
        }
    }
    ExitCode::SUCCESS
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
