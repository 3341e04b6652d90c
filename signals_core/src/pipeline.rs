//! Single-pass pipeline: fetch the quote, render the status, post it.
//!
//! Both network stages sit behind small traits so the pass can run against the real
//! HTTP clients or against in-memory stand-ins. Failures of either stage never escape
//! as errors: they are logged and reported through `RunOutcome`, and a failed fetch
//! skips the publish stage entirely.
use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::config::Config;
use crate::error::BotError;
use crate::message::format_status;
use crate::publisher::PostReceipt;
use crate::quote::PriceQuote;

/// Anything able to produce a quote for a token contract.
pub trait QuoteSource {
    /// Fetch the current quote of `contract`.
    fn fetch_quote(&self, contract: &str) -> Result<PriceQuote, BotError>;
}

/// Anything able to publish a status text.
pub trait StatusPoster {
    /// Publish `text` as a new post.
    fn post_status(&self, text: &str) -> Result<PostReceipt, BotError>;
}

/// How a run ended. Every variant maps to a successful process exit.
#[derive(Debug)]
pub enum RunOutcome {
    /// The status was posted.
    Posted(PostReceipt),
    /// The status was rendered but not posted (dry run).
    DryRun(String),
    /// No quote could be obtained; nothing was posted.
    NoQuote(BotError),
    /// The quote was fetched but posting failed.
    PublishFailed(BotError),
}

/// Run the pipeline once, with `now` as the status timestamp.
pub fn run<S, P>(config: &Config, source: &S, poster: &P, now: DateTime<Utc>) -> RunOutcome
where
    S: QuoteSource + ?Sized,
    P: StatusPoster + ?Sized,
{
    info!("🔍 Fetching price from DexScreener ...");
    let quote = match source.fetch_quote(&config.token_contract) {
        Ok(quote) => quote,
        Err(e) => {
            error!("❌ Error fetching price: {}", e);
            warn!("⚠️ Could not fetch price; post skipped.");
            return RunOutcome::NoQuote(e);
        }
    };

    let text = format_status(&config.symbol, &quote, now);
    info!("📝 Post content preview:\n{}", text);

    if config.dry_run {
        info!("Dry run; post not sent.");
        return RunOutcome::DryRun(text);
    }

    info!("🐦 Posting status ...");
    match poster.post_status(&text) {
        Ok(receipt) => {
            info!("✅ Post {} published successfully!", receipt.id);
            RunOutcome::Posted(receipt)
        }
        Err(e) => {
            error!("❌ Error posting status: {}", e);
            RunOutcome::PublishFailed(e)
        }
    }
}
