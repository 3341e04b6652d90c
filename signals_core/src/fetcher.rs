//! Market-data client.
//!
//! Issues a single bounded-timeout `GET <base>/tokens/<contract>` against the DexScreener
//! API and decodes the first trading pair into a `PriceQuote`.
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;

use crate::config::Config;
use crate::error::BotError;
use crate::net::{MAX_BODY_BYTES, error_excerpt, read_capped, token_url};
use crate::pipeline::QuoteSource;
use crate::quote::PriceQuote;
use crate::result::Result;

/// Blocking DexScreener client.
#[derive(Debug, Clone)]
pub struct PriceFetcher {
    client: Client,
    base_url: String,
    max_body_bytes: u64,
}

impl PriceFetcher {
    /// Build a fetcher for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            max_body_bytes: MAX_BODY_BYTES,
        })
    }

    /// Build a fetcher from the run configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.dex_api_base, config.fetch_timeout)
    }

    /// Change the largest response body accepted.
    pub fn with_max_body_bytes(mut self, limit: u64) -> Self {
        self.max_body_bytes = limit;
        self
    }

    /// Fetch the current quote of the token at `contract`.
    pub fn fetch(&self, contract: &str) -> Result<PriceQuote> {
        let url = token_url(&self.base_url, contract);
        debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(BotError::HttpStatus {
                status: status.as_u16(),
                body: error_excerpt(response),
            });
        }

        let body = read_capped(response, self.max_body_bytes)?;
        let quote = PriceQuote::from_json_slice(&body)?;
        info!(
            "💰 Current price: ${:.4}, 24h change: {}",
            quote.price,
            quote
                .change_24h
                .as_ref()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "n/a".to_string())
        );
        Ok(quote)
    }
}

impl QuoteSource for PriceFetcher {
    fn fetch_quote(&self, contract: &str) -> Result<PriceQuote> {
        self.fetch(contract)
    }
}
