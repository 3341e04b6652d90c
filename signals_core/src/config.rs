//! Run configuration.
//!
//! The five secrets are read from the environment exactly once at process entry and
//! collected into a `Config` that is passed by reference into the fetch and publish
//! stages. Non-secret settings (endpoints, timeout, symbol) start from the defaults in
//! `net` and may be overridden by the caller.
use std::fmt;
use std::time::Duration;

use crate::error::BotError;
use crate::net::{DEFAULT_SYMBOL, DEX_API_BASE, FETCH_TIMEOUT_SECS, POST_URL};

/// Environment variable holding the posting-API consumer key.
pub const CONSUMER_KEY: &str = "CONSUMER_KEY";
/// Environment variable holding the posting-API consumer secret.
pub const CONSUMER_SECRET: &str = "CONSUMER_SECRET";
/// Environment variable holding the user access token.
pub const ACCESS_TOKEN: &str = "ACCESS_TOKEN";
/// Environment variable holding the user access token secret.
pub const ACCESS_TOKEN_SECRET: &str = "ACCESS_TOKEN_SECRET";
/// Environment variable holding the token contract address.
pub const TOKEN_CONTRACT: &str = "TOKEN_CONTRACT";

/// Every required variable, in reporting order.
pub const REQUIRED_VARS: [&str; 5] = [
    CONSUMER_KEY,
    CONSUMER_SECRET,
    ACCESS_TOKEN,
    ACCESS_TOKEN_SECRET,
    TOKEN_CONTRACT,
];

/// The four OAuth 1.0a credentials of the posting account.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Application consumer key.
    pub consumer_key: String,
    /// Application consumer secret.
    pub consumer_secret: String,
    /// User access token.
    pub access_token: String,
    /// User access token secret.
    pub access_token_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

/// Everything a single run needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Posting-API credentials.
    pub credentials: Credentials,
    /// Contract address of the tracked token.
    pub token_contract: String,
    /// Ticker symbol shown in the cashtag and hashtags.
    pub symbol: String,
    /// Base URL of the market-data API.
    pub dex_api_base: String,
    /// Post creation endpoint.
    pub post_url: String,
    /// Timeout for the price request.
    pub fetch_timeout: Duration,
    /// Format and log the status without posting it.
    pub dry_run: bool,
}

impl Config {
    /// Reads the required values from the process environment.
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary `name -> value` lookup.
    ///
    /// A value that is absent, empty or only whitespace counts as missing. When anything
    /// is missing the error lists every missing name, not just the first one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut values = Vec::with_capacity(REQUIRED_VARS.len());
        let mut missing = Vec::new();

        for name in REQUIRED_VARS {
            match lookup(name).filter(|v| !v.trim().is_empty()) {
                Some(value) => values.push(value),
                None => missing.push(name.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(BotError::MissingConfig(missing));
        }

        let mut values = values.into_iter();
        let mut next = || values.next().unwrap_or_default();

        Ok(Config {
            credentials: Credentials {
                consumer_key: next(),
                consumer_secret: next(),
                access_token: next(),
                access_token_secret: next(),
            },
            token_contract: next(),
            symbol: DEFAULT_SYMBOL.to_string(),
            dex_api_base: DEX_API_BASE.to_string(),
            post_url: POST_URL.to_string(),
            fetch_timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            dry_run: false,
        })
    }
}
