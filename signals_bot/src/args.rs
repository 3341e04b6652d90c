//! Command-line arguments for the signal bot.
//!
//! Secrets are never taken from the command line; they come from the environment (see
//! `signals_core::config`). These flags only override non-secret settings.
use clap::Parser;
use signals_core::Config;
use signals_core::net::{DEFAULT_SYMBOL, DEX_API_BASE, FETCH_TIMEOUT_SECS, POST_URL};
use std::time::Duration;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Ticker symbol used in the cashtag and hashtags; a leading `$` is ignored.
    #[clap(long, default_value = DEFAULT_SYMBOL, value_parser = parse_symbol)]
    pub symbol: String,

    /// Base URL of the DexScreener API.
    #[clap(long, default_value = DEX_API_BASE)]
    pub dex_api_base: String,

    /// Post creation endpoint of the posting API.
    #[clap(long, default_value = POST_URL)]
    pub post_url: String,

    /// Timeout for the price request, in seconds.
    #[clap(
        long,
        default_value_t = FETCH_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Fetch and render the status, but do not post it.
    #[clap(long)]
    pub dry_run: bool,
}

impl Args {
    /// Apply the overrides to a config loaded from the environment.
    pub fn apply(self, mut config: Config) -> Config {
        config.symbol = self.symbol;
        config.dex_api_base = self.dex_api_base;
        config.post_url = self.post_url;
        config.fetch_timeout = Duration::from_secs(self.timeout_secs);
        config.dry_run = self.dry_run;
        config
    }
}

/// Accept a non-empty alphanumeric ticker, dropping surrounding blanks and a leading `$`.
fn parse_symbol(raw: &str) -> Result<String, String> {
    let symbol = raw.trim().trim_start_matches('$');
    if symbol.is_empty() {
        return Err("symbol must not be empty".to_string());
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!("symbol `{symbol}` must be ASCII letters and digits"));
    }
    Ok(symbol.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_lookup(|_| Some("x".to_string())).unwrap()
    }

    #[test]
    fn defaults_keep_config_defaults() {
        let args = Args::parse_from(["signals_bot"]);
        let config = args.apply(config());

        assert_eq!(config.symbol, "SIGN");
        assert_eq!(config.dex_api_base, DEX_API_BASE);
        assert_eq!(config.post_url, POST_URL);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert!(!config.dry_run);
    }

    #[test]
    fn flags_override_settings() {
        let args = Args::parse_from([
            "signals_bot",
            "--symbol",
            "$ABC",
            "--dex-api-base",
            "http://127.0.0.1:9000",
            "--timeout-secs",
            "3",
            "--dry-run",
        ]);
        let config = args.apply(config());

        assert_eq!(config.symbol, "ABC");
        assert_eq!(config.dex_api_base, "http://127.0.0.1:9000");
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
        assert!(config.dry_run);
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(Args::try_parse_from(["signals_bot", "--timeout-secs", "0"]).is_err());
        assert!(Args::try_parse_from(["signals_bot", "--timeout-secs", "1"]).is_ok());
    }

    #[test]
    fn rejects_empty_or_malformed_symbols() {
        for symbol in ["", "  ", "$", " $ ", "SI GN", "#SIGN"] {
            assert!(
                Args::try_parse_from(["signals_bot", "--symbol", symbol]).is_err(),
                "accepted {symbol:?}"
            );
        }
    }
}
