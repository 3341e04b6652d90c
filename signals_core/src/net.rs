//! Default endpoints and limits of the external APIs the bot talks to, plus the
//! bounded body reads both HTTP stages share.
use std::io::Read;

use crate::error::BotError;
use crate::result::Result;

/// Base URL of the DexScreener market-data API.
pub const DEX_API_BASE: &str = "https://api.dexscreener.com/latest/dex";
/// Post creation endpoint of the X (Twitter) v2 API.
pub const POST_URL: &str = "https://api.twitter.com/2/tweets";
/// Timeout applied to the price request, in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 10;
/// Ticker symbol used in the cashtag and hashtags.
pub const DEFAULT_SYMBOL: &str = "SIGN";

/// Largest successful response body read into memory.
pub const MAX_BODY_BYTES: u64 = 4 * 1024 * 1024;
/// Bytes of an error response read for the log line.
pub const ERROR_BODY_BYTES: u64 = 4 * 1024;
/// Longest response body excerpt kept in an error.
pub const MAX_BODY_EXCERPT: usize = 200;

/// Helper to build the token lookup URL like "base/tokens/contract".
pub fn token_url(base: &str, contract: &str) -> String {
    format!("{}/tokens/{}", base.trim_end_matches('/'), contract)
}

/// Read a whole body, failing once it grows past `limit` bytes.
pub fn read_capped<R: Read>(reader: R, limit: u64) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut body)?;
    if body.len() as u64 > limit {
        return Err(BotError::BodyTooLarge { limit });
    }
    Ok(body)
}

/// Excerpt of an error response, reading at most `ERROR_BODY_BYTES` of it.
pub fn error_excerpt<R: Read>(reader: R) -> String {
    let mut prefix = Vec::new();
    // whatever arrived before a read error is still worth logging
    let _ = reader.take(ERROR_BODY_BYTES).read_to_end(&mut prefix);
    excerpt(&prefix)
}

/// Lossy UTF-8 prefix of a response body, for error messages.
pub fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    match trimmed.char_indices().nth(MAX_BODY_EXCERPT) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_url_joins_base_and_contract() {
        assert_eq!(
            token_url(DEX_API_BASE, "0xabc"),
            "https://api.dexscreener.com/latest/dex/tokens/0xabc"
        );
    }

    #[test]
    fn token_url_ignores_trailing_slash() {
        assert_eq!(token_url("http://localhost:9000/", "0xabc"), "http://localhost:9000/tokens/0xabc");
    }

    #[test]
    fn read_capped_accepts_bodies_up_to_the_limit() {
        assert_eq!(read_capped(&b"12345"[..], 5).unwrap(), b"12345");
    }

    #[test]
    fn read_capped_rejects_oversized_bodies() {
        assert!(matches!(
            read_capped(&b"123456"[..], 5),
            Err(BotError::BodyTooLarge { limit: 5 })
        ));
    }

    #[test]
    fn error_excerpt_reads_only_a_prefix() {
        let body = vec![b'x'; (ERROR_BODY_BYTES as usize) * 10];
        let mut reader = &body[..];

        let cut = error_excerpt(&mut reader);

        assert_eq!(cut.len(), MAX_BODY_EXCERPT + 3);
        assert_eq!(reader.len(), body.len() - ERROR_BODY_BYTES as usize);
    }

    #[test]
    fn excerpt_keeps_short_bodies() {
        assert_eq!(excerpt(b"  rate limited \n"), "rate limited");
    }

    #[test]
    fn excerpt_truncates_long_bodies_on_char_boundary() {
        let body = "é".repeat(MAX_BODY_EXCERPT + 10);
        let cut = excerpt(body.as_bytes());

        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), MAX_BODY_EXCERPT + 3);
    }
}
