//! Error types shared by every stage of the bot.
//!
//! The `BotError` enum unifies configuration, transport, decoding and signing
//! failures so each stage can propagate a single error type. Only
//! `MissingConfig` is fatal; every other variant is logged by the pipeline.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the binary.
#[derive(Error, Debug)]
pub enum BotError {
    /// One or more required environment values are absent or empty.
    #[error("Missing required configuration: {}", .0.join(", "))]
    MissingConfig(Vec<String>),

    /// Transport failure from `reqwest` (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered with a non-success status.
    #[error("HTTP status {status}: {body}")]
    HttpStatus {
        /// Status code returned by the server.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The market-data response carried no trading pairs for the token.
    #[error("No trading pairs found for token")]
    NoTradingPairs,

    /// A numeric field was missing, unparseable or out of range.
    #[error("Invalid number in `{field}`: {value}")]
    InvalidNumber {
        /// Name of the offending JSON field.
        field: &'static str,
        /// Raw value as received.
        value: String,
    },

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Failure while computing the OAuth signature.
    #[error("Signing error: {0}")]
    Signing(String),

    /// Response body exceeded the read limit.
    #[error("Response body larger than {limit} bytes")]
    BodyTooLarge {
        /// Limit in bytes.
        limit: u64,
    },

    /// I/O error while reading a response body.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
