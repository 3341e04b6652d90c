//!
//! Core types and pipeline stages of the token price signal bot.
//!
//! This crate aggregates:
//! - `error` — unified error type `BotError` used across the workspace.
//! - `result` — handy `Result<T, BotError>` alias.
//! - `net` — default endpoints and timeouts of the external APIs.
//! - `config` — required credentials and run settings.
//! - `quote` — the `PriceQuote` value and its trend indicator.
//! - `message` — rendering of the status text.
//! - `oauth` — OAuth 1.0a request signing for the posting API.
//! - `fetcher` — market-data client producing a `PriceQuote`.
//! - `publisher` — posting-API client submitting the status.
//! - `pipeline` — the single pass wiring fetcher and publisher together.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod net;
pub mod config;
pub mod quote;
pub mod message;
pub mod oauth;
pub mod fetcher;
pub mod publisher;
pub mod pipeline;

pub use error::BotError;
pub use result::Result;
pub use config::Config;
pub use quote::PriceQuote;
