//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `BotError`, so functions can simply return `Result<T>`.
use crate::error::BotError;

/// Workspace-wide `Result` alias with `BotError` as the default error.
pub type Result<T, E = BotError> = std::result::Result<T, E>;
