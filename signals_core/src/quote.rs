//! Price quote data model and DexScreener response decoding.
//!
//! A `PriceQuote` is the only value flowing through the pipeline: the USD price of the
//! token and its optional 24-hour change in percent. It is decoded from the first
//! trading pair of a `/tokens/<contract>` response, where numeric fields may arrive as
//! JSON numbers or as numeric strings.
use std::fmt;

use serde::Deserialize;
use strum_macros::Display;

use crate::error::BotError;

/// Direction of the 24-hour move, rendered as the glyph used in the status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Trend {
    /// Strictly positive change.
    #[strum(serialize = "📈")]
    Up,
    /// Zero or negative change.
    #[strum(serialize = "📉")]
    Down,
}

impl Trend {
    /// Classify a percentage change; zero counts as down.
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 { Trend::Up } else { Trend::Down }
    }
}

/// Reported 24-hour change: the parsed percentage next to the value the API sent.
///
/// The status text shows `raw` exactly as received, so `"5.50"` stays `5.50` and a JSON
/// `5.0` stays `5.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Change24h {
    /// Parsed percentage.
    pub value: f64,
    /// Value as it appeared in the response.
    pub raw: Decimal,
}

impl Change24h {
    /// Parse a reported change. An empty string counts as no change at all.
    pub fn from_decimal(raw: Decimal) -> Result<Option<Self>, BotError> {
        if matches!(&raw, Decimal::Text(s) if s.trim().is_empty()) {
            return Ok(None);
        }
        let value = raw.to_f64("priceChange.h24")?;
        Ok(Some(Change24h { value, raw }))
    }

    /// `true` only for a JSON number equal to zero; the string `"0"` is a real value.
    pub fn is_numeric_zero(&self) -> bool {
        matches!(self.raw, Decimal::Number(_)) && self.value == 0.0
    }
}

impl fmt::Display for Change24h {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Price and 24-hour change of the tracked token.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    /// Price in USD; always finite and non-negative.
    pub price: f64,
    /// 24-hour change in percent, when the API reports one.
    pub change_24h: Option<Change24h>,
}

impl PriceQuote {
    /// Create a quote, rejecting negative or non-finite prices.
    pub fn new(price: f64, change_24h: Option<Change24h>) -> Result<Self, BotError> {
        if !price.is_finite() || price < 0.0 {
            return Err(BotError::InvalidNumber {
                field: "priceUsd",
                value: price.to_string(),
            });
        }
        Ok(PriceQuote { price, change_24h })
    }

    /// The change shown in the status. A numeric zero is treated like no change.
    pub fn shown_change(&self) -> Option<&Change24h> {
        self.change_24h.as_ref().filter(|change| !change.is_numeric_zero())
    }

    /// Trend of the shown change, if there is one.
    pub fn trend(&self) -> Option<Trend> {
        self.shown_change().map(|change| Trend::from_change(change.value))
    }

    /// Build a quote from the first trading pair of a token response.
    pub fn from_response(response: TokenPairsResponse) -> Result<Self, BotError> {
        let pair = response
            .pairs
            .and_then(|pairs| pairs.into_iter().next())
            .ok_or(BotError::NoTradingPairs)?;

        let price = pair
            .price_usd
            .ok_or(BotError::InvalidNumber {
                field: "priceUsd",
                value: "null".to_string(),
            })?
            .to_f64("priceUsd")?;

        let change_24h = match pair.price_change.and_then(|change| change.h24) {
            Some(h24) => Change24h::from_decimal(h24)?,
            None => None,
        };

        PriceQuote::new(price, change_24h)
    }

    /// Decode a raw JSON body and build a quote from it.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, BotError> {
        let response: TokenPairsResponse = serde_json::from_slice(body)?;
        Self::from_response(response)
    }
}

/// Body of `GET /tokens/<contract>`. Unknown tokens come back with `pairs: null`.
#[derive(Debug, Deserialize)]
pub struct TokenPairsResponse {
    /// Trading pairs listing the token, most relevant first.
    #[serde(default)]
    pub pairs: Option<Vec<TradingPair>>,
}

/// The subset of a trading pair the bot reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPair {
    /// Price of the token in USD.
    #[serde(default)]
    pub price_usd: Option<Decimal>,
    /// Percentage changes over several windows.
    #[serde(default)]
    pub price_change: Option<PriceChange>,
}

/// Percentage price change per window.
#[derive(Debug, Deserialize)]
pub struct PriceChange {
    /// Change over the last 24 hours.
    #[serde(default)]
    pub h24: Option<Decimal>,
}

/// A number that may be encoded either as a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Decimal {
    /// Plain JSON number, kept as written (`5`, `5.0`, `-3.25`).
    Number(serde_json::Number),
    /// Numeric string such as `"1.2345"`.
    Text(String),
}

impl Decimal {
    /// Convert to `f64`, naming `field` in the error when the value is not a finite number.
    pub fn to_f64(&self, field: &'static str) -> Result<f64, BotError> {
        let value = match self {
            Decimal::Number(n) => n.as_f64(),
            Decimal::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|v| v.is_finite()).ok_or_else(|| BotError::InvalidNumber {
            field,
            value: self.to_string(),
        })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decimal::Number(n) => write!(f, "{n}"),
            Decimal::Text(s) => f.write_str(s),
        }
    }
}
