//! Status text rendering.
//!
//! ```text
//! $SIGN Price = $1.2345 📈5%
//! Updated: 2026-10-19 14:05 UTC
//! #SIGN #Crypto #SIGNSignals
//! ```
//!
//! The change is printed exactly as the API sent it. The change segment is dropped when
//! the API reported no 24-hour change, and also when it reported a numeric zero.
use chrono::{DateTime, Utc};

use crate::quote::PriceQuote;

/// Timestamp layout used on the `Updated:` line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Hashtag line for `symbol`, e.g. `#SIGN #Crypto #SIGNSignals`.
pub fn hashtags(symbol: &str) -> String {
    format!("#{symbol} #Crypto #{symbol}Signals")
}

/// Render the status posted for `quote` at time `now`.
pub fn format_status(symbol: &str, quote: &PriceQuote, now: DateTime<Utc>) -> String {
    let headline = match (quote.trend(), quote.shown_change()) {
        (Some(trend), Some(change)) => {
            format!("${symbol} Price = ${:.4} {trend}{change}%", quote.price)
        }
        _ => format!("${symbol} Price = ${:.4}", quote.price),
    };

    format!(
        "{headline}\nUpdated: {}\n{}",
        now.format(TIMESTAMP_FORMAT),
        hashtags(symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{Change24h, Decimal};
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 14, 5, 59).unwrap()
    }

    /// Quote whose change is the JSON value `h24`, e.g. `5`, `"5.50"` or `-3`.
    fn quote(price: f64, h24: &str) -> PriceQuote {
        let raw: Decimal = serde_json::from_str(h24).unwrap();
        PriceQuote::new(price, Change24h::from_decimal(raw).unwrap()).unwrap()
    }

    fn rendered(body: &[u8]) -> String {
        format_status("SIGN", &PriceQuote::from_json_slice(body).unwrap(), at())
    }

    #[test]
    fn positive_change_renders_up_glyph() {
        let text = format_status("SIGN", &quote(1.2345, "5"), at());

        assert_eq!(
            text,
            "$SIGN Price = $1.2345 📈5%\nUpdated: 2026-10-19 14:05 UTC\n#SIGN #Crypto #SIGNSignals"
        );
        assert!(text.contains("$1.2345"));
        assert!(text.contains("5%"));
    }

    #[test]
    fn negative_change_renders_down_glyph() {
        let text = format_status("SIGN", &quote(0.08, "-3"), at());

        assert!(text.starts_with("$SIGN Price = $0.0800 📉-3%\n"));
        assert!(!text.contains("📈"));
    }

    #[test]
    fn change_is_printed_as_received() {
        let text = rendered(br#"{"pairs": [{"priceUsd": "1", "priceChange": {"h24": "5.50"}}]}"#);
        assert!(text.starts_with("$SIGN Price = $1.0000 📈5.50%\n"));

        let text = rendered(br#"{"pairs": [{"priceUsd": "1", "priceChange": {"h24": 5.0}}]}"#);
        assert!(text.starts_with("$SIGN Price = $1.0000 📈5.0%\n"));

        let text = format_status("SIGN", &quote(0.123456, "2.57"), at());
        assert!(text.starts_with("$SIGN Price = $0.1235 📈2.57%\n"));
    }

    #[test]
    fn absent_change_omits_trend_and_percentage() {
        let text = format_status("SIGN", &PriceQuote::new(1.2345, None).unwrap(), at());

        assert_eq!(
            text,
            "$SIGN Price = $1.2345\nUpdated: 2026-10-19 14:05 UTC\n#SIGN #Crypto #SIGNSignals"
        );
        assert!(!text.contains('%'));
    }

    #[test]
    fn numeric_zero_change_renders_like_absent_change() {
        let none = format_status("SIGN", &PriceQuote::new(1.0, None).unwrap(), at());

        assert_eq!(format_status("SIGN", &quote(1.0, "0"), at()), none);
        assert_eq!(format_status("SIGN", &quote(1.0, "0.0"), at()), none);
    }

    #[test]
    fn zero_as_text_is_a_real_change() {
        let text = rendered(br#"{"pairs": [{"priceUsd": "1", "priceChange": {"h24": "0"}}]}"#);
        assert!(text.starts_with("$SIGN Price = $1.0000 📉0%\n"));
    }

    #[test]
    fn symbol_drives_cashtag_and_hashtags() {
        let text = format_status("ABC", &PriceQuote::new(3.0, None).unwrap(), at());

        assert!(text.starts_with("$ABC Price = $3.0000\n"));
        assert!(text.ends_with("#ABC #Crypto #ABCSignals"));
    }
}
