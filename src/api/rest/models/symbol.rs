use serde::Deserialize;

use super::serde_util;

fn default_price_precision() -> u32 {
    2
}

/// Metadata for a single trading pair, as returned by `/api/symbols`.
///
/// Numeric fields absent from the payload default to zero; the price
/// precision defaults to 2 decimal digits.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    symbol: String,
    #[serde(default, deserialize_with = "serde_util::string_or_float::deserialize")]
    ask: f64,
    #[serde(default, deserialize_with = "serde_util::string_or_float::deserialize")]
    bid: f64,
    #[serde(default, deserialize_with = "serde_util::string_or_float::deserialize")]
    min_trade_size: f64,
    #[serde(default = "default_price_precision")]
    price_precision: u32,
}

impl SymbolInfo {
    /// The pair name, e.g. `"UNI/USDT"`.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The lowest sell price currently quoted.
    pub fn ask(&self) -> f64 {
        self.ask
    }

    /// The highest buy price currently quoted.
    pub fn bid(&self) -> f64 {
        self.bid
    }

    /// The minimum order quantity, in base-asset units.
    pub fn min_trade_size(&self) -> f64 {
        self.min_trade_size
    }

    /// The number of decimal digits order prices must be rounded to.
    pub fn price_precision(&self) -> u32 {
        self.price_precision
    }

    /// Rounds `value` to this pair's price precision.
    pub fn round_price(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.price_precision as i32);

        (value * factor).round() / factor
    }

    /// The quote asset of the pair, e.g. `"USDT"` for `"UNI/USDT"`.
    ///
    /// `None` when the symbol carries no `/` separator.
    pub fn quote_asset(&self) -> Option<&str> {
        self.symbol.split_once('/').map(|(_, quote)| quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol_info(json: &str) -> SymbolInfo {
        serde_json::from_str(json).expect("must deserialize symbol info")
    }

    #[test]
    fn deserializes_full_payload() {
        let info = symbol_info(
            r#"{"symbol":"UNI/USDT","ask":5.6,"bid":5.5,"minTradeSize":0.001,"pricePrecision":2}"#,
        );

        assert_eq!(info.symbol(), "UNI/USDT");
        assert_eq!(info.ask(), 5.6);
        assert_eq!(info.bid(), 5.5);
        assert_eq!(info.min_trade_size(), 0.001);
        assert_eq!(info.price_precision(), 2);
    }

    #[test]
    fn missing_fields_default_to_zero_and_precision_two() {
        let info = symbol_info(r#"{"symbol":"UNI/USDT"}"#);

        assert_eq!(info.ask(), 0.0);
        assert_eq!(info.bid(), 0.0);
        assert_eq!(info.min_trade_size(), 0.0);
        assert_eq!(info.price_precision(), 2);
    }

    #[test]
    fn accepts_numeric_strings() {
        let info = symbol_info(r#"{"symbol":"UNI/USDT","ask":"5.61","bid":"5.59"}"#);

        assert_eq!(info.ask(), 5.61);
        assert_eq!(info.bid(), 5.59);
    }

    #[test]
    fn rounds_price_to_declared_precision() {
        let info = symbol_info(r#"{"symbol":"UNI/USDT","ask":6.0,"pricePrecision":3}"#);
        assert_eq!(info.round_price(6.0 * 0.92), 5.52);

        let info = symbol_info(r#"{"symbol":"UNI/USDT","ask":5.6,"pricePrecision":2}"#);
        assert_eq!(info.round_price(5.6), 5.6);
        assert_eq!(info.round_price(5.678), 5.68);
    }

    #[test]
    fn quote_asset_is_text_after_separator() {
        let info = symbol_info(r#"{"symbol":"UNI/USDT"}"#);
        assert_eq!(info.quote_asset(), Some("USDT"));

        let info = symbol_info(r#"{"symbol":"UNIUSDT"}"#);
        assert_eq!(info.quote_asset(), None);
    }
}
