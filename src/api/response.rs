use serde::Serialize;

use crate::db::models::{ChartPoint, Coin, Pair, Scale};

/// Wrapper for the pair-list response.
#[derive(Debug, Serialize)]
pub struct Pairs {
    pub pairs: Vec<Pair>,
}

/// Wrapper for the coin-list response.
#[derive(Debug, Serialize)]
pub struct Coins {
    pub coins: Vec<Coin>,
}

/// Wrapper for the symbol-list response.
#[derive(Debug, Serialize)]
pub struct Symbols {
    pub symbols: Vec<String>,
}

/// Chart-point series echoing the resolved query dimensions.
/// `exchange: null` marks the cross-exchange aggregate series.
#[derive(Debug, Serialize)]
pub struct FilterPoints {
    pub filter: String,
    pub exchange: Option<String>,
    pub symbol: String,
    pub scale: Scale,
    pub points: Vec<ChartPoint>,
}

/// Envelope for security-token reference lookups: the result (a record,
/// a list, or null) always travels with a count.
#[derive(Debug, Serialize)]
pub struct TokenQueryResult<T> {
    pub result: T,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_result_absent_row_is_null_with_zero_count() {
        use crate::db::models::SecurityTokenDetails;

        let envelope: TokenQueryResult<Option<SecurityTokenDetails>> = TokenQueryResult {
            result: None,
            count: 0,
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json["result"].is_null());
        assert_eq!(json["count"], 0);
    }

    #[test]
    fn test_filter_points_absent_exchange_serializes_as_null() {
        let series = FilterPoints {
            filter: "VWAP".to_string(),
            exchange: None,
            symbol: "ETH".to_string(),
            scale: Scale::OneHour,
            points: vec![],
        };
        let json = serde_json::to_value(&series).unwrap();
        assert!(json["exchange"].is_null());
        assert_eq!(json["scale"], "1h");
    }
}
