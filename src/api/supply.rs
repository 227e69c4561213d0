use serde::Deserialize;
use time::OffsetDateTime;

use crate::api::error::ApiError;
use crate::db::models::{Supply, DEFAULT_SOURCE};
use crate::utils::name_for_symbol;

/// Inbound circulating-supply submission.
///
/// Only `symbol` and `circulating_supply` are required; `source` is
/// optional. Timestamps and display names are assigned by the gateway,
/// never taken from the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplyRequest {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub circulating_supply: f64,
    #[serde(default)]
    pub source: String,
}

impl SupplyRequest {
    /// Validate the submission and build the record to persist.
    ///
    /// Rejects when the symbol is empty or the supply is zero; defaults
    /// the source to [`DEFAULT_SOURCE`] when the caller omits it.
    pub fn into_supply(self, now: OffsetDateTime) -> Result<Supply, ApiError> {
        if self.symbol.is_empty() || self.circulating_supply == 0.0 {
            return Err(ApiError::Validation(
                "missing symbol or circulating_supply value".to_string(),
            ));
        }

        let source = if self.source.is_empty() {
            DEFAULT_SOURCE.to_string()
        } else {
            self.source
        };

        Ok(Supply {
            name: name_for_symbol(&self.symbol),
            symbol: self.symbol,
            source,
            circulating_supply: self.circulating_supply,
            time: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(symbol: &str, circulating_supply: f64, source: &str) -> SupplyRequest {
        SupplyRequest {
            symbol: symbol.to_string(),
            circulating_supply,
            source: source.to_string(),
        }
    }

    fn now() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
    }

    #[test]
    fn test_empty_symbol_is_rejected() {
        let err = request("", 100.0, "").into_supply(now()).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_zero_supply_is_rejected() {
        let err = request("BTC", 0.0, "").into_supply(now()).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_omitted_source_defaults_to_platform_identifier() {
        let supply = request("BTC", 19_000_000.0, "").into_supply(now()).unwrap();
        assert_eq!(supply.source, DEFAULT_SOURCE);
        assert!(!supply.source.is_empty());
    }

    #[test]
    fn test_caller_source_is_kept_when_present() {
        let supply = request("BTC", 19_000_000.0, "onchain")
            .into_supply(now())
            .unwrap();
        assert_eq!(supply.source, "onchain");
    }

    #[test]
    fn test_timestamp_and_name_are_gateway_assigned() {
        let stamp = now();
        let supply = request("BTC", 19_000_000.0, "").into_supply(stamp).unwrap();
        assert_eq!(supply.time, stamp);
        assert_eq!(supply.name, "Bitcoin");
        assert_eq!(supply.symbol, "BTC");
    }

    #[test]
    fn test_body_fields_are_all_optional_in_json() {
        // Missing fields deserialize to their empty defaults and are then
        // rejected by validation, not by the decoder.
        let request: SupplyRequest = serde_json::from_str("{}").unwrap();
        assert!(request.into_supply(now()).is_err());
    }
}
