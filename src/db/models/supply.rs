use clickhouse::Row;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Source recorded on a supply when the submitter does not name one.
/// Never persisted empty.
pub const DEFAULT_SOURCE: &str = "sibyl";

/// Circulating supply of a coin at a point in time.
///
/// `time` and `name` are always assigned by the gateway at ingestion;
/// they are never taken from the caller.
#[derive(Debug, Clone, Row, Serialize, Deserialize)]
pub struct Supply {
    pub symbol: String,
    pub name: String,
    pub source: String,
    pub circulating_supply: f64,
    #[serde(with = "clickhouse::serde::time::datetime")]
    pub time: OffsetDateTime,
}
