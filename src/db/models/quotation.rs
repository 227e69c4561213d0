use clickhouse::Row;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Latest market quotation for a symbol.
#[derive(Debug, Clone, Row, Serialize, Deserialize)]
pub struct Quotation {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub price_yesterday: f64,
    pub volume_yesterday_usd: f64,
    pub source: String,
    #[serde(with = "clickhouse::serde::time::datetime")]
    pub time: OffsetDateTime,
}
