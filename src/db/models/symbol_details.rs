use clickhouse::Row;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Per-symbol metadata: current quotation fields plus the exchanges
/// the symbol trades on.
#[derive(Debug, Clone, Row, Serialize, Deserialize)]
pub struct SymbolDetails {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub price_yesterday: f64,
    pub circulating_supply: f64,
    pub exchanges: Vec<String>,
    #[serde(with = "clickhouse::serde::time::datetime")]
    pub time: OffsetDateTime,
}
