use clickhouse::Row;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Summary entry in the coin list.
#[derive(Debug, Clone, Row, Serialize, Deserialize)]
pub struct Coin {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub circulating_supply: f64,
    #[serde(with = "clickhouse::serde::time::datetime")]
    pub time: OffsetDateTime,
}
