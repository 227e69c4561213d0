use clickhouse::Row;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One time/value sample of a filter series (e.g. VWAP at a bucket).
///
/// Points are computed and bucketed upstream; the gateway only reads
/// the stored series.
#[derive(Debug, Clone, Row, Serialize, Deserialize)]
pub struct ChartPoint {
    #[serde(with = "clickhouse::serde::time::datetime")]
    pub time: OffsetDateTime,
    pub value: f64,
}
