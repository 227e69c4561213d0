use clickhouse::Row;
use serde::{Deserialize, Serialize};

/// A trading pair listed on an exchange.
///
/// `foreign_name` is the pair name as the exchange spells it; `ignored`
/// marks pairs excluded from aggregation upstream but still listed.
#[derive(Debug, Clone, Row, Serialize, Deserialize)]
pub struct Pair {
    pub exchange: String,
    pub symbol: String,
    pub foreign_name: String,
    pub ignored: bool,
}
