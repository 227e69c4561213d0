use crate::db::error::StoreError;
use crate::db::models::{ChartPoint, Coin, Pair, Quotation, Scale, Supply, SymbolDetails};
use crate::db::clickhouse::ClickhouseClient;

impl ClickhouseClient {
    // ==================== QUOTATIONS ====================

    /// Latest quotation for a symbol. Absence is a `NotFound` outcome,
    /// not a backend failure.
    pub async fn get_quotation(&self, symbol: &str) -> Result<Quotation, StoreError> {
        let quotation = self
            .client
            .query(
                "SELECT ?fields FROM quotations WHERE symbol = ? ORDER BY time DESC LIMIT 1",
            )
            .bind(symbol)
            .fetch_optional::<Quotation>()
            .await?;

        quotation.ok_or(StoreError::NotFound("quotation"))
    }

    /// Distinct symbols currently quoted, sorted.
    pub async fn get_all_symbols(&self) -> Result<Vec<String>, StoreError> {
        let symbols = self
            .client
            .query("SELECT DISTINCT symbol FROM quotations ORDER BY symbol")
            .fetch_all::<String>()
            .await?;

        Ok(symbols)
    }

    // ==================== SUPPLIES ====================

    /// Latest circulating supply recorded for a symbol.
    pub async fn get_supply(&self, symbol: &str) -> Result<Supply, StoreError> {
        let supply = self
            .client
            .query("SELECT ?fields FROM supplies WHERE symbol = ? ORDER BY time DESC LIMIT 1")
            .bind(symbol)
            .fetch_optional::<Supply>()
            .await?;

        supply.ok_or(StoreError::NotFound("supply"))
    }

    /// Persist one validated supply record.
    pub async fn set_supply(&self, supply: &Supply) -> Result<(), StoreError> {
        let mut insert = self.client.insert::<Supply>("supplies").await?;
        insert.write(supply).await?;
        insert.end().await?;

        Ok(())
    }

    // ==================== PAIRS / COINS / SYMBOL DETAILS ====================

    /// All known trading pairs. An empty list is a valid result.
    pub async fn get_pairs(&self) -> Result<Vec<Pair>, StoreError> {
        let pairs = self
            .client
            .query("SELECT ?fields FROM pairs FINAL ORDER BY exchange, foreign_name")
            .fetch_all::<Pair>()
            .await?;

        Ok(pairs)
    }

    /// Current coin list. An empty list is a valid result.
    pub async fn get_coins(&self) -> Result<Vec<Coin>, StoreError> {
        let coins = self
            .client
            .query("SELECT ?fields FROM coins FINAL ORDER BY symbol")
            .fetch_all::<Coin>()
            .await?;

        Ok(coins)
    }

    /// Metadata for one symbol.
    pub async fn get_symbol_details(&self, symbol: &str) -> Result<SymbolDetails, StoreError> {
        let details = self
            .client
            .query(
                "SELECT ?fields FROM symbol_details WHERE symbol = ? ORDER BY time DESC LIMIT 1",
            )
            .bind(symbol)
            .fetch_optional::<SymbolDetails>()
            .await?;

        details.ok_or(StoreError::NotFound("symbol"))
    }

    // ==================== CHART POINTS ====================

    /// Stored filter series for (filter, exchange, symbol, scale).
    ///
    /// A present exchange scopes the series to that exchange. An absent
    /// exchange selects the cross-exchange aggregate series, which is
    /// stored under the empty exchange key - a distinct series, never a
    /// wildcard over per-exchange rows.
    pub async fn get_filter_points(
        &self,
        filter: &str,
        exchange: Option<&str>,
        symbol: &str,
        scale: Scale,
    ) -> Result<Vec<ChartPoint>, StoreError> {
        let mut query = self.client.query(filter_points_query(exchange)).bind(filter);
        if let Some(exchange) = exchange {
            query = query.bind(exchange);
        }

        let points = query
            .bind(symbol)
            .bind(scale.as_str())
            .fetch_all::<ChartPoint>()
            .await?;

        Ok(points)
    }
}

/// Statement for a filter-series lookup. The exchange dimension picks one
/// of two distinct statements: a present exchange becomes a bound equality,
/// an absent one pins the empty exchange key of the aggregate series.
fn filter_points_query(exchange: Option<&str>) -> &'static str {
    match exchange {
        Some(_) => {
            "SELECT ?fields FROM filter_points \
             WHERE filter = ? AND exchange = ? AND symbol = ? AND scale = ? \
             ORDER BY time"
        },
        None => {
            "SELECT ?fields FROM filter_points \
             WHERE filter = ? AND exchange = '' AND symbol = ? AND scale = ? \
             ORDER BY time"
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_scoped_and_aggregate_lookups_are_distinct() {
        let scoped = filter_points_query(Some("Binance"));
        let aggregate = filter_points_query(None);

        assert_ne!(scoped, aggregate);
        assert!(scoped.contains("exchange = ?"));
        assert!(!scoped.contains("exchange = ''"));
        assert!(aggregate.contains("exchange = ''"));
        assert!(!aggregate.contains("exchange = ?"));
    }

    #[test]
    fn test_lookup_placeholders_match_bind_counts() {
        // filter, exchange, symbol, scale for the scoped variant;
        // the aggregate variant binds no exchange.
        assert_eq!(filter_points_query(Some("Binance")).matches(" = ?").count(), 4);
        assert_eq!(filter_points_query(None).matches(" = ?").count(), 3);
    }
}
