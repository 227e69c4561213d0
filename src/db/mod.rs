use std::sync::Arc;

use crate::config::Settings;

pub mod clickhouse;
pub mod error;
pub mod models;
pub mod postgres;

pub use clickhouse::ClickhouseClient;
pub use error::StoreError;
pub use postgres::PostgresClient;

/// Combined database client managing ClickHouse and PostgreSQL connections.
///
/// ClickHouse is the primary store for market data (quotations, supplies,
/// pairs, coins, symbol details, chart points). PostgreSQL is the secondary
/// store for security-token reference records.
#[derive(Clone)]
pub struct Database {
    pub clickhouse: Arc<ClickhouseClient>,
    pub postgres: Arc<PostgresClient>,
}

impl Database {
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        let clickhouse = ClickhouseClient::new(settings.clickhouse.clone()).await?;
        let postgres = PostgresClient::new(settings.postgres.clone()).await?;

        // Run migrations
        clickhouse.migrate().await?;
        postgres.migrate().await?;

        Ok(Self {
            clickhouse: Arc::new(clickhouse),
            postgres: Arc::new(postgres),
        })
    }
}
