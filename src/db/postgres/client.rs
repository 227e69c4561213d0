use std::time::Duration;

use anyhow::Context;
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use log::{info, warn};
use tokio_postgres::NoTls;

use crate::config::PostgresSettings;

const CONNECT_ATTEMPTS: u32 = 3;

/// Secondary-store client (PostgreSQL) with a bounded connection pool.
///
/// Serves security-token reference records. Connections are acquired
/// from the pool per request and released when the guard drops, on
/// every exit path.
#[derive(Clone)]
pub struct PostgresClient {
    pub pool: Pool,
}

impl PostgresClient {
    pub async fn new(settings: PostgresSettings) -> anyhow::Result<Self> {
        info!("Connecting to PostgreSQL");

        let mut pg_config = tokio_postgres::Config::new();
        pg_config
            .host(&settings.host)
            .port(settings.port)
            .user(&settings.user)
            .password(&settings.password)
            .dbname(&settings.database);

        let mgr = Manager::from_config(
            pg_config,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );
        let pool = Pool::builder(mgr)
            .max_size(settings.pool_size)
            .build()
            .context("Failed to create PostgreSQL connection pool")?;

        // Probe the pool with backoff before declaring the client ready
        let mut attempt = 0;
        loop {
            match pool.get().await {
                Ok(_conn) => {
                    info!("Successfully connected to PostgreSQL");
                    break;
                },
                Err(e) => {
                    attempt += 1;
                    if attempt >= CONNECT_ATTEMPTS {
                        return Err(anyhow::anyhow!(
                            "Failed to connect to PostgreSQL after {} attempts: {}",
                            CONNECT_ATTEMPTS,
                            e
                        ));
                    }

                    let backoff = Duration::from_millis(100 * 2_u64.pow(attempt));
                    warn!(
                        "PostgreSQL connection attempt {}/{} failed ({}), retrying in {:?}",
                        attempt, CONNECT_ATTEMPTS, e, backoff
                    );
                    tokio::time::sleep(backoff).await;
                },
            }
        }

        Ok(Self {
            pool,
        })
    }

    /// Health check - verify connection is still alive
    pub async fn health_check(&self) -> anyhow::Result<()> {
        let client = self.pool.get().await?;
        client
            .query_one("SELECT 1", &[])
            .await
            .context("PostgreSQL health check failed")?;
        Ok(())
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        info!("Running PostgreSQL migrations");
        let client = self.pool.get().await?;

        let schema = tokio::fs::read_to_string("schema/postgres.sql")
            .await
            .context("Failed to read schema/postgres.sql")?;

        client
            .batch_execute(&schema)
            .await
            .context("Failed to apply PostgreSQL schema")?;

        info!("PostgreSQL migrations completed successfully");
        Ok(())
    }
}
