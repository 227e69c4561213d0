use std::time::Duration;

use anyhow::Context;
use clickhouse::Client;
use log::{info, warn};

use crate::config::ClickHouseSettings;

const CONNECT_ATTEMPTS: u32 = 3;

/// Primary-store client (ClickHouse).
///
/// A single long-lived handle shared by every in-flight request; the
/// underlying client is cheap to clone and safe for concurrent use.
#[derive(Clone)]
pub struct ClickhouseClient {
    pub client: Client,
}

impl ClickhouseClient {
    pub async fn new(settings: ClickHouseSettings) -> anyhow::Result<Self> {
        info!("Connecting to ClickHouse");

        let client = Client::default()
            .with_url(settings.url.clone())
            .with_user(settings.user.clone())
            .with_password(settings.password.clone())
            .with_database(settings.database.clone());

        // Probe the connection with backoff before declaring the client ready
        let mut attempt = 0;
        loop {
            match client.query("SELECT 1").fetch_one::<u8>().await {
                Ok(_) => {
                    info!("Successfully connected to ClickHouse");
                    break;
                },
                Err(e) => {
                    attempt += 1;
                    if attempt >= CONNECT_ATTEMPTS {
                        return Err(anyhow::anyhow!(
                            "Failed to connect to ClickHouse after {} attempts: {}",
                            CONNECT_ATTEMPTS,
                            e
                        ));
                    }

                    let backoff = Duration::from_millis(100 * 2_u64.pow(attempt));
                    warn!(
                        "ClickHouse connection attempt {}/{} failed ({}), retrying in {:?}",
                        attempt, CONNECT_ATTEMPTS, e, backoff
                    );
                    tokio::time::sleep(backoff).await;
                },
            }
        }

        Ok(Self {
            client,
        })
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        info!("Running ClickHouse migrations");
        let schema = tokio::fs::read_to_string("schema/clickhouse.sql")
            .await
            .context("Failed to read schema/clickhouse.sql")?;

        for statement in schema.split(';') {
            let stmt = statement.trim();
            if stmt.is_empty() {
                continue;
            }
            self.client
                .query(stmt)
                .execute()
                .await
                .with_context(|| format!("Failed to execute migration statement: {}", stmt))?;
        }

        info!("ClickHouse migrations completed successfully");
        Ok(())
    }

    /// Health check - verify connection is still alive
    pub async fn health_check(&self) -> anyhow::Result<()> {
        self.client
            .query("SELECT 1")
            .fetch_one::<u8>()
            .await
            .context("ClickHouse health check failed")?;
        Ok(())
    }
}
