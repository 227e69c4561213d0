pub mod config;

pub use config::{ClickHouseSettings, PostgresSettings, ServerSettings, Settings};
