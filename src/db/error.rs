use thiserror::Error;

/// Outcome classification for store operations.
///
/// Entity absence is a tagged variant rather than a sentinel error value,
/// so callers distinguish "key not present" from "backend down" by matching
/// the enum, never by comparing error identities or message content.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The lookup was well-formed but the entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// The backend failed or was unreachable.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl From<clickhouse::error::Error> for StoreError {
    fn from(err: clickhouse::error::Error) -> Self {
        StoreError::Backend(err.into())
    }
}

impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        StoreError::Backend(err.into())
    }
}

impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        StoreError::Backend(err.into())
    }
}
