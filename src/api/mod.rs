use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

use crate::config::ServerSettings;
use crate::db::Database;

pub mod error;
pub mod handlers;
pub mod response;
pub mod supply;

pub use error::ApiError;
pub use supply::SupplyRequest;

/// Shared handler state. The gateway itself is stateless between
/// requests; this only carries the long-lived store handles.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

pub fn router(db: Database, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/v1/supply", post(handlers::post_supply))
        .route("/v1/supply/:symbol", get(handlers::get_supply))
        .route("/v1/quotation/:symbol", get(handlers::get_quotation))
        .route("/v1/pairs", get(handlers::get_pairs))
        .route("/v1/symbol/:symbol", get(handlers::get_symbol_details))
        .route("/v1/coins", get(handlers::get_coins))
        .route(
            "/v1/chartPoints/:filter/:exchange/:symbol",
            get(handlers::get_chart_points),
        )
        .route(
            "/v1/chartPointsAllExchanges/:filter/:symbol",
            get(handlers::get_chart_points_all_exchanges),
        )
        .route("/v1/symbols", get(handlers::get_all_symbols))
        .route("/v1/token/:token_symbol", get(handlers::get_token_details))
        .route("/v1/tokens", get(handlers::get_all_token_symbols))
        // Deadline on every handler invocation, backend calls included.
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .with_state(AppState {
            db,
        })
}

/// Bind and serve until the shutdown future resolves, then drain
/// in-flight requests.
pub async fn serve(
    settings: &ServerSettings,
    db: Database,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let app = router(db, Duration::from_secs(settings.request_timeout_secs));

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind API listener on {}", addr))?;

    info!("API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("API server failed")?;

    Ok(())
}
