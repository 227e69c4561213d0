use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::Json;
use log::{error, info};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::api::error::ApiError;
use crate::api::response::{Coins, FilterPoints, Pairs, Symbols, TokenQueryResult};
use crate::api::supply::SupplyRequest;
use crate::api::AppState;
use crate::db::models::{
    Quotation, Scale, SecurityTokenDetails, SecurityTokenSymbol, Supply, SymbolDetails,
};
use crate::db::StoreError;

/// GET /health
///
/// Probes both stores so load balancers stop routing to an instance
/// whose backends are gone.
pub async fn health(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    state
        .db
        .clickhouse
        .health_check()
        .await
        .map_err(|err| ApiError::from(StoreError::Backend(err)))?;
    state
        .db
        .postgres
        .health_check()
        .await
        .map_err(|err| ApiError::from(StoreError::Backend(err)))?;

    Ok("ok")
}

/// Optional `?scale=` query parameter shared by the chart endpoints.
#[derive(Debug, Deserialize)]
pub struct ScaleQuery {
    #[serde(default)]
    pub scale: String,
}

// ==================== SUPPLY ====================

/// POST /v1/supply
///
/// The body is decoded by hand so an unreadable payload surfaces as a
/// validation failure in the gateway's own envelope.
pub async fn post_supply(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Supply>, ApiError> {
    let request: SupplyRequest = serde_json::from_slice(&body)
        .map_err(|err| ApiError::Validation(format!("unreadable supply submission: {}", err)))?;

    let supply = match request.clone().into_supply(OffsetDateTime::now_utc()) {
        Ok(supply) => supply,
        Err(err) => {
            error!("rejected supply submission: {:?}", request);
            return Err(err);
        },
    };

    info!("received supply: {:?}", supply);
    state.db.clickhouse.set_supply(&supply).await?;

    Ok(Json(supply))
}

/// GET /v1/supply/:symbol
pub async fn get_supply(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Supply>, ApiError> {
    let supply = state.db.clickhouse.get_supply(&symbol).await?;

    Ok(Json(supply))
}

// ==================== QUOTATIONS / SYMBOLS ====================

/// GET /v1/quotation/:symbol
pub async fn get_quotation(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Quotation>, ApiError> {
    let quotation = state.db.clickhouse.get_quotation(&symbol).await?;

    Ok(Json(quotation))
}

/// GET /v1/symbol/:symbol
pub async fn get_symbol_details(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<SymbolDetails>, ApiError> {
    let details = state.db.clickhouse.get_symbol_details(&symbol).await?;

    Ok(Json(details))
}

/// GET /v1/symbols
///
/// Unlike the other list endpoints, an empty symbol list is an anomaly:
/// the platform always quotes something, so zero entries means the
/// primary store is in a bad state.
pub async fn get_all_symbols(State(state): State<AppState>) -> Result<Json<Symbols>, ApiError> {
    let symbols = state.db.clickhouse.get_all_symbols().await?;

    if symbols.is_empty() {
        return Err(ApiError::Internal("cant find symbols".to_string()));
    }

    Ok(Json(Symbols {
        symbols,
    }))
}

// ==================== PAIRS / COINS ====================

/// GET /v1/pairs
pub async fn get_pairs(State(state): State<AppState>) -> Result<Json<Pairs>, ApiError> {
    let pairs = state.db.clickhouse.get_pairs().await?;

    Ok(Json(Pairs {
        pairs,
    }))
}

/// GET /v1/coins
pub async fn get_coins(State(state): State<AppState>) -> Result<Json<Coins>, ApiError> {
    let coins = state.db.clickhouse.get_coins().await?;

    Ok(Json(Coins {
        coins,
    }))
}

// ==================== CHART POINTS ====================

/// GET /v1/chartPoints/:filter/:exchange/:symbol?scale=
pub async fn get_chart_points(
    State(state): State<AppState>,
    Path((filter, exchange, symbol)): Path<(String, String, String)>,
    Query(query): Query<ScaleQuery>,
) -> Result<Json<FilterPoints>, ApiError> {
    let scale = Scale::resolve(&query.scale)?;
    let points = state
        .db
        .clickhouse
        .get_filter_points(&filter, Some(&exchange), &symbol, scale)
        .await?;

    Ok(Json(FilterPoints {
        filter,
        exchange: Some(exchange),
        symbol,
        scale,
        points,
    }))
}

/// GET /v1/chartPointsAllExchanges/:filter/:symbol?scale=
///
/// The exchange dimension is forced absent: this reads the
/// cross-exchange aggregate series, a different query than any
/// single-exchange lookup.
pub async fn get_chart_points_all_exchanges(
    State(state): State<AppState>,
    Path((filter, symbol)): Path<(String, String)>,
    Query(query): Query<ScaleQuery>,
) -> Result<Json<FilterPoints>, ApiError> {
    let scale = Scale::resolve(&query.scale)?;
    let points = state
        .db
        .clickhouse
        .get_filter_points(&filter, None, &symbol, scale)
        .await?;

    Ok(Json(FilterPoints {
        filter,
        exchange: None,
        symbol,
        scale,
        points,
    }))
}

// ==================== SECURITY TOKENS ====================

/// GET /v1/token/:token_symbol
///
/// An unlisted token is a 200 with a null result and count 0; only a
/// backend failure is an error.
pub async fn get_token_details(
    State(state): State<AppState>,
    Path(token_symbol): Path<String>,
) -> Result<Json<TokenQueryResult<Option<SecurityTokenDetails>>>, ApiError> {
    let details = state.db.postgres.get_token_details(&token_symbol).await?;
    let count = usize::from(details.is_some());

    Ok(Json(TokenQueryResult {
        result: details,
        count,
    }))
}

/// GET /v1/tokens
pub async fn get_all_token_symbols(
    State(state): State<AppState>,
) -> Result<Json<TokenQueryResult<Vec<SecurityTokenSymbol>>>, ApiError> {
    let tokens = state.db.postgres.get_all_token_symbols().await?;
    let count = tokens.len();

    Ok(Json(TokenQueryResult {
        result: tokens,
        count,
    }))
}
