//! HTTP route handlers.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use stockcast_core::{normalize, HistoryRequest, PricePoint, Series, Symbol};

use crate::error::ApiError;
use crate::state::AppState;

/// Symbol used when a request names none. The core never defends a
/// default; this constant is the single place the fallback lives.
pub const DEFAULT_SYMBOL: &str = "AAPL";

#[derive(Debug, Deserialize)]
pub struct SymbolQuery {
    pub symbol: Option<String>,
}

/// `GET /api/stocks?symbol=XXX` — the request/response transport.
pub async fn stocks(
    State(state): State<AppState>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<Vec<PricePoint>>, ApiError> {
    let series = fetch_series(&state, query.symbol.as_deref()).await?;
    Ok(Json(series.points))
}

/// Shared retrieval + normalization step for both transports.
pub(crate) async fn fetch_series(
    state: &AppState,
    symbol: Option<&str>,
) -> Result<Series, ApiError> {
    let symbol = Symbol::parse(symbol.unwrap_or(DEFAULT_SYMBOL))?;
    let raw = state
        .provider
        .history(HistoryRequest::new(symbol.clone(), state.lookback))
        .await?;
    let series = normalize(symbol, &raw)?;
    tracing::info!(symbol = %series.symbol, points = series.len(), "fetched stock history");
    Ok(series)
}
