//! # stockcast-web
//!
//! Delivery layer for the stockcast service: a request/response endpoint
//! for recent price history and a WebSocket push endpoint that hands a new
//! connection the same history plus a 10-day trend forecast.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use stockcast_core::{ReqwestHttpClient, YahooHistoryAdapter, DEFAULT_HORIZON_DAYS};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod routes;
mod state;
mod ws;

use config::ServerConfig;
use state::AppState;

fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/stocks", get(routes::stocks))
        .route("/ws", get(ws::connect))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockcast_web=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let http_client = Arc::new(ReqwestHttpClient::new());
    let provider = Arc::new(YahooHistoryAdapter::with_http_client(http_client));
    let state = AppState::new(provider, config.lookback, DEFAULT_HORIZON_DAYS);

    // Cross-origin access is permitted from a single fixed origin.
    let allowed_origin: HeaderValue = config.allowed_origin.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let router = app(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    tracing::info!(
        addr = %config.addr,
        lookback = %config.lookback,
        origin = %config.allowed_origin,
        "stockcast-web v{} listening",
        env!("CARGO_PKG_VERSION")
    );

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
