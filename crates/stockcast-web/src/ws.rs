//! WebSocket push transport.
//!
//! On connection the server computes the current series and its 10-point
//! forecast, pushes them as two named events, and then goes quiet; the
//! connection stays open until the client hangs up, but nothing further is
//! streamed.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::Response;
use serde::Serialize;
use stockcast_core::{forecast, ForecastPoint, Series, TradingDay};

use crate::error::ApiError;
use crate::routes::{fetch_series, SymbolQuery};
use crate::state::AppState;

/// Named event frame, mirroring the socket.io messages the original
/// frontend listens for.
#[derive(Debug, Serialize)]
struct PushEvent<T: Serialize> {
    event: &'static str,
    data: T,
}

impl<T: Serialize> PushEvent<T> {
    fn frame(event: &'static str, data: T) -> Message {
        let payload = serde_json::to_string(&Self { event, data })
            .expect("push event payloads must serialize");
        Message::Text(payload)
    }
}

/// `GET /ws?symbol=XXX` — the push transport handshake.
pub async fn connect(
    State(state): State<AppState>,
    Query(query): Query<SymbolQuery>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| handle_connection(state, query.symbol, socket))
}

async fn handle_connection(state: AppState, symbol: Option<String>, mut socket: WebSocket) {
    match snapshot(&state, symbol.as_deref()).await {
        Ok((series, predictions)) => {
            tracing::info!(
                symbol = %series.symbol,
                points = series.len(),
                horizon = predictions.len(),
                "pushing series and forecast to new connection"
            );

            if socket
                .send(PushEvent::frame("stock_update", &series.points))
                .await
                .is_err()
            {
                return;
            }
            if socket
                .send(PushEvent::frame("predictions", &predictions))
                .await
                .is_err()
            {
                return;
            }
        }
        Err(error) => {
            tracing::warn!(%error, "push connection failed");
            let frame = PushEvent::frame("error", serde_json::json!({
                "error": error.to_string(),
            }));
            let _ = socket.send(frame).await;
            return;
        }
    }

    // Initial pair sent; hold the connection until the client leaves.
    while let Some(message) = socket.recv().await {
        if message.is_err() {
            break;
        }
    }
}

async fn snapshot(
    state: &AppState,
    symbol: Option<&str>,
) -> Result<(Series, Vec<ForecastPoint>), ApiError> {
    let series = fetch_series(state, symbol).await?;
    let predictions = forecast(&series, state.horizon_days, TradingDay::today_utc())?;
    Ok((series, predictions))
}
