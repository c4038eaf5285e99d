//! Behavior-driven tests for history provider behavior
//!
//! These tests verify HOW the system handles upstream scenarios through
//! the provider contract and into the pipeline, using the adapter's
//! deterministic mock mode.

use stockcast_core::{
    adapters::YahooHistoryAdapter,
    data_source::{HistoryProvider, HistoryRequest},
    forecast, normalize, Lookback, Symbol, TradingDay, DEFAULT_HORIZON_DAYS,
};

// =============================================================================
// Provider: Valid Response Handling
// =============================================================================

#[tokio::test]
async fn when_yahoo_returns_a_month_of_closes_system_normalizes_them_all() {
    // Given: A Yahoo adapter in mock mode
    let adapter = YahooHistoryAdapter::default();
    let symbol = Symbol::parse("AAPL").expect("valid");

    // When: The system requests one month of history
    let request = HistoryRequest::new(symbol.clone(), Lookback::OneMonth);
    let raw = adapter.history(request).await.expect("history should load");
    let series = normalize(symbol, &raw).expect("history should normalize");

    // Then: Every trading day survives normalization in order
    assert_eq!(series.len(), raw.len());
    assert!(series.points.iter().all(|p| p.price.is_finite()));
    let days: Vec<_> = series.points.iter().map(|p| p.day).collect();
    let mut sorted = days.clone();
    sorted.sort();
    assert_eq!(days, sorted, "series must stay chronologically ascending");
}

#[tokio::test]
async fn lookback_window_controls_how_much_history_is_requested() {
    // Given: The same adapter queried with two explicit windows
    let adapter = YahooHistoryAdapter::default();
    let symbol = Symbol::parse("MSFT").expect("valid");

    // When: Histories are requested for five days and one year
    let short = adapter
        .history(HistoryRequest::new(symbol.clone(), Lookback::FiveDays))
        .await
        .expect("short history should load");
    let long = adapter
        .history(HistoryRequest::new(symbol, Lookback::OneYear))
        .await
        .expect("long history should load");

    // Then: The window, not a hidden constant, decides the count
    assert!(short.len() < long.len());
    assert_eq!(short.len(), 5);
}

// =============================================================================
// Provider: Full Path to Forecast
// =============================================================================

#[tokio::test]
async fn provider_history_feeds_a_full_ten_point_forecast() {
    // Given: Mock history for an arbitrary symbol
    let adapter = YahooHistoryAdapter::default();
    let symbol = Symbol::parse("NVDA").expect("valid");
    let raw = adapter
        .history(HistoryRequest::new(symbol.clone(), Lookback::OneMonth))
        .await
        .expect("history should load");

    // When: The pipeline runs end to end
    let series = normalize(symbol, &raw).expect("history should normalize");
    let predictions = forecast(&series, DEFAULT_HORIZON_DAYS, TradingDay::today_utc())
        .expect("forecast should succeed");

    // Then: Exactly ten finite projections dated from today forward
    assert_eq!(predictions.len(), DEFAULT_HORIZON_DAYS);
    assert!(predictions.iter().all(|p| p.predicted_price.is_finite()));
    assert_eq!(predictions[0].day, TradingDay::today_utc());
    assert_eq!(
        predictions[9].day,
        TradingDay::today_utc().plus_days(9),
        "horizon must span consecutive calendar days"
    );
}
