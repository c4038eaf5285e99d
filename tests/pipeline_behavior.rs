//! Behavior-driven tests for the normalize/forecast pipeline
//!
//! These tests verify HOW the system shapes upstream history and projects
//! it forward, focusing on user-visible outcomes across the whole pipeline
//! rather than individual functions.

use stockcast_core::{
    forecast, normalize, ForecastPoint, PipelineError, RawObservation, Symbol, TradingDay,
    ValidationError, DEFAULT_HORIZON_DAYS,
};
use time::macros::datetime;

fn symbol(input: &str) -> Symbol {
    Symbol::parse(input).expect("valid symbol")
}

fn day(input: &str) -> TradingDay {
    TradingDay::parse(input).expect("valid day")
}

// =============================================================================
// Pipeline: End-to-End Scenario
// =============================================================================

#[tokio::test]
async fn when_history_rises_two_per_day_forecast_continues_the_slope() {
    // Given: Three trading days of closes rising by 2.0 per day
    let raw = vec![
        RawObservation::new(datetime!(2024-01-01 14:30:00 UTC), 100.0),
        RawObservation::new(datetime!(2024-01-02 14:30:00 UTC), 102.0),
        RawObservation::new(datetime!(2024-01-03 14:30:00 UTC), 104.0),
    ];

    // When: The pipeline normalizes and forecasts from an injected start day
    let series = normalize(symbol("AAPL"), &raw).expect("history should normalize");
    let start = day("2024-02-01");
    let predictions =
        forecast(&series, DEFAULT_HORIZON_DAYS, start).expect("forecast should succeed");

    // Then: The series is identical in length and exact prices
    assert_eq!(series.len(), 3);
    assert_eq!(series.points[0].price, 100.0);
    assert_eq!(series.points[2].day.format_iso(), "2024-01-03");

    // And: The first projection continues the +2/day slope from position 3,
    // dated at the forecast moment rather than after the last history day
    assert!((predictions[0].predicted_price - 106.0).abs() < 1e-9);
    assert_eq!(predictions[0].day, start);
    assert_ne!(predictions[0].day, day("2024-01-04"));
}

#[tokio::test]
async fn forecast_dates_are_consecutive_calendar_days() {
    // Given: A normalized series of arbitrary closes
    let raw: Vec<RawObservation> = (0..5)
        .map(|i| {
            RawObservation::new(
                datetime!(2024-01-01 14:30:00 UTC) + time::Duration::days(i),
                100.0 + i as f64,
            )
        })
        .collect();
    let series = normalize(symbol("AAPL"), &raw).expect("history should normalize");

    // When: A forecast is produced across a month boundary
    let predictions =
        forecast(&series, DEFAULT_HORIZON_DAYS, day("2024-01-28")).expect("forecast should succeed");

    // Then: Exactly 10 points, each exactly one calendar day after the previous,
    // weekends included
    assert_eq!(predictions.len(), DEFAULT_HORIZON_DAYS);
    for window in predictions.windows(2) {
        assert_eq!(window[0].day.plus_days(1), window[1].day);
    }
    assert_eq!(predictions[4].day.format_iso(), "2024-02-01");
}

// =============================================================================
// Pipeline: Degenerate Inputs
// =============================================================================

#[tokio::test]
async fn when_history_is_empty_forecast_fails_with_insufficient_data() {
    // Given: An upstream that reported no trading days (unknown symbol)
    let series = normalize(symbol("ZZZZZZ"), &[]).expect("empty history should normalize");

    // When: A forecast is attempted
    let result = forecast(&series, DEFAULT_HORIZON_DAYS, day("2024-02-01"));

    // Then: The failure is explicit, not a fabricated fit
    assert!(series.is_empty());
    assert_eq!(
        result.expect_err("empty series should not fit"),
        PipelineError::InsufficientData
    );
}

#[tokio::test]
async fn when_history_has_one_point_forecast_is_constant() {
    // Given: A single observed close
    let raw = vec![RawObservation::new(
        datetime!(2024-01-02 14:30:00 UTC),
        42.5,
    )];
    let series = normalize(symbol("AAPL"), &raw).expect("history should normalize");

    // When: A forecast is produced
    let predictions =
        forecast(&series, DEFAULT_HORIZON_DAYS, day("2024-02-01")).expect("must forecast");

    // Then: Every point equals the single observed price
    assert_eq!(predictions.len(), DEFAULT_HORIZON_DAYS);
    assert!(predictions.iter().all(|p| p.predicted_price == 42.5));
}

// =============================================================================
// Pipeline: Malformed Upstream Records
// =============================================================================

#[tokio::test]
async fn when_any_record_lacks_a_price_normalization_fails_whole() {
    // Given: A history with one close missing in the middle
    let raw = vec![
        RawObservation::new(datetime!(2024-01-01 14:30:00 UTC), 100.0),
        RawObservation {
            ts: Some(datetime!(2024-01-02 14:30:00 UTC)),
            close: None,
        },
        RawObservation::new(datetime!(2024-01-03 14:30:00 UTC), 104.0),
    ];

    // When: Normalization runs
    let result = normalize(symbol("AAPL"), &raw);

    // Then: The whole call fails and no partial series is returned
    let error = result.expect_err("malformed record should fail normalization");
    assert_eq!(
        error,
        PipelineError::MalformedObservation {
            index: 1,
            source: ValidationError::MissingField { field: "close" },
        }
    );
}

// =============================================================================
// Pipeline: Wire Shape
// =============================================================================

#[tokio::test]
async fn pipeline_output_matches_the_frontend_wire_shape() {
    // Given: A normalized one-point series and its forecast
    let raw = vec![RawObservation::new(
        datetime!(2024-01-02 14:30:00 UTC),
        100.0,
    )];
    let series = normalize(symbol("AAPL"), &raw).expect("history should normalize");
    let predictions: Vec<ForecastPoint> =
        forecast(&series, 1, day("2024-02-01")).expect("must forecast");

    // Then: Historical records serialize as {Date, price} and projections
    // as {date, predicted_price}
    assert_eq!(
        serde_json::to_value(&series.points).expect("series must serialize"),
        serde_json::json!([{"Date": "2024-01-02", "price": 100.0}])
    );
    assert_eq!(
        serde_json::to_value(&predictions).expect("forecast must serialize"),
        serde_json::json!([{"date": "2024-02-01", "predicted_price": 100.0}])
    );
}
