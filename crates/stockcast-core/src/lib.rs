//! # Stockcast Core
//!
//! Series normalization, trend forecasting, and provider contracts for the
//! stockcast service.
//!
//! ## Overview
//!
//! The crate is consumed leaf-first:
//!
//! - **Canonical domain models** for price points, series, and forecasts
//! - **[`normalize`]** shapes raw upstream observations into a [`Series`]
//! - **[`forecast`]** fits a least-squares trend and projects it forward
//! - **[`HistoryProvider`]** is the retrieval contract for upstream data
//! - **[`YahooHistoryAdapter`]** implements it against the Yahoo chart API
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Yahoo chart endpoint) |
//! | [`data_source`] | History provider trait and request/response types |
//! | [`domain`] | Domain models (PricePoint, Series, ForecastPoint) |
//! | [`error`] | Core error types |
//! | [`forecast`](crate::forecast()) | Linear trend fit and extrapolation |
//! | [`http_client`] | HTTP client abstraction |
//! | [`normalize`](crate::normalize()) | Raw-to-canonical series shaping |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockcast_core::{
//!     normalize, forecast, HistoryRequest, HistoryProvider, Lookback, Symbol, TradingDay,
//!     YahooHistoryAdapter, DEFAULT_HORIZON_DAYS,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = YahooHistoryAdapter::default();
//!     let symbol = Symbol::parse("AAPL")?;
//!
//!     let raw = provider
//!         .history(HistoryRequest::new(symbol.clone(), Lookback::OneMonth))
//!         .await?;
//!     let series = normalize(symbol, &raw)?;
//!     let points = forecast(&series, DEFAULT_HORIZON_DAYS, TradingDay::today_utc())?;
//!
//!     println!("first projection: {:?}", points.first());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The pipeline performs no local recovery: a malformed upstream record or
//! an empty fit fails the whole call with a [`PipelineError`], and provider
//! failures surface as structured [`SourceError`]s. No partial series or
//! partial forecast is ever produced.

pub mod adapters;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;

mod forecast;
mod normalize;

// Re-export commonly used types at crate root for convenience

// Adapter implementations
pub use adapters::YahooHistoryAdapter;

// Provider contract
pub use data_source::{
    HistoryProvider, HistoryRequest, RawObservation, SourceError, SourceErrorKind,
};

// Domain models
pub use domain::{ForecastPoint, Lookback, PricePoint, Series, Symbol, TradingDay};

// Error types
pub use error::{PipelineError, ValidationError};

// Pipeline operations
pub use forecast::{forecast, LinearTrend, DEFAULT_HORIZON_DAYS};
pub use normalize::normalize;

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
