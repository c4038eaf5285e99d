//! # Domain Models
//!
//! Canonical domain types for stockcast price history and forecasts.
//!
//! All models are validated at construction time and carry full serde
//! support; the serialized field names are the exact wire shapes consumed
//! by the charting frontend.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PricePoint`] | One normalized historical close (`{Date, price}`) |
//! | [`Series`] | Chronological close history for one symbol |
//! | [`ForecastPoint`] | One projected close (`{date, predicted_price}`) |
//! | [`Symbol`] | Shape-validated ticker symbol |
//! | [`TradingDay`] | ISO calendar day (`YYYY-MM-DD`) |
//! | [`Lookback`] | Upstream history window (5d, 1mo, 3mo, 6mo, 1y) |

mod day;
mod lookback;
mod models;
mod symbol;

pub use day::TradingDay;
pub use lookback::Lookback;
pub use models::{ForecastPoint, PricePoint, Series};
pub use symbol::Symbol;
