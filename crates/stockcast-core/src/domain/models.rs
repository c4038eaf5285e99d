use serde::{Deserialize, Serialize};

use crate::{Symbol, TradingDay, ValidationError};

/// One normalized historical closing price.
///
/// Serialized field names (`Date`, `price`) match the wire records consumed
/// by the charting frontend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(rename = "Date")]
    pub day: TradingDay,
    pub price: f64,
}

impl PricePoint {
    pub fn new(day: TradingDay, price: f64) -> Result<Self, ValidationError> {
        validate_non_negative("price", price)?;
        Ok(Self { day, price })
    }
}

/// Normalized chronological closing-price history for one symbol.
///
/// Order is inherited from the upstream response (ascending by day); the
/// series may be empty when the upstream does not recognize the symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub symbol: Symbol,
    pub points: Vec<PricePoint>,
}

impl Series {
    pub fn new(symbol: Symbol, points: Vec<PricePoint>) -> Self {
        Self { symbol, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One projected future closing price.
///
/// A falling trend may extrapolate below zero, so only finiteness is
/// enforced here, unlike [`PricePoint`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(rename = "date")]
    pub day: TradingDay,
    pub predicted_price: f64,
}

impl ForecastPoint {
    pub fn new(day: TradingDay, predicted_price: f64) -> Result<Self, ValidationError> {
        if !predicted_price.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: "predicted_price",
            });
        }
        Ok(Self {
            day,
            predicted_price,
        })
    }
}

pub(crate) fn validate_non_negative(
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
