//! Series normalization.
//!
//! Converts raw upstream observations into the canonical [`Series`] shape
//! used both for transport and for trend fitting. The transformation is
//! pure and strict: length and order are preserved exactly, and a single
//! malformed record fails the whole call. Dropping a record instead would
//! silently shift every later observation's position and skew the fit.

use crate::error::PipelineError;
use crate::{PricePoint, RawObservation, Series, Symbol, TradingDay, ValidationError};

/// Normalize one symbol's raw history into a [`Series`].
///
/// Each observation's timestamp is reduced to its calendar day and its
/// closing price carried through unchanged. An empty input produces an
/// empty series, not an error.
pub fn normalize(
    symbol: Symbol,
    observations: &[RawObservation],
) -> Result<Series, PipelineError> {
    let mut points = Vec::with_capacity(observations.len());

    for (index, observation) in observations.iter().enumerate() {
        let ts = observation.ts.ok_or(PipelineError::MalformedObservation {
            index,
            source: ValidationError::MissingField { field: "ts" },
        })?;
        let close = observation
            .close
            .ok_or(PipelineError::MalformedObservation {
                index,
                source: ValidationError::MissingField { field: "close" },
            })?;

        let point = PricePoint::new(TradingDay::from_timestamp(ts), close)
            .map_err(|source| PipelineError::MalformedObservation { index, source })?;
        points.push(point);
    }

    Ok(Series::new(symbol, points))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn symbol() -> Symbol {
        Symbol::parse("AAPL").expect("test symbol must parse")
    }

    #[test]
    fn preserves_length_order_and_exact_prices() {
        let raw = vec![
            RawObservation::new(datetime!(2024-01-01 14:30:00 UTC), 100.0),
            RawObservation::new(datetime!(2024-01-02 14:30:00 UTC), 102.25),
            RawObservation::new(datetime!(2024-01-03 14:30:00 UTC), 101.5),
        ];

        let series = normalize(symbol(), &raw).expect("must normalize");
        assert_eq!(series.len(), 3);
        assert_eq!(series.points[0].day.format_iso(), "2024-01-01");
        assert_eq!(series.points[0].price, 100.0);
        assert_eq!(series.points[1].price, 102.25);
        assert_eq!(series.points[2].price, 101.5);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let series = normalize(symbol(), &[]).expect("must normalize");
        assert!(series.is_empty());
    }

    #[test]
    fn missing_price_fails_the_whole_call() {
        let raw = vec![
            RawObservation::new(datetime!(2024-01-01 14:30:00 UTC), 100.0),
            RawObservation {
                ts: Some(datetime!(2024-01-02 14:30:00 UTC)),
                close: None,
            },
            RawObservation::new(datetime!(2024-01-03 14:30:00 UTC), 104.0),
        ];

        let err = normalize(symbol(), &raw).expect_err("must fail");
        assert_eq!(
            err,
            PipelineError::MalformedObservation {
                index: 1,
                source: ValidationError::MissingField { field: "close" },
            }
        );
    }

    #[test]
    fn missing_timestamp_fails_the_whole_call() {
        let raw = vec![RawObservation {
            ts: None,
            close: Some(100.0),
        }];

        let err = normalize(symbol(), &raw).expect_err("must fail");
        assert!(matches!(
            err,
            PipelineError::MalformedObservation {
                index: 0,
                source: ValidationError::MissingField { field: "ts" },
            }
        ));
    }

    #[test]
    fn non_finite_price_is_malformed() {
        let raw = vec![RawObservation::new(
            datetime!(2024-01-01 14:30:00 UTC),
            f64::NAN,
        )];

        let err = normalize(symbol(), &raw).expect_err("must fail");
        assert!(matches!(
            err,
            PipelineError::MalformedObservation {
                index: 0,
                source: ValidationError::NonFiniteValue { field: "price" },
            }
        ));
    }
}
