use thiserror::Error;

/// Validation and contract errors exposed by `stockcast-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid lookback '{value}', expected one of 5d, 1mo, 3mo, 6mo, 1y")]
    InvalidLookback { value: String },

    #[error("calendar day must be formatted YYYY-MM-DD: '{value}'")]
    InvalidDay { value: String },

    #[error("field '{field}' is missing")]
    MissingField { field: &'static str },
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
}

/// Errors raised by the normalize/forecast pipeline.
///
/// Each variant maps to a single failure mode: either an upstream record
/// cannot be shaped into a [`crate::PricePoint`], or the fit itself is
/// undefined for the given input. The pipeline never recovers locally and
/// never emits partial output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("observation at index {index} is malformed: {source}")]
    MalformedObservation {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("cannot fit a trend to an empty series")]
    InsufficientData,

    #[error("forecast horizon must be at least one day")]
    InvalidHorizon,

    #[error("trend projection is not finite at position {position}")]
    NonFiniteProjection { position: usize },
}
