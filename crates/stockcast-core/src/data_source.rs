//! History provider trait and request/response types.
//!
//! This module defines the retrieval contract the delivery layer depends
//! on: given a symbol and an explicit lookback window, a provider returns
//! the raw upstream observations for the pipeline to normalize. Provider
//! failures surface as structured [`SourceError`]s and are never retried
//! here; retry policy, if any, belongs to the caller.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use time::OffsetDateTime;

use crate::{Lookback, Symbol};

/// Provider-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Upstream transport failure, timeout, or non-success status.
    Unavailable,
    /// Upstream explicitly throttled the call.
    RateLimited,
    /// The request itself could not be sent upstream.
    InvalidRequest,
    /// Upstream answered but the payload could not be understood.
    Internal,
}

/// Structured provider error surfaced verbatim to the delivery layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::RateLimited => "source.rate_limited",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// One raw upstream observation, as close to the wire as the provider can
/// keep it. Fields are optional because the upstream chart payload carries
/// nullable arrays; the normalizer decides what to do about gaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawObservation {
    pub ts: Option<OffsetDateTime>,
    pub close: Option<f64>,
}

impl RawObservation {
    pub fn new(ts: OffsetDateTime, close: f64) -> Self {
        Self {
            ts: Some(ts),
            close: Some(close),
        }
    }
}

/// Request payload for the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub symbol: Symbol,
    pub lookback: Lookback,
}

impl HistoryRequest {
    pub fn new(symbol: Symbol, lookback: Lookback) -> Self {
        Self { symbol, lookback }
    }
}

/// Retrieval contract for historical closing prices.
///
/// Implementations fetch one symbol's history for one lookback window and
/// hand back the observations in upstream order. An unknown symbol is
/// whatever the upstream reports for it, typically an empty sequence.
pub trait HistoryProvider: Send + Sync {
    fn history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RawObservation>, SourceError>> + Send + 'a>>;
}
