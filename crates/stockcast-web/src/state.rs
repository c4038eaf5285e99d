use std::sync::Arc;

use stockcast_core::{HistoryProvider, Lookback};

/// Application context constructed once at process start and passed to
/// every handler; the core pipeline takes no dependency on it.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn HistoryProvider>,
    pub lookback: Lookback,
    pub horizon_days: usize,
}

impl AppState {
    pub fn new(provider: Arc<dyn HistoryProvider>, lookback: Lookback, horizon_days: usize) -> Self {
        Self {
            provider,
            lookback,
            horizon_days,
        }
    }
}
