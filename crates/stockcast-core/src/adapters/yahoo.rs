use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use time::{Duration, OffsetDateTime};

use crate::data_source::{HistoryProvider, HistoryRequest, RawObservation, SourceError};
use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::{Lookback, Symbol};

/// Yahoo Finance chart adapter supporting both real API calls and mock mode.
///
/// Real mode hits the public v8 chart endpoint for daily closes over the
/// requested lookback window. Mock mode fabricates a deterministic history
/// seeded by the symbol so tests never touch the network.
#[derive(Clone)]
pub struct YahooHistoryAdapter {
    http_client: Arc<dyn HttpClient>,
    use_real_api: bool,
}

impl Default for YahooHistoryAdapter {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            use_real_api: false,
        }
    }
}

impl YahooHistoryAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        let use_real_api = !http_client.is_mock();
        Self {
            http_client,
            use_real_api,
        }
    }

    fn is_real_client(&self) -> bool {
        self.use_real_api
    }
}

impl HistoryProvider for YahooHistoryAdapter {
    fn history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RawObservation>, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_history(&req).await
            } else {
                self.fetch_fake_history(&req).await
            }
        })
    }
}

// Real API implementation
impl YahooHistoryAdapter {
    async fn fetch_real_history(
        &self,
        req: &HistoryRequest,
    ) -> Result<Vec<RawObservation>, SourceError> {
        let endpoint = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{}?range={}&interval=1d",
            urlencoding::encode(req.symbol.as_str()),
            req.lookback.as_str(),
        );

        let request = HttpRequest::get(endpoint)
            .with_header("referer", "https://finance.yahoo.com/")
            .with_timeout_ms(10_000);

        let response = self.http_client.execute(request).await.map_err(|error| {
            SourceError::unavailable(format!("yahoo transport error: {}", error.message()))
        })?;

        // An unrecognized symbol answers 404; upstream's verdict stands,
        // so it surfaces as an empty history rather than an error.
        if response.status == 404 {
            return Ok(Vec::new());
        }
        if response.status == 429 {
            return Err(SourceError::rate_limited("yahoo throttled the chart call"));
        }
        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "yahoo returned status {}",
                response.status
            )));
        }

        parse_chart_body(&response.body)
    }

    async fn fetch_fake_history(
        &self,
        req: &HistoryRequest,
    ) -> Result<Vec<RawObservation>, SourceError> {
        // Exercise the transport so mock clients still observe the call.
        let probe = HttpRequest::get("https://query1.finance.yahoo.com/v8/finance/chart")
            .with_header("referer", "https://finance.yahoo.com/");
        self.http_client.execute(probe).await.map_err(|error| {
            SourceError::unavailable(format!("yahoo transport error: {}", error.message()))
        })?;

        let count = trading_days_in(req.lookback);
        let seed = symbol_seed(&req.symbol);
        let base = 90.0 + (seed % 350) as f64 / 10.0;
        let drift = ((seed % 7) as f64 - 3.0) / 10.0;
        let now = OffsetDateTime::now_utc();

        let observations = (0..count)
            .map(|index| {
                let ts = now - Duration::days((count - index) as i64);
                let wobble = ((seed.wrapping_add(index as u64 * 31)) % 20) as f64 / 10.0 - 1.0;
                RawObservation::new(ts, base + drift * index as f64 + wobble)
            })
            .collect();

        Ok(observations)
    }
}

fn parse_chart_body(body: &str) -> Result<Vec<RawObservation>, SourceError> {
    let chart_response: YahooChartResponse = serde_json::from_str(body)
        .map_err(|error| SourceError::internal(format!("failed to parse yahoo chart: {error}")))?;

    if let Some(error) = &chart_response.chart.error {
        if !error.is_empty() {
            return Err(SourceError::unavailable(format!(
                "yahoo chart API error: {error}"
            )));
        }
    }

    let Some(result) = chart_response.chart.result.first() else {
        return Ok(Vec::new());
    };

    let timestamps = result.timestamp.as_deref().unwrap_or(&[]);
    let closes = result
        .indicators
        .quote
        .first()
        .map(|quote| quote.close.as_slice())
        .unwrap_or(&[]);

    // Keep the raw shape: each slot becomes one observation, nullable
    // fields carried through for the normalizer to judge.
    let observations = timestamps
        .iter()
        .enumerate()
        .map(|(index, &ts_value)| RawObservation {
            ts: OffsetDateTime::from_unix_timestamp(ts_value).ok(),
            close: closes.get(index).copied().flatten(),
        })
        .collect();

    Ok(observations)
}

fn trading_days_in(lookback: Lookback) -> usize {
    match lookback {
        Lookback::FiveDays => 5,
        Lookback::OneMonth => 21,
        Lookback::ThreeMonths => 63,
        Lookback::SixMonths => 126,
        Lookback::OneYear => 252,
    }
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(byte as u64)
    })
}

// Yahoo Finance chart API response structures
#[derive(Debug, Clone, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartData {
    result: Vec<YahooChartResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartIndicators {
    quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartQuote {
    close: Vec<Option<f64>>,
}
