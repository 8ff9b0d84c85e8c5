//! Stooq HTTP price source.
//!
//! Downloads daily history from the stooq.com CSV endpoint
//! (`/q/d/l/?s=<symbol>&i=d`, columns Date,Open,High,Low,Close,Volume).

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use tradesim_core::error::DataError;
use tradesim_core::traits::PriceSource;

const DEFAULT_BASE_URL: &str = "https://stooq.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Price source downloading daily closes from Stooq.
pub struct StooqPriceSource {
    client: Client,
    base_url: String,
}

impl StooqPriceSource {
    /// Create a new Stooq price source.
    pub fn new() -> Result<Self, DataError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Parse the daily CSV body into closes, oldest first.
    fn parse_closes(body: &str) -> Result<Vec<f64>, DataError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(body.as_bytes());

        let mut closes = Vec::new();

        for result in reader.records() {
            let record = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            let close = record
                .get(4)
                .ok_or_else(|| DataError::ParseError("missing close column".into()))?;
            closes.push(
                close
                    .parse::<f64>()
                    .map_err(|e| DataError::ParseError(e.to_string()))?,
            );
        }

        Ok(closes)
    }
}

#[async_trait]
impl PriceSource for StooqPriceSource {
    async fn fetch_recent_closes(&self, symbol: &str, count: usize) -> Result<Vec<f64>, DataError> {
        let url = format!("{}/q/d/l/?s={}&i=d", self.base_url, symbol.to_lowercase());
        debug!(%url, "fetching daily closes");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DataError::ConnectionError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        // Stooq answers unknown symbols with a plain "No data" body.
        if body.trim().is_empty() || body.trim().eq_ignore_ascii_case("no data") {
            return Err(DataError::SymbolNotFound(symbol.to_string()));
        }

        let closes = Self::parse_closes(&body)?;
        let start = closes.len().saturating_sub(count);
        Ok(closes[start..].to_vec())
    }

    fn name(&self) -> &str {
        "stooq"
    }
}
