//! Pegasus availability HTTP client.
//!
//! Provides async methods for querying the Pegasus mobile availability
//! API. Handles request shaping, rate limiting, and conversion to
//! domain types.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{FareQuote, Route};
use crate::search::{FareSource, FetchError};

use super::error::PegasusError;
use super::types::{AvailabilityRequest, AvailabilityResponse};

/// Default base URL for the Pegasus mobile gateway.
const DEFAULT_BASE_URL: &str = "https://mw.flypgs.com/pegasus";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 16;

/// Default fare currency.
const DEFAULT_CURRENCY: &str = "TL";

/// Base delay between retry attempts.
const RETRY_BACKOFF_MS: u64 = 250;

/// Configuration for the Pegasus client.
#[derive(Debug, Clone)]
pub struct PegasusConfig {
    /// Base URL for the API (defaults to the production gateway)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Extra attempts after a failed transport call
    pub max_retries: u32,
    /// Currency requested from the API
    pub currency: String,
}

impl PegasusConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
            max_retries: 0,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set how many times a failed transport call is retried.
    pub fn with_max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Set the currency requested from the API.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

impl Default for PegasusConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Pegasus availability API client.
///
/// Provides methods for querying cheapest daily fares on a route.
/// Uses a semaphore to limit concurrent requests and avoid tripping
/// the gateway's rate limiting.
#[derive(Debug, Clone)]
pub struct PegasusClient {
    http: reqwest::Client,
    base_url: String,
    currency: String,
    max_retries: u32,
    semaphore: Arc<Semaphore>,
}

impl PegasusClient {
    /// Create a new Pegasus client with the given configuration.
    pub fn new(config: PegasusConfig) -> Result<Self, PegasusError> {
        let mut headers = HeaderMap::new();

        // The gateway only answers requests that identify as the
        // mobile app.
        headers.insert("Accept-Language", HeaderValue::from_static("en"));
        headers.insert("x-platform", HeaderValue::from_static("android"));
        headers.insert("X-VERSION", HeaderValue::from_static("2.16.0"));
        headers.insert("X-SYSTEM-VERSION", HeaderValue::from_static("5.1"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            currency: config.currency,
            max_retries: config.max_retries,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Get the cheapest fare for a route on a single departure date.
    ///
    /// Returns `Ok(None)` when the API has no flights (or no priced
    /// flights) on that date. Transport failures are retried up to the
    /// configured limit; API rejections and malformed bodies are not.
    pub async fn cheapest_fare(
        &self,
        route: &Route,
        date: NaiveDate,
    ) -> Result<Option<FareQuote>, PegasusError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| PegasusError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let date_str = date.format("%Y-%m-%d").to_string();
        let request = AvailabilityRequest::single_adult(
            route.departure.as_str(),
            route.arrival.as_str(),
            &date_str,
            &self.currency,
        );

        let mut attempt = 0u32;
        loop {
            match self.availability(&request).await {
                Ok(response) => return Ok(self.pick_fare(&response, &date_str)),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    debug!(
                        route = %route,
                        date = %date_str,
                        attempt,
                        error = %e,
                        "Retrying availability request"
                    );
                    tokio::time::sleep(Duration::from_millis(
                        RETRY_BACKOFF_MS * u64::from(attempt),
                    ))
                    .await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Issue one availability request and parse the response.
    async fn availability(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<AvailabilityResponse, PegasusError> {
        let url = format!("{}/availability", self.base_url);

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PegasusError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PegasusError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| PegasusError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// Pull the fare for the requested date out of a response.
    ///
    /// The API answers a single-date query with a spread of nearby
    /// dates, so the matching entry has to be selected here. A date
    /// with no priced flights yields `None`.
    fn pick_fare(&self, response: &AvailabilityResponse, date: &str) -> Option<FareQuote> {
        let route = response.departure_route_list.first()?;
        route
            .daily_flight_list
            .iter()
            .find(|daily| daily.date.as_deref() == Some(date))
            .and_then(|daily| daily.cheapest_fare.as_ref())
            .and_then(|fare| {
                fare.amount.map(|amount| FareQuote {
                    amount,
                    currency: fare
                        .currency
                        .clone()
                        .unwrap_or_else(|| self.currency.clone()),
                })
            })
    }
}

#[async_trait]
impl FareSource for PegasusClient {
    async fn cheapest_fare(
        &self,
        route: &Route,
        date: NaiveDate,
    ) -> Result<Option<FareQuote>, FetchError> {
        PegasusClient::cheapest_fare(self, route, date)
            .await
            .map_err(|e| FetchError::new(route, date, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::{CheapestFare, DailyFlight, RouteAvailability};
    use super::*;
    use crate::domain::AirportCode;

    #[test]
    fn config_builder() {
        let config = PegasusConfig::new()
            .with_base_url("http://localhost:8080")
            .with_max_concurrent(4)
            .with_timeout(60)
            .with_max_retries(2)
            .with_currency("EUR");

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_concurrent, 4);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.currency, "EUR");
    }

    #[test]
    fn config_defaults() {
        let config = PegasusConfig::new();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.currency, "TL");
    }

    #[test]
    fn client_creation() {
        let client = PegasusClient::new(PegasusConfig::new());
        assert!(client.is_ok());
    }

    fn response_with(daily: Vec<DailyFlight>) -> AvailabilityResponse {
        AvailabilityResponse {
            departure_route_list: vec![RouteAvailability {
                daily_flight_list: daily,
            }],
        }
    }

    fn daily(date: &str, amount: Option<f64>) -> DailyFlight {
        DailyFlight {
            date: Some(date.to_string()),
            cheapest_fare: amount.map(|amount| CheapestFare {
                amount: Some(amount),
                currency: Some("TL".to_string()),
            }),
        }
    }

    #[test]
    fn pick_fare_selects_requested_date() {
        let client = PegasusClient::new(PegasusConfig::new()).unwrap();
        let response = response_with(vec![
            daily("2026-09-01", Some(100.0)),
            daily("2026-09-02", Some(200.0)),
            daily("2026-09-03", Some(300.0)),
        ]);

        let fare = client.pick_fare(&response, "2026-09-02").unwrap();
        assert_eq!(fare.amount, 200.0);
        assert_eq!(fare.currency, "TL");
    }

    #[test]
    fn pick_fare_missing_date_is_none() {
        let client = PegasusClient::new(PegasusConfig::new()).unwrap();
        let response = response_with(vec![daily("2026-09-01", Some(100.0))]);

        assert!(client.pick_fare(&response, "2026-09-05").is_none());
    }

    #[test]
    fn pick_fare_unpriced_date_is_none() {
        let client = PegasusClient::new(PegasusConfig::new()).unwrap();
        let response = response_with(vec![daily("2026-09-01", None)]);

        assert!(client.pick_fare(&response, "2026-09-01").is_none());
    }

    #[test]
    fn pick_fare_empty_response_is_none() {
        let client = PegasusClient::new(PegasusConfig::new()).unwrap();
        let response = AvailabilityResponse {
            departure_route_list: vec![],
        };

        assert!(client.pick_fare(&response, "2026-09-01").is_none());
    }

    #[test]
    fn pick_fare_falls_back_to_configured_currency() {
        let client =
            PegasusClient::new(PegasusConfig::new().with_currency("EUR")).unwrap();
        let response = response_with(vec![DailyFlight {
            date: Some("2026-09-01".to_string()),
            cheapest_fare: Some(CheapestFare {
                amount: Some(42.0),
                currency: None,
            }),
        }]);

        let fare = client.pick_fare(&response, "2026-09-01").unwrap();
        assert_eq!(fare.currency, "EUR");
    }

    #[test]
    fn route_display_matches_request_shape() {
        let route = Route::new(
            AirportCode::parse("IST").unwrap(),
            AirportCode::parse("LWO").unwrap(),
        );
        let request = AvailabilityRequest::single_adult(
            route.departure.as_str(),
            route.arrival.as_str(),
            "2026-09-01",
            "TL",
        );

        assert_eq!(request.flight_search_list[0].departure_port, "IST");
        assert_eq!(request.flight_search_list[0].arrival_port, "LWO");
    }
}
