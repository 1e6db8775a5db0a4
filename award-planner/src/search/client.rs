//! Amadeus self-service API client.
//!
//! Handles OAuth2 client-credentials authentication with token expiry
//! caching, flight-offer and hotel-offer search, and conversion to
//! validated domain offers. Offers that fail validation are skipped
//! with a warning rather than poisoning the whole result set.

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::domain::{FlightOffer, HotelOffer};

use super::error::SearchError;
use super::types::{
    FlightOffersResponse, HotelListResponse, HotelOffersResponse, TokenResponse,
    convert_flight_offer, convert_hotel_offer,
};
use super::{FlightSearch, HotelSearch};

/// Default base URL: the Amadeus test environment.
const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";

/// Renew tokens this long before their stated expiry.
const TOKEN_SLACK: Duration = Duration::from_secs(60);

/// Maximum hotel property IDs to include in one offers request.
const MAX_HOTEL_IDS: usize = 20;

/// Configuration for the Amadeus client.
#[derive(Debug, Clone)]
pub struct AmadeusConfig {
    /// OAuth2 client ID
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
    /// Base URL for the API (defaults to the test environment)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum offers to return per search
    pub max_results: usize,
}

impl AmadeusConfig {
    /// Create a new config with the given credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_results: 5,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the per-search result cap.
    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = n;
        self
    }
}

#[derive(Debug, Default)]
struct TokenCache {
    access_token: String,
    expires_at: Option<Instant>,
}

/// Amadeus API client.
#[derive(Debug)]
pub struct AmadeusClient {
    http: reqwest::Client,
    config: AmadeusConfig,
    token: Mutex<TokenCache>,
}

impl AmadeusClient {
    /// Create a new client with the given configuration.
    pub fn new(config: AmadeusConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            config,
            token: Mutex::new(TokenCache::default()),
        })
    }

    /// Get a valid bearer token, reusing the cached one when fresh.
    async fn ensure_token(&self) -> Result<String, SearchError> {
        let mut cache = self.token.lock().await;
        if let Some(expires_at) = cache.expires_at {
            if Instant::now() + TOKEN_SLACK < expires_at {
                return Ok(cache.access_token.clone());
            }
        }

        let url = format!("{}/v1/security/oauth2/token", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(SearchError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        tracing::debug!(expires_in = token.expires_in, "refreshed Amadeus token");
        cache.access_token = token.access_token.clone();
        cache.expires_at = Some(Instant::now() + Duration::from_secs(token.expires_in));
        Ok(token.access_token)
    }

    /// GET a JSON endpoint with bearer auth and uniform status handling.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, SearchError> {
        let token = self.ensure_token().await?;
        let url = format!("{}{}", self.config.base_url, path);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(SearchError::Unauthorized);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SearchError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SearchError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// Search round-trip flight offers.
    pub async fn search_flights(
        &self,
        search: &FlightSearch,
    ) -> Result<Vec<FlightOffer>, SearchError> {
        let response: FlightOffersResponse = self
            .get_json(
                "/v2/shopping/flight-offers",
                &[
                    ("originLocationCode", search.origin.clone()),
                    ("destinationLocationCode", search.destination.clone()),
                    ("departureDate", search.departure_date.to_string()),
                    ("returnDate", search.return_date.to_string()),
                    ("adults", search.travelers.to_string()),
                    ("currencyCode", "USD".to_string()),
                    ("max", self.config.max_results.to_string()),
                    ("nonStop", "false".to_string()),
                ],
            )
            .await?;

        let mut offers = Vec::with_capacity(response.data.len());
        for wire in &response.data {
            match convert_flight_offer(wire) {
                Ok(offer) => offers.push(offer),
                Err(err) => {
                    tracing::warn!(offer_id = %wire.id, %err, "skipping malformed flight offer");
                }
            }
        }
        tracing::info!(
            origin = %search.origin,
            destination = %search.destination,
            count = offers.len(),
            "flight search complete"
        );
        Ok(offers)
    }

    /// Search hotel offers: property IDs by city, then best rates for
    /// those properties.
    pub async fn search_hotels(
        &self,
        search: &HotelSearch,
    ) -> Result<Vec<HotelOffer>, SearchError> {
        let list: HotelListResponse = self
            .get_json(
                "/v1/reference-data/locations/hotels/by-city",
                &[
                    ("cityCode", search.city_code.clone()),
                    ("radius", "20".to_string()),
                    ("radiusUnit", "KM".to_string()),
                ],
            )
            .await?;

        let hotel_ids: Vec<&str> = list
            .data
            .iter()
            .take(MAX_HOTEL_IDS)
            .map(|h| h.hotel_id.as_str())
            .collect();
        if hotel_ids.is_empty() {
            return Ok(Vec::new());
        }

        let response: HotelOffersResponse = self
            .get_json(
                "/v3/shopping/hotel-offers",
                &[
                    ("hotelIds", hotel_ids.join(",")),
                    ("checkInDate", search.check_in.to_string()),
                    ("checkOutDate", search.check_out.to_string()),
                    ("adults", search.travelers.to_string()),
                    ("currency", "USD".to_string()),
                    ("bestRateOnly", "true".to_string()),
                ],
            )
            .await?;

        let mut offers = Vec::new();
        for wire in response.data.iter().take(self.config.max_results) {
            match convert_hotel_offer(wire) {
                Ok(offer) => offers.push(offer),
                Err(err) => {
                    tracing::warn!(hotel_id = %wire.hotel.hotel_id, %err, "skipping malformed hotel offer");
                }
            }
        }
        tracing::info!(
            city = %search.city_code,
            count = offers.len(),
            "hotel search complete"
        );
        Ok(offers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = AmadeusConfig::new("id", "secret")
            .with_base_url("http://localhost:8080")
            .with_timeout(60)
            .with_max_results(8);

        assert_eq!(config.client_id, "id");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_results, 8);
    }

    #[test]
    fn config_defaults() {
        let config = AmadeusConfig::new("id", "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_results, 5);
    }

    #[test]
    fn client_creation() {
        let client = AmadeusClient::new(AmadeusConfig::new("id", "secret"));
        assert!(client.is_ok());
    }

    // Integration tests would require real credentials and live HTTP;
    // the conversion layer is covered in types.rs and the mock source
    // stands in everywhere else.
}
