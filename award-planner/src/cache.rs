//! Caching layer for offer searches.
//!
//! Offers are snapshots with no availability guarantee, so a short TTL
//! keeps repeat searches (fine-tuning loops hit the same route and city
//! over and over) from burning API quota while staying acceptably
//! fresh.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{FlightOffer, HotelOffer};
use crate::search::{FlightSearch, HotelSearch, OfferSource, SearchError};

/// Configuration for the offer cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached searches per kind.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 500,
        }
    }
}

/// Offer source with search-level caching.
///
/// Wraps an [`OfferSource`] and caches whole result sets keyed by the
/// search request. Only successful searches are cached; errors always
/// retry upstream.
pub struct CachedOfferSource {
    source: OfferSource,
    flights: MokaCache<FlightSearch, Arc<Vec<FlightOffer>>>,
    hotels: MokaCache<HotelSearch, Arc<Vec<HotelOffer>>>,
}

impl CachedOfferSource {
    /// Create a new cached source.
    pub fn new(source: OfferSource, config: &CacheConfig) -> Self {
        let flights = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();
        let hotels = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();
        Self {
            source,
            flights,
            hotels,
        }
    }

    /// True when the underlying source is the mock.
    pub fn is_mock(&self) -> bool {
        self.source.is_mock()
    }

    /// Search flights, serving from cache when the same request was made
    /// within the TTL.
    pub async fn search_flights(
        &self,
        search: &FlightSearch,
    ) -> Result<Arc<Vec<FlightOffer>>, SearchError> {
        if let Some(cached) = self.flights.get(search).await {
            tracing::debug!(origin = %search.origin, destination = %search.destination, "flight cache hit");
            return Ok(cached);
        }
        let offers = Arc::new(self.source.search_flights(search).await?);
        self.flights.insert(search.clone(), offers.clone()).await;
        Ok(offers)
    }

    /// Search hotels, serving from cache when possible.
    pub async fn search_hotels(
        &self,
        search: &HotelSearch,
    ) -> Result<Arc<Vec<HotelOffer>>, SearchError> {
        if let Some(cached) = self.hotels.get(search).await {
            tracing::debug!(city = %search.city_code, "hotel cache hit");
            return Ok(cached);
        }
        let offers = Arc::new(self.source.search_hotels(search).await?);
        self.hotels.insert(search.clone(), offers.clone()).await;
        Ok(offers)
    }

    /// Flexible-date flight search. Uncached: the fan-out already reuses
    /// the per-date cache path upstream of ranking, and the combined
    /// result set is rarely requested twice.
    pub async fn search_flights_flexible(
        &self,
        search: &FlightSearch,
        flex_days: u8,
    ) -> Result<Vec<FlightOffer>, SearchError> {
        self.source.search_flights_flexible(search, flex_days).await
    }

    /// Drop all cached searches.
    pub fn invalidate_all(&self) {
        self.flights.invalidate_all();
        self.hotels.invalidate_all();
    }
}
