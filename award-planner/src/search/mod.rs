//! External offer search.
//!
//! This module is the boundary to the flight/hotel search collaborator.
//! The pricing core places no constraint on where offers come from
//! beyond a points-or-cash price and a program identifier; everything
//! here exists to produce validated [`crate::domain::FlightOffer`] and
//! [`crate::domain::HotelOffer`] values from either the live Amadeus
//! API or the built-in mock.

mod client;
mod error;
mod mock;
mod types;

pub use client::{AmadeusClient, AmadeusConfig};
pub use error::SearchError;
pub use mock::MockOfferSource;

use chrono::{Days, NaiveDate};

use crate::domain::{FlightOffer, HotelOffer};

/// A round-trip flight search request. Doubles as a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlightSearch {
    /// IATA origin airport code
    pub origin: String,
    /// IATA destination airport code
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub travelers: u32,
}

/// A hotel search request. Doubles as a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HotelSearch {
    /// IATA city code
    pub city_code: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub travelers: u32,
}

/// The offer source behind the planner: the live Amadeus client or the
/// deterministic mock.
pub enum OfferSource {
    Live(AmadeusClient),
    Mock(MockOfferSource),
}

impl OfferSource {
    /// True when backed by the mock.
    pub fn is_mock(&self) -> bool {
        matches!(self, OfferSource::Mock(_))
    }

    /// Search round-trip flight offers.
    pub async fn search_flights(
        &self,
        search: &FlightSearch,
    ) -> Result<Vec<FlightOffer>, SearchError> {
        match self {
            OfferSource::Live(client) => client.search_flights(search).await,
            OfferSource::Mock(mock) => mock.search_flights(search),
        }
    }

    /// Search hotel offers.
    pub async fn search_hotels(
        &self,
        search: &HotelSearch,
    ) -> Result<Vec<HotelOffer>, SearchError> {
        match self {
            OfferSource::Live(client) => client.search_hotels(search).await,
            OfferSource::Mock(mock) => mock.search_hotels(search),
        }
    }

    /// Search flights across a flexible date window: the requested dates
    /// plus up to `flex_days` either side, queried concurrently.
    ///
    /// Per-date failures are logged and dropped; the overall search only
    /// fails if every date fails.
    pub async fn search_flights_flexible(
        &self,
        search: &FlightSearch,
        flex_days: u8,
    ) -> Result<Vec<FlightOffer>, SearchError> {
        let mut searches = vec![search.clone()];
        for offset in 1..=flex_days as u64 {
            let earlier = search
                .departure_date
                .checked_sub_days(Days::new(offset))
                .zip(search.return_date.checked_sub_days(Days::new(offset)));
            let later = search
                .departure_date
                .checked_add_days(Days::new(offset))
                .zip(search.return_date.checked_add_days(Days::new(offset)));
            for (departure_date, return_date) in earlier.into_iter().chain(later) {
                searches.push(FlightSearch {
                    departure_date,
                    return_date,
                    ..search.clone()
                });
            }
        }

        let results =
            futures::future::join_all(searches.iter().map(|s| self.search_flights(s))).await;

        let mut offers = Vec::new();
        let mut last_err = None;
        for (search, result) in searches.iter().zip(results) {
            match result {
                Ok(mut found) => offers.append(&mut found),
                Err(err) => {
                    tracing::warn!(date = %search.departure_date, %err, "flexible-date search failed");
                    last_err = Some(err);
                }
            }
        }
        match (offers.is_empty(), last_err) {
            (true, Some(err)) => Err(err),
            _ => Ok(offers),
        }
    }
}
