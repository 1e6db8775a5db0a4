//! Mock offer source for development and tests without API access.
//!
//! Serves a deterministic spread of award options: three airline
//! programs with different issuers behind them (including the Bilt-only
//! American Airlines route) and three hotel programs at different value
//! tiers. Dates and airports from the request are spliced into the
//! static quotes.

use crate::domain::{
    FlightOffer, FlightSegment, HotelOffer, PointsPrice, Program, UsdCents,
};

use super::error::SearchError;
use super::{FlightSearch, HotelSearch};

/// Mock offer source backed by built-in quotes.
#[derive(Debug, Clone, Default)]
pub struct MockOfferSource;

impl MockOfferSource {
    pub fn new() -> Self {
        Self
    }

    /// Three award flight quotes across distinct programs.
    pub fn search_flights(&self, search: &FlightSearch) -> Result<Vec<FlightOffer>, SearchError> {
        let quotes: [(Program, &str, u64, u64); 3] = [
            (Program::UnitedMileageplus, "UA", 30_000, 40_500),
            (Program::AmericanAirlinesAadvantage, "AA", 25_000, 41_300),
            (Program::AirFranceFlyingBlue, "AF", 27_500, 39_000),
        ];

        let mut offers = Vec::with_capacity(quotes.len());
        for (program, carrier, miles, value_cents) in quotes {
            let outbound = vec![FlightSegment {
                origin: search.origin.clone(),
                destination: search.destination.clone(),
                departure: format!("{}T08:00:00", search.departure_date),
                arrival: format!("{}T14:00:00", search.departure_date),
                airline: carrier.to_string(),
                flight_number: format!("{carrier}101"),
            }];
            let inbound = vec![FlightSegment {
                origin: search.destination.clone(),
                destination: search.origin.clone(),
                departure: format!("{}T15:00:00", search.return_date),
                arrival: format!("{}T21:00:00", search.return_date),
                airline: carrier.to_string(),
                flight_number: format!("{carrier}102"),
            }];

            let offer = FlightOffer::new(
                program,
                miles * search.travelers as u64,
                UsdCents::new(1120),
                outbound,
                inbound,
            )
            .map_err(|e| SearchError::ApiError {
                status: 0,
                message: format!("mock flight quote invalid: {e}"),
            })?
            .with_id(format!("mock-{carrier}-{}", search.departure_date))
            .with_cash_value(UsdCents::new(value_cents * search.travelers as u64));
            offers.push(offer);
        }
        Ok(offers)
    }

    /// Three hotel quotes across value tiers, each bookable on points or
    /// in cash.
    pub fn search_hotels(&self, search: &HotelSearch) -> Result<Vec<HotelOffer>, SearchError> {
        let quotes: [(&str, &str, f32, Program, u64, u64); 3] = [
            ("Grand Hyatt", "Hyatt", 4.5, Program::WorldOfHyatt, 20_000, 450),
            (
                "Hilton Garden Inn",
                "Hilton",
                3.5,
                Program::HiltonHonors,
                40_000,
                220,
            ),
            (
                "Marriott Waikiki",
                "Marriott",
                4.0,
                Program::MarriottBonvoy,
                35_000,
                400,
            ),
        ];

        let mut offers = Vec::with_capacity(quotes.len());
        for (name, chain, stars, program, points, cash_dollars) in quotes {
            let points_price =
                PointsPrice::new(program, points).map_err(|e| SearchError::ApiError {
                    status: 0,
                    message: format!("mock hotel quote invalid: {e}"),
                })?;
            let offer = HotelOffer::new(
                name,
                search.check_in,
                search.check_out,
                Some(points_price),
                Some(UsdCents::from_dollars(cash_dollars)),
            )
            .map_err(|e| SearchError::ApiError {
                status: 0,
                message: format!("mock hotel quote invalid: {e}"),
            })?
            .with_id(format!("mock-{}", name.to_lowercase().replace(' ', "-")))
            .with_chain(chain)
            .with_star_rating(stars);
            offers.push(offer);
        }
        Ok(offers)
    }
}
