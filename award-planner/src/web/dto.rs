//! Data transfer objects for web requests and responses.
//!
//! Offers and plans already carry validating serde implementations, so
//! they cross the wire as themselves; the types here are the request
//! envelopes and the response wrappers around them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{FlightOffer, HotelOffer, Issuer, TransferRatio, TripPlan};
use crate::ledger::PointsBalance;

/// Request to search round-trip flights.
#[derive(Debug, Deserialize)]
pub struct FlightSearchRequest {
    /// IATA origin airport code, e.g. "JFK"
    pub origin: String,

    /// IATA destination airport code, e.g. "HNL"
    pub destination: String,

    /// ISO date YYYY-MM-DD
    pub departure_date: NaiveDate,

    /// ISO date YYYY-MM-DD
    pub return_date: NaiveDate,

    /// Number of travelers (defaults to 1)
    pub travelers: Option<u32>,

    /// Search ± this many days around the dates (defaults to 0)
    pub flex_days: Option<u8>,
}

/// Response for flight search.
#[derive(Debug, Serialize)]
pub struct FlightSearchResponse {
    pub offers: Vec<FlightOffer>,
}

/// Request to search hotels.
#[derive(Debug, Deserialize)]
pub struct HotelSearchRequest {
    /// IATA city code, e.g. "HNL"
    pub city_code: String,

    /// ISO date YYYY-MM-DD
    pub check_in: NaiveDate,

    /// ISO date YYYY-MM-DD
    pub check_out: NaiveDate,

    /// Number of travelers (defaults to 1)
    pub travelers: Option<u32>,
}

/// Response for hotel search.
#[derive(Debug, Serialize)]
pub struct HotelSearchResponse {
    pub offers: Vec<HotelOffer>,
}

/// Request for transfer options into a program.
#[derive(Debug, Deserialize)]
pub struct TransferOptionsRequest {
    /// Program name, e.g. "united_mileageplus"
    pub program: String,

    /// Award points needed in the program's own currency
    pub points: u64,
}

/// One issuer's route into the requested program.
#[derive(Debug, Serialize)]
pub struct TransferOptionResult {
    pub issuer: Issuer,
    pub ratio: TransferRatio,
    pub min_increment: u64,

    /// Source points the issuer would have to transfer
    pub source_points_needed: u64,

    /// The issuer's current ledger balance
    pub available_balance: u64,

    /// Whether the balance covers the transfer
    pub can_cover: bool,

    /// True when this issuer is the only way into the program, e.g.
    /// Bilt into American Airlines
    pub sole_route: bool,
}

/// Response for transfer options.
#[derive(Debug, Serialize)]
pub struct TransferOptionsResponse {
    pub options: Vec<TransferOptionResult>,
}

/// Request to price a flight + optional hotel combination.
#[derive(Debug, Deserialize)]
pub struct PriceRequest {
    pub flight: FlightOffer,

    #[serde(default)]
    pub hotel: Option<HotelOffer>,

    /// Issuers to favor among equally priced combinations
    #[serde(default)]
    pub preferred_issuers: Vec<Issuer>,

    /// Cap on returned plans (defaults to the server's configured max)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Request to re-price an existing plan with substitutes.
#[derive(Debug, Deserialize)]
pub struct RepriceRequest {
    pub original: TripPlan,

    #[serde(default)]
    pub substitute_flight: Option<FlightOffer>,

    #[serde(default)]
    pub substitute_hotel: Option<HotelOffer>,

    #[serde(default)]
    pub preferred_issuers: Vec<Issuer>,

    #[serde(default)]
    pub limit: Option<usize>,
}

/// Ranked plans, best first.
#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub plans: Vec<TripPlan>,
}

/// Request to reserve or release a plan's points against the ledger.
#[derive(Debug, Deserialize)]
pub struct PlanLedgerRequest {
    pub plan: TripPlan,
}

/// Current ledger balances.
#[derive(Debug, Serialize)]
pub struct LedgerResponse {
    pub balances: PointsBalance,
}

/// Request to render a booking guide.
#[derive(Debug, Deserialize)]
pub struct GuideRequest {
    pub plan: TripPlan,
}

/// Rendered booking guide.
#[derive(Debug, Serialize)]
pub struct GuideResponse {
    pub markdown: String,
}

/// Error payload for all failure responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
