//! Flight and hotel offers.
//!
//! Offers are immutable quotes from the external search collaborator:
//! a points price in the target program's own currency and/or a cash
//! price, plus route/property metadata used for display only. All
//! invariants are checked at construction, so pricing code can trust
//! any offer it receives.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DomainError, Program, UsdCents};

/// One flight segment, metadata only, never consulted by pricing math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSegment {
    /// IATA airport code, e.g. "JFK"
    pub origin: String,
    /// IATA airport code, e.g. "HNL"
    pub destination: String,
    /// ISO 8601 local datetime, e.g. "2026-04-15T08:00:00"
    pub departure: String,
    /// ISO 8601 local datetime
    pub arrival: String,
    /// IATA airline code, e.g. "UA"
    pub airline: String,
    /// Flight number, e.g. "UA101"
    pub flight_number: String,
}

/// An award flight quote: a miles price in one airline program plus the
/// cash taxes and fees that always accompany an award booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFlightOffer", into = "RawFlightOffer")]
pub struct FlightOffer {
    id: String,
    program: Program,
    miles: u64,
    taxes: UsdCents,
    cash_value: Option<UsdCents>,
    outbound: Vec<FlightSegment>,
    inbound: Vec<FlightSegment>,
}

impl FlightOffer {
    /// Create a validated flight offer.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the program is a hotel program, the miles price
    /// is zero, or the outbound itinerary is empty.
    pub fn new(
        program: Program,
        miles: u64,
        taxes: UsdCents,
        outbound: Vec<FlightSegment>,
        inbound: Vec<FlightSegment>,
    ) -> Result<Self, DomainError> {
        if program.is_hotel() {
            return Err(DomainError::ProgramKindMismatch {
                program,
                expected: "flight",
            });
        }
        if miles == 0 {
            return Err(DomainError::ZeroMiles);
        }
        if outbound.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        Ok(FlightOffer {
            id: String::new(),
            program,
            miles,
            taxes,
            cash_value: None,
            outbound,
            inbound,
        })
    }

    /// Attach the upstream offer identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Attach the disclosed cash-equivalent fare, used as the value of
    /// the miles portion when computing cents-per-point.
    pub fn with_cash_value(mut self, value: UsdCents) -> Self {
        self.cash_value = Some(value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The airline program the award is priced in.
    pub fn program(&self) -> Program {
        self.program
    }

    /// Miles required, in the program's own currency.
    pub fn miles(&self) -> u64 {
        self.miles
    }

    /// Cash taxes and fees due at booking.
    pub fn taxes(&self) -> UsdCents {
        self.taxes
    }

    /// Disclosed cash-equivalent fare, when the source revealed one.
    pub fn cash_value(&self) -> Option<UsdCents> {
        self.cash_value
    }

    pub fn outbound(&self) -> &[FlightSegment] {
        &self.outbound
    }

    pub fn inbound(&self) -> &[FlightSegment] {
        &self.inbound
    }

    /// Final destination of the outbound itinerary.
    pub fn destination(&self) -> &str {
        // Safe: outbound validated non-empty at construction
        &self.outbound.last().unwrap().destination
    }
}

/// A hotel points price in the property's loyalty program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPointsPrice", into = "RawPointsPrice")]
pub struct PointsPrice {
    program: Program,
    points: u64,
}

impl PointsPrice {
    /// Create a validated points price.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the program is not a hotel program or the points
    /// amount is zero.
    pub fn new(program: Program, points: u64) -> Result<Self, DomainError> {
        if !program.is_hotel() {
            return Err(DomainError::ProgramKindMismatch {
                program,
                expected: "hotel",
            });
        }
        if points == 0 {
            return Err(DomainError::ZeroPoints);
        }
        Ok(PointsPrice { program, points })
    }

    pub fn program(&self) -> Program {
        self.program
    }

    pub fn points(&self) -> u64 {
        self.points
    }
}

/// A hotel quote: payable in the property program's points, in cash, or
/// either. At least one price is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHotelOffer", into = "RawHotelOffer")]
pub struct HotelOffer {
    id: String,
    name: String,
    chain: String,
    star_rating: f32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    points_price: Option<PointsPrice>,
    cash_price: Option<UsdCents>,
}

impl HotelOffer {
    /// Create a validated hotel offer.
    ///
    /// # Errors
    ///
    /// Returns `Err` if check-out is not after check-in or neither a
    /// points price nor a cash price is supplied.
    pub fn new(
        name: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
        points_price: Option<PointsPrice>,
        cash_price: Option<UsdCents>,
    ) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidStay);
        }
        if points_price.is_none() && cash_price.is_none() {
            return Err(DomainError::UnpricedHotel);
        }
        Ok(HotelOffer {
            id: String::new(),
            name: name.into(),
            chain: String::new(),
            star_rating: 3.0,
            check_in,
            check_out,
            points_price,
            cash_price,
        })
    }

    /// Attach the upstream property identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Attach the hotel chain name.
    pub fn with_chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = chain.into();
        self
    }

    /// Attach the star rating.
    pub fn with_star_rating(mut self, rating: f32) -> Self {
        self.star_rating = rating;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }

    pub fn star_rating(&self) -> f32 {
        self.star_rating
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// The points price, if the property is bookable on points.
    pub fn points_price(&self) -> Option<PointsPrice> {
        self.points_price
    }

    /// The cash price, if the property is bookable for cash. Doubles as
    /// the disclosed cash-equivalent value of the points price.
    pub fn cash_price(&self) -> Option<UsdCents> {
        self.cash_price
    }
}

// Serde shapes, funneled through the validating constructors.

#[derive(Serialize, Deserialize)]
struct RawFlightOffer {
    #[serde(default)]
    id: String,
    program: Program,
    miles: u64,
    taxes: UsdCents,
    #[serde(default)]
    cash_value: Option<UsdCents>,
    outbound: Vec<FlightSegment>,
    #[serde(default)]
    inbound: Vec<FlightSegment>,
}

impl TryFrom<RawFlightOffer> for FlightOffer {
    type Error = DomainError;

    fn try_from(raw: RawFlightOffer) -> Result<Self, Self::Error> {
        let mut offer =
            FlightOffer::new(raw.program, raw.miles, raw.taxes, raw.outbound, raw.inbound)?
                .with_id(raw.id);
        offer.cash_value = raw.cash_value;
        Ok(offer)
    }
}

impl From<FlightOffer> for RawFlightOffer {
    fn from(offer: FlightOffer) -> Self {
        RawFlightOffer {
            id: offer.id,
            program: offer.program,
            miles: offer.miles,
            taxes: offer.taxes,
            cash_value: offer.cash_value,
            outbound: offer.outbound,
            inbound: offer.inbound,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawPointsPrice {
    program: Program,
    points: u64,
}

impl TryFrom<RawPointsPrice> for PointsPrice {
    type Error = DomainError;

    fn try_from(raw: RawPointsPrice) -> Result<Self, Self::Error> {
        PointsPrice::new(raw.program, raw.points)
    }
}

impl From<PointsPrice> for RawPointsPrice {
    fn from(price: PointsPrice) -> Self {
        RawPointsPrice {
            program: price.program,
            points: price.points,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawHotelOffer {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    chain: String,
    #[serde(default = "default_star_rating")]
    star_rating: f32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    #[serde(default)]
    points_price: Option<PointsPrice>,
    #[serde(default)]
    cash_price: Option<UsdCents>,
}

fn default_star_rating() -> f32 {
    3.0
}

impl TryFrom<RawHotelOffer> for HotelOffer {
    type Error = DomainError;

    fn try_from(raw: RawHotelOffer) -> Result<Self, Self::Error> {
        Ok(HotelOffer::new(
            raw.name,
            raw.check_in,
            raw.check_out,
            raw.points_price,
            raw.cash_price,
        )?
        .with_id(raw.id)
        .with_chain(raw.chain)
        .with_star_rating(raw.star_rating))
    }
}

impl From<HotelOffer> for RawHotelOffer {
    fn from(offer: HotelOffer) -> Self {
        RawHotelOffer {
            id: offer.id,
            name: offer.name,
            chain: offer.chain,
            star_rating: offer.star_rating,
            check_in: offer.check_in,
            check_out: offer.check_out,
            points_price: offer.points_price,
            cash_price: offer.cash_price,
        }
    }
}
