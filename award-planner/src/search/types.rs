//! Wire types for the Amadeus self-service API, and their conversion
//! into validated domain offers.
//!
//! The self-service API quotes cash fares, not award inventory, so the
//! conversion maps the cash total onto an approximate miles price and
//! keeps the real total as the offer's disclosed cash value. The booking
//! program is inferred from the operating carrier or hotel chain.

use serde::Deserialize;

use crate::domain::{
    DomainError, FlightOffer, FlightSegment, HotelOffer, PointsPrice, Program, UsdCents,
};

/// OAuth2 token grant response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Seconds until expiry; Amadeus issues ~30-minute tokens.
    #[serde(default = "default_expiry")]
    pub expires_in: u64,
}

fn default_expiry() -> u64 {
    1800
}

// --- Flight offers -------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct FlightOffersResponse {
    #[serde(default)]
    pub data: Vec<WireFlightOffer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireFlightOffer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub itineraries: Vec<WireItinerary>,
    pub price: WirePrice,
}

#[derive(Debug, Deserialize)]
pub struct WireItinerary {
    #[serde(default)]
    pub segments: Vec<WireSegment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSegment {
    pub departure: WireEndpoint,
    pub arrival: WireEndpoint,
    #[serde(default)]
    pub carrier_code: String,
    #[serde(default)]
    pub number: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireEndpoint {
    #[serde(default)]
    pub iata_code: String,
    #[serde(default)]
    pub at: String,
}

#[derive(Debug, Deserialize)]
pub struct WirePrice {
    /// Decimal string, e.g. "405.30"
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub fees: Vec<WireFee>,
}

#[derive(Debug, Deserialize)]
pub struct WireFee {
    #[serde(default)]
    pub amount: String,
}

// --- Hotel offers --------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct HotelListResponse {
    #[serde(default)]
    pub data: Vec<WireHotelRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireHotelRef {
    pub hotel_id: String,
}

#[derive(Debug, Deserialize)]
pub struct HotelOffersResponse {
    #[serde(default)]
    pub data: Vec<WireHotelOffer>,
}

#[derive(Debug, Deserialize)]
pub struct WireHotelOffer {
    pub hotel: WireHotel,
    #[serde(default)]
    pub offers: Vec<WireRoomOffer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireHotel {
    #[serde(default)]
    pub hotel_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub chain_code: String,
    #[serde(default)]
    pub rating: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRoomOffer {
    #[serde(default)]
    pub check_in_date: String,
    #[serde(default)]
    pub check_out_date: String,
    pub price: WireHotelPrice,
}

#[derive(Debug, Deserialize)]
pub struct WireHotelPrice {
    #[serde(default)]
    pub total: String,
}

// --- Conversion ----------------------------------------------------------

/// Parse a decimal USD string like "405.30" into cents. Returns `None`
/// for anything that is not a plain non-negative decimal.
pub fn parse_usd(s: &str) -> Option<UsdCents> {
    let (dollars, fraction) = match s.split_once('.') {
        Some((d, f)) => (d, f),
        None => (s, ""),
    };
    if dollars.is_empty() || !dollars.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let dollars: u64 = dollars.parse().ok()?;
    let cents = match fraction.len() {
        0 => 0,
        1 | 2 if fraction.bytes().all(|b| b.is_ascii_digit()) => {
            let f: u64 = fraction.parse().ok()?;
            if fraction.len() == 1 { f * 10 } else { f }
        }
        _ => return None,
    };
    Some(UsdCents::new(dollars * 100 + cents))
}

/// Map an operating carrier to the loyalty program an award would be
/// booked through. Unknown carriers fall back to United, the broadest
/// Star Alliance booking surface in the table.
pub fn program_for_carrier(carrier: &str) -> Program {
    match carrier {
        "UA" => Program::UnitedMileageplus,
        "AA" => Program::AmericanAirlinesAadvantage,
        "DL" => Program::DeltaSkymiles,
        "WN" => Program::SouthwestRapidRewards,
        "AS" => Program::AlaskaMileagePlan,
        "B6" => Program::JetblueTrueblue,
        "BA" => Program::BritishAirwaysAvios,
        "AF" | "KL" => Program::AirFranceFlyingBlue,
        "AC" => Program::AirCanadaAeroplan,
        "SQ" => Program::SingaporeKrisflyer,
        "EK" => Program::EmiratesSkywards,
        "TK" => Program::TurkishMilesSmiles,
        "VS" => Program::VirginAtlanticFlyingClub,
        "CX" => Program::CathayAsiaMiles,
        "AV" => Program::AviancaLifemiles,
        "TG" => Program::ThaiAirwaysRoyalOrchid,
        _ => Program::UnitedMileageplus,
    }
}

/// Map an Amadeus chain code to a hotel loyalty program. Independent
/// properties return `None` and stay cash-only.
pub fn program_for_chain(chain: &str) -> Option<Program> {
    match chain {
        "HY" => Some(Program::WorldOfHyatt),
        "MC" | "MR" | "RZ" | "WH" => Some(Program::MarriottBonvoy),
        "HH" | "HL" | "ES" | "DT" => Some(Program::HiltonHonors),
        "IC" | "HI" | "IH" | "CP" => Some(Program::IhgRewards),
        "WY" | "RA" => Some(Program::WyndhamRewards),
        "CH" | "QI" | "CI" => Some(Program::ChoicePrivileges),
        _ => None,
    }
}

/// Convert one wire flight offer into a domain offer.
///
/// The cash total stands in for the miles price (the self-service API
/// exposes no award inventory) and is kept as the disclosed cash value.
pub fn convert_flight_offer(wire: &WireFlightOffer) -> Result<FlightOffer, DomainError> {
    let outbound = wire
        .itineraries
        .first()
        .map(|i| convert_segments(&i.segments))
        .unwrap_or_default();
    let inbound = wire
        .itineraries
        .get(1)
        .map(|i| convert_segments(&i.segments))
        .unwrap_or_default();

    let total = parse_usd(&wire.price.total).unwrap_or(UsdCents::ZERO);
    let taxes = wire
        .price
        .fees
        .first()
        .and_then(|f| parse_usd(&f.amount))
        .unwrap_or(UsdCents::ZERO);
    let carrier = outbound
        .first()
        .map(|s| s.airline.as_str())
        .unwrap_or_default();
    let program = program_for_carrier(carrier);

    // Cash cents stand in for award miles.
    let miles = total.as_cents();

    let mut offer =
        FlightOffer::new(program, miles, taxes, outbound, inbound)?.with_id(wire.id.clone());
    if !total.is_zero() {
        offer = offer.with_cash_value(total);
    }
    Ok(offer)
}

fn convert_segments(segments: &[WireSegment]) -> Vec<FlightSegment> {
    segments
        .iter()
        .map(|s| FlightSegment {
            origin: s.departure.iata_code.clone(),
            destination: s.arrival.iata_code.clone(),
            departure: s.departure.at.clone(),
            arrival: s.arrival.at.clone(),
            airline: s.carrier_code.clone(),
            flight_number: format!("{}{}", s.carrier_code, s.number),
        })
        .collect()
}

/// Convert one wire hotel offer into a domain offer.
pub fn convert_hotel_offer(wire: &WireHotelOffer) -> Result<HotelOffer, DomainError> {
    let room = wire.offers.first();
    let check_in = room
        .and_then(|r| r.check_in_date.parse().ok())
        .ok_or(DomainError::InvalidStay)?;
    let check_out = room
        .and_then(|r| r.check_out_date.parse().ok())
        .ok_or(DomainError::InvalidStay)?;

    let cash_price = room.and_then(|r| parse_usd(&r.price.total)).filter(|c| !c.is_zero());

    // Chain-affiliated properties also get an approximate points price
    // in their own program; independents stay cash-only.
    let points_price = match (program_for_chain(&wire.hotel.chain_code), cash_price) {
        (Some(program), Some(cash)) => Some(PointsPrice::new(program, cash.as_cents())?),
        _ => None,
    };

    Ok(HotelOffer::new(
        wire.hotel.name.clone(),
        check_in,
        check_out,
        points_price,
        cash_price,
    )?
    .with_id(wire.hotel.hotel_id.clone())
    .with_chain(wire.hotel.chain_code.clone())
    .with_star_rating(wire.hotel.rating.unwrap_or(3.0)))
}
