//! Traveler preferences gathered during a planning session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether the traveler insists on points-only funding or accepts a
/// cash component beyond taxes and fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PointsStrategy {
    PointsOnly,
    #[default]
    MixedOk,
}

/// Preferred departure window for flights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightTimePreference {
    /// 06:00–12:00
    Morning,
    /// 12:00–18:00
    Afternoon,
    /// 18:00–24:00
    Evening,
    #[default]
    Any,
}

/// Accommodation tier, mapped onto star ratings by the search layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationTier {
    /// 1–2.5 stars
    Budget,
    /// 2.5–3.5 stars
    #[default]
    Midrange,
    /// 3.5–4.5 stars
    Upscale,
    /// 4.5+ stars
    Luxury,
}

impl AccommodationTier {
    /// Inclusive star-rating band for this tier.
    pub fn star_band(&self) -> (f32, f32) {
        match self {
            AccommodationTier::Budget => (1.0, 2.5),
            AccommodationTier::Midrange => (2.5, 3.5),
            AccommodationTier::Upscale => (3.5, 4.5),
            AccommodationTier::Luxury => (4.5, 6.0),
        }
    }
}

/// Everything the conversation layer gathers before a search can run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TravelPreferences {
    /// Raw destination request, e.g. "somewhere warm in Hawaii".
    #[serde(default)]
    pub destination_query: String,

    /// Resolved IATA city/airport code, e.g. "HNL".
    #[serde(default)]
    pub destination: String,

    /// Human-readable destination name for display.
    #[serde(default)]
    pub destination_display_name: String,

    /// IATA origin airport code.
    #[serde(default)]
    pub origin_airport: String,

    #[serde(default)]
    pub departure_date: Option<NaiveDate>,

    #[serde(default)]
    pub return_date: Option<NaiveDate>,

    /// Acceptable flex around the dates, 0–14 days.
    #[serde(default)]
    pub date_flexibility_days: u8,

    #[serde(default = "default_travelers")]
    pub num_travelers: u32,

    #[serde(default)]
    pub flight_time_preference: FlightTimePreference,

    #[serde(default)]
    pub accommodation_tier: AccommodationTier,

    #[serde(default)]
    pub points_strategy: PointsStrategy,
}

fn default_travelers() -> u32 {
    1
}

impl TravelPreferences {
    /// True once every field a search needs has been gathered.
    pub fn is_fully_specified(&self) -> bool {
        !self.destination.is_empty()
            && !self.origin_airport.is_empty()
            && self.departure_date.is_some()
            && self.return_date.is_some()
            && self.num_travelers >= 1
    }
}
