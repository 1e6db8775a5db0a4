//! Trip plans.
//!
//! A `TripPlan` is the planner's core output: one flight offer plus an
//! optional hotel offer, fully priced against a concrete funding choice.
//! Plans are built by the trip cost calculator and never mutated; the
//! fine-tune re-pricer supersedes a plan with a new instance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{FlightOffer, HotelOffer, Issuer, UsdCents};

/// How the hotel leg of a plan is funded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HotelFunding {
    /// No hotel on this plan.
    None,
    /// Hotel paid by transferring points from one issuer.
    Points { issuer: Issuer },
    /// Hotel paid in cash.
    Cash,
}

/// A fully priced, feasible flight + optional hotel combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    /// The flight offer this plan prices.
    pub flight: FlightOffer,

    /// The hotel offer this plan prices, if any.
    pub hotel: Option<HotelOffer>,

    /// Issuer funding the flight award.
    pub flight_issuer: Issuer,

    /// Funding choice for the hotel leg.
    pub hotel_funding: HotelFunding,

    /// Source points to transfer, per issuer, after ratio and
    /// minimum-increment rounding. Legs funded by the same issuer are
    /// summed into one entry.
    pub points_by_issuer: BTreeMap<Issuer, u64>,

    /// Total source points across all issuers.
    pub total_points: u64,

    /// Total cash owed: award taxes and fees plus any cash-paid leg.
    pub total_cash: UsdCents,

    /// Blended cents-per-point of the points-covered portion. `None` is
    /// the explicit sentinel for a plan that spends no points at all, so
    /// such plans never enter CPP ranking with a divide-by-zero.
    pub cpp: Option<f64>,

    /// Short human-readable funding summary, e.g.
    /// "chase_ur → united_mileageplus + cash hotel".
    pub label: String,
}

impl TripPlan {
    /// Points this plan transfers out of the given issuer.
    pub fn points_for(&self, issuer: Issuer) -> u64 {
        self.points_by_issuer.get(&issuer).copied().unwrap_or(0)
    }

    /// True if some leg of this plan is paid with points.
    pub fn uses_points(&self) -> bool {
        self.total_points > 0
    }
}
