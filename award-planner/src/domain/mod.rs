//! Domain types for the award travel planner.
//!
//! This module contains the core model types that represent validated
//! award-travel data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod issuer;
mod money;
mod offer;
mod plan;
mod program;
mod ratio;

pub use error::DomainError;
pub use issuer::{InvalidIssuer, Issuer};
pub use money::UsdCents;
pub use offer::{FlightOffer, FlightSegment, HotelOffer, PointsPrice};
pub use plan::{HotelFunding, TripPlan};
pub use program::{InvalidProgram, Program};
pub use ratio::TransferRatio;
