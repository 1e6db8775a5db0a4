//! Award travel planner.
//!
//! A points-optimization service that turns flight and hotel offers
//! plus a portfolio of transferable-point balances into ranked,
//! fully-priced award itineraries, and renders a step-by-step
//! redemption guide for the chosen one.

pub mod cache;
pub mod domain;
pub mod guide;
pub mod ledger;
pub mod preferences;
pub mod pricing;
pub mod profile;
pub mod registry;
pub mod search;
pub mod session;
pub mod web;
