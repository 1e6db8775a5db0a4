//! Money as integer US cents.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A non-negative US dollar amount stored as whole cents.
///
/// All cash math in the planner happens in integer cents so that taxes,
/// fees, and cash-paid legs add up exactly. Floats appear only in
/// cents-per-point values, never in money.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UsdCents(u64);

impl UsdCents {
    pub const ZERO: UsdCents = UsdCents(0);

    /// Wrap a cent amount.
    pub fn new(cents: u64) -> Self {
        UsdCents(cents)
    }

    /// Convenience constructor for whole-dollar amounts.
    pub fn from_dollars(dollars: u64) -> Self {
        UsdCents(dollars * 100)
    }

    /// The raw cent count.
    pub fn as_cents(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Saturating addition. Balances are far below `u64::MAX`, so
    /// saturation only matters for hostile inputs.
    pub fn saturating_add(self, other: UsdCents) -> UsdCents {
        UsdCents(self.0.saturating_add(other.0))
    }
}

impl Add for UsdCents {
    type Output = UsdCents;

    fn add(self, other: UsdCents) -> UsdCents {
        self.saturating_add(other)
    }
}

impl Sum for UsdCents {
    fn sum<I: Iterator<Item = UsdCents>>(iter: I) -> UsdCents {
        iter.fold(UsdCents::ZERO, Add::add)
    }
}

impl fmt::Display for UsdCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
