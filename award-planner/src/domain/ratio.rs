//! Transfer ratio between an issuer currency and a loyalty program.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A `from:to` transfer ratio: `from` source points become `to` target
/// points. Both sides are positive by construction; `1:1` is the common
/// case, Amex→Hilton is `1:2`, and a devalued route might be `2:1`.
///
/// The ratio itself carries no conversion arithmetic. The rounding rules
/// that turn a target-points price into source points live in the
/// transfer registry, which is the only place that math is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRatio", into = "RawRatio")]
pub struct TransferRatio {
    from: u32,
    to: u32,
}

impl TransferRatio {
    /// One source point per target point.
    pub const ONE_TO_ONE: TransferRatio = TransferRatio { from: 1, to: 1 };

    /// Create a ratio, rejecting zero on either side.
    pub fn new(from: u32, to: u32) -> Result<Self, DomainError> {
        if from == 0 || to == 0 {
            return Err(DomainError::NonPositiveRatio { from, to });
        }
        Ok(TransferRatio { from, to })
    }

    /// Source points per transfer block.
    pub fn from_units(&self) -> u32 {
        self.from
    }

    /// Target points per transfer block.
    pub fn to_units(&self) -> u32 {
        self.to
    }

    /// Compare by value: fewer source points per target point is
    /// "smaller" (better). Exact, no floats: `a/b < c/d  ⇔  a·d < c·b`.
    pub fn cmp_value(&self, other: &TransferRatio) -> Ordering {
        let lhs = self.from as u64 * other.to as u64;
        let rhs = other.from as u64 * self.to as u64;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for TransferRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.from, self.to)
    }
}

/// Serde shape for `TransferRatio`, funneled through `TransferRatio::new`
/// so deserialized ratios uphold the positivity invariant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawRatio {
    from: u32,
    to: u32,
}

impl TryFrom<RawRatio> for TransferRatio {
    type Error = DomainError;

    fn try_from(raw: RawRatio) -> Result<Self, Self::Error> {
        TransferRatio::new(raw.from, raw.to)
    }
}

impl From<TransferRatio> for RawRatio {
    fn from(ratio: TransferRatio) -> Self {
        RawRatio {
            from: ratio.from,
            to: ratio.to,
        }
    }
}
