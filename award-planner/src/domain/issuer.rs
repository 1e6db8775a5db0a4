//! Card issuer identities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown issuer name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown issuer: {0}")]
pub struct InvalidIssuer(pub String);

/// A transferable-points card issuer.
///
/// This is a closed set: the five major US transferable currencies.
/// The enum declaration order is the canonical tie-break order used
/// wherever two issuers are otherwise indistinguishable, so variants
/// must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issuer {
    ChaseUr,
    AmexMr,
    CitiTy,
    CapitalOneMiles,
    BiltRewards,
}

impl Issuer {
    /// All issuers in canonical order.
    pub const ALL: [Issuer; 5] = [
        Issuer::ChaseUr,
        Issuer::AmexMr,
        Issuer::CitiTy,
        Issuer::CapitalOneMiles,
        Issuer::BiltRewards,
    ];

    /// Stable machine-readable name, matching the serde encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Issuer::ChaseUr => "chase_ur",
            Issuer::AmexMr => "amex_mr",
            Issuer::CitiTy => "citi_ty",
            Issuer::CapitalOneMiles => "capital_one_miles",
            Issuer::BiltRewards => "bilt_rewards",
        }
    }

    /// Human-readable name for rendered output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Issuer::ChaseUr => "Chase Ultimate Rewards",
            Issuer::AmexMr => "Amex Membership Rewards",
            Issuer::CitiTy => "Citi ThankYou",
            Issuer::CapitalOneMiles => "Capital One Miles",
            Issuer::BiltRewards => "Bilt Rewards",
        }
    }

    /// Parse a machine-readable issuer name.
    pub fn parse(s: &str) -> Result<Self, InvalidIssuer> {
        Issuer::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| InvalidIssuer(s.to_string()))
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
