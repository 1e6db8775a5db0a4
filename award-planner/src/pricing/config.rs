//! Pricing configuration.

use crate::domain::Issuer;

/// Configuration parameters for plan assembly and ranking.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Maximum number of plans to present after ranking.
    pub max_plans: usize,

    /// Default issuer preference order applied when a request does not
    /// supply one. Empty means no preference.
    pub preferred_issuers: Vec<Issuer>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            max_plans: 4,
            preferred_issuers: Vec::new(),
        }
    }
}
