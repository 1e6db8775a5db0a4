//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::CachedOfferSource;
use crate::ledger::PointsLedger;
use crate::pricing::PricingConfig;
use crate::registry::{TransferRegistry, ValuationTable};

/// Shared application state.
///
/// The ledger is the only mutable piece; everything else is read-only
/// reference data or a self-synchronizing client.
#[derive(Clone)]
pub struct AppState {
    /// Cached offer source (live Amadeus or mock)
    pub offers: Arc<CachedOfferSource>,

    /// Transfer partner table
    pub registry: Arc<TransferRegistry>,

    /// Baseline point valuations
    pub valuations: Arc<ValuationTable>,

    /// The session points ledger
    pub ledger: Arc<Mutex<PointsLedger>>,

    /// Pricing configuration
    pub config: Arc<PricingConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        offers: CachedOfferSource,
        registry: TransferRegistry,
        valuations: ValuationTable,
        ledger: PointsLedger,
        config: PricingConfig,
    ) -> Self {
        Self {
            offers: Arc::new(offers),
            registry: Arc::new(registry),
            valuations: Arc::new(valuations),
            ledger: Arc::new(Mutex::new(ledger)),
            config: Arc::new(config),
        }
    }
}
