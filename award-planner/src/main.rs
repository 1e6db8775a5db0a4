use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use award_planner::cache::{CacheConfig, CachedOfferSource};
use award_planner::ledger::{PointsBalance, PointsLedger};
use award_planner::pricing::PricingConfig;
use award_planner::profile::{default_profile_path, load_profile};
use award_planner::registry::{builtin_registry, builtin_valuations};
use award_planner::search::{AmadeusClient, AmadeusConfig, MockOfferSource, OfferSource};
use award_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Offer source: live Amadeus when credentials are present, the
    // built-in mock otherwise.
    let client_id = std::env::var("AMADEUS_CLIENT_ID").unwrap_or_default();
    let client_secret = std::env::var("AMADEUS_CLIENT_SECRET").unwrap_or_default();
    let source = if client_id.is_empty() || client_secret.is_empty() {
        eprintln!("Warning: AMADEUS_CLIENT_ID/SECRET not set. Serving mock offers.");
        OfferSource::Mock(MockOfferSource::new())
    } else {
        let config = AmadeusConfig::new(client_id, client_secret);
        let client = AmadeusClient::new(config).expect("Failed to create Amadeus client");
        OfferSource::Live(client)
    };
    let mock_mode = source.is_mock();
    let offers = CachedOfferSource::new(source, &CacheConfig::default());

    // Seed the ledger from the saved profile, if one exists.
    let balances = match default_profile_path() {
        Ok(path) => match load_profile(&path) {
            Ok(Some(profile)) => {
                println!("Loaded profile from {}", path.display());
                profile.points.to_balance()
            }
            Ok(None) => PointsBalance::new(),
            Err(e) => {
                eprintln!("Warning: could not read profile: {e}");
                PointsBalance::new()
            }
        },
        Err(e) => {
            eprintln!("Warning: {e}");
            PointsBalance::new()
        }
    };
    if balances.total() == 0 {
        println!("No saved balances - every plan will be infeasible until a profile is saved.");
    }

    let state = AppState::new(
        offers,
        builtin_registry(),
        builtin_valuations(),
        PointsLedger::new(balances),
        PricingConfig::default(),
    );

    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!(
        "Award Travel Planner listening on http://{addr} ({} offers)",
        if mock_mode { "mock" } else { "live" }
    );
    println!();
    println!("API Endpoints:");
    println!("  GET  /health            - Health check");
    println!("  GET  /search/flights    - Search award flight offers");
    println!("  GET  /search/hotels     - Search hotel offers");
    println!("  GET  /transfers/options - Transfer routes into a program");
    println!("  POST /plans/price       - Price + rank trip plans");
    println!("  POST /plans/reprice     - Re-price with substitute offers");
    println!("  POST /plans/accept      - Reserve an accepted plan's points");
    println!("  POST /plans/release     - Release a plan's points");
    println!("  POST /plans/guide       - Render the booking guide");
    println!("  GET  /ledger            - Current balances");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
