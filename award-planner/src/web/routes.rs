//! HTTP route handlers.
//!
//! The JSON API is the fixed set of independently invocable operations
//! the conversation layer drives: search, transfer lookup, pricing,
//! re-pricing, ledger reservation, and guide rendering.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::domain::Program;
use crate::guide::render_booking_guide;
use crate::pricing::{TripCostCalculator, rank_plans};
use crate::registry::UnsupportedTransferError;
use crate::search::{FlightSearch, HotelSearch, SearchError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/search/flights", get(search_flights))
        .route("/search/hotels", get(search_hotels))
        .route("/transfers/options", get(transfer_options))
        .route("/plans/price", post(price_plans))
        .route("/plans/reprice", post(reprice_plan))
        .route("/plans/accept", post(accept_plan))
        .route("/plans/release", post(release_plan))
        .route("/plans/guide", post(booking_guide))
        .route("/ledger", get(ledger_snapshot))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Validate an IATA-style code: 3 ASCII letters, normalized to upper.
fn parse_iata(raw: &str, what: &str) -> Result<String, AppError> {
    let code = raw.trim().to_ascii_uppercase();
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(code)
    } else {
        Err(AppError::BadRequest {
            message: format!("invalid {what} code: {raw}"),
        })
    }
}

/// Search round-trip flight offers.
async fn search_flights(
    State(state): State<AppState>,
    Query(req): Query<FlightSearchRequest>,
) -> Result<Json<FlightSearchResponse>, AppError> {
    if req.return_date < req.departure_date {
        return Err(AppError::BadRequest {
            message: "return date is before departure date".to_string(),
        });
    }

    let search = FlightSearch {
        origin: parse_iata(&req.origin, "origin airport")?,
        destination: parse_iata(&req.destination, "destination airport")?,
        departure_date: req.departure_date,
        return_date: req.return_date,
        travelers: req.travelers.unwrap_or(1).max(1),
    };

    let offers = match req.flex_days.unwrap_or(0) {
        0 => state.offers.search_flights(&search).await?.as_ref().clone(),
        flex => state.offers.search_flights_flexible(&search, flex).await?,
    };
    Ok(Json(FlightSearchResponse { offers }))
}

/// Search hotel offers.
async fn search_hotels(
    State(state): State<AppState>,
    Query(req): Query<HotelSearchRequest>,
) -> Result<Json<HotelSearchResponse>, AppError> {
    if req.check_out <= req.check_in {
        return Err(AppError::BadRequest {
            message: "check-out must be after check-in".to_string(),
        });
    }

    let search = HotelSearch {
        city_code: parse_iata(&req.city_code, "city")?,
        check_in: req.check_in,
        check_out: req.check_out,
        travelers: req.travelers.unwrap_or(1).max(1),
    };

    let offers = state.offers.search_hotels(&search).await?.as_ref().clone();
    Ok(Json(HotelSearchResponse { offers }))
}

/// Which issuers can fund an award in the given program, and what it
/// would cost each of them.
async fn transfer_options(
    State(state): State<AppState>,
    Query(req): Query<TransferOptionsRequest>,
) -> Result<Json<TransferOptionsResponse>, AppError> {
    let program = Program::parse(&req.program).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let transfer_options = state.registry.find_transfer_options(program);
    if transfer_options.is_empty() {
        return Err(UnsupportedTransferError::Unreachable { program }.into());
    }
    let sole_route = transfer_options.len() == 1;
    let balances = state.ledger.lock().await.snapshot();

    let mut options = Vec::with_capacity(transfer_options.len());
    for option in transfer_options {
        let needed = state
            .registry
            .points_required(program, req.points, option.issuer)?;
        let available = balances.get(option.issuer);
        options.push(TransferOptionResult {
            issuer: option.issuer,
            ratio: option.ratio,
            min_increment: option.min_increment,
            source_points_needed: needed,
            available_balance: available,
            can_cover: available >= needed,
            sole_route,
        });
    }
    // Coverable routes first, cheapest transfer within each group.
    options.sort_by_key(|o| (!o.can_cover, o.source_points_needed));

    Ok(Json(TransferOptionsResponse { options }))
}

/// Price a flight + optional hotel into ranked trip plans.
async fn price_plans(
    State(state): State<AppState>,
    Json(req): Json<PriceRequest>,
) -> Result<Json<PriceResponse>, AppError> {
    let balances = state.ledger.lock().await.snapshot();
    let calculator = TripCostCalculator::new(&state.registry, &state.valuations);

    let preferred = if req.preferred_issuers.is_empty() {
        state.config.preferred_issuers.clone()
    } else {
        req.preferred_issuers
    };

    let plans = calculator.price(&req.flight, req.hotel.as_ref(), &balances, &preferred)?;
    let limit = req.limit.unwrap_or(state.config.max_plans);
    Ok(Json(PriceResponse {
        plans: rank_plans(plans, limit),
    }))
}

/// Re-price an existing plan with substitute offers.
async fn reprice_plan(
    State(state): State<AppState>,
    Json(req): Json<RepriceRequest>,
) -> Result<Json<PriceResponse>, AppError> {
    let balances = state.ledger.lock().await.snapshot();
    let calculator = TripCostCalculator::new(&state.registry, &state.valuations);

    let preferred = if req.preferred_issuers.is_empty() {
        state.config.preferred_issuers.clone()
    } else {
        req.preferred_issuers
    };

    let plans = calculator.reprice(
        &req.original,
        req.substitute_flight.as_ref(),
        req.substitute_hotel.as_ref(),
        &balances,
        &preferred,
    )?;
    let limit = req.limit.unwrap_or(state.config.max_plans);
    Ok(Json(PriceResponse {
        plans: rank_plans(plans, limit),
    }))
}

/// Reserve an accepted plan's points so later pricing sees the reduced
/// balances.
async fn accept_plan(
    State(state): State<AppState>,
    Json(req): Json<PlanLedgerRequest>,
) -> Result<Json<LedgerResponse>, AppError> {
    let mut ledger = state.ledger.lock().await;
    if !ledger.reserve_plan(&req.plan) {
        return Err(AppError::Conflict {
            message: "insufficient points to reserve this plan".to_string(),
        });
    }
    tracing::info!(label = %req.plan.label, points = req.plan.total_points, "plan accepted");
    Ok(Json(LedgerResponse {
        balances: ledger.snapshot(),
    }))
}

/// Release a previously accepted plan's points.
async fn release_plan(
    State(state): State<AppState>,
    Json(req): Json<PlanLedgerRequest>,
) -> Result<Json<LedgerResponse>, AppError> {
    let mut ledger = state.ledger.lock().await;
    ledger.release_plan(&req.plan);
    tracing::info!(label = %req.plan.label, points = req.plan.total_points, "plan released");
    Ok(Json(LedgerResponse {
        balances: ledger.snapshot(),
    }))
}

/// Current ledger balances.
async fn ledger_snapshot(State(state): State<AppState>) -> Json<LedgerResponse> {
    Json(LedgerResponse {
        balances: state.ledger.lock().await.snapshot(),
    })
}

/// Render the step-by-step booking guide for a plan.
async fn booking_guide(Json(req): Json<GuideRequest>) -> Json<GuideResponse> {
    Json(GuideResponse {
        markdown: render_booking_guide(&req.plan),
    })
}

/// Application error responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<UnsupportedTransferError> for AppError {
    fn from(e: UnsupportedTransferError) -> Self {
        AppError::NotFound {
            message: format!("no award option found: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheConfig, CachedOfferSource};
    use crate::domain::{FlightOffer, FlightSegment, Issuer, UsdCents};
    use crate::ledger::{PointsBalance, PointsLedger};
    use crate::pricing::PricingConfig;
    use crate::registry::{builtin_registry, builtin_valuations};
    use crate::search::{MockOfferSource, OfferSource};

    fn app_state(balances: PointsBalance) -> AppState {
        AppState::new(
            CachedOfferSource::new(
                OfferSource::Mock(MockOfferSource::new()),
                &CacheConfig::default(),
            ),
            builtin_registry(),
            builtin_valuations(),
            PointsLedger::new(balances),
            PricingConfig::default(),
        )
    }

    fn united_offer() -> FlightOffer {
        FlightOffer::new(
            Program::UnitedMileageplus,
            25_000,
            UsdCents::new(1120),
            vec![FlightSegment {
                origin: "JFK".into(),
                destination: "HNL".into(),
                departure: "2026-04-15T08:00:00".into(),
                arrival: "2026-04-15T14:00:00".into(),
                airline: "UA".into(),
                flight_number: "UA101".into(),
            }],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn iata_validation() {
        assert_eq!(parse_iata("jfk", "origin").unwrap(), "JFK");
        assert_eq!(parse_iata(" HNL ", "origin").unwrap(), "HNL");
        assert!(parse_iata("", "origin").is_err());
        assert!(parse_iata("NEWYORK", "origin").is_err());
        assert!(parse_iata("J1K", "origin").is_err());
    }

    #[tokio::test]
    async fn price_endpoint_returns_ranked_plans() {
        let state = app_state(PointsBalance::new().with(Issuer::ChaseUr, 30_000));
        let response = price_plans(
            State(state),
            Json(PriceRequest {
                flight: united_offer(),
                hotel: None,
                preferred_issuers: vec![],
                limit: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0.plans.len(), 1);
        assert_eq!(response.0.plans[0].points_for(Issuer::ChaseUr), 25_000);
    }

    #[tokio::test]
    async fn accept_then_price_sees_reduced_balance() {
        let state = app_state(PointsBalance::new().with(Issuer::ChaseUr, 30_000));

        let priced = price_plans(
            State(state.clone()),
            Json(PriceRequest {
                flight: united_offer(),
                hotel: None,
                preferred_issuers: vec![],
                limit: None,
            }),
        )
        .await
        .unwrap();
        let plan = priced.0.plans[0].clone();

        let accepted = accept_plan(State(state.clone()), Json(PlanLedgerRequest { plan }))
            .await
            .unwrap();
        assert_eq!(accepted.0.balances.get(Issuer::ChaseUr), 5_000);

        // The same flight is no longer affordable.
        let repriced = price_plans(
            State(state),
            Json(PriceRequest {
                flight: united_offer(),
                hotel: None,
                preferred_issuers: vec![],
                limit: None,
            }),
        )
        .await
        .unwrap();
        assert!(repriced.0.plans.is_empty());
    }

    #[tokio::test]
    async fn accept_beyond_balance_conflicts_and_keeps_ledger() {
        let state = app_state(PointsBalance::new().with(Issuer::ChaseUr, 30_000));
        let priced = price_plans(
            State(state.clone()),
            Json(PriceRequest {
                flight: united_offer(),
                hotel: None,
                preferred_issuers: vec![],
                limit: None,
            }),
        )
        .await
        .unwrap();
        let plan = priced.0.plans[0].clone();

        // First accept succeeds, second must conflict.
        accept_plan(State(state.clone()), Json(PlanLedgerRequest { plan: plan.clone() }))
            .await
            .unwrap();
        let second = accept_plan(State(state.clone()), Json(PlanLedgerRequest { plan })).await;
        assert!(matches!(second, Err(AppError::Conflict { .. })));

        let snapshot = ledger_snapshot(State(state)).await;
        assert_eq!(snapshot.0.balances.get(Issuer::ChaseUr), 5_000);
    }

    #[tokio::test]
    async fn transfer_options_marks_sole_routes() {
        let state = app_state(PointsBalance::new().with(Issuer::BiltRewards, 30_000));
        let response = transfer_options(
            State(state),
            Query(TransferOptionsRequest {
                program: "american_airlines_aadvantage".to_string(),
                points: 25_000,
            }),
        )
        .await
        .unwrap();

        let options = response.0.options;
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].issuer, Issuer::BiltRewards);
        assert!(options[0].sole_route);
        assert!(options[0].can_cover);
    }

    #[tokio::test]
    async fn transfer_options_unknown_program_is_bad_request() {
        let state = app_state(PointsBalance::new());
        let result = transfer_options(
            State(state),
            Query(TransferOptionsRequest {
                program: "sky_pesos".to_string(),
                points: 1,
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn guide_endpoint_renders_markdown() {
        let state = app_state(PointsBalance::new().with(Issuer::ChaseUr, 30_000));
        let priced = price_plans(
            State(state),
            Json(PriceRequest {
                flight: united_offer(),
                hotel: None,
                preferred_issuers: vec![],
                limit: None,
            }),
        )
        .await
        .unwrap();

        let guide = booking_guide(Json(GuideRequest {
            plan: priced.0.plans[0].clone(),
        }))
        .await;
        assert!(guide.0.markdown.contains("# Booking Guide"));
    }

    #[tokio::test]
    async fn flight_search_validates_codes_and_dates() {
        let state = app_state(PointsBalance::new());
        let result = search_flights(
            State(state.clone()),
            Query(FlightSearchRequest {
                origin: "NEWYORK".into(),
                destination: "HNL".into(),
                departure_date: "2026-04-15".parse().unwrap(),
                return_date: "2026-04-22".parse().unwrap(),
                travelers: None,
                flex_days: None,
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));

        let result = search_flights(
            State(state),
            Query(FlightSearchRequest {
                origin: "JFK".into(),
                destination: "HNL".into(),
                departure_date: "2026-04-22".parse().unwrap(),
                return_date: "2026-04-15".parse().unwrap(),
                travelers: None,
                flex_days: None,
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn mock_flight_search_returns_offers() {
        let state = app_state(PointsBalance::new());
        let response = search_flights(
            State(state),
            Query(FlightSearchRequest {
                origin: "JFK".into(),
                destination: "HNL".into(),
                departure_date: "2026-04-15".parse().unwrap(),
                return_date: "2026-04-22".parse().unwrap(),
                travelers: None,
                flex_days: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.0.offers.len(), 3);
    }
}
