//! Trip cost calculation.
//!
//! Turns one flight offer and an optional hotel offer into every
//! feasible funding combination, each priced to exact source points per
//! issuer, residual cash, and a blended cents-per-point figure. The
//! calculator performs no issuer-specific branching: which issuer can
//! reach which program, and at what rate, is registry data.

use std::collections::BTreeMap;

use crate::domain::{FlightOffer, HotelFunding, HotelOffer, Issuer, Program, TripPlan, UsdCents};
use crate::ledger::PointsBalance;
use crate::registry::{TransferRegistry, UnsupportedTransferError, ValuationTable};

/// The planning engine: prices offer combinations against reference
/// data and a balance snapshot.
///
/// Pricing is read-only: it checks the snapshot but never reserves
/// points, so it is safe to run from concurrent read paths while the
/// ledger itself stays behind a lock.
#[derive(Debug, Clone, Copy)]
pub struct TripCostCalculator<'a> {
    registry: &'a TransferRegistry,
    valuations: &'a ValuationTable,
}

/// One way to fund the hotel leg of a combination.
#[derive(Debug, Clone, Copy)]
enum HotelChoice {
    NoHotel,
    Points { issuer: Issuer, required: u64 },
    Cash { price: UsdCents },
}

impl<'a> TripCostCalculator<'a> {
    pub fn new(registry: &'a TransferRegistry, valuations: &'a ValuationTable) -> Self {
        Self {
            registry,
            valuations,
        }
    }

    /// Price every feasible funding combination for the given offers.
    ///
    /// Combinations the balance snapshot cannot cover are silently
    /// excluded: an empty result means "not affordable right now", which
    /// is a normal outcome, not a failure. When `preferred_issuers` is
    /// non-empty, equally priced combinations are ordered by the earliest
    /// preferred issuer they use; feasibility is unaffected.
    ///
    /// # Errors
    ///
    /// Returns `Err` only when an offer's program is unreachable from
    /// every issuer (and, for hotels, there is no cash fallback): the
    /// "no award option found" case.
    pub fn price(
        &self,
        flight: &FlightOffer,
        hotel: Option<&HotelOffer>,
        balances: &PointsBalance,
        preferred_issuers: &[Issuer],
    ) -> Result<Vec<TripPlan>, UnsupportedTransferError> {
        let flight_fundings = self.flight_fundings(flight)?;
        let hotel_choices = self.hotel_choices(hotel)?;

        let mut plans = Vec::new();
        for &(flight_issuer, flight_required) in &flight_fundings {
            for &choice in &hotel_choices {
                if let Some(plan) =
                    self.assemble(flight, hotel, flight_issuer, flight_required, choice, balances)
                {
                    plans.push(plan);
                }
            }
        }

        tracing::debug!(
            candidates = flight_fundings.len() * hotel_choices.len(),
            feasible = plans.len(),
            "priced offer combinations"
        );

        if !preferred_issuers.is_empty() {
            apply_issuer_preference(&mut plans, preferred_issuers);
        }
        Ok(plans)
    }

    /// Re-price an existing plan with one or both offers substituted.
    ///
    /// The untouched leg is held constant. The original plan is only
    /// read for its offers; its ledger reservations, if any, are not
    /// consulted or disturbed. Returns fresh plans; the caller decides
    /// whether to supersede the original.
    pub fn reprice(
        &self,
        original: &TripPlan,
        substitute_flight: Option<&FlightOffer>,
        substitute_hotel: Option<&HotelOffer>,
        balances: &PointsBalance,
        preferred_issuers: &[Issuer],
    ) -> Result<Vec<TripPlan>, UnsupportedTransferError> {
        let flight = substitute_flight.unwrap_or(&original.flight);
        let hotel = substitute_hotel.or(original.hotel.as_ref());
        self.price(flight, hotel, balances, preferred_issuers)
    }

    /// Issuers able to fund the flight award, with the source points
    /// each would need. Ordered best ratio first (registry order).
    fn flight_fundings(
        &self,
        flight: &FlightOffer,
    ) -> Result<Vec<(Issuer, u64)>, UnsupportedTransferError> {
        let options = self.registry.find_transfer_options(flight.program());
        if options.is_empty() {
            return Err(UnsupportedTransferError::Unreachable {
                program: flight.program(),
            });
        }
        let mut fundings = Vec::with_capacity(options.len());
        for option in options {
            // Listed options always convert; route through the registry
            // anyway so the formula lives in exactly one place.
            let Ok(required) =
                self.registry
                    .points_required(flight.program(), flight.miles(), option.issuer)
            else {
                continue;
            };
            fundings.push((option.issuer, required));
        }
        Ok(fundings)
    }

    /// All ways to pay for the hotel leg. Paying cash is always one of
    /// the options when the offer has a cash price.
    fn hotel_choices(
        &self,
        hotel: Option<&HotelOffer>,
    ) -> Result<Vec<HotelChoice>, UnsupportedTransferError> {
        let Some(hotel) = hotel else {
            return Ok(vec![HotelChoice::NoHotel]);
        };

        let mut choices = Vec::new();
        if let Some(points_price) = hotel.points_price() {
            for option in self.registry.find_transfer_options(points_price.program()) {
                let Ok(required) = self.registry.points_required(
                    points_price.program(),
                    points_price.points(),
                    option.issuer,
                ) else {
                    continue;
                };
                choices.push(HotelChoice::Points {
                    issuer: option.issuer,
                    required,
                });
            }
        }
        if let Some(price) = hotel.cash_price() {
            choices.push(HotelChoice::Cash { price });
        }

        if choices.is_empty() {
            // Safe: an unpriced hotel is rejected at construction, so an
            // empty choice list means a points price nobody can reach.
            let program = hotel.points_price().unwrap().program();
            return Err(UnsupportedTransferError::Unreachable { program });
        }
        Ok(choices)
    }

    /// Price a single funding combination, or `None` when the balance
    /// snapshot cannot cover it.
    fn assemble(
        &self,
        flight: &FlightOffer,
        hotel: Option<&HotelOffer>,
        flight_issuer: Issuer,
        flight_required: u64,
        choice: HotelChoice,
        balances: &PointsBalance,
    ) -> Option<TripPlan> {
        let mut points_by_issuer: BTreeMap<Issuer, u64> = BTreeMap::new();
        points_by_issuer.insert(flight_issuer, flight_required);

        let mut total_cash = flight.taxes();
        let hotel_funding = match choice {
            HotelChoice::NoHotel => HotelFunding::None,
            HotelChoice::Points { issuer, required } => {
                // Both legs may draw on the same issuer; sum before the
                // feasibility check so the combined draw is what is
                // tested against the balance.
                *points_by_issuer.entry(issuer).or_insert(0) += required;
                HotelFunding::Points { issuer }
            }
            HotelChoice::Cash { price } => {
                total_cash = total_cash + price;
                HotelFunding::Cash
            }
        };

        // Non-mutating feasibility check against the snapshot.
        let feasible = points_by_issuer
            .iter()
            .all(|(&issuer, &amount)| balances.get(issuer) >= amount);
        if !feasible {
            return None;
        }

        let total_points: u64 = points_by_issuer.values().sum();

        let mut value_cents =
            self.leg_value_cents(flight.program(), flight.miles(), flight.cash_value());
        if let (HotelFunding::Points { .. }, Some(hotel)) = (hotel_funding, hotel) {
            // Safe: a Points funding choice implies a points price.
            let points_price = hotel.points_price().unwrap();
            value_cents += self.leg_value_cents(
                points_price.program(),
                points_price.points(),
                hotel.cash_price(),
            );
        }

        // Zero points cannot happen here (the flight is always an
        // award), but a plan whose value terms were all omitted gets no
        // CPP rather than a misleading zero.
        let cpp = if total_points > 0 && value_cents > 0.0 {
            Some(value_cents / total_points as f64)
        } else {
            None
        };

        Some(TripPlan {
            label: funding_label(flight, hotel, flight_issuer, hotel_funding),
            flight: flight.clone(),
            hotel: hotel.cloned(),
            flight_issuer,
            hotel_funding,
            points_by_issuer,
            total_points,
            total_cash,
            cpp,
        })
    }

    /// Cash value of one points-covered leg, in cents: the offer's own
    /// disclosed cash-equivalent when available, otherwise the baseline
    /// valuation. A program with no recorded baseline contributes
    /// nothing; the fallback term is simply omitted.
    fn leg_value_cents(
        &self,
        program: Program,
        target_points: u64,
        disclosed: Option<UsdCents>,
    ) -> f64 {
        if let Some(value) = disclosed {
            return value.as_cents() as f64;
        }
        match self.valuations.baseline_cpp(program) {
            Ok(cpp) => cpp * target_points as f64,
            Err(err) => {
                tracing::debug!(%err, "no baseline valuation, omitting fallback term");
                0.0
            }
        }
    }
}

/// Stable-sort plans so combinations funded by earlier-preferred issuers
/// come first. Equal-priced combinations are exactly the ones this can
/// reorder; everything else is re-sorted by the ranker anyway.
fn apply_issuer_preference(plans: &mut [TripPlan], preferred: &[Issuer]) {
    let rank = |issuer: Issuer| {
        preferred
            .iter()
            .position(|&p| p == issuer)
            .unwrap_or(preferred.len())
    };
    plans.sort_by_key(|plan| {
        let hotel_rank = match plan.hotel_funding {
            HotelFunding::Points { issuer } => rank(issuer),
            _ => preferred.len(),
        };
        (rank(plan.flight_issuer), hotel_rank)
    });
}

/// Short human-readable funding summary for display layers.
fn funding_label(
    flight: &FlightOffer,
    hotel: Option<&HotelOffer>,
    flight_issuer: Issuer,
    hotel_funding: HotelFunding,
) -> String {
    let flight_part = format!("{} → {}", flight_issuer, flight.program());
    match (hotel, hotel_funding) {
        (None, _) | (_, HotelFunding::None) => flight_part,
        (Some(_), HotelFunding::Cash) => format!("{flight_part} + cash hotel"),
        (Some(hotel), HotelFunding::Points { issuer }) => {
            // Safe: a Points funding choice implies a points price.
            let program = hotel.points_price().unwrap().program();
            format!("{flight_part} + {issuer} → {program}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FlightSegment;
    use crate::registry::{builtin_registry, builtin_valuations};
    use chrono::NaiveDate;

    fn segment(origin: &str, destination: &str) -> FlightSegment {
        FlightSegment {
            origin: origin.into(),
            destination: destination.into(),
            departure: "2026-04-15T08:00:00".into(),
            arrival: "2026-04-15T14:00:00".into(),
            airline: "UA".into(),
            flight_number: "UA101".into(),
        }
    }

    fn united_flight(miles: u64) -> FlightOffer {
        FlightOffer::new(
            Program::UnitedMileageplus,
            miles,
            UsdCents::new(1120),
            vec![segment("JFK", "HNL")],
            vec![segment("HNL", "JFK")],
        )
        .unwrap()
    }

    fn aa_flight(miles: u64) -> FlightOffer {
        FlightOffer::new(
            Program::AmericanAirlinesAadvantage,
            miles,
            UsdCents::new(1120),
            vec![segment("JFK", "OGG")],
            vec![segment("OGG", "JFK")],
        )
        .unwrap()
    }

    fn marriott_hotel() -> HotelOffer {
        HotelOffer::new(
            "Marriott Waikiki",
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
            NaiveDate::from_ymd_opt(2026, 4, 22).unwrap(),
            Some(crate::domain::PointsPrice::new(Program::MarriottBonvoy, 35_000).unwrap()),
            Some(UsdCents::from_dollars(400)),
        )
        .unwrap()
    }

    fn calc_fixtures() -> (TransferRegistry, ValuationTable) {
        (builtin_registry(), builtin_valuations())
    }

    #[test]
    fn chase_funds_united_flight_exactly() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);
        let balances = PointsBalance::new().with(Issuer::ChaseUr, 30_000);

        let plans = calc
            .price(&united_flight(25_000), None, &balances, &[])
            .unwrap();

        assert_eq!(plans.len(), 1);
        let plan = &plans[0];
        assert_eq!(plan.flight_issuer, Issuer::ChaseUr);
        assert_eq!(plan.points_for(Issuer::ChaseUr), 25_000);
        // Cash is the award's disclosed fees only.
        assert_eq!(plan.total_cash, UsdCents::new(1120));
        assert_eq!(plan.hotel_funding, HotelFunding::None);
    }

    #[test]
    fn insufficient_balance_is_empty_not_error() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);
        let balances = PointsBalance::new().with(Issuer::ChaseUr, 10_000);

        let plans = calc
            .price(&united_flight(25_000), None, &balances, &[])
            .unwrap();
        assert!(plans.is_empty());
    }

    #[test]
    fn bilt_is_the_only_route_to_aa() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);
        let balances = PointsBalance::new()
            .with(Issuer::ChaseUr, 500_000)
            .with(Issuer::AmexMr, 500_000)
            .with(Issuer::CitiTy, 500_000)
            .with(Issuer::CapitalOneMiles, 500_000)
            .with(Issuer::BiltRewards, 30_000);

        let plans = calc.price(&aa_flight(25_000), None, &balances, &[]).unwrap();

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].flight_issuer, Issuer::BiltRewards);
        // 1:1, so the source points equal the miles price.
        assert_eq!(plans[0].points_for(Issuer::BiltRewards), 25_000);
    }

    #[test]
    fn aa_without_bilt_balance_is_infeasible() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);
        let balances = PointsBalance::new().with(Issuer::ChaseUr, 500_000);

        let plans = calc.price(&aa_flight(25_000), None, &balances, &[]).unwrap();
        assert!(plans.is_empty());
    }

    #[test]
    fn unreachable_program_is_an_error() {
        // A registry with no route to United at all.
        let registry = crate::registry::RegistryBuilder::new()
            .add(Issuer::BiltRewards, Program::AlaskaMileagePlan, 1, 1, 1000)
            .build()
            .unwrap();
        let valuations = builtin_valuations();
        let calc = TripCostCalculator::new(&registry, &valuations);
        let balances = PointsBalance::new().with(Issuer::ChaseUr, 100_000);

        let result = calc.price(&united_flight(25_000), None, &balances, &[]);
        assert_eq!(
            result,
            Err(UnsupportedTransferError::Unreachable {
                program: Program::UnitedMileageplus
            })
        );
    }

    #[test]
    fn hotel_cash_option_always_included() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);
        // Amex can fund Marriott; cash is the alternative.
        let balances = PointsBalance::new()
            .with(Issuer::ChaseUr, 30_000)
            .with(Issuer::AmexMr, 40_000);

        let hotel = marriott_hotel();
        let plans = calc
            .price(&united_flight(25_000), Some(&hotel), &balances, &[])
            .unwrap();

        let has_amex_points_hotel = plans.iter().any(|p| {
            p.hotel_funding
                == HotelFunding::Points {
                    issuer: Issuer::AmexMr,
                }
        });
        let has_cash_hotel = plans
            .iter()
            .any(|p| p.hotel_funding == HotelFunding::Cash);
        assert!(has_amex_points_hotel);
        assert!(has_cash_hotel);

        // The cash-hotel plan owes fees plus $400.
        let cash_plan = plans
            .iter()
            .find(|p| p.hotel_funding == HotelFunding::Cash)
            .unwrap();
        assert_eq!(
            cash_plan.total_cash,
            UsdCents::new(1120) + UsdCents::from_dollars(400)
        );
        assert_eq!(cash_plan.points_for(Issuer::AmexMr), 0);
    }

    #[test]
    fn same_issuer_legs_are_summed_before_feasibility() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);

        // Chase can fund both the United flight and the Marriott hotel,
        // but 50k does not cover 25k + 35k.
        let balances = PointsBalance::new().with(Issuer::ChaseUr, 50_000);
        let hotel = marriott_hotel();
        let plans = calc
            .price(&united_flight(25_000), Some(&hotel), &balances, &[])
            .unwrap();

        assert!(!plans.iter().any(|p| {
            p.flight_issuer == Issuer::ChaseUr
                && p.hotel_funding
                    == HotelFunding::Points {
                        issuer: Issuer::ChaseUr,
                    }
        }));

        // With 60k the double-Chase combination appears.
        let balances = PointsBalance::new().with(Issuer::ChaseUr, 60_000);
        let plans = calc
            .price(&united_flight(25_000), Some(&hotel), &balances, &[])
            .unwrap();
        let double_chase = plans
            .iter()
            .find(|p| {
                p.flight_issuer == Issuer::ChaseUr
                    && p.hotel_funding
                        == HotelFunding::Points {
                            issuer: Issuer::ChaseUr,
                        }
            })
            .unwrap();
        assert_eq!(double_chase.points_for(Issuer::ChaseUr), 60_000);
    }

    #[test]
    fn cpp_uses_disclosed_value_when_available() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);
        let balances = PointsBalance::new().with(Issuer::ChaseUr, 30_000);

        let flight = united_flight(25_000).with_cash_value(UsdCents::from_dollars(500));
        let plans = calc.price(&flight, None, &balances, &[]).unwrap();

        // 50,000 cents over 25,000 points = 2.0 cpp.
        let cpp = plans[0].cpp.unwrap();
        assert!((cpp - 2.0).abs() < 1e-9);
    }

    #[test]
    fn cpp_falls_back_to_baseline_valuation() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);
        let balances = PointsBalance::new().with(Issuer::ChaseUr, 30_000);

        let plans = calc
            .price(&united_flight(25_000), None, &balances, &[])
            .unwrap();

        // Baseline United valuation is 1.35 cpp; 1:1 transfer keeps it.
        let cpp = plans[0].cpp.unwrap();
        assert!((cpp - 1.35).abs() < 1e-9);
    }

    #[test]
    fn cpp_is_positive_and_finite_for_all_returned_plans() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);
        let balances = PointsBalance::new()
            .with(Issuer::ChaseUr, 200_000)
            .with(Issuer::AmexMr, 200_000)
            .with(Issuer::BiltRewards, 200_000);

        let hotel = marriott_hotel();
        let plans = calc
            .price(&united_flight(25_000), Some(&hotel), &balances, &[])
            .unwrap();
        assert!(!plans.is_empty());
        for plan in &plans {
            let cpp = plan.cpp.expect("points plans carry a CPP");
            assert!(cpp.is_finite() && cpp > 0.0);
        }
    }

    #[test]
    fn preferred_issuers_reorder_equal_priced_plans() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);
        // Chase and Bilt both fund United at 1:1, identical pricing.
        let balances = PointsBalance::new()
            .with(Issuer::ChaseUr, 30_000)
            .with(Issuer::BiltRewards, 30_000);

        let plans = calc
            .price(&united_flight(25_000), None, &balances, &[])
            .unwrap();
        assert_eq!(plans[0].flight_issuer, Issuer::ChaseUr);

        let plans = calc
            .price(
                &united_flight(25_000),
                None,
                &balances,
                &[Issuer::BiltRewards],
            )
            .unwrap();
        assert_eq!(plans[0].flight_issuer, Issuer::BiltRewards);
    }

    #[test]
    fn preference_does_not_change_feasibility() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);
        let balances = PointsBalance::new().with(Issuer::ChaseUr, 30_000);

        // Preferring Bilt cannot conjure a Bilt plan out of a zero
        // balance.
        let plans = calc
            .price(
                &united_flight(25_000),
                None,
                &balances,
                &[Issuer::BiltRewards],
            )
            .unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].flight_issuer, Issuer::ChaseUr);
    }

    #[test]
    fn reprice_swaps_flight_and_keeps_hotel() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);
        let balances = PointsBalance::new()
            .with(Issuer::AmexMr, 100_000)
            .with(Issuer::BiltRewards, 100_000)
            .with(Issuer::ChaseUr, 100_000);

        let hotel = marriott_hotel();
        let original = calc
            .price(&united_flight(25_000), Some(&hotel), &balances, &[])
            .unwrap()
            .into_iter()
            .next()
            .unwrap();

        let substitute = aa_flight(20_000);
        let replacements = calc
            .reprice(&original, Some(&substitute), None, &balances, &[])
            .unwrap();

        assert!(!replacements.is_empty());
        for plan in &replacements {
            assert_eq!(plan.flight.program(), Program::AmericanAirlinesAadvantage);
            // Hotel leg held constant.
            assert_eq!(plan.hotel.as_ref().unwrap().name(), "Marriott Waikiki");
        }
        // The original plan instance is untouched.
        assert_eq!(original.flight.program(), Program::UnitedMileageplus);
    }

    #[test]
    fn reprice_swaps_hotel_and_keeps_flight() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);
        let balances = PointsBalance::new().with(Issuer::ChaseUr, 100_000);

        let original = calc
            .price(&united_flight(25_000), None, &balances, &[])
            .unwrap()
            .into_iter()
            .next()
            .unwrap();

        let hotel = HotelOffer::new(
            "Grand Hyatt",
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
            NaiveDate::from_ymd_opt(2026, 4, 22).unwrap(),
            Some(crate::domain::PointsPrice::new(Program::WorldOfHyatt, 20_000).unwrap()),
            None,
        )
        .unwrap();

        let replacements = calc
            .reprice(&original, None, Some(&hotel), &balances, &[])
            .unwrap();
        assert!(!replacements.is_empty());
        for plan in &replacements {
            assert_eq!(plan.flight.program(), Program::UnitedMileageplus);
            assert!(plan.hotel.is_some());
        }
    }

    #[test]
    fn points_only_hotel_in_unreachable_program_is_an_error() {
        // Registry that reaches United but not Hyatt.
        let registry = crate::registry::RegistryBuilder::new()
            .add(Issuer::ChaseUr, Program::UnitedMileageplus, 1, 1, 1000)
            .build()
            .unwrap();
        let valuations = builtin_valuations();
        let calc = TripCostCalculator::new(&registry, &valuations);
        let balances = PointsBalance::new().with(Issuer::ChaseUr, 100_000);

        let hotel = HotelOffer::new(
            "Grand Hyatt",
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
            NaiveDate::from_ymd_opt(2026, 4, 22).unwrap(),
            Some(crate::domain::PointsPrice::new(Program::WorldOfHyatt, 20_000).unwrap()),
            None,
        )
        .unwrap();

        let result = calc.price(&united_flight(25_000), Some(&hotel), &balances, &[]);
        assert_eq!(
            result,
            Err(UnsupportedTransferError::Unreachable {
                program: Program::WorldOfHyatt
            })
        );
    }

    #[test]
    fn amex_hilton_ratio_flows_through_pricing() {
        let (registry, valuations) = calc_fixtures();
        let calc = TripCostCalculator::new(&registry, &valuations);
        let balances = PointsBalance::new()
            .with(Issuer::ChaseUr, 30_000)
            .with(Issuer::AmexMr, 25_000);

        let hotel = HotelOffer::new(
            "Hilton Garden Inn",
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
            NaiveDate::from_ymd_opt(2026, 4, 22).unwrap(),
            Some(crate::domain::PointsPrice::new(Program::HiltonHonors, 40_000).unwrap()),
            None,
        )
        .unwrap();

        let plans = calc
            .price(&united_flight(25_000), Some(&hotel), &balances, &[])
            .unwrap();

        // 40k Hilton costs only 20k MR at 1:2.
        let hilton_plan = plans
            .iter()
            .find(|p| {
                p.hotel_funding
                    == HotelFunding::Points {
                        issuer: Issuer::AmexMr,
                    }
            })
            .unwrap();
        assert_eq!(hilton_plan.points_for(Issuer::AmexMr), 20_000);
        assert_eq!(hilton_plan.total_points, 45_000);
    }
}
