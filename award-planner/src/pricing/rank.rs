//! Plan ranking.
//!
//! Orders trip plans by a deterministic policy so identical inputs
//! always present identically: best blended cents-per-point first, then
//! less cash, then fewer points, then original assembly order.

use std::cmp::Ordering;

use crate::domain::TripPlan;

/// Rank plans best-first and keep at most `limit`.
///
/// The comparison is a total order (`f64::total_cmp` on CPP, with
/// no-CPP plans sorted after all CPP-bearing plans), and the sort is
/// stable, so ranking is reproducible and running it twice on the same
/// input yields the same output.
pub fn rank_plans(mut plans: Vec<TripPlan>, limit: usize) -> Vec<TripPlan> {
    plans.sort_by(compare_plans);
    plans.truncate(limit);
    plans
}

/// Ranking key: CPP descending, cash ascending, points ascending.
fn compare_plans(a: &TripPlan, b: &TripPlan) -> Ordering {
    let by_cpp = match (a.cpp, b.cpp) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        // Plans without a CPP (cash-only or valueless) rank below every
        // plan that has one; they never enter a division.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_cpp
        .then(a.total_cash.cmp(&b.total_cash))
        .then(a.total_points.cmp(&b.total_points))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    use crate::domain::{
        FlightOffer, FlightSegment, HotelFunding, Issuer, Program, UsdCents,
    };
    use std::collections::BTreeMap;

    fn flight() -> FlightOffer {
        FlightOffer::new(
            Program::UnitedMileageplus,
            25_000,
            UsdCents::ZERO,
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

    fn plan_strategy() -> impl Strategy<Value = TripPlan> {
        (
            prop::option::weighted(0.9, 1u32..500),
            0u64..100_000,
            1u64..200_000,
        )
            .prop_map(|(cpp_centis, cash, points)| TripPlan {
                flight: flight(),
                hotel: None,
                flight_issuer: Issuer::ChaseUr,
                hotel_funding: HotelFunding::None,
                points_by_issuer: BTreeMap::from([(Issuer::ChaseUr, points)]),
                total_points: points,
                total_cash: UsdCents::new(cash),
                cpp: cpp_centis.map(|c| c as f64 / 100.0),
                label: String::new(),
            })
    }

    fn plans_strategy() -> impl Strategy<Value = Vec<TripPlan>> {
        prop::collection::vec(plan_strategy(), 0..20)
    }

    fn key(plan: &TripPlan) -> (bool, f64, u64, u64) {
        // no-CPP plans last; negate CPP for descending order
        (
            plan.cpp.is_none(),
            -plan.cpp.unwrap_or(0.0),
            plan.total_cash.as_cents(),
            plan.total_points,
        )
    }

    proptest! {
        #[test]
        fn output_is_sorted(plans in plans_strategy()) {
            let ranked = rank_plans(plans, usize::MAX);
            for window in ranked.windows(2) {
                let a = key(&window[0]);
                let b = key(&window[1]);
                prop_assert!(a.partial_cmp(&b) != Some(std::cmp::Ordering::Greater));
            }
        }

        #[test]
        fn limit_is_respected(plans in plans_strategy(), limit in 0usize..10) {
            let len = plans.len();
            let ranked = rank_plans(plans, limit);
            prop_assert_eq!(ranked.len(), len.min(limit));
        }

        #[test]
        fn ranking_is_idempotent(plans in plans_strategy()) {
            let once = rank_plans(plans, usize::MAX);
            let twice = rank_plans(once.clone(), usize::MAX);
            let once_keys: Vec<_> = once.iter().map(key).collect();
            let twice_keys: Vec<_> = twice.iter().map(key).collect();
            prop_assert_eq!(once_keys, twice_keys);
        }
    }
}
