//! Step-by-step booking guide rendering.
//!
//! Turns a selected trip plan into a markdown redemption guide: which
//! points to transfer where, which award to book first, and in what
//! order. Pure string building; persistence and display belong to the
//! caller.

use std::fmt::Write as _;

use crate::domain::{HotelFunding, Issuer, Program, TripPlan};

/// Issuer transfer-portal URL for the guide's transfer step.
fn transfer_url(issuer: Issuer) -> &'static str {
    match issuer {
        Issuer::ChaseUr => "https://creditcards.chase.com/ultimate-rewards/",
        Issuer::AmexMr => {
            "https://www.americanexpress.com/en-us/rewards/membership-rewards/partners/transfer/"
        }
        Issuer::CitiTy => "https://www.citi.com/credit-cards/citi-thankyou-rewards/",
        Issuer::CapitalOneMiles => "https://capital-one-travel.com/rewards",
        Issuer::BiltRewards => "https://www.biltrewards.com/points/transfer",
    }
}

/// Program award-booking URL, with a generic fallback for programs that
/// have no stable deep link.
fn award_booking_url(program: Program) -> &'static str {
    match program {
        Program::UnitedMileageplus => "https://www.united.com/en/us/book-flight/united-awards",
        Program::AmericanAirlinesAadvantage => {
            "https://www.aa.com/aadvantage-program/miles/redeem/award-travel"
        }
        Program::DeltaSkymiles => {
            "https://www.delta.com/us/en/skymiles/redeeming-miles/book-award-travel"
        }
        Program::SouthwestRapidRewards => "https://www.southwest.com/rapidrewards/",
        Program::AlaskaMileagePlan => {
            "https://www.alaskaair.com/content/mileage-plan/use-miles/award-travel"
        }
        Program::BritishAirwaysAvios => {
            "https://www.britishairways.com/en-us/executive-club/spending-avios/redeeming-avios"
        }
        Program::AirFranceFlyingBlue => {
            "https://wwws.airfrance.us/information/fidelite/blue-business"
        }
        Program::AirCanadaAeroplan => {
            "https://www.aircanada.com/us/en/aco/home/aeroplan/redeem-miles.html"
        }
        Program::SingaporeKrisflyer => {
            "https://www.singaporeair.com/en_UK/us/ppsclub-krisflyer/krisflyer/award/"
        }
        Program::EmiratesSkywards => {
            "https://www.emirates.com/us/english/skywards/use-your-miles/award-flights/"
        }
        Program::TurkishMilesSmiles => "https://www.turkishairlines.com/en-us/miles-smiles/",
        Program::VirginAtlanticFlyingClub => {
            "https://www.virgin-atlantic.com/us/en/flying-club/spend-miles.html"
        }
        Program::WorldOfHyatt => {
            "https://world.hyatt.com/content/gp/en/rewards/free-nights.html"
        }
        Program::MarriottBonvoy => "https://www.marriott.com/bonvoy/rewards/points/redeem.mi",
        Program::HiltonHonors => "https://www.hilton.com/en/hilton-honors/redeem/",
        _ => "https://your-loyalty-program.com/awards",
    }
}

/// Render the booking guide for a selected plan as markdown.
pub fn render_booking_guide(plan: &TripPlan) -> String {
    let mut md = String::new();
    let flight = &plan.flight;

    let _ = writeln!(md, "# Booking Guide: {}", plan.label);
    md.push('\n');
    md.push_str("## Overview\n");
    let _ = writeln!(md, "- **Destination**: {}", flight.destination());
    if let Some(first) = flight.outbound().first() {
        let ret = flight
            .inbound()
            .first()
            .map(|s| date_part(&s.departure))
            .unwrap_or("one-way");
        let _ = writeln!(
            md,
            "- **Travel Dates**: {} → {}",
            date_part(&first.departure),
            ret
        );
    }
    if let Some(hotel) = &plan.hotel {
        let _ = writeln!(
            md,
            "- **Hotel**: {} ({} → {})",
            hotel.name(),
            hotel.check_in(),
            hotel.check_out()
        );
    }
    let _ = writeln!(md, "- **Total points**: {}", plan.total_points);
    let _ = writeln!(md, "- **Total cash**: {}", plan.total_cash);
    if let Some(cpp) = plan.cpp {
        let _ = writeln!(md, "- **Blended CPP**: {cpp:.3}¢");
    }
    md.push_str("\n---\n\n");

    // Step 1: transfers, one block per funding issuer.
    md.push_str("## Step 1: Transfer Points\n\n");
    if plan.uses_points() {
        for (&issuer, &points) in &plan.points_by_issuer {
            let _ = writeln!(md, "### {}", issuer.display_name());
            let _ = writeln!(md, "- **Points to transfer**: {points}");
            let _ = writeln!(md, "- **Transfer portal**: {}", transfer_url(issuer));
            md.push('\n');
        }
        md.push_str(
            "> ⚠️ Transfer points BEFORE booking the award — transfers are often instant\n\
             > but some programs can take 24–48 hours. Do not book until the points land\n\
             > in the loyalty account.\n\n",
        );
    } else {
        md.push_str("No transfers needed — this plan is paid in cash.\n\n");
    }
    md.push_str("---\n\n");

    // Step 2: the award flight.
    md.push_str("## Step 2: Book the Award Flight\n\n");
    let _ = writeln!(md, "**Program**: {}", flight.program());
    let _ = writeln!(md, "**Miles required**: {}", flight.miles());
    let _ = writeln!(md, "**Cash taxes/fees**: {}", flight.taxes());
    md.push('\n');
    md.push_str("### Outbound\n");
    for seg in flight.outbound() {
        let _ = writeln!(
            md,
            "- {} {}: {} → {}  {} → {}",
            seg.airline,
            seg.flight_number,
            seg.origin,
            seg.destination,
            time_part(&seg.departure),
            time_part(&seg.arrival)
        );
    }
    if !flight.inbound().is_empty() {
        md.push_str("\n### Return\n");
        for seg in flight.inbound() {
            let _ = writeln!(
                md,
                "- {} {}: {} → {}  {} → {}",
                seg.airline,
                seg.flight_number,
                seg.origin,
                seg.destination,
                time_part(&seg.departure),
                time_part(&seg.arrival)
            );
        }
    }
    md.push('\n');
    let _ = writeln!(
        md,
        "**Award booking URL**: {}",
        award_booking_url(flight.program())
    );
    md.push_str(
        "\n> 💡 Search by exact flight numbers if possible. Call the airline's award\n\
         > desk if the website shows no availability — phone agents often see more.\n\n",
    );
    md.push_str("---\n\n");

    // Step 3: the hotel, when the plan has one.
    if let Some(hotel) = &plan.hotel {
        md.push_str("## Step 3: Book the Hotel\n\n");
        let _ = writeln!(md, "**Hotel**: {}", hotel.name());
        let _ = writeln!(
            md,
            "**Dates**: {} → {}",
            hotel.check_in(),
            hotel.check_out()
        );
        match plan.hotel_funding {
            HotelFunding::Points { .. } => {
                // Safe: a points-funded hotel leg implies a points price.
                let price = hotel.points_price().unwrap();
                let _ = writeln!(md, "**Program**: {}", price.program());
                let _ = writeln!(md, "**Points**: {}", price.points());
                let _ = writeln!(
                    md,
                    "**Redemption URL**: {}",
                    award_booking_url(price.program())
                );
            }
            HotelFunding::Cash => {
                if let Some(price) = hotel.cash_price() {
                    let _ = writeln!(md, "**Cash rate**: {price}");
                }
                md.push_str("Book directly or through your preferred travel site.\n");
            }
            HotelFunding::None => {}
        }
        md.push_str(
            "\n> 💡 Book the hotel AFTER confirming your flights — award hotel bookings\n\
             > are generally more flexible to cancel.\n\n",
        );
        md.push_str("---\n\n");
    }

    md.push_str("## Order of Operations\n\n");
    md.push_str("1. Initiate point transfers from the issuer portals (Step 1).\n");
    md.push_str("2. Wait for points to land in the loyalty accounts.\n");
    md.push_str("3. Book the award flight first — availability is the scarce resource.\n");
    if plan.hotel.is_some() {
        md.push_str("4. Book the hotel.\n");
        md.push_str("5. Pay the cash taxes and fees with your best travel card.\n");
    } else {
        md.push_str("4. Pay the cash taxes and fees with your best travel card.\n");
    }

    md
}

/// "2026-04-15T08:00:00" → "2026-04-15"; lenient on short strings.
fn date_part(datetime: &str) -> &str {
    datetime.get(..10).unwrap_or(datetime)
}

/// "2026-04-15T08:00:00" → "08:00"; lenient on short strings.
fn time_part(datetime: &str) -> &str {
    datetime.get(11..16).unwrap_or(datetime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FlightOffer, FlightSegment, HotelOffer, PointsPrice, UsdCents};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn segment(origin: &str, dest: &str, dep: &str, arr: &str) -> FlightSegment {
        FlightSegment {
            origin: origin.into(),
            destination: dest.into(),
            departure: dep.into(),
            arrival: arr.into(),
            airline: "UA".into(),
            flight_number: "UA101".into(),
        }
    }

    fn points_plan() -> TripPlan {
        let flight = FlightOffer::new(
            Program::UnitedMileageplus,
            25_000,
            UsdCents::new(1120),
            vec![segment(
                "JFK",
                "HNL",
                "2026-04-15T08:00:00",
                "2026-04-15T14:00:00",
            )],
            vec![segment(
                "HNL",
                "JFK",
                "2026-04-22T15:00:00",
                "2026-04-22T21:00:00",
            )],
        )
        .unwrap();

        let hotel = HotelOffer::new(
            "Grand Hyatt",
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
            NaiveDate::from_ymd_opt(2026, 4, 22).unwrap(),
            Some(PointsPrice::new(Program::WorldOfHyatt, 20_000).unwrap()),
            None,
        )
        .unwrap();

        TripPlan {
            flight,
            hotel: Some(hotel),
            flight_issuer: Issuer::ChaseUr,
            hotel_funding: HotelFunding::Points {
                issuer: Issuer::ChaseUr,
            },
            points_by_issuer: BTreeMap::from([(Issuer::ChaseUr, 45_000)]),
            total_points: 45_000,
            total_cash: UsdCents::new(1120),
            cpp: Some(1.77),
            label: "chase_ur → united_mileageplus + chase_ur → world_of_hyatt".into(),
        }
    }

    #[test]
    fn guide_walks_through_all_steps() {
        let md = render_booking_guide(&points_plan());

        assert!(md.contains("# Booking Guide:"));
        assert!(md.contains("## Step 1: Transfer Points"));
        assert!(md.contains("Chase Ultimate Rewards"));
        assert!(md.contains("45000"));
        assert!(md.contains("## Step 2: Book the Award Flight"));
        assert!(md.contains("united.com"));
        assert!(md.contains("UA UA101: JFK → HNL  08:00 → 14:00"));
        assert!(md.contains("## Step 3: Book the Hotel"));
        assert!(md.contains("world.hyatt.com"));
        assert!(md.contains("## Order of Operations"));
    }

    #[test]
    fn guide_shows_blended_cpp() {
        let md = render_booking_guide(&points_plan());
        assert!(md.contains("**Blended CPP**: 1.770¢"));
    }

    #[test]
    fn cash_hotel_gets_cash_instructions() {
        let mut plan = points_plan();
        plan.hotel = Some(
            HotelOffer::new(
                "Enchantment Resort",
                NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
                NaiveDate::from_ymd_opt(2026, 4, 22).unwrap(),
                None,
                Some(UsdCents::from_dollars(650)),
            )
            .unwrap(),
        );
        plan.hotel_funding = HotelFunding::Cash;

        let md = render_booking_guide(&plan);
        assert!(md.contains("**Cash rate**: $650.00"));
        assert!(!md.contains("Redemption URL"));
    }

    #[test]
    fn flight_only_plan_skips_hotel_step() {
        let mut plan = points_plan();
        plan.hotel = None;
        plan.hotel_funding = HotelFunding::None;

        let md = render_booking_guide(&plan);
        assert!(!md.contains("## Step 3: Book the Hotel"));
        assert!(md.contains("4. Pay the cash taxes and fees"));
    }
}
