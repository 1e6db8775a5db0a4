//! Built-in transfer-partner and valuation reference data.
//!
//! Mirrors the current US transferable-currency landscape. An external
//! loader can replace these tables with its own pre-parsed records; the
//! builders below are just the default dataset.

use crate::domain::{Issuer, Program, TransferRatio};

use super::partners::{TransferPartner, TransferRegistry};
use super::valuations::{PointValuation, ValuationTable};

/// Fluent builder for assembling a transfer registry row by row.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    partners: Vec<TransferPartner>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a partnership. `from:to` is the transfer ratio and
    /// `min_increment` the smallest transferable block in target points.
    pub fn add(
        mut self,
        issuer: Issuer,
        program: Program,
        from: u32,
        to: u32,
        min_increment: u64,
    ) -> Self {
        // Rows are compile-time constants; a bad one is a programming
        // error, not a runtime condition.
        let ratio = TransferRatio::new(from, to).expect("builtin ratio is positive");
        let partner = TransferPartner::new(issuer, program, ratio, min_increment)
            .expect("builtin partner row is valid");
        self.partners.push(partner);
        self
    }

    pub fn build(self) -> Result<TransferRegistry, super::error::DuplicatePartner> {
        TransferRegistry::new(self.partners)
    }
}

/// The default transfer-partner table.
///
/// Notable facts encoded here rather than in any calculator logic:
/// Bilt is the only issuer that reaches American Airlines, and
/// Amex→Hilton runs at 1:2.
pub fn builtin_registry() -> TransferRegistry {
    use Issuer::*;
    use Program::*;

    RegistryBuilder::new()
        // Chase Ultimate Rewards
        .add(ChaseUr, UnitedMileageplus, 1, 1, 1000)
        .add(ChaseUr, SouthwestRapidRewards, 1, 1, 1000)
        .add(ChaseUr, JetblueTrueblue, 1, 1, 1000)
        .add(ChaseUr, BritishAirwaysAvios, 1, 1, 1000)
        .add(ChaseUr, AirFranceFlyingBlue, 1, 1, 1000)
        .add(ChaseUr, AirCanadaAeroplan, 1, 1, 1000)
        .add(ChaseUr, SingaporeKrisflyer, 1, 1, 1000)
        .add(ChaseUr, EmiratesSkywards, 1, 1, 1000)
        .add(ChaseUr, VirginAtlanticFlyingClub, 1, 1, 1000)
        .add(ChaseUr, WorldOfHyatt, 1, 1, 1000)
        .add(ChaseUr, MarriottBonvoy, 1, 1, 1000)
        .add(ChaseUr, IhgRewards, 1, 1, 1000)
        // Amex Membership Rewards
        .add(AmexMr, DeltaSkymiles, 1, 1, 1000)
        .add(AmexMr, JetblueTrueblue, 5, 4, 250)
        .add(AmexMr, BritishAirwaysAvios, 1, 1, 1000)
        .add(AmexMr, AirFranceFlyingBlue, 1, 1, 1000)
        .add(AmexMr, AirCanadaAeroplan, 1, 1, 1000)
        .add(AmexMr, SingaporeKrisflyer, 1, 1, 1000)
        .add(AmexMr, EmiratesSkywards, 1, 1, 1000)
        .add(AmexMr, VirginAtlanticFlyingClub, 1, 1, 1000)
        .add(AmexMr, CathayAsiaMiles, 1, 1, 1000)
        .add(AmexMr, AviancaLifemiles, 1, 1, 1000)
        .add(AmexMr, HiltonHonors, 1, 2, 1000)
        .add(AmexMr, MarriottBonvoy, 1, 1, 1000)
        .add(AmexMr, ChoicePrivileges, 1, 1, 1000)
        // Citi ThankYou
        .add(CitiTy, AirFranceFlyingBlue, 1, 1, 1000)
        .add(CitiTy, VirginAtlanticFlyingClub, 1, 1, 1000)
        .add(CitiTy, SingaporeKrisflyer, 1, 1, 1000)
        .add(CitiTy, EmiratesSkywards, 1, 1, 1000)
        .add(CitiTy, TurkishMilesSmiles, 1, 1, 1000)
        .add(CitiTy, AviancaLifemiles, 1, 1, 1000)
        .add(CitiTy, CathayAsiaMiles, 1, 1, 1000)
        .add(CitiTy, JetblueTrueblue, 1, 1, 1000)
        .add(CitiTy, ThaiAirwaysRoyalOrchid, 1, 1, 1000)
        .add(CitiTy, WyndhamRewards, 1, 1, 1000)
        .add(CitiTy, ChoicePrivileges, 1, 2, 1000)
        // Capital One Miles
        .add(CapitalOneMiles, AirFranceFlyingBlue, 1, 1, 1000)
        .add(CapitalOneMiles, BritishAirwaysAvios, 1, 1, 1000)
        .add(CapitalOneMiles, TurkishMilesSmiles, 1, 1, 1000)
        .add(CapitalOneMiles, SingaporeKrisflyer, 1, 1, 1000)
        .add(CapitalOneMiles, AviancaLifemiles, 1, 1, 1000)
        .add(CapitalOneMiles, AirCanadaAeroplan, 1, 1, 1000)
        .add(CapitalOneMiles, EmiratesSkywards, 1, 1, 1000)
        .add(CapitalOneMiles, CathayAsiaMiles, 1, 1, 1000)
        .add(CapitalOneMiles, VirginAtlanticFlyingClub, 1, 1, 1000)
        .add(CapitalOneMiles, WyndhamRewards, 1, 1, 1000)
        .add(CapitalOneMiles, ChoicePrivileges, 1, 1, 1000)
        // Bilt Rewards, the only route into American Airlines
        .add(BiltRewards, AmericanAirlinesAadvantage, 1, 1, 1000)
        .add(BiltRewards, UnitedMileageplus, 1, 1, 1000)
        .add(BiltRewards, AlaskaMileagePlan, 1, 1, 1000)
        .add(BiltRewards, AirFranceFlyingBlue, 1, 1, 1000)
        .add(BiltRewards, AirCanadaAeroplan, 1, 1, 1000)
        .add(BiltRewards, BritishAirwaysAvios, 1, 1, 1000)
        .add(BiltRewards, TurkishMilesSmiles, 1, 1, 1000)
        .add(BiltRewards, EmiratesSkywards, 1, 1, 1000)
        .add(BiltRewards, VirginAtlanticFlyingClub, 1, 1, 1000)
        .add(BiltRewards, CathayAsiaMiles, 1, 1, 1000)
        .add(BiltRewards, AviancaLifemiles, 1, 1, 1000)
        .add(BiltRewards, WorldOfHyatt, 1, 1, 1000)
        .add(BiltRewards, MarriottBonvoy, 1, 1, 1000)
        .add(BiltRewards, IhgRewards, 1, 1, 1000)
        .build()
        .expect("builtin transfer table has no duplicate rows")
}

/// The default baseline cents-per-point table.
pub fn builtin_valuations() -> ValuationTable {
    use Program::*;

    let rows: [(Program, f64); 22] = [
        (UnitedMileageplus, 1.35),
        (AmericanAirlinesAadvantage, 1.65),
        (DeltaSkymiles, 1.20),
        (SouthwestRapidRewards, 1.40),
        (AlaskaMileagePlan, 1.80),
        (JetblueTrueblue, 1.30),
        (BritishAirwaysAvios, 1.50),
        (AirFranceFlyingBlue, 1.30),
        (AirCanadaAeroplan, 1.50),
        (SingaporeKrisflyer, 1.30),
        (EmiratesSkywards, 1.20),
        (TurkishMilesSmiles, 1.30),
        (VirginAtlanticFlyingClub, 1.50),
        (CathayAsiaMiles, 1.30),
        (AviancaLifemiles, 1.50),
        (ThaiAirwaysRoyalOrchid, 1.00),
        (WorldOfHyatt, 2.30),
        (MarriottBonvoy, 0.80),
        (HiltonHonors, 0.60),
        (IhgRewards, 0.50),
        (WyndhamRewards, 1.10),
        (ChoicePrivileges, 0.60),
    ];

    ValuationTable::new(
        rows.into_iter()
            .map(|(program, cpp)| {
                PointValuation::new(program, cpp).expect("builtin valuation is positive")
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Issuer;

    #[test]
    fn builtin_tables_load() {
        let registry = builtin_registry();
        assert!(!registry.is_empty());
        let valuations = builtin_valuations();
        assert_eq!(valuations.len(), 22);
    }

    #[test]
    fn united_reachable_from_chase_and_bilt() {
        let registry = builtin_registry();
        let issuers: Vec<Issuer> = registry
            .find_transfer_options(Program::UnitedMileageplus)
            .into_iter()
            .map(|o| o.issuer)
            .collect();
        assert!(issuers.contains(&Issuer::ChaseUr));
        assert!(issuers.contains(&Issuer::BiltRewards));
    }

    #[test]
    fn bilt_is_the_only_aa_partner() {
        let registry = builtin_registry();
        let issuers: Vec<Issuer> = registry
            .find_transfer_options(Program::AmericanAirlinesAadvantage)
            .into_iter()
            .map(|o| o.issuer)
            .collect();
        assert_eq!(issuers, vec![Issuer::BiltRewards]);
    }

    #[test]
    fn amex_hilton_is_one_to_two() {
        let registry = builtin_registry();
        let required = registry
            .points_required(Program::HiltonHonors, 40_000, Issuer::AmexMr)
            .unwrap();
        assert_eq!(required, 20_000);
    }

    #[test]
    fn every_program_has_a_valuation() {
        let valuations = builtin_valuations();
        for program in Program::ALL {
            assert!(
                valuations.baseline_cpp(program).is_ok(),
                "missing valuation for {program}"
            );
        }
    }

    #[test]
    fn hyatt_valuation_is_high() {
        let valuations = builtin_valuations();
        assert!(valuations.baseline_cpp(Program::WorldOfHyatt).unwrap() > 2.0);
    }
}
