//! Loyalty program identities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown program name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown loyalty program: {0}")]
pub struct InvalidProgram(pub String);

/// An airline or hotel loyalty program, the target currency an award
/// is priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    // Airline programs
    UnitedMileageplus,
    AmericanAirlinesAadvantage,
    DeltaSkymiles,
    SouthwestRapidRewards,
    AlaskaMileagePlan,
    JetblueTrueblue,
    BritishAirwaysAvios,
    AirFranceFlyingBlue,
    AirCanadaAeroplan,
    SingaporeKrisflyer,
    EmiratesSkywards,
    TurkishMilesSmiles,
    VirginAtlanticFlyingClub,
    CathayAsiaMiles,
    AviancaLifemiles,
    ThaiAirwaysRoyalOrchid,

    // Hotel programs
    WorldOfHyatt,
    MarriottBonvoy,
    HiltonHonors,
    IhgRewards,
    WyndhamRewards,
    ChoicePrivileges,
}

impl Program {
    /// All programs, airlines first, in declaration order.
    pub const ALL: [Program; 22] = [
        Program::UnitedMileageplus,
        Program::AmericanAirlinesAadvantage,
        Program::DeltaSkymiles,
        Program::SouthwestRapidRewards,
        Program::AlaskaMileagePlan,
        Program::JetblueTrueblue,
        Program::BritishAirwaysAvios,
        Program::AirFranceFlyingBlue,
        Program::AirCanadaAeroplan,
        Program::SingaporeKrisflyer,
        Program::EmiratesSkywards,
        Program::TurkishMilesSmiles,
        Program::VirginAtlanticFlyingClub,
        Program::CathayAsiaMiles,
        Program::AviancaLifemiles,
        Program::ThaiAirwaysRoyalOrchid,
        Program::WorldOfHyatt,
        Program::MarriottBonvoy,
        Program::HiltonHonors,
        Program::IhgRewards,
        Program::WyndhamRewards,
        Program::ChoicePrivileges,
    ];

    /// Stable machine-readable name, matching the serde encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Program::UnitedMileageplus => "united_mileageplus",
            Program::AmericanAirlinesAadvantage => "american_airlines_aadvantage",
            Program::DeltaSkymiles => "delta_skymiles",
            Program::SouthwestRapidRewards => "southwest_rapid_rewards",
            Program::AlaskaMileagePlan => "alaska_mileage_plan",
            Program::JetblueTrueblue => "jetblue_trueblue",
            Program::BritishAirwaysAvios => "british_airways_avios",
            Program::AirFranceFlyingBlue => "air_france_flying_blue",
            Program::AirCanadaAeroplan => "air_canada_aeroplan",
            Program::SingaporeKrisflyer => "singapore_krisflyer",
            Program::EmiratesSkywards => "emirates_skywards",
            Program::TurkishMilesSmiles => "turkish_miles_smiles",
            Program::VirginAtlanticFlyingClub => "virgin_atlantic_flying_club",
            Program::CathayAsiaMiles => "cathay_asia_miles",
            Program::AviancaLifemiles => "avianca_lifemiles",
            Program::ThaiAirwaysRoyalOrchid => "thai_airways_royal_orchid",
            Program::WorldOfHyatt => "world_of_hyatt",
            Program::MarriottBonvoy => "marriott_bonvoy",
            Program::HiltonHonors => "hilton_honors",
            Program::IhgRewards => "ihg_rewards",
            Program::WyndhamRewards => "wyndham_rewards",
            Program::ChoicePrivileges => "choice_privileges",
        }
    }

    /// Parse a machine-readable program name.
    pub fn parse(s: &str) -> Result<Self, InvalidProgram> {
        Program::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| InvalidProgram(s.to_string()))
    }

    /// True for hotel programs, false for airline programs.
    pub fn is_hotel(&self) -> bool {
        matches!(
            self,
            Program::WorldOfHyatt
                | Program::MarriottBonvoy
                | Program::HiltonHonors
                | Program::IhgRewards
                | Program::WyndhamRewards
                | Program::ChoicePrivileges
        )
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
