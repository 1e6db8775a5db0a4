//! User profile persistence.
//!
//! Stores points balances and stable preferences between sessions as a
//! JSON file under the user's config directory, so a returning traveler
//! only has to say where and when. Balances live here and nowhere else:
//! the profile never records plans, searches, or anything derived.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ledger::PointsBalance;
use crate::preferences::{AccommodationTier, FlightTimePreference, PointsStrategy};

/// Stable preferences worth carrying across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfilePreferences {
    #[serde(default)]
    pub origin_airport: String,

    #[serde(default = "default_travelers")]
    pub num_travelers: u32,

    #[serde(default)]
    pub flight_time_preference: FlightTimePreference,

    #[serde(default)]
    pub accommodation_tier: AccommodationTier,

    #[serde(default)]
    pub points_strategy: PointsStrategy,
}

fn default_travelers() -> u32 {
    1
}

/// Saved per-issuer balances.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfilePoints {
    #[serde(default)]
    pub chase_ur: u64,
    #[serde(default)]
    pub amex_mr: u64,
    #[serde(default)]
    pub citi_ty: u64,
    #[serde(default)]
    pub capital_one_miles: u64,
    #[serde(default)]
    pub bilt_rewards: u64,
}

impl ProfilePoints {
    /// Convert to a ledger-ready balance snapshot.
    pub fn to_balance(&self) -> PointsBalance {
        use crate::domain::Issuer::*;
        PointsBalance::new()
            .with(ChaseUr, self.chase_ur)
            .with(AmexMr, self.amex_mr)
            .with(CitiTy, self.citi_ty)
            .with(CapitalOneMiles, self.capital_one_miles)
            .with(BiltRewards, self.bilt_rewards)
    }

    /// Capture a balance snapshot for saving.
    pub fn from_balance(balance: &PointsBalance) -> Self {
        use crate::domain::Issuer::*;
        ProfilePoints {
            chase_ur: balance.get(ChaseUr),
            amex_mr: balance.get(AmexMr),
            citi_ty: balance.get(CitiTy),
            capital_one_miles: balance.get(CapitalOneMiles),
            bilt_rewards: balance.get(BiltRewards),
        }
    }
}

/// The persisted profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub preferences: ProfilePreferences,

    #[serde(default)]
    pub points: ProfilePoints,
}

impl UserProfile {
    /// True when any issuer holds points.
    pub fn has_points(&self) -> bool {
        self.points.to_balance().total() > 0
    }

    /// True when enough preferences are saved to skip setup questions.
    pub fn has_preferences(&self) -> bool {
        !self.preferences.origin_airport.is_empty()
    }
}

/// Errors from profile load/save.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed profile: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("no user config directory on this platform")]
    NoConfigDir,
}

/// Default profile location: `<config dir>/award-planner/profile.json`.
pub fn default_profile_path() -> Result<PathBuf, ProfileError> {
    dirs::config_dir()
        .map(|dir| dir.join("award-planner").join("profile.json"))
        .ok_or(ProfileError::NoConfigDir)
}

/// Load a profile, or `Ok(None)` if none has been saved yet.
pub fn load_profile(path: &Path) -> Result<Option<UserProfile>, ProfileError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let profile = serde_json::from_str(&raw)?;
    Ok(Some(profile))
}

/// Save a profile, creating parent directories as needed.
pub fn save_profile(profile: &UserProfile, path: &Path) -> Result<(), ProfileError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(profile)?;
    fs::write(path, raw)?;
    Ok(())
}
