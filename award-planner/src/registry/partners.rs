//! Transfer partner registry.
//!
//! The registry answers "can issuer X reach program Y, and at what
//! rate", and owns the only piece of ratio arithmetic in the system:
//! converting a target-currency points price into source points. Every
//! other component routes through [`TransferRegistry::points_required`]
//! rather than re-deriving the formula.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Issuer, Program, TransferRatio};

use super::error::{DuplicatePartner, UnsupportedTransferError};

/// A transfer relationship between an issuer and a loyalty program.
///
/// Static reference data: loaded once at construction, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTransferPartner", into = "RawTransferPartner")]
pub struct TransferPartner {
    issuer: Issuer,
    program: Program,
    ratio: TransferRatio,
    min_increment: u64,
}

impl TransferPartner {
    /// Create a validated partner record.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the minimum increment is zero. The ratio is
    /// validated by its own constructor.
    pub fn new(
        issuer: Issuer,
        program: Program,
        ratio: TransferRatio,
        min_increment: u64,
    ) -> Result<Self, DomainError> {
        if min_increment == 0 {
            return Err(DomainError::ZeroIncrement);
        }
        Ok(TransferPartner {
            issuer,
            program,
            ratio,
            min_increment,
        })
    }

    pub fn issuer(&self) -> Issuer {
        self.issuer
    }

    pub fn program(&self) -> Program {
        self.program
    }

    pub fn ratio(&self) -> TransferRatio {
        self.ratio
    }

    /// Smallest transferable block, in target points.
    pub fn min_increment(&self) -> u64 {
        self.min_increment
    }
}

/// Serde shape for `TransferPartner`, funneled through the validating
/// constructor so external loaders cannot smuggle in bad records.
#[derive(Serialize, Deserialize)]
struct RawTransferPartner {
    issuer: Issuer,
    program: Program,
    ratio: TransferRatio,
    min_increment: u64,
}

impl TryFrom<RawTransferPartner> for TransferPartner {
    type Error = DomainError;

    fn try_from(raw: RawTransferPartner) -> Result<Self, Self::Error> {
        TransferPartner::new(raw.issuer, raw.program, raw.ratio, raw.min_increment)
    }
}

impl From<TransferPartner> for RawTransferPartner {
    fn from(p: TransferPartner) -> Self {
        RawTransferPartner {
            issuer: p.issuer,
            program: p.program,
            ratio: p.ratio,
            min_increment: p.min_increment,
        }
    }
}

/// One way to reach a target program, as reported by
/// [`TransferRegistry::find_transfer_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransferOption {
    pub issuer: Issuer,
    pub ratio: TransferRatio,
    pub min_increment: u64,
}

/// The static table of transfer partnerships.
#[derive(Debug, Clone)]
pub struct TransferRegistry {
    partners: Vec<TransferPartner>,
}

impl TransferRegistry {
    /// Build a registry from pre-parsed partner records.
    ///
    /// # Errors
    ///
    /// Returns `Err` if two records name the same (issuer, program)
    /// pair, a data-loading bug that must not be papered over.
    pub fn new(partners: Vec<TransferPartner>) -> Result<Self, DuplicatePartner> {
        for (i, a) in partners.iter().enumerate() {
            for b in &partners[i + 1..] {
                if a.issuer == b.issuer && a.program == b.program {
                    return Err(DuplicatePartner {
                        issuer: a.issuer,
                        program: a.program,
                    });
                }
            }
        }
        Ok(TransferRegistry { partners })
    }

    /// The partner record for an (issuer, program) pair, if one exists.
    pub fn partner(&self, issuer: Issuer, program: Program) -> Option<&TransferPartner> {
        self.partners
            .iter()
            .find(|p| p.issuer == issuer && p.program == program)
    }

    /// Every issuer capable of reaching the target program, best value
    /// first: ascending ratio, then issuer declaration order for ties.
    pub fn find_transfer_options(&self, program: Program) -> Vec<TransferOption> {
        let mut options: Vec<TransferOption> = self
            .partners
            .iter()
            .filter(|p| p.program == program)
            .map(|p| TransferOption {
                issuer: p.issuer,
                ratio: p.ratio,
                min_increment: p.min_increment,
            })
            .collect();
        options.sort_by(|a, b| a.ratio.cmp_value(&b.ratio).then(a.issuer.cmp(&b.issuer)));
        options
    }

    /// Source points the issuer must transfer to cover a target-currency
    /// points price.
    ///
    /// Target points are first rounded up to the partner's minimum
    /// increment so the transfer converts cleanly, then the ratio is
    /// applied with ceiling division.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no partnership links the issuer to the program.
    pub fn points_required(
        &self,
        program: Program,
        target_points: u64,
        issuer: Issuer,
    ) -> Result<u64, UnsupportedTransferError> {
        let partner = self
            .partner(issuer, program)
            .ok_or(UnsupportedTransferError::Pair { issuer, program })?;

        let blocks = target_points.div_ceil(partner.min_increment);
        let rounded_target = blocks * partner.min_increment;
        let ratio = partner.ratio;
        Ok((rounded_target * ratio.from_units() as u64).div_ceil(ratio.to_units() as u64))
    }

    /// Number of partner records.
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn ratio_strategy() -> impl Strategy<Value = TransferRatio> {
        (1u32..=5, 1u32..=5).prop_map(|(from, to)| TransferRatio::new(from, to).unwrap())
    }

    proptest! {
        /// When the target is already a whole number of increments and
        /// the ratio is a whole n:1, the answer is a multiple of n × m.
        #[test]
        fn whole_ratio_yields_increment_multiples(
            from in 1u32..=4,
            blocks in 1u64..200,
            min_increment in prop::sample::select(vec![250u64, 500, 1000]),
        ) {
            let partner = TransferPartner::new(
                Issuer::ChaseUr,
                Program::UnitedMileageplus,
                TransferRatio::new(from, 1).unwrap(),
                min_increment,
            )
            .unwrap();
            let reg = TransferRegistry::new(vec![partner]).unwrap();

            let target = blocks * min_increment;
            let required = reg
                .points_required(Program::UnitedMileageplus, target, Issuer::ChaseUr)
                .unwrap();

            prop_assert_eq!(required % (from as u64 * min_increment), 0);
            prop_assert_eq!(required, target * from as u64);
        }

        /// Source points never decrease as the target price grows.
        #[test]
        fn monotone_in_target(
            ratio in ratio_strategy(),
            min_increment in prop::sample::select(vec![250u64, 500, 1000]),
            target in 0u64..500_000,
            bump in 0u64..50_000,
        ) {
            let partner = TransferPartner::new(
                Issuer::AmexMr,
                Program::HiltonHonors,
                ratio,
                min_increment,
            )
            .unwrap();
            let reg = TransferRegistry::new(vec![partner]).unwrap();

            let lo = reg
                .points_required(Program::HiltonHonors, target, Issuer::AmexMr)
                .unwrap();
            let hi = reg
                .points_required(Program::HiltonHonors, target + bump, Issuer::AmexMr)
                .unwrap();
            prop_assert!(hi >= lo);
        }

        /// The rounded transfer always covers the asked-for target.
        #[test]
        fn transfer_covers_target(
            ratio in ratio_strategy(),
            target in 1u64..500_000,
        ) {
            let partner = TransferPartner::new(
                Issuer::CitiTy,
                Program::WyndhamRewards,
                ratio,
                1000,
            )
            .unwrap();
            let reg = TransferRegistry::new(vec![partner]).unwrap();

            let required = reg
                .points_required(Program::WyndhamRewards, target, Issuer::CitiTy)
                .unwrap();
            // required source points convert to at least `target` points.
            let delivered = required * ratio.to_units() as u64 / ratio.from_units() as u64;
            prop_assert!(delivered >= target);
        }
    }
}
