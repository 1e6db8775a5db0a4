//! Registry error types.

use crate::domain::{Issuer, Program};

/// A transfer route that does not exist.
///
/// Raised when a target program cannot be reached, either from one
/// specific issuer, or from any issuer at all. Callers present this as
/// "no award option found"; it is distinct from infeasibility due to
/// balances, which is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnsupportedTransferError {
    /// The given issuer has no transfer partnership with the program
    #[error("{issuer} cannot transfer to {program}")]
    Pair { issuer: Issuer, program: Program },

    /// No issuer at all can reach the program
    #[error("{program} is not reachable from any issuer")]
    Unreachable { program: Program },
}

/// A valuation lookup for a program with no recorded baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no baseline valuation recorded for {0}")]
pub struct UnknownProgramError(pub Program);

/// Invalid registry reference data, rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("duplicate transfer partner {issuer} → {program}")]
pub struct DuplicatePartner {
    pub issuer: Issuer,
    pub program: Program,
}
