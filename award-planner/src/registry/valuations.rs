//! Baseline point valuations.
//!
//! Maps each program to an estimated cents-per-point figure. Used only
//! as a fallback when a plan has no disclosed redemption price of its
//! own, never as a substitute for a computed plan price.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Program};

use super::error::UnknownProgramError;

/// A single program's baseline cents-per-point estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPointValuation", into = "RawPointValuation")]
pub struct PointValuation {
    program: Program,
    cpp: f64,
}

impl PointValuation {
    /// Create a validated valuation.
    ///
    /// # Errors
    ///
    /// Returns `Err` unless the cents-per-point figure is positive and
    /// finite.
    pub fn new(program: Program, cpp: f64) -> Result<Self, DomainError> {
        if !(cpp.is_finite() && cpp > 0.0) {
            return Err(DomainError::InvalidValuation);
        }
        Ok(PointValuation { program, cpp })
    }

    pub fn program(&self) -> Program {
        self.program
    }

    pub fn cpp(&self) -> f64 {
        self.cpp
    }
}

#[derive(Serialize, Deserialize)]
struct RawPointValuation {
    program: Program,
    cpp: f64,
}

impl TryFrom<RawPointValuation> for PointValuation {
    type Error = DomainError;

    fn try_from(raw: RawPointValuation) -> Result<Self, Self::Error> {
        PointValuation::new(raw.program, raw.cpp)
    }
}

impl From<PointValuation> for RawPointValuation {
    fn from(v: PointValuation) -> Self {
        RawPointValuation {
            program: v.program,
            cpp: v.cpp,
        }
    }
}

/// Lookup table of baseline valuations.
#[derive(Debug, Clone, Default)]
pub struct ValuationTable {
    by_program: HashMap<Program, f64>,
}

impl ValuationTable {
    /// Build a table from pre-parsed valuation records. When a program
    /// appears twice the later record wins.
    pub fn new(valuations: Vec<PointValuation>) -> Self {
        ValuationTable {
            by_program: valuations
                .into_iter()
                .map(|v| (v.program, v.cpp))
                .collect(),
        }
    }

    /// The baseline cents-per-point for a program.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the program has no recorded valuation.
    pub fn baseline_cpp(&self, program: Program) -> Result<f64, UnknownProgramError> {
        self.by_program
            .get(&program)
            .copied()
            .ok_or(UnknownProgramError(program))
    }

    pub fn len(&self) -> usize {
        self.by_program.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_program.is_empty()
    }
}
