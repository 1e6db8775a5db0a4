//! Points ledger.
//!
//! The ledger is the single mutable resource in the planning core: the
//! traveler's remaining balance per issuer. Pricing reads a snapshot;
//! only accepting or abandoning a plan mutates the ledger, so two plans
//! accepted in one session can never double-spend the same points.
//!
//! The type itself is synchronous. When the hosting environment is
//! multi-threaded (the web layer is), callers wrap it in a lock;
//! snapshot reads taken under the same lock see a consistent view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Issuer, TripPlan};

/// An immutable per-issuer balance snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBalance {
    balances: BTreeMap<Issuer, u64>,
}

impl PointsBalance {
    /// An all-zero balance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one issuer's balance, builder style.
    pub fn with(mut self, issuer: Issuer, amount: u64) -> Self {
        self.balances.insert(issuer, amount);
        self
    }

    /// The balance held with an issuer; issuers never seen are zero.
    pub fn get(&self, issuer: Issuer) -> u64 {
        self.balances.get(&issuer).copied().unwrap_or(0)
    }

    /// Iterate non-zero balances in issuer order.
    pub fn iter(&self) -> impl Iterator<Item = (Issuer, u64)> + '_ {
        self.balances.iter().map(|(i, b)| (*i, *b))
    }

    /// Total points across all issuers.
    pub fn total(&self) -> u64 {
        self.balances.values().sum()
    }
}

impl FromIterator<(Issuer, u64)> for PointsBalance {
    fn from_iter<T: IntoIterator<Item = (Issuer, u64)>>(iter: T) -> Self {
        PointsBalance {
            balances: iter.into_iter().collect(),
        }
    }
}

/// The mutable session ledger.
#[derive(Debug, Clone)]
pub struct PointsLedger {
    balances: BTreeMap<Issuer, u64>,
}

impl PointsLedger {
    /// Open a ledger seeded with the traveler's starting balances.
    pub fn new(initial: PointsBalance) -> Self {
        PointsLedger {
            balances: initial.balances,
        }
    }

    /// Tentatively spend points from one issuer.
    ///
    /// Decrements the balance and returns `true` only when the issuer
    /// holds at least `amount`; otherwise returns `false` and mutates
    /// nothing.
    pub fn reserve(&mut self, issuer: Issuer, amount: u64) -> bool {
        let balance = self.balances.entry(issuer).or_insert(0);
        if *balance < amount {
            return false;
        }
        *balance -= amount;
        true
    }

    /// Return points to an issuer. Always succeeds; releasing more than
    /// was reserved is a caller bug the ledger cannot detect without
    /// full history, so it is not signalled.
    pub fn release(&mut self, issuer: Issuer, amount: u64) {
        let balance = self.balances.entry(issuer).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    /// Reserve every issuer leg of an accepted plan, all or nothing.
    ///
    /// On failure any legs already reserved are rolled back and the
    /// ledger is left exactly as it was.
    pub fn reserve_plan(&mut self, plan: &TripPlan) -> bool {
        let mut done: Vec<(Issuer, u64)> = Vec::new();
        for (&issuer, &amount) in &plan.points_by_issuer {
            if self.reserve(issuer, amount) {
                done.push((issuer, amount));
            } else {
                for (issuer, amount) in done {
                    self.release(issuer, amount);
                }
                return false;
            }
        }
        true
    }

    /// Release every issuer leg of a previously accepted plan.
    pub fn release_plan(&mut self, plan: &TripPlan) {
        for (&issuer, &amount) in &plan.points_by_issuer {
            self.release(issuer, amount);
        }
    }

    /// A consistent copy of the current balances.
    pub fn snapshot(&self) -> PointsBalance {
        PointsBalance {
            balances: self.balances.clone(),
        }
    }
}
