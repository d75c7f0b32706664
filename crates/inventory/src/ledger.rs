use core::fmt;

use serde::{Deserialize, Serialize};

use hwstock_core::{ValidationError, ValidationResult, require, validate};

/// Quantity accounting for a single resource.
///
/// `total` counts units currently owned, `allocated` counts units marked in
/// use. Both are non-negative by construction. There is no cross-field
/// constraint between them: `allocated` may exceed `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    total: u64,
    allocated: u64,
}

/// Point-in-time copy of a ledger's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub total: u64,
    pub allocated: u64,
}

/// The four ledger transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerOp {
    /// Move units from the free pool into use.
    Claim,
    /// Return units from use to the free pool.
    Freeup,
    /// Remove units permanently.
    Died,
    /// Add newly acquired units.
    Purchased,
}

impl LedgerOp {
    pub const ALL: [LedgerOp; 4] = [
        LedgerOp::Claim,
        LedgerOp::Freeup,
        LedgerOp::Died,
        LedgerOp::Purchased,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LedgerOp::Claim => "claim",
            LedgerOp::Freeup => "freeup",
            LedgerOp::Died => "died",
            LedgerOp::Purchased => "purchased",
        }
    }
}

impl fmt::Display for LedgerOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a mutation.
///
/// Mutations never fail loudly: an invalid request is logged and handed back
/// as `Rejected`, leaving the ledger untouched.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Applied(LedgerSnapshot),
    Rejected(ValidationError),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_applied()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Transition::Applied(_) => None,
            Transition::Rejected(err) => Some(err),
        }
    }
}

impl Ledger {
    /// Build a ledger from initial counters. Negative counters are rejected.
    pub fn new(total: i64, allocated: i64) -> ValidationResult<Self> {
        Ok(Self {
            total: require("total", total)?,
            allocated: require("allocated", allocated)?,
        })
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn allocated(&self) -> u64 {
        self.allocated
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            total: self.total,
            allocated: self.allocated,
        }
    }

    pub fn claim(&mut self, n: i64) -> Transition {
        self.apply(LedgerOp::Claim, n)
    }

    pub fn freeup(&mut self, n: i64) -> Transition {
        self.apply(LedgerOp::Freeup, n)
    }

    pub fn died(&mut self, n: i64) -> Transition {
        self.apply(LedgerOp::Died, n)
    }

    pub fn purchased(&mut self, n: i64) -> Transition {
        self.apply(LedgerOp::Purchased, n)
    }

    /// Run `op` with `n` units; on rejection the ledger is left as it was.
    pub fn apply(&mut self, op: LedgerOp, n: i64) -> Transition {
        match self.next(op, n) {
            Ok(next) => {
                *self = next;
                tracing::debug!(
                    %op,
                    n,
                    total = next.total,
                    allocated = next.allocated,
                    "ledger transition applied"
                );
                Transition::Applied(next.snapshot())
            }
            Err(err) => {
                tracing::warn!(%op, n, error = %err, "ledger transition rejected");
                Transition::Rejected(err)
            }
        }
    }

    fn next(&self, op: LedgerOp, n: i64) -> ValidationResult<Ledger> {
        match op {
            LedgerOp::Claim => {
                let n = validate(n, Some(self.total))?;
                Ok(Ledger {
                    total: self.total - n,
                    allocated: add(self.allocated, n)?,
                })
            }
            LedgerOp::Freeup => {
                let n = validate(n, Some(self.allocated))?;
                Ok(Ledger {
                    total: add(self.total, n)?,
                    allocated: self.allocated - n,
                })
            }
            LedgerOp::Died => {
                let n = validate(n, Some(self.total))?;
                Ok(Ledger {
                    total: self.total - n,
                    ..*self
                })
            }
            LedgerOp::Purchased => {
                let n = validate(n, None)?;
                Ok(Ledger {
                    total: add(self.total, n)?,
                    ..*self
                })
            }
        }
    }
}

fn add(current: u64, value: u64) -> ValidationResult<u64> {
    current
        .checked_add(value)
        .ok_or(ValidationError::Overflow { value, current })
}
