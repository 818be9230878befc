//! Payout dispatch boundary.
//!
//! The value-transfer primitive is an external collaborator: the core
//! computes who gets paid how much, the host moves the funds. The
//! [`PayoutSink`] trait is that seam. A batch is dispatched all-or-nothing
//! so the settlement engine can treat payout as its single fallible step,
//! validate-then-apply style: every in-memory mutation happens strictly
//! after the whole batch succeeded.

use std::collections::HashMap;

use crate::error::PayoutError;
use crate::types::{AccountId, Amount};

/// One pending fund transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    /// Recipient identity
    pub to: AccountId,

    /// Amount in base units, always non-zero (zero shares are skipped
    /// before dispatch)
    pub amount: Amount,
}

impl Payout {
    pub fn new(to: AccountId, amount: Amount) -> Self {
        Self { to, amount }
    }
}

/// Host-provided value transfer primitive.
///
/// `dispatch` must be atomic: either every payout in the batch is applied
/// or none is. A sink that cannot guarantee that for a given batch must
/// reject it outright.
pub trait PayoutSink {
    /// Apply the whole batch or fail without side effects.
    fn dispatch(&mut self, batch: &[Payout]) -> Result<(), PayoutError>;
}

/// In-memory credit ledger: the simplest conforming sink.
///
/// Credits accumulate per account and can only grow, so a batch can never
/// fail; this is the sink used by the demo binary and most tests.
///
/// ## Example
///
/// ```
/// use marketcore::engine::payout::{CreditLedger, Payout, PayoutSink};
///
/// let mut ledger = CreditLedger::new();
/// ledger.dispatch(&[Payout::new(7, 100), Payout::new(8, 50)]).unwrap();
///
/// assert_eq!(ledger.balance_of(7), 100);
/// assert_eq!(ledger.total_credited(), 150);
/// ```
#[derive(Debug, Default)]
pub struct CreditLedger {
    balances: HashMap<AccountId, Amount>,
}

impl CreditLedger {
    /// Create an empty credit ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated credit for an account.
    #[inline]
    pub fn balance_of(&self, account: AccountId) -> Amount {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    /// Sum of all credits ever dispatched.
    pub fn total_credited(&self) -> Amount {
        self.balances.values().sum()
    }
}

impl PayoutSink for CreditLedger {
    fn dispatch(&mut self, batch: &[Payout]) -> Result<(), PayoutError> {
        for payout in batch {
            *self.balances.entry(payout.to).or_insert(0) += payout.amount;
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
