//! Error taxonomy for market operations.
//!
//! Every public operation either fully commits or fails with one of these
//! variants and zero mutation. The core never retries internally and never
//! swallows a failure; callers resubmit a corrected request.

use thiserror::Error;

use crate::types::{AccountId, Amount, AssetId, BasisPoints, MAX_PLATFORM_FEE_BPS, MAX_ROYALTY_BPS};

/// Reason a request was rejected before any state changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    /// Caller is not the owner, seller or platform operator the call requires
    #[error("caller is not authorized for this operation")]
    Unauthorized,

    /// A rate or price violates its documented bound
    #[error("invalid input: {0}")]
    InvalidInput(InputViolation),

    /// The referenced asset was never minted
    #[error("asset {0} does not exist")]
    NotFound(AssetId),

    /// No active listing exists for the referenced asset
    #[error("asset {0} is not for sale")]
    NotForSale(AssetId),

    /// Payment does not match the listing price exactly
    #[error("payment of {offered} does not match listing price {expected}")]
    PaymentMismatch { expected: Amount, offered: Amount },

    /// A fund transfer failed during settlement; nothing was committed
    #[error("settlement aborted: {0}")]
    PayoutFailure(#[from] PayoutError),
}

/// The specific bound an input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputViolation {
    #[error("royalty rate {0} bps exceeds the cap of {} bps", MAX_ROYALTY_BPS)]
    RoyaltyAboveCap(BasisPoints),

    #[error("platform fee {0} bps exceeds the cap of {} bps", MAX_PLATFORM_FEE_BPS)]
    FeeAboveCap(BasisPoints),

    #[error("listing price must be greater than zero")]
    ZeroPrice,
}

/// A rejected fund transfer, reported by the host's payment primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("payout of {amount} to account {to} rejected: {reason}")]
pub struct PayoutError {
    /// Intended recipient
    pub to: AccountId,

    /// Amount in base units
    pub amount: Amount,

    /// Host-supplied rejection reason
    pub reason: String,
}

impl PayoutError {
    pub fn new(to: AccountId, amount: Amount, reason: impl Into<String>) -> Self {
        Self {
            to,
            amount,
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
