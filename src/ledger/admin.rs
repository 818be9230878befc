//! Platform configuration: operator identity and the mutable fee rate.

use crate::error::{InputViolation, MarketError};
use crate::types::{AccountId, BasisPoints, MAX_PLATFORM_FEE_BPS};

/// Platform owner identity and the current fee rate.
///
/// The owner is fixed at construction. The fee rate is mutable, but only
/// by the owner and only within the cap; the rate in effect at purchase
/// time (not listing time) is the one a settlement uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    platform_owner: AccountId,
    fee_bps: BasisPoints,
}

impl AdminConfig {
    /// Create the configuration, validating the initial fee against the cap.
    pub fn new(platform_owner: AccountId, fee_bps: BasisPoints) -> Result<Self, MarketError> {
        if fee_bps > MAX_PLATFORM_FEE_BPS {
            return Err(MarketError::InvalidInput(InputViolation::FeeAboveCap(
                fee_bps,
            )));
        }
        Ok(Self {
            platform_owner,
            fee_bps,
        })
    }

    /// Replace the fee rate.
    ///
    /// Fails with `Unauthorized` unless the caller is the platform owner,
    /// and with `InvalidInput` when the new rate exceeds
    /// [`MAX_PLATFORM_FEE_BPS`]. Either failure leaves the rate unchanged.
    pub fn set_fee(
        &mut self,
        caller: AccountId,
        new_fee_bps: BasisPoints,
    ) -> Result<(), MarketError> {
        if caller != self.platform_owner {
            return Err(MarketError::Unauthorized);
        }
        if new_fee_bps > MAX_PLATFORM_FEE_BPS {
            return Err(MarketError::InvalidInput(InputViolation::FeeAboveCap(
                new_fee_bps,
            )));
        }
        self.fee_bps = new_fee_bps;
        Ok(())
    }

    /// Identity collecting the marketplace fee.
    #[inline]
    pub fn platform_owner(&self) -> AccountId {
        self.platform_owner
    }

    /// Fee rate currently in effect.
    #[inline]
    pub fn fee_bps(&self) -> BasisPoints {
        self.fee_bps
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
