//! Fee engine: the pure three-way split of a sale price.
//!
//! ## Arithmetic
//!
//! Both rate shares are computed as `floor(price * bps / 10000)` with the
//! product widened to `u128`, so no input within the documented bounds can
//! overflow. The seller receives the exact residual, which means any
//! fractional basis-point remainder accrues to the seller — never lost,
//! never double-counted — and the three parts always sum to the price.
//!
//! ## Safety of the residual
//!
//! `royalty_bps <= 1000` (enforced at mint) and `fee_bps <= 1000`
//! (enforced at every fee update) cap the combined deduction at 2000 bps,
//! strictly below the 10000 bps whole, so the residual cannot underflow.
//! The split clamps each rate to its cap before computing, so the function
//! stays total and price-conserving even for a caller that bypassed the
//! ledger's bound checks.

use crate::types::{Amount, BasisPoints, BPS_DENOMINATOR, MAX_PLATFORM_FEE_BPS, MAX_ROYALTY_BPS};

/// The three-way division of one sale price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    /// Share routed to the platform owner
    pub marketplace_fee: Amount,

    /// Share routed to the asset's original creator
    pub royalty_fee: Amount,

    /// Residual share routed to the seller
    pub seller_amount: Amount,
}

impl FeeSplit {
    /// Sum of the three parts. Always equals the input price.
    #[inline]
    pub fn total(&self) -> Amount {
        self.marketplace_fee + self.royalty_fee + self.seller_amount
    }
}

/// Share of `price` represented by `bps` basis points, floored.
#[inline]
fn bps_share(price: Amount, bps: BasisPoints) -> Amount {
    // Widen before multiplying: price * 10000 can exceed u64.
    let share = u128::from(price) * u128::from(bps) / u128::from(BPS_DENOMINATOR);
    share as Amount
}

/// Split a sale price between platform, creator and seller.
///
/// Pure function: no state, no side effects, total on all inputs. Rates
/// above their caps are clamped to the cap, so the three parts sum to the
/// price for every input; the ledger rejects out-of-bounds rates long
/// before they reach this function.
///
/// ## Example
///
/// ```
/// use marketcore::engine::fees::split;
///
/// let split = split(1_000, 100, 250);
/// assert_eq!(split.marketplace_fee, 25);
/// assert_eq!(split.royalty_fee, 10);
/// assert_eq!(split.seller_amount, 965);
/// ```
pub fn split(price: Amount, royalty_bps: BasisPoints, fee_bps: BasisPoints) -> FeeSplit {
    let marketplace_fee = bps_share(price, fee_bps.min(MAX_PLATFORM_FEE_BPS));
    let royalty_fee = bps_share(price, royalty_bps.min(MAX_ROYALTY_BPS));
    let seller_amount = price - marketplace_fee - royalty_fee;

    FeeSplit {
        marketplace_fee,
        royalty_fee,
        seller_amount,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_split_reference_vector() {
        // 0.5 unit priced sale at 250 bps platform fee, 100 bps royalty
        let s = split(500_000_000_000_000_000, 100, 250);

        assert_eq!(s.marketplace_fee, 12_500_000_000_000_000);
        assert_eq!(s.royalty_fee, 5_000_000_000_000_000);
        assert_eq!(s.seller_amount, 482_500_000_000_000_000);
        assert_eq!(s.total(), 500_000_000_000_000_000);
    }

    #[test]
    fn test_split_small_price() {
        let s = split(1_000, 100, 250);

        assert_eq!(s.marketplace_fee, 25);
        assert_eq!(s.royalty_fee, 10);
        assert_eq!(s.seller_amount, 965);
    }

    #[test]
    fn test_split_zero_rates() {
        let s = split(1_000, 0, 0);

        assert_eq!(s.marketplace_fee, 0);
        assert_eq!(s.royalty_fee, 0);
        assert_eq!(s.seller_amount, 1_000);
    }

    #[test]
    fn test_split_max_rates() {
        // Both rates at the 1000 bps cap: 10% + 10%, seller keeps 80%
        let s = split(10_000, 1_000, 1_000);

        assert_eq!(s.marketplace_fee, 1_000);
        assert_eq!(s.royalty_fee, 1_000);
        assert_eq!(s.seller_amount, 8_000);
    }

    #[test]
    fn test_split_floors_remainder_to_seller() {
        // 1 base unit at any sub-10000 rate floors both fees to zero
        let s = split(1, 999, 999);

        assert_eq!(s.marketplace_fee, 0);
        assert_eq!(s.royalty_fee, 0);
        assert_eq!(s.seller_amount, 1);

        // 33 at 100 bps = 0.33, floored
        let s = split(33, 100, 100);
        assert_eq!(s.marketplace_fee, 0);
        assert_eq!(s.royalty_fee, 0);
        assert_eq!(s.seller_amount, 33);
    }

    #[test]
    fn test_split_clamps_rates_above_cap() {
        // Rates beyond the cap behave as if capped; the residual never wraps
        let s = split(1, u16::MAX, 0);
        assert_eq!(s.marketplace_fee, 0);
        assert_eq!(s.royalty_fee, 0);
        assert_eq!(s.seller_amount, 1);

        let s = split(10_000, u16::MAX, u16::MAX);
        assert_eq!(s.marketplace_fee, 1_000);
        assert_eq!(s.royalty_fee, 1_000);
        assert_eq!(s.seller_amount, 8_000);
        assert_eq!(s.total(), 10_000);
    }

    #[test]
    fn test_split_no_overflow_at_extremes() {
        // Largest representable price with both rates at the cap
        let s = split(u64::MAX, 1_000, 1_000);
        assert_eq!(s.total(), u64::MAX);
    }

    #[test]
    fn test_split_conserves_price_randomized() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..10_000 {
            let price: u64 = rng.gen();
            let royalty_bps: u16 = rng.gen_range(0..=MAX_ROYALTY_BPS);
            let fee_bps: u16 = rng.gen_range(0..=MAX_PLATFORM_FEE_BPS);

            let s = split(price, royalty_bps, fee_bps);
            assert_eq!(
                s.total(),
                price,
                "split must conserve price for ({}, {}, {})",
                price,
                royalty_bps,
                fee_bps
            );
        }
    }
}
