//! Settlement engine: atomic purchase orchestration.
//!
//! ## Commit discipline
//!
//! A purchase is validated entirely on shared borrows (listing present and
//! active, payment exact), the split is computed by the pure fee engine,
//! and the payout batch is dispatched through the host's [`PayoutSink`] —
//! the one step that can fail after validation. Only once the whole batch
//! has succeeded does the engine touch the market: ownership transfer,
//! listing deactivation and the `Sold` event are applied in a block with
//! no remaining failure points. A payout rejection therefore aborts the
//! call with the market byte-for-byte unchanged; no partially-settled
//! state is ever observable.

use crate::error::MarketError;
use crate::engine::fees;
use crate::engine::payout::{Payout, PayoutSink};
use crate::ledger::Market;
use crate::types::{AccountId, Amount, AssetId, SettlementReceipt};

/// Orchestrates purchases against a [`Market`].
///
/// Stateless; exists as a type so a host can hold one engine alongside
/// its market and payout sink.
///
/// ## Example
///
/// ```
/// use marketcore::engine::{SettlementEngine, payout::CreditLedger};
/// use marketcore::ledger::Market;
///
/// let mut market = Market::new(1, 250).unwrap();
/// let mut engine = SettlementEngine::new();
/// let mut sink = CreditLedger::new();
///
/// let id = market.mint(100, "ipfs://QmExample", 100).unwrap();
/// market.list(id, 100, 1_000).unwrap();
///
/// let receipt = engine.purchase(&mut market, id, 200, 1_000, &mut sink).unwrap();
/// assert_eq!(receipt.seller_amount, 965);
/// assert_eq!(market.owner_of(id), Some(200));
/// ```
#[derive(Debug, Default)]
pub struct SettlementEngine;

impl SettlementEngine {
    /// Create a new settlement engine.
    pub fn new() -> Self {
        Self
    }

    /// Purchase a listed asset with an exact payment.
    ///
    /// On success the buyer owns the asset, the listing is inactive, the
    /// three payouts have been dispatched and a `Sold` notification has
    /// been journaled; the returned receipt records the exact split.
    ///
    /// ## Failure modes
    ///
    /// - `NotFound`: the asset was never minted
    /// - `NotForSale`: no listing record, or the record is inactive
    /// - `PaymentMismatch`: payment differs from the listing price in
    ///   either direction; there is no overpayment tolerance and no
    ///   refund path
    /// - `PayoutFailure`: the sink rejected the batch
    ///
    /// Every failure leaves the market untouched.
    pub fn purchase(
        &mut self,
        market: &mut Market,
        asset_id: AssetId,
        buyer: AccountId,
        payment: Amount,
        sink: &mut impl PayoutSink,
    ) -> Result<SettlementReceipt, MarketError> {
        // -- validate: reads only, any failure aborts with zero mutation --
        let asset = market
            .asset(asset_id)
            .ok_or(MarketError::NotFound(asset_id))?;
        let creator = asset.creator;
        let royalty_bps = asset.royalty_bps;

        let listing = market
            .active_listing(asset_id)
            .ok_or(MarketError::NotForSale(asset_id))?;
        let seller = listing.seller;
        let price = listing.price;

        if payment != price {
            return Err(MarketError::PaymentMismatch {
                expected: price,
                offered: payment,
            });
        }

        // The fee rate in effect now, not the rate at listing time
        let split = fees::split(price, royalty_bps, market.fee_bps());

        // -- dispatch: the single fallible effect; all-or-nothing --
        let mut batch = Vec::with_capacity(3);
        if split.seller_amount > 0 {
            batch.push(Payout::new(seller, split.seller_amount));
        }
        if split.royalty_fee > 0 {
            batch.push(Payout::new(creator, split.royalty_fee));
        }
        if split.marketplace_fee > 0 {
            batch.push(Payout::new(market.platform_owner(), split.marketplace_fee));
        }
        sink.dispatch(&batch)?;

        // -- apply: no remaining failure points --
        market.commit_sale(asset_id, buyer, seller, price);

        Ok(SettlementReceipt::new(
            asset_id,
            buyer,
            seller,
            creator,
            price,
            split.marketplace_fee,
            split.royalty_fee,
            split.seller_amount,
        ))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::payout::CreditLedger;
    use crate::error::PayoutError;
    use crate::types::MarketEvent;

    const OPERATOR: AccountId = 1;
    const ALICE: AccountId = 100;
    const BOB: AccountId = 200;
    const CAROL: AccountId = 300;

    /// Sink that rejects every batch, for rollback tests.
    struct RejectingSink;

    impl PayoutSink for RejectingSink {
        fn dispatch(&mut self, batch: &[Payout]) -> Result<(), PayoutError> {
            let first = batch.first().copied().unwrap_or(Payout::new(0, 0));
            Err(PayoutError::new(first.to, first.amount, "host rejected"))
        }
    }

    fn listed_market() -> (Market, AssetId) {
        let mut market = Market::new(OPERATOR, 250).unwrap();
        let id = market.mint(ALICE, "ipfs://QmA", 100).unwrap();
        market.list(id, ALICE, 1_000).unwrap();
        (market, id)
    }

    #[test]
    fn test_purchase_end_to_end() {
        let (mut market, id) = listed_market();
        let mut engine = SettlementEngine::new();
        let mut sink = CreditLedger::new();

        let receipt = engine.purchase(&mut market, id, BOB, 1_000, &mut sink).unwrap();

        // Exact split: 250 bps fee, 100 bps royalty on 1000
        assert_eq!(receipt.marketplace_fee, 25);
        assert_eq!(receipt.royalty_fee, 10);
        assert_eq!(receipt.seller_amount, 965);

        // Ownership moved, listing retired
        assert_eq!(market.owner_of(id), Some(BOB));
        assert_eq!(market.holdings_of(ALICE), 0);
        assert_eq!(market.holdings_of(BOB), 1);
        assert!(market.active_listing(id).is_none());

        // Payouts landed: seller, creator (= ALICE here), platform
        assert_eq!(sink.balance_of(ALICE), 975); // 965 seller + 10 royalty
        assert_eq!(sink.balance_of(OPERATOR), 25);
        assert_eq!(sink.total_credited(), 1_000);

        // Sold notification with the original owner as seller
        assert_eq!(
            market.events().last().unwrap().event,
            MarketEvent::Sold {
                asset_id: id,
                buyer: BOB,
                seller: ALICE,
                price: 1_000,
            }
        );
    }

    #[test]
    fn test_purchase_unminted_asset() {
        let mut market = Market::new(OPERATOR, 250).unwrap();
        let mut engine = SettlementEngine::new();
        let mut sink = CreditLedger::new();

        let err = engine.purchase(&mut market, 9, BOB, 1_000, &mut sink).unwrap_err();
        assert_eq!(err, MarketError::NotFound(9));
    }

    #[test]
    fn test_purchase_unlisted_asset() {
        let mut market = Market::new(OPERATOR, 250).unwrap();
        let id = market.mint(ALICE, "ipfs://QmA", 100).unwrap();
        let mut engine = SettlementEngine::new();
        let mut sink = CreditLedger::new();

        let err = engine.purchase(&mut market, id, BOB, 1_000, &mut sink).unwrap_err();
        assert_eq!(err, MarketError::NotForSale(id));
    }

    #[test]
    fn test_purchase_inactive_listing() {
        let (mut market, id) = listed_market();
        market.unlist(id, ALICE).unwrap();
        let mut engine = SettlementEngine::new();
        let mut sink = CreditLedger::new();

        let err = engine.purchase(&mut market, id, BOB, 1_000, &mut sink).unwrap_err();
        assert_eq!(err, MarketError::NotForSale(id));
    }

    #[test]
    fn test_purchase_payment_mismatch_both_directions() {
        let (mut market, id) = listed_market();
        let mut engine = SettlementEngine::new();
        let mut sink = CreditLedger::new();
        let root_before = market.compute_state_root();

        for payment in [999, 1_001] {
            let err = engine.purchase(&mut market, id, BOB, payment, &mut sink).unwrap_err();
            assert_eq!(
                err,
                MarketError::PaymentMismatch {
                    expected: 1_000,
                    offered: payment,
                }
            );
        }

        // Listing still active, ownership unchanged, nothing paid
        assert!(market.active_listing(id).is_some());
        assert_eq!(market.owner_of(id), Some(ALICE));
        assert_eq!(sink.total_credited(), 0);
        assert_eq!(market.compute_state_root(), root_before);
    }

    #[test]
    fn test_purchase_payout_failure_rolls_back() {
        let (mut market, id) = listed_market();
        let mut engine = SettlementEngine::new();
        let root_before = market.compute_state_root();
        let events_before = market.events().len();

        let err = engine
            .purchase(&mut market, id, BOB, 1_000, &mut RejectingSink)
            .unwrap_err();

        assert!(matches!(err, MarketError::PayoutFailure(_)));
        assert_eq!(market.owner_of(id), Some(ALICE));
        assert!(market.active_listing(id).is_some());
        assert_eq!(market.events().len(), events_before);
        assert_eq!(market.compute_state_root(), root_before);
    }

    #[test]
    fn test_purchase_uses_fee_rate_at_purchase_time() {
        let (mut market, id) = listed_market();
        let mut engine = SettlementEngine::new();
        let mut sink = CreditLedger::new();

        // Fee was 250 bps at listing time; raise it before the sale
        market.set_fee(OPERATOR, 1_000).unwrap();

        let receipt = engine.purchase(&mut market, id, BOB, 1_000, &mut sink).unwrap();
        assert_eq!(receipt.marketplace_fee, 100);
        assert_eq!(receipt.seller_amount, 890);
    }

    #[test]
    fn test_purchase_skips_zero_shares() {
        let mut market = Market::new(OPERATOR, 0).unwrap();
        let id = market.mint(ALICE, "ipfs://QmA", 0).unwrap();
        market.list(id, ALICE, 1_000).unwrap();
        let mut engine = SettlementEngine::new();

        // Sink that records batch sizes
        struct CountingSink(Vec<usize>);
        impl PayoutSink for CountingSink {
            fn dispatch(&mut self, batch: &[Payout]) -> Result<(), PayoutError> {
                self.0.push(batch.len());
                Ok(())
            }
        }

        let mut sink = CountingSink(Vec::new());
        engine.purchase(&mut market, id, BOB, 1_000, &mut sink).unwrap();

        // Zero fee and zero royalty: only the seller share is dispatched
        assert_eq!(sink.0, vec![1]);
    }

    #[test]
    fn test_relist_and_resell_by_new_owner() {
        let (mut market, id) = listed_market();
        let mut engine = SettlementEngine::new();
        let mut sink = CreditLedger::new();

        engine.purchase(&mut market, id, BOB, 1_000, &mut sink).unwrap();

        // The former seller cannot list what they no longer own
        assert_eq!(market.list(id, ALICE, 500).unwrap_err(), MarketError::Unauthorized);

        // The new owner can; a second sale pays royalty to the creator
        market.list(id, BOB, 2_000).unwrap();
        let receipt = engine.purchase(&mut market, id, CAROL, 2_000, &mut sink).unwrap();

        assert_eq!(receipt.seller, BOB);
        assert_eq!(receipt.creator, ALICE);
        assert_eq!(receipt.royalty_fee, 20);
        assert_eq!(market.owner_of(id), Some(CAROL));
    }

    #[test]
    fn test_stale_unlist_after_sale_is_noop() {
        let (mut market, id) = listed_market();
        let mut engine = SettlementEngine::new();
        let mut sink = CreditLedger::new();

        engine.purchase(&mut market, id, BOB, 1_000, &mut sink).unwrap();
        let events_before = market.events().len();

        // ALICE is still the seller recorded in the now-inactive record,
        // so this unlist succeeds as an idempotent no-op.
        market.unlist(id, ALICE).unwrap();
        assert_eq!(market.events().len(), events_before);

        // BOB is not the recorded seller until relisting
        assert_eq!(market.unlist(id, BOB).unwrap_err(), MarketError::Unauthorized);
    }

    #[test]
    fn test_self_purchase_allowed() {
        let (mut market, id) = listed_market();
        let mut engine = SettlementEngine::new();
        let mut sink = CreditLedger::new();

        let receipt = engine.purchase(&mut market, id, ALICE, 1_000, &mut sink).unwrap();

        assert_eq!(receipt.buyer, ALICE);
        assert_eq!(market.owner_of(id), Some(ALICE));
        assert_eq!(market.holdings_of(ALICE), 1);
        // Seller and royalty shares both route back to ALICE
        assert_eq!(sink.balance_of(ALICE), 975);
    }
}
