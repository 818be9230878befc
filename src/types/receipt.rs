//! Settlement receipt for a single completed sale.
//!
//! The receipt is the per-sale proof of settlement: it records the parties,
//! the price and the exact three-way split that was paid out. Its SSZ
//! encoding is deterministic, so receipts can be shipped to external
//! systems or hashed for audit trails.

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

/// Summary of one settled purchase.
///
/// ## Invariant
///
/// `marketplace_fee + royalty_fee + seller_amount == price` always holds:
/// the fee engine floors both rate shares and hands the remainder to the
/// seller, so no base unit is lost or double-counted.
///
/// ## Example
///
/// ```
/// use marketcore::types::SettlementReceipt;
///
/// let receipt = SettlementReceipt::new(1, 200, 100, 7, 1_000, 25, 10, 965);
/// assert_eq!(receipt.marketplace_fee + receipt.royalty_fee + receipt.seller_amount,
///            receipt.price);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct SettlementReceipt {
    /// The asset that changed hands
    pub asset_id: u64,

    /// Identity that paid and now owns the asset
    pub buyer: u64,

    /// Identity that held the listing and received the residual share
    pub seller: u64,

    /// Original creator credited with the royalty share
    pub creator: u64,

    /// Sale price in base units (equal to the payment, exactly)
    pub price: u64,

    /// Share routed to the platform owner
    pub marketplace_fee: u64,

    /// Share routed to the creator
    pub royalty_fee: u64,

    /// Residual share routed to the seller
    pub seller_amount: u64,
}

impl SettlementReceipt {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        asset_id: u64,
        buyer: u64,
        seller: u64,
        creator: u64,
        price: u64,
        marketplace_fee: u64,
        royalty_fee: u64,
        seller_amount: u64,
    ) -> Self {
        Self {
            asset_id,
            buyer,
            seller,
            creator,
            price,
            marketplace_fee,
            royalty_fee,
            seller_amount,
        }
    }

    /// SHA-256 digest of the SSZ encoding.
    ///
    /// Every field is a fixed-size `u64`, so encoding cannot fail and the
    /// digest is always the hash of the exact wire form.
    pub fn digest(&self) -> [u8; 32] {
        let bytes = ssz_rs::serialize(self).expect("fixed-size SSZ record always serializes");
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        hasher.finalize().into()
    }

    /// Digest as a lowercase hex string.
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
