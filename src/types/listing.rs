//! Sale listing record.
//!
//! ## SSZ Serialization
//!
//! `Listing` derives `SimpleSerialize` from ssz_rs for deterministic
//! encoding: this is the wire form handed to external observers and the
//! form folded into the market state root.
//!
//! ## Listing lifecycle
//!
//! A listing record is created (or overwritten) by `list` and persists for
//! the lifetime of the market. Only the `active` flag ever changes after
//! creation: a purchase or an unlist flips it to `false`, a relist by the
//! then-current owner overwrites the whole record. There is no deleted
//! state, so a stale inactive record can always be inspected.

use ssz_rs::prelude::*;

use crate::types::{AccountId, Amount, AssetId};

/// A standing offer to sell one asset at a fixed price.
///
/// ## Example
///
/// ```
/// use marketcore::types::Listing;
///
/// let listing = Listing::new(1, 100, 1_000);
/// assert!(listing.active);
/// assert_eq!(listing.price, 1_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Listing {
    /// The asset on offer
    pub asset_id: AssetId,

    /// Identity that created the listing; the only identity allowed to
    /// unlist it, and the recipient of the seller share at settlement
    pub seller: AccountId,

    /// Asking price in base units, strictly positive
    pub price: Amount,

    /// Whether the offer is currently honorable
    pub active: bool,
}

impl Listing {
    /// Create a new active listing.
    ///
    /// The book enforces ownership and the positive-price bound before
    /// construction.
    pub fn new(asset_id: AssetId, seller: AccountId, price: Amount) -> Self {
        Self {
            asset_id,
            seller,
            price,
            active: true,
        }
    }

    /// Flip the listing inactive. Idempotent.
    #[inline]
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_new_is_active() {
        let listing = Listing::new(1, 100, 1_000);

        assert_eq!(listing.asset_id, 1);
        assert_eq!(listing.seller, 100);
        assert_eq!(listing.price, 1_000);
        assert!(listing.active);
    }

    #[test]
    fn test_listing_deactivate_idempotent() {
        let mut listing = Listing::new(1, 100, 1_000);

        listing.deactivate();
        assert!(!listing.active);

        // Second deactivation is a no-op, not an error
        listing.deactivate();
        assert!(!listing.active);
    }

    #[test]
    fn test_listing_ssz_roundtrip() {
        let listing = Listing::new(7, 42, 500_000_000_000_000_000);

        let serialized = ssz_rs::serialize(&listing).expect("Failed to serialize");
        let deserialized: Listing =
            ssz_rs::deserialize(&serialized).expect("Failed to deserialize");

        assert_eq!(listing, deserialized);
    }

    #[test]
    fn test_listing_deterministic_serialization() {
        let listing = Listing::new(7, 42, 1_000);

        let bytes1 = ssz_rs::serialize(&listing).expect("Failed to serialize");
        let bytes2 = ssz_rs::serialize(&listing).expect("Failed to serialize");

        assert_eq!(bytes1, bytes2, "SSZ serialization must be deterministic");
    }

    #[test]
    fn test_listing_ssz_size() {
        let listing = Listing::new(1, 100, 1_000);
        let bytes = ssz_rs::serialize(&listing).expect("Failed to serialize");

        // Expected size: 8 + 8 + 8 + 1 = 25 bytes
        assert_eq!(bytes.len(), 25, "Listing should serialize to 25 bytes");
    }
}
