//! Asset registry: the append-only table of minted assets.
//!
//! ## Storage
//!
//! Per slab docs (https://docs.rs/slab/0.4.11), `Slab::insert` returns keys
//! in order as long as nothing is removed. Assets are never removed, so
//! slab key `k` always holds asset id `k + 1` and lookup is O(1) with no
//! separate index map.
//!
//! ## Id assignment
//!
//! Ids are sequential from 1 with no gaps and are never reused. A rejected
//! mint performs no insertion, so it consumes no id: minting N assets
//! yields ids exactly `1..=N` regardless of how many attempts failed in
//! between.

use slab::Slab;

use crate::error::{InputViolation, MarketError};
use crate::types::{AccountId, Asset, AssetId, BasisPoints, MAX_ROYALTY_BPS};

/// Append-only registry of minted assets.
///
/// ## Example
///
/// ```
/// use marketcore::ledger::AssetRegistry;
///
/// let mut registry = AssetRegistry::new();
/// let id = registry.mint(100, "ipfs://QmExample".to_owned(), 250).unwrap();
///
/// assert_eq!(id, 1);
/// assert_eq!(registry.get(id).unwrap().creator, 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    /// Pre-allocated asset storage; key k holds asset id k + 1
    assets: Slab<Asset>,
}

impl AssetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { assets: Slab::new() }
    }

    /// Create a registry with pre-allocated capacity.
    pub fn with_capacity(asset_capacity: usize) -> Self {
        Self {
            assets: Slab::with_capacity(asset_capacity),
        }
    }

    /// Mint a new asset and return its id.
    ///
    /// Fails with `InvalidInput` when `royalty_bps` exceeds
    /// [`MAX_ROYALTY_BPS`]; a failed mint leaves the registry untouched and
    /// consumes no id. The record is immutable once inserted: there is no
    /// update or delete operation on this table.
    pub fn mint(
        &mut self,
        creator: AccountId,
        uri: String,
        royalty_bps: BasisPoints,
    ) -> Result<AssetId, MarketError> {
        if royalty_bps > MAX_ROYALTY_BPS {
            return Err(MarketError::InvalidInput(InputViolation::RoyaltyAboveCap(
                royalty_bps,
            )));
        }

        let id = self.assets.len() as AssetId + 1;
        let key = self.assets.insert(Asset::new(id, creator, uri, royalty_bps));
        debug_assert_eq!(key as AssetId + 1, id, "slab keys must track asset ids");

        Ok(id)
    }

    /// Look up an asset by id.
    #[inline]
    pub fn get(&self, asset_id: AssetId) -> Option<&Asset> {
        let key = asset_id.checked_sub(1)? as usize;
        self.assets.get(key)
    }

    /// Whether an asset with this id has been minted.
    #[inline]
    pub fn contains(&self, asset_id: AssetId) -> bool {
        self.get(asset_id).is_some()
    }

    /// Number of minted assets.
    #[inline]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether no asset has been minted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Current capacity (pre-allocated slots).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.assets.capacity()
    }

    /// Iterate assets in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter().map(|(_, asset)| asset)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_new() {
        let registry = AssetRegistry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get(1).is_none());
    }

    #[test]
    fn test_registry_with_capacity() {
        let registry = AssetRegistry::with_capacity(10_000);

        assert!(registry.capacity() >= 10_000);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_mint_sequential_ids() {
        let mut registry = AssetRegistry::new();

        for expected in 1..=5u64 {
            let id = registry
                .mint(100, format!("ipfs://Qm{}", expected), 250)
                .unwrap();
            assert_eq!(id, expected);
        }
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_mint_rejects_royalty_above_cap() {
        let mut registry = AssetRegistry::new();

        let err = registry.mint(100, "ipfs://a".to_owned(), 1_001).unwrap_err();
        assert_eq!(
            err,
            MarketError::InvalidInput(InputViolation::RoyaltyAboveCap(1_001))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_mint_accepts_royalty_at_cap() {
        let mut registry = AssetRegistry::new();

        assert!(registry.mint(100, "ipfs://a".to_owned(), 1_000).is_ok());
        assert!(registry.mint(100, "ipfs://b".to_owned(), 0).is_ok());
    }

    #[test]
    fn test_failed_mint_consumes_no_id() {
        let mut registry = AssetRegistry::new();

        registry.mint(100, "ipfs://a".to_owned(), 0).unwrap();
        registry.mint(100, "ipfs://bad".to_owned(), 2_000).unwrap_err();
        let id = registry.mint(100, "ipfs://b".to_owned(), 0).unwrap();

        // The rejected attempt did not burn an id
        assert_eq!(id, 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_get_record_fields() {
        let mut registry = AssetRegistry::new();
        let id = registry.mint(42, "ar://tx".to_owned(), 500).unwrap();

        let asset = registry.get(id).unwrap();
        assert_eq!(asset.id, id);
        assert_eq!(asset.creator, 42);
        assert_eq!(asset.uri, "ar://tx");
        assert_eq!(asset.royalty_bps, 500);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut registry = AssetRegistry::new();
        registry.mint(100, "ipfs://a".to_owned(), 0).unwrap();

        assert!(registry.get(0).is_none());
        assert!(registry.get(2).is_none());
        assert!(!registry.contains(99));
        assert!(registry.contains(1));
    }

    #[test]
    fn test_iter_in_id_order() {
        let mut registry = AssetRegistry::new();
        for i in 0..4 {
            registry.mint(100 + i, format!("ipfs://{}", i), 0).unwrap();
        }

        let ids: Vec<u64> = registry.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
