//! Listing book: the per-asset sale listing table.
//!
//! The book stores at most one [`Listing`] record per asset. Records are
//! overwritten by relisting and flipped inactive by purchase or unlist,
//! but never removed, so the state machine per asset is:
//!
//! ```text
//! None --list--> Active --buy/unlist--> Inactive --relist--> Active --> ...
//! ```
//!
//! `Inactive` is not terminal and there is no deleted state.
//!
//! Authorization (owner-only list, seller-only unlist) is enforced by the
//! owning [`Market`](crate::ledger::Market), which can see the ownership
//! ledger; this table only stores.

use std::collections::HashMap;

use crate::types::{AssetId, Listing};

/// Current (possibly inactive) sale listing per asset.
#[derive(Debug, Clone, Default)]
pub struct ListingBook {
    listings: HashMap<AssetId, Listing>,
}

impl ListingBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or unconditionally overwrite the listing record for an asset.
    ///
    /// Overwriting a still-active record is legal: relisting does not
    /// require an unlist first.
    pub fn put(&mut self, listing: Listing) {
        self.listings.insert(listing.asset_id, listing);
    }

    /// The current record for an asset, active or not.
    #[inline]
    pub fn record(&self, asset_id: AssetId) -> Option<&Listing> {
        self.listings.get(&asset_id)
    }

    /// The current listing only if it is active.
    #[inline]
    pub fn active(&self, asset_id: AssetId) -> Option<&Listing> {
        self.record(asset_id).filter(|listing| listing.active)
    }

    /// Flip an asset's record inactive.
    ///
    /// Returns `true` if the record existed and was active, `false` if it
    /// was already inactive. Callers decide whether the latter is a no-op
    /// or an error; for absent records there is nothing to flip and this
    /// must not be called.
    pub fn deactivate(&mut self, asset_id: AssetId) -> bool {
        match self.listings.get_mut(&asset_id) {
            Some(listing) if listing.active => {
                listing.deactivate();
                true
            }
            _ => false,
        }
    }

    /// Number of listing records (active and inactive).
    #[inline]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether no asset has ever been listed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Number of currently active listings.
    pub fn active_count(&self) -> usize {
        self.listings.values().filter(|l| l.active).count()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
