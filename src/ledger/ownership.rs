//! Ownership ledger: current owner per asset and holdings count per account.
//!
//! This is the only place ownership ever changes. Both tables move together
//! inside single `&mut self` methods with no fallible step between the
//! reads and the writes, so no caller can observe a decremented-but-not-
//! incremented intermediate state.
//!
//! ## Conservation invariant
//!
//! In every reachable state the holdings counts sum to the number of
//! tracked assets: every asset has exactly one owner at all times and no
//! asset is ever ownerless. [`OwnershipLedger::total_held`] exists so tests
//! can assert this directly.

use std::collections::HashMap;

use crate::types::{AccountId, AssetId};

/// Current owner per asset plus owned-count per account.
#[derive(Debug, Clone, Default)]
pub struct OwnershipLedger {
    /// assetId -> current owner; set at mint, overwritten at every sale
    owners: HashMap<AssetId, AccountId>,

    /// owner -> count of assets currently held; entries at zero are dropped
    holdings: HashMap<AccountId, u64>,
}

impl OwnershipLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the initial owner of a freshly minted asset.
    ///
    /// Must be called exactly once per asset id; re-assigning an already
    /// tracked asset is a bug, guarded by a debug assertion.
    pub fn assign(&mut self, asset_id: AssetId, owner: AccountId) {
        let previous = self.owners.insert(asset_id, owner);
        debug_assert!(previous.is_none(), "asset {} assigned twice", asset_id);
        *self.holdings.entry(owner).or_insert(0) += 1;
    }

    /// Current owner of an asset, or `None` for an id never minted.
    #[inline]
    pub fn owner_of(&self, asset_id: AssetId) -> Option<AccountId> {
        self.owners.get(&asset_id).copied()
    }

    /// Move an asset to a new owner, updating both holdings counts.
    ///
    /// Returns the previous owner, or `None` (with no mutation at all) if
    /// the asset is untracked. The decrement, the owner overwrite and the
    /// increment happen back-to-back with no fallible step in between.
    pub fn transfer(&mut self, asset_id: AssetId, new_owner: AccountId) -> Option<AccountId> {
        let prior = self.owner_of(asset_id)?;

        match self.holdings.get_mut(&prior) {
            Some(count) if *count > 1 => *count -= 1,
            _ => {
                self.holdings.remove(&prior);
            }
        }
        self.owners.insert(asset_id, new_owner);
        *self.holdings.entry(new_owner).or_insert(0) += 1;

        Some(prior)
    }

    /// Number of assets currently held by an account.
    #[inline]
    pub fn holdings_of(&self, account: AccountId) -> u64 {
        self.holdings.get(&account).copied().unwrap_or(0)
    }

    /// Sum of all holdings counts. Equals the number of tracked assets in
    /// every reachable state.
    pub fn total_held(&self) -> u64 {
        self.holdings.values().sum()
    }

    /// Number of tracked assets.
    #[inline]
    pub fn tracked_assets(&self) -> usize {
        self.owners.len()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
