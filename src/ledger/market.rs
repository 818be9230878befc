//! Market: the owning aggregate over the four shared tables.
//!
//! ## Arbitration model
//!
//! The registry, ownership ledger, listing book and admin config are all
//! owned by one [`Market`] value and only reachable through `&mut self`
//! methods, so every public operation is a single serialized unit: it
//! either fully commits or fails with zero mutation, and no operation ever
//! observes another's partial state. Nothing in here suspends, blocks or
//! yields mid-mutation.
//!
//! Hosts that run callers on multiple threads wrap the value in
//! [`SharedMarket`], which reinstates the same guarantee with one
//! exclusive lock held for the duration of each operation.
//!
//! ## Validate-then-apply
//!
//! Every mutating method performs all fallible checks first, on shared
//! borrows, then applies its writes in a block with no remaining failure
//! points. The settlement engine follows the same discipline with payout
//! dispatch as its single fallible step.

use std::sync::{Mutex, MutexGuard};

use sha2::{Digest, Sha256};

use crate::error::{InputViolation, MarketError};
use crate::ledger::admin::AdminConfig;
use crate::ledger::listings::ListingBook;
use crate::ledger::ownership::OwnershipLedger;
use crate::ledger::registry::AssetRegistry;
use crate::types::{
    AccountId, Amount, Asset, AssetId, BasisPoints, EventRecord, Listing, MarketEvent,
};

/// The digital-asset registry and exchange ledger.
///
/// ## Example
///
/// ```
/// use marketcore::ledger::Market;
///
/// let mut market = Market::new(1, 250).unwrap();
///
/// let id = market.mint(100, "ipfs://QmExample", 100).unwrap();
/// market.list(id, 100, 1_000).unwrap();
///
/// assert_eq!(market.owner_of(id), Some(100));
/// assert_eq!(market.active_listing(id).unwrap().price, 1_000);
/// ```
#[derive(Debug, Clone)]
pub struct Market {
    /// Immutable record of each asset's creator, URI and royalty rate
    registry: AssetRegistry,

    /// Current owner per asset, owned-count per account
    ownership: OwnershipLedger,

    /// Current (possibly inactive) sale listing per asset
    listings: ListingBook,

    /// Platform owner identity and the mutable fee rate
    admin: AdminConfig,

    /// Ordered notifications for external observers
    journal: Vec<EventRecord>,
}

impl Market {
    /// Create a market with the given platform owner and initial fee rate.
    pub fn new(platform_owner: AccountId, fee_bps: BasisPoints) -> Result<Self, MarketError> {
        Ok(Self {
            registry: AssetRegistry::new(),
            ownership: OwnershipLedger::new(),
            listings: ListingBook::new(),
            admin: AdminConfig::new(platform_owner, fee_bps)?,
            journal: Vec::new(),
        })
    }

    /// Create a market with pre-allocated asset capacity.
    pub fn with_capacity(
        platform_owner: AccountId,
        fee_bps: BasisPoints,
        asset_capacity: usize,
    ) -> Result<Self, MarketError> {
        Ok(Self {
            registry: AssetRegistry::with_capacity(asset_capacity),
            ownership: OwnershipLedger::new(),
            listings: ListingBook::new(),
            admin: AdminConfig::new(platform_owner, fee_bps)?,
            journal: Vec::with_capacity(asset_capacity),
        })
    }

    // ========================================================================
    // Mutating operations
    // ========================================================================

    /// Mint a new asset owned by its creator.
    ///
    /// Fails with `InvalidInput` when the royalty rate exceeds the cap; a
    /// failed mint changes nothing and consumes no id. Emits `Minted`.
    pub fn mint(
        &mut self,
        creator: AccountId,
        uri: impl Into<String>,
        royalty_bps: BasisPoints,
    ) -> Result<AssetId, MarketError> {
        let uri = uri.into();
        let asset_id = self.registry.mint(creator, uri.clone(), royalty_bps)?;

        self.ownership.assign(asset_id, creator);
        self.emit(MarketEvent::Minted {
            asset_id,
            creator,
            uri,
        });
        Ok(asset_id)
    }

    /// List an asset for sale at a fixed price.
    ///
    /// Only the current owner may list (`Unauthorized`) and the price must
    /// be positive (`InvalidInput`). Any existing record for the asset —
    /// even a still-active one — is overwritten, so relisting never needs
    /// a prior unlist. Emits `Listed`.
    pub fn list(
        &mut self,
        asset_id: AssetId,
        caller: AccountId,
        price: Amount,
    ) -> Result<(), MarketError> {
        let owner = self
            .ownership
            .owner_of(asset_id)
            .ok_or(MarketError::NotFound(asset_id))?;
        if caller != owner {
            return Err(MarketError::Unauthorized);
        }
        if price == 0 {
            return Err(MarketError::InvalidInput(InputViolation::ZeroPrice));
        }

        self.listings.put(Listing::new(asset_id, caller, price));
        self.emit(MarketEvent::Listed {
            asset_id,
            seller: caller,
            price,
        });
        Ok(())
    }

    /// Withdraw an asset's listing.
    ///
    /// Only the seller recorded in the *current* listing record may call
    /// this — not necessarily the current asset owner, since the record
    /// survives a sale. Deactivating an already-inactive record is an
    /// idempotent no-op that emits nothing; only an actual deactivation
    /// emits `Unlisted`.
    pub fn unlist(&mut self, asset_id: AssetId, caller: AccountId) -> Result<(), MarketError> {
        if !self.registry.contains(asset_id) {
            return Err(MarketError::NotFound(asset_id));
        }
        let record = self
            .listings
            .record(asset_id)
            .ok_or(MarketError::NotForSale(asset_id))?;
        if caller != record.seller {
            return Err(MarketError::Unauthorized);
        }

        if self.listings.deactivate(asset_id) {
            self.emit(MarketEvent::Unlisted { asset_id });
        }
        Ok(())
    }

    /// Replace the platform fee rate. Owner-only, capped.
    pub fn set_fee(
        &mut self,
        caller: AccountId,
        new_fee_bps: BasisPoints,
    ) -> Result<(), MarketError> {
        self.admin.set_fee(caller, new_fee_bps)
    }

    /// Commit a validated sale: move ownership, retire the listing, emit
    /// `Sold`. No failure points; the settlement engine calls this only
    /// after every payout has succeeded.
    pub(crate) fn commit_sale(
        &mut self,
        asset_id: AssetId,
        buyer: AccountId,
        seller: AccountId,
        price: Amount,
    ) {
        let prior = self.ownership.transfer(asset_id, buyer);
        debug_assert_eq!(prior, Some(seller), "sale committed against stale seller");

        self.listings.deactivate(asset_id);
        self.emit(MarketEvent::Sold {
            asset_id,
            buyer,
            seller,
            price,
        });
    }

    /// Append a notification to the journal.
    fn emit(&mut self, event: MarketEvent) {
        let seq = self.journal.len() as u64;
        self.journal.push(EventRecord::new(seq, event));
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Current owner of an asset, or `None` for an id never minted.
    #[inline]
    pub fn owner_of(&self, asset_id: AssetId) -> Option<AccountId> {
        self.ownership.owner_of(asset_id)
    }

    /// Metadata URI of an asset.
    pub fn uri_of(&self, asset_id: AssetId) -> Result<&str, MarketError> {
        self.registry
            .get(asset_id)
            .map(|asset| asset.uri.as_str())
            .ok_or(MarketError::NotFound(asset_id))
    }

    /// Full asset record.
    #[inline]
    pub fn asset(&self, asset_id: AssetId) -> Option<&Asset> {
        self.registry.get(asset_id)
    }

    /// The asset's listing, only if currently active.
    #[inline]
    pub fn active_listing(&self, asset_id: AssetId) -> Option<&Listing> {
        self.listings.active(asset_id)
    }

    /// The asset's listing record regardless of activity, for inspection
    /// of stale listings.
    #[inline]
    pub fn listing_record(&self, asset_id: AssetId) -> Option<&Listing> {
        self.listings.record(asset_id)
    }

    /// Number of assets currently held by an account.
    #[inline]
    pub fn holdings_of(&self, account: AccountId) -> u64 {
        self.ownership.holdings_of(account)
    }

    /// Sum of all holdings counts; equals `minted_count` in every
    /// reachable state.
    #[inline]
    pub fn total_held(&self) -> u64 {
        self.ownership.total_held()
    }

    /// Number of minted assets.
    #[inline]
    pub fn minted_count(&self) -> u64 {
        self.registry.len() as u64
    }

    /// Number of currently active listings.
    #[inline]
    pub fn active_listing_count(&self) -> usize {
        self.listings.active_count()
    }

    /// Identity collecting the marketplace fee.
    #[inline]
    pub fn platform_owner(&self) -> AccountId {
        self.admin.platform_owner()
    }

    /// Fee rate currently in effect (the rate a settlement will use).
    #[inline]
    pub fn fee_bps(&self) -> BasisPoints {
        self.admin.fee_bps()
    }

    /// The full notification journal, in global operation order.
    #[inline]
    pub fn events(&self) -> &[EventRecord] {
        &self.journal
    }

    /// Journal entries at or after a sequence number, for observers that
    /// resume from a checkpoint.
    pub fn events_since(&self, seq: u64) -> &[EventRecord] {
        let start = (seq as usize).min(self.journal.len());
        &self.journal[start..]
    }

    // ========================================================================
    // State commitment
    // ========================================================================

    /// SHA-256 root over the four tables.
    ///
    /// Records are folded in asset-id order with length and presence tags
    /// as domain separators, so the root is deterministic for a given
    /// state and sensitive to every stored field.
    pub fn compute_state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();

        hasher.update(self.minted_count().to_le_bytes());
        for asset in self.registry.iter() {
            asset.absorb_into(&mut hasher);

            let owner = self.ownership.owner_of(asset.id).unwrap_or_default();
            hasher.update(owner.to_le_bytes());

            match self.listings.record(asset.id) {
                Some(listing) => {
                    hasher.update([1u8]);
                    hasher.update(listing.seller.to_le_bytes());
                    hasher.update(listing.price.to_le_bytes());
                    hasher.update([listing.active as u8]);
                }
                None => hasher.update([0u8]),
            }
        }

        hasher.update(self.admin.platform_owner().to_le_bytes());
        hasher.update(self.admin.fee_bps().to_le_bytes());
        hasher.finalize().into()
    }
}

// ============================================================================
// SharedMarket
// ============================================================================

/// A [`Market`] behind one exclusive lock.
///
/// Off a naturally-serializing host, whole-operation atomicity has to be
/// reintroduced explicitly; this wrapper does it the simple way: one lock
/// around all four tables, held for the duration of each operation.
#[derive(Debug)]
pub struct SharedMarket {
    inner: Mutex<Market>,
}

impl SharedMarket {
    /// Wrap a market for sharing across threads.
    pub fn new(market: Market) -> Self {
        Self {
            inner: Mutex::new(market),
        }
    }

    /// Acquire the market for one whole operation.
    ///
    /// A poisoned lock yields the inner state anyway: market methods never
    /// leave partial mutations behind, even if the panicking thread died
    /// between operations.
    pub fn lock(&self) -> MutexGuard<'_, Market> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Unwrap back into the owned market.
    pub fn into_inner(self) -> Market {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
