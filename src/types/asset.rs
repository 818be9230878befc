//! Registered asset record.
//!
//! An [`Asset`] is created exactly once when minted and is immutable from
//! that point on. The registry never deletes assets, so the record doubles
//! as the permanent provenance entry for royalty payouts: the creator and
//! royalty rate recorded here are consulted on every future sale.

use sha2::{Digest, Sha256};

use crate::types::{AccountId, AssetId, BasisPoints};

/// An immutable registered asset.
///
/// ## Fields
///
/// The metadata URI is an opaque string; resolving it is the host's concern.
/// `royalty_bps` is fixed at mint time and bounded by
/// [`MAX_ROYALTY_BPS`](crate::types::MAX_ROYALTY_BPS).
///
/// ## Example
///
/// ```
/// use marketcore::types::Asset;
///
/// let asset = Asset::new(1, 100, "ipfs://QmExample".to_owned(), 250);
/// assert_eq!(asset.id, 1);
/// assert_eq!(asset.royalty_bps, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Sequential identifier assigned by the registry (starts at 1)
    pub id: AssetId,

    /// Identity of the original creator; royalty payouts go here forever
    pub creator: AccountId,

    /// Opaque metadata URI
    pub uri: String,

    /// Royalty rate in basis points, fixed at mint
    pub royalty_bps: BasisPoints,
}

impl Asset {
    /// Create a new asset record.
    ///
    /// The caller (the registry) is responsible for id assignment and for
    /// enforcing the royalty bound before construction.
    pub fn new(id: AssetId, creator: AccountId, uri: String, royalty_bps: BasisPoints) -> Self {
        Self {
            id,
            creator,
            uri,
            royalty_bps,
        }
    }

    /// Fold this record into a running SHA-256 hash.
    ///
    /// The variable-length URI is preceded by its byte length so that
    /// adjacent records cannot alias each other in the digest stream.
    pub fn absorb_into(&self, hasher: &mut Sha256) {
        hasher.update(self.id.to_le_bytes());
        hasher.update(self.creator.to_le_bytes());
        hasher.update((self.uri.len() as u64).to_le_bytes());
        hasher.update(self.uri.as_bytes());
        hasher.update(self.royalty_bps.to_le_bytes());
    }

    /// Standalone SHA-256 digest of this record.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        self.absorb_into(&mut hasher);
        hasher.finalize().into()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
