//! Market event notifications.
//!
//! Every mutating operation that commits appends exactly one event to the
//! market's journal. Journal order is the global operation order; sequence
//! numbers are contiguous from 0. Fan-out to external observers is the
//! host's concern — from the core's perspective delivery is at-least-once,
//! so observers must treat the sequence number as the deduplication key.

use crate::types::{AccountId, Amount, AssetId};

/// Notification of a committed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketEvent {
    /// A new asset entered the registry
    Minted {
        asset_id: AssetId,
        creator: AccountId,
        uri: String,
    },

    /// An asset was put up (or re-put) for sale
    Listed {
        asset_id: AssetId,
        seller: AccountId,
        price: Amount,
    },

    /// A purchase settled: ownership moved and the price was distributed
    Sold {
        asset_id: AssetId,
        buyer: AccountId,
        seller: AccountId,
        price: Amount,
    },

    /// An active listing was withdrawn by its seller
    Unlisted { asset_id: AssetId },
}

impl MarketEvent {
    /// The asset this event concerns.
    pub fn asset_id(&self) -> AssetId {
        match self {
            MarketEvent::Minted { asset_id, .. }
            | MarketEvent::Listed { asset_id, .. }
            | MarketEvent::Sold { asset_id, .. }
            | MarketEvent::Unlisted { asset_id } => *asset_id,
        }
    }
}

/// A journal entry: an event plus its position in the global order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Position in the journal, contiguous from 0
    pub seq: u64,

    /// The notification payload
    pub event: MarketEvent,
}

impl EventRecord {
    pub fn new(seq: u64, event: MarketEvent) -> Self {
        Self { seq, event }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
