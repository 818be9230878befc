//! Core data types for the marketcore ledger.
//!
//! All monetary values are integer base units (see [`amount`] for the display
//! conversion helpers). Rate fields are basis points: integer units of 1/10000
//! of a price, so 100 bps = 1%.
//!
//! ## Types
//!
//! - [`Asset`]: An immutable registered asset (creator, metadata URI, royalty)
//! - [`Listing`]: A standing offer to sell one asset at a fixed price
//! - [`MarketEvent`]: Ordered notification emitted by mutating operations
//! - [`SettlementReceipt`]: Summary of one settled sale
//!
//! ## Identifier conventions
//!
//! Asset ids are sequential `u64` values starting at 1, assigned by the
//! registry and never reused. Account identities are opaque `u64` values
//! resolved by the hosting environment.

mod asset;
mod event;
mod listing;
mod receipt;
pub mod amount;

// Re-export all types at module level
pub use asset::Asset;
pub use event::{EventRecord, MarketEvent};
pub use listing::Listing;
pub use receipt::SettlementReceipt;

/// Sequential asset identifier, starting at 1. Zero is never assigned.
pub type AssetId = u64;

/// Opaque account identity, supplied by the hosting execution environment.
pub type AccountId = u64;

/// Monetary value in integer base units.
pub type Amount = u64;

/// Rate in basis points (1/10000).
pub type BasisPoints = u16;

/// Denominator of the basis-point rate system: 10000 bps = the whole price.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Upper bound on a per-asset royalty rate (10%).
pub const MAX_ROYALTY_BPS: BasisPoints = 1_000;

/// Upper bound on the platform fee rate (10%).
///
/// Together with [`MAX_ROYALTY_BPS`] this caps the combined deduction at
/// 2000 bps, strictly below [`BPS_DENOMINATOR`], so the seller residual
/// computed by the fee engine is non-negative by construction. Revisit the
/// fee split if either cap is ever raised.
pub const MAX_PLATFORM_FEE_BPS: BasisPoints = 1_000;
