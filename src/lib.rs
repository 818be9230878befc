//! # marketcore
//!
//! Deterministic digital-asset registry and marketplace settlement ledger.
//!
//! ## Architecture
//!
//! The core consists of:
//! - **Types**: Core data structures (Asset, Listing, MarketEvent, SettlementReceipt)
//! - **Ledger**: The four shared tables behind one owning [`Market`] aggregate
//! - **Engine**: Pure fee split plus the atomic purchase orchestrator
//!
//! ## Design Principles
//!
//! 1. **Determinism**: All operations produce identical results for identical inputs
//! 2. **No Floating Point**: All money is integer base units; splits floor in u128
//! 3. **Validate-Then-Apply**: Every operation checks first, then mutates with no
//!    remaining failure points — it fully commits or fails with zero mutation
//! 4. **Synchronous Execution**: Operations never suspend or yield mid-mutation;
//!    threaded hosts serialize through [`SharedMarket`]'s single lock
//!
//! ## Flow
//!
//! mint → registry + ownership. list → listing book (owner-checked).
//! buy → settlement engine reads book + registry, validates payment, splits the
//! price, dispatches payouts, then commits transfer + deactivation + `Sold`.
//! unlist → listing deactivation by the recorded seller.

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Asset, Listing, MarketEvent, SettlementReceipt
pub mod types;

/// Error taxonomy shared by every operation
pub mod error;

/// The four shared tables and the owning Market aggregate
pub mod ledger;

/// Fee split, payout boundary and settlement orchestration
pub mod engine;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{InputViolation, MarketError, PayoutError};
pub use engine::{CreditLedger, FeeSplit, Payout, PayoutSink, SettlementEngine};
pub use ledger::{Market, SharedMarket};
pub use types::{
    AccountId, Amount, Asset, AssetId, BasisPoints, EventRecord, Listing, MarketEvent,
    SettlementReceipt,
};
