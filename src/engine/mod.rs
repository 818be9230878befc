//! Settlement module: pure fee math, the payout boundary and the purchase
//! orchestrator.
//!
//! ## Settlement rules
//!
//! - Payment must equal the listing price exactly; no tolerance, no refunds
//! - The split uses the asset's mint-time royalty rate and the platform
//!   fee rate in effect at purchase time
//! - Payouts go out as one all-or-nothing batch before any table mutates
//! - Zero-amount shares are skipped rather than dispatched
//!
//! ## Example
//!
//! ```
//! use marketcore::engine::{SettlementEngine, payout::CreditLedger};
//! use marketcore::ledger::Market;
//!
//! let mut market = Market::new(1, 250).unwrap();
//! let id = market.mint(100, "ipfs://QmExample", 100).unwrap();
//! market.list(id, 100, 1_000).unwrap();
//!
//! let mut engine = SettlementEngine::new();
//! let mut sink = CreditLedger::new();
//! let receipt = engine.purchase(&mut market, id, 200, 1_000, &mut sink).unwrap();
//!
//! assert_eq!(receipt.marketplace_fee + receipt.royalty_fee + receipt.seller_amount,
//!            receipt.price);
//! ```

pub mod fees;
pub mod payout;
pub mod settlement;

pub use fees::{split, FeeSplit};
pub use payout::{CreditLedger, Payout, PayoutSink};
pub use settlement::SettlementEngine;
