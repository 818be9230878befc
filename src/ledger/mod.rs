//! Ledger module: the four shared tables and the aggregate that owns them.
//!
//! ## Architecture
//!
//! - [`AssetRegistry`]: append-only table of minted assets, sequential ids
//! - [`OwnershipLedger`]: current owner per asset, holdings per account
//! - [`ListingBook`]: current (possibly inactive) listing per asset
//! - [`AdminConfig`]: platform owner and the mutable fee rate
//! - [`Market`]: the owning aggregate; the only path to mutation
//! - [`SharedMarket`]: `Market` behind one exclusive lock for threaded hosts
//!
//! The component tables carry no authorization logic of their own; the
//! [`Market`] methods enforce caller identity because they alone can see
//! both the ownership ledger and the listing book.
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Mint | O(1) amortized |
//! | Asset lookup | O(1) |
//! | List / unlist | O(1) |
//! | Owner / holdings lookup | O(1) |
//! | State root | O(n) over minted assets |

pub mod admin;
pub mod listings;
pub mod market;
pub mod ownership;
pub mod registry;

pub use admin::AdminConfig;
pub use listings::ListingBook;
pub use market::{Market, SharedMarket};
pub use ownership::OwnershipLedger;
pub use registry::AssetRegistry;
