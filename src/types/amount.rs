//! Fixed-point amount display and parsing.
//!
//! All ledger arithmetic happens on integer base units; this module only
//! converts between those integers and human-readable decimal strings at
//! the edges (CLI output, logs, demo tooling).
//!
//! ## Why Fixed-Point?
//!
//! Floating-point arithmetic can produce different results on different
//! hardware, breaking determinism. Amounts therefore stay `u64` base units
//! everywhere inside the ledger, and conversion goes through
//! `rust_decimal` rather than `f64`.
//!
//! ## Scale Factor
//!
//! One display unit is 10^8 base units (8 decimal places).
//!
//! ```
//! use marketcore::types::amount::{parse_amount, format_amount};
//!
//! let price = parse_amount("0.5").unwrap();
//! assert_eq!(price, 50_000_000);
//! assert_eq!(format_amount(price), "0.50000000");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Base units per display unit: 10^8, giving 8 decimal places.
pub const SCALE: u64 = 100_000_000;

/// Parse a decimal string into base units.
///
/// Returns `None` for negative, malformed or out-of-range input.
///
/// ```
/// use marketcore::types::amount::parse_amount;
///
/// assert_eq!(parse_amount("1"), Some(100_000_000));
/// assert_eq!(parse_amount("0.00000001"), Some(1));
/// assert_eq!(parse_amount("-1"), None);
/// assert_eq!(parse_amount("abc"), None);
/// ```
pub fn parse_amount(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s).ok()?;
    if decimal.is_sign_negative() {
        return None;
    }
    let scaled = decimal.checked_mul(Decimal::from(SCALE))?;
    scaled.round_dp(0).to_u64()
}

/// Format base units as a decimal string with 8 decimal places.
///
/// ```
/// use marketcore::types::amount::format_amount;
///
/// assert_eq!(format_amount(100_000_000), "1.00000000");
/// assert_eq!(format_amount(965), "0.00000965");
/// ```
pub fn format_amount(base_units: u64) -> String {
    let decimal = Decimal::from(base_units) / Decimal::from(SCALE);
    format!("{:.8}", decimal)
}

/// Format base units with trailing zeros trimmed.
///
/// ```
/// use marketcore::types::amount::format_amount_trimmed;
///
/// assert_eq!(format_amount_trimmed(100_000_000), "1");
/// assert_eq!(format_amount_trimmed(150_000_000), "1.5");
/// ```
pub fn format_amount_trimmed(base_units: u64) -> String {
    let decimal = Decimal::from(base_units) / Decimal::from(SCALE);
    format!("{}", decimal.normalize())
}

// ============================================================================
// Unit Tests
// ============================================================================
