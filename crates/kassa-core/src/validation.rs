//! # Validation Module
//!
//! Sale validation rules, applied before any drawer state is touched.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: Input adapter (console parser)                            │
//! │  ├── text format checks (digits, separators)                        │
//! │  └── unknown denominations rejected                                 │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rule validation                    │
//! │  ├── sale must contain at least one item                            │
//! │  └── every price must be strictly positive                          │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Drawer invariants (Cash)                                  │
//! │  └── counts can never go negative                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Checks run fail-fast, in order: the first violated rule wins. An empty
//! sale is reported as [`TransactionError::NoProducts`] even when the list
//! would also contain invalid prices.

use crate::error::{TransactionError, TransactionResult};
use crate::money::Money;

/// Validates the item prices of one sale.
///
/// ## Rules
/// 1. The list must be non-empty, else [`TransactionError::NoProducts`]
/// 2. Every price must be > 0, else [`TransactionError::InvalidPrice`]
///    carrying the first offending price
///
/// ## Example
/// ```rust
/// use kassa_core::validation::validate_item_prices;
/// use kassa_core::Money;
///
/// assert!(validate_item_prices(&[Money::from_cents(10_99)]).is_ok());
/// assert!(validate_item_prices(&[]).is_err());
/// assert!(validate_item_prices(&[Money::from_cents(0)]).is_err());
/// ```
pub fn validate_item_prices(prices: &[Money]) -> TransactionResult<()> {
    if prices.is_empty() {
        return Err(TransactionError::NoProducts);
    }

    if let Some(&price) = prices.iter().find(|p| !p.is_positive()) {
        return Err(TransactionError::InvalidPrice { price });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
