//! # Error Types
//!
//! Domain-specific error types for kassa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  kassa-core errors (this file)                                      │
//! │  ├── CashError         - Drawer bookkeeping failures                │
//! │  └── TransactionError  - Sale-level failures                        │
//! │                                                                     │
//! │  Flow: CashError ──(wrapped as source)──► TransactionError ──►      │
//! │        console adapter prints the message and keeps looping         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (denomination, amounts)
//! 3. Errors are enum variants, never String
//! 4. Every failure here is an expected, recoverable condition - the
//!    register keeps serving customers after reporting it

use thiserror::Error;

use crate::denomination::Denomination;
use crate::money::Money;

// =============================================================================
// Cash Error
// =============================================================================

/// Failures raised by [`Cash`](crate::cash::Cash) itself.
///
/// These are the primitive failures; the transaction engine wraps them with
/// sale-level context when they surface mid-transaction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CashError {
    /// A removal asked for more pieces of a denomination than are held.
    ///
    /// This is the invariant guard: counts can never go negative, and the
    /// failing removal leaves the drawer untouched.
    #[error("Cannot remove {requested} x {denomination}: only {available} held")]
    InsufficientCount {
        denomination: Denomination,
        available: u32,
        requested: u32,
    },

    /// An addition would push a denomination count past `u32::MAX`.
    ///
    /// Unreachable in any physical drawer; exists so crediting a payment has
    /// a typed failure instead of silent wraparound.
    #[error("Count overflow for {denomination}")]
    CountOverflow { denomination: Denomination },

    /// The stocked denominations cannot sum exactly to the requested amount.
    ///
    /// `short` is what remained uncovered after walking the whole catalog
    /// highest-first.
    #[error("Insufficient change available to cover {amount} (short {short})")]
    ChangeUnavailable { amount: Money, short: Money },
}

// =============================================================================
// Transaction Error
// =============================================================================

/// Sale-level failures raised by [`CashRegister`](crate::register::CashRegister).
///
/// Every variant is inspectable by the caller; the ones that originate from
/// a drawer mutation carry the underlying [`CashError`] as their source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    /// The sale contained no items.
    #[error("No products provided")]
    NoProducts,

    /// A product price was zero or negative.
    #[error("All product prices must be greater than zero (got {price})")]
    InvalidPrice { price: Money },

    /// The payment total does not cover the price total.
    #[error("Insufficient payment: {due} due, {paid} paid")]
    InsufficientPayment { due: Money, paid: Money },

    /// Change is owed but the register holds no cash at all.
    #[error("Empty cash register, no change available")]
    NoChangeAvailable,

    /// The register holds cash, but not the denominations needed to make
    /// exact change for this sale.
    #[error("Unable to provide the required change")]
    ChangeUnavailable {
        #[source]
        source: CashError,
    },

    /// Crediting the payment into the drawer failed.
    ///
    /// Should be unreachable under correct validation - kept as a typed
    /// wrapper rather than a panic.
    #[error("Unable to add cash to the register")]
    RegisterUpdate {
        #[source]
        source: CashError,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CashError.
pub type CashResult<T> = Result<T, CashError>;

/// Convenience type alias for Results with TransactionError.
pub type TransactionResult<T> = Result<T, TransactionError>;

// =============================================================================
// Unit Tests
// =============================================================================
