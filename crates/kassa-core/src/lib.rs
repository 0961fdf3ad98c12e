//! # kassa-core: Pure Business Logic for Kassa POS
//!
//! This crate is the **heart** of Kassa POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Kassa POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 Console Register (apps/register)              │  │
//! │  │    price input ──► payment input ──► receipt output           │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                ★ kassa-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │  ┌──────────────┐ ┌───────┐ ┌───────┐ ┌──────────────┐        │  │
//! │  │  │ denomination │ │ money │ │ cash  │ │   register   │        │  │
//! │  │  │ Coin / Bill  │ │ Money │ │ Cash  │ │ CashRegister │        │  │
//! │  │  │   catalog    │ │ cents │ │drawer │ │ transactions │        │  │
//! │  │  └──────────────┘ └───────┘ └───────┘ └──────────────┘        │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO CONSOLE • NO NETWORK • PURE FUNCTIONS           │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`denomination`] - The fixed coin/bill catalog
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cash`] - Bounded multiset of denominations with a running total
//! - [`register`] - The transaction engine
//! - [`error`] - Domain error types
//! - [`validation`] - Sale validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Console, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use kassa_core::{Cash, CashRegister, Denomination, Money};
//!
//! // A register opened with a small float
//! let mut register = CashRegister::new(
//!     Cash::new()
//!         .with(Denomination::FiftyEuro, 2)
//!         .with(Denomination::TenEuro, 5),
//! );
//!
//! // One item at €50.00, paid with a €100 bill
//! let paid = Cash::new().with(Denomination::OneHundredEuro, 1);
//! let change = register
//!     .perform_transaction(&[Money::from_cents(50_00)], &paid)
//!     .unwrap();
//!
//! // Change comes back as the fewest pieces the drawer can provide
//! assert_eq!(change.total(), Money::from_cents(50_00));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cash;
pub mod denomination;
pub mod error;
pub mod money;
pub mod register;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kassa_core::Cash` instead of
// `use kassa_core::cash::Cash`

pub use cash::Cash;
pub use denomination::{Denomination, DenominationKind};
pub use error::{CashError, CashResult, TransactionError, TransactionResult};
pub use money::Money;
pub use register::CashRegister;
