//! # Cash Register
//!
//! The transaction engine: validates one sale, decides among exact payment,
//! overpayment and underpayment, and applies the outcome to the drawer.
//!
//! ## Transaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     perform_transaction                             │
//! │                                                                     │
//! │  validate prices ──► total_due = Σ prices                           │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  paid < due ───────────────────────────► InsufficientPayment        │
//! │  paid == due ──► credit payment ───────► empty change               │
//! │  paid > due:                                                        │
//! │     drawer empty? ─────────────────────► NoChangeAvailable          │
//! │     minimal_change(paid - due) fails? ─► ChangeUnavailable          │
//! │     else: debit change, credit payment, return change               │
//! │                                                                     │
//! │  Every failure before the first mutation leaves the drawer          │
//! │  untouched. Completed sub-steps are NOT rolled back on a later      │
//! │  defensive failure (documented limitation, see below).              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::cash::Cash;
use crate::error::{CashResult, TransactionError, TransactionResult};
use crate::money::Money;
use crate::validation;

// =============================================================================
// CashRegister
// =============================================================================

/// Holds one drawer of cash and performs sales against it.
///
/// ## Ownership
/// The register exclusively owns its drawer; all operations take `&mut
/// self`, so the borrow checker enforces one caller at a time. The drawer
/// is never replaced, only mutated through `add`/`remove`, so it evolves in
/// place across transactions.
///
/// ## Atomicity
/// A transaction is atomic with respect to its own checks: every validation
/// failure and the change computation happen before the first drawer
/// mutation. The debit-then-credit application itself is not transactional -
/// if the defensive credit step ever failed, the already-applied debit would
/// stand. That matches the reference behavior and is a known limitation, not
/// a contract to strengthen silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashRegister {
    till: Cash,
}

impl CashRegister {
    /// Creates a register holding the given opening drawer.
    pub fn new(till: Cash) -> Self {
        CashRegister { till }
    }

    /// Read-only view of the drawer (for display and inspection).
    pub fn till(&self) -> &Cash {
        &self.till
    }

    /// Performs a transaction for one or more items against a payment.
    ///
    /// ## Arguments
    /// * `item_prices` - the price of every item in the sale, minor units
    /// * `amount_paid` - the cash the shopper handed over, by denomination
    ///
    /// ## Returns
    /// The change to hand back. Empty on exact payment.
    ///
    /// ## Errors
    /// * [`TransactionError::NoProducts`] - empty sale
    /// * [`TransactionError::InvalidPrice`] - a price ≤ 0
    /// * [`TransactionError::InsufficientPayment`] - payment below total
    /// * [`TransactionError::NoChangeAvailable`] - change owed, drawer empty
    /// * [`TransactionError::ChangeUnavailable`] - drawer stock cannot make
    ///   exact change
    /// * [`TransactionError::RegisterUpdate`] - defensive: crediting the
    ///   payment failed
    ///
    /// ## Example
    /// ```rust
    /// use kassa_core::{Cash, CashRegister, Denomination, Money};
    ///
    /// let mut register =
    ///     CashRegister::new(Cash::new().with(Denomination::TenEuro, 6));
    ///
    /// let paid = Cash::new().with(Denomination::FiftyEuro, 1);
    /// let change = register
    ///     .perform_transaction(&[Money::from_cents(30_00)], &paid)
    ///     .unwrap();
    ///
    /// assert_eq!(change, Cash::new().with(Denomination::TenEuro, 2));
    /// ```
    pub fn perform_transaction(
        &mut self,
        item_prices: &[Money],
        amount_paid: &Cash,
    ) -> TransactionResult<Cash> {
        validation::validate_item_prices(item_prices)?;

        let total_due: Money = item_prices.iter().sum();
        let paid = amount_paid.total();

        match paid.cmp(&total_due) {
            Ordering::Less => Err(TransactionError::InsufficientPayment {
                due: total_due,
                paid,
            }),

            Ordering::Equal => {
                self.credit(amount_paid)
                    .map_err(|source| TransactionError::RegisterUpdate { source })?;
                Ok(Cash::new())
            }

            Ordering::Greater => {
                // Cheap precondition: an empty drawer can never make change,
                // so report that directly instead of a failed computation
                if self.till.is_empty() {
                    return Err(TransactionError::NoChangeAvailable);
                }

                let change_due = paid - total_due;

                // Reads the drawer, mutates nothing
                let change = self
                    .till
                    .minimal_change(change_due)
                    .map_err(|source| TransactionError::ChangeUnavailable { source })?;

                // The debit is validated against exactly the stock the
                // computation observed (single caller, no interleaving), so
                // these two wrappers are defensive only
                self.debit(&change)
                    .map_err(|source| TransactionError::ChangeUnavailable { source })?;
                self.credit(amount_paid)
                    .map_err(|source| TransactionError::RegisterUpdate { source })?;

                Ok(change)
            }
        }
    }

    /// Credits every denomination of `cash` into the drawer.
    fn credit(&mut self, cash: &Cash) -> CashResult<()> {
        for (denomination, count) in cash.iter() {
            self.till.add(denomination, count)?;
        }
        Ok(())
    }

    /// Debits every denomination of `cash` from the drawer.
    fn debit(&mut self, cash: &Cash) -> CashResult<()> {
        for (denomination, count) in cash.iter() {
            self.till.remove(denomination, count)?;
        }
        Ok(())
    }
}

impl fmt::Display for CashRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CashRegister(till={})", self.till)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
