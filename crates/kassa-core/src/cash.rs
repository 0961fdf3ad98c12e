//! # Cash Module
//!
//! A bounded multiset of denominations with a running total. One type plays
//! three roles: the register's drawer stock, a customer payment and a change
//! amount handed back.
//!
//! ## Bookkeeping Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cash = counts + total                         │
//! │                                                                     │
//! │  counts: BTreeMap<Denomination, u32>     total: Money               │
//! │  ┌───────────────┬───────┐                                          │
//! │  │ 10c           │   5   │   total is maintained incrementally      │
//! │  │ €2            │   1   │   on every add/remove - it is never      │
//! │  │ €100          │   2   │   recomputed by walking the map          │
//! │  └───────────────┴───────┘                                          │
//! │                                                                     │
//! │  INVARIANTS                                                         │
//! │  • no entry has count 0 (absent means zero)                         │
//! │  • counts are u32: a negative count is unrepresentable              │
//! │  • total == Σ(count × face value) at all times                      │
//! │  • a failing remove leaves the map and total untouched              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `BTreeMap` keyed by [`Denomination`] gives ascending-value iteration for
//! free, which makes the rendering deterministic and the highest-first
//! change walk a reverse iteration.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::denomination::Denomination;
use crate::error::{CashError, CashResult};
use crate::money::Money;

// =============================================================================
// Cash
// =============================================================================

/// An ordered multiset of (denomination, count) pairs plus their total value.
///
/// ## Equality
/// Structural: two `Cash` values are equal iff they hold the same
/// (denomination, count) pairs, independent of how they were built. The
/// total is derived from the counts, so deriving equality over both fields
/// is equivalent.
///
/// ## Lifecycle
/// A drawer `Cash` lives as long as its register and evolves in place; a
/// payment or change `Cash` is transient, scoped to one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Cash {
    /// Piece counts per denomination. No zero-count entries.
    counts: BTreeMap<Denomination, u32>,

    /// Running total, kept in sync by every mutation.
    total: Money,
}

impl Cash {
    /// Creates an empty `Cash` (total zero). Doubles as the "no change due"
    /// value returned for an exactly-paid sale.
    pub fn new() -> Self {
        Cash::default()
    }

    /// A `Cash` holding `u32::MAX` pieces of every catalog denomination.
    ///
    /// Convenience for "unlimited supply" scenarios where stock should never
    /// be the limiting factor.
    pub fn unlimited() -> Self {
        Denomination::CATALOG
            .iter()
            .fold(Cash::new(), |cash, &denomination| {
                cash.with(denomination, u32::MAX)
            })
    }

    /// Consuming builder: returns `self` with `count` more pieces of
    /// `denomination`, for chained construction.
    ///
    /// Counts saturate at `u32::MAX`; the total tracks the delta actually
    /// applied, so it stays consistent even at saturation. The checked
    /// in-place path is [`add`](Cash::add).
    ///
    /// ## Example
    /// ```rust
    /// use kassa_core::{Cash, Denomination, Money};
    ///
    /// let drawer = Cash::new()
    ///     .with(Denomination::FiftyEuro, 5)
    ///     .with(Denomination::TwentyCent, 1);
    /// assert_eq!(drawer.total(), Money::from_cents(250_20));
    /// ```
    #[must_use]
    pub fn with(mut self, denomination: Denomination, count: u32) -> Self {
        let current = self.count_of(denomination);
        let updated = current.saturating_add(count);
        let applied = updated - current;
        if applied > 0 {
            self.counts.insert(denomination, updated);
            self.total += denomination.value() * applied as i64;
        }
        self
    }

    /// Adds `count` pieces of `denomination`, increasing the total by
    /// `count × value`.
    ///
    /// Fails only when the stored count would overflow `u32`, in which case
    /// nothing changes.
    pub fn add(&mut self, denomination: Denomination, count: u32) -> CashResult<()> {
        let current = self.count_of(denomination);
        let updated = current
            .checked_add(count)
            .ok_or(CashError::CountOverflow { denomination })?;
        if updated > 0 {
            self.counts.insert(denomination, updated);
        }
        self.total += denomination.value() * count as i64;
        Ok(())
    }

    /// Removes `count` pieces of `denomination`, decreasing the total by
    /// `count × value`.
    ///
    /// Fails with [`CashError::InsufficientCount`] when fewer than `count`
    /// pieces are held (an absent denomination counts as zero). The check
    /// happens before any mutation - a failing remove leaves `self`
    /// untouched. A count that reaches zero drops the entry entirely.
    pub fn remove(&mut self, denomination: Denomination, count: u32) -> CashResult<()> {
        let current = self.count_of(denomination);
        if count > current {
            return Err(CashError::InsufficientCount {
                denomination,
                available: current,
                requested: count,
            });
        }
        let updated = current - count;
        if updated == 0 {
            self.counts.remove(&denomination);
        } else {
            self.counts.insert(denomination, updated);
        }
        self.total -= denomination.value() * count as i64;
        Ok(())
    }

    /// The stored count for `denomination`, or 0 if absent. Never fails.
    #[inline]
    pub fn count_of(&self, denomination: Denomination) -> u32 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    /// The denominations currently present (count > 0), ascending by value.
    pub fn denominations(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.counts.keys().copied()
    }

    /// (denomination, count) pairs, ascending by value.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }

    /// True iff no denominations are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The total value, always equal to Σ(count × face value).
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Computes the fewest pieces from this stock that sum exactly to
    /// `amount`, greedily.
    ///
    /// ## Algorithm
    /// ```text
    /// walk stocked denominations highest value → lowest:
    ///     take min(available count, remaining / face value) pieces
    ///     subtract their value from remaining
    ///     stop once remaining hits 0
    /// remaining still > 0 after the walk → ChangeUnavailable
    /// ```
    ///
    /// Greedy is exact-optimal for this 1/2/5-scaled catalog (a canonical
    /// coin system) and is additionally constrained by physical stock: the
    /// result never proposes pieces beyond what is held.
    ///
    /// Read-only: `self` is not mutated. The caller decides whether to
    /// actually pay the computed pieces out of the drawer.
    ///
    /// ## Example
    /// ```rust
    /// use kassa_core::{Cash, Denomination, Money};
    ///
    /// let drawer = Cash::new()
    ///     .with(Denomination::FiftyCent, 10)
    ///     .with(Denomination::TwentyCent, 5);
    /// let change = drawer.minimal_change(Money::from_cents(70)).unwrap();
    ///
    /// assert_eq!(change.count_of(Denomination::FiftyCent), 1);
    /// assert_eq!(change.count_of(Denomination::TwentyCent), 1);
    /// ```
    pub fn minimal_change(&self, amount: Money) -> CashResult<Cash> {
        let mut remaining = amount;
        let mut change = Cash::new();

        for (&denomination, &available) in self.counts.iter().rev() {
            if !remaining.is_positive() {
                break;
            }

            let usable = remaining.cents() / denomination.value().cents();
            let used = usable.min(available as i64) as u32;
            if used > 0 {
                change = change.with(denomination, used);
                remaining -= denomination.value() * used as i64;
            }
        }

        if remaining.is_positive() {
            return Err(CashError::ChangeUnavailable {
                amount,
                short: remaining,
            });
        }

        Ok(change)
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Deterministic textual rendering, ascending by face value.
///
/// This is the output-adapter contract: `{10c x5, €2 x1}`, or `{}` when
/// empty.
impl fmt::Display for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (denomination, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} x{}", denomination, count)?;
        }
        write!(f, "}}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denomination::Denomination::*;

    #[test]
    fn test_equality_ignores_insertion_order() {
        let expected = Cash::new()
            .with(FiveCent, 3)
            .with(TwoCent, 1)
            .with(FiftyEuro, 2);
        let actual = Cash::new()
            .with(FiftyEuro, 2)
            .with(FiveCent, 3)
            .with(TwoCent, 1);

        assert_eq!(expected, actual);
        assert_eq!(expected.total(), actual.total());
    }

    #[test]
    fn test_inequality_when_elements_differ() {
        let expected = Cash::new()
            .with(TwoEuro, 4)
            .with(TenEuro, 1)
            .with(FiftyCent, 3)
            .with(TwentyCent, 2);
        let actual = Cash::new()
            .with(TwoEuro, 4)
            .with(TenCent, 1)
            .with(FiftyCent, 3)
            .with(TwentyCent, 2);
        assert_ne!(expected, actual);
    }

    #[test]
    fn test_inequality_when_counts_differ() {
        let expected = Cash::new().with(TwoEuro, 4).with(OneHundredEuro, 1);
        let actual = Cash::new().with(TwoEuro, 3).with(OneHundredEuro, 1);
        assert_ne!(expected, actual);
    }

    #[test]
    fn test_running_total_tracks_mutations() {
        let mut cash = Cash::new().with(FiveHundredEuro, 1).with(OneEuro, 5);
        assert_eq!(cash.total(), Money::from_cents(505_00));

        cash.add(FiftyCent, 2).unwrap();
        assert_eq!(cash.total(), Money::from_cents(506_00));

        cash.remove(OneEuro, 5).unwrap();
        assert_eq!(cash.total(), Money::from_cents(501_00));
    }

    #[test]
    fn test_count_of_absent_denomination_is_zero() {
        let cash = Cash::new().with(OneEuro, 5);
        assert_eq!(cash.count_of(OneEuro), 5);
        assert_eq!(cash.count_of(TwoEuro), 0);
    }

    #[test]
    fn test_zero_count_entries_are_dropped() {
        let mut cash = Cash::new().with(OneEuro, 2);
        cash.remove(OneEuro, 2).unwrap();

        assert!(cash.is_empty());
        assert_eq!(cash.denominations().count(), 0);
        assert_eq!(cash.total(), Money::zero());
    }

    #[test]
    fn test_remove_past_stock_fails_without_mutation() {
        let mut cash = Cash::new().with(TenCent, 1);
        let before = cash.clone();

        let err = cash.remove(TenCent, 2).unwrap_err();
        assert_eq!(
            err,
            CashError::InsufficientCount {
                denomination: TenCent,
                available: 1,
                requested: 2,
            }
        );
        assert_eq!(cash, before);

        // Removing from an absent denomination is the same violation
        assert!(cash.remove(TwoEuro, 1).is_err());
        assert_eq!(cash, before);
    }

    #[test]
    fn test_add_overflow_fails_without_mutation() {
        let mut cash = Cash::new().with(OneCent, u32::MAX);
        let before = cash.clone();

        let err = cash.add(OneCent, 1).unwrap_err();
        assert_eq!(err, CashError::CountOverflow { denomination: OneCent });
        assert_eq!(cash, before);
    }

    #[test]
    fn test_denominations_iterate_ascending() {
        let cash = Cash::new()
            .with(FiveHundredEuro, 1)
            .with(OneCent, 1)
            .with(TwoEuro, 1);
        let order: Vec<Denomination> = cash.denominations().collect();
        assert_eq!(order, vec![OneCent, TwoEuro, FiveHundredEuro]);
    }

    #[test]
    fn test_unlimited_covers_whole_catalog() {
        let cash = Cash::unlimited();
        assert_eq!(cash.denominations().count(), Denomination::CATALOG.len());
        assert_eq!(cash.count_of(FiveHundredEuro), u32::MAX);
    }

    #[test]
    fn test_minimal_change_uses_fewest_pieces() {
        let drawer = Cash::new()
            .with(OneEuro, 5)
            .with(FiftyCent, 10)
            .with(TwentyCent, 5)
            .with(TenCent, 3);

        let change = drawer.minimal_change(Money::from_cents(70)).unwrap();
        let expected = Cash::new().with(FiftyCent, 1).with(TwentyCent, 1);
        assert_eq!(change, expected);
    }

    #[test]
    fn test_minimal_change_is_bounded_by_stock() {
        // Only one €1 coin held, so €3 must fall back to smaller pieces
        let drawer = Cash::new().with(OneEuro, 1).with(FiftyCent, 10);

        let change = drawer.minimal_change(Money::from_cents(3_00)).unwrap();
        let expected = Cash::new().with(OneEuro, 1).with(FiftyCent, 4);
        assert_eq!(change, expected);
    }

    #[test]
    fn test_minimal_change_total_matches_amount() {
        let drawer = Cash::unlimited();
        for amount in [1, 3, 17, 88, 1_23, 666_66, 1234_56] {
            let amount = Money::from_cents(amount);
            assert_eq!(drawer.minimal_change(amount).unwrap().total(), amount);
        }
    }

    #[test]
    fn test_minimal_change_fails_when_stock_cannot_cover() {
        // €4.00 in the drawer, but only as €2 coins: €19.00 is unreachable
        let drawer = Cash::new().with(TwoEuro, 2);

        let err = drawer.minimal_change(Money::from_cents(19_00)).unwrap_err();
        assert_eq!(
            err,
            CashError::ChangeUnavailable {
                amount: Money::from_cents(19_00),
                short: Money::from_cents(15_00),
            }
        );

        // The failed computation did not touch the drawer
        assert_eq!(drawer.count_of(TwoEuro), 2);
        assert_eq!(drawer.total(), Money::from_cents(4_00));
    }

    #[test]
    fn test_minimal_change_does_not_mutate_source() {
        let drawer = Cash::new().with(TenEuro, 2).with(FiftyCent, 4);
        let before = drawer.clone();

        drawer.minimal_change(Money::from_cents(11_00)).unwrap();
        assert_eq!(drawer, before);
    }

    #[test]
    fn test_display_is_ascending_and_deterministic() {
        let cash = Cash::new()
            .with(OneHundredEuro, 2)
            .with(TenCent, 5)
            .with(TwoEuro, 1);
        assert_eq!(cash.to_string(), "{10c x5, €2 x1, €100 x2}");
        assert_eq!(Cash::new().to_string(), "{}");
    }

    #[test]
    fn test_serialized_shape() {
        let cash = Cash::new().with(TenCent, 2).with(FiveEuro, 1);
        let value = serde_json::to_value(&cash).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "counts": { "ten_cent": 2, "five_euro": 1 },
                "total": 520,
            })
        );
    }
}
