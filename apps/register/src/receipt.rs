//! # Receipt Rendering
//!
//! Builds the printable record of one completed sale: a unique transaction
//! id, a human-readable receipt number, the item lines, totals and the
//! change breakdown.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use kassa_core::{Cash, Money};

/// The printable record of one completed sale.
#[derive(Debug, Clone)]
pub struct Receipt {
    /// Globally unique transaction id (UUID v4).
    pub transaction_id: String,

    /// Human-readable receipt number, `YYMMDD-HHMMSS-NNNN`.
    pub receipt_number: String,

    /// When the sale completed.
    pub timestamp: DateTime<Utc>,

    /// Price of every item sold.
    pub item_prices: Vec<Money>,

    /// Sum of the item prices.
    pub total: Money,

    /// What the shopper tendered.
    pub tendered: Money,

    /// The change handed back, by denomination.
    pub change: Cash,
}

impl Receipt {
    /// Creates the receipt for a just-completed sale.
    pub fn new(item_prices: &[Money], amount_paid: &Cash, change: &Cash) -> Self {
        Receipt {
            transaction_id: Uuid::new_v4().to_string(),
            receipt_number: generate_receipt_number(),
            timestamp: Utc::now(),
            item_prices: item_prices.to_vec(),
            total: item_prices.iter().sum(),
            tendered: amount_paid.total(),
            change: change.clone(),
        }
    }
}

/// Generates a human-readable receipt number.
///
/// Format: `YYMMDD-HHMMSS-NNNN` where NNNN is derived from the sub-second
/// clock, enough to keep receipts printed in the same second apart.
fn generate_receipt_number() -> String {
    let now = Utc::now();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    let suffix: u16 = (nanos % 10000) as u16;
    format!("{}-{:04}", now.format("%y%m%d-%H%M%S"), suffix)
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------------------------------------")?;
        writeln!(f, " Receipt {}", self.receipt_number)?;
        writeln!(f, " {}", self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(f, " Txn {}", self.transaction_id)?;
        writeln!(f, "----------------------------------------")?;
        for (i, price) in self.item_prices.iter().enumerate() {
            writeln!(f, " Item {:<3} {:>29}", i + 1, price.to_string())?;
        }
        writeln!(f, " Total    {:>29}", self.total.to_string())?;
        writeln!(f, " Tendered {:>29}", self.tendered.to_string())?;
        writeln!(f, " Change   {:>29}", self.change.total().to_string())?;
        if !self.change.is_empty() {
            writeln!(f, "   {}", self.change)?;
        }
        write!(f, "----------------------------------------")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kassa_core::Denomination::*;

    #[test]
    fn test_receipt_totals() {
        let prices = [Money::from_cents(13_25), Money::from_cents(6_75)];
        let paid = Cash::new().with(TwentyEuro, 1).with(TwoEuro, 1);
        let change = Cash::new().with(TwoEuro, 1);

        let receipt = Receipt::new(&prices, &paid, &change);

        assert_eq!(receipt.total, Money::from_cents(20_00));
        assert_eq!(receipt.tendered, Money::from_cents(22_00));
        assert_eq!(receipt.change.total(), Money::from_cents(2_00));
    }

    #[test]
    fn test_receipt_number_shape() {
        let number = generate_receipt_number();
        // YYMMDD-HHMMSS-NNNN
        assert_eq!(number.len(), 18);
        assert_eq!(number.matches('-').count(), 2);
    }

    #[test]
    fn test_display_contains_change_breakdown() {
        let prices = [Money::from_cents(1_30)];
        let paid = Cash::new().with(TwoEuro, 1);
        let change = Cash::new().with(FiftyCent, 1).with(TwentyCent, 1);

        let rendered = Receipt::new(&prices, &paid, &change).to_string();
        assert!(rendered.contains("Total"));
        assert!(rendered.contains("€1.30"));
        assert!(rendered.contains("{20c x1, 50c x1}"));
    }
}
