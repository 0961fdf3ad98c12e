//! # Kassa Console Register Entry Point
//!
//! An interactive cash register on stdin/stdout: the cashier enters the item
//! prices of a sale and the denominations the shopper handed over, and the
//! register answers with a receipt, the change breakdown and the updated
//! drawer state.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Console Register Session                        │
//! │                                                                     │
//! │  startup ──► init tracing ──► open drawer with the float            │
//! │                                                                     │
//! │  loop:                                                              │
//! │    "Product prices: "  13.25,32.75        ("0" exits)               │
//! │    "Payment: "         50_00x1,10_00x1                              │
//! │         │                                                           │
//! │         ▼                                                           │
//! │    CashRegister::perform_transaction                                │
//! │         │                                                           │
//! │         ├── Ok(change) ──► print receipt + updated drawer           │
//! │         └── Err(e) ──────► print the message, keep serving          │
//! │                                                                     │
//! │  Parse errors and failed transactions never end the session -       │
//! │  every error in this program is a recoverable condition.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Build the opening float
//! 3. Enter the prompt loop

mod input;
mod receipt;

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn, Level};
use tracing_subscriber::EnvFilter;

use kassa_core::{Cash, CashRegister, Denomination};

use crate::input::{parse_payment, parse_prices};
use crate::receipt::Receipt;

fn main() -> io::Result<()> {
    init_tracing();
    info!("Starting Kassa POS console register");

    let mut register = CashRegister::new(opening_float());
    info!(total = %register.till().total(), "Drawer opened with the float");

    println!("Welcome to the Kassa POS register!");
    println!("Initial register state: {register}");
    println!("Enter product prices (comma-separated) or 0 to exit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(price_line) = prompt(&mut lines, "\nProduct prices (comma-separated): ")? else {
            break;
        };
        if price_line.trim() == "0" {
            println!("Exiting. Thank you!");
            break;
        }

        let prices = match parse_prices(&price_line) {
            Ok(prices) => prices,
            Err(e) => {
                warn!(%e, "Rejected price input");
                println!("Invalid input: {e}");
                continue;
            }
        };
        debug!(?prices, "Parsed prices");

        let Some(payment_line) = prompt(&mut lines, "Payment (VALUExCOUNT, e.g. 500_00x1,20x2): ")?
        else {
            break;
        };
        let paid = match parse_payment(&payment_line) {
            Ok(paid) => paid,
            Err(e) => {
                warn!(%e, "Rejected payment input");
                println!("Invalid input: {e}");
                continue;
            }
        };
        debug!(paid = %paid, "Parsed payment");

        match register.perform_transaction(&prices, &paid) {
            Ok(change) => {
                let receipt = Receipt::new(&prices, &paid, &change);
                info!(
                    receipt = %receipt.receipt_number,
                    total = %receipt.total,
                    change = %change.total(),
                    "Transaction complete"
                );
                println!("{receipt}");
                println!("Updated register state: {register}");
            }
            Err(e) => {
                warn!(%e, "Transaction failed");
                println!("Transaction failed: {e}");
            }
        }
    }

    Ok(())
}

/// Prints a prompt and reads one line; `None` on end of input.
fn prompt(
    lines: &mut io::Lines<io::StdinLock<'static>>,
    text: &str,
) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    lines.next().transpose()
}

/// The cash the drawer opens with.
///
/// A realistic mix: enough bills for large change plus a spread of coins.
fn opening_float() -> Cash {
    Cash::new()
        .with(Denomination::FiveHundredEuro, 2)
        .with(Denomination::OneHundredEuro, 3)
        .with(Denomination::FiftyEuro, 5)
        .with(Denomination::TwentyEuro, 7)
        .with(Denomination::TenEuro, 6)
        .with(Denomination::OneEuro, 10)
        .with(Denomination::FiftyCent, 20)
        .with(Denomination::TwentyCent, 1)
        .with(Denomination::TenCent, 2)
        .with(Denomination::FiveCent, 5)
        .with(Denomination::TwoCent, 10)
        .with(Denomination::OneCent, 15)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Honors `RUST_LOG` when set; defaults to info-level output with debug
/// detail for the kassa crates.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kassa_core=debug,kassa_register=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================
