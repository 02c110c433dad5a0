//! Biblio circulation walkthrough.
//!
//! Seeds a small catalog and drives the loan ledger through borrow, return,
//! reservation, and fine-payment flows, logging each outcome. Useful for
//! eyeballing behavior during development; the real front end lives outside
//! this workspace.

use std::rc::Rc;

use rust_decimal_macros::dec;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblio_core::catalog::{Book, User};
use biblio_core::circulation::{Clock, LoanLedger, StandardFinePolicy, SystemClock};
use biblio_shared::{BookId, CirculationConfig, UserId};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "biblio=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let cfg = CirculationConfig::load().unwrap_or_else(|err| {
        warn!(%err, "failed to load configuration, using defaults");
        CirculationConfig::default()
    });
    info!(
        regular_borrow_limit = cfg.regular_borrow_limit,
        daily_fine_rate = %cfg.daily_fine_rate,
        "configuration loaded"
    );

    let clock: Rc<dyn Clock> = Rc::new(SystemClock);
    let mut ledger = LoanLedger::with_fine_policy(
        clock,
        Box::new(StandardFinePolicy::new(cfg.daily_fine_rate)),
    );

    // Seed a small catalog.
    let mut textbook = Book::text_book(
        BookId::new(1),
        "Advanced Systems Programming",
        "John Doe",
        "Programming",
        "2023-01-15",
        450,
        "Graduate",
        "Computer Science",
    );
    let mut magazine = Book::magazine(
        BookId::new(2),
        "Tech Weekly",
        "Tech Publications",
        "Technology",
        "2024-03-01",
        50,
        15,
    );
    let mut reference = Book::reference(
        BookId::new(3),
        "Library Management Handbook",
        "Jane Smith",
        "Reference",
        "2022-06-10",
        300,
    );

    let mut john = User::regular(UserId::new(1), "john_doe");
    let jane = User::regular(UserId::new(2), "jane_smith");

    // Borrow and reserve.
    let tx = ledger.borrow_book(&john, &mut textbook, &cfg)?;
    info!(%tx, title = %textbook.title, "john borrowed the textbook");

    if let Err(err) = ledger.borrow_book(&john, &mut reference, &cfg) {
        info!(code = err.error_code(), "reference book rejected as expected");
    }

    ledger.reserve_book(&jane, &textbook, &cfg)?;
    info!(queue_len = ledger.book_reservations(textbook.id).len(), "jane reserved the textbook");

    // Return; same-day, so no fine accrues.
    let outcome = ledger.return_book(&mut john, &mut textbook)?;
    info!(
        fine = %outcome.fine,
        next_in_line = ?outcome.next_in_line,
        "john returned the textbook"
    );

    // Fine payment, clamped to the outstanding balance.
    john.add_fine(dec!(25.00));
    let applied = ledger.pay_fine(&mut john, dec!(40.00))?;
    info!(%applied, balance = %john.fine_balance, "john settled his fines");

    ledger.borrow_book(&jane, &mut magazine, &cfg)?;
    info!(
        total_loans = ledger.total_loans(),
        active_loans = ledger.active_loans(),
        overdue = ledger.overdue_count(),
        total_fines = %ledger.total_fines(),
        "final ledger statistics"
    );

    Ok(())
}
