//! Circulation domain records.

use biblio_shared::{BookId, TransactionId, UserId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single loan transaction in the append-only ledger log.
///
/// Created exactly once at borrow time, mutated exactly once at return time
/// (return date and fine set together), and immutable afterwards. A
/// transaction is never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTransaction {
    /// Monotonically assigned identifier, unique and never reused.
    pub id: TransactionId,
    /// The borrowing user.
    pub user_id: UserId,
    /// The borrowed book.
    pub book_id: BookId,
    /// Date the loan was taken out.
    pub borrowed_on: NaiveDate,
    /// Date the loan falls due.
    pub due_on: NaiveDate,
    /// Date the book came back, if it has.
    pub returned_on: Option<NaiveDate>,
    /// Fine accrued at return time. Zero for on-time returns.
    pub fine: Decimal,
}

impl LoanTransaction {
    /// Creates a fresh, unreturned transaction.
    #[must_use]
    pub fn new(
        id: TransactionId,
        user_id: UserId,
        book_id: BookId,
        borrowed_on: NaiveDate,
        due_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            user_id,
            book_id,
            borrowed_on,
            due_on,
            returned_on: None,
            fine: Decimal::ZERO,
        }
    }

    /// Returns true once the book has come back.
    ///
    /// The "returned" flag and the return date cannot drift apart: the flag
    /// is derived from the date.
    #[must_use]
    pub const fn is_returned(&self) -> bool {
        self.returned_on.is_some()
    }

    /// Returns true if the loan is unreturned and past due as of `today`.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_returned() && self.due_on < today
    }
}

/// A reservation held in a book's FIFO queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// The reserving user.
    pub user_id: UserId,
    /// The reserved book.
    pub book_id: BookId,
    /// Date the reservation was placed.
    pub reserved_on: NaiveDate,
    /// Date the reservation lapses. Strictly after `reserved_on`.
    pub expires_on: NaiveDate,
}

impl Reservation {
    /// Returns true while the expiry date has not yet passed.
    #[must_use]
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.expires_on >= today
    }
}

/// Outcome of a successful return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnOutcome {
    /// Fine applied for this return. Zero when on time.
    pub fine: Decimal,
    /// Head of the book's reservation queue after the expiry sweep, if any.
    ///
    /// This is a notification only: the book stays `Available` and the
    /// follow-up borrow remains a manual action.
    pub next_in_line: Option<UserId>,
}
