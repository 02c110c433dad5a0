//! The loan ledger: the authoritative record of loan transactions and the
//! live per-book reservation queues.
//!
//! The ledger enforces borrowing eligibility, records state transitions,
//! applies fines through the pluggable fine policy, and answers the
//! reporting queries. Every operation runs to completion synchronously and
//! either takes full effect or leaves no side effect. Configuration values
//! are read at call time, never cached.

use std::collections::HashMap;
use std::rc::Rc;

use biblio_shared::{BookId, CirculationConfig, TransactionId, UserId};
use chrono::Days;
use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::{Book, BookKind, BookStatus, User};

use super::clock::Clock;
use super::error::CirculationError;
use super::fine::{FinePolicy, StandardFinePolicy};
use super::queue::ReservationQueue;
use super::types::{LoanTransaction, Reservation, ReturnOutcome};

/// Result type alias for circulation operations.
pub type CirculationResult<T> = Result<T, CirculationError>;

/// The loan ledger.
///
/// Owns the append-only transaction log and the reservation queues. Book
/// status and user fine balance are mutated through the live references
/// passed into each operation; the ledger does not own catalog records.
pub struct LoanLedger {
    transactions: Vec<LoanTransaction>,
    reservations: HashMap<BookId, ReservationQueue>,
    fine_policy: Box<dyn FinePolicy>,
    clock: Rc<dyn Clock>,
    next_transaction_id: u32,
}

impl LoanLedger {
    /// Creates an empty ledger with the default flat fine policy.
    #[must_use]
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self::with_fine_policy(clock, Box::new(StandardFinePolicy::default()))
    }

    /// Creates an empty ledger with an explicit fine policy.
    #[must_use]
    pub fn with_fine_policy(clock: Rc<dyn Clock>, fine_policy: Box<dyn FinePolicy>) -> Self {
        Self {
            transactions: Vec::new(),
            reservations: HashMap::new(),
            fine_policy,
            clock,
            next_transaction_id: 1,
        }
    }

    /// Replaces the fine policy at runtime. Ledger state is untouched.
    pub fn set_fine_policy(&mut self, fine_policy: Box<dyn FinePolicy>) {
        self.fine_policy = fine_policy;
    }

    // ========================================================================
    // Borrowing
    // ========================================================================

    /// Borrows a book for a user.
    ///
    /// Preconditions, all of which must hold or the call fails with no side
    /// effect: the user is active and under the fine cap, the book status is
    /// exactly `Available` and the item is not reference-only, and the
    /// user's unreturned-loan count is strictly under the role's limit.
    ///
    /// On success a new transaction is appended with
    /// `due_on = today + loan period` and the book moves to `Borrowed`.
    pub fn borrow_book(
        &mut self,
        user: &User,
        book: &mut Book,
        cfg: &CirculationConfig,
    ) -> CirculationResult<TransactionId> {
        if !user.is_active() {
            return Err(CirculationError::UserSuspended);
        }
        if user.fine_balance >= cfg.max_fine_balance {
            return Err(CirculationError::FineCapReached {
                balance: user.fine_balance,
                cap: cfg.max_fine_balance,
            });
        }
        if matches!(book.kind, BookKind::ReferenceBook)
            || book.status == BookStatus::ReferenceOnly
        {
            return Err(CirculationError::ReferenceOnly);
        }
        if book.status != BookStatus::Available {
            return Err(CirculationError::BookNotAvailable {
                status: book.status,
            });
        }
        let limit = user.role.borrow_limit(cfg);
        if self.active_loan_count(user.id) >= limit {
            return Err(CirculationError::BorrowLimitReached { limit });
        }

        let today = self.clock.today();
        let due_on = today + Days::new(u64::from(user.role.loan_period_days(cfg)));
        let id = TransactionId::new(self.next_transaction_id);
        self.next_transaction_id += 1;

        self.transactions
            .push(LoanTransaction::new(id, user.id, book.id, today, due_on));
        book.status = BookStatus::Borrowed;

        debug!(
            transaction = %id,
            user = %user.id,
            book = %book.id,
            due = %due_on,
            "book borrowed"
        );
        Ok(id)
    }

    // ========================================================================
    // Returning
    // ========================================================================

    /// Returns a borrowed book.
    ///
    /// Finds the unique unreturned transaction for (user, book) or fails
    /// with `NoActiveLoan`; a second return of the same loan therefore fails
    /// and never double-applies a fine. When the return is late the fine
    /// policy is consulted and the amount is added to both the transaction
    /// record and the user's balance.
    ///
    /// The book always moves back to `Available`. If a still-active
    /// reservation heads the book's queue after the expiry sweep, it is
    /// surfaced in the outcome as a notification; the follow-up borrow is a
    /// manual action.
    pub fn return_book(&mut self, user: &mut User, book: &mut Book) -> CirculationResult<ReturnOutcome> {
        let today = self.clock.today();
        let idx = self
            .transactions
            .iter()
            .position(|t| t.user_id == user.id && t.book_id == book.id && !t.is_returned())
            .ok_or(CirculationError::NoActiveLoan)?;

        let due_on = self.transactions[idx].due_on;
        let fine = if today > due_on {
            self.fine_policy.calculate_fine(due_on, today, &book.kind)
        } else {
            Decimal::ZERO
        };

        let tx = &mut self.transactions[idx];
        tx.returned_on = Some(today);
        tx.fine = fine;
        if fine > Decimal::ZERO {
            user.add_fine(fine);
        }
        book.status = BookStatus::Available;

        let next_in_line = self.reservations.get_mut(&book.id).and_then(|queue| {
            queue.sweep_expired(today);
            queue.head().map(|r| r.user_id)
        });

        debug!(
            transaction = %self.transactions[idx].id,
            user = %user.id,
            book = %book.id,
            fine = %fine,
            next_in_line = ?next_in_line,
            "book returned"
        );
        Ok(ReturnOutcome { fine, next_in_line })
    }

    // ========================================================================
    // Reservations
    // ========================================================================

    /// Places a reservation on a borrowed book.
    ///
    /// Reserving an `Available` book is rejected (it should simply be
    /// borrowed). The book's queue is swept before the duplicate check, so
    /// an expired earlier reservation does not block a new one.
    pub fn reserve_book(
        &mut self,
        user: &User,
        book: &Book,
        cfg: &CirculationConfig,
    ) -> CirculationResult<()> {
        if !user.can_reserve() {
            return Err(CirculationError::CannotReserve);
        }
        if book.status != BookStatus::Borrowed {
            return Err(CirculationError::BookNotOnLoan {
                status: book.status,
            });
        }
        // Expiry must land strictly after the reservation date.
        if cfg.reservation_period_days == 0 {
            return Err(CirculationError::InvalidReservationPeriod(0));
        }

        let today = self.clock.today();
        let queue = self.reservations.entry(book.id).or_default();
        queue.sweep_expired(today);
        if queue.contains(user.id) {
            return Err(CirculationError::DuplicateReservation);
        }

        let expires_on = today + Days::new(u64::from(cfg.reservation_period_days));
        queue.push(Reservation {
            user_id: user.id,
            book_id: book.id,
            reserved_on: today,
            expires_on,
        });

        debug!(user = %user.id, book = %book.id, expires = %expires_on, "book reserved");
        Ok(())
    }

    /// Cancels a user's reservation on a book.
    ///
    /// Fails with `ReservationNotFound` when no entry matches; otherwise the
    /// entry is removed and all other entries keep their relative order.
    pub fn cancel_reservation(&mut self, user: &User, book: &Book) -> CirculationResult<()> {
        let found = self
            .reservations
            .get_mut(&book.id)
            .is_some_and(|queue| queue.cancel(user.id));
        if !found {
            return Err(CirculationError::ReservationNotFound);
        }
        debug!(user = %user.id, book = %book.id, "reservation cancelled");
        Ok(())
    }

    /// Reservations for a book, in queue order, after the expiry sweep.
    pub fn book_reservations(&mut self, book_id: BookId) -> Vec<Reservation> {
        let today = self.clock.today();
        match self.reservations.get_mut(&book_id) {
            Some(queue) => {
                queue.sweep_expired(today);
                queue.iter().cloned().collect()
            }
            None => Vec::new(),
        }
    }

    /// A user's reservations across all books, after the expiry sweep.
    pub fn user_reservations(&mut self, user_id: UserId) -> Vec<Reservation> {
        let today = self.clock.today();
        let mut result = Vec::new();
        for queue in self.reservations.values_mut() {
            queue.sweep_expired(today);
            result.extend(queue.iter().filter(|r| r.user_id == user_id).cloned());
        }
        result
    }

    // ========================================================================
    // Fine payment
    // ========================================================================

    /// Pays down a user's fine balance.
    ///
    /// Fails when `amount <= 0`. The amount is clamped to the current
    /// balance (overpaying is impossible) and the clamped amount, which may
    /// be zero for a user who owes nothing, is deducted and returned.
    #[allow(clippy::unused_self)]
    pub fn pay_fine(&self, user: &mut User, amount: Decimal) -> CirculationResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(CirculationError::InvalidAmount(amount));
        }
        let applied = amount.min(user.fine_balance);
        user.deduct_fine(applied);
        debug!(user = %user.id, applied = %applied, balance = %user.fine_balance, "fine paid");
        Ok(applied)
    }

    // ========================================================================
    // Reporting queries (pure, recomputed per call)
    // ========================================================================

    /// Total number of transactions ever recorded.
    #[must_use]
    pub fn total_loans(&self) -> usize {
        self.transactions.len()
    }

    /// Number of currently unreturned transactions.
    #[must_use]
    pub fn active_loans(&self) -> usize {
        self.transactions.iter().filter(|t| !t.is_returned()).count()
    }

    /// Number of unreturned transactions for one user.
    #[must_use]
    pub fn active_loan_count(&self, user_id: UserId) -> usize {
        self.transactions
            .iter()
            .filter(|t| t.user_id == user_id && !t.is_returned())
            .count()
    }

    /// Number of unreturned transactions past their due date.
    #[must_use]
    pub fn overdue_count(&self) -> usize {
        self.overdue_transactions().len()
    }

    /// Unreturned transactions whose due date is before the current date.
    #[must_use]
    pub fn overdue_transactions(&self) -> Vec<&LoanTransaction> {
        let today = self.clock.today();
        self.transactions
            .iter()
            .filter(|t| t.is_overdue(today))
            .collect()
    }

    /// Aggregate of all fines recorded on transactions.
    #[must_use]
    pub fn total_fines(&self) -> Decimal {
        self.transactions.iter().map(|t| t.fine).sum()
    }

    /// Sum of fines across one user's returned transactions.
    #[must_use]
    pub fn user_fine_total(&self, user_id: UserId) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.user_id == user_id && t.is_returned())
            .map(|t| t.fine)
            .sum()
    }

    /// Full transaction history for one user, oldest first.
    #[must_use]
    pub fn user_transactions(&self, user_id: UserId) -> Vec<&LoanTransaction> {
        self.transactions
            .iter()
            .filter(|t| t.user_id == user_id)
            .collect()
    }

    /// Full transaction history for one book, oldest first.
    #[must_use]
    pub fn book_transactions(&self, book_id: BookId) -> Vec<&LoanTransaction> {
        self.transactions
            .iter()
            .filter(|t| t.book_id == book_id)
            .collect()
    }

    /// The whole transaction log, oldest first.
    #[must_use]
    pub fn transactions(&self) -> &[LoanTransaction] {
        &self.transactions
    }
}
