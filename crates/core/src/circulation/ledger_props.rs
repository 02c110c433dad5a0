//! Property-based tests for the loan ledger.

use std::rc::Rc;

use biblio_shared::{BookId, CirculationConfig, UserId};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::catalog::{Book, BookKind, BookStatus, User};

use super::clock::{Clock, FixedClock};
use super::fine::{FinePolicy, StandardFinePolicy, days_overdue};
use super::ledger::LoanLedger;

/// Strategy to generate calendar dates within a few decades.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2040, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy to generate positive daily rates (0.01 to 100.00).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate positive payment amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn make_book(id: u32) -> Book {
    Book::magazine(BookId::new(id), "Tech Weekly", "Tech Publications", "Technology", "2024-03-01", 50, 15)
}

fn make_ledger(today: NaiveDate) -> (Rc<FixedClock>, LoanLedger) {
    let clock = FixedClock::shared(today);
    let ledger = LoanLedger::new(Rc::clone(&clock) as Rc<dyn Clock>);
    (clock, ledger)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* start date and loan period, a successful borrow records a
    /// due date exactly `period` days after the borrow date and flips the
    /// book to `Borrowed`.
    #[test]
    fn prop_borrow_due_date_arithmetic(
        today in any_date(),
        period in 1u32..365,
    ) {
        let (_clock, mut ledger) = make_ledger(today);
        let cfg = CirculationConfig {
            regular_loan_period_days: period,
            ..CirculationConfig::default()
        };
        let user = User::regular(UserId::new(1), "john_doe");
        let mut book = make_book(1);

        ledger.borrow_book(&user, &mut book, &cfg).unwrap();

        prop_assert_eq!(book.status, BookStatus::Borrowed);
        let tx = &ledger.transactions()[0];
        prop_assert_eq!(tx.borrowed_on, today);
        prop_assert_eq!(tx.due_on, today + Days::new(u64::from(period)));
    }

    /// *For any* borrow limit, the user can take out exactly `limit` books
    /// and the next attempt is rejected with no new transaction.
    #[test]
    fn prop_borrow_limit_is_exact(limit in 1usize..8) {
        let (_clock, mut ledger) = make_ledger(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let cfg = CirculationConfig {
            regular_borrow_limit: limit,
            ..CirculationConfig::default()
        };
        let user = User::regular(UserId::new(1), "john_doe");

        for i in 0..limit {
            let mut book = make_book(u32::try_from(i).unwrap() + 1);
            prop_assert!(ledger.borrow_book(&user, &mut book, &cfg).is_ok());
        }

        let mut extra = make_book(u32::try_from(limit).unwrap() + 1);
        prop_assert!(ledger.borrow_book(&user, &mut extra, &cfg).is_err());
        prop_assert_eq!(ledger.total_loans(), limit);
        prop_assert_eq!(ledger.active_loan_count(user.id), limit);
    }

    /// *For any* rate and lateness, the flat policy charges
    /// `days_overdue * rate`, and zero for on-time or early returns.
    #[test]
    fn prop_flat_fine_is_days_times_rate(
        due in any_date(),
        rate in positive_rate(),
        offset in -30i64..60,
    ) {
        let returned = if offset >= 0 {
            due + Days::new(u64::try_from(offset).unwrap())
        } else {
            due - Days::new(u64::try_from(-offset).unwrap())
        };
        let policy = StandardFinePolicy::new(rate);
        let fine = policy.calculate_fine(due, returned, &BookKind::ReferenceBook);

        if offset <= 0 {
            prop_assert_eq!(fine, Decimal::ZERO);
        } else {
            prop_assert_eq!(fine, Decimal::from(offset) * rate);
        }
        prop_assert_eq!(days_overdue(due, returned), offset.max(0));
    }

    /// *For any* lateness, a borrow/return round trip leaves the user's
    /// balance equal to the transaction fine, the book `Available`, and a
    /// second return rejected.
    #[test]
    fn prop_return_round_trip(
        late_days in 0u64..90,
        rate in positive_rate(),
    ) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let (clock, mut ledger) = make_ledger(start);
        ledger.set_fine_policy(Box::new(StandardFinePolicy::new(rate)));
        let cfg = CirculationConfig::default();
        let mut user = User::regular(UserId::new(1), "john_doe");
        let mut book = make_book(1);

        ledger.borrow_book(&user, &mut book, &cfg).unwrap();
        let due = ledger.transactions()[0].due_on;
        clock.set_today(due + Days::new(late_days));

        let outcome = ledger.return_book(&mut user, &mut book).unwrap();

        prop_assert_eq!(book.status, BookStatus::Available);
        prop_assert_eq!(outcome.fine, Decimal::from(late_days) * rate);
        prop_assert_eq!(user.fine_balance, outcome.fine);
        prop_assert_eq!(ledger.transactions()[0].fine, outcome.fine);
        prop_assert!(ledger.return_book(&mut user, &mut book).is_err());
    }

    /// *For any* set of reservers, the queue reports them in insertion
    /// order and cancelling one preserves the order of the rest.
    #[test]
    fn prop_reservation_queue_fifo(
        user_count in 2usize..10,
        cancel_index in 0usize..10,
    ) {
        let (_clock, mut ledger) = make_ledger(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let cfg = CirculationConfig::default();
        let borrower = User::regular(UserId::new(1000), "borrower");
        let mut book = make_book(1);
        ledger.borrow_book(&borrower, &mut book, &cfg).unwrap();

        let users: Vec<User> = (0..user_count)
            .map(|i| User::regular(UserId::new(u32::try_from(i).unwrap() + 1), format!("user{i}")))
            .collect();
        for user in &users {
            ledger.reserve_book(user, &book, &cfg).unwrap();
        }

        let order: Vec<UserId> = ledger
            .book_reservations(book.id)
            .iter()
            .map(|r| r.user_id)
            .collect();
        let expected: Vec<UserId> = users.iter().map(|u| u.id).collect();
        prop_assert_eq!(&order, &expected);

        let cancel_index = cancel_index % user_count;
        ledger.cancel_reservation(&users[cancel_index], &book).unwrap();
        let order: Vec<UserId> = ledger
            .book_reservations(book.id)
            .iter()
            .map(|r| r.user_id)
            .collect();
        let expected: Vec<UserId> = users
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != cancel_index)
            .map(|(_, u)| u.id)
            .collect();
        prop_assert_eq!(order, expected);
    }

    /// *For any* balance and payment, `pay_fine` never drives the balance
    /// negative and applies exactly `min(amount, balance)`.
    #[test]
    fn prop_pay_fine_clamps(
        balance in positive_amount(),
        payment in positive_amount(),
    ) {
        let (_clock, ledger) = make_ledger(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let mut user = User::regular(UserId::new(1), "john_doe");
        user.add_fine(balance);

        let applied = ledger.pay_fine(&mut user, payment).unwrap();

        prop_assert_eq!(applied, balance.min(payment));
        prop_assert_eq!(user.fine_balance, balance - applied);
        prop_assert!(user.fine_balance >= Decimal::ZERO);
    }

    /// *For any* current date, a swept queue holds only reservations whose
    /// expiry has not passed, in their original order.
    #[test]
    fn prop_sweep_keeps_only_active_in_order(
        advance in 0u64..20,
    ) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let (clock, mut ledger) = make_ledger(start);
        let mut cfg = CirculationConfig::default();
        let borrower = User::regular(UserId::new(1000), "borrower");
        let mut book = make_book(1);
        ledger.borrow_book(&borrower, &mut book, &cfg).unwrap();

        // Two reservations placed a few days apart with different periods.
        cfg.reservation_period_days = 3;
        let a = User::regular(UserId::new(1), "a");
        ledger.reserve_book(&a, &book, &cfg).unwrap();
        clock.advance_days(2);
        cfg.reservation_period_days = 7;
        let b = User::regular(UserId::new(2), "b");
        ledger.reserve_book(&b, &book, &cfg).unwrap();

        clock.set_today(start + Days::new(advance));
        let today = clock.today();
        let survivors = ledger.book_reservations(book.id);

        for r in &survivors {
            prop_assert!(r.is_active(today));
        }
        let ids: Vec<UserId> = survivors.iter().map(|r| r.user_id).collect();
        let mut expected = Vec::new();
        if start + Days::new(3) >= today {
            expected.push(a.id);
        }
        if start + Days::new(2 + 7) >= today {
            expected.push(b.id);
        }
        prop_assert_eq!(ids, expected);
    }
}
