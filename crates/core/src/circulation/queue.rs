//! Per-book reservation queues.
//!
//! Strict FIFO: the first reserver is served first. Appends are O(1); the
//! expiry sweep and cancellation rebuild the sequence preserving the
//! relative order of survivors.

use std::collections::VecDeque;

use biblio_shared::UserId;
use chrono::NaiveDate;

use super::types::Reservation;

/// An ordered queue of reservations for a single book.
#[derive(Debug, Default, Clone)]
pub struct ReservationQueue {
    entries: VecDeque<Reservation>,
}

impl ReservationQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reservation to the tail.
    pub fn push(&mut self, reservation: Reservation) {
        self.entries.push_back(reservation);
    }

    /// Drops every reservation whose expiry date has passed as of `today`.
    ///
    /// Idempotent; surviving entries keep their order.
    pub fn sweep_expired(&mut self, today: NaiveDate) {
        self.entries.retain(|r| r.is_active(today));
    }

    /// Returns true if the user holds an entry in this queue.
    #[must_use]
    pub fn contains(&self, user_id: UserId) -> bool {
        self.entries.iter().any(|r| r.user_id == user_id)
    }

    /// Removes the user's entry, preserving the relative order of all other
    /// entries. Returns true if an entry was found.
    pub fn cancel(&mut self, user_id: UserId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.user_id != user_id);
        self.entries.len() < before
    }

    /// The entry at the head of the queue, if any.
    #[must_use]
    pub fn head(&self) -> Option<&Reservation> {
        self.entries.front()
    }

    /// All entries in queue order.
    pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
        self.entries.iter()
    }

    /// Number of entries in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
