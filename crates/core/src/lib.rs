//! Core circulation logic for Biblio.
//!
//! This crate contains pure business logic with ZERO storage or terminal
//! dependencies. All domain types, eligibility rules, and fine calculations
//! live here.
//!
//! # Modules
//!
//! - `catalog` - Book and user catalog entities with capability queries
//! - `circulation` - Loan ledger, reservation queues, and fine policies

pub mod catalog;
pub mod circulation;
