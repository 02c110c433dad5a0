//! Catalog entities consumed by the circulation core.
//!
//! Books and users are passive records: they expose identity, status, and
//! role-based capability queries, while all lifecycle decisions live in the
//! loan ledger. The ledger takes live references to these records and
//! mutates only book status and user fine balance.

pub mod book;
pub mod user;

pub use book::{Book, BookKind, BookStatus};
pub use user::{User, UserRole, UserStatus};
