//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `UserId` where a `BookId` is expected.
//! IDs are plain numeric values: catalog records are keyed by small integers and
//! transaction IDs are assigned monotonically by the ledger (never reused).

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Creates an ID from a raw numeric value.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the inner numeric value.
            #[must_use]
            pub const fn into_inner(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

typed_id!(BookId, "Unique identifier for a catalog book.");
typed_id!(UserId, "Unique identifier for a library user.");
typed_id!(TransactionId, "Unique identifier for a loan transaction.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_roundtrip() {
        let id = BookId::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(BookId::from_str("42").unwrap(), id);
    }

    #[test]
    fn test_typed_id_from_u32() {
        assert_eq!(UserId::from(7), UserId::new(7));
        assert_eq!(TransactionId::from(1), TransactionId::new(1));
    }

    #[test]
    fn test_typed_id_ordering() {
        assert!(TransactionId::new(1) < TransactionId::new(2));
    }

    #[test]
    fn test_typed_id_parse_rejects_garbage() {
        assert!(BookId::from_str("not-a-number").is_err());
        assert!(BookId::from_str("").is_err());
    }
}
