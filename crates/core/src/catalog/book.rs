//! Book catalog entities.

use biblio_shared::BookId;
use serde::{Deserialize, Serialize};

/// Availability status of a catalog book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    /// On the shelf and borrowable.
    Available,
    /// Checked out to a user.
    Borrowed,
    /// Held for the next user in the reservation queue.
    Reserved,
    /// Reported lost.
    Lost,
    /// In-library use only, never borrowable.
    ReferenceOnly,
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Borrowed => write!(f, "borrowed"),
            Self::Reserved => write!(f, "reserved"),
            Self::Lost => write!(f, "lost"),
            Self::ReferenceOnly => write!(f, "reference_only"),
        }
    }
}

/// Closed set of catalog item kinds.
///
/// Subtype-specific fields ride on the variant; shared capability values are
/// computed per variant rather than via virtual dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookKind {
    /// Academic textbook.
    TextBook {
        /// Academic level (e.g., "Undergraduate", "Graduate").
        academic_level: String,
        /// Field of study.
        field: String,
    },
    /// Periodical issue.
    Magazine {
        /// Issue number within the publication run.
        issue_number: u32,
    },
    /// Reference work, in-library use only.
    ReferenceBook,
}

impl BookKind {
    /// Short label used for display and rate tables.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TextBook { .. } => "textbook",
            Self::Magazine { .. } => "magazine",
            Self::ReferenceBook => "reference",
        }
    }
}

/// A catalog book record.
///
/// The circulation ledger consumes the status and kind; all other fields are
/// descriptive metadata owned by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Unique catalog identifier.
    pub id: BookId,
    /// Title.
    pub title: String,
    /// Author or publisher.
    pub author: String,
    /// Catalog category.
    pub category: String,
    /// Publication date in `YYYY-MM-DD` form.
    pub publication_date: String,
    /// Page count.
    pub page_count: u32,
    /// Item kind.
    pub kind: BookKind,
    /// Current availability status.
    pub status: BookStatus,
}

impl Book {
    /// Creates a textbook, initially available.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn text_book(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        publication_date: impl Into<String>,
        page_count: u32,
        academic_level: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            category: category.into(),
            publication_date: publication_date.into(),
            page_count,
            kind: BookKind::TextBook {
                academic_level: academic_level.into(),
                field: field.into(),
            },
            status: BookStatus::Available,
        }
    }

    /// Creates a magazine issue, initially available.
    #[must_use]
    pub fn magazine(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        publication_date: impl Into<String>,
        page_count: u32,
        issue_number: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            category: category.into(),
            publication_date: publication_date.into(),
            page_count,
            kind: BookKind::Magazine { issue_number },
            status: BookStatus::Available,
        }
    }

    /// Creates a reference book. Reference books carry the `ReferenceOnly`
    /// status from construction and are never borrowable.
    #[must_use]
    pub fn reference(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        publication_date: impl Into<String>,
        page_count: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            category: category.into(),
            publication_date: publication_date.into(),
            page_count,
            kind: BookKind::ReferenceBook,
            status: BookStatus::ReferenceOnly,
        }
    }

    /// Returns true if the book can be borrowed right now: status is exactly
    /// `Available` and the item is not a reference work.
    #[must_use]
    pub fn is_borrowable(&self) -> bool {
        self.status == BookStatus::Available && !matches!(self.kind, BookKind::ReferenceBook)
    }
}
