use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::{EntityId, Identifiable};
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::utils::date::{optional, serializer};

// BookEntity abstracts a physical copy in the catalog; two copies may share a title
// but never an id.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: EntityId,
    pub title: String,
    pub book_status: BookStatus,
    #[serde(with = "optional")]
    pub issued_at: Option<NaiveDateTime>,
    #[serde(with = "optional")]
    pub returned_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(book_id: EntityId, title: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            book_status: BookStatus::Available,
            issued_at: None,
            returned_at: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Marks the book as on loan.
    ///
    /// Fails with `AlreadyIssued` when the book is already out; the entity is
    /// left untouched in that case.
    pub fn issue(&mut self) -> LibraryResult<()> {
        if self.is_issued() {
            return Err(LibraryError::already_issued(
                format!("book {} '{}' is already issued", self.book_id, self.title).as_str()));
        }
        self.book_status = BookStatus::Issued;
        self.issued_at = Some(Utc::now().naive_utc());
        Ok(())
    }

    /// Marks the book as back on the shelf. Fails with `NotIssued` when it was not out.
    pub fn returned(&mut self) -> LibraryResult<()> {
        if !self.is_issued() {
            return Err(LibraryError::not_issued(
                format!("book {} '{}' is not issued", self.book_id, self.title).as_str()));
        }
        self.book_status = BookStatus::Available;
        self.returned_at = Some(Utc::now().naive_utc());
        Ok(())
    }

    // case-sensitive
    pub fn same_title(&self, other: &BookEntity) -> bool {
        self.title == other.title
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> EntityId {
        self.book_id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }
}
