use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::{EntityId, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};
use crate::parties::domain::Person;
use crate::utils::date::serializer;

// PersonEntity holds the name and age shared by every party of the library
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct PersonEntity {
    pub name: String,
    pub age: u32,
}

impl PersonEntity {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

// MemberEntity is a borrower. Issued books are kept as a stack of book ids, the most
// recent on top; the books themselves stay owned by the library.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MemberEntity {
    pub member_id: EntityId,
    pub person: PersonEntity,
    pub issued_books: Vec<EntityId>,
    pub max_issued_books: usize,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl MemberEntity {
    pub fn new(member_id: EntityId, name: &str, age: u32, max_issued_books: usize) -> Self {
        Self {
            member_id,
            person: PersonEntity::new(name, age),
            issued_books: vec![],
            max_issued_books,
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn is_at_capacity(&self) -> bool {
        self.issued_books.len() >= self.max_issued_books
    }

    /// Issues `book` to this member and pushes it on top of the member's stack.
    ///
    /// Capacity is checked first, then the book's own state; on any error neither
    /// the member nor the book is modified.
    pub fn issue(&mut self, book: &mut BookEntity) -> LibraryResult<()> {
        if self.is_at_capacity() {
            return Err(LibraryError::capacity_exceeded(
                format!("maximum number of books already issued to member {} '{}'",
                        self.member_id, self.person.name).as_str(), self.max_issued_books));
        }
        book.issue()?;
        self.issued_books.push(book.id());
        Ok(())
    }

    /// Takes `book` back from this member. Fails with `NotIssued` when the member
    /// does not hold it.
    pub fn returned(&mut self, book: &mut BookEntity) -> LibraryResult<()> {
        let Some(pos) = self.issued_books.iter().position(|id| *id == book.id()) else {
            return Err(LibraryError::not_issued(
                format!("book {} '{}' is not issued to member {} '{}'",
                        book.id(), book.title(), self.member_id, self.person.name).as_str()));
        };
        book.returned()?;
        self.issued_books.remove(pos);
        Ok(())
    }

    pub fn last_issued(&self) -> Option<EntityId> {
        self.issued_books.last().copied()
    }
}

impl Identifiable for MemberEntity {
    fn id(&self) -> EntityId {
        self.member_id
    }
}

impl Person for MemberEntity {
    fn name(&self) -> &str {
        self.person.name.as_str()
    }

    fn age(&self) -> u32 {
        self.person.age
    }
}

// LibrarianEntity identifies library staff
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LibrarianEntity {
    pub librarian_id: EntityId,
    pub person: PersonEntity,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl LibrarianEntity {
    pub fn new(librarian_id: EntityId, name: &str, age: u32) -> Self {
        Self {
            librarian_id,
            person: PersonEntity::new(name, age),
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for LibrarianEntity {
    fn id(&self) -> EntityId {
        self.librarian_id
    }
}

impl Person for LibrarianEntity {
    fn name(&self) -> &str {
        self.person.name.as_str()
    }

    fn age(&self) -> u32 {
        self.person.age
    }
}
