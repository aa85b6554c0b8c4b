pub mod service;

use std::io::Write;
use crate::books::domain::model::BookEntity;
use crate::core::domain::{Configuration, DisplayFormat, EntityId};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::parties::domain::model::{LibrarianEntity, MemberEntity};

// LibraryService owns every book, member and librarian and mediates issue/return
// by member name and book title. Lookups return the first exact match.
pub trait LibraryService {
    fn config(&self) -> &Configuration;

    fn add_book(&mut self, title: &str) -> LibraryResult<&BookEntity>;
    fn remove_book(&mut self, title: &str) -> LibraryResult<BookEntity>;
    fn add_member(&mut self, name: &str, age: u32) -> LibraryResult<&MemberEntity>;
    fn add_librarian(&mut self, name: &str, age: u32) -> LibraryResult<&LibrarianEntity>;

    fn find_book(&self, title: &str) -> LibraryResult<&BookEntity>;
    fn find_book_by_id(&self, id: EntityId) -> LibraryResult<&BookEntity>;
    fn find_member(&self, name: &str) -> LibraryResult<&MemberEntity>;
    fn find_librarian(&self, name: &str) -> LibraryResult<&LibrarianEntity>;

    fn issue_book(&mut self, member_name: &str, book_title: &str) -> LibraryResult<&BookEntity>;
    fn return_book(&mut self, member_name: &str, book_title: &str) -> LibraryResult<&BookEntity>;
    fn last_issued_book(&self, member_name: &str) -> LibraryResult<Option<&BookEntity>>;

    fn display_books(&self, out: &mut dyn Write, format: DisplayFormat) -> LibraryResult<()>;
    fn display_members(&self, out: &mut dyn Write, format: DisplayFormat) -> LibraryResult<()>;
    fn display_librarians(&self, out: &mut dyn Write, format: DisplayFormat) -> LibraryResult<()>;

    fn books(&self) -> &[BookEntity];
    fn members(&self) -> Vec<&MemberEntity>;
    fn librarians(&self) -> Vec<&LibrarianEntity>;
    fn events(&self) -> &[DomainEvent];
}
