use std::collections::BTreeMap;
use std::io::Write;
use serde_json::json;
use tracing::{debug, error, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::LibraryService;
use crate::core::domain::{Configuration, DisplayFormat, EntityId};
use crate::core::events::DomainEvent;
use crate::core::id::IdSequence;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::parties::domain::Person;
use crate::parties::domain::model::{LibrarianEntity, MemberEntity};

pub struct LibraryServiceImpl {
    config: Configuration,
    books: Vec<BookEntity>,
    members: BTreeMap<EntityId, MemberEntity>,
    librarians: BTreeMap<EntityId, LibrarianEntity>,
    book_ids: IdSequence,
    member_ids: IdSequence,
    librarian_ids: IdSequence,
    events_publisher: Box<dyn EventPublisher>,
}

impl LibraryServiceImpl {
    pub fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            config: config.clone(),
            books: vec![],
            members: BTreeMap::new(),
            librarians: BTreeMap::new(),
            book_ids: IdSequence::new(),
            member_ids: IdSequence::new(),
            librarian_ids: IdSequence::new(),
            events_publisher,
        }
    }

    fn require_text(field: &str, value: &str) -> LibraryResult<()> {
        if value.trim().is_empty() {
            return Err(LibraryError::validation(
                format!("{} must not be blank", field).as_str(), Some(field.to_string())));
        }
        Ok(())
    }

    // runs after the change is committed; a failed publish is logged and the change is kept
    fn publish(&mut self, event: serde_json::Result<DomainEvent>) {
        let published = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(event));
        if let Err(err) = published {
            error!(%err, "failed to publish event");
        }
    }

    fn metadata(&self) -> BTreeMap<String, String> {
        BTreeMap::from([("branch_id".to_string(), self.config.branch_id.to_string())])
    }

    fn book_position(&self, title: &str) -> LibraryResult<usize> {
        self.books.iter().position(|b| b.title == title)
            .ok_or_else(|| LibraryError::not_found(format!("book '{}' not found", title).as_str()))
    }

    fn member_id(&self, name: &str) -> LibraryResult<EntityId> {
        self.find_member(name).map(|m| m.member_id)
    }

    // resolves the member and book for a circulation request, member first
    fn resolve(&self, member_name: &str, book_title: &str) -> LibraryResult<(EntityId, usize)> {
        let member_id = self.member_id(member_name)?;
        let pos = self.book_position(book_title)?;
        Ok((member_id, pos))
    }

    fn circulation_payload(member: &MemberEntity, book: &BookEntity) -> serde_json::Value {
        json!({
            "member_id": member.member_id,
            "member_name": member.name(),
            "book_id": book.book_id,
            "title": book.title,
            "held": member.issued_books.len(),
        })
    }
}

impl LibraryService for LibraryServiceImpl {
    fn config(&self) -> &Configuration {
        &self.config
    }

    fn add_book(&mut self, title: &str) -> LibraryResult<&BookEntity> {
        Self::require_text("title", title)?;
        let book = BookEntity::new(self.book_ids.next_id(), title);
        let book_id = book.book_id;
        info!(book_id, title, "book added");
        let event = DomainEvent::added("book_added", "books", book_id.to_string().as_str(), &self.metadata(), &book);
        self.books.push(book);
        self.publish(event);
        self.find_book_by_id(book_id)
    }

    fn remove_book(&mut self, title: &str) -> LibraryResult<BookEntity> {
        let pos = self.book_position(title)?;
        let book = self.books.get(pos)
            .ok_or_else(|| LibraryError::not_found(format!("book '{}' not found", title).as_str()))?;
        if book.is_issued() {
            warn!(book_id = book.book_id, title, "refusing to remove an issued book");
            return Err(LibraryError::already_issued(
                format!("book {} '{}' is issued and cannot be removed", book.book_id, title).as_str()));
        }
        let removed = self.books.remove(pos);
        info!(book_id = removed.book_id, title, "book removed");
        let event = DomainEvent::removed(
            "book_removed", "books", removed.book_id.to_string().as_str(), &self.metadata(), &removed);
        self.publish(event);
        Ok(removed)
    }

    fn add_member(&mut self, name: &str, age: u32) -> LibraryResult<&MemberEntity> {
        Self::require_text("name", name)?;
        let member = MemberEntity::new(self.member_ids.next_id(), name, age, self.config.max_issued_books);
        let member_id = member.member_id;
        info!(member_id, name, age, "member added");
        let event = DomainEvent::added(
            "member_added", "parties", member_id.to_string().as_str(), &self.metadata(), &member);
        self.members.insert(member_id, member);
        self.publish(event);
        self.members.get(&member_id)
            .ok_or_else(|| LibraryError::not_found(format!("member {} not found", member_id).as_str()))
    }

    fn add_librarian(&mut self, name: &str, age: u32) -> LibraryResult<&LibrarianEntity> {
        Self::require_text("name", name)?;
        let librarian = LibrarianEntity::new(self.librarian_ids.next_id(), name, age);
        let librarian_id = librarian.librarian_id;
        info!(librarian_id, name, age, "librarian added");
        let event = DomainEvent::added(
            "librarian_added", "parties", librarian_id.to_string().as_str(), &self.metadata(), &librarian);
        self.librarians.insert(librarian_id, librarian);
        self.publish(event);
        self.librarians.get(&librarian_id)
            .ok_or_else(|| LibraryError::not_found(format!("librarian {} not found", librarian_id).as_str()))
    }

    fn find_book(&self, title: &str) -> LibraryResult<&BookEntity> {
        self.books.iter().find(|b| b.title == title)
            .ok_or_else(|| LibraryError::not_found(format!("book '{}' not found", title).as_str()))
    }

    fn find_book_by_id(&self, id: EntityId) -> LibraryResult<&BookEntity> {
        self.books.iter().find(|b| b.book_id == id)
            .ok_or_else(|| LibraryError::not_found(format!("book with id {} not found", id).as_str()))
    }

    fn find_member(&self, name: &str) -> LibraryResult<&MemberEntity> {
        self.members.values().find(|m| m.name() == name)
            .ok_or_else(|| LibraryError::not_found(format!("member '{}' not found", name).as_str()))
    }

    fn find_librarian(&self, name: &str) -> LibraryResult<&LibrarianEntity> {
        self.librarians.values().find(|l| l.name() == name)
            .ok_or_else(|| LibraryError::not_found(format!("librarian '{}' not found", name).as_str()))
    }

    fn issue_book(&mut self, member_name: &str, book_title: &str) -> LibraryResult<&BookEntity> {
        let (member_id, pos) = self.resolve(member_name, book_title)?;
        let member = self.members.get_mut(&member_id)
            .ok_or_else(|| LibraryError::not_found(format!("member '{}' not found", member_name).as_str()))?;
        let book = self.books.get_mut(pos)
            .ok_or_else(|| LibraryError::not_found(format!("book '{}' not found", book_title).as_str()))?;
        if let Err(err) = member.issue(book) {
            if err.is_soft() {
                info!(member_id, book_id = book.book_id, "{}", err);
            } else {
                warn!(member_id, book_id = book.book_id, "{}", err);
            }
            return Err(err);
        }
        info!(member_id, book_id = book.book_id, title = book_title, "book issued");
        let payload = Self::circulation_payload(member, book);
        let key = book.book_id.to_string();
        let event = DomainEvent::issued("book_issued", "circulation", key.as_str(), &self.metadata(), &payload);
        self.publish(event);
        self.books.get(pos)
            .ok_or_else(|| LibraryError::not_found(format!("book '{}' not found", book_title).as_str()))
    }

    fn return_book(&mut self, member_name: &str, book_title: &str) -> LibraryResult<&BookEntity> {
        let (member_id, pos) = self.resolve(member_name, book_title)?;
        let member = self.members.get_mut(&member_id)
            .ok_or_else(|| LibraryError::not_found(format!("member '{}' not found", member_name).as_str()))?;
        let book = self.books.get_mut(pos)
            .ok_or_else(|| LibraryError::not_found(format!("book '{}' not found", book_title).as_str()))?;
        if let Err(err) = member.returned(book) {
            warn!(member_id, book_id = book.book_id, "{}", err);
            return Err(err);
        }
        info!(member_id, book_id = book.book_id, title = book_title, "book returned");
        let payload = Self::circulation_payload(member, book);
        let key = book.book_id.to_string();
        let event = DomainEvent::returned("book_returned", "circulation", key.as_str(), &self.metadata(), &payload);
        self.publish(event);
        self.books.get(pos)
            .ok_or_else(|| LibraryError::not_found(format!("book '{}' not found", book_title).as_str()))
    }

    fn last_issued_book(&self, member_name: &str) -> LibraryResult<Option<&BookEntity>> {
        let member = self.find_member(member_name)?;
        match member.last_issued() {
            Some(book_id) => self.find_book_by_id(book_id).map(Some),
            None => Ok(None),
        }
    }

    fn display_books(&self, out: &mut dyn Write, format: DisplayFormat) -> LibraryResult<()> {
        debug!(count = self.books.len(), ?format, "displaying books");
        match format {
            DisplayFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &self.books)?;
                writeln!(out)?;
            }
            DisplayFormat::Text => {
                if self.books.is_empty() {
                    writeln!(out, "No books in the library.")?;
                    return Ok(());
                }
                writeln!(out, "{:<6}{:<32}{}", "ID", "Title", "Status")?;
                for book in &self.books {
                    writeln!(out, "{:<6}{:<32}{}", book.book_id, book.title, book.book_status)?;
                }
            }
        }
        Ok(())
    }

    fn display_members(&self, out: &mut dyn Write, format: DisplayFormat) -> LibraryResult<()> {
        debug!(count = self.members.len(), ?format, "displaying members");
        match format {
            DisplayFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &self.members())?;
                writeln!(out)?;
            }
            DisplayFormat::Text => {
                if self.members.is_empty() {
                    writeln!(out, "No members registered.")?;
                    return Ok(());
                }
                writeln!(out, "{:<6}{:<24}{:<6}{}", "ID", "Name", "Age", "Issued")?;
                for member in self.members.values() {
                    writeln!(out, "{:<6}{:<24}{:<6}{}/{}", member.member_id, member.name(), member.age(),
                             member.issued_books.len(), member.max_issued_books)?;
                }
            }
        }
        Ok(())
    }

    fn display_librarians(&self, out: &mut dyn Write, format: DisplayFormat) -> LibraryResult<()> {
        debug!(count = self.librarians.len(), ?format, "displaying librarians");
        match format {
            DisplayFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &self.librarians())?;
                writeln!(out)?;
            }
            DisplayFormat::Text => {
                if self.librarians.is_empty() {
                    writeln!(out, "No librarians registered.")?;
                    return Ok(());
                }
                writeln!(out, "{:<6}{:<24}{}", "ID", "Name", "Age")?;
                for librarian in self.librarians.values() {
                    writeln!(out, "{:<6}{:<24}{}", librarian.librarian_id, librarian.name(), librarian.age())?;
                }
            }
        }
        Ok(())
    }

    fn books(&self) -> &[BookEntity] {
        &self.books
    }

    fn members(&self) -> Vec<&MemberEntity> {
        self.members.values().collect()
    }

    fn librarians(&self) -> Vec<&LibrarianEntity> {
        self.librarians.values().collect()
    }

    fn events(&self) -> &[DomainEvent] {
        self.events_publisher.history()
    }
}
