use serde::Serialize;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::LibraryService;
use crate::core::command::{require_text, Command, CommandError};

pub struct IssueBookCommand<'a> {
    library: &'a mut dyn LibraryService,
}

impl<'a> IssueBookCommand<'a> {
    pub fn new(library: &'a mut dyn LibraryService) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug)]
pub struct IssueBookCommandRequest {
    pub member_name: String,
    pub book_title: String,
}

impl IssueBookCommandRequest {
    pub fn new(member_name: &str, book_title: &str) -> Self {
        Self {
            member_name: member_name.to_string(),
            book_title: book_title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IssueBookCommandResponse {
    pub book: BookEntity,
    pub held: usize,
}

impl Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand<'_> {
    fn execute(&mut self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        require_text("member name", req.member_name.as_str())?;
        require_text("title", req.book_title.as_str())?;
        let book = self.library.issue_book(req.member_name.as_str(), req.book_title.as_str())?.clone();
        let held = self.library.find_member(req.member_name.as_str())?.issued_books.len();
        Ok(IssueBookCommandResponse { book, held })
    }
}
