use serde::Serialize;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand<'a> {
    library: &'a mut dyn LibraryService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(library: &'a mut dyn LibraryService) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandRequest {
    pub title: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'_> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.library.add_book(req.title.as_str())
            .map_err(CommandError::from).map(|book| AddBookCommandResponse::new(book.clone()))
    }
}
