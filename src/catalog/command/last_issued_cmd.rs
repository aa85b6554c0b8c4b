use serde::Serialize;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::LibraryService;
use crate::core::command::{require_text, Command, CommandError};

pub struct LastIssuedCommand<'a> {
    library: &'a dyn LibraryService,
}

impl<'a> LastIssuedCommand<'a> {
    pub fn new(library: &'a dyn LibraryService) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug)]
pub struct LastIssuedCommandRequest {
    pub member_name: String,
}

#[derive(Debug, Serialize)]
pub struct LastIssuedCommandResponse {
    pub book: Option<BookEntity>,
}

impl Command<LastIssuedCommandRequest, LastIssuedCommandResponse> for LastIssuedCommand<'_> {
    fn execute(&mut self, req: LastIssuedCommandRequest) -> Result<LastIssuedCommandResponse, CommandError> {
        require_text("member name", req.member_name.as_str())?;
        let book = self.library.last_issued_book(req.member_name.as_str())?.cloned();
        Ok(LastIssuedCommandResponse { book })
    }
}
