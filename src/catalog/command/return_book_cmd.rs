use serde::Serialize;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::LibraryService;
use crate::core::command::{require_text, Command, CommandError};

pub struct ReturnBookCommand<'a> {
    library: &'a mut dyn LibraryService,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(library: &'a mut dyn LibraryService) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug)]
pub struct ReturnBookCommandRequest {
    pub member_name: String,
    pub book_title: String,
}

impl ReturnBookCommandRequest {
    pub fn new(member_name: &str, book_title: &str) -> Self {
        Self {
            member_name: member_name.to_string(),
            book_title: book_title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub book: BookEntity,
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'_> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        require_text("member name", req.member_name.as_str())?;
        require_text("title", req.book_title.as_str())?;
        self.library.return_book(req.member_name.as_str(), req.book_title.as_str())
            .map_err(CommandError::from).map(|book| ReturnBookCommandResponse { book: book.clone() })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_issue_and_return() {
        let mut library = factory::create_library_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        library.add_book("Dune").unwrap();
        library.add_member("Alice", 30).unwrap();

        let res = ReturnBookCommand::new(library.as_mut()).execute(ReturnBookCommandRequest::new("Alice", "Dune"));
        assert!(matches!(res, Err(CommandError::NotIssued { .. })));

        let _ = IssueBookCommand::new(library.as_mut())
            .execute(IssueBookCommandRequest::new("Alice", "Dune")).expect("should issue");
        let res = ReturnBookCommand::new(library.as_mut())
            .execute(ReturnBookCommandRequest::new("Alice", "Dune")).expect("should return");
        assert_eq!(BookStatus::Available, res.book.book_status);
        assert!(res.book.returned_at.is_some());
    }
}
