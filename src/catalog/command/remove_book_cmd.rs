use serde::Serialize;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand<'a> {
    library: &'a mut dyn LibraryService,
}

impl<'a> RemoveBookCommand<'a> {
    pub fn new(library: &'a mut dyn LibraryService) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug)]
pub struct RemoveBookCommandRequest {
    pub title: String,
}

impl RemoveBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub book: BookEntity,
}

impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'_> {
    fn execute(&mut self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.library.remove_book(req.title.as_str())
            .map_err(CommandError::from).map(|book| RemoveBookCommandResponse { book })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_remove_book() {
        let mut library = factory::create_library_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let _ = AddBookCommand::new(library.as_mut())
            .execute(AddBookCommandRequest::new("Dune")).expect("should add book");
        let res = RemoveBookCommand::new(library.as_mut())
            .execute(RemoveBookCommandRequest::new("Dune")).expect("should remove book");
        assert_eq!("Dune", res.book.title);
        assert!(library.books().is_empty());
    }

    #[test]
    fn test_should_not_remove_issued_book() {
        let mut library = factory::create_library_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        library.add_book("Dune").unwrap();
        library.add_member("Alice", 30).unwrap();
        library.issue_book("Alice", "Dune").unwrap();
        let res = RemoveBookCommand::new(library.as_mut()).execute(RemoveBookCommandRequest::new("Dune"));
        assert!(matches!(res, Err(CommandError::AlreadyIssued { .. })));
    }
}
