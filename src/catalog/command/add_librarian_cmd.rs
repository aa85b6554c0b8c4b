use serde::Serialize;
use crate::catalog::domain::LibraryService;
use crate::core::command::{parse_age, Command, CommandError};
use crate::parties::domain::model::LibrarianEntity;

pub struct AddLibrarianCommand<'a> {
    library: &'a mut dyn LibraryService,
}

impl<'a> AddLibrarianCommand<'a> {
    pub fn new(library: &'a mut dyn LibraryService) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug)]
pub struct AddLibrarianCommandRequest {
    pub name: String,
    pub age: u32,
}

impl AddLibrarianCommandRequest {
    pub fn parse(name: &str, age: &str) -> Result<Self, CommandError> {
        Ok(Self {
            name: name.to_string(),
            age: parse_age(age)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct AddLibrarianCommandResponse {
    pub librarian: LibrarianEntity,
}

impl Command<AddLibrarianCommandRequest, AddLibrarianCommandResponse> for AddLibrarianCommand<'_> {
    fn execute(&mut self, req: AddLibrarianCommandRequest) -> Result<AddLibrarianCommandResponse, CommandError> {
        self.library.add_librarian(req.name.as_str(), req.age)
            .map_err(CommandError::from).map(|librarian| AddLibrarianCommandResponse { librarian: librarian.clone() })
    }
}
