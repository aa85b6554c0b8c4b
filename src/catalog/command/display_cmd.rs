use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::DisplayFormat;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DisplayTarget {
    Books,
    Members,
    Librarians,
}

pub struct DisplayCommand<'a> {
    library: &'a dyn LibraryService,
}

impl<'a> DisplayCommand<'a> {
    pub fn new(library: &'a dyn LibraryService) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug)]
pub struct DisplayCommandRequest {
    pub target: DisplayTarget,
    pub format: DisplayFormat,
}

impl DisplayCommandRequest {
    pub fn new(target: DisplayTarget, format: DisplayFormat) -> Self {
        Self {
            target,
            format,
        }
    }
}

#[derive(Debug)]
pub struct DisplayCommandResponse {
    pub listing: String,
}

impl Command<DisplayCommandRequest, DisplayCommandResponse> for DisplayCommand<'_> {
    fn execute(&mut self, req: DisplayCommandRequest) -> Result<DisplayCommandResponse, CommandError> {
        let mut out = Vec::new();
        match req.target {
            DisplayTarget::Books => self.library.display_books(&mut out, req.format)?,
            DisplayTarget::Members => self.library.display_members(&mut out, req.format)?,
            DisplayTarget::Librarians => self.library.display_librarians(&mut out, req.format)?,
        }
        let listing = String::from_utf8(out).map_err(|err| CommandError::Serialization {
            message: format!("listing is not utf-8 {:?}", err),
        })?;
        Ok(DisplayCommandResponse { listing })
    }
}
