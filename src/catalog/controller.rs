use std::io::{BufRead, Write};
use tracing::{debug, error, info, warn};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::add_librarian_cmd::{AddLibrarianCommand, AddLibrarianCommandRequest};
use crate::catalog::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest};
use crate::catalog::command::display_cmd::{DisplayCommand, DisplayCommandRequest, DisplayTarget};
use crate::catalog::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use crate::catalog::command::last_issued_cmd::{LastIssuedCommand, LastIssuedCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, ConsoleError, Severity};
use crate::core::domain::DisplayFormat;
use crate::core::library::LibraryResult;
use crate::parties::domain::Person;

pub const MENU: &str = "
1. Add Book
2. Add Member
3. Issue Book
4. Return Book
5. Display Books
6. Display Members
7. Exit
8. Remove Book
9. Add Librarian
10. Show Last Issued Book
11. Display Librarians
Enter your choice: ";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuOption {
    AddBook,
    AddMember,
    IssueBook,
    ReturnBook,
    DisplayBooks,
    DisplayMembers,
    Exit,
    RemoveBook,
    AddLibrarian,
    LastIssued,
    DisplayLibrarians,
}

impl TryFrom<&str> for MenuOption {
    type Error = CommandError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(1) => Ok(MenuOption::AddBook),
            Ok(2) => Ok(MenuOption::AddMember),
            Ok(3) => Ok(MenuOption::IssueBook),
            Ok(4) => Ok(MenuOption::ReturnBook),
            Ok(5) => Ok(MenuOption::DisplayBooks),
            Ok(6) => Ok(MenuOption::DisplayMembers),
            Ok(7) => Ok(MenuOption::Exit),
            Ok(8) => Ok(MenuOption::RemoveBook),
            Ok(9) => Ok(MenuOption::AddLibrarian),
            Ok(10) => Ok(MenuOption::LastIssued),
            Ok(11) => Ok(MenuOption::DisplayLibrarians),
            _ => Err(CommandError::validation(
                format!("Invalid choice '{}', enter a number from 1 to 11", value.trim()).as_str(),
                Some("choice".to_string()))),
        }
    }
}

// MenuController runs the interactive menu over any line reader and writer. Domain
// failures are reported on the console and the loop continues; only console I/O
// errors end it early.
pub struct MenuController<R, W> {
    state: AppState,
    library: Box<dyn LibraryService>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(state: AppState, library: Box<dyn LibraryService>, input: R, output: W) -> Self {
        Self {
            state,
            library,
            input,
            output,
        }
    }

    pub fn library(&self) -> &dyn LibraryService {
        self.library.as_ref()
    }

    pub fn run(&mut self) -> LibraryResult<()> {
        info!(branch_id = %self.state.config.branch_id, "library desk open");
        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                info!("input closed");
                break;
            };
            let option = match MenuOption::try_from(line.as_str()) {
                Ok(option) => option,
                Err(err) => {
                    self.report(ConsoleError::from(err))?;
                    continue;
                }
            };
            debug!(?option, "menu choice");
            if option == MenuOption::Exit {
                writeln!(self.output, "Goodbye.")?;
                break;
            }
            match self.dispatch(option)? {
                Ok(message) => writeln!(self.output, "{}", message.trim_end())?,
                Err(err) => self.report(ConsoleError::from(err))?,
            }
        }
        info!("library desk closed");
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> LibraryResult<Result<String, CommandError>> {
        let format = self.state.config.display_format;
        let limit = self.state.config.max_issued_books;
        let outcome = match option {
            MenuOption::AddBook => {
                let title = self.prompt("Enter book title: ")?;
                AddBookCommand::new(self.library.as_mut())
                    .execute(AddBookCommandRequest::new(title.as_str()))
                    .map(|res| format!("Book added: [{}] {}", res.book.book_id, res.book.title))
            }
            MenuOption::AddMember => {
                let name = self.prompt("Enter member name: ")?;
                let age = self.prompt("Enter member age: ")?;
                AddMemberCommandRequest::parse(name.as_str(), age.as_str())
                    .and_then(|req| AddMemberCommand::new(self.library.as_mut()).execute(req))
                    .map(|res| format!("Member added: [{}] {}", res.member.member_id, res.member.name()))
            }
            MenuOption::IssueBook => {
                let member_name = self.prompt("Enter member name: ")?;
                let book_title = self.prompt("Enter book title: ")?;
                IssueBookCommand::new(self.library.as_mut())
                    .execute(IssueBookCommandRequest::new(member_name.as_str(), book_title.as_str()))
                    .map(|res| format!("Book '{}' issued to {} ({}/{} held)",
                                       res.book.title, member_name, res.held, limit))
            }
            MenuOption::ReturnBook => {
                let member_name = self.prompt("Enter member name: ")?;
                let book_title = self.prompt("Enter book title: ")?;
                ReturnBookCommand::new(self.library.as_mut())
                    .execute(ReturnBookCommandRequest::new(member_name.as_str(), book_title.as_str()))
                    .map(|res| format!("Book '{}' returned by {}", res.book.title, member_name))
            }
            MenuOption::DisplayBooks => self.display(DisplayTarget::Books, format),
            MenuOption::DisplayMembers => self.display(DisplayTarget::Members, format),
            MenuOption::DisplayLibrarians => self.display(DisplayTarget::Librarians, format),
            MenuOption::RemoveBook => {
                let title = self.prompt("Enter book title: ")?;
                RemoveBookCommand::new(self.library.as_mut())
                    .execute(RemoveBookCommandRequest::new(title.as_str()))
                    .map(|res| format!("Book removed: [{}] {}", res.book.book_id, res.book.title))
            }
            MenuOption::AddLibrarian => {
                let name = self.prompt("Enter librarian name: ")?;
                let age = self.prompt("Enter librarian age: ")?;
                AddLibrarianCommandRequest::parse(name.as_str(), age.as_str())
                    .and_then(|req| AddLibrarianCommand::new(self.library.as_mut()).execute(req))
                    .map(|res| format!("Librarian added: [{}] {}", res.librarian.librarian_id, res.librarian.name()))
            }
            MenuOption::LastIssued => {
                let member_name = self.prompt("Enter member name: ")?;
                LastIssuedCommand::new(self.library.as_ref())
                    .execute(LastIssuedCommandRequest { member_name: member_name.to_string() })
                    .map(|res| match res.book {
                        Some(book) => format!("Last book issued to {}: [{}] {}", member_name, book.book_id, book.title),
                        None => format!("{} holds no books", member_name),
                    })
            }
            MenuOption::Exit => Ok(String::new()),
        };
        Ok(outcome)
    }

    fn display(&self, target: DisplayTarget, format: DisplayFormat) -> Result<String, CommandError> {
        DisplayCommand::new(self.library.as_ref())
            .execute(DisplayCommandRequest::new(target, format))
            .map(|res| res.listing)
    }

    fn prompt(&mut self, label: &str) -> LibraryResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        // end of input mid-action yields a blank answer, which the command rejects
        Ok(self.read_line()?.unwrap_or_default())
    }

    // bytes that are not UTF-8 become U+FFFD, so a garbled line is rejected like any other bad answer
    fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(err) => {
                warn!("input line is not valid UTF-8");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, (severity, message): ConsoleError) -> LibraryResult<()> {
        match severity {
            Severity::Info => info!("{}", message),
            Severity::Warning => warn!("{}", message),
            Severity::Error => error!("{}", message),
        }
        writeln!(self.output, "{}: {}", severity, message)?;
        Ok(())
    }
}
