use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    AlreadyIssued {
        message: String,
    },
    NotIssued {
        message: String,
    },
    NotFound {
        message: String,
    },
    CapacityExceeded {
        message: String,
        limit: usize,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn validation(message: &str, reason_code: Option<String>) -> CommandError {
        CommandError::Validation { message: message.to_string(), reason_code }
    }
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

// rejects blank names and titles typed at the console
pub fn require_text(field: &str, value: &str) -> Result<(), CommandError> {
    if value.trim().is_empty() {
        return Err(CommandError::validation(
            format!("{} must not be blank", field).as_str(), Some(field.to_string())));
    }
    Ok(())
}

pub fn parse_age(value: &str) -> Result<u32, CommandError> {
    value.trim().parse::<u32>().map_err(|_| CommandError::validation(
        format!("age must be a whole number, got '{}'", value.trim()).as_str(), Some("age".to_string())))
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::AlreadyIssued { message } => {
                CommandError::AlreadyIssued { message }
            }
            LibraryError::NotIssued { message } => {
                CommandError::NotIssued { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::CapacityExceeded { message, limit } => {
                CommandError::CapacityExceeded { message, limit }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::AlreadyIssued { message }
            | CommandError::NotIssued { message }
            | CommandError::NotFound { message }
            | CommandError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CommandError::CapacityExceeded { message, limit } => {
                write!(f, "{} (limit {})", message, limit)
            }
            CommandError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            CommandError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use crate::core::command::{parse_age, require_text, CommandError};
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_convert_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::already_issued("x")), CommandError::AlreadyIssued { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_issued("x")), CommandError::NotIssued { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_found("x")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::capacity_exceeded("x", 5)),
                         CommandError::CapacityExceeded { limit: 5, .. }));
        assert!(matches!(CommandError::from(LibraryError::validation("x", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("x")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("x", None)), CommandError::Runtime { .. }));
    }

    #[test]
    fn test_should_require_text() {
        assert!(require_text("title", "Dune").is_ok());
        assert!(matches!(require_text("title", "   "), Err(CommandError::Validation { .. })));
    }

    #[test]
    fn test_should_parse_age() {
        assert_eq!(Ok(30), parse_age(" 30 "));
        assert!(matches!(parse_age("thirty"), Err(CommandError::Validation { .. })));
        assert!(matches!(parse_age("-4"), Err(CommandError::Validation { .. })));
        assert!(matches!(parse_age(""), Err(CommandError::Validation { .. })));
    }

    #[test]
    fn test_should_display_message_only() {
        let err = CommandError::validation("age must be a whole number", Some("age".to_string()));
        assert_eq!("age must be a whole number", err.to_string());
    }
}
