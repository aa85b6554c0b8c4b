use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    // The book is already on loan, so it can be neither issued again nor removed.
    AlreadyIssued {
        message: String,
    },
    // The book is not on loan, or not on loan to the member returning it.
    NotIssued {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The member already holds the maximum number of books; nothing was changed.
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

impl LibraryError {
    pub fn already_issued(message: &str) -> LibraryError {
        LibraryError::AlreadyIssued { message: message.to_string() }
    }

    pub fn not_issued(message: &str) -> LibraryError {
        LibraryError::NotIssued { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn capacity_exceeded(message: &str, limit: usize) -> LibraryError {
        LibraryError::CapacityExceeded { message: message.to_string(), limit }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // soft refusals leave every entity untouched and need no further handling
    pub fn is_soft(&self) -> bool {
        matches!(self, LibraryError::CapacityExceeded { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json {:?}", err).as_str())
    }
}

impl std::error::Error for LibraryError {}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::AlreadyIssued { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotIssued { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::CapacityExceeded { message, limit } => {
                write!(f, "{} (limit {})", message, limit)
            }
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Issued => write!(f, "Issued"),
        }
    }
}
