use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        AppState {
            config,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "Info"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
        }
    }
}

// what the console prints when a menu action fails; the loop carries on afterwards
pub type ConsoleError = (Severity, String);

impl From<CommandError> for ConsoleError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::CapacityExceeded { .. } => {
                (Severity::Info, format!("{}", err))
            }
            CommandError::AlreadyIssued { .. } => {
                (Severity::Warning, format!("{}", err))
            }
            CommandError::NotIssued { .. } => {
                (Severity::Warning, format!("{}", err))
            }
            CommandError::NotFound { .. } => {
                (Severity::Warning, format!("{}", err))
            }
            CommandError::Validation { .. } => {
                (Severity::Warning, format!("{}", err))
            }
            CommandError::Serialization { .. } => {
                (Severity::Error, format!("{}", err))
            }
            CommandError::Runtime { .. } => {
                (Severity::Error, format!("{}", err))
            }
        }
    }
}
