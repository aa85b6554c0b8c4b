use serde::{Deserialize, Serialize};

/// Sequential identifier handed out by the library that owns the entity.
pub type EntityId = u64;

// Identifiable defines common traits that can be shared by catalog entities
pub trait Identifiable {
    fn id(&self) -> EntityId;
}

pub const DEFAULT_MAX_ISSUED_BOOKS: usize = 5;

// DisplayFormat selects how listings are rendered to the console
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, clap::ValueEnum)]
pub enum DisplayFormat {
    #[default]
    Text,
    Json,
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub max_issued_books: usize,
    pub display_format: DisplayFormat,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_issued_books: DEFAULT_MAX_ISSUED_BOOKS,
            display_format: DisplayFormat::Text,
        }
    }

    pub fn with_max_issued_books(mut self, max_issued_books: usize) -> Self {
        self.max_issued_books = max_issued_books;
        self
    }

    pub fn with_display_format(mut self, display_format: DisplayFormat) -> Self {
        self.display_format = display_format;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, DisplayFormat};

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(5, config.max_issued_books);
        assert_eq!(DisplayFormat::Text, config.display_format);
    }

    #[test]
    fn test_should_override_config() {
        let config = Configuration::new("test")
            .with_max_issued_books(2)
            .with_display_format(DisplayFormat::Json);
        assert_eq!(2, config.max_issued_books);
        assert_eq!(DisplayFormat::Json, config.display_format);
    }
}
