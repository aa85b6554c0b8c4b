//! In-memory library catalog: books, members and librarians, with books
//! issued to and returned by members through an interactive menu.

pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod parties;
pub mod utils;
