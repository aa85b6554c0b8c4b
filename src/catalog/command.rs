pub mod add_book_cmd;
pub mod add_librarian_cmd;
pub mod add_member_cmd;
pub mod display_cmd;
pub mod issue_book_cmd;
pub mod last_issued_cmd;
pub mod remove_book_cmd;
pub mod return_book_cmd;
