//! Property checks for issuing and returning books through the library service.

use libcat::books::domain::Book;
use libcat::catalog::domain::LibraryService;
use libcat::catalog::factory::create_library_service;
use libcat::core::domain::Configuration;
use libcat::core::library::LibraryError;
use libcat::gateway::GatewayPublisherVia;
use proptest::prelude::*;

fn library() -> Box<dyn LibraryService> {
    create_library_service(&Configuration::new("props"), GatewayPublisherVia::Memory)
}

fn title() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,24}"
}

proptest! {
    #[test]
    fn issuing_twice_fails_with_already_issued(title in title(), age in 0u32..120) {
        let mut library = library();
        library.add_book(&title).unwrap();
        library.add_member("Alice", age).unwrap();
        library.issue_book("Alice", &title).unwrap();

        let second = library.issue_book("Alice", &title);
        prop_assert!(matches!(second, Err(LibraryError::AlreadyIssued { .. })), "second issue should be refused");
        prop_assert_eq!(1, library.find_member("Alice").unwrap().issued_books.len());
    }

    #[test]
    fn returning_an_available_book_fails_with_not_issued(title in title(), issue_first in any::<bool>()) {
        let mut library = library();
        library.add_book(&title).unwrap();
        library.add_member("Alice", 30).unwrap();
        if issue_first {
            library.issue_book("Alice", &title).unwrap();
            library.return_book("Alice", &title).unwrap();
        }

        let res = library.return_book("Alice", &title);
        prop_assert!(matches!(res, Err(LibraryError::NotIssued { .. })), "return of an available book should be refused");
        prop_assert!(!library.find_book(&title).unwrap().is_issued());
    }

    #[test]
    fn issuing_beyond_capacity_changes_nothing(extra in 1usize..4) {
        let mut library = library();
        library.add_member("Bob", 20).unwrap();
        for n in 0..5 + extra {
            library.add_book(format!("book {}", n).as_str()).unwrap();
        }
        for n in 0..5 {
            library.issue_book("Bob", format!("book {}", n).as_str()).unwrap();
        }
        for n in 5..5 + extra {
            let res = library.issue_book("Bob", format!("book {}", n).as_str());
            prop_assert!(matches!(res, Err(LibraryError::CapacityExceeded { .. })), "capacity refusal expected");
        }
        prop_assert_eq!(5, library.find_member("Bob").unwrap().issued_books.len());
        prop_assert_eq!(5, library.books().iter().filter(|b| b.is_issued()).count());
    }

    #[test]
    fn last_issued_is_the_most_recent(titles in prop::collection::btree_set(title(), 1..5)) {
        let mut library = library();
        library.add_member("Alice", 30).unwrap();
        for title in &titles {
            library.add_book(title).unwrap();
            library.issue_book("Alice", title).unwrap();
        }
        let last = titles.iter().last().unwrap();
        prop_assert_eq!(last.as_str(), library.last_issued_book("Alice").unwrap().unwrap().title());
    }

    #[test]
    fn issue_then_return_restores_availability(title in title()) {
        let mut library = library();
        library.add_book(&title).unwrap();
        library.add_member("Alice", 30).unwrap();
        library.issue_book("Alice", &title).unwrap();
        library.return_book("Alice", &title).unwrap();

        prop_assert!(!library.find_book(&title).unwrap().is_issued());
        prop_assert!(library.find_member("Alice").unwrap().issued_books.is_empty());
        let again = library.return_book("Alice", &title);
        prop_assert!(matches!(again, Err(LibraryError::NotIssued { .. })), "second return should be refused");
    }
}
