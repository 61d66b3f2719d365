//! Property-based tests for the store invariants.

use proptest::prelude::*;

use bookshelf_manager::db::save_books;
use bookshelf_manager::models::filter_by_title;
use bookshelf_manager::ui::{Shelf, ShelfContent, Shelves};
use bookshelf_manager::{open_in_memory, Book, BookId, BookStore};

fn arb_book() -> impl Strategy<Value = Book> {
    (1i64..1_000, "[A-Za-z ]{1,20}", "[A-Za-z ]{1,20}", -500i32..2100, any::<bool>()).prop_map(
        |(id, title, author, year, is_complete)| Book {
            id: BookId::new(id),
            title,
            author,
            year,
            is_complete,
        },
    )
}

fn seeded(books: &[Book]) -> BookStore {
    let conn = open_in_memory().unwrap();
    save_books(&conn, books).unwrap();
    BookStore::new(conn)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Creates always land at the end, in call order.
    #[test]
    fn creates_preserve_insertion_order(titles in prop::collection::vec("[A-Za-z]{1,12}", 0..8)) {
        let store = seeded(&[]);
        for title in &titles {
            store.create(title, "Author", 2000, false).unwrap();
        }
        let listed: Vec<String> = store.list().unwrap().into_iter().map(|b| b.title).collect();
        prop_assert_eq!(listed, titles);
    }

    /// A created book carries exactly the given fields and an id unused by
    /// the existing shelf. Seeded ids are tiny, so a timestamp never collides.
    #[test]
    fn create_adds_exactly_one_book(
        books in prop::collection::vec(arb_book(), 0..6),
        title in "[A-Za-z]{1,12}",
        year in -500i32..2100,
        done in any::<bool>(),
    ) {
        let store = seeded(&books);
        let listed = store.create(&title, "Someone", year, done).unwrap();
        prop_assert_eq!(listed.len(), books.len() + 1);
        prop_assert_eq!(&listed[..books.len()], &books[..]);

        let added = listed.last().unwrap();
        prop_assert_eq!(&added.title, &title);
        prop_assert_eq!(added.year, year);
        prop_assert_eq!(added.is_complete, done);
        prop_assert!(books.iter().all(|b| b.id != added.id));
    }

    /// Toggling twice is a no-op on the stored shelf.
    #[test]
    fn double_toggle_restores_shelf(books in prop::collection::vec(arb_book(), 1..6), pick in any::<prop::sample::Index>()) {
        let store = seeded(&books);
        let id = books[pick.index(books.len())].id;
        store.toggle_completion(id).unwrap();
        store.toggle_completion(id).unwrap();
        prop_assert_eq!(store.list().unwrap(), books);
    }

    /// Delete removes exactly the books carrying the id.
    #[test]
    fn delete_removes_exactly_matching(books in prop::collection::vec(arb_book(), 1..6), pick in any::<prop::sample::Index>()) {
        let store = seeded(&books);
        let id = books[pick.index(books.len())].id;
        let removed = store.delete(id).unwrap();

        let expected: Vec<Book> = books.iter().filter(|b| b.id != id).cloned().collect();
        prop_assert_eq!(removed, books.len() - expected.len());
        prop_assert_eq!(store.list().unwrap(), expected);
    }

    /// Search ignores case and never looks at the author.
    #[test]
    fn search_is_case_insensitive_title_match(books in prop::collection::vec(arb_book(), 0..6), query in "[a-z]{1,3}") {
        let store = seeded(&books);
        let upper = store.search(&query.to_uppercase()).unwrap();
        let lower = store.search(&query).unwrap();
        prop_assert_eq!(&upper, &lower);
        for book in &lower {
            prop_assert!(book.title.to_lowercase().contains(&query));
        }
        prop_assert_eq!(lower, filter_by_title(&books, &query));
    }

    /// Every non-empty input is split without loss; only empty input gets
    /// placeholders.
    #[test]
    fn projection_partitions_every_book(books in prop::collection::vec(arb_book(), 0..8)) {
        let shelves = Shelves::project(&books);
        if books.is_empty() {
            prop_assert_eq!(&shelves.unread, &ShelfContent::Placeholder);
            prop_assert_eq!(&shelves.finished, &ShelfContent::Placeholder);
        } else {
            prop_assert_eq!(shelves.unread.len() + shelves.finished.len(), books.len());
            for book in shelves.get(Shelf::Finished).books() {
                prop_assert!(book.is_complete);
            }
            for book in shelves.get(Shelf::Unread).books() {
                prop_assert!(!book.is_complete);
            }
        }
    }
}
