//! The bookshelf repository. Every operation reads the whole collection,
//! applies one change and writes the whole collection back.

use rusqlite::Connection;

use crate::db::{load_books, save_books};
use crate::models::{filter_by_title, Book, BookId};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Book {0} not found.")]
    NotFound(BookId),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("failed to encode books: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Owns the storage connection and exposes the CRUD surface used by the UI.
pub struct BookStore {
    conn: Connection,
}

impl BookStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// The whole shelf in insertion order.
    pub fn list(&self) -> StoreResult<Vec<Book>> {
        load_books(&self.conn)
    }

    /// Append a new book and return the updated shelf.
    pub fn create(
        &self,
        title: &str,
        author: &str,
        year: i32,
        is_complete: bool,
    ) -> StoreResult<Vec<Book>> {
        let mut books = self.list()?;
        let book = Book::new(title, author, year, is_complete);
        log::info!("adding book {} ({:?})", book.id, book.title);
        books.push(book);
        save_books(&self.conn, &books)?;
        Ok(books)
    }

    /// Overwrite every field except the id on the first book matching `id`.
    pub fn update(
        &self,
        id: BookId,
        title: &str,
        author: &str,
        year: i32,
        is_complete: bool,
    ) -> StoreResult<()> {
        let mut books = self.list()?;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(StoreError::NotFound(id))?;

        book.title = title.to_string();
        book.author = author.to_string();
        book.year = year;
        book.is_complete = is_complete;

        save_books(&self.conn, &books)?;
        log::info!("updated book {id}");
        Ok(())
    }

    /// Remove every book whose id equals `id`, returning how many went away.
    /// Callers are expected to have confirmed the deletion with the user.
    pub fn delete(&self, id: BookId) -> StoreResult<usize> {
        let mut books = self.list()?;
        let before = books.len();
        books.retain(|book| book.id != id);
        let removed = before - books.len();
        if removed == 0 {
            return Err(StoreError::NotFound(id));
        }

        save_books(&self.conn, &books)?;
        log::info!("deleted {removed} book(s) with id {id}");
        Ok(removed)
    }

    /// Flip the completion flag on the first book matching `id` and return
    /// its new value.
    pub fn toggle_completion(&self, id: BookId) -> StoreResult<bool> {
        let mut books = self.list()?;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(StoreError::NotFound(id))?;

        book.is_complete = !book.is_complete;
        let now_complete = book.is_complete;

        save_books(&self.conn, &books)?;
        log::info!("book {id} marked {}", if now_complete { "finished" } else { "unread" });
        Ok(now_complete)
    }

    /// Books whose title contains `query`, ignoring case. Nothing is written.
    pub fn search(&self, query: &str) -> StoreResult<Vec<Book>> {
        let books = self.list()?;
        Ok(filter_by_title(&books, query))
    }

    /// Look up a single book by id.
    pub fn get(&self, id: BookId) -> StoreResult<Book> {
        self.list()?
            .into_iter()
            .find(|book| book.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{open_in_memory, save_books};

    fn store() -> BookStore {
        BookStore::new(open_in_memory().unwrap())
    }

    fn seeded(books: &[Book]) -> BookStore {
        let store = store();
        save_books(&store.conn, books).unwrap();
        store
    }

    fn book(id: i64, title: &str, is_complete: bool) -> Book {
        Book {
            id: BookId::new(id),
            title: title.to_string(),
            author: "Someone".to_string(),
            year: 2000,
            is_complete,
        }
    }

    #[test]
    fn create_appends_and_returns_collection() {
        let store = seeded(&[book(1, "First", false)]);
        let books = store.create("Second", "Author", 1999, true).unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "First");
        let added = &books[1];
        assert_eq!(added.title, "Second");
        assert_eq!(added.author, "Author");
        assert_eq!(added.year, 1999);
        assert!(added.is_complete);
        assert_ne!(added.id, BookId::new(1));
        assert_eq!(store.list().unwrap(), books);
    }

    #[test]
    fn update_keeps_id_and_replaces_fields() {
        let store = seeded(&[book(1, "Old", false), book(2, "Other", false)]);
        store.update(BookId::new(1), "New", "Writer", 1800, true).unwrap();

        let books = store.list().unwrap();
        assert_eq!(
            books[0],
            Book {
                id: BookId::new(1),
                title: "New".to_string(),
                author: "Writer".to_string(),
                year: 1800,
                is_complete: true,
            }
        );
        assert_eq!(books[1], book(2, "Other", false));
    }

    #[test]
    fn update_touches_only_first_duplicate() {
        let store = seeded(&[book(7, "A", false), book(7, "B", false)]);
        store.update(BookId::new(7), "C", "X", 1, false).unwrap();
        let titles: Vec<_> = store.list().unwrap().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, ["C", "B"]);
    }

    #[test]
    fn update_missing_id_reports_not_found() {
        let original = vec![book(1, "Only", false)];
        let store = seeded(&original);
        let err = store.update(BookId::new(99), "X", "Y", 1, true).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == BookId::new(99)));
        assert_eq!(store.list().unwrap(), original);
    }

    #[test]
    fn delete_removes_every_duplicate() {
        let store = seeded(&[book(5, "A", false), book(6, "B", true), book(5, "C", true)]);
        assert_eq!(store.delete(BookId::new(5)).unwrap(), 2);
        assert_eq!(store.list().unwrap(), vec![book(6, "B", true)]);
    }

    #[test]
    fn delete_accepts_textual_id() {
        let store = seeded(&[book(1_700_000_000_000, "A", false)]);
        let id: BookId = "1700000000000".parse().unwrap();
        store.delete(id).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn delete_missing_id_reports_not_found() {
        let store = seeded(&[book(1, "A", false)]);
        assert!(matches!(
            store.delete(BookId::new(2)),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let store = seeded(&[book(1, "A", false)]);
        assert!(store.toggle_completion(BookId::new(1)).unwrap());
        assert!(store.list().unwrap()[0].is_complete);
        assert!(!store.toggle_completion(BookId::new(1)).unwrap());
        assert!(!store.list().unwrap()[0].is_complete);
    }

    #[test]
    fn toggle_missing_id_reports_not_found() {
        let store = store();
        assert!(matches!(
            store.toggle_completion(BookId::new(3)),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn search_matches_title_only() {
        let dune = Book {
            id: BookId::new(1),
            title: "Dune".to_string(),
            author: "Herman".to_string(),
            year: 1965,
            is_complete: false,
        };
        let store = seeded(&[dune.clone()]);

        assert_eq!(store.search("dun").unwrap(), vec![dune.clone()]);
        assert!(store.search("herman").unwrap().is_empty());
        assert_eq!(store.search("").unwrap(), vec![dune.clone()]);
        assert_eq!(store.search("   ").unwrap(), vec![dune]);
    }

    #[test]
    fn get_finds_first_match() {
        let store = seeded(&[book(3, "A", false), book(3, "B", true)]);
        assert_eq!(store.get(BookId::new(3)).unwrap().title, "A");
        assert!(store.get(BookId::new(4)).is_err());
    }
}
