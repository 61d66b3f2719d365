use rusqlite::Connection;

use super::storage::{get_item, set_item};
use crate::models::Book;
use crate::store::StoreError;

/// Storage key holding the serialized shelf.
pub const BOOKS_KEY: &str = "books";

/// Decode the full collection. A missing key is an empty shelf, and so is a
/// blob that no longer decodes; the latter is logged and left in place until
/// the next save overwrites it.
pub fn load_books(conn: &Connection) -> Result<Vec<Book>, StoreError> {
    let Some(raw) = get_item(conn, BOOKS_KEY)? else {
        log::debug!("no `{BOOKS_KEY}` entry yet, starting with an empty shelf");
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<Book>>(&raw) {
        Ok(books) => {
            log::debug!("loaded {} book(s)", books.len());
            Ok(books)
        }
        Err(err) => {
            log::warn!("stored `{BOOKS_KEY}` entry is unreadable, treating shelf as empty: {err}");
            Ok(Vec::new())
        }
    }
}

/// Serialize and write back the full collection.
pub fn save_books(conn: &Connection, books: &[Book]) -> Result<(), StoreError> {
    let raw = serde_json::to_string(books)?;
    set_item(conn, BOOKS_KEY, &raw)?;
    log::debug!("saved {} book(s)", books.len());
    Ok(())
}
