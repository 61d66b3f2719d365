//! Persistence module split across logical submodules. SQLite stands in for a
//! plain key-value store: the whole shelf lives under a single key.

mod books;
mod connection;
mod storage;

pub use books::{load_books, save_books, BOOKS_KEY};
pub use connection::{ensure_schema, open_database, open_in_memory};
pub use storage::{get_item, set_item};
