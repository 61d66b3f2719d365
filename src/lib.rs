//! Core library surface for the Bookshelf Manager TUI application.
//!
//! The binary only wires these pieces together; tests and tooling can reuse
//! the store and the UI state without a real terminal.
pub mod config;
pub mod db;
pub mod models;
pub mod store;
pub mod ui;

/// Path resolution and logger setup used during bootstrapping.
pub use config::{init_logging, AppPaths};

/// Opening the embedded SQLite store.
pub use db::{open_database, open_in_memory};

/// The domain types other layers manipulate.
pub use models::{Book, BookId};

/// The repository every mutation goes through.
pub use store::{BookStore, StoreError};

/// The interactive application entry point and state container.
pub use ui::{run_app, Action, App};
