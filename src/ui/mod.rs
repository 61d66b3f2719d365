//! Ratatui front-end: two shelves side by side, popups for the create/edit
//! forms and the delete confirmation, and a footer for status messages.

mod app;
mod forms;
mod helpers;
mod shelves;
mod terminal;

pub use app::{Action, App};
pub use forms::{parse_year, BookInput, FormError};
pub use shelves::{toggle_label, Shelf, ShelfContent, Shelves, EMPTY_SHELF_MESSAGE};
pub use terminal::run_app;
