//! Binary entry point that glues the SQLite-backed shelf to the TUI: resolve
//! the data directory, start logging, load the shelf, and drive the Ratatui
//! event loop until the user exits.
use anyhow::Context;
use bookshelf_manager::{init_logging, open_database, run_app, App, AppPaths, BookStore};

fn main() -> anyhow::Result<()> {
    let paths = AppPaths::resolve()?;
    paths.ensure_data_dir()?;
    init_logging(&paths.log_path)?;
    log::info!("starting bookshelf manager with data in {}", paths.data_dir.display());

    let conn = open_database(&paths.db_path)?;
    let store = BookStore::new(conn);
    let books = store.list().context("failed to load books")?;

    let mut app = App::new(store, books);
    let result = run_app(&mut app);
    if let Err(err) = &result {
        log::error!("exiting after error: {err:#}");
    }
    result
}
