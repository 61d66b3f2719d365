//! End-to-end checks of the store against a real database file.

use bookshelf_manager::db::{get_item, save_books, set_item, BOOKS_KEY};
use bookshelf_manager::{open_database, Book, BookId, BookStore, StoreError};

fn dune() -> Book {
    Book {
        id: BookId::new(1),
        title: "Dune".to_string(),
        author: "Herman".to_string(),
        year: 1965,
        is_complete: false,
    }
}

#[test]
fn shelf_survives_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookshelf.sqlite");

    {
        let store = BookStore::new(open_database(&path).unwrap());
        store.create("Dune", "Frank Herbert", 1965, false).unwrap();
    }

    let store = BookStore::new(open_database(&path).unwrap());
    let books = store.list().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[0].author, "Frank Herbert");
    assert_eq!(books[0].year, 1965);
    assert!(!books[0].is_complete);
}

#[test]
fn empty_database_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = BookStore::new(open_database(&dir.path().join("shelf.sqlite")).unwrap());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn persisted_blob_uses_flat_record_layout() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_database(&dir.path().join("shelf.sqlite")).unwrap();
    save_books(&conn, &[dune()]).unwrap();

    let raw = get_item(&conn, BOOKS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"id": 1, "title": "Dune", "author": "Herman", "year": 1965, "isComplete": false}
        ])
    );
}

#[test]
fn corrupt_blob_reads_empty_and_is_replaced_on_next_write() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_database(&dir.path().join("shelf.sqlite")).unwrap();
    set_item(&conn, BOOKS_KEY, "definitely not json").unwrap();

    let store = BookStore::new(conn);
    assert!(store.list().unwrap().is_empty());

    let books = store.create("Emma", "Jane Austen", 1815, true).unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(store.list().unwrap(), books);
}

#[test]
fn search_scenario_matches_title_not_author() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_database(&dir.path().join("shelf.sqlite")).unwrap();
    save_books(&conn, &[dune()]).unwrap();
    let store = BookStore::new(conn);

    assert_eq!(store.search("dun").unwrap(), vec![dune()]);
    assert!(store.search("herman").unwrap().is_empty());
    assert_eq!(store.search("").unwrap(), vec![dune()]);
}

#[test]
fn missing_ids_are_reported_and_change_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_database(&dir.path().join("shelf.sqlite")).unwrap();
    save_books(&conn, &[dune()]).unwrap();
    let store = BookStore::new(conn);
    let missing = BookId::new(2);

    assert!(matches!(
        store.update(missing, "X", "Y", 1, true),
        Err(StoreError::NotFound(id)) if id == missing
    ));
    assert!(matches!(store.delete(missing), Err(StoreError::NotFound(_))));
    assert!(matches!(
        store.toggle_completion(missing),
        Err(StoreError::NotFound(_))
    ));
    assert_eq!(store.list().unwrap(), vec![dune()]);
}
