use rusqlite::{params, Connection, OptionalExtension};

/// Read the raw value stored under `key`, if any.
pub fn get_item(conn: &Connection, key: &str) -> rusqlite::Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM storage WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
}

/// Insert or overwrite the value stored under `key`.
pub fn set_item(conn: &Connection, key: &str, value: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO storage (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;

    #[test]
    fn missing_key_reads_as_none() {
        let conn = open_in_memory().unwrap();
        assert_eq!(get_item(&conn, "books").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let conn = open_in_memory().unwrap();
        set_item(&conn, "books", "[]").unwrap();
        set_item(&conn, "books", "[1]").unwrap();
        assert_eq!(get_item(&conn, "books").unwrap().as_deref(), Some("[1]"));
    }
}
