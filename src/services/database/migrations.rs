use anyhow::{Context, Result};
use rusqlite::Connection;

/// True when `column` already exists on `table`.
fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let query = format!(
        "SELECT COUNT(*) FROM pragma_table_info('{}') WHERE name='{}'",
        table, column
    );

    let count: i64 = conn
        .query_row(&query, [], |row| row.get(0))
        .with_context(|| format!("Failed to inspect columns of {}", table))?;

    Ok(count > 0)
}

/// Runs `ddl` only when the column is missing, so schema upgrades stay
/// idempotent across app restarts.
pub fn ensure_column(conn: &Connection, table: &str, column: &str, ddl: &str) -> Result<()> {
    if column_exists(conn, table, column)? {
        return Ok(());
    }

    conn.execute(ddl, [])
        .with_context(|| format!("Failed to add {}.{}", table, column))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_ensure_column_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE t (id INTEGER PRIMARY KEY)", [])
            .unwrap();

        let ddl = "ALTER TABLE t ADD COLUMN extra TEXT";
        ensure_column(&conn, "t", "extra", ddl).unwrap();
        // Second run must not attempt the ALTER again.
        ensure_column(&conn, "t", "extra", ddl).unwrap();

        assert!(column_exists(&conn, "t", "extra").unwrap());
    }
}
