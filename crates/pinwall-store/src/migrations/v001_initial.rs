//! v001 -- Initial schema creation.
//!
//! Creates the `kv` table. The board collection is stored as a single JSON
//! document under one key, so no relational schema is needed.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key        TEXT PRIMARY KEY NOT NULL,
    value      TEXT NOT NULL,                -- JSON document
    updated_at TEXT NOT NULL                 -- ISO-8601 / RFC-3339
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
