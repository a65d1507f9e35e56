use crate::errors::AppResult;
use rusqlite::Connection;

/// Schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 1;

/// Create the `emotion_logs` table if it does not exist yet.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS emotion_logs (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            category         TEXT NOT NULL,
            intensity        TEXT NOT NULL,
            observed_at      INTEGER NOT NULL,
            created_at       INTEGER NOT NULL,
            last_modified_at INTEGER NULL
        );

        CREATE INDEX IF NOT EXISTS idx_emotion_logs_observed_at
            ON emotion_logs(observed_at DESC, id ASC);
        "#,
    )?;

    let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if version < SCHEMA_VERSION {
        conn.execute_batch(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))?;
        log::info!("emotion_logs schema initialized (version {})", SCHEMA_VERSION);
    }

    Ok(())
}
