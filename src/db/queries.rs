use crate::db::codec::{category_from_db, category_to_db, intensity_from_db, intensity_to_db};
use crate::errors::AppResult;
use crate::models::EmotionLog;
use crate::models::emotion_log::UNSET_ID;
use rusqlite::{Connection, OptionalExtension, Row, params};

/// A row as stored, before the enum columns are decoded.
#[derive(Debug, Clone)]
pub struct StoredRow {
    pub id: i64,
    pub category: String,
    pub intensity: String,
    pub observed_at: i64,
    pub created_at: i64,
    pub last_modified_at: Option<i64>,
}

impl StoredRow {
    pub fn decode(self) -> AppResult<EmotionLog> {
        Ok(EmotionLog {
            id: self.id,
            category: category_from_db(&self.category)?,
            intensity: intensity_from_db(&self.intensity)?,
            observed_at: self.observed_at,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        })
    }
}

pub fn map_row(row: &Row) -> rusqlite::Result<StoredRow> {
    Ok(StoredRow {
        id: row.get("id")?,
        category: row.get("category")?,
        intensity: row.get("intensity")?,
        observed_at: row.get("observed_at")?,
        created_at: row.get("created_at")?,
        last_modified_at: row.get("last_modified_at")?,
    })
}

/// Every record, most recently observed first. Ties keep insertion order.
pub fn load_all(conn: &Connection) -> AppResult<Vec<EmotionLog>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM emotion_logs
         ORDER BY observed_at DESC, id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?.decode()?);
    }
    Ok(out)
}

pub fn load_by_id(conn: &Connection, id: i64) -> AppResult<Option<EmotionLog>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM emotion_logs WHERE id = ?1")?;

    let row = stmt.query_row([id], map_row).optional()?;
    row.map(StoredRow::decode).transpose()
}

/// Insert a new row (id unset) or replace the row sharing the record's id.
/// Returns the id of the written row.
pub fn insert_or_replace(conn: &Connection, ev: &EmotionLog) -> AppResult<i64> {
    if ev.id == UNSET_ID {
        conn.execute(
            "INSERT INTO emotion_logs (category, intensity, observed_at, created_at, last_modified_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                category_to_db(ev.category),
                intensity_to_db(ev.intensity),
                ev.observed_at,
                ev.created_at,
                ev.last_modified_at,
            ],
        )?;
        return Ok(conn.last_insert_rowid());
    }

    conn.execute(
        "INSERT OR REPLACE INTO emotion_logs (id, category, intensity, observed_at, created_at, last_modified_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            ev.id,
            category_to_db(ev.category),
            intensity_to_db(ev.intensity),
            ev.observed_at,
            ev.created_at,
            ev.last_modified_at,
        ],
    )?;
    Ok(ev.id)
}

/// Overwrite every column of the row with the record's id.
/// Returns the number of rows touched (0 when the id is unknown).
pub fn update(conn: &Connection, ev: &EmotionLog) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE emotion_logs
         SET category = ?2, intensity = ?3, observed_at = ?4, created_at = ?5, last_modified_at = ?6
         WHERE id = ?1",
        params![
            ev.id,
            category_to_db(ev.category),
            intensity_to_db(ev.intensity),
            ev.observed_at,
            ev.created_at,
            ev.last_modified_at,
        ],
    )?;
    Ok(n)
}

pub fn delete_by_id(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM emotion_logs WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn delete_all(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM emotion_logs", [])?;
    Ok(n)
}

pub fn count(conn: &Connection) -> AppResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM emotion_logs", [], |row| row.get(0))?;
    Ok(n as usize)
}
