use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use serde::Serialize;

use crate::error::ExtractError;

/// One row of the `urls` table. Records come back most recent visit
/// first; the raw `last_visit_time` is decoded into `visit_time` where
/// possible.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub url: String,
    pub visit_time: Option<chrono::NaiveDateTime>,
}

/// Query the History database for every visited URL, most recently
/// visited first.
///
/// The schema is validated up front so a valid SQLite file that is not a
/// browser history database reports what is missing instead of a bare
/// query failure. Values in `url` are trusted as stored; no validation is
/// applied. The connection is dropped on every exit path.
pub fn query_history(path: &Path) -> Result<Vec<HistoryRecord>, ExtractError> {
    std::fs::metadata(path).map_err(|source| ExtractError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    ensure_history_schema(&conn)?;

    let mut stmt =
        conn.prepare("SELECT url, last_visit_time FROM urls ORDER BY last_visit_time DESC")?;
    let rows = stmt.query_map([], |row| {
        let url: String = row.get(0)?;
        let last_visit_time: Option<i64> = row.get(1)?;
        Ok((url, last_visit_time))
    })?;

    let mut out = Vec::new();
    for row in rows {
        let (url, last_visit_time) = row?;
        let visit_time = last_visit_time.and_then(webkit_timestamp_to_datetime);
        out.push(HistoryRecord { url, visit_time });
    }
    Ok(out)
}

fn ensure_history_schema(conn: &Connection) -> Result<(), ExtractError> {
    if !has_table(conn, "urls")? {
        return Err(ExtractError::SchemaMismatch {
            what: "table urls".to_string(),
        });
    }
    for column in ["url", "last_visit_time"] {
        if !has_column(conn, "urls", column)? {
            return Err(ExtractError::SchemaMismatch {
                what: format!("column urls.{column}"),
            });
        }
    }
    Ok(())
}

fn has_table(conn: &Connection, name: &str) -> Result<bool, rusqlite::Error> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let mut rows = stmt.query([name])?;
    Ok(rows.next()?.is_some())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool, rusqlite::Error> {
    let mut stmt = conn.prepare("SELECT 1 FROM pragma_table_info(?1) WHERE name = ?2")?;
    let mut rows = stmt.query((table, column))?;
    Ok(rows.next()?.is_some())
}

/// Chromium stores `last_visit_time` as microseconds since 1601-01-01.
fn webkit_timestamp_to_datetime(microseconds: i64) -> Option<chrono::NaiveDateTime> {
    if microseconds <= 0 {
        return None;
    }
    let unix_offset_seconds = 11_644_473_600i64;
    let secs = microseconds / 1_000_000 - unix_offset_seconds;
    if secs < 0 {
        return None;
    }
    let nsecs = ((microseconds % 1_000_000) as u32) * 1000;
    chrono::DateTime::<chrono::Utc>::from_timestamp(secs, nsecs).map(|dt| dt.naive_utc())
}
