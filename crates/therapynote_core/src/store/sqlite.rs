//! SQLite-backed implementation of the note table capability.
//!
//! # Responsibility
//! - Keep all `session_notes` SQL inside this file.
//! - Assign `id` and `created_at` on insert, as the hosted store would.
//!
//! # Invariants
//! - `session_date` is stored as `YYYY-MM-DD` text so SQL ordering matches
//!   calendar ordering.
//! - Rows that fail to parse are reported as store errors, never silently
//!   skipped.

use crate::config::TherapistId;
use crate::model::session_note::{NoteChanges, NoteId, SessionNote};
use crate::store::{NewNoteRow, NoteTable, StoreError, StoreResult};
use chrono::{NaiveDate, Utc};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use uuid::Uuid;

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    therapist_id,
    client_name,
    session_date,
    quick_notes,
    duration_minutes,
    created_at
FROM session_notes";

/// Note table client over a bootstrapped SQLite connection.
///
/// Connections come from `db::open_db` / `db::open_db_in_memory`, which
/// guarantee the schema exists before this type runs any query.
pub struct SqliteNoteTable<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteTable<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn select_by_id(&self, id: NoteId) -> StoreResult<SessionNote> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id.to_string()])?;

        match rows.next()? {
            Some(row) => parse_note_row(row),
            None => Err(StoreError::new(format!("no session note row with id {id}"))),
        }
    }
}

impl NoteTable for SqliteNoteTable<'_> {
    fn select_for_therapist(&self, therapist_id: &TherapistId) -> StoreResult<Vec<SessionNote>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL}
             WHERE therapist_id = ?1
             ORDER BY session_date DESC, created_at DESC, id ASC;"
        ))?;

        let mut rows = stmt.query(params![therapist_id.as_str()])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn insert_returning(&self, row: &NewNoteRow) -> StoreResult<SessionNote> {
        let id: NoteId = Uuid::new_v4();
        let created_at = Utc::now().timestamp_millis();

        self.conn.execute(
            "INSERT INTO session_notes (
                id,
                therapist_id,
                client_name,
                session_date,
                quick_notes,
                duration_minutes,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                id.to_string(),
                row.therapist_id.as_str(),
                row.client_name.as_str(),
                date_to_db(row.session_date),
                row.quick_notes.as_str(),
                i64::from(row.duration_minutes),
                created_at,
            ],
        )?;

        self.select_by_id(id)
    }

    fn update_returning(&self, id: NoteId, changes: &NoteChanges) -> StoreResult<SessionNote> {
        if changes.is_empty() {
            // Nothing to write; still fails for unknown ids.
            return self.select_by_id(id);
        }

        let mut assignments: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(client_name) = &changes.client_name {
            assignments.push("client_name = ?");
            bind_values.push(Value::Text(client_name.clone()));
        }
        if let Some(session_date) = changes.session_date {
            assignments.push("session_date = ?");
            bind_values.push(Value::Text(date_to_db(session_date)));
        }
        if let Some(quick_notes) = &changes.quick_notes {
            assignments.push("quick_notes = ?");
            bind_values.push(Value::Text(quick_notes.clone()));
        }
        if let Some(duration_minutes) = changes.duration_minutes {
            assignments.push("duration_minutes = ?");
            bind_values.push(Value::Integer(i64::from(duration_minutes)));
        }

        let sql = format!(
            "UPDATE session_notes SET {} WHERE id = ?;",
            assignments.join(", ")
        );
        bind_values.push(Value::Text(id.to_string()));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Err(StoreError::new(format!("no session note row with id {id}")));
        }

        self.select_by_id(id)
    }

    fn delete_by_id(&self, id: NoteId) -> StoreResult<()> {
        // Zero affected rows is a no-op success; the delete-by-id contract
        // here is idempotent.
        self.conn
            .execute("DELETE FROM session_notes WHERE id = ?1;", [id.to_string()])?;
        Ok(())
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(value.to_string())
    }
}

fn parse_note_row(row: &Row<'_>) -> StoreResult<SessionNote> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        StoreError::new(format!("invalid uuid value `{id_text}` in session_notes.id"))
    })?;

    let therapist_id: String = row.get("therapist_id")?;

    let date_text: String = row.get("session_date")?;
    let session_date = parse_db_date(&date_text).ok_or_else(|| {
        StoreError::new(format!(
            "invalid date value `{date_text}` in session_notes.session_date"
        ))
    })?;

    let duration_raw: i64 = row.get("duration_minutes")?;
    let duration_minutes = u32::try_from(duration_raw).map_err(|_| {
        StoreError::new(format!(
            "invalid duration value `{duration_raw}` in session_notes.duration_minutes"
        ))
    })?;

    Ok(SessionNote {
        id,
        therapist_id: TherapistId::from(therapist_id),
        client_name: row.get("client_name")?,
        session_date,
        quick_notes: row.get("quick_notes")?,
        duration_minutes,
        created_at: row.get("created_at")?,
    })
}

fn date_to_db(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_db_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
