//! Table client capability over the externally-owned `session_notes` table.
//!
//! # Responsibility
//! - Define the narrow select/insert/update/delete contract the repository
//!   depends on.
//! - Keep the store opaque: failures carry a human-readable message and
//!   nothing else.
//!
//! # Invariants
//! - `select_for_therapist` returns rows ordered by `session_date`
//!   descending.
//! - Implementations assign `id` and `created_at` on insert; callers never
//!   supply them.

use crate::config::TherapistId;
use crate::model::session_note::{NoteChanges, NoteId, NormalizedNote, SessionNote};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sqlite;

pub type StoreResult<T> = Result<T, StoreError>;

/// Opaque failure reported by the backing store.
///
/// The message is whatever the store said, unmodified; the repository layer
/// adds the operation prefix shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for StoreError {}

/// Insert payload for one session note row.
///
/// Built by the repository from a `NormalizedNote` plus the configured
/// therapist; the store fills in `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNoteRow {
    pub therapist_id: TherapistId,
    pub client_name: String,
    pub session_date: NaiveDate,
    pub quick_notes: String,
    pub duration_minutes: u32,
}

impl NewNoteRow {
    /// Attaches the owning therapist to validated note fields.
    pub fn for_therapist(therapist_id: TherapistId, note: NormalizedNote) -> Self {
        Self {
            therapist_id,
            client_name: note.client_name,
            session_date: note.session_date,
            quick_notes: note.quick_notes,
            duration_minutes: note.duration_minutes,
        }
    }
}

/// Narrow capability interface over one named note table.
///
/// The repository is generic over this trait so it can run against the real
/// SQLite-backed table or an in-memory fake in tests.
pub trait NoteTable {
    /// Fetches every row owned by `therapist_id`, newest session first.
    fn select_for_therapist(&self, therapist_id: &TherapistId) -> StoreResult<Vec<SessionNote>>;

    /// Inserts one row and returns it with store-assigned `id` and
    /// `created_at`.
    fn insert_returning(&self, row: &NewNoteRow) -> StoreResult<SessionNote>;

    /// Applies the set fields of `changes` to the row `id` and returns the
    /// resulting full row. Unknown ids are a store-reported failure.
    fn update_returning(&self, id: NoteId, changes: &NoteChanges) -> StoreResult<SessionNote>;

    /// Removes the row `id`. Whether an unknown id is an error is the
    /// store's call; this interface does not add a not-found notion.
    fn delete_by_id(&self, id: NoteId) -> StoreResult<()>;
}

impl<T: NoteTable + ?Sized> NoteTable for &T {
    fn select_for_therapist(&self, therapist_id: &TherapistId) -> StoreResult<Vec<SessionNote>> {
        (**self).select_for_therapist(therapist_id)
    }

    fn insert_returning(&self, row: &NewNoteRow) -> StoreResult<SessionNote> {
        (**self).insert_returning(row)
    }

    fn update_returning(&self, id: NoteId, changes: &NoteChanges) -> StoreResult<SessionNote> {
        (**self).update_returning(id, changes)
    }

    fn delete_by_id(&self, id: NoteId) -> StoreResult<()> {
        (**self).delete_by_id(id)
    }
}
