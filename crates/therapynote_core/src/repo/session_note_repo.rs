//! Session note repository: list, create, update, delete.
//!
//! # Responsibility
//! - Translate table-client failures into the user-facing error surface.
//! - Attach the deployment's therapist identifier to every write.
//!
//! # Invariants
//! - Each operation is a single store round trip; sequencing across calls is
//!   the caller's concern.
//! - `id`, `therapist_id` and `created_at` never appear in update payloads.

use crate::config::TherapistId;
use crate::model::session_note::{NoteChanges, NoteId, NormalizedNote, SessionNote};
use crate::store::{NewNoteRow, NoteTable, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure of one remote note operation.
///
/// The `Display` output is shown to the end user as-is: a fixed
/// per-operation prefix followed by whatever the store reported. Transient
/// and permanent failures are deliberately not distinguished; the caller
/// re-enables its control and lets the user retry manually.
#[derive(Debug)]
pub enum RepoError {
    Fetch(StoreError),
    Create(StoreError),
    Update(StoreError),
    Delete(StoreError),
}

impl RepoError {
    fn store_error(&self) -> &StoreError {
        match self {
            Self::Fetch(err) | Self::Create(err) | Self::Update(err) | Self::Delete(err) => err,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let prefix = match self {
            Self::Fetch(_) => "Failed to fetch session notes",
            Self::Create(_) => "Failed to create session note",
            Self::Update(_) => "Failed to update session note",
            Self::Delete(_) => "Failed to delete session note",
        };
        write!(f, "{prefix}: {}", self.store_error())
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.store_error())
    }
}

/// Note repository bound to one table client and one therapist.
///
/// The therapist identifier is injected at construction, so tests can run
/// against arbitrary owners without touching process environment.
pub struct SessionNoteRepository<T: NoteTable> {
    table: T,
    therapist_id: TherapistId,
}

impl<T: NoteTable> SessionNoteRepository<T> {
    pub fn new(table: T, therapist_id: TherapistId) -> Self {
        Self {
            table,
            therapist_id,
        }
    }

    /// Returns the therapist owning every note this repository touches.
    pub fn therapist_id(&self) -> &TherapistId {
        &self.therapist_id
    }

    /// Fetches all notes for the configured therapist, newest session date
    /// first. No pagination; the full set comes back in one round trip.
    pub fn list(&self) -> RepoResult<Vec<SessionNote>> {
        self.table
            .select_for_therapist(&self.therapist_id)
            .map_err(RepoError::Fetch)
    }

    /// Persists a validated note under the configured therapist and returns
    /// the stored row, including the store-assigned `id` and `created_at`.
    pub fn create(&self, note: NormalizedNote) -> RepoResult<SessionNote> {
        let row = NewNoteRow::for_therapist(self.therapist_id.clone(), note);
        self.table.insert_returning(&row).map_err(RepoError::Create)
    }

    /// Applies a partial set of mutable fields to the note `id` and returns
    /// the resulting full row.
    pub fn update(&self, id: NoteId, changes: &NoteChanges) -> RepoResult<SessionNote> {
        self.table
            .update_returning(id, changes)
            .map_err(RepoError::Update)
    }

    /// Permanently removes the note `id`. Whatever the store reports for an
    /// unknown id is surfaced unchanged; no not-found error is synthesized
    /// here.
    pub fn delete(&self, id: NoteId) -> RepoResult<()> {
        self.table.delete_by_id(id).map_err(RepoError::Delete)
    }
}
