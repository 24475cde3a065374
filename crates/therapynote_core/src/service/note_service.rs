//! Session note use-case service.
//!
//! # Responsibility
//! - Provide validate-then-persist submission for new notes.
//! - Delegate list/update/delete to the repository unchanged.
//!
//! # Invariants
//! - Submission never reaches the store when validation rejects.
//! - Exactly two error kinds cross this boundary: a validation rejection or
//!   a wrapped store failure.

use crate::model::session_note::{
    NoteChanges, NoteDraft, NoteId, NoteValidationError, SessionNote,
};
use crate::repo::session_note_repo::{RepoError, SessionNoteRepository};
use crate::store::NoteTable;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure of a note use-case.
///
/// `Validation` is always recoverable by correcting input; `Repo` is shown
/// to the user as-is and left for a manual retry.
#[derive(Debug)]
pub enum NoteServiceError {
    Validation(NoteValidationError),
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for NoteServiceError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case wrapper over the note repository.
///
/// The collaborating UI sequences its own refetch after a successful
/// mutation; this service issues exactly one store call per method.
pub struct NoteService<T: NoteTable> {
    repo: SessionNoteRepository<T>,
}

impl<T: NoteTable> NoteService<T> {
    pub fn new(repo: SessionNoteRepository<T>) -> Self {
        Self { repo }
    }

    /// Validates a draft against today's local date and persists it.
    pub fn submit_note(&self, draft: &NoteDraft) -> Result<SessionNote, NoteServiceError> {
        let normalized = draft.validate_now()?;
        Ok(self.repo.create(normalized)?)
    }

    /// Validates a draft against an explicit `today` and persists it.
    ///
    /// The injected date keeps the future-date rule testable without
    /// depending on the wall clock.
    pub fn submit_note_at(
        &self,
        draft: &NoteDraft,
        today: NaiveDate,
    ) -> Result<SessionNote, NoteServiceError> {
        let normalized = draft.validate(today)?;
        Ok(self.repo.create(normalized)?)
    }

    /// Lists all notes for the configured therapist, newest session first.
    pub fn list_notes(&self) -> Result<Vec<SessionNote>, NoteServiceError> {
        Ok(self.repo.list()?)
    }

    /// Applies partial changes to an existing note.
    ///
    /// Exposed for completeness; the current UI never edits saved notes.
    pub fn revise_note(
        &self,
        id: NoteId,
        changes: &NoteChanges,
    ) -> Result<SessionNote, NoteServiceError> {
        Ok(self.repo.update(id, changes)?)
    }

    /// Permanently removes a note.
    pub fn remove_note(&self, id: NoteId) -> Result<(), NoteServiceError> {
        Ok(self.repo.delete(id)?)
    }
}
