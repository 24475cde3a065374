//! Core domain logic for therapy session notes.
//! This crate is the single source of truth for note validation and the
//! four-operation persistence contract.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{therapist_id_from_env, ConfigError, TherapistId, THERAPIST_ID_ENV};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::session_note::{
    NormalizedNote, NoteChanges, NoteDraft, NoteId, NoteValidationError, SessionNote,
    DURATION_MAX_MINUTES, DURATION_MIN_MINUTES, QUICK_NOTES_MAX_CHARS,
};
pub use repo::session_note_repo::{RepoError, RepoResult, SessionNoteRepository};
pub use service::note_service::{NoteService, NoteServiceError};
pub use store::sqlite::SqliteNoteTable;
pub use store::{NewNoteRow, NoteTable, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
