//! Session note record, draft input and validation rules.
//!
//! # Responsibility
//! - Define the persisted `SessionNote` shape shared with the store.
//! - Turn raw, untrusted form input into a `NormalizedNote` or a single
//!   rejection reason.
//!
//! # Invariants
//! - Validation checks run in a fixed order and stop at the first failure,
//!   so callers surface exactly one reason at a time.
//! - Text fields in a `NormalizedNote` are always whitespace-trimmed.
//! - Rejection messages are stable strings shown to the end user verbatim.

use crate::config::TherapistId;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a persisted session note, assigned by the store.
pub type NoteId = Uuid;

/// Upper bound on `quick_notes`, in characters after trimming.
pub const QUICK_NOTES_MAX_CHARS: usize = 500;

/// Inclusive lower bound on session duration in minutes.
pub const DURATION_MIN_MINUTES: u32 = 15;

/// Inclusive upper bound on session duration in minutes.
pub const DURATION_MAX_MINUTES: u32 = 120;

/// Wire format for `session_date` fields coming from form input.
const SESSION_DATE_FORMAT: &str = "%Y-%m-%d";

/// One persisted therapy session record.
///
/// `id` and `created_at` are assigned by the store at insert time;
/// `therapist_id` comes from deployment configuration. None of the three is
/// ever edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionNote {
    pub id: NoteId,
    pub therapist_id: TherapistId,
    pub client_name: String,
    /// Calendar date of the session, no time component.
    pub session_date: NaiveDate,
    pub quick_notes: String,
    pub duration_minutes: u32,
    /// Insert timestamp in Unix epoch milliseconds.
    pub created_at: i64,
}

/// Raw, untrusted form input for creating a session note.
///
/// Field values arrive exactly as typed; `validate` owns all trimming and
/// range checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub client_name: String,
    /// Calendar date as typed, expected `YYYY-MM-DD`.
    pub session_date: String,
    pub quick_notes: String,
    /// `None` models an empty duration field.
    pub duration_minutes: Option<u32>,
}

/// Validated, trimmed field values ready for persistence.
///
/// Produced by `NoteDraft::validate`; the form submission path never builds
/// one by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNote {
    pub client_name: String,
    pub session_date: NaiveDate,
    pub quick_notes: String,
    pub duration_minutes: u32,
}

/// Partial update of the mutable note fields.
///
/// Identity, ownership and creation time are deliberately absent; they can
/// never be touched through the update path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    pub client_name: Option<String>,
    pub session_date: Option<NaiveDate>,
    pub quick_notes: Option<String>,
    pub duration_minutes: Option<u32>,
}

impl NoteChanges {
    /// Returns `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self.client_name.is_none()
            && self.session_date.is_none()
            && self.quick_notes.is_none()
            && self.duration_minutes.is_none()
    }
}

/// Single rejection reason produced by draft validation.
///
/// The `Display` strings are the exact messages shown in the form and must
/// not be reworded without a product decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    ClientNameRequired,
    SessionDateRequired,
    SessionDateInFuture,
    QuickNotesRequired,
    QuickNotesTooLong,
    DurationOutOfRange,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::ClientNameRequired => "Client name is required",
            Self::SessionDateRequired => "Session date is required",
            Self::SessionDateInFuture => "Session date cannot be in the future",
            Self::QuickNotesRequired => "Quick notes are required",
            Self::QuickNotesTooLong => "Quick notes must be 500 characters or less",
            Self::DurationOutOfRange => "Duration must be between 15 and 120 minutes",
        };
        f.write_str(message)
    }
}

impl Error for NoteValidationError {}

impl NoteDraft {
    /// Validates this draft against today's local date.
    ///
    /// See `validate` for the rules; this wrapper only supplies the clock.
    pub fn validate_now(&self) -> Result<NormalizedNote, NoteValidationError> {
        self.validate(Local::now().date_naive())
    }

    /// Validates raw field values and produces trimmed, typed output.
    ///
    /// Checks run in fixed order, stopping at the first failure:
    /// 1. client name present after trimming
    /// 2. session date present
    /// 3. session date not after `today` (today itself is valid)
    /// 4. quick notes present after trimming
    /// 5. quick notes at most 500 characters after trimming
    /// 6. duration present and within 15..=120 minutes
    ///
    /// A date string that does not parse as `YYYY-MM-DD` carries no usable
    /// date and is rejected as missing (rule 2).
    ///
    /// Pure function of the draft and `today`; no clock access, no side
    /// effects.
    pub fn validate(&self, today: NaiveDate) -> Result<NormalizedNote, NoteValidationError> {
        let client_name = self.client_name.trim();
        if client_name.is_empty() {
            return Err(NoteValidationError::ClientNameRequired);
        }

        let date_text = self.session_date.trim();
        if date_text.is_empty() {
            return Err(NoteValidationError::SessionDateRequired);
        }
        let session_date = NaiveDate::parse_from_str(date_text, SESSION_DATE_FORMAT)
            .map_err(|_| NoteValidationError::SessionDateRequired)?;
        if session_date > today {
            return Err(NoteValidationError::SessionDateInFuture);
        }

        let quick_notes = self.quick_notes.trim();
        if quick_notes.is_empty() {
            return Err(NoteValidationError::QuickNotesRequired);
        }
        if quick_notes.chars().count() > QUICK_NOTES_MAX_CHARS {
            return Err(NoteValidationError::QuickNotesTooLong);
        }

        let duration_minutes = self
            .duration_minutes
            .filter(|minutes| (DURATION_MIN_MINUTES..=DURATION_MAX_MINUTES).contains(minutes))
            .ok_or(NoteValidationError::DurationOutOfRange)?;

        Ok(NormalizedNote {
            client_name: client_name.to_string(),
            session_date,
            quick_notes: quick_notes.to_string(),
            duration_minutes,
        })
    }
}
