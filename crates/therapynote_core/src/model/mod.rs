//! Domain model for therapy session notes.
//!
//! # Responsibility
//! - Define the canonical `SessionNote` record and its input shapes.
//! - Gate every write path through draft validation.
//!
//! # Invariants
//! - `id`, `therapist_id` and `created_at` are never caller-supplied and
//!   never change after creation.
//! - A `NormalizedNote` can only be obtained through `NoteDraft::validate`.

pub mod session_note;
