//! Repository layer over the note table capability.
//!
//! # Responsibility
//! - Expose the four note operations with a stable, typed error contract.
//! - Scope every operation to the configured therapist.
//!
//! # Invariants
//! - Store failures always arrive wrapped with the operation prefix the UI
//!   shows verbatim.
//! - No caching, no batching, no automatic retries.

pub mod session_note_repo;
