//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls into the entry points the
//!   presentation layer consumes.
//! - Keep UI layers decoupled from storage details.

pub mod note_service;
