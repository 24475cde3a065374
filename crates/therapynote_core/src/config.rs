//! Deployment configuration for the acting therapist.
//!
//! # Responsibility
//! - Resolve the owner identifier for all notes in this deployment.
//! - Keep configuration an explicit value handed to constructors, never
//!   ambient global state.
//!
//! # Invariants
//! - A missing or blank identifier is a startup error for the caller, not a
//!   per-operation error.
//! - The identifier is read once and then passed by value.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable naming the acting therapist.
pub const THERAPIST_ID_ENV: &str = "THERAPIST_ID";

/// Identifier of the therapist owning every note in this deployment.
///
/// Opaque to the core; the store matches rows against it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TherapistId(String);

impl TherapistId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TherapistId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TherapistId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TherapistId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Startup-time configuration failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The therapist identifier variable is unset or blank.
    MissingTherapistId { var: &'static str },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTherapistId { var } => write!(
                f,
                "missing {var} environment variable; set it to the acting therapist's identifier"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Reads the acting therapist identifier from `THERAPIST_ID`.
///
/// Call once at startup and inject the result into repository construction;
/// absence is fatal to the caller, never retried per operation.
pub fn therapist_id_from_env() -> Result<TherapistId, ConfigError> {
    therapist_id_from_var(THERAPIST_ID_ENV)
}

fn therapist_id_from_var(var: &'static str) -> Result<TherapistId, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(TherapistId(value.trim().to_string())),
        _ => Err(ConfigError::MissingTherapistId { var }),
    }
}
