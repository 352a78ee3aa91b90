// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::Serialize;
use thiserror::Error;

/// Failure modes of a blast design request.
///
/// Selector fallbacks and charge clamping are not errors: they are resolved
/// inside the engine and surfaced as events.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlastError {
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("degenerate geometry: `{field}` is zero, powder factor is undefined")]
    DegenerateGeometry { field: String },

    #[error("malformed JSON: {message}")]
    Json { message: String },
}

pub type Result<T> = std::result::Result<T, BlastError>;

impl BlastError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        BlastError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn degenerate(field: &str) -> Self {
        BlastError::DegenerateGeometry {
            field: field.to_string(),
        }
    }

    /// Name of the offending field, if the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            BlastError::InvalidInput { field, .. } | BlastError::DegenerateGeometry { field } => {
                Some(field)
            }
            BlastError::Json { .. } => None,
        }
    }
}

impl From<serde_json::Error> for BlastError {
    fn from(err: serde_json::Error) -> Self {
        BlastError::Json {
            message: err.to_string(),
        }
    }
}
