//! Task text — the free-form description submitted for classification.

use crate::error::{AutomataError, ValidationError};

/// Free-text task description, trimmed and known to be non-empty.
///
/// Constructing a [`TaskDescription`] is the only validation gate for
/// submitted text; the resolver never sees raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Trim surrounding whitespace and wrap the remaining text.
    ///
    /// # Errors
    ///
    /// Returns [`AutomataError::Validation`] when `raw` is empty or
    /// whitespace-only.
    pub fn new(raw: &str) -> Result<Self, AutomataError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTask.into());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed task text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
