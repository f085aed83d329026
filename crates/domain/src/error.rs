//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! Validation messages double as the wire-visible error texts, so their
//! wording is part of the HTTP contract.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum AutomataError {
    /// A submitted or configured value failed invariant checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Invariant violations on submitted or configured values.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The `task` field is absent, not text, or blank after trimming.
    #[error("Field 'task' is required and must be a non-empty string.")]
    EmptyTask,
    /// An intent rule keyword is empty or not a lowercase ASCII token.
    #[error("intent rule keyword must be a lowercase ascii token")]
    InvalidKeyword,
}
