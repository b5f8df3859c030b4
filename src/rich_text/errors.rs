use thiserror::Error;

/// Failures reported by a [`RichTextValidator`](super::RichTextValidator).
///
/// Callers gating delivery only care about pass/fail; the variants exist for
/// callers that validate directly and want to know which parameter broke.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RichTextError {
    /// The template references a placeholder with no matching parameter.
    #[error("Rich template references placeholder '{{{0}}}' but no such parameter was supplied")]
    MissingParameter(String),

    /// A supplied rich object descriptor is structurally malformed.
    #[error("Invalid rich object for parameter '{key}': {reason}")]
    InvalidObject { key: String, reason: String },
}
