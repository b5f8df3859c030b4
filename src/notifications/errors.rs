use thiserror::Error;

/// Errors raised by the notification aggregate and its action value object.
///
/// Every setter and mutator raises the same kind of failure: the argument it
/// was handed violates a precondition (empty string, over-length string, the
/// reserved zero timestamp, an invalid or duplicate-primary action). Nothing
/// is retried or recovered internally; a failed call leaves the notification
/// untouched and the caller aborts or corrects the assembly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Invalid argument for notification field '{field}': {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },
}

impl NotificationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        NotificationError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}
