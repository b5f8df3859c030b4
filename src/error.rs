//! Error module for the Courier domain layer.

use thiserror::Error;

use crate::notifications::NotificationError;
use crate::rich_text::RichTextError;

/// A general Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// The primary error type for the domain layer.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Notification error.
    #[error(transparent)]
    Notification(#[from] NotificationError),

    /// Rich text error.
    #[error(transparent)]
    RichText(#[from] RichTextError),
}
