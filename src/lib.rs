//! Domain model for the Courier notification pipeline.
//!
//! This crate provides the notification record a pipeline builds
//! incrementally and validates in two phases: the raw form an app populates
//! (subject/message templates plus structured parameters) and the parsed
//! form a renderer populates (human-readable text plus rich, referenceable
//! objects). Persistence, dispatch, localization and the rich-object type
//! registry are collaborators of this crate, not part of it.
//!
//! ```
//! use std::sync::Arc;
//! use chrono::Utc;
//! use courier_domain::{DefaultRichTextValidator, Notification, NotificationError};
//!
//! # fn main() -> Result<(), NotificationError> {
//! let mut notification = Notification::new(Arc::new(DefaultRichTextValidator::new()));
//! notification
//!     .set_app("files")?
//!     .set_user("alice")?
//!     .set_date_time(Utc::now())?
//!     .set_object("file", 42u64)?
//!     .set_subject("file_shared", Vec::new())?;
//! assert!(notification.is_valid());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod notifications;
pub mod rich_text;

pub use error::{DomainError, DomainResult};
pub use notifications::{Action, Notification, NotificationError, ObjectId, RequestMethod};
pub use rich_text::{DefaultRichTextValidator, RichObject, RichTextError, RichTextValidator};
