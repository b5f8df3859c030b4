//! Notification model for the Courier domain layer.
//!
//! A notification is assembled in two phases: a producer fills the raw form
//! (templates plus opaque parameters) and a rendering collaborator fills the
//! parsed form (human-readable text plus rich, referenceable objects). Each
//! phase has its own validity predicate; persistence and delivery of the
//! record belong to other layers.

pub mod action;
pub mod errors;
pub mod types;

pub use action::{Action, RequestMethod};
pub use errors::NotificationError;
pub use types::{Notification, ObjectId};
