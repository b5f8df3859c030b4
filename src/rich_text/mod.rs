//! Rich text validation for the Courier domain layer.
//!
//! A rich template is a plain string with embedded `{placeholder}` markers,
//! each resolving to a typed rich object descriptor. This module provides
//! the descriptor type, the validator contract consumed by the notification
//! aggregate, and the shipped structural validator.

pub mod errors;
pub mod types;
pub mod validator;

pub use errors::RichTextError;
pub use types::RichObject;
pub use validator::{DefaultRichTextValidator, RichTextValidator};
