use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::NotificationError;

const LABEL_MAX_BYTES: usize = 32;
const LINK_MAX_BYTES: usize = 256;

/// The request method used when an action's link is followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    /// Open the link in the browser instead of issuing a background request.
    Web,
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestMethod::Get => write!(f, "GET"),
            RequestMethod::Post => write!(f, "POST"),
            RequestMethod::Put => write!(f, "PUT"),
            RequestMethod::Delete => write!(f, "DELETE"),
            RequestMethod::Web => write!(f, "WEB"),
        }
    }
}

/// An action attached to a notification.
///
/// A plain mutable value object: the caller populates it field by field and
/// hands it to [`Notification::add_action`](super::Notification::add_action)
/// or [`Notification::add_parsed_action`](super::Notification::add_parsed_action),
/// which check the matching validity predicate before taking ownership.
/// The raw form needs a label and a link; the parsed form additionally needs
/// the rendered label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Action {
    label: String,
    parsed_label: String,
    link: String,
    request_method: RequestMethod,
    primary: bool,
}

impl Action {
    /// Creates a new, empty action.
    pub fn new() -> Self {
        Action::default()
    }

    /// Sets the raw (template) label.
    ///
    /// Fails if the label is empty or exceeds 32 bytes.
    pub fn set_label(&mut self, label: impl Into<String>) -> Result<&mut Self, NotificationError> {
        let label = label.into();
        if label.is_empty() {
            return Err(NotificationError::invalid("action label", "must not be empty"));
        }
        if label.len() > LABEL_MAX_BYTES {
            return Err(NotificationError::invalid(
                "action label",
                format!("must not exceed {} bytes", LABEL_MAX_BYTES),
            ));
        }
        self.label = label;
        Ok(self)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sets the rendered, human-readable label. No length cap.
    pub fn set_parsed_label(
        &mut self,
        label: impl Into<String>,
    ) -> Result<&mut Self, NotificationError> {
        let label = label.into();
        if label.is_empty() {
            return Err(NotificationError::invalid(
                "action parsed label",
                "must not be empty",
            ));
        }
        self.parsed_label = label;
        Ok(self)
    }

    pub fn parsed_label(&self) -> &str {
        &self.parsed_label
    }

    /// Sets the link and the request method used to follow it.
    ///
    /// Fails if the link is empty or exceeds 256 bytes.
    pub fn set_link(
        &mut self,
        link: impl Into<String>,
        request_method: RequestMethod,
    ) -> Result<&mut Self, NotificationError> {
        let link = link.into();
        if link.is_empty() {
            return Err(NotificationError::invalid("action link", "must not be empty"));
        }
        if link.len() > LINK_MAX_BYTES {
            return Err(NotificationError::invalid(
                "action link",
                format!("must not exceed {} bytes", LINK_MAX_BYTES),
            ));
        }
        self.link = link;
        self.request_method = request_method;
        Ok(self)
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn request_method(&self) -> RequestMethod {
        self.request_method
    }

    /// Flags the action as the notification's primary action.
    pub fn set_primary(&mut self, primary: bool) -> &mut Self {
        self.primary = primary;
        self
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Whether the raw form is complete: label and link both set.
    pub fn is_valid(&self) -> bool {
        !self.label.is_empty() && !self.link.is_empty()
    }

    /// Whether the parsed form is complete: rendered label and link both set.
    pub fn is_valid_parsed(&self) -> bool {
        !self.parsed_label.is_empty() && !self.link.is_empty()
    }
}
