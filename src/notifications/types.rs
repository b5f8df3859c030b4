use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::action::Action;
use super::errors::NotificationError;
use crate::rich_text::{RichObject, RichTextValidator};

const APP_MAX_BYTES: usize = 32;
const USER_MAX_BYTES: usize = 64;
const OBJECT_MAX_BYTES: usize = 64;
const TEMPLATE_MAX_BYTES: usize = 64;
const LINK_MAX_BYTES: usize = 4000;

/// The identifier of the object a notification is about, normalised to its
/// decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(String);

impl ObjectId {
    /// Returns a string slice of the object id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        ObjectId(id)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        ObjectId(id.to_string())
    }
}

impl From<u64> for ObjectId {
    fn from(id: u64) -> Self {
        ObjectId(id.to_string())
    }
}

impl From<i64> for ObjectId {
    fn from(id: i64) -> Self {
        ObjectId(id.to_string())
    }
}

impl From<u32> for ObjectId {
    fn from(id: u32) -> Self {
        ObjectId(id.to_string())
    }
}

impl From<i32> for ObjectId {
    fn from(id: i32) -> Self {
        ObjectId(id.to_string())
    }
}

/// A notification record assembled in two phases.
///
/// A producer populates the raw form (app, user, timestamp, object reference,
/// subject/message templates with opaque parameters, link, icon, actions) and
/// checks [`is_valid`](Notification::is_valid). The rendering collaborator
/// later populates the parsed and rich forms and checks
/// [`is_valid_parsed`](Notification::is_valid_parsed), which gates delivery.
///
/// Every setter validates before it assigns: a rejected call returns the
/// error and leaves the notification exactly as it was. Successful calls
/// return `&mut Self` so assembly chains with `?`.
pub struct Notification {
    rich_validator: Arc<dyn RichTextValidator>,
    app: String,
    user: String,
    timestamp: Option<DateTime<Utc>>,
    object_type: String,
    object_id: String,
    subject: String,
    subject_parameters: Vec<Value>,
    parsed_subject: String,
    rich_subject: String,
    rich_subject_parameters: HashMap<String, RichObject>,
    message: String,
    message_parameters: Vec<Value>,
    parsed_message: String,
    rich_message: String,
    rich_message_parameters: HashMap<String, RichObject>,
    link: String,
    icon: String,
    actions: Vec<Action>,
    parsed_actions: Vec<Action>,
    has_primary_action: bool,
    has_primary_parsed_action: bool,
}

fn validate_bounded(
    field: &'static str,
    value: &str,
    max_bytes: usize,
) -> Result<(), NotificationError> {
    if value.is_empty() {
        return Err(NotificationError::invalid(field, "must not be empty"));
    }
    if value.len() > max_bytes {
        return Err(NotificationError::invalid(
            field,
            format!("must not exceed {} bytes", max_bytes),
        ));
    }
    Ok(())
}

impl Notification {
    /// Creates an empty notification.
    ///
    /// All strings start empty, the timestamp starts unset and both action
    /// lists start empty. The rich validator is consulted by
    /// [`is_valid_parsed`](Notification::is_valid_parsed) only.
    pub fn new(rich_validator: Arc<dyn RichTextValidator>) -> Self {
        Notification {
            rich_validator,
            app: String::new(),
            user: String::new(),
            timestamp: None,
            object_type: String::new(),
            object_id: String::new(),
            subject: String::new(),
            subject_parameters: Vec::new(),
            parsed_subject: String::new(),
            rich_subject: String::new(),
            rich_subject_parameters: HashMap::new(),
            message: String::new(),
            message_parameters: Vec::new(),
            parsed_message: String::new(),
            rich_message: String::new(),
            rich_message_parameters: HashMap::new(),
            link: String::new(),
            icon: String::new(),
            actions: Vec::new(),
            parsed_actions: Vec::new(),
            has_primary_action: false,
            has_primary_parsed_action: false,
        }
    }

    /// Sets the id of the app issuing the notification.
    ///
    /// Fails if the id is empty or exceeds 32 bytes.
    pub fn set_app(&mut self, app: impl Into<String>) -> Result<&mut Self, NotificationError> {
        let app = app.into();
        validate_bounded("app", &app, APP_MAX_BYTES)?;
        self.app = app;
        Ok(self)
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    /// Sets the id of the user the notification is addressed to.
    ///
    /// Fails if the id is empty or exceeds 64 bytes.
    pub fn set_user(&mut self, user: impl Into<String>) -> Result<&mut Self, NotificationError> {
        let user = user.into();
        validate_bounded("user", &user, USER_MAX_BYTES)?;
        self.user = user;
        Ok(self)
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Sets the time the notification was issued.
    ///
    /// The epoch-zero instant is reserved to mean "unset" and is rejected as
    /// an explicit set target.
    pub fn set_date_time(
        &mut self,
        date_time: DateTime<Utc>,
    ) -> Result<&mut Self, NotificationError> {
        if date_time.timestamp() == 0 {
            return Err(NotificationError::invalid(
                "timestamp",
                "the zero timestamp is reserved to mean unset",
            ));
        }
        self.timestamp = Some(date_time);
        Ok(self)
    }

    /// Returns the time the notification was issued, or `None` while unset.
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Sets the object the notification is about.
    ///
    /// The id may be given as a string or an integer; integers are stored in
    /// their decimal string form. Both parts are validated before either is
    /// assigned.
    pub fn set_object(
        &mut self,
        object_type: impl Into<String>,
        object_id: impl Into<ObjectId>,
    ) -> Result<&mut Self, NotificationError> {
        let object_type = object_type.into();
        let object_id = object_id.into();
        validate_bounded("object type", &object_type, OBJECT_MAX_BYTES)?;
        validate_bounded("object id", object_id.as_str(), OBJECT_MAX_BYTES)?;
        self.object_type = object_type;
        self.object_id = object_id.0;
        Ok(self)
    }

    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// Sets the raw subject template and its parameters.
    ///
    /// The template must be non-empty and at most 64 bytes. Parameters are
    /// stored verbatim; their semantics belong to the rendering collaborator.
    pub fn set_subject(
        &mut self,
        subject: impl Into<String>,
        parameters: Vec<Value>,
    ) -> Result<&mut Self, NotificationError> {
        let subject = subject.into();
        validate_bounded("subject", &subject, TEMPLATE_MAX_BYTES)?;
        self.subject = subject;
        self.subject_parameters = parameters;
        Ok(self)
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn subject_parameters(&self) -> &[Value] {
        &self.subject_parameters
    }

    /// Sets the rendered, human-readable subject. No length cap.
    pub fn set_parsed_subject(
        &mut self,
        subject: impl Into<String>,
    ) -> Result<&mut Self, NotificationError> {
        let subject = subject.into();
        if subject.is_empty() {
            return Err(NotificationError::invalid(
                "parsed subject",
                "must not be empty",
            ));
        }
        self.parsed_subject = subject;
        Ok(self)
    }

    pub fn parsed_subject(&self) -> &str {
        &self.parsed_subject
    }

    /// Sets the rich subject template and its rich object parameters.
    ///
    /// Only emptiness is checked here; structural validation of the rich
    /// content is deferred to [`is_valid_parsed`](Notification::is_valid_parsed).
    pub fn set_rich_subject(
        &mut self,
        subject: impl Into<String>,
        parameters: HashMap<String, RichObject>,
    ) -> Result<&mut Self, NotificationError> {
        let subject = subject.into();
        if subject.is_empty() {
            return Err(NotificationError::invalid(
                "rich subject",
                "must not be empty",
            ));
        }
        self.rich_subject = subject;
        self.rich_subject_parameters = parameters;
        Ok(self)
    }

    pub fn rich_subject(&self) -> &str {
        &self.rich_subject
    }

    pub fn rich_subject_parameters(&self) -> &HashMap<String, RichObject> {
        &self.rich_subject_parameters
    }

    /// Sets the raw message template and its parameters.
    ///
    /// Same constraints as [`set_subject`](Notification::set_subject).
    pub fn set_message(
        &mut self,
        message: impl Into<String>,
        parameters: Vec<Value>,
    ) -> Result<&mut Self, NotificationError> {
        let message = message.into();
        validate_bounded("message", &message, TEMPLATE_MAX_BYTES)?;
        self.message = message;
        self.message_parameters = parameters;
        Ok(self)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn message_parameters(&self) -> &[Value] {
        &self.message_parameters
    }

    /// Sets the rendered, human-readable message. No length cap.
    pub fn set_parsed_message(
        &mut self,
        message: impl Into<String>,
    ) -> Result<&mut Self, NotificationError> {
        let message = message.into();
        if message.is_empty() {
            return Err(NotificationError::invalid(
                "parsed message",
                "must not be empty",
            ));
        }
        self.parsed_message = message;
        Ok(self)
    }

    pub fn parsed_message(&self) -> &str {
        &self.parsed_message
    }

    /// Sets the rich message template and its rich object parameters.
    pub fn set_rich_message(
        &mut self,
        message: impl Into<String>,
        parameters: HashMap<String, RichObject>,
    ) -> Result<&mut Self, NotificationError> {
        let message = message.into();
        if message.is_empty() {
            return Err(NotificationError::invalid(
                "rich message",
                "must not be empty",
            ));
        }
        self.rich_message = message;
        self.rich_message_parameters = parameters;
        Ok(self)
    }

    pub fn rich_message(&self) -> &str {
        &self.rich_message
    }

    pub fn rich_message_parameters(&self) -> &HashMap<String, RichObject> {
        &self.rich_message_parameters
    }

    /// Sets the link opened when the notification itself is activated.
    ///
    /// Fails if the link is empty or exceeds 4000 bytes.
    pub fn set_link(&mut self, link: impl Into<String>) -> Result<&mut Self, NotificationError> {
        let link = link.into();
        validate_bounded("link", &link, LINK_MAX_BYTES)?;
        self.link = link;
        Ok(self)
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Sets the icon shown next to the notification.
    ///
    /// Fails if the icon is empty or exceeds 4000 bytes.
    pub fn set_icon(&mut self, icon: impl Into<String>) -> Result<&mut Self, NotificationError> {
        let icon = icon.into();
        validate_bounded("icon", &icon, LINK_MAX_BYTES)?;
        self.icon = icon;
        Ok(self)
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Returns a new, empty action for the caller to populate.
    pub fn create_action(&self) -> Action {
        Action::new()
    }

    /// Adds a raw action.
    ///
    /// Fails if the action's raw form is incomplete, or if it is flagged
    /// primary and a primary action was already added. Actions keep their
    /// insertion order.
    pub fn add_action(&mut self, action: Action) -> Result<&mut Self, NotificationError> {
        if !action.is_valid() {
            return Err(NotificationError::invalid(
                "action",
                "the given action is not valid",
            ));
        }

        if action.is_primary() {
            if self.has_primary_action {
                return Err(NotificationError::invalid(
                    "action",
                    "the notification already has a primary action",
                ));
            }
            self.has_primary_action = true;
        }

        self.actions.push(action);
        Ok(self)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Adds a parsed action.
    ///
    /// Fails if the action's parsed form is incomplete, or if it is flagged
    /// primary and a primary parsed action was already added. A primary
    /// parsed action is moved to the front of the list regardless of
    /// insertion order; all other actions append.
    pub fn add_parsed_action(&mut self, action: Action) -> Result<&mut Self, NotificationError> {
        if !action.is_valid_parsed() {
            return Err(NotificationError::invalid(
                "parsed action",
                "the given parsed action is not valid",
            ));
        }

        if action.is_primary() {
            if self.has_primary_parsed_action {
                return Err(NotificationError::invalid(
                    "parsed action",
                    "the notification already has a primary action",
                ));
            }
            self.has_primary_parsed_action = true;

            // The primary action is always delivered first.
            self.parsed_actions.insert(0, action);
        } else {
            self.parsed_actions.push(action);
        }

        Ok(self)
    }

    pub fn parsed_actions(&self) -> &[Action] {
        &self.parsed_actions
    }

    /// Whether the raw form is complete enough to enter the pipeline:
    /// app, user, timestamp and object reference set, plus a raw subject.
    ///
    /// Message, link, icon and actions are not required.
    pub fn is_valid(&self) -> bool {
        self.is_valid_common() && !self.subject.is_empty()
    }

    /// Whether the parsed form is complete enough to be delivered.
    ///
    /// Rich subject and rich message are structurally validated when present;
    /// a validator failure yields `false` rather than an error, since this
    /// predicate gates delivery and does not diagnose. Beyond the common
    /// fields only the parsed subject is required; a notification without a
    /// parsed message is deliverable.
    pub fn is_valid_parsed(&self) -> bool {
        if !self.rich_subject.is_empty() || !self.rich_subject_parameters.is_empty() {
            if let Err(error) = self
                .rich_validator
                .validate(&self.rich_subject, &self.rich_subject_parameters)
            {
                debug!("rich subject failed validation: {}", error);
                return false;
            }
        }

        if !self.rich_message.is_empty() || !self.rich_message_parameters.is_empty() {
            if let Err(error) = self
                .rich_validator
                .validate(&self.rich_message, &self.rich_message_parameters)
            {
                debug!("rich message failed validation: {}", error);
                return false;
            }
        }

        self.is_valid_common() && !self.parsed_subject.is_empty()
    }

    fn is_valid_common(&self) -> bool {
        !self.app.is_empty()
            && !self.user.is_empty()
            && self.timestamp.is_some()
            && !self.object_type.is_empty()
            && !self.object_id.is_empty()
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("app", &self.app)
            .field("user", &self.user)
            .field("timestamp", &self.timestamp)
            .field("object_type", &self.object_type)
            .field("object_id", &self.object_id)
            .field("subject", &self.subject)
            .field("parsed_subject", &self.parsed_subject)
            .field("message", &self.message)
            .field("parsed_message", &self.parsed_message)
            .field("link", &self.link)
            .field("icon", &self.icon)
            .field("actions", &self.actions)
            .field("parsed_actions", &self.parsed_actions)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Notification[{}] '{}' ({}/{})",
            self.app, self.subject, self.object_type, self.object_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::action::RequestMethod;
    use crate::rich_text::{DefaultRichTextValidator, RichTextError};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// A validator that rejects everything, for exercising the swallow path.
    struct RejectEverything;

    impl RichTextValidator for RejectEverything {
        fn validate(
            &self,
            _template: &str,
            _parameters: &HashMap<String, RichObject>,
        ) -> Result<(), RichTextError> {
            Err(RichTextError::MissingParameter("anything".to_string()))
        }
    }

    fn notification() -> Notification {
        Notification::new(Arc::new(DefaultRichTextValidator::new()))
    }

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 10, 30, 0).unwrap()
    }

    fn raw_action(label: &str, primary: bool) -> Action {
        let mut action = Action::new();
        action.set_label(label).unwrap();
        action.set_link("/endpoint", RequestMethod::Post).unwrap();
        action.set_primary(primary);
        action
    }

    fn parsed_action(label: &str, primary: bool) -> Action {
        let mut action = raw_action(label, primary);
        action.set_parsed_label(format!("{} now", label)).unwrap();
        action
    }

    /// Populates everything `is_valid()` requires.
    fn populate_common(notification: &mut Notification) {
        notification
            .set_app("files")
            .unwrap()
            .set_user("alice")
            .unwrap()
            .set_date_time(sample_time())
            .unwrap()
            .set_object("file", 42u64)
            .unwrap()
            .set_subject("file_shared", Vec::new())
            .unwrap();
    }

    #[test]
    fn fresh_notification_is_empty_and_invalid() {
        let notification = notification();
        assert_eq!(notification.app(), "");
        assert_eq!(notification.user(), "");
        assert_eq!(notification.date_time(), None);
        assert_eq!(notification.object_type(), "");
        assert_eq!(notification.object_id(), "");
        assert_eq!(notification.subject(), "");
        assert!(notification.subject_parameters().is_empty());
        assert_eq!(notification.link(), "");
        assert_eq!(notification.icon(), "");
        assert!(notification.actions().is_empty());
        assert!(notification.parsed_actions().is_empty());
        assert!(!notification.is_valid());
        assert!(!notification.is_valid_parsed());
    }

    #[test]
    fn set_app_bounds_and_non_mutation() {
        let mut notification = notification();
        notification.set_app("files").unwrap();

        assert!(notification.set_app("").is_err());
        assert!(notification.set_app("a".repeat(33)).is_err());
        assert_eq!(notification.app(), "files");

        notification.set_app("a".repeat(32)).unwrap();
        assert_eq!(notification.app().len(), 32);
    }

    #[test]
    fn set_user_bounds_and_non_mutation() {
        let mut notification = notification();
        notification.set_user("alice").unwrap();

        assert!(notification.set_user("").is_err());
        assert!(notification.set_user("u".repeat(65)).is_err());
        assert_eq!(notification.user(), "alice");

        notification.set_user("u".repeat(64)).unwrap();
        assert_eq!(notification.user().len(), 64);
    }

    #[test]
    fn set_date_time_rejects_the_epoch_sentinel() {
        let mut notification = notification();
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert!(notification.set_date_time(epoch).is_err());
        assert_eq!(notification.date_time(), None);

        notification.set_date_time(sample_time()).unwrap();
        assert_eq!(notification.date_time(), Some(sample_time()));

        // Pre-epoch instants are not the sentinel.
        let before_epoch = Utc.timestamp_opt(-1, 0).unwrap();
        notification.set_date_time(before_epoch).unwrap();
        assert_eq!(notification.date_time(), Some(before_epoch));
    }

    #[test]
    fn set_object_normalises_integer_ids() {
        let mut notification = notification();
        notification.set_object("file", 42u64).unwrap();
        assert_eq!(notification.object_type(), "file");
        assert_eq!(notification.object_id(), "42");

        notification.set_object("comment", "abc-123").unwrap();
        assert_eq!(notification.object_id(), "abc-123");
    }

    #[test]
    fn set_object_rejects_without_partial_assignment() {
        let mut notification = notification();
        notification.set_object("file", 42u64).unwrap();

        // An invalid id must not leave a half-updated object reference.
        assert!(notification.set_object("calendar", "x".repeat(65)).is_err());
        assert_eq!(notification.object_type(), "file");
        assert_eq!(notification.object_id(), "42");

        assert!(notification.set_object("", "7").is_err());
        assert!(notification.set_object("t".repeat(65), "7").is_err());
        assert_eq!(notification.object_type(), "file");
    }

    #[test]
    fn set_subject_stores_parameters_verbatim() {
        let mut notification = notification();
        let parameters = vec![json!("alice"), json!({"path": "a/b.txt"}), json!(3)];
        notification
            .set_subject("file_shared", parameters.clone())
            .unwrap();
        assert_eq!(notification.subject(), "file_shared");
        assert_eq!(notification.subject_parameters(), parameters.as_slice());

        assert!(notification.set_subject("", Vec::new()).is_err());
        assert!(notification
            .set_subject("s".repeat(65), Vec::new())
            .is_err());
        assert_eq!(notification.subject(), "file_shared");
    }

    #[test]
    fn set_parsed_subject_has_no_cap() {
        let mut notification = notification();
        assert!(notification.set_parsed_subject("").is_err());
        notification.set_parsed_subject("p".repeat(500)).unwrap();
        assert_eq!(notification.parsed_subject().len(), 500);
    }

    #[test]
    fn set_rich_subject_defers_structural_validation() {
        let mut notification = notification();
        assert!(notification.set_rich_subject("", HashMap::new()).is_err());

        // A dangling placeholder is accepted at set time.
        notification
            .set_rich_subject("{file} was shared", HashMap::new())
            .unwrap();
        assert_eq!(notification.rich_subject(), "{file} was shared");
        assert!(notification.rich_subject_parameters().is_empty());
    }

    #[test]
    fn message_triad_mirrors_subject_constraints() {
        let mut notification = notification();
        assert!(notification.set_message("", Vec::new()).is_err());
        assert!(notification
            .set_message("m".repeat(65), Vec::new())
            .is_err());
        notification
            .set_message("file_comment", vec![json!("bob")])
            .unwrap();
        assert_eq!(notification.message(), "file_comment");
        assert_eq!(notification.message_parameters(), &[json!("bob")]);

        assert!(notification.set_parsed_message("").is_err());
        notification.set_parsed_message("Bob commented").unwrap();
        assert_eq!(notification.parsed_message(), "Bob commented");

        assert!(notification.set_rich_message("", HashMap::new()).is_err());
        notification
            .set_rich_message("{user} commented", HashMap::new())
            .unwrap();
        assert_eq!(notification.rich_message(), "{user} commented");
    }

    #[test]
    fn set_link_replaces_instead_of_appending() {
        let mut notification = notification();
        assert!(notification.set_link("").is_err());
        assert!(notification.set_link("l".repeat(4001)).is_err());

        notification.set_link("/files/42").unwrap();
        notification.set_link("/files/42").unwrap();
        assert_eq!(notification.link(), "/files/42");

        notification.set_link("l".repeat(4000)).unwrap();
        assert_eq!(notification.link().len(), 4000);
    }

    #[test]
    fn set_icon_bounds() {
        let mut notification = notification();
        assert!(notification.set_icon("").is_err());
        assert!(notification.set_icon("i".repeat(4001)).is_err());
        notification.set_icon("icon-share").unwrap();
        assert_eq!(notification.icon(), "icon-share");
    }

    #[test]
    fn setters_chain_with_question_mark() -> Result<(), NotificationError> {
        let mut notification = notification();
        notification
            .set_app("files")?
            .set_user("alice")?
            .set_date_time(sample_time())?
            .set_object("file", 42u64)?
            .set_subject("file_shared", Vec::new())?
            .set_link("/files/42")?;
        assert!(notification.is_valid());
        Ok(())
    }

    #[test]
    fn add_action_rejects_incomplete_actions() {
        let mut notification = notification();
        let mut incomplete = notification.create_action();
        incomplete.set_label("Accept").unwrap();
        assert!(notification.add_action(incomplete).is_err());
        assert!(notification.actions().is_empty());
    }

    #[test]
    fn add_action_allows_a_single_primary() {
        let mut notification = notification();
        notification.add_action(raw_action("Accept", true)).unwrap();
        notification
            .add_action(raw_action("Decline", false))
            .unwrap();

        let error = notification.add_action(raw_action("Also", true));
        assert!(error.is_err());

        // The first action remains the sole primary entry, in insertion order.
        let primaries: Vec<&str> = notification
            .actions()
            .iter()
            .filter(|action| action.is_primary())
            .map(|action| action.label())
            .collect();
        assert_eq!(primaries, vec!["Accept"]);
        assert_eq!(notification.actions().len(), 2);
        assert_eq!(notification.actions()[0].label(), "Accept");
        assert_eq!(notification.actions()[1].label(), "Decline");
    }

    #[test]
    fn add_parsed_action_requires_the_parsed_form() {
        let mut notification = notification();
        // Raw-valid but never rendered.
        assert!(notification.add_parsed_action(raw_action("Accept", false)).is_err());
        assert!(notification.parsed_actions().is_empty());
    }

    #[test]
    fn primary_parsed_action_moves_to_the_front() {
        let mut notification = notification();
        notification
            .add_parsed_action(parsed_action("Decline", false))
            .unwrap();
        notification
            .add_parsed_action(parsed_action("Accept", true))
            .unwrap();
        notification
            .add_parsed_action(parsed_action("Later", false))
            .unwrap();

        let labels: Vec<&str> = notification
            .parsed_actions()
            .iter()
            .map(|action| action.label())
            .collect();
        assert_eq!(labels, vec!["Accept", "Decline", "Later"]);

        let error = notification.add_parsed_action(parsed_action("Another", true));
        assert!(error.is_err());
        assert_eq!(notification.parsed_actions().len(), 3);
    }

    #[test]
    fn is_valid_requires_common_fields_and_subject() {
        let mut notification = notification();
        assert!(!notification.is_valid());

        notification.set_app("files").unwrap();
        assert!(!notification.is_valid());
        notification.set_user("alice").unwrap();
        assert!(!notification.is_valid());
        notification.set_date_time(sample_time()).unwrap();
        assert!(!notification.is_valid());
        notification.set_object("file", 42u64).unwrap();
        assert!(!notification.is_valid());
        notification.set_subject("file_shared", Vec::new()).unwrap();
        assert!(notification.is_valid());

        // Message, link, icon and actions are not part of raw validity.
    }

    #[test]
    fn is_valid_parsed_requires_the_parsed_subject() {
        let mut notification = notification();
        populate_common(&mut notification);
        assert!(!notification.is_valid_parsed());

        notification.set_parsed_subject("Alice shared a file").unwrap();
        assert!(notification.is_valid_parsed());

        // A parsed message is deliberately not required.
        assert_eq!(notification.parsed_message(), "");
    }

    #[test]
    fn is_valid_parsed_checks_rich_subject_content() {
        let mut notification = notification();
        populate_common(&mut notification);
        notification.set_parsed_subject("Alice shared a file").unwrap();

        notification
            .set_rich_subject("{file} was shared", HashMap::new())
            .unwrap();
        assert!(!notification.is_valid_parsed());

        let mut parameters = HashMap::new();
        parameters.insert("file".to_string(), RichObject::new("file", "42"));
        notification
            .set_rich_subject("{file} was shared", parameters)
            .unwrap();
        assert!(notification.is_valid_parsed());
    }

    #[test]
    fn is_valid_parsed_checks_rich_message_without_requiring_it() {
        let mut notification = notification();
        populate_common(&mut notification);
        notification.set_parsed_subject("Alice shared a file").unwrap();
        assert!(notification.is_valid_parsed());

        // Present rich message content is still structurally checked.
        notification
            .set_rich_message("{comment} was added", HashMap::new())
            .unwrap();
        assert!(!notification.is_valid_parsed());

        let mut parameters = HashMap::new();
        parameters.insert("comment".to_string(), RichObject::new("comment", "7"));
        notification
            .set_rich_message("{comment} was added", parameters)
            .unwrap();
        assert!(notification.is_valid_parsed());
    }

    #[test]
    fn is_valid_parsed_swallows_validator_failures() {
        let mut notification = Notification::new(Arc::new(RejectEverything));
        populate_common(&mut notification);
        notification.set_parsed_subject("Alice shared a file").unwrap();

        // Without rich content the validator is never consulted.
        assert!(notification.is_valid_parsed());

        notification
            .set_rich_subject("{file}", HashMap::new())
            .unwrap();
        assert!(!notification.is_valid_parsed());
    }

    #[test]
    fn object_id_conversions() {
        assert_eq!(ObjectId::from(42u64).as_str(), "42");
        assert_eq!(ObjectId::from(-7i64).as_str(), "-7");
        assert_eq!(ObjectId::from("abc").as_str(), "abc");
        assert_eq!(ObjectId::from("abc".to_string()).as_str(), "abc");
        assert_eq!(format!("{}", ObjectId::from(9u32)), "9");
    }

    #[test]
    fn display_names_the_app_and_object() {
        let mut notification = notification();
        populate_common(&mut notification);
        assert_eq!(
            format!("{}", notification),
            "Notification[files] 'file_shared' (file/42)"
        );
    }
}
