use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use super::errors::RichTextError;
use super::types::RichObject;

lazy_static! {
    // Placeholder grammar: `{name}` with a lowercase alphanumeric name,
    // matched case-insensitively. Anything else inside braces is plain text.
    static ref PLACEHOLDER: Regex =
        Regex::new(r"(?i)\{([a-z0-9_\-]+)\}").expect("placeholder pattern is well-formed");
}

/// Validates a rich template against its rich object parameters.
///
/// Implementations verify that every placeholder referenced in the template
/// has a matching, well-formed descriptor. The notification aggregate only
/// consumes the pass/fail outcome; callers wanting diagnostics invoke the
/// validator directly.
pub trait RichTextValidator: Send + Sync {
    /// Checks `template` against `parameters`.
    ///
    /// # Returns
    ///
    /// `Ok(())` when every referenced placeholder resolves to a well-formed
    /// descriptor, otherwise the first [`RichTextError`] encountered.
    fn validate(
        &self,
        template: &str,
        parameters: &HashMap<String, RichObject>,
    ) -> Result<(), RichTextError>;
}

/// The shipped [`RichTextValidator`].
///
/// Performs the structural half of rich-content validation: descriptor
/// well-formedness and placeholder resolution. Checking a descriptor's type
/// against the registry of legal rich-object types is the registry
/// collaborator's concern; a registry-backed validator would implement the
/// same trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRichTextValidator;

impl DefaultRichTextValidator {
    pub fn new() -> Self {
        DefaultRichTextValidator
    }
}

impl RichTextValidator for DefaultRichTextValidator {
    fn validate(
        &self,
        template: &str,
        parameters: &HashMap<String, RichObject>,
    ) -> Result<(), RichTextError> {
        // Every supplied descriptor must be well-formed, referenced or not.
        for (key, object) in parameters {
            if object.object_type.is_empty() {
                return Err(RichTextError::InvalidObject {
                    key: key.clone(),
                    reason: "missing object type".to_string(),
                });
            }
            if object.id.is_empty() {
                return Err(RichTextError::InvalidObject {
                    key: key.clone(),
                    reason: "missing object id".to_string(),
                });
            }
        }

        for capture in PLACEHOLDER.captures_iter(template) {
            let name = &capture[1];
            if !parameters.contains_key(name) {
                return Err(RichTextError::MissingParameter(name.to_string()));
            }
        }

        Ok(())
    }
}
