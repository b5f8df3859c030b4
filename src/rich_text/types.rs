use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A typed reference to a rich object, substituted into a rich template.
///
/// A descriptor names the object's type (e.g. "file", "user") and its
/// identifier; everything else (display name, path, server, ...) is carried
/// as free-form metadata whose schema belongs to the rich-object type
/// registry, not to this crate. The serialized form is the flat
/// `{"type": ..., "id": ..., ...}` map the wire format expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichObject {
    /// The type of the rich object (e.g. "file", "user").
    #[serde(rename = "type")]
    pub object_type: String,
    /// The unique identifier of the rich object.
    pub id: String,
    /// Additional type-specific keys such as "name" or "path".
    #[serde(flatten)]
    pub metadata: HashMap<String, String>,
}

impl RichObject {
    /// Creates a new rich object descriptor.
    pub fn new(object_type: impl Into<String>, id: impl Into<String>) -> Self {
        RichObject {
            object_type: object_type.into(),
            id: id.into(),
            metadata: HashMap::new(),
        }
    }

    /// Adds a metadata entry to the descriptor.
    ///
    /// # Returns
    ///
    /// The modified descriptor, for chaining.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
