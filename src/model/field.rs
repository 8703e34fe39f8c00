use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A list-valued input field.
///
/// Clients send either a proper JSON array or a pre-encoded string (for example a
/// comma separated list typed into a form). Arrays are JSON-encoded before storage,
/// strings are stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ListField {
    Items(Vec<String>),
    Raw(String),
}

impl From<Vec<String>> for ListField {
    fn from(items: Vec<String>) -> Self {
        Self::Items(items)
    }
}
