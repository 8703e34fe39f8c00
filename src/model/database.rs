use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Result of the database bootstrap check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseStatusDto {
    pub success: bool,
    pub message: String,
    /// Table name to existence flag.
    pub tables: BTreeMap<String, bool>,
}
