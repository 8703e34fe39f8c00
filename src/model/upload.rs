use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadResponseDto {
    pub success: bool,
    /// Public URLs of the stored images, in upload order.
    pub urls: Vec<String>,
}
