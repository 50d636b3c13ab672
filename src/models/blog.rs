use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBlogRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(custom(function = "crate::utils::json_doc::require_document"))]
    #[schema(value_type = Object)]
    pub content: Value,
    pub author: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub content: Option<Value>,
    pub author: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadImageResponse {
    pub id: i32,
    pub image_url: String,
    pub image_key: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SignedUrlResponse {
    pub url: String,
    /// Seconds until the URL stops working.
    pub expires_in: u64,
}
