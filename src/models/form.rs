use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFormRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(custom(function = "crate::utils::json_doc::require_document"))]
    #[schema(value_type = Object)]
    pub data: Value,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateFormRequest {
    pub title: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
}
