use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub subtitle: Option<String>,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    pub isbn: Option<String>,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub publisher: Option<String>,
    pub publication_date: Option<DateTime<Utc>>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub pages: i32,
    /// Defaults to `English`.
    pub language: Option<String>,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    pub sale_price: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub stock_quantity: i32,
    /// Defaults to `available`.
    pub status: Option<String>,
    pub cover_image: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub gallery_images: Option<Value>,
    pub preview_url: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub purchase_links: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub tags: Option<Value>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_published: bool,
    pub created_by: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub publication_date: Option<DateTime<Utc>>,
    #[validate(range(min = 0))]
    pub pages: Option<i32>,
    pub language: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub sale_price: Option<f64>,
    #[validate(range(min = 0))]
    pub stock_quantity: Option<i32>,
    pub status: Option<String>,
    pub cover_image: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub gallery_images: Option<Value>,
    pub preview_url: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub purchase_links: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub tags: Option<Value>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
    #[validate(range(min = 0))]
    pub total_sales: Option<i32>,
    #[validate(range(min = 0.0))]
    pub average_rating: Option<f64>,
    #[validate(range(min = 0))]
    pub review_count: Option<i32>,
}
