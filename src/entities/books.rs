use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "books")]
#[schema(as = Book)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub author: String,
    pub isbn: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub publisher: Option<String>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub publication_date: Option<DateTimeUtc>,
    pub pages: i32,
    pub language: String,
    pub category: String,
    pub price: f64,
    /// Not checked against `price`.
    pub sale_price: Option<f64>,
    pub stock_quantity: i32,
    /// available, out_of_stock, pre_order or discontinued (advisory only).
    pub status: String,
    pub cover_image: Option<String>,
    #[sea_orm(column_type = "Text")]
    #[serde(serialize_with = "crate::utils::json_doc::serialize")]
    #[schema(value_type = Object)]
    pub gallery_images: String,
    pub preview_url: Option<String>,
    #[sea_orm(column_type = "Text")]
    #[serde(serialize_with = "crate::utils::json_doc::serialize")]
    #[schema(value_type = Object)]
    pub purchase_links: String,
    #[sea_orm(column_type = "Text")]
    #[serde(serialize_with = "crate::utils::json_doc::serialize")]
    #[schema(value_type = Object)]
    pub tags: String,
    pub is_featured: bool,
    pub is_published: bool,
    pub total_sales: i32,
    pub average_rating: f64,
    pub review_count: i32,
    pub created_by: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeUtc,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
