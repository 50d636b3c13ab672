use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// A contact-form submission. `data` holds whatever fields the site's form posted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "forms")]
#[schema(as = Form)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    #[serde(serialize_with = "crate::utils::json_doc::serialize")]
    #[schema(value_type = Object)]
    pub data: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeUtc,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
