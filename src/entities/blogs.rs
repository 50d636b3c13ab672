use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "blogs")]
#[schema(as = Blog)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    /// Rich-text document as produced by the site editor.
    #[sea_orm(column_type = "Text")]
    #[serde(serialize_with = "crate::utils::json_doc::serialize")]
    #[schema(value_type = Object)]
    pub content: String,
    pub author: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeUtc,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::blog_images::Entity")]
    BlogImages,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
}

impl Related<super::blog_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogImages.def()
    }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
