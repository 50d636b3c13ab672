use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "events")]
#[schema(as = Event)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub event_type: String,
    pub status: String,
    #[schema(value_type = String, format = DateTime)]
    pub start_date: DateTimeUtc,
    #[schema(value_type = String, format = DateTime)]
    pub end_date: DateTimeUtc,

    // Venue
    pub venue_name: String,
    #[sea_orm(column_type = "Text")]
    pub venue_address: String,
    pub is_virtual: bool,
    pub virtual_link: Option<String>,
    pub timezone: String,

    // Attendance
    pub capacity: i32,
    pub expected_guests: i32,
    pub registered_count: i32,
    pub actual_guests: Option<i32>,
    pub waitlist_enabled: bool,
    pub allow_walkins: bool,

    // Money
    pub ticket_price: f64,
    pub early_bird_price: Option<f64>,
    pub organization_budget: f64,
    pub expenses: f64,
    pub revenue: f64,

    // Registration
    #[schema(value_type = Option<String>, format = DateTime)]
    pub registration_open_date: Option<DateTimeUtc>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub registration_close_date: Option<DateTimeUtc>,
    pub registration_form_url: Option<String>,
    pub requires_approval: bool,

    // Media
    pub featured_image: Option<String>,
    #[sea_orm(column_type = "Text")]
    #[serde(serialize_with = "crate::utils::json_doc::serialize")]
    #[schema(value_type = Object)]
    pub gallery_images: String,
    pub video_url: Option<String>,
    pub livestream_url: Option<String>,

    // Organizer
    pub organizer_name: String,
    pub organizer_email: String,
    pub organizer_phone: String,

    #[sea_orm(column_type = "Text")]
    #[serde(serialize_with = "crate::utils::json_doc::serialize")]
    #[schema(value_type = Object)]
    pub speakers: String,
    #[sea_orm(column_type = "Text")]
    #[serde(serialize_with = "crate::utils::json_doc::serialize")]
    #[schema(value_type = Object)]
    pub sponsors: String,
    #[sea_orm(column_type = "Text")]
    #[serde(serialize_with = "crate::utils::json_doc::serialize")]
    #[schema(value_type = Object)]
    pub tags: String,

    pub is_featured: bool,
    pub is_public: bool,
    pub created_by: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeUtc,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
