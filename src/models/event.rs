use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "event_type is required"))]
    pub event_type: String,
    /// Defaults to `draft`.
    pub status: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    #[serde(default)]
    pub venue_name: String,
    #[serde(default)]
    pub venue_address: String,
    #[serde(default)]
    pub is_virtual: bool,
    pub virtual_link: Option<String>,
    /// Defaults to `UTC`.
    pub timezone: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub capacity: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub expected_guests: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub registered_count: i32,
    #[validate(range(min = 0))]
    pub actual_guests: Option<i32>,
    #[serde(default)]
    pub waitlist_enabled: bool,
    #[serde(default)]
    pub allow_walkins: bool,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub ticket_price: f64,
    #[validate(range(min = 0.0))]
    pub early_bird_price: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub organization_budget: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub expenses: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub revenue: f64,

    pub registration_open_date: Option<DateTime<Utc>>,
    pub registration_close_date: Option<DateTime<Utc>>,
    pub registration_form_url: Option<String>,
    #[serde(default)]
    pub requires_approval: bool,

    pub featured_image: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub gallery_images: Option<Value>,
    pub video_url: Option<String>,
    pub livestream_url: Option<String>,

    #[validate(length(min = 1, message = "organizer_name is required"))]
    pub organizer_name: String,
    #[validate(email(message = "organizer_email must be a valid email"))]
    pub organizer_email: String,
    #[serde(default)]
    pub organizer_phone: String,

    #[schema(value_type = Option<Object>)]
    pub speakers: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub sponsors: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub tags: Option<Value>,

    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_public: bool,
    pub created_by: Option<String>,
}

/// Every column is optional; omitted (or empty-string) fields keep their value.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,

    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub is_virtual: Option<bool>,
    pub virtual_link: Option<String>,
    pub timezone: Option<String>,

    #[validate(range(min = 0))]
    pub capacity: Option<i32>,
    #[validate(range(min = 0))]
    pub expected_guests: Option<i32>,
    #[validate(range(min = 0))]
    pub registered_count: Option<i32>,
    #[validate(range(min = 0))]
    pub actual_guests: Option<i32>,
    pub waitlist_enabled: Option<bool>,
    pub allow_walkins: Option<bool>,

    #[validate(range(min = 0.0))]
    pub ticket_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub early_bird_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub organization_budget: Option<f64>,
    #[validate(range(min = 0.0))]
    pub expenses: Option<f64>,
    #[validate(range(min = 0.0))]
    pub revenue: Option<f64>,

    pub registration_open_date: Option<DateTime<Utc>>,
    pub registration_close_date: Option<DateTime<Utc>>,
    pub registration_form_url: Option<String>,
    pub requires_approval: Option<bool>,

    pub featured_image: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub gallery_images: Option<Value>,
    pub video_url: Option<String>,
    pub livestream_url: Option<String>,

    pub organizer_name: Option<String>,
    pub organizer_email: Option<String>,
    pub organizer_phone: Option<String>,

    #[schema(value_type = Option<Object>)]
    pub speakers: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub sponsors: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub tags: Option<Value>,

    pub is_featured: Option<bool>,
    pub is_public: Option<bool>,
}
