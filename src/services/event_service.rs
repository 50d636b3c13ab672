use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, Set,
};

use crate::api::error::AppError;
use crate::entities::{events, prelude::*};
use crate::models::event::{CreateEventRequest, UpdateEventRequest};
use crate::utils::json_doc::{self, Fallback};
use crate::utils::partial_update::PartialUpdate;

pub const DEFAULT_EVENT_STATUS: &str = "draft";
pub const DEFAULT_TIMEZONE: &str = "UTC";

pub struct EventService {
    db: DatabaseConnection,
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl EventService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Latest start date first.
    pub async fn list(&self) -> Result<Vec<events::Model>, AppError> {
        Ok(Events::find()
            .order_by_desc(events::Column::StartDate)
            .order_by_desc(events::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<events::Model, AppError> {
        Events::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    pub async fn create(&self, req: CreateEventRequest) -> Result<i32, AppError> {
        let now = Utc::now();
        let event = events::ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            event_type: Set(req.event_type),
            status: Set(or_default(req.status, DEFAULT_EVENT_STATUS)),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            venue_name: Set(req.venue_name),
            venue_address: Set(req.venue_address),
            is_virtual: Set(req.is_virtual),
            virtual_link: Set(req.virtual_link),
            timezone: Set(or_default(req.timezone, DEFAULT_TIMEZONE)),
            capacity: Set(req.capacity),
            expected_guests: Set(req.expected_guests),
            registered_count: Set(req.registered_count),
            actual_guests: Set(req.actual_guests),
            waitlist_enabled: Set(req.waitlist_enabled),
            allow_walkins: Set(req.allow_walkins),
            ticket_price: Set(req.ticket_price),
            early_bird_price: Set(req.early_bird_price),
            organization_budget: Set(req.organization_budget),
            expenses: Set(req.expenses),
            revenue: Set(req.revenue),
            registration_open_date: Set(req.registration_open_date),
            registration_close_date: Set(req.registration_close_date),
            registration_form_url: Set(req.registration_form_url),
            requires_approval: Set(req.requires_approval),
            featured_image: Set(req.featured_image),
            gallery_images: Set(json_doc::encode(req.gallery_images.as_ref(), Fallback::Array)),
            video_url: Set(req.video_url),
            livestream_url: Set(req.livestream_url),
            organizer_name: Set(req.organizer_name),
            organizer_email: Set(req.organizer_email),
            organizer_phone: Set(req.organizer_phone),
            speakers: Set(json_doc::encode(req.speakers.as_ref(), Fallback::Array)),
            sponsors: Set(json_doc::encode(req.sponsors.as_ref(), Fallback::Array)),
            tags: Set(json_doc::encode(req.tags.as_ref(), Fallback::Array)),
            is_featured: Set(req.is_featured),
            is_public: Set(req.is_public),
            created_by: Set(req.created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(event.id)
    }

    pub async fn update(&self, id: i32, req: UpdateEventRequest) -> Result<(), AppError> {
        if Events::find_by_id(id).count(&self.db).await? == 0 {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        use events::Column as C;
        let stmt = PartialUpdate::<Events>::new(self.db.get_database_backend())
            .set_text(C::Title, req.title)
            .set_text(C::Description, req.description)
            .set_text(C::EventType, req.event_type)
            .set_text(C::Status, req.status)
            .set(C::StartDate, req.start_date)
            .set(C::EndDate, req.end_date)
            .set_text(C::VenueName, req.venue_name)
            .set_text(C::VenueAddress, req.venue_address)
            .set(C::IsVirtual, req.is_virtual)
            .set_text(C::VirtualLink, req.virtual_link)
            .set_text(C::Timezone, req.timezone)
            .set(C::Capacity, req.capacity)
            .set(C::ExpectedGuests, req.expected_guests)
            .set(C::RegisteredCount, req.registered_count)
            .set(C::ActualGuests, req.actual_guests)
            .set(C::WaitlistEnabled, req.waitlist_enabled)
            .set(C::AllowWalkins, req.allow_walkins)
            .set(C::TicketPrice, req.ticket_price)
            .set(C::EarlyBirdPrice, req.early_bird_price)
            .set(C::OrganizationBudget, req.organization_budget)
            .set(C::Expenses, req.expenses)
            .set(C::Revenue, req.revenue)
            .set(C::RegistrationOpenDate, req.registration_open_date)
            .set(C::RegistrationCloseDate, req.registration_close_date)
            .set_text(C::RegistrationFormUrl, req.registration_form_url)
            .set(C::RequiresApproval, req.requires_approval)
            .set_text(C::FeaturedImage, req.featured_image)
            .set_json(C::GalleryImages, req.gallery_images, Fallback::Array)
            .set_text(C::VideoUrl, req.video_url)
            .set_text(C::LivestreamUrl, req.livestream_url)
            .set_text(C::OrganizerName, req.organizer_name)
            .set_text(C::OrganizerEmail, req.organizer_email)
            .set_text(C::OrganizerPhone, req.organizer_phone)
            .set_json(C::Speakers, req.speakers, Fallback::Array)
            .set_json(C::Sponsors, req.sponsors, Fallback::Array)
            .set_json(C::Tags, req.tags, Fallback::Array)
            .set(C::IsFeatured, req.is_featured)
            .set(C::IsPublic, req.is_public)
            .build(id);
        self.db.execute(stmt).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = Events::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Event not found".to_string()));
        }
        Ok(())
    }
}
