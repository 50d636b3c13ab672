use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, Set,
};

use crate::api::error::AppError;
use crate::entities::{books, prelude::*};
use crate::models::book::{CreateBookRequest, UpdateBookRequest};
use crate::utils::json_doc::{self, Fallback};
use crate::utils::partial_update::PartialUpdate;

pub const DEFAULT_BOOK_STATUS: &str = "available";
pub const DEFAULT_LANGUAGE: &str = "English";

pub struct BookService {
    db: DatabaseConnection,
}

impl BookService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<books::Model>, AppError> {
        Ok(Books::find()
            .order_by_desc(books::Column::CreatedAt)
            .order_by_desc(books::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<books::Model, AppError> {
        Books::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Sales and rating counters start at zero; `sale_price` is taken as given.
    pub async fn create(&self, req: CreateBookRequest) -> Result<i32, AppError> {
        let now = Utc::now();
        let book = books::ActiveModel {
            title: Set(req.title),
            subtitle: Set(req.subtitle),
            author: Set(req.author),
            isbn: Set(req.isbn),
            description: Set(req.description),
            publisher: Set(req.publisher),
            publication_date: Set(req.publication_date),
            pages: Set(req.pages),
            language: Set(req
                .language
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())),
            category: Set(req.category),
            price: Set(req.price),
            sale_price: Set(req.sale_price),
            stock_quantity: Set(req.stock_quantity),
            status: Set(req
                .status
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_BOOK_STATUS.to_string())),
            cover_image: Set(req.cover_image),
            gallery_images: Set(json_doc::encode(req.gallery_images.as_ref(), Fallback::Array)),
            preview_url: Set(req.preview_url),
            purchase_links: Set(json_doc::encode(req.purchase_links.as_ref(), Fallback::Object)),
            tags: Set(json_doc::encode(req.tags.as_ref(), Fallback::Array)),
            is_featured: Set(req.is_featured),
            is_published: Set(req.is_published),
            total_sales: Set(0),
            average_rating: Set(0.0),
            review_count: Set(0),
            created_by: Set(req.created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(book.id)
    }

    pub async fn update(&self, id: i32, req: UpdateBookRequest) -> Result<(), AppError> {
        if Books::find_by_id(id).count(&self.db).await? == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        use books::Column as C;
        let stmt = PartialUpdate::<Books>::new(self.db.get_database_backend())
            .set_text(C::Title, req.title)
            .set_text(C::Subtitle, req.subtitle)
            .set_text(C::Author, req.author)
            .set_text(C::Isbn, req.isbn)
            .set_text(C::Description, req.description)
            .set_text(C::Publisher, req.publisher)
            .set(C::PublicationDate, req.publication_date)
            .set(C::Pages, req.pages)
            .set_text(C::Language, req.language)
            .set_text(C::Category, req.category)
            .set(C::Price, req.price)
            .set(C::SalePrice, req.sale_price)
            .set(C::StockQuantity, req.stock_quantity)
            .set_text(C::Status, req.status)
            .set_text(C::CoverImage, req.cover_image)
            .set_json(C::GalleryImages, req.gallery_images, Fallback::Array)
            .set_text(C::PreviewUrl, req.preview_url)
            .set_json(C::PurchaseLinks, req.purchase_links, Fallback::Object)
            .set_json(C::Tags, req.tags, Fallback::Array)
            .set(C::IsFeatured, req.is_featured)
            .set(C::IsPublished, req.is_published)
            .set(C::TotalSales, req.total_sales)
            .set(C::AverageRating, req.average_rating)
            .set(C::ReviewCount, req.review_count)
            .build(id);
        self.db.execute(stmt).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = Books::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        Ok(())
    }
}
