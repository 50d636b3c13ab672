use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::error::AppError;
use crate::entities::{blog_images, prelude::*};
use crate::services::storage::StorageService;
use crate::utils::imaging::{self, ImageKind, MAX_IMAGE_SIZE};

/// Lifetime of signed image URLs.
pub const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

/// Result of deleting an object after its database row failed to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    Removed,
    Failed(String),
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Blog not found")]
    BlogNotFound,

    #[error("Invalid file type: {0}. Allowed: jpg, jpeg, png, gif")]
    UnsupportedType(String),

    #[error("File too large: {0} bytes. Maximum 5MB allowed")]
    TooLarge(usize),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Failed to upload image: {0}")]
    Storage(anyhow::Error),

    #[error("Failed to store image reference in database")]
    Record {
        source: DbErr,
        cleanup: CleanupOutcome,
    },
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::BlogNotFound => AppError::NotFound(err.to_string()),
            UploadError::UnsupportedType(_) => AppError::UnsupportedMediaType(err.to_string()),
            UploadError::TooLarge(_) => AppError::PayloadTooLarge(err.to_string()),
            UploadError::Database(e) => AppError::Database(e),
            UploadError::Storage(e) => AppError::Anyhow(e.context("Failed to upload image")),
            UploadError::Record { source, cleanup } => {
                AppError::ImageRecordFailed { source, cleanup }
            }
        }
    }
}

pub struct ImageUpload {
    pub filename: String,
    pub data: Vec<u8>,
    pub alt_text: Option<String>,
}

/// `blogs/<uuid>_<name>`, keeping only the final path segment of the name.
pub fn storage_key(filename: &str) -> String {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    format!("blogs/{}_{}", Uuid::new_v4(), name.replace(' ', "_"))
}

pub struct BlogImageService {
    db: DatabaseConnection,
    storage: Arc<dyn StorageService>,
}

impl BlogImageService {
    pub fn new(db: DatabaseConnection, storage: Arc<dyn StorageService>) -> Self {
        Self { db, storage }
    }

    /// Validates, optimizes and stores an image, then records it against the
    /// blog. If the record cannot be written the stored object is removed
    /// again and the outcome of that removal is reported.
    pub async fn upload(
        &self,
        blog_id: i32,
        upload: ImageUpload,
    ) -> Result<blog_images::Model, UploadError> {
        if Blogs::find_by_id(blog_id).count(&self.db).await? == 0 {
            return Err(UploadError::BlogNotFound);
        }

        let kind = ImageKind::from_filename(&upload.filename).ok_or_else(|| {
            let ext = imaging::extension(&upload.filename);
            UploadError::UnsupportedType(if ext.is_empty() { "none".to_string() } else { ext })
        })?;

        if upload.data.len() > MAX_IMAGE_SIZE {
            return Err(UploadError::TooLarge(upload.data.len()));
        }

        let key = storage_key(&upload.filename);
        let body = optimize_or_original(kind, upload.data).await;

        self.storage
            .upload_file(&key, body, kind.content_type())
            .await
            .map_err(UploadError::Storage)?;
        let url = self.storage.public_url(&key);

        let record = blog_images::ActiveModel {
            blog_id: Set(blog_id),
            image_key: Set(key.clone()),
            image_url: Set(url),
            alt_text: Set(upload.alt_text.filter(|t| !t.is_empty())),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;

        match record {
            Ok(image) => {
                info!("📤 Stored image {} for blog {}", key, blog_id);
                Ok(image)
            }
            Err(source) => {
                let cleanup = match self.storage.delete_file(&key).await {
                    Ok(()) => CleanupOutcome::Removed,
                    Err(e) => {
                        tracing::error!("Failed to clean up orphaned image {}: {:?}", key, e);
                        CleanupOutcome::Failed(e.to_string())
                    }
                };
                Err(UploadError::Record { source, cleanup })
            }
        }
    }

    pub async fn list(&self, blog_id: i32) -> Result<Vec<blog_images::Model>, AppError> {
        if Blogs::find_by_id(blog_id).count(&self.db).await? == 0 {
            return Err(AppError::NotFound("Blog not found".to_string()));
        }

        Ok(BlogImages::find()
            .filter(blog_images::Column::BlogId.eq(blog_id))
            .order_by_asc(blog_images::Column::CreatedAt)
            .order_by_asc(blog_images::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn signed_url(&self, blog_id: i32, image_id: i32) -> Result<String, AppError> {
        let image = self.find(blog_id, image_id).await?;
        Ok(self
            .storage
            .presigned_url(&image.image_key, SIGNED_URL_TTL)
            .await?)
    }

    /// Deletes the row first. A failed object delete only leaves an orphan
    /// in the bucket, so it is logged rather than returned.
    pub async fn delete(&self, blog_id: i32, image_id: i32) -> Result<(), AppError> {
        let image = self.find(blog_id, image_id).await?;
        let key = image.image_key.clone();
        image.delete(&self.db).await?;

        if let Err(e) = self.storage.delete_file(&key).await {
            warn!("Image row removed but object {} was not: {:?}", key, e);
        }
        Ok(())
    }

    async fn find(&self, blog_id: i32, image_id: i32) -> Result<blog_images::Model, AppError> {
        BlogImages::find_by_id(image_id)
            .filter(blog_images::Column::BlogId.eq(blog_id))
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Image not found".to_string()))
    }
}

/// Re-encoding runs on the blocking pool. Any failure keeps the upload as sent.
async fn optimize_or_original(kind: ImageKind, original: Vec<u8>) -> Vec<u8> {
    let input = original.clone();
    match tokio::task::spawn_blocking(move || imaging::optimize(kind, &input)).await {
        Ok(Ok(optimized)) => optimized,
        Ok(Err(e)) => {
            warn!("Image optimization failed, uploading original: {}", e);
            original
        }
        Err(e) => {
            warn!("Image optimization task failed, uploading original: {}", e);
            original
        }
    }
}
