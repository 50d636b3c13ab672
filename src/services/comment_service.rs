use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::api::error::AppError;
use crate::entities::{comments, prelude::*};
use crate::models::comment::{CreateCommentRequest, UpdateCommentRequest};
use crate::utils::partial_update::PartialUpdate;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";

pub struct CommentService {
    db: DatabaseConnection,
}

impl CommentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// New comments always wait for moderation.
    pub async fn create(&self, req: CreateCommentRequest) -> Result<i32, AppError> {
        if Blogs::find_by_id(req.blog_id).count(&self.db).await? == 0 {
            return Err(AppError::NotFound("Blog not found".to_string()));
        }

        let now = Utc::now();
        let comment = comments::ActiveModel {
            blog_id: Set(req.blog_id),
            blog_slug: Set(req.blog_slug.filter(|s| !s.is_empty())),
            author_name: Set(req.author_name),
            author_email: Set(req.author_email),
            content: Set(req.content),
            status: Set(STATUS_PENDING.to_string()),
            parent_id: Set(req.parent_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(comment.id)
    }

    /// Approved comments for a blog, oldest first.
    pub async fn list_approved_for_blog(
        &self,
        blog_id: i32,
    ) -> Result<Vec<comments::Model>, AppError> {
        Ok(Comments::find()
            .filter(comments::Column::BlogId.eq(blog_id))
            .filter(comments::Column::Status.eq(STATUS_APPROVED))
            .order_by_asc(comments::Column::CreatedAt)
            .order_by_asc(comments::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn list_approved_for_slug(
        &self,
        slug: &str,
    ) -> Result<Vec<comments::Model>, AppError> {
        Ok(Comments::find()
            .filter(comments::Column::BlogSlug.eq(slug))
            .filter(comments::Column::Status.eq(STATUS_APPROVED))
            .order_by_asc(comments::Column::CreatedAt)
            .order_by_asc(comments::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Moderation queue, newest first. An empty status means every comment.
    pub async fn list(&self, status: Option<&str>) -> Result<Vec<comments::Model>, AppError> {
        let mut query = Comments::find();
        if let Some(status) = status.filter(|s| !s.is_empty()) {
            query = query.filter(comments::Column::Status.eq(status));
        }
        Ok(query
            .order_by_desc(comments::Column::CreatedAt)
            .order_by_desc(comments::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Only `status` and `content` are editable.
    pub async fn update(&self, id: i32, req: UpdateCommentRequest) -> Result<(), AppError> {
        if Comments::find_by_id(id).count(&self.db).await? == 0 {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        let stmt = PartialUpdate::<Comments>::new(self.db.get_database_backend())
            .set_text(comments::Column::Status, req.status)
            .set_text(comments::Column::Content, req.content)
            .build(id);
        self.db.execute(stmt).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = Comments::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }
        Ok(())
    }
}
