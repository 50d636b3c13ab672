use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::api::error::AppError;
use crate::entities::{blog_images, blogs, comments, prelude::*};
use crate::models::blog::{CreateBlogRequest, UpdateBlogRequest};
use crate::utils::json_doc::{self, Fallback};
use crate::utils::partial_update::PartialUpdate;

pub struct BlogService {
    db: DatabaseConnection,
}

impl BlogService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<blogs::Model>, AppError> {
        Ok(Blogs::find()
            .order_by_desc(blogs::Column::CreatedAt)
            .order_by_desc(blogs::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<blogs::Model, AppError> {
        Blogs::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))
    }

    pub async fn create(&self, req: CreateBlogRequest) -> Result<i32, AppError> {
        let now = Utc::now();
        let blog = blogs::ActiveModel {
            title: Set(req.title),
            content: Set(json_doc::encode(Some(&req.content), Fallback::Object)),
            author: Set(req.author.filter(|a| !a.is_empty())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(blog.id)
    }

    pub async fn update(&self, id: i32, req: UpdateBlogRequest) -> Result<(), AppError> {
        if Blogs::find_by_id(id).count(&self.db).await? == 0 {
            return Err(AppError::NotFound("Blog not found".to_string()));
        }

        let stmt = PartialUpdate::<Blogs>::new(self.db.get_database_backend())
            .set_text(blogs::Column::Title, req.title)
            .set_json(blogs::Column::Content, req.content, Fallback::Object)
            .set_text(blogs::Column::Author, req.author)
            .build(id);
        self.db.execute(stmt).await?;
        Ok(())
    }

    /// Removes the post with its comments and image rows. Stored objects are
    /// left in the bucket.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        Comments::delete_many()
            .filter(comments::Column::BlogId.eq(id))
            .exec(&txn)
            .await?;
        BlogImages::delete_many()
            .filter(blog_images::Column::BlogId.eq(id))
            .exec(&txn)
            .await?;

        let result = Blogs::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(AppError::NotFound("Blog not found".to_string()));
        }

        txn.commit().await?;
        Ok(())
    }
}
