use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, Set,
};

use crate::api::error::AppError;
use crate::entities::{forms, prelude::*};
use crate::models::form::{CreateFormRequest, UpdateFormRequest};
use crate::utils::json_doc::{self, Fallback};
use crate::utils::partial_update::PartialUpdate;

pub struct FormService {
    db: DatabaseConnection,
}

impl FormService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<forms::Model>, AppError> {
        Ok(Forms::find()
            .order_by_desc(forms::Column::CreatedAt)
            .order_by_desc(forms::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<forms::Model, AppError> {
        Forms::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Form not found".to_string()))
    }

    pub async fn create(&self, req: CreateFormRequest) -> Result<i32, AppError> {
        let now = Utc::now();
        let form = forms::ActiveModel {
            title: Set(req.title),
            data: Set(json_doc::encode(Some(&req.data), Fallback::Object)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(form.id)
    }

    pub async fn update(&self, id: i32, req: UpdateFormRequest) -> Result<(), AppError> {
        if Forms::find_by_id(id).count(&self.db).await? == 0 {
            return Err(AppError::NotFound("Form not found".to_string()));
        }

        let stmt = PartialUpdate::<Forms>::new(self.db.get_database_backend())
            .set_text(forms::Column::Title, req.title)
            .set_json(forms::Column::Data, req.data, Fallback::Object)
            .build(id);
        self.db.execute(stmt).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = Forms::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Form not found".to_string()));
        }
        Ok(())
    }
}
