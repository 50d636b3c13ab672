use async_trait::async_trait;
use chrono::Utc;
use rand::RngCore;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use thiserror::Error;

use crate::api::error::AppError;
use crate::entities::{api_keys, prelude::*};
use crate::utils::hash::hash_api_key;

/// Where API key hashes are looked up.
#[async_trait]
pub trait ApiKeyLookup: Send + Sync {
    async fn find_by_hash(&self, key_hash: &str) -> Result<Option<api_keys::Model>, DbErr>;
}

#[async_trait]
impl ApiKeyLookup for DatabaseConnection {
    async fn find_by_hash(&self, key_hash: &str) -> Result<Option<api_keys::Model>, DbErr> {
        ApiKeys::find()
            .filter(api_keys::Column::KeyHash.eq(key_hash))
            .one(self)
            .await
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authorization header required")]
    MissingHeader,
    #[error("API key required")]
    EmptyKey,
    #[error("Invalid API key")]
    InvalidKey,
    /// The key store could not be queried; not the caller's fault.
    #[error("Unable to validate API key")]
    Unavailable,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unavailable => AppError::ServiceUnavailable(err.to_string()),
            _ => AppError::Unauthorized(err.to_string()),
        }
    }
}

/// Accepts `Bearer <key>` as well as a bare key.
pub fn bearer_key(header: &str) -> &str {
    header.strip_prefix("Bearer ").unwrap_or(header)
}

/// Resolves the `Authorization` header value to a stored key. At most one
/// lookup is made, and none when the header carries no key.
pub async fn authenticate<L>(lookup: &L, header: Option<&str>) -> Result<api_keys::Model, AuthError>
where
    L: ApiKeyLookup + ?Sized,
{
    let header = header
        .filter(|h| !h.is_empty())
        .ok_or(AuthError::MissingHeader)?;

    let key = bearer_key(header);
    if key.is_empty() {
        return Err(AuthError::EmptyKey);
    }

    match lookup.find_by_hash(&hash_api_key(key)).await {
        Ok(Some(api_key)) => Ok(api_key),
        Ok(None) => Err(AuthError::InvalidKey),
        Err(e) => {
            tracing::error!("API key lookup failed: {}", e);
            Err(AuthError::Unavailable)
        }
    }
}

/// 32 random bytes, hex encoded.
pub fn generate_api_key() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Stores the hash of a fresh key and returns the row with the raw key. The
/// raw key cannot be recovered afterwards.
pub async fn create_api_key(
    db: &DatabaseConnection,
    name: Option<String>,
) -> Result<(api_keys::Model, String), DbErr> {
    let raw_key = generate_api_key();
    let model = api_keys::ActiveModel {
        key_hash: Set(hash_api_key(&raw_key)),
        name: Set(name),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok((model, raw_key))
}
