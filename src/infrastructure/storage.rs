use crate::config::S3Config;
use crate::services::storage::{S3StorageService, StorageService};
use aws_sdk_s3::config::Region;
use std::sync::Arc;
use tracing::info;

/// Builds the S3 client from the ambient AWS credential chain. With a custom
/// endpoint (MinIO, localstack) path-style addressing is used.
pub async fn setup_storage(config: &S3Config) -> Arc<dyn StorageService> {
    info!(
        "☁️  S3 Storage: {} (Bucket: {})",
        config.endpoint.as_deref().unwrap_or("aws"),
        config.bucket
    );

    let mut loader = aws_config::from_env().region(Region::new(config.region.clone()));
    if let Some(endpoint) = &config.endpoint {
        loader = loader.endpoint_url(endpoint);
    }
    let aws_config = loader.load().await;

    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .force_path_style(config.endpoint.is_some())
        .build();

    let s3_client = aws_sdk_s3::Client::from_conf(s3_config);
    Arc::new(S3StorageService::new(
        s3_client,
        config.bucket.clone(),
        config.public_base_url(),
    ))
}
