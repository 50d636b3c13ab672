use std::env;

/// Runtime configuration read from the environment (and `.env` via dotenvy).
/// `DATABASE_URL` is read directly by the database setup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Pool size (default: 20)
    pub db_max_connections: u32,

    /// CORS origins; `*` allows any (default: local dev servers)
    pub allowed_origins: Vec<String>,

    /// Body limit on the image upload route (default: 16 MB). Must stay above
    /// the 5 MB image limit.
    pub max_request_body: usize,

    /// Object storage; image endpoints answer 503 when absent
    pub s3: Option<S3Config>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    pub endpoint: Option<String>,
    pub public_base_url: Option<String>,
}

impl S3Config {
    /// Prefix for public object URLs: an explicit override, the custom
    /// endpoint in path style, or the regional AWS virtual-hosted address.
    pub fn public_base_url(&self) -> String {
        if let Some(base) = &self.public_base_url {
            return base.trim_end_matches('/').to_string();
        }
        match &self.endpoint {
            Some(endpoint) => format!("{}/{}", endpoint.trim_end_matches('/'), self.bucket),
            None => format!("https://{}.s3.{}.amazonaws.com", self.bucket, self.region),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_max_connections: 20,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
            ],
            max_request_body: 16 * 1024 * 1024, // 16 MB
            s3: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        let s3 = var("S3_BUCKET_NAME")
            .filter(|bucket| !bucket.is_empty())
            .map(|bucket| S3Config {
                bucket,
                region: var("AWS_REGION")
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| "us-east-1".to_string()),
                endpoint: var("S3_ENDPOINT").filter(|v| !v.is_empty()),
                public_base_url: var("S3_PUBLIC_BASE_URL").filter(|v| !v.is_empty()),
            });

        Self {
            db_max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.db_max_connections),

            allowed_origins: var("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or(default.allowed_origins),

            max_request_body: var("MAX_REQUEST_BODY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_request_body),

            s3,
        }
    }
}
