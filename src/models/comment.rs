use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

pub const COMMENT_STATUSES: [&str; 4] = ["pending", "approved", "rejected", "spam"];

/// Public submission. Any `status` sent by the client is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    pub blog_id: i32,
    pub blog_slug: Option<String>,
    #[validate(length(min = 1, message = "author_name is required"))]
    pub author_name: String,
    #[validate(email(message = "author_email must be a valid email"))]
    pub author_email: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    pub parent_id: Option<i32>,
}

/// Moderation edit. Empty strings are treated as absent.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentRequest {
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CommentFilter {
    /// pending, approved, rejected or spam
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentCreatedResponse {
    pub id: i32,
    pub message: String,
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status.is_empty() || COMMENT_STATUSES.contains(&status) {
        return Ok(());
    }
    Err(ValidationError::new("status")
        .with_message("status must be one of pending, approved, rejected, spam".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_validation() {
        let ok = UpdateCommentRequest {
            status: Some("approved".into()),
            content: None,
        };
        assert!(ok.validate().is_ok());

        let empty = UpdateCommentRequest {
            status: Some(String::new()),
            content: None,
        };
        assert!(empty.validate().is_ok());

        let bad = UpdateCommentRequest {
            status: Some("published".into()),
            content: None,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_create_requires_valid_email() {
        let req = CreateCommentRequest {
            blog_id: 1,
            blog_slug: None,
            author_name: "Ana".into(),
            author_email: "not-an-email".into(),
            content: "Lovely".into(),
            parent_id: None,
        };
        assert!(req.validate().is_err());
    }
}
