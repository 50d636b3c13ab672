pub mod api_keys;
pub mod blog_service;
pub mod book_service;
pub mod comment_service;
pub mod event_service;
pub mod form_service;
pub mod image_upload;
pub mod storage;
