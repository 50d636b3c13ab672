pub mod prelude;

pub mod api_keys;
pub mod blog_images;
pub mod blogs;
pub mod books;
pub mod comments;
pub mod events;
pub mod forms;
