pub mod blogs;
pub mod books;
pub mod comments;
pub mod events;
pub mod forms;
pub mod health;
