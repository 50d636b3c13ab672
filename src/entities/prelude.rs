pub use super::api_keys::Entity as ApiKeys;
pub use super::blog_images::Entity as BlogImages;
pub use super::blogs::Entity as Blogs;
pub use super::books::Entity as Books;
pub use super::comments::Entity as Comments;
pub use super::events::Entity as Events;
pub use super::forms::Entity as Forms;
