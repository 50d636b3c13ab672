pub mod hash;
pub mod imaging;
pub mod json_doc;
pub mod partial_update;
