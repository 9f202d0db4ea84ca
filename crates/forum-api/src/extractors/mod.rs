//! Axum extractors for request handling
//!
//! Custom extractors that turn rejections into the API error envelope.

mod path;
mod validated;

pub use path::{EntityPath, PostIdPath, PostUserPath};
pub use validated::ValidatedJson;
