//! Domain Layer
//!
//! Contains the Company entity, its value objects and field validators.

pub mod entity;
pub mod request_uri;
pub mod validation;
pub mod value_object;

// Re-exports
pub use entity::company::Company;
