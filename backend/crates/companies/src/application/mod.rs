//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod validate_company;
