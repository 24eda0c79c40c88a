//! Companies Module
//!
//! Clean Architecture structure:
//! - `domain/` - Company entity, value objects, field validators
//! - `application/` - Validation use case and configuration
//! - `error` - Validation error kinds and their aggregate
//!
//! ## Validation rules
//! - Name: required, not blank
//! - Zip: required, must contain five consecutive digits
//! - Website: optional, must be a request URI when given
//!
//! All rules run on every call; failures are reported together, in
//! name → zip → website order.

pub mod application;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::config::{CompanyConfig, ConfigError};
pub use application::validate_company::{CompanyReport, ValidateCompany};
pub use domain::entity::company::Company;
pub use domain::value_object::{company_id::CompanyId, zip_policy::ZipPolicy};
pub use error::{CompanyError, ValidationErrors};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
