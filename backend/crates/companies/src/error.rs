//! Company Error Types
//!
//! Validation error kinds for the Company entity, and the ordered
//! collection returned when one or more of them are triggered. Both
//! integrate with the unified `kernel::error::AppError` system.

use std::fmt;

use kernel::error::{
    aggregate::{MergedError, as_strings, merge_present},
    app_error::AppError,
    kind::ErrorKind,
};
use serde::Serialize;
use thiserror::Error;

/// Company validation error kinds
///
/// All kinds are business-rule violations: recoverable, caller-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanyError {
    /// Name is blank
    #[error("Empty company name")]
    EmptyName,

    /// Zip is blank
    #[error("Empty company zip code")]
    EmptyZip,

    /// Zip does not carry five digits
    #[error("Company zip code must have exactly 5 (five) digits")]
    InvalidZip,

    /// Website is not a request URI
    #[error("Invalid website")]
    InvalidWebsite,
}

impl CompanyError {
    /// Stable machine-readable code
    pub const fn code(&self) -> &'static str {
        match self {
            CompanyError::EmptyName => "EMPTY_NAME",
            CompanyError::EmptyZip => "EMPTY_ZIP",
            CompanyError::InvalidZip => "INVALID_ZIP",
            CompanyError::InvalidWebsite => "INVALID_WEBSITE",
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::UnprocessableEntity
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

/// Ordered, non-empty list of validation failures
///
/// Produced by [`Company::validate`](crate::Company::validate). `Display`
/// renders the merged message, e.g.
/// `"Empty company name. Invalid website"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<CompanyError>);

impl ValidationErrors {
    /// Wrap collected errors; `None` when nothing failed
    pub fn from_vec(errors: Vec<CompanyError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn as_slice(&self) -> &[CompanyError] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<CompanyError> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for the `len`/`is_empty` pair
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, error: CompanyError) -> bool {
        self.0.contains(&error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompanyError> {
        self.0.iter()
    }

    /// One display message per failure, in order
    pub fn messages(&self) -> Vec<String> {
        as_strings(Some(self.as_slice())).unwrap_or_default()
    }

    /// All failures folded into one error
    pub fn merged(&self) -> MergedError {
        merge_present(self.as_slice()).unwrap_or_default()
    }

    /// Convert to a 422 AppError carrying the individual messages as details
    pub fn to_app_error(&self) -> AppError {
        AppError::from(self.merged()).with_details(self.messages())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.merged().message())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a CompanyError;
    type IntoIter = std::slice::Iter<'a, CompanyError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        errors.to_app_error()
    }
}
