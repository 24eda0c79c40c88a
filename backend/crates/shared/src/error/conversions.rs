//! Error conversions
//!
//! `From` implementations into [`AppError`] and its JSON problem body.

use super::aggregate::MergedError;
use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::InvalidData | std::io::ErrorKind::UnexpectedEof => {
                ErrorKind::BadRequest
            }
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// Aggregated validation failures
// ============================================================================

impl From<MergedError> for AppError {
    fn from(err: MergedError) -> Self {
        AppError::unprocessable(err.into_message())
    }
}

// ============================================================================
// Problem body
// ============================================================================

impl AppError {
    /// RFC 7807 風の JSON 表現
    pub fn to_problem(&self) -> serde_json::Value {
        serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "code": self.kind().code(),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "errors": self.details(),
        })
    }
}
