//! Zip Policy Value Object
//!
//! How strictly a zip code is matched against "five digits".
//!
//! ## 設計方針
//! - `Contains` (default): the zip passes if five consecutive ASCII digits
//!   appear anywhere in it. `"12345"`, `"12345-6789"`, `"X12345X"` and
//!   `"1234567"` all pass.
//! - `Exact`: the trimmed zip must be exactly five ASCII digits.
//!
//! `Contains` is the long-standing behavior that stored data was validated
//! with; `Exact` is opt-in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of digits a zip code must carry
pub const ZIP_DIGITS: usize = 5;

/// Zip matching policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZipPolicy {
    /// Five consecutive digits anywhere in the value
    #[default]
    Contains,
    /// The whole trimmed value is exactly five digits
    Exact,
}

impl ZipPolicy {
    /// Check a non-blank zip against this policy
    pub fn matches(&self, zip: &str) -> bool {
        match self {
            ZipPolicy::Contains => Self::longest_digit_run(zip) >= ZIP_DIGITS,
            ZipPolicy::Exact => {
                let zip = zip.trim();
                zip.len() == ZIP_DIGITS && zip.bytes().all(|b| b.is_ascii_digit())
            }
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ZipPolicy::Contains => "contains",
            ZipPolicy::Exact => "exact",
        }
    }

    fn longest_digit_run(value: &str) -> usize {
        let mut longest = 0;
        let mut current = 0;
        for c in value.chars() {
            if c.is_ascii_digit() {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }
        longest
    }
}

/// Error returned when a policy name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown zip policy '{0}'. Expected 'contains' or 'exact'")]
pub struct UnknownZipPolicy(pub String);

impl FromStr for ZipPolicy {
    type Err = UnknownZipPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contains" => Ok(ZipPolicy::Contains),
            "exact" => Ok(ZipPolicy::Exact),
            _ => Err(UnknownZipPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for ZipPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
