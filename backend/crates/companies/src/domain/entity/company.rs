//! Company Entity
//!
//! A business entity as received from callers: nothing is validated on
//! construction. Call [`Company::validate`] to check the business rules.

use kernel::error::aggregate::append_error;
use serde::{Deserialize, Serialize};

use crate::domain::validation::{validate_name, validate_website, validate_zip};
use crate::domain::value_object::{company_id::CompanyId, zip_policy::ZipPolicy};
use crate::error::{CompanyError, ValidationErrors};

/// Company entity
///
/// `PartialEq` is structural. For identity comparison (same stored record)
/// use [`Company::same_identity`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Identifier, absent until the company is stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CompanyId>,
    /// Company name (required)
    #[serde(default)]
    pub name: String,
    /// Zip code (required, five digits)
    #[serde(default)]
    pub zip: String,
    /// Website (optional request URI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Company {
    /// The empty company
    pub const NIL: Company = Company {
        id: None,
        name: String::new(),
        zip: String::new(),
        website: None,
    };

    /// Create a company without identifier or website
    pub fn new(name: impl Into<String>, zip: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            zip: zip.into(),
            website: None,
        }
    }

    pub fn with_id(mut self, id: CompanyId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Validate business constraints with the default zip policy
    ///
    /// See [`Company::validate_with`].
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_with(ZipPolicy::default())
    }

    /// Validate business constraints
    ///
    /// Name, zip and website are always all checked; the failures come
    /// back in that order.
    pub fn validate_with(&self, zip_policy: ZipPolicy) -> Result<(), ValidationErrors> {
        match ValidationErrors::from_vec(self.violations(zip_policy)) {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }

    fn violations(&self, zip_policy: ZipPolicy) -> Vec<CompanyError> {
        let errors = Some(Vec::with_capacity(3));
        let errors = append_error(errors, validate_name(&self.name).err());
        let errors = append_error(errors, validate_zip(&self.zip, zip_policy).err());
        let errors = append_error(errors, validate_website(self.website.as_deref()).err());
        errors.unwrap_or_default()
    }

    /// Check if the company has a non-nil identifier
    pub fn has_id(&self) -> bool {
        self.id.is_some_and(|id| !id.is_nil())
    }

    /// Check if every field is at its zero value
    ///
    /// A present-but-empty website (`Some("")`) is not empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_empty() && self.zip.is_empty() && self.website.is_none()
    }

    /// Check if both companies carry the same identifier
    ///
    /// Companies without identifier are never the same, not even with
    /// themselves.
    pub fn same_identity(&self, other: &Company) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
