//! Validate Company Use Case
//!
//! Runs the Company business rules with the configured policy and turns
//! the outcome into a serializable report. This is the layer that logs;
//! the domain validators stay silent.

use serde::Serialize;

use crate::application::config::CompanyConfig;
use crate::domain::entity::company::Company;
use crate::domain::value_object::company_id::CompanyId;
use crate::error::{CompanyError, ValidationErrors};

/// Outcome of validating one company
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyReport {
    /// Identifier, if the company had one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CompanyId>,
    pub name: String,
    pub valid: bool,
    /// Error codes in check order
    pub errors: Vec<CompanyError>,
    /// Problem body (422) when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<serde_json::Value>,
}

impl CompanyReport {
    fn new(company: &Company, outcome: Result<(), ValidationErrors>) -> Self {
        let (errors, problem) = match outcome {
            Ok(()) => (Vec::new(), None),
            Err(errors) => {
                let problem = errors.to_app_error().to_problem();
                (errors.into_vec(), Some(problem))
            }
        };

        Self {
            id: company.id,
            name: company.name.clone(),
            valid: errors.is_empty(),
            errors,
            problem,
        }
    }
}

/// Company validation service
#[derive(Debug, Clone, Default)]
pub struct ValidateCompany {
    config: CompanyConfig,
}

impl ValidateCompany {
    pub fn new(config: CompanyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    /// Validate one company
    pub fn execute(&self, company: &Company) -> CompanyReport {
        let outcome = company.validate_with(self.config.zip_policy);

        match &outcome {
            Ok(()) => {
                tracing::debug!(
                    company_id = ?company.id,
                    zip_policy = %self.config.zip_policy,
                    "Company passed validation"
                );
            }
            Err(errors) if self.config.log_rejections => {
                tracing::warn!(
                    company_id = ?company.id,
                    error_count = errors.len(),
                    errors = %errors,
                    "Company rejected"
                );
            }
            Err(errors) => {
                tracing::debug!(
                    company_id = ?company.id,
                    error_count = errors.len(),
                    "Company rejected"
                );
            }
        }

        CompanyReport::new(company, outcome)
    }

    /// Validate a batch, keeping input order
    pub fn execute_all(&self, companies: &[Company]) -> Vec<CompanyReport> {
        let reports: Vec<CompanyReport> = companies.iter().map(|c| self.execute(c)).collect();
        let rejected = reports.iter().filter(|r| !r.valid).count();

        tracing::info!(
            total = reports.len(),
            rejected,
            "Company batch validated"
        );

        reports
    }
}
