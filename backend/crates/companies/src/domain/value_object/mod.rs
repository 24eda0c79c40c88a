//! Value Object Module

pub mod company_id;
pub mod zip_policy;
