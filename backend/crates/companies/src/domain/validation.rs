//! Field validators
//!
//! Pure checks for the individual Company fields. Each returns the error
//! kind it detected; nothing here logs or short-circuits the others.

use crate::domain::request_uri::is_request_uri;
use crate::domain::value_object::zip_policy::ZipPolicy;
use crate::error::CompanyError;

/// Blank means empty after trimming Unicode whitespace
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn validate_name(name: &str) -> Result<(), CompanyError> {
    if is_blank(name) {
        return Err(CompanyError::EmptyName);
    }
    Ok(())
}

pub fn validate_zip(zip: &str, policy: ZipPolicy) -> Result<(), CompanyError> {
    if is_blank(zip) {
        return Err(CompanyError::EmptyZip);
    }
    if !policy.matches(zip) {
        return Err(CompanyError::InvalidZip);
    }
    Ok(())
}

/// Absent and blank websites are accepted
pub fn validate_website(website: Option<&str>) -> Result<(), CompanyError> {
    match website {
        Some(website) if !is_blank(website) => {
            if is_request_uri(website) {
                Ok(())
            } else {
                Err(CompanyError::InvalidWebsite)
            }
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod blank {
        use super::*;

        #[test]
        fn test_is_blank() {
            assert!(is_blank(""));
            assert!(is_blank("   "));
            assert!(is_blank("\t\n"));
            assert!(is_blank("\u{3000}")); // ideographic space
            assert!(!is_blank(" a "));
        }
    }

    mod name {
        use super::*;

        #[test]
        fn test_blank_name() {
            assert_eq!(validate_name(""), Err(CompanyError::EmptyName));
            assert_eq!(validate_name("  \t "), Err(CompanyError::EmptyName));
        }

        #[test]
        fn test_present_name() {
            assert_eq!(validate_name("Acme"), Ok(()));
            assert_eq!(validate_name("  Acme  "), Ok(()));
        }
    }

    mod zip {
        use super::*;

        #[test]
        fn test_blank_zip_is_empty_not_invalid() {
            assert_eq!(validate_zip("", ZipPolicy::Contains), Err(CompanyError::EmptyZip));
            assert_eq!(validate_zip("   ", ZipPolicy::Contains), Err(CompanyError::EmptyZip));
            assert_eq!(validate_zip("   ", ZipPolicy::Exact), Err(CompanyError::EmptyZip));
        }

        #[test]
        fn test_four_digits_invalid() {
            assert_eq!(validate_zip("1234", ZipPolicy::Contains), Err(CompanyError::InvalidZip));
        }

        #[test]
        fn test_unanchored_match_by_default() {
            assert_eq!(validate_zip("1234567", ZipPolicy::Contains), Ok(()));
            assert_eq!(validate_zip("ab12345cd", ZipPolicy::Contains), Ok(()));
        }

        #[test]
        fn test_exact_policy_rejects_extra_characters() {
            assert_eq!(validate_zip("ab12345cd", ZipPolicy::Exact), Err(CompanyError::InvalidZip));
            assert_eq!(validate_zip("12345", ZipPolicy::Exact), Ok(()));
        }
    }

    mod website {
        use super::*;

        #[test]
        fn test_absent_or_blank_is_ok() {
            assert_eq!(validate_website(None), Ok(()));
            assert_eq!(validate_website(Some("")), Ok(()));
            assert_eq!(validate_website(Some("   ")), Ok(()));
        }

        #[test]
        fn test_valid_websites() {
            assert_eq!(validate_website(Some("https://example.com")), Ok(()));
            assert_eq!(validate_website(Some("http://example.com/about?x=1")), Ok(()));
            assert_eq!(validate_website(Some("http://localhost:8080")), Ok(()));
        }

        #[test]
        fn test_invalid_websites() {
            assert_eq!(
                validate_website(Some("not a url")),
                Err(CompanyError::InvalidWebsite)
            );
            assert_eq!(
                validate_website(Some("bad url")),
                Err(CompanyError::InvalidWebsite)
            );
            assert_eq!(
                validate_website(Some("example.com/about")),
                Err(CompanyError::InvalidWebsite)
            );
        }

        #[test]
        fn test_malformed_uris_are_not_repaired() {
            for website in [
                "https://example.com ",
                "http://example.com/%zz",
                "/%zz",
                "http://ex%41mple.com/",
            ] {
                assert_eq!(
                    validate_website(Some(website)),
                    Err(CompanyError::InvalidWebsite),
                    "{website:?}"
                );
            }
        }

        #[test]
        fn test_forms_refused_by_url_parser() {
            for website in ["http://", "http:", "http://example.com:99999"] {
                assert_eq!(
                    validate_website(Some(website)),
                    Err(CompanyError::InvalidWebsite),
                    "{website:?}"
                );
            }
        }
    }
}
