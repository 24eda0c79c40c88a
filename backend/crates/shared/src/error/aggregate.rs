//! Error aggregation helpers
//!
//! Small, stateless helpers for validators that collect several failures
//! before reporting them. They work on any error type that can render a
//! message (`E: Display`).
//!
//! A collection is passed as `Option<..>` so the caller can tell an absent
//! collection (`None`) from an empty one (`Some(vec![])`); some helpers
//! treat the two differently.

use std::fmt;

use thiserror::Error;

/// Separator placed between messages by [`merge_errors`]
pub const MESSAGE_SEPARATOR: &str = ". ";

/// Several errors folded into a single one
///
/// The message is the individual messages joined by [`MESSAGE_SEPARATOR`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MergedError {
    message: String,
}

impl MergedError {
    /// Combined message
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

/// Append `error` to `errors` only if both are present
///
/// An absent collection stays absent even when `error` is `Some`: callers
/// that want appends to stick start from `Some(Vec::new())`.
///
/// ```
/// use kernel::error::aggregate::append_error;
///
/// let errors = append_error(Some(Vec::new()), Some("boom"));
/// assert_eq!(errors, Some(vec!["boom"]));
///
/// let errors = append_error(errors, None);
/// assert_eq!(errors, Some(vec!["boom"]));
///
/// assert_eq!(append_error(None, Some("boom")), None);
/// ```
pub fn append_error<E>(errors: Option<Vec<E>>, error: Option<E>) -> Option<Vec<E>> {
    match (errors, error) {
        (Some(mut errors), Some(error)) => {
            errors.push(error);
            Some(errors)
        }
        (errors, _) => errors,
    }
}

/// Render every error as its display string, keeping order
///
/// Returns `None` for an absent collection. Entries cannot be missing here,
/// so every slot produces exactly one string.
pub fn as_strings<E: fmt::Display>(errors: Option<&[E]>) -> Option<Vec<String>> {
    errors.map(|errors| errors.iter().map(ToString::to_string).collect())
}

/// Merge a collection with possibly-missing entries into one error
///
/// - absent or empty collection: `None`
/// - otherwise the messages of the present entries, in order, joined by
///   [`MESSAGE_SEPARATOR`]; missing entries add no separator, and neither
///   does a message appended while the merged text is still empty
///
/// A non-empty collection whose entries are all missing still yields a
/// `MergedError`, with an empty message.
///
/// ```
/// use kernel::error::aggregate::merge_errors;
///
/// let merged = merge_errors(Some(&[Some("first"), None, Some("second")][..]));
/// assert_eq!(merged.unwrap().message(), "first. second");
///
/// assert!(merge_errors::<&str>(Some(&[])).is_none());
/// assert!(merge_errors::<&str>(None).is_none());
/// ```
pub fn merge_errors<E: fmt::Display>(errors: Option<&[Option<E>]>) -> Option<MergedError> {
    let errors = errors.filter(|errors| !errors.is_empty())?;
    Some(join(errors.iter().flatten()))
}

/// [`merge_errors`] for a collection without missing entries
///
/// `None` when `errors` is empty.
pub fn merge_present<E: fmt::Display>(errors: &[E]) -> Option<MergedError> {
    if errors.is_empty() {
        return None;
    }
    Some(join(errors.iter()))
}

fn join<'a, E, I>(errors: I) -> MergedError
where
    E: fmt::Display + 'a,
    I: Iterator<Item = &'a E>,
{
    let message = errors.fold(String::new(), |mut message, error| {
        // No separator while nothing has been written yet
        if !message.is_empty() {
            message.push_str(MESSAGE_SEPARATOR);
        }
        message.push_str(&error.to_string());
        message
    });
    MergedError { message }
}
