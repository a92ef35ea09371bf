//! Ordered field checks.
//!
//! Rules run in slice order and the first failure wins, so the reported
//! field is deterministic.

use uuid::Uuid;

use crate::error::CatalogServiceError;

/// A named predicate over an input; `true` means the field is acceptable.
pub type Rule<T> = (&'static str, fn(&T) -> bool);

/// Name of the first rule `input` fails, if any.
pub fn first_failing<T>(input: &T, rules: &[Rule<T>]) -> Option<&'static str> {
    rules
        .iter()
        .find(|(_, check)| !check(input))
        .map(|(name, _)| *name)
}

/// Run `rules` and turn the first failure into `"<field> is required"`.
pub fn require_fields<T>(input: &T, rules: &[Rule<T>]) -> Result<(), CatalogServiceError> {
    match first_failing(input, rules) {
        Some(field) => Err(CatalogServiceError::validation(format!("{field} is required"))),
        None => Ok(()),
    }
}

/// Parse a caller-supplied identifier, rejecting blanks before syntax.
pub fn require_id(raw: &str, label: &str) -> Result<Uuid, CatalogServiceError> {
    if raw.is_empty() {
        return Err(CatalogServiceError::validation(format!("{label} is required")));
    }
    raw.parse::<Uuid>()
        .map_err(|_| CatalogServiceError::validation(format!("invalid {label} format")))
}
