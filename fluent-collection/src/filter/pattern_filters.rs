use std::{any::Any, fmt::Display};

use regex::Regex;

use crate::common::{access, FieldAccess};
use crate::errors::{CollectionError, CollectionResult, ErrorKind};

use super::FilterProvider;

/// Matches string fields against a regular expression.
///
/// The pattern is compiled once. An invalid pattern does not panic: it is
/// logged, reported by [`FilterProvider::validate`] and by every `apply`.
/// Non-string field values never match.
pub(crate) struct RegexFilter {
    field_name: String,
    field_value: String,
    pattern: Option<Regex>,
}

impl RegexFilter {
    #[inline]
    pub(crate) fn new(field_name: String, field_value: String) -> Self {
        let pattern = match Regex::new(&field_value) {
            Ok(regex) => Some(regex),
            Err(e) => {
                log::error!("Invalid regex pattern '{}': {}", field_value, e);
                None
            }
        };

        RegexFilter {
            field_name,
            field_value,
            pattern,
        }
    }

    fn invalid_pattern(&self) -> CollectionError {
        log::error!("Invalid regex pattern for filter {}", self);
        CollectionError::new(
            &format!("Invalid regex pattern: {}", self.field_value),
            ErrorKind::FilterError,
        )
    }
}

impl Display for RegexFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} =~ {})", self.field_name, self.field_value)
    }
}

impl FilterProvider for RegexFilter {
    #[inline]
    fn apply(&self, entry: &dyn FieldAccess) -> CollectionResult<bool> {
        let pattern = self.pattern.as_ref().ok_or_else(|| self.invalid_pattern())?;
        let value = access(entry, &self.field_name, None)?;
        match value.as_str() {
            Some(text) => Ok(pattern.is_match(text)),
            None => Ok(false),
        }
    }

    fn validate(&self) -> CollectionResult<()> {
        match self.pattern {
            Some(_) => Ok(()),
            None => Err(self.invalid_pattern()),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
