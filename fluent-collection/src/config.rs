//! Global settings.
//!
//! The only setting is the separator that joins the segments of an embedded
//! field path such as `author.name`. It defaults to `.` and can be changed with
//! the `custom_separator` feature.

use crate::common::{atomic, Atomic};
#[cfg(feature = "custom_separator")]
use crate::common::WriteExecutor;
#[cfg(feature = "custom_separator")]
use crate::errors::{CollectionError, CollectionResult, ErrorKind};
use std::sync::LazyLock;

pub const DEFAULT_FIELD_SEPARATOR: &str = ".";

pub static FIELD_SEPARATOR: LazyLock<Atomic<String>> =
    LazyLock::new(|| atomic(DEFAULT_FIELD_SEPARATOR.to_string()));

/// Returns the current field separator.
pub fn field_separator() -> String {
    use crate::common::ReadExecutor;
    FIELD_SEPARATOR.read_with(|sep| sep.clone())
}

/// Replaces the field separator for every record in the process.
#[cfg(feature = "custom_separator")]
pub fn set_field_separator(separator: &str) -> CollectionResult<()> {
    if separator.is_empty() {
        log::error!("Field separator cannot be empty");
        return Err(CollectionError::new(
            "Field separator cannot be empty",
            ErrorKind::InvalidArgument,
        ));
    }
    FIELD_SEPARATOR.write_with(|sep| *sep = separator.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separator() {
        #[cfg(not(feature = "custom_separator"))]
        assert_eq!(field_separator(), DEFAULT_FIELD_SEPARATOR);
        #[cfg(feature = "custom_separator")]
        assert!(!field_separator().is_empty());
    }

    #[cfg(feature = "custom_separator")]
    #[test]
    fn test_set_empty_separator_fails() {
        let err = set_field_separator("").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidArgument);
    }
}
