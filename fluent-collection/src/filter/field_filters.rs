use std::{any::Any, fmt::Display};

use crate::common::{access, FieldAccess, Value};
use crate::errors::CollectionResult;

use super::{FilterProvider, Operator, RegexFilter};
use super::Filter;

/// Compares one field of an item with a fixed value.
///
/// The field is read with [`access`] and no default, so an item that is
/// record-like but lacks the field fails with an access error, while a scalar
/// item reads as `null`.
pub(crate) struct FieldFilter {
    field_name: String,
    field_value: Value,
    operator: Operator,
    strict: bool,
}

impl FieldFilter {
    #[inline]
    pub(crate) fn new(field_name: String, field_value: Value, operator: Operator, strict: bool) -> Self {
        FieldFilter {
            field_name,
            field_value,
            operator,
            strict,
        }
    }
}

impl Display for FieldFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} {} {})",
            self.field_name,
            self.operator.symbol(self.strict),
            self.field_value
        )
    }
}

impl FilterProvider for FieldFilter {
    #[inline]
    fn apply(&self, entry: &dyn FieldAccess) -> CollectionResult<bool> {
        let value = access(entry, &self.field_name, None)?;
        self.operator.evaluate(&value, &self.field_value, self.strict)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Builds the filter for `field <operator> value`.
///
/// `Matches` compiles its pattern once, up front; every other operator
/// becomes a [`FieldFilter`].
pub(crate) fn field_filter(field_name: &str, value: Value, operator: Operator, strict: bool) -> Filter {
    match (operator, value) {
        (Operator::Matches, Value::String(pattern)) => {
            Filter::new(RegexFilter::new(field_name.to_string(), pattern))
        }
        (operator, value) => Filter::new(FieldFilter::new(field_name.to_string(), value, operator, strict)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::{record, val};

    #[test]
    fn test_field_filter_apply() {
        let filter = FieldFilter::new("cost".to_string(), val!(5), Operator::Equals, false);
        assert!(filter.apply(&record! { cost: "5" }).unwrap());
        assert!(!filter.apply(&record! { cost: 6 }).unwrap());
    }

    #[test]
    fn test_field_filter_missing_field_on_record() {
        let filter = FieldFilter::new("cost".to_string(), val!(5), Operator::Less, true);
        let err = filter.apply(&record! { name: "Black" }).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::AccessError);
    }

    #[test]
    fn test_field_filter_on_scalar_reads_null() {
        let filter = FieldFilter::new("cost".to_string(), Value::Null, Operator::Equals, true);
        assert!(filter.apply(&42).unwrap());
    }

    #[test]
    fn test_field_filter_display() {
        let filter = FieldFilter::new("name".to_string(), val!("e"), Operator::Contains, true);
        assert!(filter.apply(&record! { name: "Decaf" }).unwrap());
        assert_eq!(filter.to_string(), "(name contains \"e\")");
    }

    #[test]
    fn test_field_filter_display_marks_loose_equality() {
        let strict = FieldFilter::new("cost".to_string(), val!("5"), Operator::Equals, true);
        let loose = FieldFilter::new("cost".to_string(), val!("5"), Operator::Equals, false);
        assert_eq!(strict.to_string(), "(cost == \"5\")");
        assert_eq!(loose.to_string(), "(cost ~= \"5\")");
    }

    #[test]
    fn test_field_filter_builder() {
        let regex = field_filter("name", val!("^C"), Operator::Matches, true);
        assert!(regex.as_any().is::<RegexFilter>());

        let other = field_filter("name", val!(5), Operator::Matches, true);
        assert!(other.as_any().is::<FieldFilter>());
        assert!(other.apply(&record! { name: "5" }).is_err());

        let less = field_filter("cost", val!(5), Operator::Less, true);
        assert!(less.apply(&record! { cost: 4.5 }).unwrap());
    }
}
