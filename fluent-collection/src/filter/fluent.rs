use crate::common::Value;

use super::{field_filter, Filter, Operator};

/// Starts a filter on the named field.
///
/// ```rust
/// use fluent_collection::filter::field;
///
/// let with_milk = field("ingredients").contains("Milk");
/// let cheap = field("cost").lte(5);
/// let filter = with_milk.or(cheap);
/// ```
pub fn field(field_name: &str) -> FluentFilter {
    FluentFilter {
        field_name: field_name.to_string(),
    }
}

/// Builder returned by [`field`].
pub struct FluentFilter {
    field_name: String,
}

impl FluentFilter {
    /// Strict equality: same type and same value.
    #[inline]
    pub fn eq<T: Into<Value>>(self, value: T) -> Filter {
        self.build(value.into(), Operator::Equals, true)
    }

    /// Loose equality, e.g. `5` equals `"5"`.
    #[inline]
    pub fn loose_eq<T: Into<Value>>(self, value: T) -> Filter {
        self.build(value.into(), Operator::Equals, false)
    }

    #[inline]
    pub fn gt<T: Into<Value>>(self, value: T) -> Filter {
        self.build(value.into(), Operator::Greater, true)
    }

    #[inline]
    pub fn gte<T: Into<Value>>(self, value: T) -> Filter {
        self.build(value.into(), Operator::GreaterOrEqual, true)
    }

    #[inline]
    pub fn lt<T: Into<Value>>(self, value: T) -> Filter {
        self.build(value.into(), Operator::Less, true)
    }

    #[inline]
    pub fn lte<T: Into<Value>>(self, value: T) -> Filter {
        self.build(value.into(), Operator::LessOrEqual, true)
    }

    /// Substring of a string field, or strict member of a sequence field.
    #[inline]
    pub fn contains<T: Into<Value>>(self, value: T) -> Filter {
        self.build(value.into(), Operator::Contains, true)
    }

    /// Like [`FluentFilter::contains`] with loose membership.
    #[inline]
    pub fn loose_contains<T: Into<Value>>(self, value: T) -> Filter {
        self.build(value.into(), Operator::Contains, false)
    }

    #[inline]
    pub fn matches(self, pattern: &str) -> Filter {
        self.build(Value::from(pattern), Operator::Matches, true)
    }

    /// A filter with an explicit operator and comparison mode.
    pub fn compare<T: Into<Value>>(self, operator: Operator, value: T, strict: bool) -> Filter {
        self.build(value.into(), operator, strict)
    }

    fn build(self, value: Value, operator: Operator, strict: bool) -> Filter {
        field_filter(&self.field_name, value, operator, strict)
    }
}
