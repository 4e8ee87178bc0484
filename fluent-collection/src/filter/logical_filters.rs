use std::{any::Any, fmt::Display};

use crate::common::FieldAccess;
use crate::errors::CollectionResult;

use super::{Filter, FilterProvider};

pub(crate) struct AllFilter;

impl FilterProvider for AllFilter {
    fn apply(&self, _entry: &dyn FieldAccess) -> CollectionResult<bool> {
        Ok(true)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Display for AllFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllFilter")
    }
}

fn write_joined(
    f: &mut std::fmt::Formatter<'_>,
    filters: &[Filter],
    separator: &str,
) -> std::fmt::Result {
    write!(f, "(")?;
    for (i, filter) in filters.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", filter)?;
    }
    write!(f, ")")
}

/// Matches when every inner filter matches. Evaluation stops at the first miss.
pub(crate) struct AndFilter {
    filters: Vec<Filter>,
}

impl AndFilter {
    pub(crate) fn new(filters: Vec<Filter>) -> Self {
        AndFilter { filters }
    }
}

impl Display for AndFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_joined(f, &self.filters, " && ")
    }
}

impl FilterProvider for AndFilter {
    #[inline]
    fn apply(&self, entry: &dyn FieldAccess) -> CollectionResult<bool> {
        for filter in &self.filters {
            if !filter.apply(entry)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn validate(&self) -> CollectionResult<()> {
        self.filters.iter().try_for_each(|filter| filter.validate())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Matches when any inner filter matches. Evaluation stops at the first hit.
pub(crate) struct OrFilter {
    filters: Vec<Filter>,
}

impl OrFilter {
    pub(crate) fn new(filters: Vec<Filter>) -> Self {
        OrFilter { filters }
    }
}

impl Display for OrFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_joined(f, &self.filters, " || ")
    }
}

impl FilterProvider for OrFilter {
    #[inline]
    fn apply(&self, entry: &dyn FieldAccess) -> CollectionResult<bool> {
        for filter in &self.filters {
            if filter.apply(entry)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn validate(&self) -> CollectionResult<()> {
        self.filters.iter().try_for_each(|filter| filter.validate())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) struct NotFilter {
    filter: Filter,
}

impl NotFilter {
    pub(crate) fn new(filter: Filter) -> Self {
        NotFilter { filter }
    }
}

impl Display for NotFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "!{}", self.filter)
    }
}

impl FilterProvider for NotFilter {
    #[inline]
    fn apply(&self, entry: &dyn FieldAccess) -> CollectionResult<bool> {
        Ok(!self.filter.apply(entry)?)
    }

    fn validate(&self) -> CollectionResult<()> {
        self.filter.validate()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
