use crate::common::FieldAccess;
use crate::errors::CollectionResult;
use std::any::Any;
use std::fmt::Display;
use std::ops::Deref;
use std::sync::Arc;

use super::{AllFilter, AndFilter, NotFilter, OrFilter};

/// Trait for implementing filters.
///
/// A `FilterProvider` decides whether a collection item matches. Items are seen
/// through [`FieldAccess`], so one filter works for records, dynamic values and
/// user types alike.
pub trait FilterProvider: Any + Send + Sync + Display {
    /// Applies the filter to an item and returns whether it matches.
    fn apply(&self, entry: &dyn FieldAccess) -> CollectionResult<bool>;

    /// Checks the filter before it is applied to any item.
    ///
    /// Filters that can be misconfigured, like a regex filter with an invalid
    /// pattern, report it here so that an empty collection still rejects them.
    fn validate(&self) -> CollectionResult<()> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any;
}

/// A predicate over collection items.
///
/// `Filter` is a cheap, cloneable handle around a [`FilterProvider`]. Filters are
/// built with [`field`](super::field) and composed with [`Filter::and`],
/// [`Filter::or`] and [`Filter::not`], then applied with
/// [`Collection::find`](crate::collection::Collection::find).
///
/// ```rust
/// use fluent_collection::filter::field;
///
/// let filter = field("cost").lt(7.51).and(field("name").contains("e"));
/// assert_eq!(filter.to_string(), "((cost < 7.51) && (name contains \"e\"))");
/// ```
#[derive(Clone)]
pub struct Filter {
    inner: Arc<dyn FilterProvider>,
}

impl Filter {
    /// Creates a new filter from a filter provider implementation.
    pub fn new<T: FilterProvider + 'static>(inner: T) -> Self {
        Filter {
            inner: Arc::new(inner),
        }
    }

    /// Combines this filter with another using logical AND.
    pub fn and(&self, filter: Filter) -> Self {
        Filter::new(AndFilter::new(vec![self.clone(), filter]))
    }

    /// Combines this filter with another using logical OR.
    pub fn or(&self, filter: Filter) -> Self {
        Filter::new(OrFilter::new(vec![self.clone(), filter]))
    }

    /// Negates this filter.
    pub fn not(&self) -> Self {
        Filter::new(NotFilter::new(self.clone()))
    }
}

impl Display for Filter {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Deref for Filter {
    type Target = Arc<dyn FilterProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Creates a filter that matches every item.
pub fn all() -> Filter {
    Filter::new(AllFilter {})
}

pub fn and(filters: Vec<Filter>) -> Filter {
    Filter::new(AndFilter::new(filters))
}

pub fn or(filters: Vec<Filter>) -> Filter {
    Filter::new(OrFilter::new(filters))
}

pub fn not(filter: Filter) -> Filter {
    Filter::new(NotFilter::new(filter))
}

pub(crate) fn is_all_filter(filter: &Filter) -> bool {
    filter.as_any().is::<AllFilter>()
}
