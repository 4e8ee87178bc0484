use crate::errors::{CollectionError, CollectionResult, ErrorKind};
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use std::cmp::Ordering;

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest to largest (A to Z, 0 to 9).
    #[default]
    Ascending,
    /// Largest to smallest (Z to A, 9 to 0).
    Descending,
}

impl SortOrder {
    /// Applies the direction to an ascending comparison result.
    #[inline]
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Options for sorting a collection by a field.
///
/// Without collation, string fields compare bytewise like every other
/// [`Value`](crate::common::Value). With collation, two string fields are
/// compared with a locale-aware ICU collator.
///
/// ```rust
/// use fluent_collection::common::{SortOptions, SortOrder};
///
/// let options = SortOptions::new().order(SortOrder::Descending).collated();
/// assert_eq!(options.sort_order(), SortOrder::Descending);
/// assert!(options.is_collated());
/// ```
#[derive(Clone, Default)]
pub struct SortOptions {
    sort_order: SortOrder,
    collator_options: Option<CollatorOptions>,
    collator_preferences: Option<CollatorPreferences>,
}

impl SortOptions {
    pub fn new() -> SortOptions {
        SortOptions::default()
    }

    pub fn order(mut self, sort_order: SortOrder) -> SortOptions {
        self.sort_order = sort_order;
        self
    }

    /// Enables collation with the default preferences and options.
    pub fn collated(mut self) -> SortOptions {
        self.collator_options = Some(CollatorOptions::default());
        self.collator_preferences = Some(CollatorPreferences::default());
        self
    }

    pub fn collator_options(mut self, options: CollatorOptions) -> SortOptions {
        self.collator_options = Some(options);
        self
    }

    pub fn collator_preferences(mut self, preferences: CollatorPreferences) -> SortOptions {
        self.collator_preferences = Some(preferences);
        self
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn is_collated(&self) -> bool {
        self.collator_options.is_some() || self.collator_preferences.is_some()
    }

    pub(crate) fn collator(&self) -> CollectionResult<Option<CollatorBorrowed<'static>>> {
        if !self.is_collated() {
            return Ok(None);
        }

        let preferences = self.collator_preferences.clone().unwrap_or_default();
        let options = self.collator_options.clone().unwrap_or_default();
        let collator = Collator::try_new(preferences, options).map_err(|e| {
            log::error!("Failed to create collator for sorting: {}", e);
            CollectionError::new(
                "Failed to create collator for sorting - check collator preferences and options",
                ErrorKind::InvalidArgument,
            )
        })?;
        Ok(Some(collator))
    }
}
