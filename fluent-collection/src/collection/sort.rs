use super::Collection;
use crate::common::{access, FieldAccess, Key, SortOptions, Value};
use crate::errors::CollectionResult;
use icu_collator::CollatorBorrowed;
use indexmap::IndexMap;
use std::cmp::Ordering;

fn compare_values(a: &Value, b: &Value, collator: Option<&CollatorBorrowed<'_>>) -> Ordering {
    match (a, b, collator) {
        (Value::String(a), Value::String(b), Some(collator)) => collator.compare(a, b),
        _ => a.cmp(b),
    }
}

impl<V: Clone> Collection<V> {
    /// Sorts the values in their natural order.
    ///
    /// The sort is stable and every value keeps its key. For [`Value`] items the
    /// order is the total order documented on [`Value`], so collections mixing
    /// kinds sort without failing, but only same-kind or numeric values compare
    /// meaningfully.
    pub fn sort(&self) -> Collection<V>
    where
        V: Ord,
    {
        self.sort_with(|a, b| a.cmp(b))
    }

    /// Sorts the values with `compare`. Stable and key-preserving.
    ///
    /// ```rust
    /// use fluent_collection::collection;
    ///
    /// let sorted = collection![3, 1, 2].sort_with(|a, b| b.cmp(a));
    /// assert_eq!(sorted.values().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// assert_eq!(sorted.get(1), Some(&1));
    /// ```
    pub fn sort_with<F>(&self, mut compare: F) -> Collection<V>
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut entries: Vec<(&Key, &V)> = self.iter().collect();
        entries.sort_by(|a, b| compare(a.1, b.1));
        let items: IndexMap<Key, V> = entries
            .into_iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self::derive(items)
    }

    /// Sorts the items by `field` in ascending [`Value`] order.
    /// Stable and key-preserving.
    pub fn sort_by(&self, field: &str) -> CollectionResult<Collection<V>>
    where
        V: FieldAccess,
    {
        self.sort_by_with_options(field, &SortOptions::default())
    }

    /// Sorts the items by `field` with a direction and optional collation.
    ///
    /// With collation, two string fields compare with a locale-aware collator;
    /// any other pair compares in [`Value`] order. Descending order keeps equal
    /// items in their original relative order.
    pub fn sort_by_with_options(
        &self,
        field: &str,
        options: &SortOptions,
    ) -> CollectionResult<Collection<V>>
    where
        V: FieldAccess,
    {
        let collator = options.collator()?;
        let sort_order = options.sort_order();

        let mut entries: Vec<(Value, &Key, &V)> = Vec::with_capacity(self.count());
        for (key, item) in self.iter() {
            entries.push((access(item, field, None)?, key, item));
        }

        entries.sort_by(|a, b| sort_order.apply(compare_values(&a.0, &b.0, collator.as_ref())));

        let items: IndexMap<Key, V> = entries
            .into_iter()
            .map(|(_, key, item)| (key.clone(), item.clone()))
            .collect();
        Ok(Self::derive(items))
    }

    /// Reverses the order of the entries. Keys stay with their values.
    pub fn reverse(&self) -> Collection<V> {
        let items: IndexMap<Key, V> = self
            .iter()
            .rev()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self::derive(items)
    }
}
