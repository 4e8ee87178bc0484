use super::Collection;
use crate::common::Key;
use indexmap::IndexMap;
use std::ops::ControlFlow;

impl<V> Collection<V> {
    /// Applies `f` to every entry and returns the results under the same keys.
    ///
    /// ```rust
    /// use fluent_collection::collection;
    ///
    /// let doubled = collection![1, 2, 3].map(|v, _| v * 2);
    /// assert_eq!(doubled, collection![2, 4, 6]);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> Collection<U>
    where
        F: FnMut(&V, &Key) -> U,
    {
        let items: IndexMap<Key, U> = self
            .iter()
            .map(|(key, value)| (key.clone(), f(value, key)))
            .collect();
        Self::derive(items)
    }

    /// Calls `f` for every entry in order until it returns [`ControlFlow::Break`].
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&V, &Key) -> ControlFlow<()>,
    {
        for (key, value) in self.iter() {
            if f(value, key).is_break() {
                break;
            }
        }
        self
    }

    /// Keeps the entries for which `f` returns `true`, with their keys.
    pub fn filter<F>(&self, mut f: F) -> Collection<V>
    where
        V: Clone,
        F: FnMut(&V, &Key) -> bool,
    {
        let items: IndexMap<Key, V> = self
            .iter()
            .filter(|(key, value)| f(*value, *key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self::derive(items)
    }

    /// Like [`Collection::filter`], passing `args` to the predicate on every call.
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    /// use fluent_collection::common::Key;
    ///
    /// fn between(value: &f64, _key: &Key, range: &(f64, f64)) -> bool {
    ///     *value >= range.0 && *value <= range.1
    /// }
    ///
    /// let costs = Collection::from(vec![4.50, 5.0, 7.50, 9.99]);
    /// let mid = costs.filter_with(between, &(5.0, 7.50));
    /// assert_eq!(mid.count(), 2);
    /// ```
    pub fn filter_with<A, F>(&self, mut f: F, args: &A) -> Collection<V>
    where
        V: Clone,
        A: ?Sized,
        F: FnMut(&V, &Key, &A) -> bool,
    {
        self.filter(|value, key| f(value, key, args))
    }

    /// Folds the entries in order, starting from `initial`.
    pub fn reduce<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, &V, &Key) -> A,
    {
        self.iter()
            .fold(initial, |carry, (key, value)| f(carry, value, key))
    }
}
