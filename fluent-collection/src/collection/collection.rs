use crate::common::{Convertible, Field, FieldAccess, Key, Value};
use crate::errors::CollectionResult;
use indexmap::IndexMap;
use std::fmt::{Debug, Formatter};
use std::ops::{Index, IndexMut};

/// An ordered mapping of keys to values with a fluent query API.
///
/// Entries keep their insertion order, and that order is what iteration,
/// [`reverse`](Collection::reverse) and [`chunk`](Collection::chunk) see. Keys are
/// unique: writing to an existing key replaces its value in place, without moving
/// the entry.
///
/// Values added without a key get the next integer key. Integer keys grow
/// monotonically, independent of any string keys in the same collection, and
/// removing entries never makes a key be handed out again. Once the integer
/// key `u64::MAX` is taken there is no next key: `add` and `push` log an error
/// and leave the collection unchanged.
///
/// Query and transform operations (`map`, `filter`, `where_*`, `sort*`, `reverse`,
/// `group_by`, `pluck_column`, `key_by`, `chunk`, `find`) return a new collection
/// and leave this one untouched. Only `add`, `add_keyed`, `insert`, `push`,
/// `remove` and `get_mut` mutate in place.
///
/// ```rust
/// use fluent_collection::collection::Collection;
/// use fluent_collection::record;
///
/// let coffees = Collection::from(vec![
///     record! { name: "Black", cost: 4.50 },
///     record! { name: "Decaf", cost: 5 },
///     record! { name: "Cappuccino", cost: 7.50 },
/// ]);
///
/// let cheap = coffees.where_less("cost", 7).unwrap();
/// assert_eq!(cheap.count(), 2);
/// assert_eq!(coffees.count(), 3);
/// ```
#[derive(Clone)]
pub struct Collection<V = Value> {
    items: IndexMap<Key, V>,
    // None once u64::MAX has been used
    next_key: Option<u64>,
}

fn next_key_after<V>(items: &IndexMap<Key, V>) -> Option<u64> {
    match items.keys().filter_map(Key::as_int).max() {
        Some(max) => max.checked_add(1),
        None => Some(0),
    }
}

impl<V> Collection<V> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Collection {
            items: IndexMap::new(),
            next_key: Some(0),
        }
    }

    /// Creates a collection keyed `0..n` from a sequence of values.
    pub fn from_values<I: IntoIterator<Item = V>>(values: I) -> Self {
        let mut collection = Collection::new();
        for value in values {
            collection.add(value);
        }
        collection
    }

    /// Builds a derived collection from entries of this one.
    ///
    /// The auto-key counter of the result continues after its largest integer key.
    pub(crate) fn derive<U>(items: IndexMap<Key, U>) -> Collection<U> {
        let next_key = next_key_after(&items);
        Collection { items, next_key }
    }

    /// The underlying ordered mapping.
    pub fn all(&self) -> &IndexMap<Key, V> {
        &self.items
    }

    /// Appends a value at the next integer key.
    ///
    /// When the integer keys are exhausted the value is dropped and the
    /// collection is left as it was.
    pub fn add(&mut self, value: V) -> &mut Self {
        match self.next_key {
            Some(key) => {
                self.items.insert(Key::Int(key), value);
                self.next_key = key.checked_add(1);
            }
            None => {
                log::error!("Cannot append, integer key {} is already in use", u64::MAX);
            }
        }
        self
    }

    /// Sets the value at `key`. An existing entry keeps its position.
    pub fn add_keyed(&mut self, value: V, key: impl Into<Key>) -> &mut Self {
        self.insert(key, value);
        self
    }

    /// Sets the value at `key` and returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        let key = key.into();
        if let Key::Int(n) = key {
            if self.next_key.is_some_and(|next| n >= next) {
                self.next_key = n.checked_add(1);
            }
        }
        self.items.insert(key, value)
    }

    /// Appends a value at the next integer key.
    pub fn push(&mut self, value: V) {
        self.add(value);
    }

    /// Removes the entry at `key`, if present. The rest keep their order.
    pub fn remove(&mut self, key: impl Into<Key>) -> &mut Self {
        self.items.shift_remove(&key.into());
        self
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        self.items.get(&key.into())
    }

    /// Returns the value at `key`, or `default` when there is none.
    pub fn get_or(&self, key: impl Into<Key>, default: V) -> V
    where
        V: Clone,
    {
        match self.items.get(&key.into()) {
            Some(value) => value.clone(),
            None => default,
        }
    }

    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut V> {
        self.items.get_mut(&key.into())
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.items.contains_key(&key.into())
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, V> {
        self.items.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, Key, V> {
        self.items.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, V> {
        self.items.iter()
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Collection::new()
    }
}

impl<V> From<Vec<V>> for Collection<V> {
    fn from(values: Vec<V>) -> Self {
        Collection::from_values(values)
    }
}

impl<V> From<IndexMap<Key, V>> for Collection<V> {
    fn from(items: IndexMap<Key, V>) -> Self {
        Collection::<V>::derive(items)
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for (key, value) in iter {
            collection.insert(key, value);
        }
        collection
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = indexmap::map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<V, K: Into<Key>> Index<K> for Collection<V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present, like `HashMap` does.
    fn index(&self, key: K) -> &V {
        let key = key.into();
        match self.items.get(&key) {
            Some(value) => value,
            None => panic!("no entry found for key {}", key),
        }
    }
}

impl<V, K: Into<Key>> IndexMut<K> for Collection<V> {
    fn index_mut(&mut self, key: K) -> &mut V {
        let key = key.into();
        match self.items.get_mut(&key) {
            Some(value) => value,
            None => panic!("no entry found for key {}", key),
        }
    }
}

// equal entries in the same order
impl<V: PartialEq> PartialEq for Collection<V> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(a, b)| a == b)
    }
}

impl<V: Eq> Eq for Collection<V> {}

impl<V: Debug> Debug for Collection<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.items.iter()).finish()
    }
}

/// A collection used as an item answers field names with its entries.
impl<V: Convertible> FieldAccess for Collection<V> {
    fn field(&self, name: &str) -> CollectionResult<Field> {
        match self.items.get(&Key::from(name)) {
            Some(value) => Ok(Field::Present(value.to_value()?)),
            None => Ok(Field::Absent),
        }
    }
}

/// Creates a [`Collection`] from values, or from `key => value` pairs.
///
/// ```rust
/// use fluent_collection::collection;
///
/// let numbers = collection![1, 2, 3];
/// assert_eq!(numbers.get(2), Some(&3));
///
/// let colors = collection!["Negro" => "Black", "Blanco" => "White"];
/// assert_eq!(colors.get("Blanco"), Some(&"White"));
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::collection::Collection::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut collection = $crate::collection::Collection::new();
            $(
                collection.insert($key, $value);
            )+
            collection
        }
    };

    ($($value:expr),+ $(,)?) => {
        $crate::collection::Collection::from(vec![$($value),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record, val};

    #[test]
    fn test_add_after_max_key_keeps_entries() {
        let mut collection = Collection::new();
        collection.add_keyed(1, u64::MAX);
        collection.add(2);
        collection.push(3);

        assert_eq!(collection.count(), 1);
        assert_eq!(collection.get(u64::MAX), Some(&1));

        // string keys are still accepted
        collection.add_keyed(4, "four");
        assert_eq!(collection.count(), 2);
    }

    #[test]
    fn test_derived_collection_after_max_key() {
        let mut collection = Collection::new();
        collection.add(0);
        collection.add_keyed(1, u64::MAX);
        let mut kept = collection.filter(|v, _| *v >= 0);
        kept.add(2);
        assert_eq!(kept.count(), 2);
        assert_eq!(kept.get(u64::MAX), Some(&1));
    }

    fn characters() -> Collection<&'static str> {
        Collection::from(vec!["a", "b", "c", "d", "e", "f"])
    }

    #[test]
    fn test_new_is_empty() {
        let collection: Collection = Collection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.count(), 0);
        assert_eq!(collection, Collection::default());
    }

    #[test]
    fn test_from_vec_assigns_sequential_keys() {
        let collection = characters();
        let keys: Vec<Key> = collection.keys().cloned().collect();
        assert_eq!(keys, (0..6u64).map(Key::Int).collect::<Vec<_>>());
        assert_eq!(collection.get(0), Some(&"a"));
        assert_eq!(collection.get(5), Some(&"f"));
    }

    #[test]
    fn test_add_and_add_keyed() {
        let mut colors = collection!["Negro" => "Black", "Blanco" => "White"];
        colors.add_keyed("Yellow", "Amarillo");
        assert_eq!(colors.count(), 3);
        assert_eq!(colors.get("Amarillo"), Some(&"Yellow"));

        colors.add("Red");
        assert_eq!(colors.get(0), Some(&"Red"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut collection = characters();
        collection.add_keyed("z", 2);
        let values: Vec<&&str> = collection.values().collect();
        assert_eq!(values, vec![&"a", &"b", &"z", &"d", &"e", &"f"]);
        assert_eq!(collection.insert(2, "c"), Some("z"));
    }

    #[test]
    fn test_auto_keys_skip_past_explicit_integer_keys() {
        let mut collection: Collection<i32> = Collection::new();
        collection.add(1);
        collection.add_keyed(2, 10);
        collection.add_keyed(3, "name");
        collection.add(4);
        assert_eq!(collection.get(11), Some(&4));
        collection.add_keyed(5, 3);
        collection.add(6);
        assert_eq!(collection.get(12), Some(&6));
    }

    #[test]
    fn test_auto_keys_never_decrease_after_remove() {
        let mut collection = Collection::from(vec![1, 2, 3]);
        collection.remove(2).remove(1);
        collection.add(4);
        assert_eq!(collection.get(3), Some(&4));
        assert!(!collection.contains_key(1));
    }

    #[test]
    fn test_string_keys_normalize() {
        let mut collection: Collection<i32> = Collection::new();
        collection.add_keyed(21, "21");
        assert_eq!(collection.get(21), Some(&21));
        collection.add(22);
        assert_eq!(collection.get(22), Some(&22));
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut collection = characters();
        collection.remove("missing").remove(100);
        assert_eq!(collection, characters());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut collection = characters();
        collection.remove(0);
        let keys: Vec<u64> = collection.keys().filter_map(Key::as_int).collect();
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_get_or_and_get_mut() {
        let mut collection = characters();
        assert_eq!(collection.get_or(9, "default"), "default");
        assert_eq!(collection.get_or(1, "default"), "b");
        if let Some(value) = collection.get_mut(1) {
            *value = "B";
        }
        assert_eq!(collection[1], "B");
    }

    #[test]
    fn test_index_protocol() {
        let mut collection = collection!["Negro" => "Black"];
        assert!(collection.contains_key("Negro"));
        assert_eq!(collection["Negro"], "Black");
        collection["Negro"] = "Noir";
        assert_eq!(collection["Negro"], "Noir");
        collection.push("White");
        assert_eq!(collection[0], "White");
    }

    #[test]
    #[should_panic(expected = "no entry found for key missing")]
    fn test_index_missing_key_panics() {
        let collection = characters();
        let value: &str = collection["missing"];
        assert!(value.is_empty());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a: Collection<i32> = vec![("x", 1), ("y", 2)].into_iter().collect();
        let b: Collection<i32> = vec![("y", 2), ("x", 1)].into_iter().collect();
        let c: Collection<i32> = vec![("x", 1), ("y", 2)].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_from_index_map() {
        let mut items = IndexMap::new();
        items.insert(Key::from(4), "four");
        items.insert(Key::from("k"), "kay");
        let mut collection = Collection::from(items);
        collection.add("five");
        assert_eq!(collection.get(5), Some(&"five"));
    }

    #[test]
    fn test_all_is_a_view() {
        let collection = characters();
        let all = collection.all();
        assert_eq!(all.len(), 6);
        assert_eq!(all.get(&Key::Int(0)), Some(&"a"));
    }

    #[test]
    fn test_iteration() {
        let collection = characters();
        let joined: String = collection.iter().map(|(_, v)| *v).collect();
        assert_eq!(joined, "abcdef");

        let mut count = 0;
        for (_key, _value) in &collection {
            count += 1;
        }
        assert_eq!(count, 6);

        let owned: Vec<(Key, &str)> = collection.into_iter().collect();
        assert_eq!(owned[0], (Key::Int(0), "a"));
    }

    #[test]
    fn test_collection_as_item() {
        let inner = collection!["Name" => val!("John"), "Age" => val!(21)];
        assert_eq!(inner.field("Age").unwrap(), Field::Present(val!(21)));
        assert_eq!(inner.field("Email").unwrap(), Field::Absent);

        let rows = Collection::from(vec![record! { a: 1 }]);
        assert_eq!(rows.field("0").unwrap(), Field::Present(Value::Record(record! { a: 1 })));
    }

    #[test]
    fn test_debug() {
        let collection = collection!["a" => 1];
        assert_eq!(format!("{:?}", collection), "{\"a\": 1}");
    }

    #[test]
    fn test_macro_forms() {
        let empty: Collection<i32> = collection![];
        assert!(empty.is_empty());
        let values = collection![1, 2, 3,];
        assert_eq!(values.count(), 3);
    }
}
