use super::Collection;
use crate::common::{access, Convertible, FieldAccess, Key, Value};
use crate::errors::{CollectionError, CollectionResult, ErrorKind};
use indexmap::IndexMap;
use itertools::Itertools;

/// Adds numbers: integers stay `I64` until they overflow or meet a float.
/// Numeric strings count as the number they spell.
fn add_numbers<I>(values: I) -> CollectionResult<Value>
where
    I: Iterator<Item = CollectionResult<Value>>,
{
    let mut total = Value::I64(0);
    for value in values {
        let value = value?;
        let number = match value.to_numeric() {
            Some(number) => number,
            None => {
                log::error!("Cannot add non-numeric value {} of kind {}", value, value.kind_name());
                return Err(CollectionError::new(
                    &format!("Cannot add non-numeric value {}", value),
                    ErrorKind::InvalidDataType,
                ));
            }
        };
        total = match (&total, &number) {
            (Value::I64(a), Value::I64(b)) => match a.checked_add(*b) {
                Some(sum) => Value::I64(sum),
                None => Value::F64(*a as f64 + *b as f64),
            },
            (Value::I64(a), Value::F64(b)) => Value::F64(*a as f64 + b),
            (Value::F64(a), Value::I64(b)) => Value::F64(a + *b as f64),
            (Value::F64(a), Value::F64(b)) => Value::F64(a + b),
            _ => {
                log::error!("Sum {} or {} is not a number", total, number);
                return Err(CollectionError::new(
                    &format!("Sum {} or {} is not a number", total, number),
                    ErrorKind::InternalError,
                ));
            }
        };
    }
    Ok(total)
}

fn average(total: Value, count: usize) -> CollectionResult<f64> {
    if count == 0 {
        log::error!("Cannot average an empty collection");
        return Err(CollectionError::new(
            "Cannot average an empty collection",
            ErrorKind::DivisionByZero,
        ));
    }

    match total.as_number() {
        Some(total) => Ok(total / count as f64),
        None => {
            log::error!("Sum {} is not a number", total);
            Err(CollectionError::new(
                &format!("Sum {} is not a number", total),
                ErrorKind::InternalError,
            ))
        }
    }
}

impl<V> Collection<V> {
    /// Adds up all values.
    ///
    /// The sum is an `I64` while every value is an integer and the sum fits,
    /// an `F64` otherwise. An empty collection sums to `I64(0)`.
    /// Numeric strings such as `"5"` or `"2.5"` add as numbers; any other
    /// non-numeric value fails with [`ErrorKind::InvalidDataType`].
    pub fn sum(&self) -> CollectionResult<Value>
    where
        V: Convertible,
    {
        add_numbers(self.values().map(|value| value.to_value()))
    }

    /// Adds up `field` of every item, see [`Collection::sum`].
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    /// use fluent_collection::record;
    ///
    /// let orders = Collection::from(vec![record! { qty: 2 }, record! { qty: 3 }]);
    /// assert_eq!(orders.sum_by("qty").unwrap().as_i64(), Some(5));
    /// ```
    pub fn sum_by(&self, field: &str) -> CollectionResult<Value>
    where
        V: FieldAccess,
    {
        add_numbers(self.values().map(|item| access(item, field, None)))
    }

    /// Mean of all values. An empty collection fails with
    /// [`ErrorKind::DivisionByZero`].
    pub fn avg(&self) -> CollectionResult<f64>
    where
        V: Convertible,
    {
        if self.is_empty() {
            return average(Value::I64(0), 0);
        }
        average(self.sum()?, self.count())
    }

    /// Mean of `field` over all items, see [`Collection::avg`].
    pub fn avg_by(&self, field: &str) -> CollectionResult<f64>
    where
        V: FieldAccess,
    {
        if self.is_empty() {
            return average(Value::I64(0), 0);
        }
        average(self.sum_by(field)?, self.count())
    }

    /// Groups entries by the string form of `field`.
    ///
    /// Buckets appear in the order their first member appears. With `keep_keys`
    /// the members keep their keys, otherwise they are keyed `0..n` per bucket.
    /// A field holding a sequence or a record cannot be a group key.
    pub fn group_by(&self, field: &str, keep_keys: bool) -> CollectionResult<Collection<Collection<V>>>
    where
        V: FieldAccess + Clone,
    {
        let mut groups: IndexMap<Key, Collection<V>> = IndexMap::new();
        for (key, item) in self.iter() {
            let group_key = Key::try_from(access(item, field, None)?)?;
            let bucket = groups.entry(group_key).or_default();
            if keep_keys {
                bucket.insert(key.clone(), item.clone());
            } else {
                bucket.add(item.clone());
            }
        }

        log::debug!("Grouped {} items by {} into {} groups", self.count(), field, groups.len());
        Ok(Self::derive(groups))
    }

    /// Groups entries by the key `f` computes for each item.
    /// Buckets are plain lists in encounter order.
    pub fn group_by_callback<K, F>(&self, mut f: F) -> Collection<Vec<V>>
    where
        V: Clone,
        K: Into<Key>,
        F: FnMut(&V) -> K,
    {
        let mut groups: IndexMap<Key, Vec<V>> = IndexMap::new();
        for item in self.values() {
            groups.entry(f(item).into()).or_default().push(item.clone());
        }
        Self::derive(groups)
    }

    /// Replaces every item with its `field`, keeping the keys.
    pub fn pluck_column(&self, field: &str) -> CollectionResult<Collection<Value>>
    where
        V: FieldAccess,
    {
        let mut items = IndexMap::with_capacity(self.count());
        for (key, item) in self.iter() {
            items.insert(key.clone(), access(item, field, None)?);
        }
        Ok(Self::derive(items))
    }

    /// Re-keys the items by `field`.
    ///
    /// When two items produce the same key the later item wins, in the position
    /// of the earlier one.
    pub fn key_by(&self, field: &str) -> CollectionResult<Collection<V>>
    where
        V: FieldAccess + Clone,
    {
        let mut items = IndexMap::with_capacity(self.count());
        for item in self.values() {
            let key = Key::try_from(access(item, field, None)?)?;
            items.insert(key, item.clone());
        }
        Ok(Self::derive(items))
    }

    /// Splits the entries into runs of `size`, keeping their keys.
    ///
    /// The chunks are keyed `0..n` and only the last one may be shorter.
    /// A `size` of zero fails with [`ErrorKind::InvalidArgument`].
    ///
    /// ```rust
    /// use fluent_collection::collection;
    ///
    /// let chunks = collection![1, 2, 3, 4, 5].chunk(2).unwrap();
    /// assert_eq!(chunks.count(), 3);
    /// assert_eq!(chunks[2].get(4), Some(&5));
    /// ```
    pub fn chunk(&self, size: usize) -> CollectionResult<Collection<Collection<V>>>
    where
        V: Clone,
    {
        if size == 0 {
            log::error!("Chunk size must be a positive integer");
            return Err(CollectionError::new(
                "Chunk size must be a positive integer",
                ErrorKind::InvalidArgument,
            ));
        }

        let chunked = self.iter().chunks(size);
        let chunks = chunked
            .into_iter()
            .map(|chunk| {
                let items: IndexMap<Key, V> = chunk
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();
                Self::derive(items)
            })
            .collect::<Vec<_>>();
        Ok(Collection::from(chunks))
    }
}
