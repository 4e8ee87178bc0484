use crate::common::{ReadExecutor, Value};
use crate::config::FIELD_SEPARATOR;
use crate::errors::{CollectionError, CollectionResult, ErrorKind};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

type FieldVec = SmallVec<[String; 8]>;

/// A record-like item: an ordered set of named fields.
///
/// Field names are non-empty strings. Lookups accept embedded paths joined by the
/// field separator (default `.`), so `record.get("author.name")` reads the `name`
/// field of the nested `author` record and `record.get("genres.0")` reads the first
/// element of the `genres` array. A top-level field always wins over an embedded
/// path with the same spelling.
///
/// Field storage is reference counted; cloning a record is cheap and the first
/// mutation of a shared record copies its fields.
///
/// `==` is strict: two records are equal when they hold the same fields, in the
/// same order, with strictly equal values. [`Value::loose_eq`] ignores field order.
#[derive(Clone, Default)]
pub struct Record {
    data: Arc<IndexMap<String, Value>>,
}

impl Record {
    pub fn new() -> Self {
        Record {
            data: Arc::new(IndexMap::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Sets a field, creating intermediate records for embedded paths.
    ///
    /// An existing field keeps its position. Empty field names, or empty
    /// segments in an embedded path, are rejected with
    /// [`ErrorKind::InvalidArgument`].
    ///
    /// ```rust
    /// use fluent_collection::common::{Record, Value};
    ///
    /// let mut record = Record::new();
    /// record.put("name", "Fluent Python").unwrap();
    /// record.put("author.country", "Brazil").unwrap();
    /// assert_eq!(record.get("author.country"), Some(&Value::from("Brazil")));
    /// ```
    pub fn put<T: Into<Value>>(&mut self, key: &str, value: T) -> CollectionResult<()> {
        if key.is_empty() {
            log::error!("Record does not support empty field name");
            return Err(CollectionError::new(
                "Record does not support empty field name",
                ErrorKind::InvalidArgument,
            ));
        }

        let separator = FIELD_SEPARATOR.read_with(|sep| sep.clone());
        if key.contains(separator.as_str()) {
            let splits: Vec<&str> = key.split(separator.as_str()).collect();
            self.deep_put(&splits, value.into())
        } else {
            Arc::make_mut(&mut self.data).insert(key.to_string(), value.into());
            Ok(())
        }
    }

    /// Reads a field or an embedded path. Returns `None` when nothing is there.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.data.get(key) {
            Some(value) => Some(value),
            None => {
                let separator = FIELD_SEPARATOR.read_with(|sep| sep.clone());
                if key.contains(separator.as_str()) {
                    let splits: Vec<&str> = key.split(separator.as_str()).collect();
                    self.deep_get(&splits)
                } else {
                    None
                }
            }
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes a top-level field or the last segment of an embedded path,
    /// returning the removed value. Remaining fields keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        if self.data.contains_key(key) {
            return Arc::make_mut(&mut self.data).shift_remove(key);
        }

        let separator = FIELD_SEPARATOR.read_with(|sep| sep.clone());
        if !key.contains(separator.as_str()) {
            return None;
        }

        let splits: Vec<&str> = key.split(separator.as_str()).collect();
        self.deep_remove(&splits)
    }

    /// All field paths, top-level and embedded, in field order.
    pub fn fields(&self) -> FieldVec {
        self.fields_with_prefix("")
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.data.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.data.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.data.values()
    }

    fn fields_with_prefix(&self, prefix: &str) -> FieldVec {
        let separator = FIELD_SEPARATOR.read_with(|sep| sep.clone());
        let mut fields = FieldVec::new();

        for (key, value) in self.data.iter() {
            let field = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}{}{}", prefix, separator, key)
            };

            match value {
                Value::Record(nested) if !nested.is_empty() => {
                    fields.extend(nested.fields_with_prefix(&field));
                }
                _ => fields.push(field),
            }
        }
        fields
    }

    fn deep_get(&self, splits: &[&str]) -> Option<&Value> {
        let (first, rest) = splits.split_first()?;
        let mut current = self.data.get(*first)?;

        for segment in rest {
            current = match current {
                Value::Record(record) => record.data.get(*segment)?,
                Value::Array(items) => {
                    let index = segment.parse::<usize>().ok()?;
                    items.get(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }

    fn deep_put(&mut self, splits: &[&str], value: Value) -> CollectionResult<()> {
        let (key, rest) = match splits.split_first() {
            Some((key, rest)) if !key.is_empty() => (*key, rest),
            _ => {
                log::error!("Record does not support empty field name in embedded path");
                return Err(CollectionError::new(
                    "Record does not support empty field name in embedded path",
                    ErrorKind::InvalidArgument,
                ));
            }
        };

        let data = Arc::make_mut(&mut self.data);
        if rest.is_empty() {
            data.insert(key.to_string(), value);
            return Ok(());
        }

        let entry = data.entry(key.to_string()).or_insert(Value::Null);
        if !entry.is_record() {
            // anything that is not a record is replaced by a fresh one
            *entry = Value::Record(Record::new());
        }
        match entry.as_record_mut() {
            Some(nested) => nested.deep_put(rest, value),
            None => {
                log::error!("Failed to create embedded record for {}", key);
                Err(CollectionError::new(
                    &format!("Failed to create embedded record for {}", key),
                    ErrorKind::InternalError,
                ))
            }
        }
    }

    fn deep_remove(&mut self, splits: &[&str]) -> Option<Value> {
        let (key, rest) = splits.split_first()?;
        if rest.is_empty() {
            return Arc::make_mut(&mut self.data).shift_remove(*key);
        }

        match Arc::make_mut(&mut self.data).get_mut(*key)? {
            Value::Record(nested) => nested.deep_remove(rest),
            _ => None,
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len() && self.data.iter().eq(other.data.iter())
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.data.iter().cmp(other.data.iter())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let data: IndexMap<String, Value> = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Record {
            data: Arc::new(data),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl Debug for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.data.len()))?;
        for (key, value) in self.data.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[doc(hidden)]
pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// Creates a [`Record`] with a JSON-like syntax.
///
/// Field names may be bare identifiers or string literals. Values are literals,
/// nested `{ .. }` records, `[ .. ]` arrays, or parenthesized expressions.
///
/// ```rust
/// use fluent_collection::record;
///
/// let base = 4;
/// let coffee = record! {
///     name: "Cappuccino",
///     cost: 7.50,
///     size: (base * 2),
///     ingredients: ["Espresso", "Milk"],
///     origin: { country: "Italy" },
/// };
/// assert_eq!(coffee.len(), 5);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::common::Record::new()
    };

    ($($key:tt : $value:tt),* $(,)?) => {
        {
            let mut record = $crate::common::Record::new();
            $(
                record.put(&$crate::common::normalize(stringify!($key)), $crate::record_value!($value))
                    .expect(&format!("Failed to put field {} in record", stringify!($key)));
            )*
            record
        }
    };
}

/// Converts a single `record!` value token into a [`Value`].
#[macro_export]
macro_rules! record_value {
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::common::Value::Record($crate::record!{ $($key : $value),* })
    };

    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::record_value!($value)),*])
    };

    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
