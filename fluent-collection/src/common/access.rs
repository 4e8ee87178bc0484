use crate::common::{Convertible, Record, Value};
use crate::errors::{CollectionError, CollectionResult, ErrorKind};

/// Outcome of reading a named field from an item.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// The item has the field.
    Present(Value),
    /// The item is record-like or sequence-like but has no such field.
    Absent,
    /// The item is a scalar and has no fields at all.
    Scalar,
}

/// Read access to the named fields of a collection item.
///
/// Every keyed operation of a [`Collection`](crate::collection::Collection)
/// (`where_*`, `sum_by`, `group_by`, `sort_by`, ...) reads item fields through
/// this trait, so items of any shape can be queried:
///
/// * records answer with their fields, embedded paths included
/// * sequences answer numeric field names with the element at that index
/// * scalars answer [`Field::Scalar`]
///
/// User types expose their fields by implementing it.
///
/// ```rust
/// use fluent_collection::common::{Field, FieldAccess, Value};
/// use fluent_collection::errors::CollectionResult;
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl FieldAccess for Person {
///     fn field(&self, name: &str) -> CollectionResult<Field> {
///         Ok(match name {
///             "name" => Field::Present(Value::from(&self.name)),
///             "age" => Field::Present(Value::from(self.age)),
///             _ => Field::Absent,
///         })
///     }
/// }
///
/// let person = Person { name: "July".to_string(), age: 21 };
/// assert_eq!(person.field("age").unwrap(), Field::Present(Value::I64(21)));
/// ```
pub trait FieldAccess {
    fn field(&self, name: &str) -> CollectionResult<Field>;
}

/// Reads `field` from `item`.
///
/// A present field yields its value. An absent field yields `default`, or an
/// [`ErrorKind::AccessError`] when no default is given. A scalar item has no
/// fields and yields `default`, or [`Value::Null`].
pub fn access<T: FieldAccess + ?Sized>(
    item: &T,
    field: &str,
    default: Option<Value>,
) -> CollectionResult<Value> {
    match item.field(field)? {
        Field::Present(value) => Ok(value),
        Field::Scalar => Ok(default.unwrap_or_default()),
        Field::Absent => match default {
            Some(value) => Ok(value),
            None => {
                log::error!("Field '{}' does not exist on item", field);
                Err(CollectionError::new(
                    &format!("Field '{}' does not exist on item", field),
                    ErrorKind::AccessError,
                ))
            }
        },
    }
}

fn index_field<V, F>(items: &[V], name: &str, convert: F) -> CollectionResult<Field>
where
    F: Fn(&V) -> CollectionResult<Value>,
{
    match name.parse::<usize>().ok().and_then(|index| items.get(index)) {
        Some(item) => Ok(Field::Present(convert(item)?)),
        None => Ok(Field::Absent),
    }
}

impl FieldAccess for Record {
    fn field(&self, name: &str) -> CollectionResult<Field> {
        Ok(match self.get(name) {
            Some(value) => Field::Present(value.clone()),
            None => Field::Absent,
        })
    }
}

impl FieldAccess for Value {
    fn field(&self, name: &str) -> CollectionResult<Field> {
        match self {
            Value::Record(record) => record.field(name),
            Value::Array(items) => index_field(items, name, |v| Ok(v.clone())),
            _ => Ok(Field::Scalar),
        }
    }
}

impl<V: Convertible> FieldAccess for Vec<V> {
    fn field(&self, name: &str) -> CollectionResult<Field> {
        index_field(self, name, |v| v.to_value())
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn field(&self, name: &str) -> CollectionResult<Field> {
        (**self).field(name)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for Box<T> {
    fn field(&self, name: &str) -> CollectionResult<Field> {
        (**self).field(name)
    }
}

macro_rules! impl_scalar_access {
    ($($t:ty),*) => {
        $(
            impl FieldAccess for $t {
                #[inline]
                fn field(&self, _name: &str) -> CollectionResult<Field> {
                    Ok(Field::Scalar)
                }
            }
        )*
    };
}

impl_scalar_access!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, char, String, str
);
