use crate::common::Record;
use crate::errors::{CollectionError, CollectionResult, ErrorKind};
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};

/// Compare two floats for equality with NaN equal to itself.
#[inline]
fn num_eq_float(a: f64, b: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        true
    } else {
        a == b
    }
}

/// Compare two floats with NaN ordered after every other value.
#[inline]
fn num_cmp_float(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Parses a numeric string the way loose comparison sees it: surrounding
/// whitespace is ignored, `inf`/`nan` spellings are not numbers.
fn numeric_str(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty()
        || !trimmed.bytes().any(|b| b.is_ascii_digit())
        || !trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

fn format_float(v: f64) -> String {
    if v.is_nan() {
        "NAN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "INF" } else { "-INF" }.to_string()
    } else if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

/// A dynamically typed item or field value.
///
/// `Value` is what a [`Collection`](crate::collection::Collection) hands to its
/// predicate and aggregation engine: either a scalar, a sequence or a
/// record-like [`Record`].
///
/// # Equality and ordering
///
/// `==` is *strict*: two values are equal only when they are the same variant
/// holding the same content, so `I64(5) != F64(5.0)` and `I64(5) != String("5")`.
/// Records and arrays are strictly equal only with the same entries in the same
/// order.
/// Coercive comparison is explicit, through [`Value::loose_eq`] and
/// [`Value::loose_cmp`].
///
/// `Ord` is a total order used by default sorting. Numbers compare numerically
/// across `I64` and `F64` (an integer sorts before an equal float); other values
/// compare within their own kind, and different kinds are ranked
/// `Null < Bool < number < String < Array < Record`.
///
/// # Usage
/// ```rust
/// use fluent_collection::common::Value;
/// use fluent_collection::val;
///
/// let v1: Value = 42.into();
/// let v2 = Value::from("hello");
/// let v3 = val!(4.5);
/// assert!(v1.is_integer() && v2.is_string() && v3.is_decimal());
/// ```
#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A record-like value with named fields.
    Record(Record),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => num_eq_float(*a, *b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::I64(a), Value::I64(b)) => a.cmp(b),
            (Value::F64(a), Value::F64(b)) => num_cmp_float(*a, *b),
            (Value::I64(a), Value::F64(b)) => num_cmp_float(*a as f64, *b).then(Ordering::Less),
            (Value::F64(a), Value::I64(b)) => {
                num_cmp_float(*a, *b as f64).then(Ordering::Greater)
            }
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a.cmp(b),
            (Value::Record(a), Value::Record(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl Value {
    /// Creates a [Value::Array] from a vector of convertible values.
    pub fn from_vec<T: Into<Value>>(values: Vec<T>) -> Value {
        Value::Array(values.into_iter().map(|v| v.into()).collect())
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the numeric value of [Value::I64] or [Value::F64] as `f64`.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::I64(v) => Some(*v as f64),
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as an `I64` or `F64`, reading numeric strings the way loose
    /// comparison does. Other kinds are not numbers.
    pub fn to_numeric(&self) -> Option<Value> {
        match self {
            Value::I64(_) | Value::F64(_) => Some(self.clone()),
            Value::String(s) => match s.trim().parse::<i64>() {
                Ok(v) => Some(Value::I64(v)),
                Err(_) => numeric_str(s).map(Value::F64),
            },
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Value::Record(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::I64(_))
    }

    #[inline]
    pub fn is_decimal(&self) -> bool {
        matches!(self, Value::F64(_))
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::I64(_) | Value::F64(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Short lowercase name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I64(_) => "i64",
            Value::F64(_) => "f64",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Record(_) => "record",
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::I64(_) | Value::F64(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Record(_) => 5,
        }
    }

    /// Takes the value, leaving [Value::Null] in its place.
    pub fn take(&mut self) -> Value {
        std::mem::replace(self, Value::Null)
    }

    /// Truthiness used by loose comparison against booleans and null.
    ///
    /// `Null`, `false`, `0`, `0.0`, `""`, `"0"` and empty arrays or records are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(v) => *v,
            Value::I64(v) => *v != 0,
            Value::F64(v) => *v != 0.0,
            Value::String(v) => !(v.is_empty() || v == "0"),
            Value::Array(v) => !v.is_empty(),
            Value::Record(v) => !v.is_empty(),
        }
    }

    /// The string form of a scalar value.
    ///
    /// This is the form used to derive group keys: `Null` and `false` become `""`,
    /// `true` becomes `"1"`, integral floats drop their fraction. Arrays and
    /// records have no string form.
    pub fn to_key_string(&self) -> CollectionResult<String> {
        match self {
            Value::Null => Ok(String::new()),
            Value::Bool(true) => Ok("1".to_string()),
            Value::Bool(false) => Ok(String::new()),
            Value::I64(v) => Ok(v.to_string()),
            Value::F64(v) => Ok(format_float(*v)),
            Value::String(v) => Ok(v.clone()),
            Value::Array(_) | Value::Record(_) => {
                log::error!("Value {} of kind {} has no string form", self, self.kind_name());
                Err(CollectionError::new(
                    &format!("A value of kind {} has no string form", self.kind_name()),
                    ErrorKind::InvalidDataType,
                ))
            }
        }
    }

    /// Coercive ordering.
    ///
    /// * numbers compare numerically
    /// * two strings compare numerically when both are numeric, bytewise otherwise
    /// * a number and a numeric string compare numerically, otherwise the number's
    ///   string form is compared with the string
    /// * anything against a bool compares truthiness
    /// * null against a string compares `""` with it, null against anything else
    ///   compares `false` with its truthiness
    /// * arrays compare by length, then element by element
    ///
    /// Any other pairing is incomparable and yields `None`.
    pub fn loose_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(_), _) | (_, Value::Bool(_)) => {
                Some(self.is_truthy().cmp(&other.is_truthy()))
            }
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Null, Value::String(s)) => Some("".cmp(s.as_str())),
            (Value::String(s), Value::Null) => Some(s.as_str().cmp("")),
            (Value::Null, _) => Some(false.cmp(&other.is_truthy())),
            (_, Value::Null) => Some(self.is_truthy().cmp(&false)),
            (Value::I64(a), Value::I64(b)) => Some(a.cmp(b)),
            (Value::I64(_) | Value::F64(_), Value::I64(_) | Value::F64(_)) => {
                let (a, b) = (self.as_number()?, other.as_number()?);
                a.partial_cmp(&b)
            }
            (Value::String(a), Value::String(b)) => match (numeric_str(a), numeric_str(b)) {
                (Some(x), Some(y)) => x.partial_cmp(&y),
                _ => Some(a.cmp(b)),
            },
            (Value::String(s), Value::I64(_) | Value::F64(_)) => {
                let number = other.as_number()?;
                match numeric_str(s) {
                    Some(x) => x.partial_cmp(&number),
                    None => other.to_key_string().ok().map(|n| s.as_str().cmp(n.as_str())),
                }
            }
            (Value::I64(_) | Value::F64(_), Value::String(_)) => {
                other.loose_cmp(self).map(Ordering::reverse)
            }
            (Value::Array(a), Value::Array(b)) => {
                if a.len() != b.len() {
                    return Some(a.len().cmp(&b.len()));
                }
                for (x, y) in a.iter().zip(b.iter()) {
                    match x.loose_cmp(y)? {
                        Ordering::Equal => continue,
                        ordering => return Some(ordering),
                    }
                }
                Some(Ordering::Equal)
            }
            _ => None,
        }
    }

    /// Coercive equality, see [`Value::loose_cmp`].
    ///
    /// Records are loosely equal when they have the same field names and every
    /// field is loosely equal.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Record(a), Value::Record(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(name, v)| b.get(name).is_some_and(|o| v.loose_eq(o)))
            }
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.loose_eq(y))
            }
            _ => self.loose_cmp(other) == Some(Ordering::Equal),
        }
    }

    /// Strict or loose equality, selected by `strict`.
    #[inline]
    pub fn equals(&self, other: &Value, strict: bool) -> bool {
        if strict {
            self == other
        } else {
            self.loose_eq(other)
        }
    }

    fn write_display(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "\"{}\"", v),
            Value::Array(v) => {
                write!(f, "[")?;
                for (i, value) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    value.write_display(f)?;
                }
                write!(f, "]")
            }
            Value::Record(v) => write!(f, "{}", v),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "bool({})", v),
            Value::I64(v) => write!(f, "i64({})", v),
            Value::F64(v) => write!(f, "f64({})", v),
            Value::String(v) => write!(f, "string(\"{}\")", v),
            Value::Array(v) => write!(f, "array({:?})", v),
            Value::Record(v) => write!(f, "record({:?})", v),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_display(f)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(value: $t) -> Self {
                    Value::I64(value as i64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

// values above i64::MAX fall back to a float
macro_rules! impl_from_wide_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(value: $t) -> Self {
                    match i64::try_from(value) {
                        Ok(v) => Value::I64(v),
                        Err(_) => Value::F64(value as f64),
                    }
                }
            }
        )*
    };
}

impl_from_wide_integer!(u64, usize);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::F64(value as f64)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(|v| v.into()).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::I64(v) => serializer.serialize_i64(*v),
            Value::F64(v) => serializer.serialize_f64(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::Array(v) => {
                let mut seq = serializer.serialize_seq(Some(v.len()))?;
                for value in v {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            Value::Record(v) => serde::Serialize::serialize(v, serializer),
        }
    }
}

/// Creates a [`Value`] from an expression through its `From` conversion.
///
/// ```rust
/// use fluent_collection::common::Value;
/// use fluent_collection::val;
///
/// assert_eq!(val!(42), Value::I64(42));
/// assert_eq!(val!("hello"), Value::String("hello".to_string()));
/// assert_eq!(val!(true), Value::Bool(true));
/// ```
#[macro_export]
macro_rules! val {
    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
