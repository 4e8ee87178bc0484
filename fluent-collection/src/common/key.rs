use crate::common::Value;
use crate::errors::{CollectionError, CollectionResult};
use std::fmt::{Debug, Display, Formatter};

/// Key of a collection entry: a non-negative integer or a string.
///
/// A string spelled as the canonical decimal form of a non-negative integer is
/// the same key as that integer, so `Key::from("21") == Key::from(21)`.
/// Leading zeros, signs and whitespace make a string key (`"021"`, `"+1"`).
/// Negative integers have no integer form and become string keys (`-1` -> `"-1"`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(u64),
    Str(String),
}

impl Key {
    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    #[inline]
    pub fn as_int(&self) -> Option<u64> {
        match self {
            Key::Int(v) => Some(*v),
            Key::Str(_) => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(v) => Some(v),
        }
    }
}

fn canonical_int(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    s.parse::<u64>().ok()
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match canonical_int(value) {
            Some(v) => Key::Int(v),
            None => Key::Str(value.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_int(&value) {
            Some(v) => Key::Int(v),
            None => Key::Str(value),
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::from(value.as_str())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                #[inline]
                fn from(value: $t) -> Self {
                    Key::Int(value as u64)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                #[inline]
                fn from(value: $t) -> Self {
                    if value >= 0 {
                        Key::Int(value as u64)
                    } else {
                        Key::Str(value.to_string())
                    }
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);

impl TryFrom<&Value> for Key {
    type Error = CollectionError;

    /// Converts a scalar value through its string form.
    /// Arrays and records cannot be keys.
    fn try_from(value: &Value) -> CollectionResult<Self> {
        let key = value.to_key_string()?;
        Ok(Key::from(key))
    }
}

impl TryFrom<Value> for Key {
    type Error = CollectionError;

    fn try_from(value: Value) -> CollectionResult<Self> {
        match value {
            Value::String(s) => Ok(Key::from(s)),
            other => Key::try_from(&other),
        }
    }
}

impl From<&Key> for Value {
    fn from(value: &Key) -> Self {
        match value {
            Key::Int(v) => Value::from(*v),
            Key::Str(v) => Value::String(v.clone()),
        }
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        match value {
            Key::Int(v) => Value::from(v),
            Key::Str(v) => Value::String(v),
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Int(v) => write!(f, "{}", v),
            Key::Str(v) => write!(f, "{}", v),
        }
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Int(v) => write!(f, "{}", v),
            Key::Str(v) => write!(f, "{:?}", v),
        }
    }
}
