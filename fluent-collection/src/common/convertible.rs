use crate::common::{Key, Record, Value};
use crate::errors::CollectionResult;

/// Conversion of an item into a [`Value`].
///
/// Used by numeric aggregation (`sum`, `avg`) and by the serialization view of a
/// collection. Conversion may fail for user types that cannot be represented.
pub trait Convertible {
    fn to_value(&self) -> CollectionResult<Value>;
}

impl Convertible for Value {
    fn to_value(&self) -> CollectionResult<Value> {
        Ok(self.clone())
    }
}

impl Convertible for Record {
    fn to_value(&self) -> CollectionResult<Value> {
        Ok(Value::Record(self.clone()))
    }
}

impl Convertible for Key {
    fn to_value(&self) -> CollectionResult<Value> {
        Ok(Value::from(self))
    }
}

impl Convertible for str {
    fn to_value(&self) -> CollectionResult<Value> {
        Ok(Value::from(self))
    }
}

impl<T: Convertible> Convertible for Vec<T> {
    fn to_value(&self) -> CollectionResult<Value> {
        let items = self
            .iter()
            .map(|item| item.to_value())
            .collect::<CollectionResult<Vec<Value>>>()?;
        Ok(Value::Array(items))
    }
}

impl<T: Convertible> Convertible for Option<T> {
    fn to_value(&self) -> CollectionResult<Value> {
        match self {
            Some(v) => v.to_value(),
            None => Ok(Value::Null),
        }
    }
}

impl<T: Convertible + ?Sized> Convertible for &T {
    fn to_value(&self) -> CollectionResult<Value> {
        (**self).to_value()
    }
}

impl<T: Convertible + ?Sized> Convertible for Box<T> {
    fn to_value(&self) -> CollectionResult<Value> {
        (**self).to_value()
    }
}

macro_rules! impl_convertible_copy {
    ($($t:ty),*) => {
        $(
            impl Convertible for $t {
                #[inline]
                fn to_value(&self) -> CollectionResult<Value> {
                    Ok(Value::from(*self))
                }
            }
        )*
    };
}

impl_convertible_copy!(bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, char);

impl Convertible for isize {
    fn to_value(&self) -> CollectionResult<Value> {
        Ok(Value::I64(*self as i64))
    }
}

impl Convertible for String {
    fn to_value(&self) -> CollectionResult<Value> {
        Ok(Value::String(self.clone()))
    }
}
