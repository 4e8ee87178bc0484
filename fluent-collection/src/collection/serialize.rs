use super::Collection;
use crate::common::{Convertible, Value};
use crate::errors::CollectionResult;

impl<V: Convertible> Collection<V> {
    /// The plain, serializable form of the collection.
    ///
    /// A [`Value::Array`] of the values in iteration order; keys are dropped.
    /// Items are converted with [`Convertible`], so nested collections turn into
    /// nested arrays.
    ///
    /// ```rust
    /// use fluent_collection::collection;
    /// use fluent_collection::common::Value;
    ///
    /// let colors = collection!["Negro" => "Black", "Blanco" => "White"];
    /// assert_eq!(
    ///     colors.to_serializable().unwrap(),
    ///     Value::from(vec!["Black", "White"])
    /// );
    /// ```
    pub fn to_serializable(&self) -> CollectionResult<Value> {
        let values = self
            .values()
            .map(|value| value.to_value())
            .collect::<CollectionResult<Vec<Value>>>()?;
        Ok(Value::Array(values))
    }
}

impl<V: Convertible> Convertible for Collection<V> {
    fn to_value(&self) -> CollectionResult<Value> {
        self.to_serializable()
    }
}

#[cfg(feature = "serde")]
impl<V: Convertible> serde::Serialize for Collection<V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self
            .to_serializable()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serde::Serialize::serialize(&value, serializer)
    }
}
