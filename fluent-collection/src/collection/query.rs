use super::Collection;
use crate::common::{FieldAccess, Key, Value};
use crate::errors::CollectionResult;
use crate::filter::{field_filter, is_all_filter, Filter, Operator};
use indexmap::IndexMap;

impl<V: FieldAccess + Clone> Collection<V> {
    /// Keeps the entries that match `filter`, with their keys.
    ///
    /// Items are read through [`FieldAccess`]. A record-like item without a
    /// field the filter reads fails the whole query with an access error.
    pub fn find(&self, filter: &Filter) -> CollectionResult<Collection<V>> {
        filter.validate()?;
        if is_all_filter(filter) {
            return Ok(self.clone());
        }

        let mut items = IndexMap::new();
        for (key, value) in self.iter() {
            if filter.apply(value)? {
                items.insert(key.clone(), value.clone());
            }
        }

        log::debug!("Filter {} matched {} of {} items", filter, items.len(), self.count());
        Ok(Self::derive(items))
    }

    /// Keeps the entries whose `field` satisfies `operator` against `value`.
    ///
    /// `strict` selects strict or loose equality for [`Operator::Equals`] and
    /// strict or loose membership for [`Operator::Contains`]. Ordering operators
    /// always compare loosely and drop incomparable values.
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    /// use fluent_collection::filter::Operator;
    /// use fluent_collection::record;
    ///
    /// let people = Collection::from(vec![
    ///     record! { Name: "John", Age: 21 },
    ///     record! { Name: "Nathan", Age: 19 },
    /// ]);
    /// let adults = people.where_by("Age", 20, Operator::GreaterOrEqual, true).unwrap();
    /// assert_eq!(adults.count(), 1);
    /// ```
    pub fn where_by(
        &self,
        field: &str,
        value: impl Into<Value>,
        operator: Operator,
        strict: bool,
    ) -> CollectionResult<Collection<V>> {
        self.find(&field_filter(field, value.into(), operator, strict))
    }

    /// Like [`Collection::where_by`] with the operator spelled as text:
    /// `=`, `<`, `>`, `<=`, `>=`, `contains` or `matches`.
    pub fn where_op(
        &self,
        field: &str,
        value: impl Into<Value>,
        operator: &str,
        strict: bool,
    ) -> CollectionResult<Collection<V>> {
        let operator = operator.parse::<Operator>()?;
        self.where_by(field, value, operator, strict)
    }

    pub fn where_equals(
        &self,
        field: &str,
        value: impl Into<Value>,
        strict: bool,
    ) -> CollectionResult<Collection<V>> {
        self.where_by(field, value, Operator::Equals, strict)
    }

    pub fn where_less(&self, field: &str, value: impl Into<Value>) -> CollectionResult<Collection<V>> {
        self.where_by(field, value, Operator::Less, true)
    }

    pub fn where_less_or_equal(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> CollectionResult<Collection<V>> {
        self.where_by(field, value, Operator::LessOrEqual, true)
    }

    pub fn where_greater(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> CollectionResult<Collection<V>> {
        self.where_by(field, value, Operator::Greater, true)
    }

    pub fn where_greater_or_equal(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> CollectionResult<Collection<V>> {
        self.where_by(field, value, Operator::GreaterOrEqual, true)
    }

    /// Keeps entries whose string field contains the value's string form, or
    /// whose sequence or record field has the value as a member.
    /// Fields of any other shape never match.
    pub fn where_contains(
        &self,
        field: &str,
        value: impl Into<Value>,
        strict: bool,
    ) -> CollectionResult<Collection<V>> {
        self.where_by(field, value, Operator::Contains, strict)
    }

    /// Keeps entries whose string field matches the regular expression `pattern`.
    pub fn where_matches(&self, field: &str, pattern: &str) -> CollectionResult<Collection<V>> {
        self.where_by(field, pattern, Operator::Matches, true)
    }

    /// Keys of the entries that match `filter`, in order.
    pub fn find_keys(&self, filter: &Filter) -> CollectionResult<Vec<Key>> {
        filter.validate()?;
        let mut keys = Vec::new();
        for (key, value) in self.iter() {
            if filter.apply(value)? {
                keys.push(key.clone());
            }
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Record;
    use crate::errors::ErrorKind;
    use crate::filter::{all, field};
    use crate::{record, val};

    fn coffees() -> Collection<Record> {
        Collection::from(vec![
            record! { name: "Black", cost: 4.50, ingredients: [] },
            record! { name: "Decaf", cost: 5, ingredients: [] },
            record! { name: "Cappuccino", cost: 7.50, ingredients: ["Espresso", "Milk", "Foam"] },
            record! { name: "Submarine", cost: 9.99, ingredients: ["Espresso", "Ice cream", "Milk"] },
        ])
    }

    fn int_keys<V>(collection: &Collection<V>) -> Vec<u64> {
        collection.keys().filter_map(Key::as_int).collect()
    }

    #[test]
    fn test_where_equals_strict() {
        let decaf = coffees().where_equals("cost", 5, true).unwrap();
        assert_eq!(int_keys(&decaf), vec![1]);
        assert!(coffees().where_equals("cost", "5", true).unwrap().is_empty());
    }

    #[test]
    fn test_where_equals_loose() {
        let decaf = coffees().where_equals("cost", "5", false).unwrap();
        assert_eq!(decaf.count(), 1);
        assert_eq!(decaf[1].get("name"), Some(&val!("Decaf")));
    }

    #[test]
    fn test_where_equals_empty_sequence() {
        let plain = coffees().where_equals("ingredients", Value::Array(vec![]), true).unwrap();
        assert_eq!(int_keys(&plain), vec![0, 1]);
    }

    #[test]
    fn test_ordering_wrappers() {
        assert_eq!(coffees().where_less("cost", 7.51).unwrap().count(), 3);
        assert_eq!(coffees().where_less_or_equal("cost", 7.50).unwrap().count(), 3);
        assert_eq!(coffees().where_greater("cost", 5).unwrap().count(), 2);
        assert_eq!(coffees().where_greater_or_equal("cost", 5).unwrap().count(), 3);
    }

    #[test]
    fn test_where_contains() {
        let with_e = coffees().where_contains("name", "e", true).unwrap();
        assert_eq!(int_keys(&with_e), vec![1, 3]);

        let with_milk = coffees().where_contains("ingredients", "Milk", true).unwrap();
        assert_eq!(int_keys(&with_milk), vec![2, 3]);

        let by_number = coffees().where_contains("cost", 5, true).unwrap();
        assert!(by_number.is_empty());
    }

    #[test]
    fn test_where_matches() {
        let espresso = coffees().where_matches("name", "^(Cap|Sub)").unwrap();
        assert_eq!(int_keys(&espresso), vec![2, 3]);

        let err = coffees().where_matches("name", "([").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::FilterError);

        let empty: Collection<Record> = Collection::new();
        assert!(empty.where_matches("name", "([").is_err());
    }

    #[test]
    fn test_where_op_parses_operators() {
        let cheap = coffees().where_op("cost", 5, "<=", true).unwrap();
        assert_eq!(cheap.count(), 2);
        let err = coffees().where_op("cost", 5, "<>", true).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::FilterError);
    }

    #[test]
    fn test_where_missing_field_fails() {
        let err = coffees().where_less("size", 10).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::AccessError);
    }

    #[test]
    fn test_where_on_scalars_reads_null() {
        let numbers = Collection::from(vec![1, 2, 3]);
        assert!(numbers.where_equals("anything", 1, true).unwrap().is_empty());
        assert_eq!(numbers.where_equals("anything", Value::Null, true).unwrap().count(), 3);
    }

    #[test]
    fn test_where_chains() {
        let result = coffees()
            .where_greater("cost", 5)
            .and_then(|c| c.where_contains("name", "Sub", true))
            .unwrap();
        assert_eq!(int_keys(&result), vec![3]);
    }

    #[test]
    fn test_find_with_composed_filter() {
        let filter = field("cost").lt(8).and(field("ingredients").contains("Milk").not());
        let result = coffees().find(&filter).unwrap();
        assert_eq!(int_keys(&result), vec![0, 1]);
    }

    #[test]
    fn test_find_all() {
        assert_eq!(coffees().find(&all()).unwrap(), coffees());
    }

    #[test]
    fn test_find_keys() {
        let keys = coffees().find_keys(&field("cost").gt(7)).unwrap();
        assert_eq!(keys, vec![Key::Int(2), Key::Int(3)]);
    }

    #[test]
    fn test_query_does_not_mutate() {
        let original = coffees();
        let _ = original.where_less("cost", 5).unwrap();
        assert_eq!(original, coffees());
    }
}
