use fluent_collection::common::{access, FieldAccess, Value};
use fluent_collection::errors::{CollectionError, CollectionResult, ErrorKind};
use fluent_collection::filter::{field, Filter, FilterProvider};
use fluent_collection_int_test::test_util::{coffee_objects, coffees, run_test};
use std::any::Any;
use std::fmt::{Display, Formatter};

#[ctor::ctor]
fn init() {
    colog::init();
}

/// Matches items whose numeric field lies in `[low, high]`.
struct BetweenFilter {
    field_name: String,
    low: f64,
    high: f64,
}

impl Display for BetweenFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} in [{}, {}])", self.field_name, self.low, self.high)
    }
}

impl FilterProvider for BetweenFilter {
    fn apply(&self, entry: &dyn FieldAccess) -> CollectionResult<bool> {
        let value = access(entry, &self.field_name, None)?;
        Ok(value
            .as_number()
            .is_some_and(|n| n >= self.low && n <= self.high))
    }

    fn validate(&self) -> CollectionResult<()> {
        if self.low > self.high {
            return Err(CollectionError::new(
                &format!("Empty range in {}", self),
                ErrorKind::InvalidArgument,
            ));
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn between(field_name: &str, low: f64, high: f64) -> Filter {
    Filter::new(BetweenFilter {
        field_name: field_name.to_string(),
        low,
        high,
    })
}

#[test]
fn test_custom_filter() {
    run_test(coffees, |col| {
        let mid = col.find(&between("cost", 5.0, 7.5))?;
        assert_eq!(mid.count(), 2);
        assert_eq!(mid[1].get("name"), Some(&Value::from("Decaf")));
        Ok(())
    })
}

#[test]
fn test_custom_filter_composes() {
    run_test(coffee_objects, |col| {
        let filter = between("cost", 4.0, 8.0).and(field("name").contains("a"));
        assert_eq!(filter.to_string(), "((cost in [4, 8]) && (name contains \"a\"))");

        let found = col.find(&filter)?;
        let names: Vec<&str> = found.values().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Black", "Decaf", "Cappuccino"]);

        let found = col.find(&between("cost", 4.0, 8.0).not())?;
        assert_eq!(found.count(), 1);
        Ok(())
    })
}

#[test]
fn test_custom_filter_validation() {
    run_test(coffees, |col| {
        let err = col.find(&between("cost", 8.0, 4.0)).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidArgument);

        // validation runs before any item is read
        let empty = col.filter(|_, _| false);
        assert!(empty.find(&between("cost", 8.0, 4.0)).is_err());
        Ok(())
    })
}
