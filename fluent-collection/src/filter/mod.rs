//! Predicates over collection items.
//!
//! Filters are built with the fluent API and combined with logical operators:
//! - `field("cost").lt(7.5)` - comparison operators
//! - `field("name").eq("Black")` - strict equality, `loose_eq` for loose equality
//! - `field("ingredients").contains("Milk")` - substring or membership
//! - `field("name").matches("^C")` - regular expressions
//! - `all()` - match every item
//! - `field("cost").lt(7.5).and(field("name").contains("e"))` - logical AND
//!
//! A filter is applied with [`Collection::find`](crate::collection::Collection::find);
//! the `where_*` methods of a collection build the same filters internally.
//!
//! ```rust
//! use fluent_collection::collection::Collection;
//! use fluent_collection::filter::field;
//! use fluent_collection::record;
//!
//! let people = Collection::from_values(vec![
//!     record! { Name: "John", Age: 21 },
//!     record! { Name: "Nathan", Age: 19 },
//! ]);
//! let adults = people.find(&field("Age").gte(20)).unwrap();
//! assert_eq!(adults.count(), 1);
//! ```

mod filter;
mod fluent;
mod operator;

mod field_filters;
mod logical_filters;
mod pattern_filters;

pub(crate) use field_filters::*;
pub use filter::*;
pub use fluent::*;
pub(crate) use logical_filters::*;
pub use operator::*;
pub(crate) use pattern_filters::*;
