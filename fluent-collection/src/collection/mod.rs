//! The [`Collection`] container and its query API.
//!
//! A `Collection` is an ordered mapping of [`Key`](crate::common::Key)s to values.
//! Its operations fall into a few groups:
//!
//! - container: `add`, `add_keyed`, `insert`, `get`, `remove`, indexing, iteration
//! - transforms: `map`, `each`, `filter`, `filter_with`, `reduce`
//! - queries: `where_by` and the `where_*` wrappers, `find` with a composed [`Filter`](crate::filter::Filter)
//! - aggregation and reshaping: `sum`, `avg`, `group_by`, `key_by`, `pluck_column`, `chunk`
//! - ordering: `sort`, `sort_with`, `sort_by`, `reverse`
//! - serialization: `to_serializable` and, with the `serde` feature, `serde::Serialize`
//!
//! ```rust
//! use fluent_collection::collection::Collection;
//! use fluent_collection::record;
//!
//! let people = Collection::from(vec![
//!     record! { Name: "John", Age: 21 },
//!     record! { Name: "Nathan", Age: 19 },
//!     record! { Name: "July", Age: 21 },
//! ]);
//!
//! let by_age = people.group_by("Age", false).unwrap();
//! assert_eq!(by_age[21].count(), 2);
//!
//! let average = people.avg_by("Age").unwrap();
//! assert!((average - 20.333).abs() < 0.001);
//! ```

mod aggregate;
mod collection;
mod query;
mod serialize;
mod shared;
mod sort;
mod transform;

pub use collection::*;
pub use shared::*;
