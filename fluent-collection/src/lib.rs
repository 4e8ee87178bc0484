//! # Fluent Collection
//!
//! An ordered key-value container with a fluent, chainable query API.
//!
//! A [`Collection`] keeps its entries in insertion order and assigns
//! auto-incrementing integer keys to values added without a key. Every query
//! returns a new collection, so calls chain freely.
//!
//! ## Quick Start
//!
//! ```rust
//! use fluent_collection::{collection, record, Collection, Value};
//! use fluent_collection::filter::field;
//!
//! # fn main() -> fluent_collection::errors::CollectionResult<()> {
//! let coffees = Collection::from(vec![
//!     record! { name: "Black", cost: 4.5, ingredients: [] },
//!     record! { name: "Cappuccino", cost: 7.5, ingredients: ["Espresso", "Milk"] },
//!     record! { name: "Submarine", cost: 9.0, ingredients: ["Espresso", "Chocolate"] },
//! ]);
//!
//! // filter on a field
//! let cheap = coffees.where_less("cost", 8)?;
//! assert_eq!(cheap.count(), 2);
//!
//! // composed filters
//! let milky = coffees.find(&field("ingredients").contains("Milk"))?;
//! assert_eq!(milky.pluck_column("name")?.values().next(), Some(&Value::from("Cappuccino")));
//!
//! // aggregation
//! assert_eq!(coffees.sum_by("cost")?, Value::from(21.0));
//!
//! // plain values work too
//! let numbers = collection![1, 2, 3, 4, 5];
//! assert_eq!(numbers.filter(|n, _| n % 2 == 1).count(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - The collection container and its operations
//! - [`common`] - Values, records, keys, field access and sort options
//! - [`config`] - The embedded field path separator
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Query filters and the fluent filter builder

pub mod collection;
pub mod common;
pub mod config;
pub mod errors;
pub mod filter;

pub use collection::{Collection, SharedCollection};
pub use common::{access, Convertible, Field, FieldAccess, Key, Record, SortOptions, SortOrder, Value};
pub use errors::{CollectionError, CollectionResult, ErrorKind};
pub use filter::{field, Filter, Operator};
