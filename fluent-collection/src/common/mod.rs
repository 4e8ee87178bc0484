//! Building blocks shared by the collection and the filter engine.
//!
//! - [`Value`] and [`Record`] model heterogeneous items and their fields.
//! - [`Key`] is the key type of a [`Collection`](crate::collection::Collection).
//! - [`FieldAccess`] and [`access`] read named fields from items of any shape.
//! - [`Convertible`] turns items into [`Value`]s for aggregation and serialization.
//! - [`SortOrder`] and [`SortOptions`] control field sorting.
//! - [`Atomic`] provides the lock used to share a collection between threads.

mod access;
mod convertible;
mod key;
mod lock;
mod record;
mod sort_order;
mod value;

pub use access::*;
pub use convertible::*;
pub use key::*;
pub use lock::*;
pub use record::*;
pub use sort_order::*;
pub use value::*;
