use super::Collection;
use crate::common::{atomic, Atomic, Value};

/// A collection behind a shared reader-writer lock.
///
/// Reads go through [`ReadExecutor::read_with`](crate::common::ReadExecutor) and
/// mutations through [`WriteExecutor::write_with`](crate::common::WriteExecutor).
pub type SharedCollection<V = Value> = Atomic<Collection<V>>;

impl<V> Collection<V> {
    /// Moves the collection behind a lock so that threads can share it.
    ///
    /// ```rust
    /// use fluent_collection::collection;
    /// use fluent_collection::common::{ReadExecutor, WriteExecutor};
    ///
    /// let shared = collection![1, 2].into_shared();
    /// shared.write_with(|c| {
    ///     c.add(3);
    /// });
    /// assert_eq!(shared.read_with(|c| c.count()), 3);
    /// ```
    pub fn into_shared(self) -> SharedCollection<V> {
        atomic(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::collection;
    use crate::common::{ReadExecutor, WriteExecutor};
    use std::thread;

    #[test]
    fn test_shared_collection_across_threads() {
        let shared = collection![0].into_shared();

        let handles: Vec<_> = (1..=4)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.write_with(|c| {
                        c.add(i);
                    });
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.read_with(|c| c.count()), 5);
        assert_eq!(shared.read_with(|c| c.reduce(0, |carry, v, _| carry + *v)), 10);
    }

    #[test]
    fn test_readers_see_a_consistent_snapshot() {
        let shared = collection!["a" => 1, "b" => 2].into_shared();
        let doubled = shared.read_with(|c| c.map(|v, _| v * 2));
        shared.write_with(|c| {
            c.remove("a");
        });
        assert_eq!(doubled.count(), 2);
        assert_eq!(shared.read_with(|c| c.count()), 1);
    }
}
