use std::sync::Arc;

use parking_lot::RwLock;

/// A value behind a shared reader-writer lock.
pub type Atomic<T> = Arc<RwLock<T>>;

#[inline]
pub fn atomic<T>(t: T) -> Atomic<T> {
    Arc::new(RwLock::new(t))
}

/// Runs a closure against a shared read guard.
pub trait ReadExecutor<T: ?Sized> {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

impl<T> ReadExecutor<T> for Atomic<T> {
    #[inline]
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let read_guard = self.read();
        f(&*read_guard)
    }
}

/// Runs a closure against an exclusive write guard.
pub trait WriteExecutor<T: ?Sized> {
    fn write_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> WriteExecutor<T> for Atomic<T> {
    #[inline]
    fn write_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut write_guard = self.write();
        f(&mut *write_guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic() {
        let atomic_value = atomic(vec![1, 2, 3]);
        assert_eq!(atomic_value.read().len(), 3);
    }

    #[test]
    fn test_read_with() {
        let atomic_value = atomic(vec![1, 2, 3]);
        let total: i32 = atomic_value.read_with(|v| v.iter().sum());
        assert_eq!(total, 6);
    }

    #[test]
    fn test_write_with_is_visible_to_clones() {
        let atomic_value = atomic(vec![1, 2, 3]);
        let other = atomic_value.clone();
        atomic_value.write_with(|v| v.push(4));
        assert_eq!(other.read_with(|v| v.len()), 4);
    }
}
