// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared counters and containers. See [`AtomicCounter`] for a lock free `u64` counter
//! and [`AtomicContainer`] for an async, clonable handle to a single value.

use std::sync::{Arc,
                atomic::{AtomicU64, Ordering}};
use tokio::sync::RwLock;

/// Lock free counter that hides [`SeqCst`] boilerplate and the [`fetch_add`]
/// return-value quirk.
///
/// All operations use [`SeqCst`] ordering so callers never have to choose.
///
/// ## The `fetch_add` quirk
///
/// [`AtomicU64::fetch_add`] atomically adds to the stored value but returns the **old**
/// value, not the new one. [`increment`] derives the new value locally from the old one,
/// rather than issuing a second load with [`get`]. A separate load would race with other
/// threads' increments and could return someone else's value.
///
/// ```text
///              Thread A              Thread B          Stored
///              --------              --------          ------
///                                                        5
///  fetch_add(1) -> old=5                                 6
///                              fetch_add(1) -> old=6     7
///
///  // Bad: self.get() returns 7 (Thread B's increment leaked in)
///  // Good: old + 1 returns 6 (derived from own old value)
/// ```
///
/// [`SeqCst`]: Ordering::SeqCst
/// [`fetch_add`]: AtomicU64::fetch_add
/// [`get`]: Self::get
/// [`increment`]: Self::increment
#[derive(Debug, Default)]
pub struct AtomicCounter {
    inner: AtomicU64,
}

impl AtomicCounter {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self {
            inner: AtomicU64::new(value),
        }
    }

    /// Atomically increments the counter and returns the **new** value. Wraps from
    /// [`u64::MAX`] to `0`.
    pub fn increment(&self) -> u64 {
        self.inner.fetch_add(1, Ordering::SeqCst).wrapping_add(1)
    }

    /// Atomically decrements the counter and returns the **new** value. Saturates at `0`.
    pub fn decrement(&self) -> u64 {
        let result = self.inner.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |old| {
            Some(old.saturating_sub(1))
        });
        // The closure never returns `None`, so both arms carry the old value.
        match result {
            Ok(old) | Err(old) => old.saturating_sub(1),
        }
    }

    #[must_use]
    pub fn get(&self) -> u64 { self.inner.load(Ordering::SeqCst) }

    pub fn set(&self, value: u64) { self.inner.store(value, Ordering::SeqCst); }
}

/// Clonable handle to a value guarded by a [`tokio::sync::RwLock`]. Every clone shares
/// the same value. Readers never block each other, and since the lock is async, waiting
/// for it yields to the runtime instead of parking the thread.
#[derive(Debug, Default)]
pub struct AtomicContainer<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for AtomicContainer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> AtomicContainer<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Returns a copy of the current value.
    pub async fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.read().await.clone()
    }

    pub async fn set(&self, value: T) { *self.inner.write().await = value; }

    /// Applies `fn_mut` to the value while holding the write lock, and returns the new
    /// value. No other writer can interleave between the read and the write.
    pub async fn update(&self, fn_mut: impl FnOnce(&mut T)) -> T
    where
        T: Clone,
    {
        let mut guard = self.inner.write().await;
        fn_mut(&mut guard);
        guard.clone()
    }

    /// Replaces the value with [`Default::default`] and returns the old one.
    pub async fn take(&self) -> T
    where
        T: Default,
    {
        std::mem::take(&mut *self.inner.write().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashSet, thread};

    #[test]
    fn get_returns_initial_value() {
        let counter = AtomicCounter::new(42);
        assert_eq!(counter.get(), 42);
    }

    #[test]
    fn set_updates_value() {
        let counter = AtomicCounter::default();
        counter.set(99);
        assert_eq!(counter.get(), 99);
    }

    #[test]
    fn increment_returns_new_value() {
        let counter = AtomicCounter::default();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn increment_wraps_at_max() {
        let counter = AtomicCounter::new(u64::MAX);
        assert_eq!(counter.increment(), 0);
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn decrement_saturates_at_zero() {
        let counter = AtomicCounter::new(1);
        assert_eq!(counter.decrement(), 0);
        assert_eq!(counter.decrement(), 0);
        assert_eq!(counter.get(), 0);
    }

    /// Every concurrent [`AtomicCounter::increment`] must return a unique value. A naive
    /// implementation using a second `get()` would let two threads observe the same
    /// "new" value.
    #[test]
    fn concurrent_increments_return_unique_values() {
        const MAX_THREAD_COUNT: usize = 8;
        const INCREMENTS_PER_THREAD: usize = 250;
        const TOTAL: usize = MAX_THREAD_COUNT * INCREMENTS_PER_THREAD;

        let counter = Arc::new(AtomicCounter::default());

        let handles: Vec<_> = (0..MAX_THREAD_COUNT)
            .map(|_| {
                let shared_counter = Arc::clone(&counter);
                thread::spawn(move || {
                    let mut seen = Vec::with_capacity(INCREMENTS_PER_THREAD);
                    for _ in 0..INCREMENTS_PER_THREAD {
                        seen.push(shared_counter.increment());
                    }
                    seen
                })
            })
            .collect();

        let all_values: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        let unique: HashSet<u64> = all_values.iter().copied().collect();
        assert_eq!(unique.len(), TOTAL);
        assert_eq!(counter.get(), TOTAL as u64);
    }

    #[tokio::test]
    async fn container_clones_share_value() {
        let container = AtomicContainer::new(1_u32);
        let other = container.clone();
        other.set(7).await;
        assert_eq!(container.get().await, 7);
    }

    #[tokio::test]
    async fn container_update_returns_new_value() {
        let container = AtomicContainer::new(vec![1, 2]);
        let it = container.update(|list| list.push(3)).await;
        assert_eq!(it, vec![1, 2, 3]);
        assert_eq!(container.get().await, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn container_take_leaves_default() {
        let container = AtomicContainer::new(String::from("hello"));
        assert_eq!(container.take().await, "hello");
        assert_eq!(container.get().await, "");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn container_concurrent_updates_are_not_lost() {
        const TASK_COUNT: u64 = 16;
        const UPDATES_PER_TASK: u64 = 50;

        let container = AtomicContainer::new(0_u64);

        let handles: Vec<_> = (0..TASK_COUNT)
            .map(|_| {
                let container = container.clone();
                tokio::spawn(async move {
                    for _ in 0..UPDATES_PER_TASK {
                        container.update(|it| *it += 1).await;
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(container.get().await, TASK_COUNT * UPDATES_PER_TASK);
    }
}
