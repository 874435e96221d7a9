//! Thread-safe memoization of N-ary functions.
//!
//! [`Memoized`] wraps a function and caches its results keyed by the exact
//! argument tuple (through [`MemoKey`]). The cache belongs to the wrapper: two
//! wrappers around the same function never share entries, and entries are
//! never evicted for as long as the wrapper lives.
//!
//! # Concurrency
//!
//! The wrapper is `Sync` whenever the wrapped function, keys and values are,
//! and each key is computed exactly once. The map sits behind a read-write
//! lock: lookups of existing slots share the read lock, and only a miss takes
//! the write lock to insert a per-key slot. The computation itself runs on
//! that slot, so concurrent first calls for the *same* key block until the
//! single computation finishes, while calls for different keys run in
//! parallel.
//!
//! A memoized function must not call itself recursively with the same key:
//! the inner call would wait on the slot the outer call is filling.
//!
//! If the wrapped function panics, nothing is stored and the panic
//! propagates; the next call for that key computes again.
//!
//! # Examples
//!
//! ```rust
//! use nary::prelude::*;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let calls = AtomicUsize::new(0);
//! let slow_square = |value: i64| {
//!     calls.fetch_add(1, Ordering::SeqCst);
//!     value * value
//! };
//!
//! let square = slow_square.memoized();
//! assert_eq!(square.apply(12), 144);
//! assert_eq!(square.apply(12), 144);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

mod key;

pub use key::MemoKey;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::function::{Function1, Function2, Function3};

#[cfg(feature = "fxhash")]
type CacheHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type CacheHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type CacheHasher = std::collections::hash_map::RandomState;

type Slot<V> = Arc<OnceLock<V>>;

/// A function wrapped with a result cache.
///
/// `K` is the key of one argument tuple (see [`MemoKey`]) and `V` the cached
/// result. Values are cloned out of the cache on every hit.
///
/// Obtain one with the `memoized` method of [`Function1`], [`Function2`] or
/// [`Function3`], or directly with [`Memoized::new`] when the inspection
/// methods are needed.
pub struct Memoized<F, K, V> {
    function: F,
    cache: RwLock<HashMap<K, Slot<V>, CacheHasher>>,
}

impl<F, K, V> Memoized<F, K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Wraps `function` with an empty cache.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nary::prelude::*;
    ///
    /// let add: Memoized<_, (i32, i32), i32> = Memoized::new(|left: i32, right: i32| left + right);
    /// assert_eq!(add.apply(1, 2), 3);
    /// assert_eq!(add.cached_len(), 1);
    /// assert_eq!(add.peek(&(1, 2)), Some(3));
    /// assert_eq!(add.peek(&(2, 1)), None);
    /// ```
    #[must_use]
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RwLock::new(HashMap::with_hasher(CacheHasher::default())),
        }
    }

    /// Returns the cached value for `key`, computing it with `compute` on a
    /// miss.
    fn get_or_compute(&self, key: K, compute: impl FnOnce() -> V) -> V {
        let existing = self.cache.read().get(&key).map(Arc::clone);
        let slot = existing.unwrap_or_else(|| Arc::clone(self.cache.write().entry(key).or_default()));

        if let Some(value) = slot.get() {
            #[cfg(feature = "tracing")]
            tracing::trace!("memoized cache hit");
            return value.clone();
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("memoized cache miss");
        slot.get_or_init(compute).clone()
    }

    /// Returns the cached result for the given arguments without computing.
    ///
    /// Pass the single argument for unary functions and a tuple of the
    /// arguments otherwise.
    pub fn peek<Q>(&self, arguments: &Q) -> Option<V>
    where
        Q: MemoKey<Key = K> + ?Sized,
    {
        let key = arguments.memo_key();
        let slot = self.cache.read().get(&key).map(Arc::clone)?;
        slot.get().cloned()
    }

    /// The number of argument tuples with a computed result.
    pub fn cached_len(&self) -> usize {
        self.cache
            .read()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    /// Returns a reference to the wrapped function.
    pub const fn inner(&self) -> &F {
        &self.function
    }

    /// Discards the cache and returns the wrapped function.
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, K, V> fmt::Debug for Memoized<F, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("entries", &self.cache.read().len())
            .finish_non_exhaustive()
    }
}

impl<F, A> Function1<A> for Memoized<F, A::Key, F::Output>
where
    F: Function1<A>,
    A: MemoKey,
    F::Output: Clone,
{
    type Output = F::Output;

    fn apply(&self, argument: A) -> Self::Output {
        let key = argument.memo_key();
        self.get_or_compute(key, || self.function.apply(argument))
    }

    fn memoized(self) -> impl Function1<A, Output = Self::Output>
    where
        Self: Sized,
        A: MemoKey,
        Self::Output: Clone,
    {
        self
    }
}

impl<F, A, B> Function2<A, B> for Memoized<F, (A::Key, B::Key), F::Output>
where
    F: Function2<A, B>,
    A: MemoKey,
    B: MemoKey,
    F::Output: Clone,
{
    type Output = F::Output;

    fn apply(&self, first: A, second: B) -> Self::Output {
        let arguments = (first, second);
        let key = arguments.memo_key();
        self.get_or_compute(key, || {
            let (first, second) = arguments;
            self.function.apply(first, second)
        })
    }

    fn memoized(self) -> impl Function2<A, B, Output = Self::Output>
    where
        Self: Sized,
        A: MemoKey,
        B: MemoKey,
        Self::Output: Clone,
    {
        self
    }
}

impl<F, A, B, C> Function3<A, B, C> for Memoized<F, (A::Key, B::Key, C::Key), F::Output>
where
    F: Function3<A, B, C>,
    A: MemoKey,
    B: MemoKey,
    C: MemoKey,
    F::Output: Clone,
{
    type Output = F::Output;

    fn apply(&self, first: A, second: B, third: C) -> Self::Output {
        let arguments = (first, second, third);
        let key = arguments.memo_key();
        self.get_or_compute(key, || {
            let (first, second, third) = arguments;
            self.function.apply(first, second, third)
        })
    }

    fn memoized(self) -> impl Function3<A, B, C, Output = Self::Output>
    where
        Self: Sized,
        A: MemoKey,
        B: MemoKey,
        C: MemoKey,
        Self::Output: Clone,
    {
        self
    }
}

static_assertions::assert_impl_all!(Memoized<fn(i32) -> i32, i32, i32>: Send, Sync);
static_assertions::assert_impl_all!(Memoized<fn(String, f64) -> String, (String, u64), String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_unary_hit_skips_function() {
        let calls = AtomicUsize::new(0);
        let memoized: Memoized<_, i32, i32> = Memoized::new(|value: i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            value + 1
        });

        assert_eq!(memoized.apply(1), 2);
        assert_eq!(memoized.apply(1), 2);
        assert_eq!(memoized.apply(2), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(memoized.cached_len(), 2);
    }

    #[test]
    fn test_panicking_computation_is_not_cached() {
        let calls = AtomicUsize::new(0);
        let memoized: Memoized<_, i32, i32> = Memoized::new(|value: i32| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("first call fails");
            }
            value
        });

        let first = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| memoized.apply(5)));
        assert!(first.is_err());
        assert_eq!(memoized.peek(&5), None);
        assert_eq!(memoized.apply(5), 5);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_ternary_keys_distinguish_positions() {
        let memoized: Memoized<_, (i32, i32, i32), i32> =
            Memoized::new(|first: i32, second: i32, third: i32| first * 100 + second * 10 + third);

        assert_eq!(memoized.apply(1, 2, 3), 123);
        assert_eq!(memoized.apply(3, 2, 1), 321);
        assert_eq!(memoized.peek(&(1, 2, 3)), Some(123));
        assert_eq!(memoized.cached_len(), 2);
    }

    #[test]
    fn test_into_inner_returns_function() {
        let memoized: Memoized<_, i32, i32> = Memoized::new(|value: i32| value * 3);
        assert_eq!(memoized.inner().apply(2), 6);
        let function = memoized.into_inner();
        assert_eq!(function(4), 12);
    }

    #[test]
    fn test_hits_share_the_map_lock() {
        let calls = AtomicUsize::new(0);
        let memoized: Memoized<_, i32, i32> = Memoized::new(|value: i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            value * 2
        });
        memoized.apply(4);

        let held = memoized.cache.read();
        assert_eq!(memoized.apply(4), 8);
        assert_eq!(memoized.peek(&4), Some(8));
        assert_eq!(memoized.cached_len(), 1);
        drop(held);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_parallel_hits_never_recompute() {
        let calls = AtomicUsize::new(0);
        let memoized: Memoized<_, u64, u64> = Memoized::new(|value: u64| {
            calls.fetch_add(1, Ordering::SeqCst);
            value + 1
        });
        for key in 0..32 {
            memoized.apply(key);
        }

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for round in 0..1000 {
                        let key = round % 32;
                        assert_eq!(memoized.apply(key), key + 1);
                    }
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 32);
    }

    #[test]
    fn test_debug_reports_entries() {
        let memoized: Memoized<_, i32, i32> = Memoized::new(|value: i32| value);
        memoized.apply(1);
        assert_eq!(format!("{memoized:?}"), "Memoized { entries: 1, .. }");
    }
}
