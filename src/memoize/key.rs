//! Cache keys for memoized arguments.
//!
//! A [`MemoKey`] turns an argument into a hashable value with the equality
//! the cache should use. Integral types, `bool`, `char` and strings are their
//! own keys. Floating point values are keyed by their bit patterns, so `NaN`
//! matches itself while `0.0` and `-0.0` are distinct.

use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// An argument type that can key a memoization cache.
///
/// Implement it for your own `Eq + Hash + Clone` types with
/// [`impl_memo_key!`](crate::impl_memo_key).
pub trait MemoKey {
    /// The owned, hashable form of the argument.
    type Key: Eq + Hash;

    /// Builds the key for this argument.
    fn memo_key(&self) -> Self::Key;
}

/// Implements [`MemoKey`] for types that are their own key.
///
/// Each listed type must implement `Eq`, `Hash` and `Clone`.
///
/// # Examples
///
/// ```rust
/// use nary::impl_memo_key;
/// use nary::prelude::*;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl_memo_key!(Point);
///
/// let norm = (|point: Point| point.x.abs() + point.y.abs()).memoized();
/// assert_eq!(norm.apply(Point { x: 3, y: -4 }), 7);
/// ```
#[macro_export]
macro_rules! impl_memo_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::memoize::MemoKey for $ty {
                type Key = Self;

                #[inline]
                fn memo_key(&self) -> Self::Key {
                    ::std::clone::Clone::clone(self)
                }
            }
        )*
    };
}

crate::impl_memo_key!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    String,
);

impl MemoKey for f32 {
    type Key = u32;

    #[inline]
    fn memo_key(&self) -> u32 {
        self.to_bits()
    }
}

impl MemoKey for f64 {
    type Key = u64;

    #[inline]
    fn memo_key(&self) -> u64 {
        self.to_bits()
    }
}

impl MemoKey for str {
    type Key = String;

    #[inline]
    fn memo_key(&self) -> String {
        self.to_owned()
    }
}

impl<T: MemoKey + ?Sized> MemoKey for &T {
    type Key = T::Key;

    #[inline]
    fn memo_key(&self) -> T::Key {
        (**self).memo_key()
    }
}

impl<T: MemoKey + ?Sized> MemoKey for Box<T> {
    type Key = T::Key;

    #[inline]
    fn memo_key(&self) -> T::Key {
        (**self).memo_key()
    }
}

impl<T: MemoKey + ?Sized> MemoKey for Rc<T> {
    type Key = T::Key;

    #[inline]
    fn memo_key(&self) -> T::Key {
        (**self).memo_key()
    }
}

impl<T: MemoKey + ?Sized> MemoKey for Arc<T> {
    type Key = T::Key;

    #[inline]
    fn memo_key(&self) -> T::Key {
        (**self).memo_key()
    }
}

impl<T: MemoKey> MemoKey for Option<T> {
    type Key = Option<T::Key>;

    #[inline]
    fn memo_key(&self) -> Self::Key {
        self.as_ref().map(MemoKey::memo_key)
    }
}

impl<T: MemoKey> MemoKey for [T] {
    type Key = Vec<T::Key>;

    #[inline]
    fn memo_key(&self) -> Self::Key {
        self.iter().map(MemoKey::memo_key).collect()
    }
}

impl<T: MemoKey> MemoKey for Vec<T> {
    type Key = Vec<T::Key>;

    #[inline]
    fn memo_key(&self) -> Self::Key {
        self.as_slice().memo_key()
    }
}

impl<A: MemoKey, B: MemoKey> MemoKey for (A, B) {
    type Key = (A::Key, B::Key);

    #[inline]
    fn memo_key(&self) -> Self::Key {
        (self.0.memo_key(), self.1.memo_key())
    }
}

impl<A: MemoKey, B: MemoKey, C: MemoKey> MemoKey for (A, B, C) {
    type Key = (A::Key, B::Key, C::Key);

    #[inline]
    fn memo_key(&self) -> Self::Key {
        (self.0.memo_key(), self.1.memo_key(), self.2.memo_key())
    }
}
