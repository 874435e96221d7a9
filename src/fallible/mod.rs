//! Adapters for functions that return `Result`.
//!
//! A fallible function is any N-ary function whose output is
//! `Result<R, E>`. The [`Fallible1`], [`Fallible2`] and [`Fallible3`]
//! traits are blanket-implemented for all of them and convert a declared
//! failure into another shape:
//!
//! - [`nest`](Fallible1::nest) maps every error into a [`NestedError`].
//! - [`nest_with`](Fallible1::nest_with) maps every error with a caller-supplied function.
//! - [`recover`](Fallible1::recover) replaces an error with the result of a
//!   fallback function built from that error and applied to the same arguments.
//! - [`recover_with_value`](Fallible1::recover_with_value) replaces an error with a constant.
//! - [`unchecked`](Fallible1::unchecked) turns an error into a panic.
//!
//! Panics raised by the wrapped function are never caught by any adapter;
//! they propagate to the caller unchanged.
//!
//! # Examples
//!
//! ```rust
//! use nary::prelude::*;
//!
//! let parse = |text: &str| text.trim().parse::<i32>();
//!
//! let nested = parse.nest();
//! assert!(nested("x").unwrap_err().to_string().contains("invalid digit"));
//!
//! let lenient = parse.recover(|_| |_: &str| -1);
//! assert_eq!(lenient(" 7 "), 7);
//! assert_eq!(lenient("x"), -1);
//! ```

mod error;

pub use error::NestedError;

use std::error::Error;
use std::panic::panic_any;

use crate::function::{Function1, Function2, Function3};

#[cfg(feature = "tracing")]
fn log_failure<E>(adapter: &'static str) {
    tracing::debug!(adapter, error_type = std::any::type_name::<E>(), "fallible function failed");
}

#[cfg(not(feature = "tracing"))]
#[inline]
const fn log_failure<E>(_adapter: &'static str) {}

/// A unary function returning `Result<R, E>`.
pub trait Fallible1<A, R, E>: Function1<A, Output = Result<R, E>> {
    /// Maps every error into a [`NestedError`].
    #[inline]
    fn nest(self) -> impl Fn(A) -> Result<R, NestedError>
    where
        Self: Sized,
        E: Error + Send + Sync + 'static,
    {
        self.nest_with(NestedError::new)
    }

    /// Maps every error with `mapper`.
    #[inline]
    fn nest_with<M, E2>(self, mapper: M) -> impl Fn(A) -> Result<R, E2>
    where
        Self: Sized,
        M: Fn(E) -> E2,
    {
        move |argument| {
            self.apply(argument).map_err(|error| {
                log_failure::<E>("nest");
                mapper(error)
            })
        }
    }

    /// Replaces an error by the result of `recover_fn(error)` applied to the
    /// original argument.
    ///
    /// The argument is cloned on every call, including successful ones, so
    /// the fallback can receive it after `self` has consumed the original.
    #[inline]
    fn recover<H, G>(self, recover_fn: H) -> impl Fn(A) -> R
    where
        Self: Sized,
        H: Fn(E) -> G,
        G: Fn(A) -> R,
        A: Clone,
    {
        move |argument: A| match self.apply(argument.clone()) {
            Ok(value) => value,
            Err(error) => {
                log_failure::<E>("recover");
                recover_fn(error)(argument)
            }
        }
    }

    /// Replaces an error by a clone of `value`.
    #[inline]
    fn recover_with_value(self, value: R) -> impl Fn(A) -> R
    where
        Self: Sized,
        R: Clone,
    {
        move |argument| {
            self.apply(argument).unwrap_or_else(|_| {
                log_failure::<E>("recover_with_value");
                value.clone()
            })
        }
    }

    /// Returns the value, panicking with the error as payload on failure.
    ///
    /// # Panics
    ///
    /// Panics via [`panic_any`] with the error value, which a
    /// [`catch_unwind`](std::panic::catch_unwind) caller can downcast back
    /// to `E`.
    #[inline]
    fn unchecked(self) -> impl Fn(A) -> R
    where
        Self: Sized,
        E: Send + 'static,
    {
        move |argument| match self.apply(argument) {
            Ok(value) => value,
            Err(error) => panic_any(error),
        }
    }
}

impl<F, A, R, E> Fallible1<A, R, E> for F where F: Function1<A, Output = Result<R, E>> {}

/// A binary function returning `Result<R, E>`.
pub trait Fallible2<A, B, R, E>: Function2<A, B, Output = Result<R, E>> {
    /// Maps every error into a [`NestedError`].
    #[inline]
    fn nest(self) -> impl Fn(A, B) -> Result<R, NestedError>
    where
        Self: Sized,
        E: Error + Send + Sync + 'static,
    {
        self.nest_with(NestedError::new)
    }

    /// Maps every error with `mapper`.
    #[inline]
    fn nest_with<M, E2>(self, mapper: M) -> impl Fn(A, B) -> Result<R, E2>
    where
        Self: Sized,
        M: Fn(E) -> E2,
    {
        move |first, second| {
            self.apply(first, second).map_err(|error| {
                log_failure::<E>("nest");
                mapper(error)
            })
        }
    }

    /// Replaces an error by the result of `recover_fn(error)` applied to the
    /// original arguments.
    ///
    /// Every argument is cloned on every call, including successful ones, so
    /// the fallback can receive them after `self` has consumed the originals.
    #[inline]
    fn recover<H, G>(self, recover_fn: H) -> impl Fn(A, B) -> R
    where
        Self: Sized,
        H: Fn(E) -> G,
        G: Fn(A, B) -> R,
        A: Clone,
        B: Clone,
    {
        move |first: A, second: B| match self.apply(first.clone(), second.clone()) {
            Ok(value) => value,
            Err(error) => {
                log_failure::<E>("recover");
                recover_fn(error)(first, second)
            }
        }
    }

    /// Replaces an error by a clone of `value`.
    #[inline]
    fn recover_with_value(self, value: R) -> impl Fn(A, B) -> R
    where
        Self: Sized,
        R: Clone,
    {
        move |first, second| {
            self.apply(first, second).unwrap_or_else(|_| {
                log_failure::<E>("recover_with_value");
                value.clone()
            })
        }
    }

    /// Returns the value, panicking with the error as payload on failure.
    ///
    /// # Panics
    ///
    /// Panics via [`panic_any`] with the error value.
    #[inline]
    fn unchecked(self) -> impl Fn(A, B) -> R
    where
        Self: Sized,
        E: Send + 'static,
    {
        move |first, second| match self.apply(first, second) {
            Ok(value) => value,
            Err(error) => panic_any(error),
        }
    }
}

impl<F, A, B, R, E> Fallible2<A, B, R, E> for F where F: Function2<A, B, Output = Result<R, E>> {}

/// A ternary function returning `Result<R, E>`.
pub trait Fallible3<A, B, C, R, E>: Function3<A, B, C, Output = Result<R, E>> {
    /// Maps every error into a [`NestedError`].
    #[inline]
    fn nest(self) -> impl Fn(A, B, C) -> Result<R, NestedError>
    where
        Self: Sized,
        E: Error + Send + Sync + 'static,
    {
        self.nest_with(NestedError::new)
    }

    /// Maps every error with `mapper`.
    #[inline]
    fn nest_with<M, E2>(self, mapper: M) -> impl Fn(A, B, C) -> Result<R, E2>
    where
        Self: Sized,
        M: Fn(E) -> E2,
    {
        move |first, second, third| {
            self.apply(first, second, third).map_err(|error| {
                log_failure::<E>("nest");
                mapper(error)
            })
        }
    }

    /// Replaces an error by the result of `recover_fn(error)` applied to the
    /// original arguments.
    ///
    /// Every argument is cloned on every call, including successful ones, so
    /// the fallback can receive them after `self` has consumed the originals.
    #[inline]
    fn recover<H, G>(self, recover_fn: H) -> impl Fn(A, B, C) -> R
    where
        Self: Sized,
        H: Fn(E) -> G,
        G: Fn(A, B, C) -> R,
        A: Clone,
        B: Clone,
        C: Clone,
    {
        move |first: A, second: B, third: C| match self.apply(first.clone(), second.clone(), third.clone()) {
            Ok(value) => value,
            Err(error) => {
                log_failure::<E>("recover");
                recover_fn(error)(first, second, third)
            }
        }
    }

    /// Replaces an error by a clone of `value`.
    #[inline]
    fn recover_with_value(self, value: R) -> impl Fn(A, B, C) -> R
    where
        Self: Sized,
        R: Clone,
    {
        move |first, second, third| {
            self.apply(first, second, third).unwrap_or_else(|_| {
                log_failure::<E>("recover_with_value");
                value.clone()
            })
        }
    }

    /// Returns the value, panicking with the error as payload on failure.
    ///
    /// # Panics
    ///
    /// Panics via [`panic_any`] with the error value.
    #[inline]
    fn unchecked(self) -> impl Fn(A, B, C) -> R
    where
        Self: Sized,
        E: Send + 'static,
    {
        move |first, second, third| match self.apply(first, second, third) {
            Ok(value) => value,
            Err(error) => panic_any(error),
        }
    }
}

impl<F, A, B, C, R, E> Fallible3<A, B, C, R, E> for F where
    F: Function3<A, B, C, Output = Result<R, E>>
{
}
