//! Unary functions, predicates, consumers and operators.
//!
//! [`Function1`] is implemented for every `Fn(A) -> R`, so any closure or
//! function item taking one argument picks up the combinators below.
//! [`Predicate1`] and [`Consumer1`] refine it for `bool` and `()` results.
//!
//! # Examples
//!
//! ```rust
//! use nary::prelude::*;
//!
//! let length = |text: String| text.len();
//! let is_short = length.and_then(|count: usize| count < 5);
//!
//! assert!(is_short.test("abc".to_string()));
//! assert!(!is_short.negate().test("abc".to_string()));
//! ```

use std::any::TypeId;

use crate::kind::{Descriptor, for_each_primitive};
#[cfg(feature = "memoize")]
use crate::memoize::{MemoKey, Memoized};

/// A type-erased unary function.
pub type BoxedFunction1<'a, A, R> = Box<dyn Fn(A) -> R + Send + Sync + 'a>;

macro_rules! unary_kind_adapters {
    ($(($name:ident, $variant:ident, $ty:ty)),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("[`compose`](Self::compose) specialized to a `", stringify!($ty), "` parameter.")]
                #[inline]
                fn [<compose_from_ $name>]<G>(self, before: G) -> impl Fn($ty) -> Self::Output
                where
                    Self: Sized,
                    G: Fn($ty) -> A,
                {
                    self.compose(before)
                }

                #[doc = concat!("[`and_then`](Self::and_then) specialized to a `", stringify!($ty), "` result.")]
                #[inline]
                fn [<and_then_to_ $name>]<G>(self, after: G) -> impl Fn(A) -> $ty
                where
                    Self: Sized,
                    G: Fn(Self::Output) -> $ty,
                {
                    self.and_then(after)
                }
            )*
        }
    };
}

/// A callable taking exactly one argument.
pub trait Function1<A> {
    /// The result type.
    type Output;

    /// Invokes the function.
    fn apply(&self, argument: A) -> Self::Output;

    /// Always `1`.
    #[inline]
    fn arity(&self) -> usize {
        1
    }

    /// Returns the kinds of the parameter and of the result.
    fn descriptor(&self) -> Descriptor
    where
        A: 'static,
        Self::Output: 'static,
    {
        Descriptor::from_type_ids(&[TypeId::of::<A>()], TypeId::of::<Self::Output>())
    }

    /// Pre-composes `before`: the result computes `self(before(value))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nary::prelude::*;
    ///
    /// let double = |value: i32| value * 2;
    /// let double_length = double.compose(|text: &str| text.len() as i32);
    ///
    /// assert_eq!(double_length("four"), 8);
    /// ```
    #[inline]
    fn compose<C, G>(self, before: G) -> impl Fn(C) -> Self::Output
    where
        Self: Sized,
        G: Fn(C) -> A,
    {
        move |argument| self.apply(before(argument))
    }

    /// Post-composes `after`: the result computes `after(self(value))`.
    #[inline]
    fn and_then<G, V>(self, after: G) -> impl Fn(A) -> V
    where
        Self: Sized,
        G: Fn(Self::Output) -> V,
    {
        move |argument| after(self.apply(argument))
    }

    for_each_primitive!(unary_kind_adapters);

    /// Fixes the argument, producing a thunk.
    #[inline]
    fn fix_all(self, argument: A) -> impl Fn() -> Self::Output
    where
        Self: Sized,
        A: Clone,
    {
        move || self.apply(argument.clone())
    }

    /// Caches results by argument; see [`Memoized`].
    ///
    /// Calling `memoized` on a value that is already memoized returns it
    /// unchanged, so the cache is never layered.
    #[cfg(feature = "memoize")]
    fn memoized(self) -> impl Function1<A, Output = Self::Output>
    where
        Self: Sized,
        A: MemoKey,
        Self::Output: Clone,
    {
        Memoized::<Self, A::Key, Self::Output>::new(self)
    }

    /// Erases the concrete type behind a box.
    #[inline]
    fn boxed<'a>(self) -> BoxedFunction1<'a, A, Self::Output>
    where
        Self: Sized + Send + Sync + 'a,
    {
        Box::new(move |argument| self.apply(argument))
    }

    /// Turns any implementation back into a plain closure.
    #[inline]
    fn into_fn(self) -> impl Fn(A) -> Self::Output
    where
        Self: Sized,
    {
        move |argument| self.apply(argument)
    }
}

impl<F, A, R> Function1<A> for F
where
    F: Fn(A) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&self, argument: A) -> R {
        self(argument)
    }
}

/// A unary function producing `bool`.
pub trait Predicate1<A>: Function1<A, Output = bool> {
    /// Evaluates the predicate.
    #[inline]
    fn test(&self, argument: A) -> bool {
        self.apply(argument)
    }

    /// Logical negation.
    #[inline]
    fn negate(self) -> impl Fn(A) -> bool
    where
        Self: Sized,
    {
        move |argument| !self.apply(argument)
    }

    /// Short-circuiting conjunction; `other` runs only when `self` holds.
    #[inline]
    fn and<Q>(self, other: Q) -> impl Fn(A) -> bool
    where
        Self: Sized,
        Q: Fn(A) -> bool,
        A: Clone,
    {
        move |argument: A| self.apply(argument.clone()) && other(argument)
    }

    /// Short-circuiting disjunction; `other` runs only when `self` fails.
    #[inline]
    fn or<Q>(self, other: Q) -> impl Fn(A) -> bool
    where
        Self: Sized,
        Q: Fn(A) -> bool,
        A: Clone,
    {
        move |argument: A| self.apply(argument.clone()) || other(argument)
    }

    /// Exclusive or; both sides are always evaluated.
    #[inline]
    fn xor<Q>(self, other: Q) -> impl Fn(A) -> bool
    where
        Self: Sized,
        Q: Fn(A) -> bool,
        A: Clone,
    {
        move |argument: A| self.apply(argument.clone()) ^ other(argument)
    }
}

impl<P, A> Predicate1<A> for P where P: Function1<A, Output = bool> {}

/// A unary function producing `()`.
pub trait Consumer1<A>: Function1<A, Output = ()> {
    /// Runs the consumer.
    #[inline]
    fn accept(&self, argument: A) {
        self.apply(argument);
    }

    /// Runs `self`, then `after`, with the same argument.
    #[inline]
    fn and_then_accept<G>(self, after: G) -> impl Fn(A)
    where
        Self: Sized,
        G: Fn(A),
        A: Clone,
    {
        move |argument: A| {
            self.apply(argument.clone());
            after(argument);
        }
    }
}

impl<C, A> Consumer1<A> for C where C: Function1<A, Output = ()> {}

/// A predicate that holds for every argument.
#[inline]
pub fn always_true<A>() -> impl Fn(A) -> bool {
    |_| true
}

/// A predicate that holds for no argument.
#[inline]
pub fn always_false<A>() -> impl Fn(A) -> bool {
    |_| false
}

/// A function ignoring its argument and returning a clone of `value`.
#[inline]
pub fn constant<A, R: Clone>(value: R) -> impl Fn(A) -> R {
    move |_| value.clone()
}

/// A predicate testing its argument for equality with `target`.
///
/// # Examples
///
/// ```rust
/// use nary::unary;
///
/// let is_missing = unary::is_equal(None::<i32>);
/// assert!(is_missing(None));
/// assert!(!is_missing(Some(3)));
/// ```
#[inline]
pub fn is_equal<A: PartialEq>(target: A) -> impl Fn(A) -> bool {
    move |argument| argument == target
}

/// The unary operator returning its argument.
#[inline]
pub fn identity<A>() -> impl Fn(A) -> A {
    |argument| argument
}

/// Free-function form of [`Predicate1::negate`].
#[inline]
pub fn not<A, P>(predicate: P) -> impl Fn(A) -> bool
where
    P: Predicate1<A>,
{
    predicate.negate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use std::cell::Cell;

    #[test]
    fn test_arity_and_descriptor() {
        let parse = |text: String| text.parse::<i64>().unwrap_or_default();
        assert_eq!(parse.arity(), 1);

        let descriptor = parse.descriptor();
        assert_eq!(descriptor.inputs(), &[Kind::Generic]);
        assert_eq!(descriptor.output(), Kind::Long);
    }

    #[test]
    fn test_compose_from_primitive_kind() {
        let describe = |value: i64| format!("#{value}");
        let from_int = describe.compose_from_int(i64::from);
        assert_eq!(from_int(7), "#7");
    }

    #[test]
    fn test_and_then_to_primitive_kind() {
        let length = |text: &str| text.len();
        let is_empty = length.and_then_to_boolean(|count| count == 0);
        assert!(is_empty(""));
        assert!(!is_empty("x"));
    }

    #[test]
    fn test_and_then_skips_adapter_when_inner_panics() {
        let adapter_calls = Cell::new(0);
        let failing = |_: i32| -> i32 { panic!("inner") };
        let composed = failing.and_then(|value: i32| {
            adapter_calls.set(adapter_calls.get() + 1);
            value
        });

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| composed(1)));
        assert!(outcome.is_err());
        assert_eq!(adapter_calls.get(), 0);
    }

    #[test]
    fn test_fix_all_is_reusable() {
        let square = |value: i32| value * value;
        let thunk = square.fix_all(9);
        assert_eq!(thunk(), 81);
        assert_eq!(thunk(), 81);
        assert_eq!(square(3), 9);
    }

    #[test]
    fn test_consumer_and_then_accept_runs_both_in_order() {
        let log = std::sync::Mutex::new(Vec::new());
        let first = |value: i32| log.lock().unwrap().push(("first", value));
        let both = first.and_then_accept(|value: i32| log.lock().unwrap().push(("second", value)));

        both.accept(4);
        assert_eq!(*log.lock().unwrap(), vec![("first", 4), ("second", 4)]);
    }

    #[test]
    fn test_factories() {
        assert!(always_true::<i32>()(0));
        assert!(!always_false::<i32>()(0));
        assert_eq!(constant::<&str, _>(5)("ignored"), 5);
        assert_eq!(identity::<String>()("same".to_string()), "same");
        assert!(not(|value: i32| value > 0)(-1));
    }

    #[test]
    fn test_boxed_keeps_behavior() {
        let boxed: BoxedFunction1<'_, i32, i32> = (|value: i32| value + 1).boxed();
        assert_eq!(boxed(1), 2);
        assert_eq!(boxed.apply(2), 3);
    }
}
