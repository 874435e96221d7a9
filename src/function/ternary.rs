//! Ternary functions, predicates and consumers.
//!
//! [`Function3`] is implemented for every `Fn(A, B, C) -> R`. Partial
//! application covers every non-empty subset of positions: fixing one
//! argument yields a [`Function2`](super::Function2) over the other two in
//! their original order, fixing two yields a
//! [`Function1`](super::Function1), and fixing all three yields a thunk.
//!
//! # Examples
//!
//! ```rust
//! use nary::prelude::*;
//!
//! let clamp = |low: i32, value: i32, high: i32| value.max(low).min(high);
//! let percent = clamp.fix_first_third(0, 100);
//!
//! assert_eq!(percent(140), 100);
//! assert_eq!(percent(-3), 0);
//! assert_eq!(percent(42), 42);
//! ```

use std::any::TypeId;

use crate::kind::{Descriptor, for_each_primitive};
#[cfg(feature = "memoize")]
use crate::memoize::{MemoKey, Memoized};

/// A type-erased ternary function.
pub type BoxedFunction3<'a, A, B, C, R> = Box<dyn Fn(A, B, C) -> R + Send + Sync + 'a>;

macro_rules! ternary_kind_adapters {
    ($(($name:ident, $variant:ident, $ty:ty)),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("[`compose`](Self::compose) with all new parameters of type `", stringify!($ty), "`.")]
                #[inline]
                fn [<compose_from_ $name>]<G1, G2, G3>(
                    self,
                    before1: G1,
                    before2: G2,
                    before3: G3,
                ) -> impl Fn($ty, $ty, $ty) -> Self::Output
                where
                    Self: Sized,
                    G1: Fn($ty) -> A,
                    G2: Fn($ty) -> B,
                    G3: Fn($ty) -> C,
                {
                    self.compose(before1, before2, before3)
                }

                #[doc = concat!("[`and_then`](Self::and_then) specialized to a `", stringify!($ty), "` result.")]
                #[inline]
                fn [<and_then_to_ $name>]<G>(self, after: G) -> impl Fn(A, B, C) -> $ty
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

/// A callable taking exactly three arguments.
pub trait Function3<A, B, C> {
    /// The result type.
    type Output;

    /// Invokes the function.
    fn apply(&self, first: A, second: B, third: C) -> Self::Output;

    /// Always `3`.
    #[inline]
    fn arity(&self) -> usize {
        3
    }

    /// Returns the kinds of the parameters and of the result.
    fn descriptor(&self) -> Descriptor
    where
        A: 'static,
        B: 'static,
        C: 'static,
        Self::Output: 'static,
    {
        Descriptor::from_type_ids(
            &[TypeId::of::<A>(), TypeId::of::<B>(), TypeId::of::<C>()],
            TypeId::of::<Self::Output>(),
        )
    }

    /// Pre-composes one adapter per parameter, evaluated left to right.
    #[inline]
    fn compose<D1, D2, D3, G1, G2, G3>(
        self,
        before1: G1,
        before2: G2,
        before3: G3,
    ) -> impl Fn(D1, D2, D3) -> Self::Output
    where
        Self: Sized,
        G1: Fn(D1) -> A,
        G2: Fn(D2) -> B,
        G3: Fn(D3) -> C,
    {
        move |first, second, third| self.apply(before1(first), before2(second), before3(third))
    }

    /// Post-composes `after` on the result.
    #[inline]
    fn and_then<G, V>(self, after: G) -> impl Fn(A, B, C) -> V
    where
        Self: Sized,
        G: Fn(Self::Output) -> V,
    {
        move |first, second, third| after(self.apply(first, second, third))
    }

    for_each_primitive!(ternary_kind_adapters);

    /// Fixes the first argument.
    #[inline]
    fn fix_first(self, first: A) -> impl Fn(B, C) -> Self::Output
    where
        Self: Sized,
        A: Clone,
    {
        move |second, third| self.apply(first.clone(), second, third)
    }

    /// Fixes the second argument.
    #[inline]
    fn fix_second(self, second: B) -> impl Fn(A, C) -> Self::Output
    where
        Self: Sized,
        B: Clone,
    {
        move |first, third| self.apply(first, second.clone(), third)
    }

    /// Fixes the third argument.
    #[inline]
    fn fix_third(self, third: C) -> impl Fn(A, B) -> Self::Output
    where
        Self: Sized,
        C: Clone,
    {
        move |first, second| self.apply(first, second, third.clone())
    }

    /// Fixes the first two arguments.
    #[inline]
    fn fix_first_second(self, first: A, second: B) -> impl Fn(C) -> Self::Output
    where
        Self: Sized,
        A: Clone,
        B: Clone,
    {
        move |third| self.apply(first.clone(), second.clone(), third)
    }

    /// Fixes the first and third arguments.
    #[inline]
    fn fix_first_third(self, first: A, third: C) -> impl Fn(B) -> Self::Output
    where
        Self: Sized,
        A: Clone,
        C: Clone,
    {
        move |second| self.apply(first.clone(), second, third.clone())
    }

    /// Fixes the last two arguments.
    #[inline]
    fn fix_second_third(self, second: B, third: C) -> impl Fn(A) -> Self::Output
    where
        Self: Sized,
        B: Clone,
        C: Clone,
    {
        move |first| self.apply(first, second.clone(), third.clone())
    }

    /// Fixes all three arguments, producing a thunk.
    #[inline]
    fn fix_all(self, first: A, second: B, third: C) -> impl Fn() -> Self::Output
    where
        Self: Sized,
        A: Clone,
        B: Clone,
        C: Clone,
    {
        move || self.apply(first.clone(), second.clone(), third.clone())
    }

    /// Caches results by argument triple; see [`Memoized`].
    #[cfg(feature = "memoize")]
    fn memoized(self) -> impl Function3<A, B, C, Output = Self::Output>
    where
        Self: Sized,
        A: MemoKey,
        B: MemoKey,
        C: MemoKey,
        Self::Output: Clone,
    {
        Memoized::<Self, (A::Key, B::Key, C::Key), Self::Output>::new(self)
    }

    /// Erases the concrete type behind a box.
    #[inline]
    fn boxed<'a>(self) -> BoxedFunction3<'a, A, B, C, Self::Output>
    where
        Self: Sized + Send + Sync + 'a,
    {
        Box::new(move |first, second, third| self.apply(first, second, third))
    }

    /// Turns any implementation back into a plain closure.
    #[inline]
    fn into_fn(self) -> impl Fn(A, B, C) -> Self::Output
    where
        Self: Sized,
    {
        move |first, second, third| self.apply(first, second, third)
    }
}

impl<F, A, B, C, R> Function3<A, B, C> for F
where
    F: Fn(A, B, C) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&self, first: A, second: B, third: C) -> R {
        self(first, second, third)
    }
}

/// A ternary function producing `bool`.
pub trait Predicate3<A, B, C>: Function3<A, B, C, Output = bool> {
    /// Evaluates the predicate.
    #[inline]
    fn test(&self, first: A, second: B, third: C) -> bool {
        self.apply(first, second, third)
    }

    /// Logical negation.
    #[inline]
    fn negate(self) -> impl Fn(A, B, C) -> bool
    where
        Self: Sized,
    {
        move |first, second, third| !self.apply(first, second, third)
    }

    /// Short-circuiting conjunction; `other` runs only when `self` holds.
    #[inline]
    fn and<Q>(self, other: Q) -> impl Fn(A, B, C) -> bool
    where
        Self: Sized,
        Q: Fn(A, B, C) -> bool,
        A: Clone,
        B: Clone,
        C: Clone,
    {
        move |first: A, second: B, third: C| {
            self.apply(first.clone(), second.clone(), third.clone()) && other(first, second, third)
        }
    }

    /// Short-circuiting disjunction; `other` runs only when `self` fails.
    #[inline]
    fn or<Q>(self, other: Q) -> impl Fn(A, B, C) -> bool
    where
        Self: Sized,
        Q: Fn(A, B, C) -> bool,
        A: Clone,
        B: Clone,
        C: Clone,
    {
        move |first: A, second: B, third: C| {
            self.apply(first.clone(), second.clone(), third.clone()) || other(first, second, third)
        }
    }

    /// Exclusive or; both sides are always evaluated.
    #[inline]
    fn xor<Q>(self, other: Q) -> impl Fn(A, B, C) -> bool
    where
        Self: Sized,
        Q: Fn(A, B, C) -> bool,
        A: Clone,
        B: Clone,
        C: Clone,
    {
        move |first: A, second: B, third: C| {
            self.apply(first.clone(), second.clone(), third.clone()) ^ other(first, second, third)
        }
    }
}

impl<P, A, B, C> Predicate3<A, B, C> for P where P: Function3<A, B, C, Output = bool> {}

/// A ternary function producing `()`.
pub trait Consumer3<A, B, C>: Function3<A, B, C, Output = ()> {
    /// Runs the consumer.
    #[inline]
    fn accept(&self, first: A, second: B, third: C) {
        self.apply(first, second, third);
    }

    /// Runs `self`, then `after`, with the same arguments.
    #[inline]
    fn and_then_accept<G>(self, after: G) -> impl Fn(A, B, C)
    where
        Self: Sized,
        G: Fn(A, B, C),
        A: Clone,
        B: Clone,
        C: Clone,
    {
        move |first: A, second: B, third: C| {
            self.apply(first.clone(), second.clone(), third.clone());
            after(first, second, third);
        }
    }
}

impl<K, A, B, C> Consumer3<A, B, C> for K where K: Function3<A, B, C, Output = ()> {}

/// A predicate that holds for every triple of arguments.
#[inline]
pub fn always_true<A, B, C>() -> impl Fn(A, B, C) -> bool {
    |_, _, _| true
}

/// A predicate that holds for no triple of arguments.
#[inline]
pub fn always_false<A, B, C>() -> impl Fn(A, B, C) -> bool {
    |_, _, _| false
}

/// A function ignoring its arguments and returning a clone of `value`.
#[inline]
pub fn constant<A, B, C, R: Clone>(value: R) -> impl Fn(A, B, C) -> R {
    move |_, _, _| value.clone()
}

/// A predicate comparing each argument with the target in the same position.
///
/// # Examples
///
/// ```rust
/// use nary::ternary;
///
/// let origin = ternary::is_equal(0, Some("north"), 0.0);
/// assert!(origin(0, Some("north"), 0.0));
/// assert!(!origin(0, None, 0.0));
/// ```
#[inline]
pub fn is_equal<A, B, C>(target1: A, target2: B, target3: C) -> impl Fn(A, B, C) -> bool
where
    A: PartialEq,
    B: PartialEq,
    C: PartialEq,
{
    move |first, second, third| first == target1 && second == target2 && third == target3
}
