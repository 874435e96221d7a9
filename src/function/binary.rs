//! Binary functions, predicates, consumers and operators.
//!
//! [`Function2`] is implemented for every `Fn(A, B) -> R`. Parameters keep
//! their positions through every combinator: pre-composition adapts each one
//! independently, partial application removes the fixed ones and leaves the
//! rest in their original order.

use std::any::TypeId;
use std::cmp::Ordering;

use crate::kind::{Descriptor, for_each_primitive};
#[cfg(feature = "memoize")]
use crate::memoize::{MemoKey, Memoized};

/// A type-erased binary function.
pub type BoxedFunction2<'a, A, B, R> = Box<dyn Fn(A, B) -> R + Send + Sync + 'a>;

macro_rules! binary_kind_adapters {
    ($(($name:ident, $variant:ident, $ty:ty)),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("[`compose`](Self::compose) with both new parameters of type `", stringify!($ty), "`.")]
                #[inline]
                fn [<compose_from_ $name>]<G1, G2>(
                    self,
                    before1: G1,
                    before2: G2,
                ) -> impl Fn($ty, $ty) -> Self::Output
                where
                    Self: Sized,
                    G1: Fn($ty) -> A,
                    G2: Fn($ty) -> B,
                {
                    self.compose(before1, before2)
                }

                #[doc = concat!("[`and_then`](Self::and_then) specialized to a `", stringify!($ty), "` result.")]
                #[inline]
                fn [<and_then_to_ $name>]<G>(self, after: G) -> impl Fn(A, B) -> $ty
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

/// A callable taking exactly two arguments.
pub trait Function2<A, B> {
    /// The result type.
    type Output;

    /// Invokes the function.
    fn apply(&self, first: A, second: B) -> Self::Output;

    /// Always `2`.
    #[inline]
    fn arity(&self) -> usize {
        2
    }

    /// Returns the kinds of the parameters and of the result.
    fn descriptor(&self) -> Descriptor
    where
        A: 'static,
        B: 'static,
        Self::Output: 'static,
    {
        Descriptor::from_type_ids(
            &[TypeId::of::<A>(), TypeId::of::<B>()],
            TypeId::of::<Self::Output>(),
        )
    }

    /// Pre-composes one adapter per parameter.
    ///
    /// Adapters run left to right before `self`; a panic in one of them
    /// skips the remaining adapters and `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nary::prelude::*;
    ///
    /// let add = |left: i64, right: i64| left + right;
    /// let add_lengths = add.compose(|text: &str| text.len() as i64, |items: Vec<u8>| items.len() as i64);
    ///
    /// assert_eq!(add_lengths("abc", vec![1, 2]), 5);
    /// ```
    #[inline]
    fn compose<C1, C2, G1, G2>(self, before1: G1, before2: G2) -> impl Fn(C1, C2) -> Self::Output
    where
        Self: Sized,
        G1: Fn(C1) -> A,
        G2: Fn(C2) -> B,
    {
        move |first, second| self.apply(before1(first), before2(second))
    }

    /// Post-composes `after` on the result.
    #[inline]
    fn and_then<G, V>(self, after: G) -> impl Fn(A, B) -> V
    where
        Self: Sized,
        G: Fn(Self::Output) -> V,
    {
        move |first, second| after(self.apply(first, second))
    }

    for_each_primitive!(binary_kind_adapters);

    /// Fixes the first argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nary::prelude::*;
    ///
    /// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
    ///
    /// assert_eq!(subtract.fix_first(10)(3), 7);
    /// assert_eq!(subtract.fix_second(10)(3), -7);
    /// ```
    #[inline]
    fn fix_first(self, first: A) -> impl Fn(B) -> Self::Output
    where
        Self: Sized,
        A: Clone,
    {
        move |second| self.apply(first.clone(), second)
    }

    /// Fixes the second argument.
    #[inline]
    fn fix_second(self, second: B) -> impl Fn(A) -> Self::Output
    where
        Self: Sized,
        B: Clone,
    {
        move |first| self.apply(first, second.clone())
    }

    /// Fixes both arguments, producing a thunk.
    #[inline]
    fn fix_all(self, first: A, second: B) -> impl Fn() -> Self::Output
    where
        Self: Sized,
        A: Clone,
        B: Clone,
    {
        move || self.apply(first.clone(), second.clone())
    }

    /// Caches results by argument pair; see [`Memoized`].
    #[cfg(feature = "memoize")]
    fn memoized(self) -> impl Function2<A, B, Output = Self::Output>
    where
        Self: Sized,
        A: MemoKey,
        B: MemoKey,
        Self::Output: Clone,
    {
        Memoized::<Self, (A::Key, B::Key), Self::Output>::new(self)
    }

    /// Erases the concrete type behind a box.
    #[inline]
    fn boxed<'a>(self) -> BoxedFunction2<'a, A, B, Self::Output>
    where
        Self: Sized + Send + Sync + 'a,
    {
        Box::new(move |first, second| self.apply(first, second))
    }

    /// Turns any implementation back into a plain closure.
    #[inline]
    fn into_fn(self) -> impl Fn(A, B) -> Self::Output
    where
        Self: Sized,
    {
        move |first, second| self.apply(first, second)
    }
}

impl<F, A, B, R> Function2<A, B> for F
where
    F: Fn(A, B) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&self, first: A, second: B) -> R {
        self(first, second)
    }
}

/// A binary function producing `bool`.
pub trait Predicate2<A, B>: Function2<A, B, Output = bool> {
    /// Evaluates the predicate.
    #[inline]
    fn test(&self, first: A, second: B) -> bool {
        self.apply(first, second)
    }

    /// Logical negation.
    #[inline]
    fn negate(self) -> impl Fn(A, B) -> bool
    where
        Self: Sized,
    {
        move |first, second| !self.apply(first, second)
    }

    /// Short-circuiting conjunction; `other` runs only when `self` holds.
    #[inline]
    fn and<Q>(self, other: Q) -> impl Fn(A, B) -> bool
    where
        Self: Sized,
        Q: Fn(A, B) -> bool,
        A: Clone,
        B: Clone,
    {
        move |first: A, second: B| self.apply(first.clone(), second.clone()) && other(first, second)
    }

    /// Short-circuiting disjunction; `other` runs only when `self` fails.
    #[inline]
    fn or<Q>(self, other: Q) -> impl Fn(A, B) -> bool
    where
        Self: Sized,
        Q: Fn(A, B) -> bool,
        A: Clone,
        B: Clone,
    {
        move |first: A, second: B| self.apply(first.clone(), second.clone()) || other(first, second)
    }

    /// Exclusive or; both sides are always evaluated.
    #[inline]
    fn xor<Q>(self, other: Q) -> impl Fn(A, B) -> bool
    where
        Self: Sized,
        Q: Fn(A, B) -> bool,
        A: Clone,
        B: Clone,
    {
        move |first: A, second: B| self.apply(first.clone(), second.clone()) ^ other(first, second)
    }
}

impl<P, A, B> Predicate2<A, B> for P where P: Function2<A, B, Output = bool> {}

/// A binary function producing `()`.
pub trait Consumer2<A, B>: Function2<A, B, Output = ()> {
    /// Runs the consumer.
    #[inline]
    fn accept(&self, first: A, second: B) {
        self.apply(first, second);
    }

    /// Runs `self`, then `after`, with the same arguments.
    #[inline]
    fn and_then_accept<G>(self, after: G) -> impl Fn(A, B)
    where
        Self: Sized,
        G: Fn(A, B),
        A: Clone,
        B: Clone,
    {
        move |first: A, second: B| {
            self.apply(first.clone(), second.clone());
            after(first, second);
        }
    }
}

impl<C, A, B> Consumer2<A, B> for C where C: Function2<A, B, Output = ()> {}

/// A predicate that holds for every pair of arguments.
#[inline]
pub fn always_true<A, B>() -> impl Fn(A, B) -> bool {
    |_, _| true
}

/// A predicate that holds for no pair of arguments.
#[inline]
pub fn always_false<A, B>() -> impl Fn(A, B) -> bool {
    |_, _| false
}

/// A function ignoring its arguments and returning a clone of `value`.
#[inline]
pub fn constant<A, B, R: Clone>(value: R) -> impl Fn(A, B) -> R {
    move |_, _| value.clone()
}

/// A predicate comparing each argument with the target in the same position.
#[inline]
pub fn is_equal<A: PartialEq, B: PartialEq>(target1: A, target2: B) -> impl Fn(A, B) -> bool {
    move |first, second| first == target1 && second == target2
}

/// The binary operator returning the lesser argument according to
/// `comparator`, preferring the first on ties.
///
/// # Examples
///
/// ```rust
/// use nary::binary;
///
/// let shortest = binary::min_by(|left: &&str, right: &&str| left.len().cmp(&right.len()));
/// assert_eq!(shortest("pear", "fig"), "fig");
/// assert_eq!(shortest("kiwi", "plum"), "kiwi");
/// ```
#[inline]
pub fn min_by<T, C>(comparator: C) -> impl Fn(T, T) -> T
where
    C: Fn(&T, &T) -> Ordering,
{
    move |first, second| {
        if comparator(&first, &second) == Ordering::Greater {
            second
        } else {
            first
        }
    }
}

/// The binary operator returning the greater argument according to
/// `comparator`, preferring the first on ties.
#[inline]
pub fn max_by<T, C>(comparator: C) -> impl Fn(T, T) -> T
where
    C: Fn(&T, &T) -> Ordering,
{
    move |first, second| {
        if comparator(&first, &second) == Ordering::Less {
            second
        } else {
            first
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use rstest::rstest;
    use std::cell::RefCell;

    #[test]
    fn test_descriptor_of_mixed_predicate() {
        let within = |value: f64, limit: String| value < limit.len() as f64;
        let descriptor = within.descriptor();

        assert_eq!(within.arity(), 2);
        assert_eq!(descriptor.inputs(), &[Kind::Double, Kind::Generic]);
        assert!(descriptor.is_predicate());
        assert!(!descriptor.is_operator());
    }

    #[test]
    fn test_operator_descriptor() {
        let add = |left: i32, right: i32| left + right;
        assert!(add.descriptor().is_operator());
    }

    #[test]
    fn test_compose_evaluates_adapters_left_to_right() {
        let order = RefCell::new(Vec::new());
        let pair = |first: i32, second: i32| (first, second);
        let composed = pair.compose(
            |value: i32| {
                order.borrow_mut().push("first");
                value + 1
            },
            |value: i32| {
                order.borrow_mut().push("second");
                value + 2
            },
        );

        assert_eq!(composed(0, 0), (1, 2));
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_compose_from_double() {
        let add = |left: i64, right: i64| left + right;
        #[allow(clippy::cast_possible_truncation)]
        let truncating = add.compose_from_double(|value: f64| value as i64, |value: f64| value as i64);
        assert_eq!(truncating(1.9, 2.9), 3);
    }

    #[test]
    fn test_and_then_to_long() {
        let multiply = |left: i32, right: i32| left * right;
        let widened = multiply.and_then_to_long(i64::from);
        assert_eq!(widened(6, 7), 42_i64);
    }

    #[test]
    fn test_fix_all_leaves_original_usable() {
        let join = |left: String, right: String| format!("{left}{right}");
        let thunk = join.fix_all("a".to_string(), "b".to_string());
        assert_eq!(thunk(), "ab");
        assert_eq!(thunk(), "ab");
    }

    #[rstest]
    #[case(false, false, false)]
    #[case(false, true, true)]
    #[case(true, false, true)]
    #[case(true, true, false)]
    fn test_xor_truth_table(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        let combined = constant::<i32, i32, _>(left).xor(constant(right));
        assert_eq!(combined(0, 0), expected);
    }

    #[test]
    fn test_is_equal_per_component() {
        let matches = is_equal(Some("x"), None::<i32>);
        assert!(matches(Some("x"), None));
        assert!(!matches(Some("y"), None));
        assert!(!matches(Some("x"), Some(1)));
    }

    #[test]
    fn test_min_max_prefer_first_on_ties() {
        let by_length = |left: &String, right: &String| left.len().cmp(&right.len());
        let min = min_by(by_length);
        let max = max_by(by_length);

        assert_eq!(min("ab".to_string(), "cd".to_string()), "ab");
        assert_eq!(max("ab".to_string(), "cd".to_string()), "ab");
        assert_eq!(max("a".to_string(), "cd".to_string()), "cd");
    }

    #[test]
    fn test_consumer_and_then_accept() {
        let seen = RefCell::new(Vec::new());
        let record = |key: &'static str, value: i32| seen.borrow_mut().push(format!("{key}={value}"));
        let twice = record.and_then_accept(|key: &'static str, value: i32| {
            seen.borrow_mut().push(format!("{key}:{value}"));
        });

        twice.accept("k", 1);
        assert_eq!(*seen.borrow(), vec!["k=1".to_string(), "k:1".to_string()]);
    }
}
