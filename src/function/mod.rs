//! N-ary function traits and their combinators.
//!
//! Each arity has one family of traits, blanket-implemented for the matching
//! `Fn` closures:
//!
//! | Arity | Function | Predicate | Consumer | Factories |
//! |-------|----------|-----------|----------|-----------|
//! | 1 | [`Function1`] | [`Predicate1`] | [`Consumer1`] | [`unary`] |
//! | 2 | [`Function2`] | [`Predicate2`] | [`Consumer2`] | [`binary`] |
//! | 3 | [`Function3`] | [`Predicate3`] | [`Consumer3`] | [`ternary`] |
//!
//! Operators are functions whose parameters and result share one type; they
//! need no trait of their own (see [`unary::identity`], [`binary::min_by`]
//! and [`Descriptor::is_operator`](crate::kind::Descriptor::is_operator)).
//!
//! Every combinator consumes `self` and returns a new callable. The original
//! is never mutated, so a `Copy` closure stays usable after being combined.
//!
//! # Laws
//!
//! - **Pre-composition**: `f.compose(g1, g2)(x, y) == f(g1(x), g2(y))`
//! - **Post-composition**: `f.and_then(g)(x, y) == g(f(x, y))`
//! - **Double negation**: `p.negate().negate()(x) == p(x)`
//! - **Partial application**: `f.fix_first(a)(b) == f(a, b)`

pub mod binary;
pub mod ternary;
pub mod unary;

pub use binary::{BoxedFunction2, Consumer2, Function2, Predicate2};
pub use ternary::{BoxedFunction3, Consumer3, Function3, Predicate3};
pub use unary::{BoxedFunction1, Consumer1, Function1, Predicate1};

/// Passes an optional callable through unchanged.
///
/// An absent callable stays absent; a present one is returned as is.
///
/// # Examples
///
/// ```rust
/// use nary::function::of;
///
/// let missing: Option<fn(i32) -> i32> = None;
/// assert!(of(missing).is_none());
/// assert_eq!(of(Some(|value: i32| value + 1)).map(|function| function(1)), Some(2));
/// ```
#[inline]
pub const fn of<F>(function: Option<F>) -> Option<F> {
    function
}
