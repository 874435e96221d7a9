//! Property-based tests for the combinator laws.
//!
//! ## Composition Laws
//! - **Pre-composition**: `f.compose(g1, .., gn)(a1, .., an) == f(g1(a1), .., gn(an))`
//! - **Post-composition**: `f.and_then(g)(args) == g(f(args))`
//! - **Identity**: `f.compose(identity) == f` and `f.and_then(identity) == f`
//!
//! ## Predicate Laws
//! - **Double Negation**: `p.negate().negate() == p`
//! - **De Morgan**: `p.and(q).negate() == p.negate().or(q.negate())`
//!
//! ## Partial Application Laws
//! - **Substitution**: fixing the values at a set of positions equals
//!   substituting them there
//!
//! ## Equality Factory Laws
//! - **Reflexivity**: `is_equal(t)(t) == true`
//! - **Component sensitivity**: differing in any component yields `false`

use nary::prelude::*;
use nary::{binary, ternary, unary};
use proptest::prelude::*;

fn weighted(first: i64, second: i64, third: i64) -> i64 {
    first.wrapping_mul(3).wrapping_add(second.wrapping_mul(5)).wrapping_sub(third)
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Unary pre-composition applies the adapter before the function.
    #[test]
    fn prop_unary_compose(value in any::<i32>()) {
        let function = |number: i64| number.wrapping_mul(7);
        let adapter = |number: i32| i64::from(number) - 1;

        prop_assert_eq!(function.compose(adapter)(value), function(adapter(value)));
    }

    /// Binary pre-composition applies each adapter to its own position.
    #[test]
    fn prop_binary_compose(left in any::<i16>(), right in any::<u8>()) {
        let function = |first: i32, second: i32| first.wrapping_sub(second);
        let first_adapter = |number: i16| i32::from(number) * 2;
        let second_adapter = |number: u8| i32::from(number) + 100;

        let composed = function.compose(first_adapter, second_adapter);
        prop_assert_eq!(composed(left, right), function(first_adapter(left), second_adapter(right)));
    }

    /// Ternary pre-composition applies each adapter to its own position.
    #[test]
    fn prop_ternary_compose(first in any::<i32>(), second in any::<i32>(), third in any::<i32>()) {
        let composed = weighted.compose(
            |number: i32| i64::from(number),
            |number: i32| i64::from(number).abs(),
            |number: i32| -i64::from(number),
        );

        prop_assert_eq!(
            composed(first, second, third),
            weighted(i64::from(first), i64::from(second).abs(), -i64::from(third))
        );
    }

    /// Post-composition applies the adapter to the result.
    #[test]
    fn prop_and_then(first in any::<i64>(), second in any::<i64>(), third in any::<i64>()) {
        let adapter = |number: i64| number.to_string();

        prop_assert_eq!(weighted.and_then(adapter)(first, second, third), adapter(weighted(first, second, third)));
        let sum = |left: i64, right: i64| left.wrapping_add(right);
        prop_assert_eq!(sum.and_then(adapter)(first, second), adapter(sum(first, second)));
    }

    /// Composing with identity on either side changes nothing.
    #[test]
    fn prop_identity_is_neutral(value in any::<i32>()) {
        let function = |number: i32| number.wrapping_mul(31).rotate_left(3);

        prop_assert_eq!(function.compose(unary::identity())(value), function(value));
        prop_assert_eq!(function.and_then(unary::identity())(value), function(value));
    }
}

// =============================================================================
// Predicate Laws
// =============================================================================

proptest! {
    /// Double negation returns the original answer.
    #[test]
    fn prop_double_negation(first in any::<i32>(), second in any::<i32>()) {
        let ordered = |left: i32, right: i32| left <= right;
        prop_assert_eq!(ordered.negate().negate()(first, second), ordered(first, second));
    }

    /// The boolean combinators follow De Morgan's laws.
    #[test]
    fn prop_de_morgan(value in any::<i32>()) {
        let is_even = |number: i32| number % 2 == 0;
        let is_positive = |number: i32| number > 0;

        prop_assert_eq!(
            is_even.and(is_positive).negate()(value),
            is_even.negate().or(is_positive.negate())(value)
        );
        prop_assert_eq!(
            is_even.or(is_positive).negate()(value),
            is_even.negate().and(is_positive.negate())(value)
        );
    }

    /// `xor` is true exactly when the answers differ.
    #[test]
    fn prop_xor(first in any::<u8>(), second in any::<u8>(), third in any::<u8>()) {
        let ascending = |a: u8, b: u8, c: u8| a <= b && b <= c;
        let has_zero = |a: u8, b: u8, c: u8| a == 0 || b == 0 || c == 0;

        prop_assert_eq!(
            ascending.xor(has_zero)(first, second, third),
            ascending(first, second, third) != has_zero(first, second, third)
        );
    }
}

// =============================================================================
// Partial Application Laws
// =============================================================================

proptest! {
    /// Fixing any subset of positions equals substituting at those positions.
    #[test]
    fn prop_partial_substitution(first in any::<i64>(), second in any::<i64>(), third in any::<i64>()) {
        let expected = weighted(first, second, third);

        prop_assert_eq!(weighted.fix_first(first)(second, third), expected);
        prop_assert_eq!(weighted.fix_second(second)(first, third), expected);
        prop_assert_eq!(weighted.fix_third(third)(first, second), expected);
        prop_assert_eq!(weighted.fix_first_second(first, second)(third), expected);
        prop_assert_eq!(weighted.fix_first_third(first, third)(second), expected);
        prop_assert_eq!(weighted.fix_second_third(second, third)(first), expected);
        prop_assert_eq!(weighted.fix_all(first, second, third)(), expected);
    }

    /// Binary partial application substitutes at the fixed position.
    #[test]
    fn prop_binary_partial_substitution(text in "[a-z]{0,8}", count in 0usize..4) {
        let repeat = |text: String, count: usize| text.repeat(count);
        let expected = repeat(text.clone(), count);

        prop_assert_eq!(repeat.fix_first(text.clone())(count), expected.clone());
        prop_assert_eq!(repeat.fix_second(count)(text.clone()), expected.clone());
        prop_assert_eq!(repeat.fix_all(text, count)(), expected);
    }
}

// =============================================================================
// Equality Factory Laws
// =============================================================================

proptest! {
    /// `is_equal` accepts its own targets.
    #[test]
    fn prop_is_equal_reflexive(first in any::<i32>(), second in any::<Option<bool>>(), third in ".{0,4}") {
        prop_assert!(ternary::is_equal(first, second, third.clone())(first, second, third));
        prop_assert!(binary::is_equal(first, second)(first, second));
    }

    /// `is_equal` rejects arguments differing in any component.
    #[test]
    fn prop_is_equal_component_sensitive(first in any::<i32>(), second in any::<i32>(), third in any::<i32>()) {
        let matches = ternary::is_equal(first, second, third);

        prop_assert!(!matches(first.wrapping_add(1), second, third));
        prop_assert!(!matches(first, second.wrapping_add(1), third));
        prop_assert!(!matches(first, second, third.wrapping_add(1)));
    }
}
