//! # nary
//!
//! N-ary function, predicate, consumer and operator traits with a uniform set
//! of combinators.
//!
//! ## Overview
//!
//! Instead of one named interface per combination of arity and argument
//! type, this crate provides one generic trait family per arity, implemented
//! for every matching closure:
//!
//! - **Functions**: [`Function1`](function::Function1),
//!   [`Function2`](function::Function2), [`Function3`](function::Function3)
//!   with `compose`, `and_then`, `compose_from_<kind>`, `and_then_to_<kind>`,
//!   partial application (`fix_first`, `fix_second_third`, ...), `boxed`
//!   and `memoized`
//! - **Predicates**: `negate`, short-circuiting `and` / `or`, and `xor`
//! - **Consumers**: `and_then_accept`
//! - **Factories**: `always_true`, `always_false`, `constant`, `is_equal`
//!   in [`unary`], [`binary`] and [`ternary`]
//! - **Memoization**: [`Memoized`](memoize::Memoized), a thread-safe cache
//!   computing each argument tuple exactly once
//! - **Fallible functions**: `nest`, `nest_with` and `recover` for functions
//!   returning `Result`
//! - **Kinds**: [`Kind`](kind::Kind) and [`Descriptor`](kind::Descriptor)
//!   describing the signature of any callable
//!
//! ## Feature Flags
//!
//! - `memoize` (default): memoization cache
//! - `fallible` (default): adapters for `Result`-returning functions
//! - `fxhash` / `ahash`: faster hashers for the memoization cache
//! - `serde`: serialization of kinds and descriptors
//! - `tracing`: cache and failure events through `tracing`
//! - `full`: `memoize`, `fallible`, `serde` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use nary::prelude::*;
//!
//! let in_range = |value: i32, low: i32, high: i32| low <= value && value <= high;
//! let is_digit = in_range.fix_second_third(0, 9);
//! let is_not_digit = is_digit.negate();
//!
//! assert!(is_not_digit(10));
//! assert!(!is_not_digit(4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the traits, so that their methods are callable on closures,
/// together with the commonly used types.
///
/// # Usage
///
/// ```rust
/// use nary::prelude::*;
/// ```
pub mod prelude {
    pub use crate::function::*;

    pub use crate::kind::{Descriptor, Kind};

    #[cfg(feature = "memoize")]
    pub use crate::memoize::{MemoKey, Memoized};

    #[cfg(feature = "fallible")]
    pub use crate::fallible::{Fallible1, Fallible2, Fallible3, NestedError};
}

pub mod function;
pub mod kind;

#[cfg(feature = "memoize")]
pub mod memoize;

#[cfg(feature = "fallible")]
pub mod fallible;

pub use function::{binary, ternary, unary};
