//! The error produced by [`nest`](super::Fallible1::nest).

use std::error::Error;

type BoxedError = Box<dyn Error + Send + Sync + 'static>;

/// An error raised by a fallible function, carried as a uniform type.
///
/// The display message is the original error's message, and the original
/// error is kept as the [`source`](Error::source) so callers can still
/// [`downcast_ref`](Self::downcast_ref) to it.
///
/// # Examples
///
/// ```rust
/// use nary::fallible::NestedError;
/// use std::num::ParseIntError;
///
/// let parse_error = "x".parse::<i32>().unwrap_err();
/// let nested = NestedError::new(parse_error.clone());
///
/// assert_eq!(nested.to_string(), parse_error.to_string());
/// assert_eq!(nested.downcast_ref::<ParseIntError>(), Some(&parse_error));
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct NestedError {
    message: String,
    #[source]
    source: BoxedError,
}

impl NestedError {
    /// Wraps `error`, capturing its message.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            message: error.to_string(),
            source: Box::new(error),
        }
    }

    /// The message of the original error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the original error if it has type `E`.
    #[must_use]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }

    /// Returns the original error.
    #[must_use]
    pub fn into_source(self) -> BoxedError {
        self.source
    }
}
