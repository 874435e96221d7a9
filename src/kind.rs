//! Argument and result kinds.
//!
//! Every callable in this crate has a fixed [`Descriptor`]: the ordered
//! [`Kind`]s of its parameters and the `Kind` of its result. Primitive kinds
//! are the fixed-width scalar types; everything else is [`Kind::Generic`].
//!
//! # Examples
//!
//! ```rust
//! use nary::kind::Kind;
//!
//! assert_eq!(Kind::of::<i32>(), Kind::Int);
//! assert_eq!(Kind::of::<f64>(), Kind::Double);
//! assert_eq!(Kind::of::<String>(), Kind::Generic);
//! assert_eq!(Kind::of::<()>(), Kind::Unit);
//! ```

use std::any::TypeId;
use std::fmt;

use smallvec::SmallVec;

/// Invokes `$callback!` with one `(name, Variant, type)` tuple per primitive kind.
///
/// Used to generate the kind-specialized convenience methods
/// (`compose_from_int`, `and_then_to_double`, ...) without spelling each one
/// out by hand.
macro_rules! for_each_primitive {
    ($callback:ident) => {
        $callback! {
            (boolean, Boolean, bool),
            (byte, Byte, i8),
            (char, Char, char),
            (short, Short, i16),
            (int, Int, i32),
            (long, Long, i64),
            (float, Float, f32),
            (double, Double, f64),
        }
    };
}

pub(crate) use for_each_primitive;

/// The classification of a parameter or result slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// `bool`
    Boolean,
    /// `i8`
    Byte,
    /// `char`
    Char,
    /// `i16`
    Short,
    /// `i32`
    Int,
    /// `i64`
    Long,
    /// `f32`
    Float,
    /// `f64`
    Double,
    /// `()`, the result of a consumer.
    Unit,
    /// Any other type.
    Generic,
}

macro_rules! primitive_table {
    ($(($name:ident, $variant:ident, $ty:ty)),* $(,)?) => {
        impl Kind {
            /// All primitive kinds, in declaration order.
            pub const PRIMITIVES: [Self; 8] = [$(Self::$variant),*];

            /// Returns the lowercase name of this kind.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($name),)*
                    Self::Unit => "unit",
                    Self::Generic => "generic",
                }
            }

            fn from_type_id(id: TypeId) -> Self {
                $(
                    if id == TypeId::of::<$ty>() {
                        return Self::$variant;
                    }
                )*
                if id == TypeId::of::<()>() {
                    return Self::Unit;
                }
                Self::Generic
            }
        }
    };
}

for_each_primitive!(primitive_table);

impl Kind {
    /// Classifies the type `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::from_type_id(TypeId::of::<T>())
    }

    /// Returns `true` for the eight fixed-width primitive kinds.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        !matches!(self, Self::Unit | Self::Generic)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// The invocation signature of a callable.
///
/// The number of input kinds is always the callable's arity, and a descriptor
/// never changes for the lifetime of the callable it describes.
///
/// With the `serde` feature, deserialization enforces the same invariants:
/// an arity outside `1..=3`, or an operator flag on a descriptor whose input
/// kinds differ from its output kind, is rejected with a `DescriptorError`.
///
/// # Examples
///
/// ```rust
/// use nary::prelude::*;
///
/// let is_longer = |text: String, limit: i32| text.len() > limit as usize;
/// let descriptor = is_longer.descriptor();
///
/// assert_eq!(descriptor.arity(), 2);
/// assert!(descriptor.is_predicate());
/// assert_eq!(descriptor.to_string(), "(generic, int) -> boolean");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DescriptorRepr"))]
pub struct Descriptor {
    inputs: SmallVec<[Kind; 3]>,
    output: Kind,
    operator: bool,
}

impl Descriptor {
    /// Builds the descriptor of a callable from the type ids of its
    /// parameters and of its result.
    pub(crate) fn from_type_ids(inputs: &[TypeId], output: TypeId) -> Self {
        Self {
            inputs: inputs.iter().copied().map(Kind::from_type_id).collect(),
            output: Kind::from_type_id(output),
            operator: !inputs.is_empty() && inputs.iter().all(|input| *input == output),
        }
    }

    /// The kinds of the parameters, left to right.
    #[must_use]
    pub fn inputs(&self) -> &[Kind] {
        &self.inputs
    }

    /// The kind of the result.
    #[must_use]
    pub const fn output(&self) -> Kind {
        self.output
    }

    /// The number of parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    /// Returns `true` if the callable produces a `bool`.
    #[must_use]
    pub const fn is_predicate(&self) -> bool {
        matches!(self.output, Kind::Boolean)
    }

    /// Returns `true` if the callable produces `()`.
    #[must_use]
    pub const fn is_consumer(&self) -> bool {
        matches!(self.output, Kind::Unit)
    }

    /// Returns `true` if every parameter has exactly the result's type.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        self.operator
    }
}

/// The largest arity a descriptor can have.
pub const MAX_ARITY: usize = 3;

/// A descriptor rejected while deserializing.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// The number of inputs is outside `1..=MAX_ARITY`.
    #[error("descriptor arity {0} is outside 1..=3")]
    Arity(usize),
    /// `operator` is set although an input kind differs from the output kind.
    #[error("descriptor {0} is marked as an operator but its input and output kinds differ")]
    NotAnOperator(String),
}

/// The unchecked wire form of a [`Descriptor`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DescriptorRepr {
    inputs: SmallVec<[Kind; 3]>,
    output: Kind,
    operator: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<DescriptorRepr> for Descriptor {
    type Error = DescriptorError;

    fn try_from(repr: DescriptorRepr) -> Result<Self, Self::Error> {
        let DescriptorRepr {
            inputs,
            output,
            operator,
        } = repr;

        if !(1..=MAX_ARITY).contains(&inputs.len()) {
            return Err(DescriptorError::Arity(inputs.len()));
        }

        let descriptor = Self {
            inputs,
            output,
            operator,
        };
        if operator && descriptor.inputs.iter().any(|input| *input != output) {
            return Err(DescriptorError::NotAnOperator(descriptor.to_string()));
        }
        Ok(descriptor)
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("(")?;
        for (index, kind) in self.inputs.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{kind}")?;
        }
        write!(formatter, ") -> {}", self.output)
    }
}
