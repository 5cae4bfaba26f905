//! Errors raised while building or combining expressions.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AlgebraError>;

/// Errors that can occur while building or combining expressions.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AlgebraError {
    /// An operand could not be used as a term.
    #[error("unsupported term type: {found}")]
    UnsupportedTermType {
        /// Description of the rejected operand.
        found: String,
    },

    /// A variable vector was requested with a non-positive length.
    #[error("variable vector length must be at least 1; received {requested}")]
    InvalidVectorLength {
        /// The requested length.
        requested: i64,
    },

    /// A monomial was built with misaligned variable and exponent lists.
    #[error("monomial has {variables} variables but {exponents} exponents")]
    ExponentCountMismatch {
        /// Number of variables supplied.
        variables: usize,
        /// Number of exponents supplied.
        exponents: usize,
    },

    /// Raising a variable's power would exceed the largest exponent.
    #[error("exponent of `{name}` overflows")]
    ExponentOverflow {
        /// Name of the variable whose exponent overflowed.
        name: String,
    },

    /// Evaluation needed a value for a variable that was not bound.
    #[error("no value bound for variable `{name}`")]
    UnboundVariable {
        /// Name of the missing variable.
        name: String,
    },
}

impl AlgebraError {
    /// Builds an [`AlgebraError::UnsupportedTermType`] from anything printable.
    pub fn unsupported(found: impl Into<String>) -> Self {
        Self::UnsupportedTermType {
            found: found.into(),
        }
    }
}
