//! Named symbolic variables.
//!
//! A variable is identified purely by its name: two independently
//! constructed variables named `x` are the same algebraic symbol.

use std::fmt;

use crate::error::{AlgebraError, Result};

/// An atomic named symbol.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Variable {
    /// The symbol's name.
    pub name: String,
}

impl Variable {
    /// Creates a variable with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the variable's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if both variables carry the same name.
    #[must_use]
    pub fn is_equal_to(&self, other: &Variable) -> bool {
        self.name == other.name
    }

    /// Returns the first position in `variables` holding this variable.
    #[must_use]
    pub fn found_in(&self, variables: &[Variable]) -> Option<usize> {
        variables.iter().position(|v| v.is_equal_to(self))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Self { name }
    }
}

/// Creates `n` variables named `{base}0, {base}1, ..., {base}{n-1}`.
///
/// # Errors
///
/// Returns [`AlgebraError::InvalidVectorLength`] when `n < 1`.
pub fn variable_vector(base: &str, n: i64) -> Result<Vec<Variable>> {
    if n < 1 {
        return Err(AlgebraError::InvalidVectorLength { requested: n });
    }

    Ok((0..n).map(|i| Variable::new(format!("{base}{i}"))).collect())
}
