//! Polynomials as ordered sums of monomials.
//!
//! Arithmetic here never merges like monomials: products distribute and
//! sums concatenate. Call [`Polynomial::canonicalize`] to combine them.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::ops::{Add, Mul, Neg};

use num_traits::{One, Zero};
use polyalg_core::{Result, Variable};

use crate::algebraic::Algebraic;
use crate::monomial::Monomial;
use crate::term::{finite_scalar, Expression, Term};

/// A sum of monomials.
///
/// Structurally equal monomials are not deduplicated.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Polynomial {
    /// The summands, in insertion order.
    pub monomials: Vec<Monomial>,
}

impl Polynomial {
    /// Creates a polynomial from its monomials.
    #[must_use]
    pub fn new(monomials: Vec<Monomial>) -> Self {
        Self { monomials }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::new(vec![Monomial::constant(c)])
    }

    /// Returns the number of monomials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.monomials.len()
    }

    /// Returns true if there are no monomials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monomials.is_empty()
    }

    /// Computes the total degree.
    #[must_use]
    pub fn degree(&self) -> u64 {
        self.monomials
            .iter()
            .map(Monomial::degree)
            .max()
            .unwrap_or(0)
    }

    /// Returns the distinct variables with a positive exponent, in the
    /// order they first appear.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut seen: Vec<Variable> = Vec::new();
        for (v, _) in self.monomials.iter().flat_map(Monomial::powers) {
            if v.found_in(&seen).is_none() {
                seen.push(v.clone());
            }
        }
        seen
    }

    /// Evaluates the polynomial with the given variable values.
    ///
    /// # Errors
    ///
    /// Returns [`polyalg_core::AlgebraError::UnboundVariable`] when a
    /// variable has no value.
    pub fn evaluate<S: BuildHasher>(&self, values: &HashMap<Variable, f64, S>) -> Result<f64> {
        self.monomials
            .iter()
            .try_fold(0.0, |acc, m| Ok(acc + m.evaluate(values)?))
    }

    /// Multiplies every monomial by a scalar.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        self.monomials.iter().map(|m| m.scale(c)).collect()
    }

    /// Multiplies every monomial by a variable.
    ///
    /// # Errors
    ///
    /// Returns the first exponent error raised by a monomial product.
    pub fn mul_variable(&self, v: &Variable) -> Result<Self> {
        self.monomials.iter().map(|m| m.mul_variable(v)).collect()
    }

    /// Multiplies every monomial by `m`.
    ///
    /// # Errors
    ///
    /// Returns the first exponent error raised by a monomial product.
    pub fn mul_monomial(&self, m: &Monomial) -> Result<Self> {
        self.monomials.iter().map(|q| q.mul_monomial(m)).collect()
    }

    /// Multiplies two polynomials by full distribution.
    ///
    /// The result holds `self.len() * other.len()` monomials, ordered by
    /// the left operand first.
    ///
    /// # Errors
    ///
    /// Returns the first exponent error raised by a monomial product.
    pub fn mul_polynomial(&self, other: &Self) -> Result<Self> {
        let mut monomials = Vec::with_capacity(self.len() * other.len());

        for m1 in &self.monomials {
            for m2 in &other.monomials {
                monomials.push(m1.mul_monomial(m2)?);
            }
        }

        Ok(Self::new(monomials))
    }

    /// Adds two polynomials by concatenating their monomials.
    #[must_use]
    pub fn add_polynomial(&self, other: &Self) -> Self {
        let mut monomials = Vec::with_capacity(self.len() + other.len());
        monomials.extend(self.monomials.iter().cloned());
        monomials.extend(other.monomials.iter().cloned());
        Self::new(monomials)
    }

    fn pushed(&self, m: Monomial) -> Self {
        let mut sum = self.clone();
        sum.monomials.push(m);
        sum
    }
}

impl Algebraic for Polynomial {
    fn multiply_term(&self, term: &Term) -> Result<Expression> {
        let product = match term {
            Term::Scalar(c) => self.scale(finite_scalar(*c)?),
            Term::Variable(v) => self.mul_variable(v)?,
            Term::Monomial(m) => self.mul_monomial(m)?,
            Term::Polynomial(p) => self.mul_polynomial(p)?,
        };
        Ok(Expression::Polynomial(product))
    }

    fn sum_term(&self, term: &Term) -> Result<Expression> {
        let sum = match term {
            Term::Scalar(c) => self.pushed(Monomial::constant(finite_scalar(*c)?)),
            Term::Variable(v) => self.pushed(Monomial::var(v.clone())),
            Term::Monomial(m) => self.pushed(m.clone()),
            Term::Polynomial(p) => self.add_polynomial(p),
        };
        Ok(Expression::Polynomial(sum))
    }

    fn to_expression(&self) -> Expression {
        Expression::Polynomial(self.clone())
    }
}

impl From<Monomial> for Polynomial {
    fn from(m: Monomial) -> Self {
        Self::new(vec![m])
    }
}

impl From<Variable> for Polynomial {
    fn from(v: Variable) -> Self {
        Self::new(vec![Monomial::var(v)])
    }
}

impl FromIterator<Monomial> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Monomial>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(mut self, rhs: Polynomial) -> Polynomial {
        self.monomials.extend(rhs.monomials);
        self
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        self.add_polynomial(rhs)
    }
}

/// # Panics
///
/// Panics if an exponent overflows; use [`Polynomial::mul_polynomial`] to
/// get the error instead.
impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

/// # Panics
///
/// Panics if an exponent overflows; use [`Polynomial::mul_polynomial`] to
/// get the error instead.
impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self.mul_polynomial(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::default()
    }

    /// True when every coefficient is zero (including the empty sum).
    fn is_zero(&self) -> bool {
        self.monomials.iter().all(|m| m.coefficient == 0.0)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }

        for (i, m) in self.monomials.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}
