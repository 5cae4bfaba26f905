//! Operands and results of the term-combination protocol.
//!
//! [`Term`] is the closed set of operands accepted by `multiply` and `sum`;
//! [`Expression`] is the closed set of values they produce.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use polyalg_core::{AlgebraError, Result, Variable};

use crate::algebraic::Algebraic;
use crate::monomial::Monomial;
use crate::polynomial::Polynomial;

/// One operand in a `multiply` or `sum` call.
#[derive(Clone, PartialEq, Debug)]
pub enum Term {
    /// A plain scalar.
    Scalar(f64),
    /// A single variable.
    Variable(Variable),
    /// A monomial.
    Monomial(Monomial),
    /// A polynomial.
    Polynomial(Polynomial),
}

impl Term {
    /// Returns a short name for the operand kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Term::Scalar(_) => "scalar",
            Term::Variable(_) => "variable",
            Term::Monomial(_) => "monomial",
            Term::Polynomial(_) => "polynomial",
        }
    }

    /// Returns true for variables, monomials and polynomials.
    #[must_use]
    pub const fn is_expression(&self) -> bool {
        !matches!(self, Term::Scalar(_))
    }

    /// Converts an untyped operand into a term.
    ///
    /// Accepts the numeric primitives, [`Variable`], [`Monomial`],
    /// [`Polynomial`], [`Expression`] and [`Term`] itself.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::UnsupportedTermType`] for any other type and
    /// for non-finite scalars.
    pub fn from_any(value: &dyn Any) -> Result<Self> {
        let term = if let Some(&c) = value.downcast_ref::<f64>() {
            Term::Scalar(c)
        } else if let Some(&c) = value.downcast_ref::<f32>() {
            Term::Scalar(f64::from(c))
        } else if let Some(&c) = value.downcast_ref::<i32>() {
            Term::Scalar(f64::from(c))
        } else if let Some(&c) = value.downcast_ref::<u32>() {
            Term::Scalar(f64::from(c))
        } else if let Some(v) = value.downcast_ref::<Variable>() {
            Term::Variable(v.clone())
        } else if let Some(m) = value.downcast_ref::<Monomial>() {
            Term::Monomial(m.clone())
        } else if let Some(p) = value.downcast_ref::<Polynomial>() {
            Term::Polynomial(p.clone())
        } else if let Some(e) = value.downcast_ref::<Expression>() {
            Term::from(e.clone())
        } else if let Some(t) = value.downcast_ref::<Term>() {
            t.clone()
        } else {
            return Err(AlgebraError::unsupported("unrecognised operand type"));
        };

        if let Term::Scalar(c) = term {
            finite_scalar(c)?;
        }
        Ok(term)
    }
}

/// Rejects NaN and infinite scalars.
pub(crate) fn finite_scalar(c: f64) -> Result<f64> {
    if c.is_finite() {
        Ok(c)
    } else {
        Err(AlgebraError::unsupported(format!("non-finite scalar {c}")))
    }
}

impl From<f64> for Term {
    fn from(c: f64) -> Self {
        Term::Scalar(c)
    }
}

impl From<i32> for Term {
    fn from(c: i32) -> Self {
        Term::Scalar(f64::from(c))
    }
}

impl From<Variable> for Term {
    fn from(v: Variable) -> Self {
        Term::Variable(v)
    }
}

impl From<&Variable> for Term {
    fn from(v: &Variable) -> Self {
        Term::Variable(v.clone())
    }
}

impl From<Monomial> for Term {
    fn from(m: Monomial) -> Self {
        Term::Monomial(m)
    }
}

impl From<Polynomial> for Term {
    fn from(p: Polynomial) -> Self {
        Term::Polynomial(p)
    }
}

impl From<Expression> for Term {
    fn from(e: Expression) -> Self {
        match e {
            Expression::Variable(v) => Term::Variable(v),
            Expression::Monomial(m) => Term::Monomial(m),
            Expression::Polynomial(p) => Term::Polynomial(p),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Scalar(c) => write!(f, "{c}"),
            Term::Variable(v) => write!(f, "{v}"),
            Term::Monomial(m) => write!(f, "{m}"),
            Term::Polynomial(p) => write!(f, "{p}"),
        }
    }
}

/// The result of combining terms.
#[derive(Clone, PartialEq, Debug)]
pub enum Expression {
    /// A single variable.
    Variable(Variable),
    /// A monomial.
    Monomial(Monomial),
    /// A polynomial.
    Polynomial(Polynomial),
}

impl Expression {
    /// Returns a short name for the expression kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Expression::Variable(_) => "variable",
            Expression::Monomial(_) => "monomial",
            Expression::Polynomial(_) => "polynomial",
        }
    }

    /// Returns the monomial, if this is one.
    #[must_use]
    pub fn as_monomial(&self) -> Option<&Monomial> {
        match self {
            Expression::Monomial(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the polynomial, if this is one.
    #[must_use]
    pub fn as_polynomial(&self) -> Option<&Polynomial> {
        match self {
            Expression::Polynomial(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the variable, if this is one.
    #[must_use]
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Expression::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// Converts to a polynomial, lifting variables and monomials.
    #[must_use]
    pub fn into_polynomial(self) -> Polynomial {
        match self {
            Expression::Variable(v) => Polynomial::from(v),
            Expression::Monomial(m) => Polynomial::from(m),
            Expression::Polynomial(p) => p,
        }
    }

    /// Computes the total degree.
    #[must_use]
    pub fn degree(&self) -> u64 {
        match self {
            Expression::Variable(_) => 1,
            Expression::Monomial(m) => m.degree(),
            Expression::Polynomial(p) => p.degree(),
        }
    }

    /// Evaluates the expression with the given variable values.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::UnboundVariable`] when a variable has no value.
    pub fn evaluate<S: BuildHasher>(&self, values: &HashMap<Variable, f64, S>) -> Result<f64> {
        match self {
            Expression::Variable(v) => {
                values
                    .get(v)
                    .copied()
                    .ok_or_else(|| AlgebraError::UnboundVariable {
                        name: v.name.clone(),
                    })
            }
            Expression::Monomial(m) => m.evaluate(values),
            Expression::Polynomial(p) => p.evaluate(values),
        }
    }
}

impl Algebraic for Expression {
    fn multiply_term(&self, term: &Term) -> Result<Expression> {
        match self {
            Expression::Variable(v) => v.multiply_term(term),
            Expression::Monomial(m) => m.multiply_term(term),
            Expression::Polynomial(p) => p.multiply_term(term),
        }
    }

    fn sum_term(&self, term: &Term) -> Result<Expression> {
        match self {
            Expression::Variable(v) => v.sum_term(term),
            Expression::Monomial(m) => m.sum_term(term),
            Expression::Polynomial(p) => p.sum_term(term),
        }
    }

    fn to_expression(&self) -> Expression {
        self.clone()
    }
}

impl From<Variable> for Expression {
    fn from(v: Variable) -> Self {
        Expression::Variable(v)
    }
}

impl From<Monomial> for Expression {
    fn from(m: Monomial) -> Self {
        Expression::Monomial(m)
    }
}

impl From<Polynomial> for Expression {
    fn from(p: Polynomial) -> Self {
        Expression::Polynomial(p)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Variable(v) => write!(f, "{v}"),
            Expression::Monomial(m) => write!(f, "{m}"),
            Expression::Polynomial(p) => write!(f, "{p}"),
        }
    }
}
