//! The term-combination protocol shared by every expression type.
//!
//! `multiply` and `sum` accept any number of terms and fold them strictly
//! left to right: `receiver ⊗ t0 ⊗ t1 ⊗ ...`. Each step dispatches on the
//! term's variant and returns a fresh value, so operands are never
//! modified. The first failing step aborts the fold.

use std::borrow::Borrow;

use polyalg_core::{AlgebraError, Result, Variable};
use tracing::{debug, trace};

use crate::monomial::{sum_monomials, Monomial};
use crate::polynomial::Polynomial;
use crate::term::{finite_scalar, Expression, Term};

/// Capability shared by variables, monomials, polynomials and expressions.
pub trait Algebraic {
    /// Multiplies by a single term.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::UnsupportedTermType`] for a non-finite scalar
    /// and [`AlgebraError::ExponentOverflow`] when a power overflows.
    fn multiply_term(&self, term: &Term) -> Result<Expression>;

    /// Adds a single term.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::UnsupportedTermType`] for a non-finite scalar.
    fn sum_term(&self, term: &Term) -> Result<Expression>;

    /// Returns `self` as an [`Expression`].
    fn to_expression(&self) -> Expression;

    /// Multiplies by every term in order.
    ///
    /// An empty list returns the receiver unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a step.
    fn multiply(&self, terms: &[Term]) -> Result<Expression> {
        fold_terms(self, terms.iter().map(Ok), Combine::Product)
    }

    /// Adds every term in order.
    ///
    /// An empty list returns the receiver unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a step.
    fn sum(&self, terms: &[Term]) -> Result<Expression> {
        fold_terms(self, terms.iter().map(Ok), Combine::Sum)
    }

    /// Multiplies by the outputs of an upstream pipeline.
    ///
    /// The first `Err` item is returned as-is and nothing after it is
    /// combined.
    ///
    /// # Errors
    ///
    /// Returns the first upstream error, or a step error converted into `E`.
    fn try_multiply<I, T, E>(&self, terms: I) -> std::result::Result<Expression, E>
    where
        Self: Sized,
        I: IntoIterator<Item = std::result::Result<T, E>>,
        T: Borrow<Term>,
        E: From<AlgebraError>,
    {
        fold_terms(self, terms, Combine::Product)
    }

    /// Adds the outputs of an upstream pipeline.
    ///
    /// The first `Err` item is returned as-is and nothing after it is
    /// combined.
    ///
    /// # Errors
    ///
    /// Returns the first upstream error, or a step error converted into `E`.
    fn try_sum<I, T, E>(&self, terms: I) -> std::result::Result<Expression, E>
    where
        Self: Sized,
        I: IntoIterator<Item = std::result::Result<T, E>>,
        T: Borrow<Term>,
        E: From<AlgebraError>,
    {
        fold_terms(self, terms, Combine::Sum)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Combine {
    Product,
    Sum,
}

impl Combine {
    const fn name(self) -> &'static str {
        match self {
            Combine::Product => "multiply",
            Combine::Sum => "sum",
        }
    }

    fn apply<A: Algebraic + ?Sized>(self, lhs: &A, term: &Term) -> Result<Expression> {
        match self {
            Combine::Product => lhs.multiply_term(term),
            Combine::Sum => lhs.sum_term(term),
        }
    }
}

fn fold_terms<A, I, T, E>(receiver: &A, terms: I, op: Combine) -> std::result::Result<Expression, E>
where
    A: Algebraic + ?Sized,
    I: IntoIterator<Item = std::result::Result<T, E>>,
    T: Borrow<Term>,
    E: From<AlgebraError>,
{
    let mut acc: Option<Expression> = None;

    for (step, item) in terms.into_iter().enumerate() {
        let term = match item {
            Ok(term) => term,
            Err(err) => {
                debug!(target: "polyalg::combine", op = op.name(), position = step, "upstream error");
                return Err(err);
            }
        };
        let term: &Term = term.borrow();
        trace!(target: "polyalg::combine", op = op.name(), step, term = %term, "combining");

        let next = match &acc {
            None => op.apply(receiver, term),
            Some(expr) => op.apply(expr, term),
        };
        match next {
            Ok(expr) => acc = Some(expr),
            Err(err) => {
                debug!(target: "polyalg::combine", op = op.name(), step, error = %err, "step failed");
                return Err(err.into());
            }
        }
    }

    Ok(acc.unwrap_or_else(|| receiver.to_expression()))
}

impl Algebraic for Variable {
    fn multiply_term(&self, term: &Term) -> Result<Expression> {
        Ok(match term {
            Term::Scalar(c) => {
                Expression::Monomial(Monomial::var(self.clone()).scale(finite_scalar(*c)?))
            }
            Term::Variable(v) => {
                Expression::Monomial(Monomial::var(self.clone()).mul_variable(v)?)
            }
            Term::Monomial(m) => Expression::Monomial(m.mul_variable(self)?),
            Term::Polynomial(p) => Expression::Polynomial(p.mul_variable(self)?),
        })
    }

    fn sum_term(&self, term: &Term) -> Result<Expression> {
        Ok(match term {
            Term::Scalar(c) => Expression::Polynomial(Polynomial::new(vec![
                Monomial::constant(finite_scalar(*c)?),
                Monomial::var(self.clone()),
            ])),
            Term::Variable(v) => sum_monomials(Monomial::var(self.clone()), Monomial::var(v.clone())),
            Term::Monomial(m) => sum_monomials(Monomial::var(self.clone()), m.clone()),
            Term::Polynomial(p) => {
                let mut monomials = Vec::with_capacity(p.len() + 1);
                monomials.push(Monomial::var(self.clone()));
                monomials.extend(p.monomials.iter().cloned());
                Expression::Polynomial(Polynomial::new(monomials))
            }
        })
    }

    fn to_expression(&self) -> Expression {
        Expression::Variable(self.clone())
    }
}
