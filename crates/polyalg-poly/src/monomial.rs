//! Monomials: a coefficient times a product of variable powers.
//!
//! A monomial stores its variables and exponents as two positionally
//! aligned lists. Each distinct variable appears at most once; when an
//! operation would introduce a duplicate, the exponents are summed.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::ops::Mul;

use num_traits::One;
use polyalg_core::{AlgebraError, Result, Variable};
use tracing::trace;

use crate::algebraic::Algebraic;
use crate::polynomial::Polynomial;
use crate::term::{finite_scalar, Expression, Term};

/// A coefficient times a product of variable powers.
///
/// `exponents[i]` is the power of `variables[i]`, so the two lists must
/// have the same length. [`Monomial::new`] checks this; operations on a
/// directly built monomial with misaligned lists return
/// [`AlgebraError::ExponentCountMismatch`] instead of combining. A zero
/// exponent is allowed but the variable is skipped when rendering; see
/// [`Monomial::pruned`].
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Monomial {
    /// The scalar coefficient.
    pub coefficient: f64,
    /// The variables, each appearing at most once.
    pub variables: Vec<Variable>,
    /// The power of each variable, aligned with `variables`.
    pub exponents: Vec<u32>,
}

impl Monomial {
    /// Creates a monomial, merging repeated variables.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ExponentCountMismatch`] when the two lists
    /// differ in length, and [`AlgebraError::ExponentOverflow`] when merged
    /// repeats overflow an exponent.
    pub fn new(coefficient: f64, variables: Vec<Variable>, exponents: Vec<u32>) -> Result<Self> {
        if variables.len() != exponents.len() {
            return Err(AlgebraError::ExponentCountMismatch {
                variables: variables.len(),
                exponents: exponents.len(),
            });
        }

        let mut monomial = Self {
            coefficient,
            variables: Vec::with_capacity(variables.len()),
            exponents: Vec::with_capacity(exponents.len()),
        };
        for (v, e) in variables.into_iter().zip(exponents) {
            monomial.raise(&v, e)?;
        }
        Ok(monomial)
    }

    /// Creates the constant monomial `c`.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self {
            coefficient: c,
            variables: Vec::new(),
            exponents: Vec::new(),
        }
    }

    /// Creates the monomial `1 * v`.
    #[must_use]
    pub fn var(v: Variable) -> Self {
        Self {
            coefficient: 1.0,
            variables: vec![v],
            exponents: vec![1],
        }
    }

    /// Returns an independent copy of this monomial.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns the exponent of `v`, or zero if `v` does not occur.
    #[must_use]
    pub fn exponent_of(&self, v: &Variable) -> u32 {
        v.found_in(&self.variables)
            .and_then(|i| self.exponents.get(i).copied())
            .unwrap_or(0)
    }

    /// Computes the total degree.
    #[must_use]
    pub fn degree(&self) -> u64 {
        self.exponents.iter().copied().map(u64::from).sum()
    }

    /// Returns true if no variable has a positive exponent.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Iterates over the `(variable, exponent)` pairs with positive exponent.
    pub fn powers(&self) -> impl Iterator<Item = (&Variable, u32)> {
        self.variables
            .iter()
            .zip(self.exponents.iter().copied())
            .filter(|&(_, e)| e > 0)
    }

    /// Returns true if both monomials have the same variable powers,
    /// regardless of coefficient, variable order, or zero exponents.
    #[must_use]
    pub fn is_like(&self, other: &Monomial) -> bool {
        self.powers().count() == other.powers().count()
            && self.powers().all(|(v, e)| other.exponent_of(v) == e)
    }

    /// Returns a copy without zero-exponent entries.
    #[must_use]
    pub fn pruned(&self) -> Self {
        let (variables, exponents): (Vec<_>, Vec<_>) = self
            .powers()
            .map(|(v, e)| (v.clone(), e))
            .unzip();
        Self {
            coefficient: self.coefficient,
            variables,
            exponents,
        }
    }

    /// Multiplies the coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        let mut product = self.clone();
        product.coefficient *= c;
        product
    }

    /// Multiplies by a single variable.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ExponentOverflow`] when the power of `v`
    /// is already at its maximum.
    pub fn mul_variable(&self, v: &Variable) -> Result<Self> {
        let mut product = self.clone();
        product.raise(v, 1)?;
        Ok(product)
    }

    /// Multiplies two monomials.
    ///
    /// Variables of `self` keep their positions; variables only present
    /// in `other` are appended in `other`'s order.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ExponentOverflow`] when a summed exponent
    /// does not fit, and [`AlgebraError::ExponentCountMismatch`] when either
    /// operand has misaligned lists.
    pub fn mul_monomial(&self, other: &Monomial) -> Result<Self> {
        other.check_aligned()?;
        let mut product = self.scale(other.coefficient);
        for (v, &e) in other.variables.iter().zip(&other.exponents) {
            product.raise(v, e)?;
        }
        trace!(lhs = %self, rhs = %other, product = %product, "monomial product");
        Ok(product)
    }

    /// Adds the coefficient of `other` if the two monomials are alike.
    #[must_use]
    pub fn add_like(&self, other: &Monomial) -> Option<Self> {
        self.is_like(other).then(|| {
            let mut sum = self.clone();
            sum.coefficient += other.coefficient;
            sum
        })
    }

    /// Evaluates the monomial with the given variable values.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::UnboundVariable`] when a variable with a
    /// positive exponent has no value.
    pub fn evaluate<S: BuildHasher>(&self, values: &HashMap<Variable, f64, S>) -> Result<f64> {
        self.powers().try_fold(self.coefficient, |acc, (v, e)| {
            let x = values
                .get(v)
                .ok_or_else(|| AlgebraError::UnboundVariable {
                    name: v.name.clone(),
                })?;
            Ok(acc * x.powi(i32::try_from(e).unwrap_or(i32::MAX)))
        })
    }

    fn check_aligned(&self) -> Result<()> {
        if self.variables.len() == self.exponents.len() {
            Ok(())
        } else {
            Err(AlgebraError::ExponentCountMismatch {
                variables: self.variables.len(),
                exponents: self.exponents.len(),
            })
        }
    }

    /// Raises the power of `v` by `e`, appending `v` if absent.
    fn raise(&mut self, v: &Variable, e: u32) -> Result<()> {
        self.check_aligned()?;
        match v.found_in(&self.variables) {
            Some(i) => {
                self.exponents[i] = self.exponents[i].checked_add(e).ok_or_else(|| {
                    AlgebraError::ExponentOverflow {
                        name: v.name.clone(),
                    }
                })?;
            }
            None => {
                self.variables.push(v.clone());
                self.exponents.push(e);
            }
        }
        Ok(())
    }
}

/// Sums two monomials, combining them when alike.
pub(crate) fn sum_monomials(lhs: Monomial, rhs: Monomial) -> Expression {
    match lhs.add_like(&rhs) {
        Some(sum) => Expression::Monomial(sum),
        None => Expression::Polynomial(Polynomial::new(vec![lhs, rhs])),
    }
}

impl Algebraic for Monomial {
    fn multiply_term(&self, term: &Term) -> Result<Expression> {
        Ok(match term {
            Term::Scalar(c) => Expression::Monomial(self.scale(finite_scalar(*c)?)),
            Term::Variable(v) => Expression::Monomial(self.mul_variable(v)?),
            Term::Monomial(m) => Expression::Monomial(self.mul_monomial(m)?),
            Term::Polynomial(p) => Expression::Polynomial(
                p.monomials
                    .iter()
                    .map(|q| self.mul_monomial(q))
                    .collect::<Result<Polynomial>>()?,
            ),
        })
    }

    fn sum_term(&self, term: &Term) -> Result<Expression> {
        Ok(match term {
            Term::Scalar(c) => sum_monomials(self.clone(), Monomial::constant(finite_scalar(*c)?)),
            Term::Variable(v) => sum_monomials(self.clone(), Monomial::var(v.clone())),
            Term::Monomial(m) => sum_monomials(self.clone(), m.clone()),
            Term::Polynomial(p) => {
                let mut monomials = Vec::with_capacity(p.len() + 1);
                monomials.push(self.clone());
                monomials.extend(p.monomials.iter().cloned());
                Expression::Polynomial(Polynomial::new(monomials))
            }
        })
    }

    fn to_expression(&self) -> Expression {
        Expression::Monomial(self.clone())
    }
}

/// # Panics
///
/// Panics if an exponent overflows; use [`Monomial::mul_monomial`] to get
/// the error instead.
impl Mul for Monomial {
    type Output = Monomial;

    fn mul(self, rhs: Monomial) -> Monomial {
        &self * &rhs
    }
}

/// # Panics
///
/// Panics if an exponent overflows; use [`Monomial::mul_monomial`] to get
/// the error instead.
impl Mul<&Monomial> for &Monomial {
    type Output = Monomial;

    fn mul(self, rhs: &Monomial) -> Monomial {
        self.mul_monomial(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl One for Monomial {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl From<Variable> for Monomial {
    fn from(v: Variable) -> Self {
        Self::var(v)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coefficient)?;
        for (v, e) in self.powers() {
            if e == 1 {
                write!(f, " {v}")?;
            } else {
                write!(f, " ({v})^{e}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn xy() -> (Variable, Variable) {
        (Variable::new("x"), Variable::new("y"))
    }

    #[test]
    fn test_new_merges_duplicates() {
        let (x, y) = xy();
        let m = Monomial::new(2.0, vec![x.clone(), y.clone(), x.clone()], vec![1, 2, 3]).unwrap();

        assert_eq!(m.variables, vec![x.clone(), y.clone()]);
        assert_eq!(m.exponents, vec![4, 2]);
        assert_eq!(m.exponent_of(&x), 4);
    }

    #[test]
    fn test_new_rejects_misaligned_lists() {
        let (x, y) = xy();
        assert_eq!(
            Monomial::new(1.0, vec![x, y], vec![1]),
            Err(AlgebraError::ExponentCountMismatch {
                variables: 2,
                exponents: 1
            })
        );
    }

    #[test]
    fn test_copy_is_independent() {
        let (x, y) = xy();
        let m = Monomial {
            coefficient: 1.0,
            variables: vec![x],
            exponents: vec![1],
        };
        let mut c = m.copy();
        c.variables.push(y);
        c.exponents[0] = 7;

        assert_eq!(m.variables.len(), 1);
        assert_eq!(m.exponents, vec![1]);
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_scale() {
        let (x, y) = xy();
        let m = Monomial {
            coefficient: 1.0,
            variables: vec![x.clone(), y.clone()],
            exponents: vec![1, 1],
        };
        let product = m.scale(3.14);

        assert_eq!(
            product,
            Monomial {
                coefficient: 3.14,
                variables: vec![x, y],
                exponents: vec![1, 1],
            }
        );
        assert_eq!(m.coefficient, 1.0);
    }

    #[test]
    fn test_mul_variable() {
        let (x, y) = xy();
        let m = Monomial::var(x.clone());

        let x2 = m.mul_variable(&x).unwrap();
        assert_eq!(x2.exponents, vec![2]);

        let xy = m.mul_variable(&y).unwrap();
        assert_eq!(xy.variables, vec![x, y]);
        assert_eq!(xy.exponents, vec![1, 1]);
        assert_eq!(m.exponents, vec![1]);
    }

    #[test]
    fn test_exponent_overflow_is_an_error() {
        let (x, y) = xy();
        let m = Monomial {
            coefficient: 1.0,
            variables: vec![x.clone(), y],
            exponents: vec![u32::MAX, 1],
        };
        let overflow = Some(AlgebraError::ExponentOverflow {
            name: "x".to_string(),
        });

        assert_eq!(m.mul_variable(&x).err(), overflow);
        assert_eq!(m.mul_monomial(&Monomial::var(x.clone())).err(), overflow);
        assert_eq!(m.multiply(&[Term::from(x.clone())]).err(), overflow);
        assert_eq!(
            Monomial::new(1.0, vec![x.clone(), x], vec![u32::MAX, 1]).err(),
            overflow
        );

        // The degree itself is widened and never overflows
        assert_eq!(m.degree(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_misaligned_fields_are_an_error() {
        let (x, y) = xy();
        let m = Monomial {
            coefficient: 1.0,
            variables: vec![x, y.clone()],
            exponents: vec![2],
        };
        let mismatch = Some(AlgebraError::ExponentCountMismatch {
            variables: 2,
            exponents: 1,
        });

        assert_eq!(m.exponent_of(&y), 0);
        assert_eq!(m.mul_variable(&y).err(), mismatch);
        assert_eq!(Monomial::var(y.clone()).mul_monomial(&m).err(), mismatch);
        assert_eq!(m.multiply(&[Term::from(y)]).err(), mismatch);
    }

    #[test]
    fn test_mul_overlapping() {
        let (x, y) = xy();
        let m = Monomial {
            coefficient: 2.0,
            variables: vec![x.clone(), y.clone()],
            exponents: vec![1, 1],
        };

        let product = m.mul_monomial(&m).unwrap();
        assert_eq!(
            product,
            Monomial {
                coefficient: 4.0,
                variables: vec![x, y],
                exponents: vec![2, 2],
            }
        );
        assert_eq!(m.exponents, vec![1, 1]);
    }

    #[test]
    fn test_mul_disjoint_appends() {
        let (x, y) = xy();
        let z = Variable::new("z");
        let a = Monomial::new(3.0, vec![x.clone(), y.clone()], vec![2, 1]).unwrap();
        let b = Monomial::new(-1.0, vec![z.clone(), x.clone()], vec![4, 1]).unwrap();

        let product = &a * &b;
        assert_eq!(product.coefficient, -3.0);
        assert_eq!(product.variables, vec![x, y, z]);
        assert_eq!(product.exponents, vec![3, 1, 4]);
    }

    #[test]
    fn test_display() {
        let (x, y) = xy();
        let m = Monomial {
            coefficient: 2.0,
            variables: vec![x, y],
            exponents: vec![3, 1],
        };
        let s = m.to_string();

        assert_eq!(s, "2 (x)^3 y");
        assert!(s.contains('2'));
        assert!(s.contains("(x)^3"));
        assert!(!s.contains("(y)"));
        assert!(s.contains('y'));
    }

    #[test]
    fn test_display_skips_zero_exponents() {
        let (x, y) = xy();
        let m = Monomial {
            coefficient: 1.5,
            variables: vec![x, y],
            exponents: vec![0, 1],
        };
        assert_eq!(m.to_string(), "1.5 y");
        assert_eq!(Monomial::constant(-4.0).to_string(), "-4");
    }

    #[test]
    fn test_is_like_ignores_order_and_zero_exponents() {
        let (x, y) = xy();
        let z = Variable::new("z");
        let a = Monomial::new(1.0, vec![x.clone(), y.clone()], vec![2, 1]).unwrap();
        let b = Monomial::new(5.0, vec![y.clone(), z, x.clone()], vec![1, 0, 2]).unwrap();
        let c = Monomial::new(5.0, vec![x, y], vec![1, 2]).unwrap();

        assert!(a.is_like(&b));
        assert!(b.is_like(&a));
        assert!(!a.is_like(&c));
        assert_eq!(a.add_like(&b).map(|m| m.coefficient), Some(6.0));
        assert_eq!(a.add_like(&c), None);
    }

    #[test]
    fn test_pruned() {
        let (x, y) = xy();
        let m = Monomial {
            coefficient: 1.0,
            variables: vec![x, y.clone()],
            exponents: vec![0, 3],
        };
        let p = m.pruned();

        assert_eq!(p.variables, vec![y]);
        assert_eq!(p.exponents, vec![3]);
        assert_eq!(p.degree(), 3);
        assert!(!p.is_constant());
        assert!(Monomial::constant(2.0).is_constant());
    }

    #[test]
    fn test_evaluate() {
        let (x, y) = xy();
        let m = Monomial::new(2.0, vec![x.clone(), y.clone()], vec![3, 1]).unwrap();

        let mut values = FxHashMap::default();
        values.insert(x, 2.0);
        assert_eq!(
            m.evaluate(&values),
            Err(AlgebraError::UnboundVariable {
                name: "y".to_string()
            })
        );

        values.insert(y, 0.5);
        assert_eq!(m.evaluate(&values), Ok(8.0));
    }

    #[test]
    fn test_one() {
        let (x, _) = xy();
        let m = Monomial::var(x);
        assert_eq!(m.clone() * Monomial::one(), m);
        assert!(Monomial::one().is_one());
    }
}
