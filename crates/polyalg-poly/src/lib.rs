//! # polyalg-poly
//!
//! Polynomial expressions over named variables for polyalg.
//!
//! This crate provides:
//! - Monomials with `f64` coefficients and per-variable exponents
//! - Polynomials as unmerged sums of monomials
//! - The variadic `multiply` / `sum` protocol over a closed [`Term`] type
//! - Monomial orderings and opt-in canonicalization
//!
//! ## Combining terms
//!
//! Every expression type implements [`Algebraic`]. A call folds its terms
//! strictly left to right, dispatching on each term's variant:
//!
//! ```rust
//! use polyalg_core::Variable;
//! use polyalg_poly::{Algebraic, Monomial, Term};
//!
//! let x = Variable::new("x");
//! let y = Variable::new("y");
//! let m = Monomial::new(2.0, vec![x.clone(), y.clone()], vec![1, 1]).unwrap();
//!
//! let product = x.multiply(&[Term::from(3.0), Term::from(y), Term::from(m)]).unwrap();
//! assert_eq!(product.to_string(), "6 (x)^2 (y)^2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebraic;
pub mod canonical;
pub mod monomial;
pub mod ordering;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use algebraic::Algebraic;
pub use canonical::CanonicalConfig;
pub use monomial::Monomial;
pub use ordering::MonomialOrder;
pub use polynomial::Polynomial;
pub use term::{Expression, Term};
