//! # polyalg
//!
//! A small symbolic-algebra kernel for building polynomial expressions.
//!
//! polyalg represents polynomials over named variables with `f64`
//! coefficients and combines them through a single variadic protocol,
//! as a building block for formulating polynomial optimization problems
//! such as sum-of-squares certificates.
//!
//! ## Features
//!
//! - **By-name variables**: independently built `x`s are the same symbol
//! - **Variadic combination**: one `multiply` / `sum` call folds any mix of
//!   scalars, variables, monomials and polynomials
//! - **Pipeline errors**: `try_multiply` / `try_sum` stop at the first
//!   upstream error and hand it back unchanged
//! - **Opt-in canonical form**: merge like monomials and sort by a
//!   monomial ordering only when asked
//!
//! ## Quick Start
//!
//! ```rust
//! use polyalg::prelude::*;
//!
//! let xs = variable_vector("x", 2).unwrap();
//! let (x0, x1) = (&xs[0], &xs[1]);
//!
//! // (x0 + x1)^2, expanded and canonicalized
//! let s = x0.sum(&[Term::from(x1)]).unwrap();
//! let sq = s.multiply(&[Term::from(s.clone())]).unwrap().into_polynomial();
//! assert_eq!(sq.len(), 4);
//! assert_eq!(sq.canonicalize().to_string(), "1 (x0)^2 + 2 x0 x1 + 1 (x1)^2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyalg_core as core;
pub use polyalg_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyalg_core::{variable_vector, AlgebraError, Variable};
    pub use polyalg_poly::{
        Algebraic, CanonicalConfig, Expression, Monomial, MonomialOrder, Polynomial, Term,
    };
}
