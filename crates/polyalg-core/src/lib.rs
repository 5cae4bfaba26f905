//! # polyalg-core
//!
//! Core symbols for the polyalg expression algebra.
//!
//! This crate provides:
//! - Named variables with value (by-name) equality
//! - Indexed variable vectors (`x0, x1, ...`)
//! - The error type shared by every polyalg crate
//!
//! Monomials, polynomials and the term-combination protocol live in
//! `polyalg-poly`, which builds on the types defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod variable;

pub use error::{AlgebraError, Result};
pub use variable::{variable_vector, Variable};
