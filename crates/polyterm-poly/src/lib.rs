//! # polyterm-poly
//!
//! Sparse univariate polynomial arithmetic over `f64` coefficients.
//!
//! This crate provides:
//! - [`Term`] and the normalized sparse [`Polynomial`]
//! - Addition, multiplication, evaluation and rendering
//! - A line-oriented text format (`<coeff> <degree>` per line) in [`parse`]
//!
//! ## Normal Form
//!
//! Every polynomial keeps at most one term per degree, drops terms whose
//! coefficient is exactly zero, and stores terms in descending degree
//! order. Rendering follows storage order, so output is always leading
//! term first:
//!
//! ```
//! use polyterm_poly::Polynomial;
//!
//! let p = Polynomial::from_pairs([(3.0, 0), (2.0, 1), (-2.0, 3), (4.0, 5)]);
//! assert_eq!(p.to_string(), "4.0x^5 + -2.0x^3 + 2.0x + 3.0");
//! assert_eq!(p.eval(1.0), 7.0);
//! ```
//!
//! ## Degree Overflow
//!
//! Degrees are `u64` and product degrees are checked. [`Polynomial::mul`],
//! [`Polynomial::pow`] and the `*` operator panic when a product degree
//! does not fit; prefer [`Polynomial::try_mul`] and [`Polynomial::try_pow`]
//! when degrees come from untrusted input.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod display;
pub mod error;
mod ops;
pub mod parse;
pub mod sparse;
pub mod term;

#[cfg(test)]
mod proptests;

pub use display::{Notation, PolyDisplay};
pub use error::PolyError;
pub use parse::ParseError;
pub use sparse::Polynomial;
pub use term::{Degree, Term};
