//! # polyterm
//!
//! Sparse single-variable polynomials with floating-point coefficients.
//!
//! ## Features
//!
//! - **Normal Form**: one term per degree, no zero terms, leading term first
//! - **Arithmetic**: addition, subtraction, multiplication, powers
//! - **Evaluation**: by repeated multiplication of the variable
//! - **Text Format**: `<coeff> <degree>` lines in, rendered strings out
//!
//! ## Quick Start
//!
//! ```rust
//! use polyterm::prelude::*;
//!
//! let p: Polynomial = "4 5\n-2 3\n2 1\n3 0\n".parse().unwrap();
//! let q = Polynomial::from_pairs([(1.0, 2), (1.0, 0)]);
//!
//! assert_eq!(p.add(&q).coeff(0), 4.0);
//! assert_eq!(p.to_string(), "4.0x^5 + -2.0x^3 + 2.0x + 3.0");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyterm_poly as poly;
pub use polyterm_poly::parse;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyterm_poly::{Degree, Notation, ParseError, PolyError, Polynomial, Term};
}
