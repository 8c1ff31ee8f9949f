//! Errors raised by polynomial arithmetic.

use thiserror::Error;

use crate::term::Degree;

/// Errors that can occur during polynomial arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A product term's degree does not fit in [`Degree`].
    #[error("degree overflow: {lhs} + {rhs} exceeds {}", Degree::MAX)]
    DegreeOverflow {
        /// Degree of the left factor's term.
        lhs: Degree,
        /// Degree of the right factor's term.
        rhs: Degree,
    },
}
