//! Textual rendering of polynomials.
//!
//! A polynomial renders as its terms in descending degree order joined by
//! `" + "`; the zero polynomial renders as `0`.

use std::fmt;

use crate::sparse::Polynomial;

/// Rendering settings.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Notation {
    /// Symbol printed for the variable.
    pub variable: char,
}

impl Notation {
    /// Creates a notation with the given variable symbol.
    #[must_use]
    pub const fn new(variable: char) -> Self {
        Self { variable }
    }
}

impl Default for Notation {
    fn default() -> Self {
        Self::new('x')
    }
}

/// Borrowed view of a polynomial that renders with a chosen [`Notation`].
///
/// Created by [`Polynomial::display_with`].
#[derive(Clone, Copy, Debug)]
pub struct PolyDisplay<'a> {
    pub(crate) poly: &'a Polynomial,
    pub(crate) notation: Notation,
}

impl fmt::Display for PolyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.poly.terms().iter();

        let Some(first) = terms.next() else {
            return write!(f, "0");
        };

        first.write_with(f, self.notation.variable)?;
        for term in terms {
            write!(f, " + ")?;
            term.write_with(f, self.notation.variable)?;
        }
        Ok(())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(Notation::default()), f)
    }
}
