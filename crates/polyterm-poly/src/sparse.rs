//! Sparse univariate polynomials.
//!
//! This module provides the polynomial representation used throughout
//! polyterm: a list of [`Term`]s with at most one term per degree, no zero
//! coefficients, stored leading term first.

use std::cmp::Ordering;

use tracing::trace;

use crate::display::{Notation, PolyDisplay};
use crate::error::PolyError;
use crate::term::{extend_power, Degree, Term};

/// A sparse univariate polynomial with `f64` coefficients.
///
/// Terms are kept in strictly descending degree order with like degrees
/// combined and exact zeros removed. Every constructor normalizes, so all
/// arithmetic may assume normalized operands and always returns a freshly
/// allocated, normalized result.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Polynomial {
    /// Terms in descending degree order.
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates a new polynomial from terms.
    ///
    /// Terms may come in any order, repeat degrees, or carry zero
    /// coefficients; they are sorted and combined.
    #[must_use]
    pub fn new(terms: Vec<Term>) -> Self {
        let mut poly = Self { terms };
        poly.normalize();
        poly
    }

    /// Creates a polynomial from `(coefficient, degree)` pairs.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, Degree)>,
    {
        Self::new(pairs.into_iter().map(Term::from).collect())
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(1.0)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(1.0, 1)
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: f64, n: Degree) -> Self {
        let term = Term::new(c, n);
        if term.is_zero() {
            Self::zero()
        } else {
            Self { terms: vec![term] }
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms, leading term first.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<Degree> {
        self.terms.first().map(|t| t.degree)
    }

    /// Returns the leading term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Returns the coefficient of x^d (zero if absent).
    #[must_use]
    pub fn coeff(&self, d: Degree) -> f64 {
        // Descending storage: a term with a larger degree sorts before `d`.
        self.terms
            .binary_search_by(|t| d.cmp(&t.degree))
            .map_or(0.0, |i| self.terms[i].coeff)
    }

    /// Returns a view that renders with the given notation.
    #[must_use]
    pub fn display_with(&self, notation: Notation) -> PolyDisplay<'_> {
        PolyDisplay {
            poly: self,
            notation,
        }
    }

    /// Sorts terms and combines like terms.
    fn normalize(&mut self) {
        // Stable sort keeps input order within a degree, so like terms are
        // summed in the order they were supplied.
        self.terms.sort_by(|a, b| b.degree.cmp(&a.degree));

        let sorted = std::mem::take(&mut self.terms);
        let mut combined = Vec::with_capacity(sorted.len());
        let mut iter = sorted.into_iter().peekable();

        while let Some(mut acc) = iter.next() {
            while let Some(next) = iter.next_if(|t| t.degree == acc.degree) {
                acc.coeff += next.coeff;
            }
            if !acc.is_zero() {
                combined.push(acc);
            }
        }

        self.terms = combined;
    }

    /// Adds two polynomials.
    ///
    /// Merges both term lists by degree until both are exhausted; degrees
    /// whose coefficients cancel exactly are dropped.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.len() + other.len());
        let mut lhs = self.terms.iter().peekable();
        let mut rhs = other.terms.iter().peekable();

        loop {
            let term = match (lhs.peek(), rhs.peek()) {
                (None, None) => break,
                (Some(&&a), None) => {
                    lhs.next();
                    a
                }
                (None, Some(&&b)) => {
                    rhs.next();
                    b
                }
                (Some(&&a), Some(&&b)) => match a.degree.cmp(&b.degree) {
                    Ordering::Greater => {
                        lhs.next();
                        a
                    }
                    Ordering::Less => {
                        rhs.next();
                        b
                    }
                    Ordering::Equal => {
                        lhs.next();
                        rhs.next();
                        Term::new(a.coeff + b.coeff, a.degree)
                    }
                },
            };

            if !term.is_zero() {
                terms.push(term);
            }
        }

        Self { terms }
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(Term::neg).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        // Products can underflow to zero, so go through `new`.
        Self::new(
            self.terms
                .iter()
                .map(|t| Term::new(t.coeff * c, t.degree))
                .collect(),
        )
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeOverflow`] if a product degree does not
    /// fit in [`Degree`].
    pub fn try_mul(&self, other: &Self) -> Result<Self, PolyError> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());

        for a in &self.terms {
            for b in &other.terms {
                let t = a.checked_mul(b).ok_or(PolyError::DegreeOverflow {
                    lhs: a.degree,
                    rhs: b.degree,
                })?;
                terms.push(t);
            }
        }

        trace!(partial_terms = terms.len(), "combining product terms");
        Ok(Self::new(terms))
    }

    /// Multiplies two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if a product degree overflows [`Degree`]; use
    /// [`Polynomial::try_mul`] to handle that case.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        match self.try_mul(other) {
            Ok(product) => product,
            Err(e) => panic!("{e}"),
        }
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeOverflow`] if the result degree does not
    /// fit in [`Degree`].
    pub fn try_pow(&self, n: u32) -> Result<Self, PolyError> {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.try_mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.try_mul(&base)?;
            }
        }

        Ok(result)
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// # Panics
    ///
    /// Panics if the result degree overflows [`Degree`].
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        match self.try_pow(n) {
            Ok(power) => power,
            Err(e) => panic!("{e}"),
        }
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Powers of `x` are built by repeated multiplication, walking the terms
    /// from lowest to highest degree and extending the running power, so
    /// each `x^d` is the same left-to-right product a per-term loop would
    /// compute. `x^0` is 1 for every `x`. Work per term stays bounded for
    /// huge degrees; see [`Term::eval`].
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let mut result = 0.0;
        let mut power = 1.0;
        let mut reached: Degree = 0;

        for term in self.terms.iter().rev() {
            power = extend_power(power, x, term.degree - reached);
            reached = term.degree;
            result += term.coeff * power;
        }

        result
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<(f64, Degree)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (f64, Degree)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
