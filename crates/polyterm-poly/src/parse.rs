//! Line-oriented polynomial input.
//!
//! Each line holds one term as two whitespace-separated tokens,
//! `<coefficient> <degree>`:
//!
//! ```text
//!  4 5
//! -2 3
//!  2 1
//!  3 0
//! ```
//!
//! which reads as `4x^5 - 2x^3 + 2x + 3`. Lines are conventionally written
//! in descending degree order, but any order is accepted. Whitespace-only
//! lines are skipped.

use std::io::BufRead;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::sparse::Polynomial;
use crate::term::{Degree, Term};

/// Errors that can occur while reading the line format.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: missing degree after coefficient")]
    MissingDegree { line: usize },

    #[error("line {line}: invalid coefficient `{token}`: {source}")]
    InvalidCoefficient {
        line: usize,
        token: String,
        source: ParseFloatError,
    },

    #[error("line {line}: invalid degree `{token}`: {source}")]
    InvalidDegree {
        line: usize,
        token: String,
        source: ParseIntError,
    },

    #[error("line {line}: unexpected trailing input `{token}`")]
    TrailingInput { line: usize, token: String },

    #[error("line {line}: read failed: {source}")]
    Io {
        line: usize,
        source: std::io::Error,
    },
}

impl ParseError {
    /// Returns the 1-based line number the error refers to.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingDegree { line }
            | ParseError::InvalidCoefficient { line, .. }
            | ParseError::InvalidDegree { line, .. }
            | ParseError::TrailingInput { line, .. }
            | ParseError::Io { line, .. } => *line,
        }
    }
}

/// Parses a single line into a term.
///
/// Returns `Ok(None)` for a whitespace-only line.
///
/// # Errors
///
/// Returns a [`ParseError`] if the line does not hold exactly a
/// coefficient and a non-negative degree.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Term>, ParseError> {
    let mut tokens = text.split_whitespace();

    let Some(coeff_token) = tokens.next() else {
        return Ok(None);
    };
    let degree_token = tokens.next().ok_or(ParseError::MissingDegree { line })?;

    let coeff: f64 = coeff_token
        .parse()
        .map_err(|source| ParseError::InvalidCoefficient {
            line,
            token: coeff_token.to_owned(),
            source,
        })?;
    let degree: Degree = degree_token
        .parse()
        .map_err(|source| ParseError::InvalidDegree {
            line,
            token: degree_token.to_owned(),
            source,
        })?;

    if let Some(extra) = tokens.next() {
        return Err(ParseError::TrailingInput {
            line,
            token: extra.to_owned(),
        });
    }

    Ok(Some(Term::new(coeff, degree)))
}

/// Parses a polynomial from a string in the line format.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; no polynomial is built in
/// that case.
pub fn parse_str(text: &str) -> Result<Polynomial, ParseError> {
    let terms = text
        .lines()
        .enumerate()
        .filter_map(|(i, l)| parse_line(i + 1, l).transpose())
        .collect::<Result<Vec<_>, _>>()?;

    debug!(terms = terms.len(), "parsed polynomial");
    Ok(Polynomial::new(terms))
}

/// Reads a polynomial in the line format from a buffered reader.
///
/// # Errors
///
/// Returns a [`ParseError`] on malformed input or a failed read.
pub fn read_from<R: BufRead>(reader: R) -> Result<Polynomial, ParseError> {
    let mut terms = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let text = line.map_err(|source| ParseError::Io {
            line: line_no,
            source,
        })?;
        if let Some(term) = parse_line(line_no, &text)? {
            terms.push(term);
        }
    }

    debug!(terms = terms.len(), "read polynomial");
    Ok(Polynomial::new(terms))
}

/// Writes a polynomial back out in the line format, leading term first.
///
/// The zero polynomial produces an empty string.
#[must_use]
pub fn to_lines(poly: &Polynomial) -> String {
    poly.terms()
        .iter()
        .map(|t| format!("{} {}\n", t.coeff, t.degree))
        .collect()
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}
