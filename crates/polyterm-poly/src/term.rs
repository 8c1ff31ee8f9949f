//! Single polynomial terms.

use std::fmt;

/// Exponent of a term.
///
/// Wide enough that degree sums produced by multiplication of realistic
/// inputs do not approach the limit; overflow is still checked.
pub type Degree = u64;

/// A term `coeff * x^degree`.
///
/// Equality is exact on both fields, so `Term::new(0.1 + 0.2, 1)` and
/// `Term::new(0.3, 1)` are different terms.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Term {
    /// Coefficient.
    pub coeff: f64,
    /// Exponent of the variable.
    pub degree: Degree,
}

impl Term {
    /// Creates a term.
    #[must_use]
    pub const fn new(coeff: f64, degree: Degree) -> Self {
        Self { coeff, degree }
    }

    /// Returns true if the coefficient is exactly zero.
    ///
    /// Both `0.0` and `-0.0` count as zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeff == 0.0
    }

    /// Returns the term with its coefficient negated.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(-self.coeff, self.degree)
    }

    /// Multiplies two terms, or returns `None` if the degree sum overflows.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        let degree = self.degree.checked_add(other.degree)?;
        Some(Self::new(self.coeff * other.coeff, degree))
    }

    /// Evaluates the term at `x` by repeated multiplication.
    ///
    /// The running power stops early once it settles (`0.0`, `1.0`, `inf`,
    /// NaN, or alternating sign for negative `x`), so huge degrees do not
    /// cost a step per unit of degree.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeff * extend_power(1.0, x, self.degree)
    }

    /// Writes the term using `var` as the variable symbol.
    pub(crate) fn write_with(&self, f: &mut fmt::Formatter<'_>, var: char) -> fmt::Result {
        let c = self.coeff;
        match self.degree {
            0 => write!(f, "{c:?}"),
            1 => write!(f, "{c:?}{var}"),
            d => write!(f, "{c:?}{var}^{d}"),
        }
    }
}

/// Repeated multiplications done one at a time before switching to
/// squaring for the rest.
const EXACT_POWER_STEPS: Degree = 1 << 16;

/// Multiplies `power` by `x`, `steps` times.
///
/// The result is the left-to-right product `power * x * x * ...`. Once the
/// running value repeats (a fixed point such as `0.0`, `1.0`, `inf` or NaN,
/// or a two-cycle such as `x = -1.0` or a signed zero under negative `x`)
/// the remaining steps are resolved by parity. Runs that neither settle nor
/// finish within [`EXACT_POWER_STEPS`] complete by squaring, which only
/// happens for `|x|` within about 1% of 1 and may differ from the strict
/// chain in the last bits.
pub(crate) fn extend_power(mut power: f64, x: f64, mut steps: Degree) -> f64 {
    let mut budget = EXACT_POWER_STEPS;

    while steps > 0 {
        if budget == 0 {
            return power * pow_by_squaring(x, steps);
        }

        let next = power * x;
        if next.to_bits() == power.to_bits() || (next.is_nan() && power.is_nan()) {
            return next;
        }
        if (next * x).to_bits() == power.to_bits() {
            return if steps % 2 == 0 { power } else { next };
        }

        power = next;
        steps -= 1;
        budget -= 1;
    }

    power
}

fn pow_by_squaring(mut base: f64, mut exp: Degree) -> f64 {
    let mut result = 1.0;
    while exp > 0 {
        if exp & 1 == 1 {
            result *= base;
        }
        exp >>= 1;
        if exp > 0 {
            base *= base;
        }
    }
    result
}

impl From<(f64, Degree)> for Term {
    fn from((coeff, degree): (f64, Degree)) -> Self {
        Self::new(coeff, degree)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, 'x')
    }
}
