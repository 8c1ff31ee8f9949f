//! Operator and `num_traits` impls for [`Polynomial`].
//!
//! All of these delegate to the inherent methods on [`Polynomial`].

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::sparse::Polynomial;

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Self) -> Polynomial {
                Polynomial::$method(self, rhs)
            }
        }

        impl $trait for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Self) -> Polynomial {
                Polynomial::$method(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(&self)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}
