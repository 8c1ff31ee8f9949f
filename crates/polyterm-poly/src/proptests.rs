//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use crate::parse;
    use crate::sparse::Polynomial;
    use crate::term::{Degree, Term};

    // Integer-valued coefficients keep every sum and product exact in f64,
    // so ring laws can be checked with plain equality.
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    fn small_term() -> impl Strategy<Value = (f64, Degree)> {
        (small_coeff(), 0u64..12)
    }

    // Raw pairs may repeat degrees and carry zeros.
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_term(), 0..=6).prop_map(Polynomial::from_pairs)
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn small_x() -> impl Strategy<Value = f64> {
        (-4i32..=4i32).prop_map(f64::from)
    }

    fn coeff_map(p: &Polynomial) -> BTreeMap<Degree, f64> {
        p.terms().iter().map(|t| (t.degree, t.coeff)).collect()
    }

    fn is_normalized(p: &Polynomial) -> bool {
        p.terms().iter().all(|t| !t.is_zero())
            && p.terms().windows(2).all(|w| w[0].degree > w[1].degree)
    }

    proptest! {
        // Normal form

        #[test]
        fn construction_normalizes(pairs in proptest::collection::vec(small_term(), 0..=10)) {
            let p = Polynomial::from_pairs(pairs.clone());
            prop_assert!(is_normalized(&p));

            // Each degree's coefficient is the sum of the inputs at that degree.
            let mut expected: BTreeMap<Degree, f64> = BTreeMap::new();
            for (c, d) in pairs {
                *expected.entry(d).or_insert(0.0) += c;
            }
            expected.retain(|_, c| *c != 0.0);
            prop_assert_eq!(coeff_map(&p), expected);
        }

        #[test]
        fn results_are_normalized(a in small_poly(), b in small_poly()) {
            prop_assert!(is_normalized(&a.add(&b)));
            prop_assert!(is_normalized(&a.mul(&b)));
            prop_assert!(is_normalized(&a.sub(&b)));
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(coeff_map(&a.add(&b)), coeff_map(&b.add(&a)));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(coeff_map(&a.mul(&b)), coeff_map(&b.mul(&a)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(a.add(&zero).to_string(), a.to_string());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            prop_assert_eq!(a.mul(&Polynomial::one()), a);
        }

        #[test]
        fn poly_mul_zero(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert!(a.mul(&zero).is_zero());
            prop_assert!(zero.mul(&a).is_zero());
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            let sum = a.add(&a.neg());
            prop_assert!(sum.is_zero());
            prop_assert_eq!(sum.to_string(), "0");
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // Leading coefficients are nonzero integers, so their product is too.
            let product = a.mul(&b);
            prop_assert_eq!(
                product.degree(),
                Some(a.degree().unwrap() + b.degree().unwrap())
            );
        }

        #[test]
        fn poly_add_degree_bound(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b);
            prop_assert!(sum.degree() <= a.degree().max(b.degree()));
        }

        // Evaluation properties

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in small_x()) {
            let sum = a.add(&b);
            let expected = a.eval(x) + b.eval(x);
            prop_assert!((sum.eval(x) - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_x()) {
            let product = a.mul(&b);
            let expected = a.eval(x) * b.eval(x);
            prop_assert!((product.eval(x) - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }

        #[test]
        fn eval_matches_termwise_sum(a in small_poly(), x in -2.0f64..2.0) {
            // Ascending degree order, as the running-power walk sums.
            let naive: f64 = a.terms().iter().rev().map(|t: &Term| t.eval(x)).sum();
            prop_assert_eq!(a.eval(x), naive);
        }

        // Rendering and text format

        #[test]
        fn render_is_order_independent(mut pairs in proptest::collection::vec(small_term(), 0..=6)) {
            let forward = Polynomial::from_pairs(pairs.clone());
            pairs.reverse();
            let backward = Polynomial::from_pairs(pairs);
            prop_assert_eq!(forward.to_string(), backward.to_string());
        }

        #[test]
        fn lines_read_back(a in small_poly()) {
            prop_assert_eq!(parse::parse_str(&parse::to_lines(&a)).unwrap(), a);
        }
    }
}
