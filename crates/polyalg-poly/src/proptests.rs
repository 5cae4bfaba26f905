//! Property-based tests for term combination.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rustc_hash::FxHashMap;

    use crate::{Algebraic, Monomial, Polynomial, Term};
    use polyalg_core::Variable;

    const NAMES: [&str; 4] = ["a", "b", "c", "d"];

    // Strategy for small integer-valued coefficients, exact in f64
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-20i32..20i32).prop_map(f64::from)
    }

    fn variable() -> impl Strategy<Value = Variable> {
        prop::sample::select(NAMES.to_vec()).prop_map(Variable::new)
    }

    // Strategy for monomials over a fixed alphabet (duplicates merged by `new`).
    // Kept small so every evaluation below is exact in f64.
    fn monomial() -> impl Strategy<Value = Monomial> {
        (
            small_coeff(),
            proptest::collection::vec((variable(), 0u32..3), 0..=2),
        )
            .prop_map(|(c, powers)| {
                let (variables, exponents): (Vec<_>, Vec<_>) = powers.into_iter().unzip();
                Monomial::new(c, variables, exponents).unwrap()
            })
    }

    fn polynomial() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(monomial(), 0..=4).prop_map(Polynomial::new)
    }

    fn point() -> FxHashMap<Variable, f64> {
        NAMES
            .iter()
            .zip([2.0, -1.0, 0.5, 1.0])
            .map(|(name, value)| (Variable::new(*name), value))
            .collect()
    }

    proptest! {
        #[test]
        fn scalar_product_scales_coefficient(m in monomial(), c in small_coeff()) {
            let product = m.multiply(&[Term::from(c)]).unwrap();
            let product = product.as_monomial().unwrap();

            prop_assert_eq!(product.coefficient, m.coefficient * c);
            prop_assert_eq!(&product.variables, &m.variables);
            prop_assert_eq!(&product.exponents, &m.exponents);
        }

        #[test]
        fn variable_product_raises_exponent(m in monomial(), v in variable()) {
            let product = m.multiply(&[Term::from(&v)]).unwrap();
            let product = product.as_monomial().unwrap();

            match v.found_in(&m.variables) {
                Some(i) => {
                    prop_assert_eq!(product.exponents[i], m.exponents[i] + 1);
                    prop_assert_eq!(product.variables.len(), m.variables.len());
                }
                None => {
                    prop_assert_eq!(product.variables.last(), Some(&v));
                    prop_assert_eq!(product.exponents.last(), Some(&1));
                }
            }
        }

        #[test]
        fn monomial_product_adds_exponents(a in monomial(), b in monomial()) {
            let product = a.mul_monomial(&b).unwrap();

            prop_assert_eq!(product.coefficient, a.coefficient * b.coefficient);
            for name in NAMES {
                let v = Variable::new(name);
                prop_assert_eq!(product.exponent_of(&v), a.exponent_of(&v) + b.exponent_of(&v));
            }
        }

        #[test]
        fn monomial_product_has_no_duplicate_variables(a in monomial(), b in monomial()) {
            let product = a.mul_monomial(&b).unwrap();
            for (i, v) in product.variables.iter().enumerate() {
                prop_assert_eq!(v.found_in(&product.variables), Some(i));
            }
        }

        #[test]
        fn monomial_product_commutes_up_to_order(a in monomial(), b in monomial()) {
            prop_assert!((&a * &b).is_like(&(&b * &a)));
        }

        #[test]
        fn operands_are_not_mutated(p in polynomial(), q in polynomial(), m in monomial()) {
            let (p0, q0, m0) = (p.clone(), q.clone(), m.clone());
            let _ = p.multiply(&[Term::from(q.clone()), Term::from(m.clone()), Term::from(2.0)]);
            let _ = m.sum(&[Term::from(p.clone())]);

            prop_assert_eq!(p, p0);
            prop_assert_eq!(q, q0);
            prop_assert_eq!(m, m0);
        }

        #[test]
        fn product_is_full_distribution(p in polynomial(), q in polynomial()) {
            let product = p.multiply(&[Term::from(q.clone())]).unwrap().into_polynomial();
            prop_assert_eq!(product.len(), p.len() * q.len());

            let values = point();
            let expected = p.evaluate(&values).unwrap() * q.evaluate(&values).unwrap();
            prop_assert_eq!(product.evaluate(&values).unwrap(), expected);
        }

        #[test]
        fn distributive(p in polynomial(), q in polynomial(), r in polynomial()) {
            let left = (&p * &(&q + &r)).canonicalize();
            let right = (&(&p * &q) + &(&p * &r)).canonicalize();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn canonicalize_preserves_value(p in polynomial()) {
            let values = point();
            prop_assert_eq!(p.canonicalize().evaluate(&values), p.evaluate(&values));
        }

        #[test]
        fn canonicalize_is_idempotent(p in polynomial()) {
            let once = p.canonicalize();
            prop_assert_eq!(once.canonicalize(), once);
        }

        #[test]
        fn canonical_form_has_no_like_monomials(p in polynomial()) {
            let c = p.canonicalize();
            for (i, a) in c.monomials.iter().enumerate() {
                for b in &c.monomials[i + 1..] {
                    prop_assert!(!a.is_like(b));
                }
            }
        }
    }
}
