//! Property-based tests for the field axioms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::modular::primes::P998244353;
    use crate::{Field, FieldError, ModInt, ModularNumber, Rational};

    type F101 = ModInt<101>;
    type Fntt = ModInt<P998244353>;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn small_prime() -> impl Strategy<Value = u64> {
        prop::sample::select(vec![2u64, 3, 5, 7, 11, 13, 101, 65_537])
    }

    proptest! {
        // ModInt axioms

        #[test]
        fn modint_add_commutative(a in small_int(), b in small_int()) {
            let a = F101::from_signed(a);
            let b = F101::from_signed(b);
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn modint_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Fntt::from_signed(a);
            let b = Fntt::from_signed(b);
            let c = Fntt::from_signed(c);
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn modint_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = F101::from_signed(a);
            let b = F101::from_signed(b);
            let c = F101::from_signed(c);
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn modint_additive_inverse(a in small_int()) {
            let a = F101::from_signed(a);
            prop_assert!((a + a.negate()).is_zero());
        }

        #[test]
        fn modint_multiplicative_inverse(a in small_int()) {
            let a = F101::from_signed(a);
            match a.inv() {
                Ok(inv) => prop_assert!((a * inv).is_one()),
                Err(err) => {
                    prop_assert!(a.is_zero());
                    prop_assert_eq!(err, FieldError::DivisionByZero);
                }
            }
        }

        #[test]
        fn modint_fermat(a in 1u64..101) {
            let a = F101::new(a);
            prop_assert!(a.pow(100).is_one());
        }

        #[test]
        fn modint_reduces_signed_values(a in small_int()) {
            let expected = u64::try_from(a.rem_euclid(101)).unwrap();
            prop_assert_eq!(F101::from_signed(a).value(), expected);
        }

        // ModularNumber axioms

        #[test]
        fn modular_number_division_roundtrip(
            p in small_prime(),
            a in small_int(),
            b in small_int(),
        ) {
            let a = ModularNumber::new(a, p).unwrap();
            let b = ModularNumber::new(b, p).unwrap();
            match a.try_div(&b) {
                Ok(q) => prop_assert_eq!(q * b, a),
                Err(err) => {
                    prop_assert!(b.is_zero());
                    prop_assert_eq!(err, FieldError::DivisionByZero);
                }
            }
        }

        #[test]
        fn modular_number_identities(p in small_prime(), a in small_int()) {
            let a = ModularNumber::new(a, p).unwrap();
            prop_assert_eq!(a + a.zero(), a);
            prop_assert_eq!(a * a.one(), a);
            prop_assert_eq!(a.characteristic(), p);
        }

        #[test]
        fn modular_number_mixed_primes_rejected(a in small_int(), b in small_int()) {
            let a = ModularNumber::new(a, 5).unwrap();
            let b = ModularNumber::new(b, 7).unwrap();
            prop_assert!(a.try_mul(&b).is_err());
            prop_assert!(b.try_add(&a).is_err());
        }

        // Rational axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(a in non_zero_rational()) {
            let inv = a.inv().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_division_roundtrip(a in rational(), b in non_zero_rational()) {
            let q = a.try_div(&b).unwrap();
            prop_assert_eq!(q * b, a);
        }

        #[test]
        fn rational_denominator_positive(n in small_int(), d in non_zero_int()) {
            let r = Rational::new(n, d).unwrap();
            prop_assert!(*r.denominator() > dashu::integer::UBig::ZERO);
        }
    }
}
