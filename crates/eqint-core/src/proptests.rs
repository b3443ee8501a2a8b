//! Property-based tests for equivalence-class arithmetic.

#[cfg(test)]
mod tests {
    use dashu::integer::UBig;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Eqint;

    // Strategy for generating arbitrary finite sequences
    fn byte_seq() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>(), 0..64)
    }

    // Strategy for generating magnitudes that cannot overflow when combined
    fn small_magnitude() -> impl Strategy<Value = usize> {
        0usize..10_000
    }

    proptest! {
        // Construction

        #[test]
        fn magnitude_is_sequence_length(seq in byte_seq()) {
            prop_assert_eq!(Eqint::new(&seq).to_usize(), Some(seq.len()));
        }

        #[test]
        fn text_and_bytes_of_same_length_are_equal(text in "[a-z]{0,32}") {
            let bytes = text.as_bytes().to_vec();
            prop_assert_eq!(Eqint::new(text.as_str()), Eqint::new(&bytes));
        }

        #[test]
        fn equality_matches_length_equality(a in byte_seq(), b in byte_seq()) {
            prop_assert_eq!(Eqint::new(&a) == Eqint::new(&b), a.len() == b.len());
        }

        // Addition

        #[test]
        fn add_is_length_of_concatenation(a in byte_seq(), b in byte_seq()) {
            let mut joined = a.clone();
            joined.extend_from_slice(&b);
            prop_assert_eq!(Eqint::new(&a) + Eqint::new(&b), Eqint::new(&joined));
        }

        #[test]
        fn add_commutative(a in small_magnitude(), b in small_magnitude()) {
            let a = Eqint::from_magnitude(a);
            let b = Eqint::from_magnitude(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in small_magnitude(), b in small_magnitude(), c in small_magnitude()) {
            let a = Eqint::from_magnitude(a);
            let b = Eqint::from_magnitude(b);
            let c = Eqint::from_magnitude(c);
            prop_assert_eq!((&a + &b) + &c, a + &(b + c));
        }

        #[test]
        fn add_identity(a in small_magnitude()) {
            let a = Eqint::from_magnitude(a);
            let zero = Eqint::zero();
            prop_assert_eq!(&a + &zero, a.clone());
            prop_assert_eq!(zero + &a, a);
        }

        #[test]
        fn sub_undoes_add(a in small_magnitude(), b in small_magnitude()) {
            let a = Eqint::from_magnitude(a);
            let b = Eqint::from_magnitude(b);
            prop_assert_eq!((&a + &b) - b, a);
        }

        // Multiplication

        #[test]
        fn mul_distributive(a in small_magnitude(), b in small_magnitude(), c in small_magnitude()) {
            let a = Eqint::from_magnitude(a);
            let b = Eqint::from_magnitude(b);
            let c = Eqint::from_magnitude(c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn mul_is_size_of_cartesian_product(a in byte_seq(), b in byte_seq()) {
            let pairs: Eqint = a.iter().flat_map(|x| b.iter().map(move |y| (x, y))).collect();
            prop_assert_eq!(Eqint::new(&a) * Eqint::new(&b), pairs);
        }

        // Ordering and text

        #[test]
        fn ordering_follows_magnitude(a in small_magnitude(), b in small_magnitude()) {
            prop_assert_eq!(
                Eqint::from_magnitude(a).cmp(&Eqint::from_magnitude(b)),
                a.cmp(&b)
            );
        }

        #[test]
        fn display_parses_back(a in any::<usize>(), b in any::<usize>()) {
            let value = Eqint::from_magnitude(a) * Eqint::from_magnitude(b) + Eqint::from_magnitude(a);
            prop_assert_eq!(value.to_string().parse::<Eqint>(), Ok(value));
        }

        #[test]
        fn add_never_overflows(a in any::<usize>(), b in any::<usize>()) {
            let sum = Eqint::from_magnitude(a) + Eqint::from_magnitude(b);
            prop_assert_eq!(sum.magnitude(), &(UBig::from(a) + UBig::from(b)));
        }
    }
}
