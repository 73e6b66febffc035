//! Property-based tests for the sequence producers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{from_gray, to_gray, GrayCodeFlips, Permutation};

    fn permutation(max_len: usize) -> impl Strategy<Value = Permutation> {
        (0..=max_len)
            .prop_flat_map(|n| Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
            .prop_map(|images| Permutation::new(images).unwrap())
    }

    fn same_length_pair(max_len: usize) -> impl Strategy<Value = (Permutation, Permutation)> {
        (0..=max_len).prop_flat_map(|n| {
            let base: Vec<usize> = (0..n).collect();
            (
                Just(base.clone()).prop_shuffle(),
                Just(base).prop_shuffle(),
            )
                .prop_map(|(a, b)| (Permutation::new(a).unwrap(), Permutation::new(b).unwrap()))
        })
    }

    proptest! {
        #[test]
        fn inverse_is_two_sided(p in permutation(12)) {
            prop_assert!(p.compose(&p.inverse()).unwrap().is_identity());
            prop_assert!(p.inverse().compose(&p).unwrap().is_identity());
        }

        #[test]
        fn sign_is_multiplicative((p, q) in same_length_pair(10)) {
            let pq = p.compose(&q).unwrap();
            prop_assert_eq!(pq.sign(), p.sign() * q.sign());
        }

        #[test]
        fn sign_matches_cycle_parity(p in permutation(12)) {
            // A k-cycle is a product of k - 1 transpositions.
            let transpositions: usize = p.cycles().iter().map(|c| c.len() - 1).sum();
            let expected = if transpositions % 2 == 0 { 1 } else { -1 };
            prop_assert_eq!(p.sign(), expected);
        }

        #[test]
        fn inversions_match_quadratic_count(p in permutation(12)) {
            let images = p.images();
            let mut naive = 0u64;
            for i in 0..images.len() {
                for j in i + 1..images.len() {
                    if images[i] > images[j] {
                        naive += 1;
                    }
                }
            }
            prop_assert_eq!(p.inversions(), naive);
        }

        #[test]
        fn order_returns_to_identity(p in permutation(8)) {
            let mut power = p.clone();
            for _ in 1..p.order() {
                prop_assert!(!power.is_identity());
                power = power.compose(&p).unwrap();
            }
            prop_assert!(power.is_identity());
        }

        #[test]
        fn gray_roundtrip(x in any::<u64>()) {
            prop_assert_eq!(from_gray(to_gray(x)), x);
            prop_assert_eq!((to_gray(x) ^ to_gray(x.wrapping_add(1))).count_ones(), 1);
        }

        #[test]
        fn gray_walk_visits_every_subset(bits in 1u32..=10) {
            let mut state = 0u64;
            let mut seen = vec![false; 1 << bits];
            seen[0] = true;
            let flips: Vec<usize> = GrayCodeFlips::new(bits).collect();
            prop_assert_eq!(flips.len(), 1 << bits);
            for &bit in &flips[..flips.len() - 1] {
                state ^= 1 << bit;
                let slot = usize::try_from(state).unwrap();
                prop_assert!(!seen[slot]);
                seen[slot] = true;
            }
            prop_assert!(seen.iter().all(|&s| s));
        }
    }
}
