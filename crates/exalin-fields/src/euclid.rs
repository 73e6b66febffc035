//! Euclidean algorithm and primality helpers for the prime fields.

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `g = gcd(a, b) >= 0` and `a*x + b*y = g`.
/// The result is widened to `i128` since `gcd(i64::MIN, 0) = 2^63`.
#[must_use]
pub fn extended_gcd(a: i64, b: i64) -> (i128, i128, i128) {
    let (mut old_r, mut r) = (i128::from(a), i128::from(b));
    let (mut old_s, mut s) = (1i128, 0i128);
    let (mut old_t, mut t) = (0i128, 1i128);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
        (old_t, t) = (t, old_t - quotient * t);
    }

    if old_r < 0 {
        (old_r, old_s, old_t) = (-old_r, -old_s, -old_t);
    }
    (old_r, old_s, old_t)
}

/// Inverse of `a` modulo `m`.
///
/// Returns `None` when `a` and `m` are not coprime (in particular when
/// `a ≡ 0`).
#[must_use]
pub fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    if m == 0 {
        return None;
    }
    let (mut t, mut new_t) = (0i128, 1i128);
    let (mut r, mut new_r) = (i128::from(m), i128::from(a % m));

    while new_r != 0 {
        let quotient = r / new_r;
        (t, new_t) = (new_t, t - quotient * new_t);
        (r, new_r) = (new_r, r - quotient * new_r);
    }

    if r != 1 {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(t.rem_euclid(i128::from(m)) as u64)
}

/// The first twelve primes. As Miller-Rabin witnesses they decide
/// primality for every `n < 3.3 * 10^24`, so all of `u64`.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Deterministic Miller-Rabin primality test.
///
/// Usable in const contexts so that compile-time moduli can be checked.
#[must_use]
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 0;
    while i < WITNESSES.len() {
        if n % WITNESSES[i] == 0 {
            return n == WITNESSES[i];
        }
        i += 1;
    }

    // n - 1 = d * 2^s with d odd
    let mut d = n - 1;
    let mut s = 0u32;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    let mut i = 0;
    while i < WITNESSES.len() {
        if !strong_probable_prime(n, d, s, WITNESSES[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// One Miller-Rabin round for the odd `n` with `n - 1 = d * 2^s`.
const fn strong_probable_prime(n: u64, d: u64, s: u32, witness: u64) -> bool {
    let mut x = pow_mod(witness, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }
    let mut round = 1;
    while round < s {
        x = mul_mod(x, x, n);
        if x == n - 1 {
            return true;
        }
        round += 1;
    }
    false
}

#[allow(clippy::cast_possible_truncation)]
const fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

const fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_gcd() {
        let (g, x, y) = extended_gcd(93, 173);
        assert_eq!(g, 1);
        assert_eq!(93 * x + 173 * y, 1);

        let (g, x, y) = extended_gcd(-12, 18);
        assert_eq!(g, 6);
        assert_eq!(-12 * x + 18 * y, 6);
    }

    #[test]
    fn test_extended_gcd_extremes() {
        let (g, x, y) = extended_gcd(i64::MIN, 0);
        assert_eq!(g, 1i128 << 63);
        assert_eq!((x, y), (-1, 0));

        let (g, x, y) = extended_gcd(i64::MIN, i64::MAX);
        assert_eq!(g, 1);
        assert_eq!(i128::from(i64::MIN) * x + i128::from(i64::MAX) * y, 1);
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 (mod 7)
        assert_eq!(mod_inverse(3, 7), Some(5));
        assert_eq!(mod_inverse(0, 7), None);
        assert_eq!(mod_inverse(4, 8), None);
        assert_eq!(mod_inverse(10, 7), Some(5));
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(998_244_353));
        assert!(!is_prime(998_244_351));
    }

    #[test]
    fn test_is_prime_large() {
        assert!(is_prime((1 << 61) - 1));
        assert!(is_prime(u64::MAX - 58)); // 2^64 - 59
        assert!(!is_prime(u64::MAX));
        // Carmichael number
        assert!(!is_prime(561));
        // strong pseudoprimes to the bases 2, 3, 5, 7 and to 2..=23
        assert!(!is_prime(3_215_031_751));
        assert!(!is_prime(3_825_123_056_546_413_051));
        // squares of primes above the witness set
        assert!(!is_prime(1_000_006_000_009));
        assert!(!is_prime(4_611_686_014_132_420_609));
    }

    #[test]
    fn test_is_prime_in_const_context() {
        const MERSENNE_61_IS_PRIME: bool = is_prime((1 << 61) - 1);
        assert!(MERSENNE_61_IS_PRIME);
    }
}
