use num_integer::Roots;
use num_traits::ToPrimitive;

/// Reduces any numeric input to an integer `>= 2`, or `None` when the value
/// is negative, fractional, non-finite or too small to be prime.
fn as_candidate<T: ToPrimitive>(num: T) -> Option<u64> {
    let as_float = num.to_f64()?;
    if !as_float.is_finite() || as_float.fract() != 0.0 || as_float < 2.0 {
        return None;
    }
    num.to_u64()
}

fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    // Trial division by every candidate in [2, √n].
    let limit = n.sqrt();
    (2..=limit).all(|d| n % d != 0)
}

/// Checks whether `num` is a prime number.
///
/// Accepts any primitive numeric type. Floats count only when they carry an
/// integral value (`7.0` is prime, `7.5` is not). Never panics.
pub fn is_prime<T: ToPrimitive>(num: T) -> bool {
    as_candidate(num).map_or(false, is_prime_u64)
}

/// Checks whether `num` is a prime power `p^k` with `k >= 1`.
///
/// Tries every root degree `i` in `1..=log2(num)`; the exact integer root
/// must reproduce `num` and be prime.
pub fn is_prime_power<T: ToPrimitive>(num: T) -> bool {
    let n = match as_candidate(num) {
        Some(n) => n,
        None => return false,
    };
    let max_degree = 63 - n.leading_zeros();
    (1..=max_degree.max(1)).any(|i| {
        let root = n.nth_root(i);
        root.checked_pow(i) == Some(n) && is_prime_u64(root)
    })
}

/// Splits a prime power into `(p, k)` with `num == p^k`.
pub fn prime_power_parts<T: ToPrimitive>(num: T) -> Option<(u64, u32)> {
    let n = as_candidate(num)?;
    let p = (2..=n.sqrt()).find(|d| n % d == 0).unwrap_or(n);
    let mut rest = n;
    let mut k = 0;
    while rest % p == 0 {
        rest /= p;
        k += 1;
    }
    (rest == 1).then_some((p, k))
}
