use crate::error::{DobbleError, DobbleResult};
use crate::ops::primes::prime_power_parts;

/// Finite field GF(p^k) with elements numbered `0..q`.
///
/// Element `e` is the polynomial whose coefficients are the base-`p` digits
/// of `e` (least significant first), so for prime `q` the numbering and both
/// operations coincide with plain arithmetic mod `q`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaloisField {
    order: usize,
    add: Vec<usize>,
    mul: Vec<usize>,
}

fn to_digits(mut x: usize, p: usize, k: usize) -> Vec<usize> {
    let mut digits = vec![0; k];
    for d in digits.iter_mut() {
        *d = x % p;
        x /= p;
    }
    digits
}

fn from_digits(digits: &[usize], p: usize) -> usize {
    digits.iter().rev().fold(0, |acc, &d| acc * p + d)
}

/// `a * b mod (x^k + tail)` over GF(p).
fn poly_mul_mod(a: &[usize], b: &[usize], tail: &[usize], p: usize) -> Vec<usize> {
    let k = tail.len();
    let mut prod = vec![0; 2 * k - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            prod[i + j] = (prod[i + j] + ai * bj) % p;
        }
    }
    // x^k ≡ -tail
    for deg in (k..prod.len()).rev() {
        let c = prod[deg];
        if c == 0 {
            continue;
        }
        prod[deg] = 0;
        for (i, &t) in tail.iter().enumerate() {
            let idx = deg - k + i;
            prod[idx] = (prod[idx] + p - (c * t) % p) % p;
        }
    }
    prod.truncate(k);
    prod
}

fn every_nonzero_invertible(mul: &[usize], q: usize) -> bool {
    (1..q).all(|a| (1..q).any(|b| mul[a * q + b] == 1))
}

impl GaloisField {
    /// Builds the addition and multiplication tables of GF(`order`).
    ///
    /// For `k > 1` the first monic modulus of degree `k` whose quotient ring
    /// has no zero divisors is used.
    pub fn new(order: usize) -> DobbleResult<Self> {
        let (p, k) = prime_power_parts(order).ok_or_else(|| {
            DobbleError::invalid(format!("no finite field of order {}", order))
        })?;
        let (p, k, q) = (p as usize, k as usize, order);

        let digits: Vec<Vec<usize>> = (0..q).map(|x| to_digits(x, p, k)).collect();

        let mut add = vec![0; q * q];
        for a in 0..q {
            for b in 0..q {
                let sum: Vec<usize> = digits[a]
                    .iter()
                    .zip(&digits[b])
                    .map(|(x, y)| (x + y) % p)
                    .collect();
                add[a * q + b] = from_digits(&sum, p);
            }
        }

        for tail_code in 0..q {
            let tail = &digits[tail_code];
            let mut mul = vec![0; q * q];
            for a in 0..q {
                for b in a..q {
                    let prod = from_digits(&poly_mul_mod(&digits[a], &digits[b], tail, p), p);
                    mul[a * q + b] = prod;
                    mul[b * q + a] = prod;
                }
            }
            if every_nonzero_invertible(&mul, q) {
                return Ok(Self { order, add, mul });
            }
        }

        Err(DobbleError::invalid(format!(
            "no irreducible modulus found for GF({})",
            order
        )))
    }

    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn add(&self, a: usize, b: usize) -> usize {
        self.add[a * self.order + b]
    }

    #[inline]
    pub fn mul(&self, a: usize, b: usize) -> usize {
        self.mul[a * self.order + b]
    }
}
