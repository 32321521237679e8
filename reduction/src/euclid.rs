//! Binary extended GCD for modular inverses.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Inverse of `a` modulo an odd `p`, as a value in `[0, p)`.
///
/// Binary extended Euclid on the magnitudes with signed Bezout
/// coefficients. The halving steps rely on `p` being odd. If
/// `gcd(a, p) != 1` the result is meaningless; callers guarantee
/// coprimality.
pub(crate) fn invmp(a: &BigUint, p: &BigUint) -> BigUint {
    let mut a = a % p;
    let mut b = p.clone();
    let mut x1 = BigInt::one();
    let mut x2 = BigInt::zero();
    let delta = BigInt::from(p.clone());
    let one = BigUint::one();

    while a > one && b > one {
        while a.is_even() {
            a >>= 1usize;
            if x1.is_odd() {
                x1 += &delta;
            }
            x1 >>= 1usize;
        }
        while b.is_even() {
            b >>= 1usize;
            if x2.is_odd() {
                x2 += &delta;
            }
            x2 >>= 1usize;
        }
        if a >= b {
            a -= &b;
            x1 -= &x2;
        } else {
            b -= &a;
            x2 -= &x1;
        }
    }

    let res = if a == one { x1 } else { x2 };
    let res = res.mod_floor(&delta);
    res.to_biguint().expect("non-negative after mod_floor")
}
