//! Fast reduction modulo pseudo-Mersenne primes `p = 2^n - k`.
//!
//! For such primes, `x mod p` never needs a division: split `x` into
//! `HI * 2^n + LO`, then `x = HI * k + LO (mod p)`, and repeat until the
//! result fits in `n` bits. The loop converges because `k` is small relative
//! to `p`.

use core::cmp::Ordering;
use num_bigint::BigUint;
use num_traits::One;

use crate::limbs::Limbs;

/// Reducer capability for a pseudo-Mersenne prime.
///
/// [`Mersenne`] implements this generically for any `2^n - k` prime;
/// [`K256`](crate::K256) overrides the two word-level hooks with routines
/// tuned to the secp256k1 field prime. `ireduce` is the shared reduction
/// loop and rarely needs overriding.
pub trait PseudoMersenne: Send + Sync {
    /// Short identifier, e.g. `"k256"`.
    fn name(&self) -> &str;

    /// The prime `p`.
    fn prime(&self) -> &BigUint;

    /// `p` in limb form, for the final comparison in `ireduce`.
    fn prime_limbs(&self) -> &Limbs;

    /// Bit length `n` of `p`.
    fn bits(&self) -> u32;

    /// Move the low `n` bits of `input` into `output` and shift `input`
    /// right by `n` bits, in place.
    fn split(&self, input: &mut Limbs, output: &mut Limbs);

    /// `num *= k`, in place.
    fn imul_k(&self, num: &mut Limbs);

    /// Reduce `num` modulo `p`, in place, to the canonical value in `[0, p)`.
    fn ireduce(&self, num: &mut Limbs) {
        // Per-call scratch keeps the reducer freely shareable across threads.
        let mut low = Limbs::zero();
        loop {
            self.split(num, &mut low);
            self.imul_k(num);
            num.add_in_place(&low);
            if num.bit_len() <= self.bits() {
                break;
            }
        }
        let cmp = if num.bit_len() < self.bits() {
            Ordering::Less
        } else {
            num.cmp(self.prime_limbs())
        };
        match cmp {
            Ordering::Equal => num.set_zero(),
            Ordering::Greater => num.sub_in_place(self.prime_limbs()),
            Ordering::Less => num.strip(),
        }
    }
}

/// Generic pseudo-Mersenne prime: `split` is a plain bit shift and `imul_k`
/// a full limb multiply.
pub struct Mersenne {
    name: String,
    p: BigUint,
    p_limbs: Limbs,
    k_limbs: Limbs,
    n: u32,
}

impl Mersenne {
    /// Build a reducer for the prime `p`. `k` is derived as `2^n - p` where
    /// `n` is the bit length of `p`.
    pub fn new(name: &str, p: BigUint) -> Self {
        let n = p.bits() as u32;
        let k = (BigUint::one() << n as usize) - &p;
        Mersenne {
            name: name.to_string(),
            p_limbs: Limbs::from_biguint(&p),
            k_limbs: Limbs::from_biguint(&k),
            p,
            n,
        }
    }
}

impl PseudoMersenne for Mersenne {
    fn name(&self) -> &str {
        &self.name
    }

    fn prime(&self) -> &BigUint {
        &self.p
    }

    fn prime_limbs(&self) -> &Limbs {
        &self.p_limbs
    }

    fn bits(&self) -> u32 {
        self.n
    }

    fn split(&self, input: &mut Limbs, output: &mut Limbs) {
        input.shr_into(self.n, output);
    }

    fn imul_k(&self, num: &mut Limbs) {
        num.mul_in_place(&self.k_limbs);
    }
}
