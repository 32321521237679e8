//! Tuned reducer for the secp256k1 field prime.
//!
//! `p = 2^256 - 2^32 - 977`, so `k = 0x1000003d1`, which is `[0x3d1, 0x40]`
//! in base-2^26 limbs. 256 bits span 9 full limbs plus 22 bits of a tenth,
//! and both hooks below are written against that boundary directly instead
//! of the generic shift-and-multiply.

use num_bigint::BigUint;
use num_traits::Num;

use crate::limbs::{Limbs, WORD_MASK};
use crate::mersenne::{Mersenne, PseudoMersenne};

/// The secp256k1 field prime.
pub fn k256_prime() -> BigUint {
    BigUint::from_str_radix(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        16,
    )
    .expect("k256 prime literal")
}

/// Reducer for the secp256k1 field, with hand-tuned `split` and `imul_k`.
pub struct K256 {
    inner: Mersenne,
}

impl K256 {
    pub fn new() -> Self {
        K256 {
            inner: Mersenne::new("k256", k256_prime()),
        }
    }
}

impl Default for K256 {
    fn default() -> Self {
        Self::new()
    }
}

impl PseudoMersenne for K256 {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn prime(&self) -> &BigUint {
        self.inner.prime()
    }

    fn prime_limbs(&self) -> &Limbs {
        self.inner.prime_limbs()
    }

    fn bits(&self) -> u32 {
        self.inner.bits()
    }

    fn split(&self, input: &mut Limbs, output: &mut Limbs) {
        // 256 = 9 * 26 + 22
        const MASK22: u32 = 0x3f_ffff;

        let in_len = input.words().len();
        let out_len = in_len.min(9);
        output.words_mut().clear();
        output.words_mut().extend_from_slice(&input.words()[..out_len]);
        let inw = input.words_mut();
        if in_len <= 9 {
            inw.clear();
            inw.push(0);
            return;
        }

        let mut prev = inw[9];
        output.words_mut().push(prev & MASK22);

        let mut i = 10;
        while i < in_len {
            let next = inw[i];
            inw[i - 10] = ((next & MASK22) << 4) | (prev >> 22);
            prev = next;
            i += 1;
        }
        prev >>= 22;
        inw[i - 10] = prev;
        if prev == 0 && in_len > 10 {
            inw.truncate(in_len - 10);
        } else {
            inw.truncate(in_len - 9);
        }
    }

    fn imul_k(&self, num: &mut Limbs) {
        // k = 0x1000003d1 = [0x3d1, 0x40]
        let words = num.words_mut();
        words.push(0);
        words.push(0);

        let mut lo: u64 = 0;
        for i in 0..words.len() {
            let w = words[i] as u64;
            lo += w * 0x3d1;
            words[i] = (lo & WORD_MASK as u64) as u32;
            lo = w * 0x40 + (lo >> 26);
        }

        // The two extension limbs are rarely both used.
        if words[words.len() - 1] == 0 {
            words.pop();
            if words.len() > 1 && words[words.len() - 1] == 0 {
                words.pop();
            }
        }
    }
}
