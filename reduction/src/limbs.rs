//! Little-endian base-2^26 word vectors.
//!
//! `num-bigint` does not expose its internal digit layout, so the
//! pseudo-Mersenne reducers work on this 26-bit limb view and convert at the
//! reduction boundary. 26-bit limbs leave enough headroom in a `u64`
//! accumulator for a full schoolbook product plus carries.

use core::cmp::Ordering;
use num_bigint::BigUint;

/// Bits per limb.
pub(crate) const WORD_BITS: u32 = 26;
/// Mask selecting one limb.
pub(crate) const WORD_MASK: u32 = 0x3ff_ffff;

/// A non-negative integer as little-endian 26-bit limbs.
///
/// Always holds at least one limb; zero is `[0]`. Operations that can leave
/// high zero limbs strip them, and the comparison helpers tolerate unstripped
/// inputs by skipping high zeros.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Limbs {
    words: Vec<u32>,
}

fn effective_len(words: &[u32]) -> usize {
    let mut len = words.len();
    while len > 1 && words[len - 1] == 0 {
        len -= 1;
    }
    len
}

impl Limbs {
    pub fn zero() -> Self {
        Limbs { words: vec![0] }
    }

    pub fn from_biguint(value: &BigUint) -> Self {
        let bytes = value.to_bytes_le();
        let mut words = Vec::with_capacity(bytes.len() * 8 / WORD_BITS as usize + 1);
        let mut acc: u64 = 0;
        let mut bits: u32 = 0;
        for &byte in &bytes {
            acc |= (byte as u64) << bits;
            bits += 8;
            if bits >= WORD_BITS {
                words.push((acc & WORD_MASK as u64) as u32);
                acc >>= WORD_BITS;
                bits -= WORD_BITS;
            }
        }
        if bits > 0 || words.is_empty() {
            words.push(acc as u32);
        }
        let mut limbs = Limbs { words };
        limbs.strip();
        limbs
    }

    pub fn to_biguint(&self) -> BigUint {
        let mut bytes = Vec::with_capacity(self.words.len() * 4);
        let mut acc: u64 = 0;
        let mut bits: u32 = 0;
        for &word in &self.words {
            acc |= (word as u64) << bits;
            bits += WORD_BITS;
            while bits >= 8 {
                bytes.push((acc & 0xff) as u8);
                acc >>= 8;
                bits -= 8;
            }
        }
        if bits > 0 {
            bytes.push(acc as u8);
        }
        BigUint::from_bytes_le(&bytes)
    }

    pub(crate) fn words(&self) -> &[u32] {
        &self.words
    }

    pub(crate) fn words_mut(&mut self) -> &mut Vec<u32> {
        &mut self.words
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn set_zero(&mut self) {
        self.words.clear();
        self.words.push(0);
    }

    /// Drop high zero limbs, keeping at least one.
    pub fn strip(&mut self) {
        let len = effective_len(&self.words);
        self.words.truncate(len);
    }

    /// Position of the highest set bit, or 0 for zero.
    pub fn bit_len(&self) -> u32 {
        let len = effective_len(&self.words);
        let top = self.words[len - 1];
        if top == 0 {
            return 0;
        }
        (len as u32 - 1) * WORD_BITS + (32 - top.leading_zeros())
    }

    /// Magnitude comparison; tolerates high zero limbs on either side.
    pub fn cmp(&self, other: &Limbs) -> Ordering {
        let a_len = effective_len(&self.words);
        let b_len = effective_len(&other.words);
        if a_len != b_len {
            return a_len.cmp(&b_len);
        }
        for i in (0..a_len).rev() {
            if self.words[i] != other.words[i] {
                return self.words[i].cmp(&other.words[i]);
            }
        }
        Ordering::Equal
    }

    pub fn add_in_place(&mut self, other: &Limbs) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        let mut carry: u32 = 0;
        for i in 0..self.words.len() {
            let o = other.words.get(i).copied().unwrap_or(0);
            let t = self.words[i] + o + carry;
            self.words[i] = t & WORD_MASK;
            carry = t >> WORD_BITS;
        }
        if carry > 0 {
            self.words.push(carry);
        }
    }

    /// In-place subtraction. Requires `self >= other`.
    pub fn sub_in_place(&mut self, other: &Limbs) {
        let mut borrow: i64 = 0;
        for i in 0..self.words.len() {
            let o = other.words.get(i).copied().unwrap_or(0) as i64;
            let mut t = self.words[i] as i64 - o - borrow;
            if t < 0 {
                t += 1 << WORD_BITS;
                borrow = 1;
            } else {
                borrow = 0;
            }
            self.words[i] = t as u32;
        }
        debug_assert_eq!(borrow, 0, "limb subtraction underflow");
        self.strip();
    }

    /// Schoolbook in-place multiply.
    pub fn mul_in_place(&mut self, other: &Limbs) {
        let a = &self.words;
        let b = &other.words;
        let mut out = vec![0u64; a.len() + b.len()];
        for (i, &ai) in a.iter().enumerate() {
            let mut carry: u64 = 0;
            for (j, &bj) in b.iter().enumerate() {
                let t = out[i + j] + ai as u64 * bj as u64 + carry;
                out[i + j] = t & WORD_MASK as u64;
                carry = t >> WORD_BITS;
            }
            let mut idx = i + b.len();
            while carry > 0 {
                let t = out[idx] + carry;
                out[idx] = t & WORD_MASK as u64;
                carry = t >> WORD_BITS;
                idx += 1;
            }
        }
        self.words = out.into_iter().map(|w| w as u32).collect();
        self.strip();
    }

    /// Split off the low `shift` bits into `output` and shift `self` right,
    /// in place. The generic pseudo-Mersenne `split`.
    pub fn shr_into(&mut self, shift: u32, output: &mut Limbs) {
        let word_shift = (shift / WORD_BITS) as usize;
        let bit_shift = shift % WORD_BITS;

        output.words.clear();
        let take = word_shift.min(self.words.len());
        output.words.extend_from_slice(&self.words[..take]);
        if bit_shift > 0 {
            let partial = self
                .words
                .get(word_shift)
                .map_or(0, |&w| w & ((1 << bit_shift) - 1));
            output.words.push(partial);
        }
        if output.words.is_empty() {
            output.words.push(0);
        }
        output.strip();

        if word_shift >= self.words.len() {
            self.set_zero();
            return;
        }
        let mut high: Vec<u32> = self.words[word_shift..].to_vec();
        if bit_shift > 0 {
            let mut carry: u32 = 0;
            for w in high.iter_mut().rev() {
                let next = (carry << (WORD_BITS - bit_shift)) | (*w >> bit_shift);
                carry = *w & ((1 << bit_shift) - 1);
                *w = next;
            }
        }
        self.words = high;
        self.strip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{Num, One};
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn random_biguint(rng: &mut StdRng, bytes: usize) -> BigUint {
        let mut buf = vec![0u8; bytes];
        rng.fill_bytes(&mut buf);
        BigUint::from_bytes_le(&buf)
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0usize, 1, 3, 32, 64, 65] {
            let v = random_biguint(&mut rng, len);
            assert_eq!(Limbs::from_biguint(&v).to_biguint(), v);
        }
    }

    #[test]
    fn test_bit_len() {
        assert_eq!(Limbs::zero().bit_len(), 0);
        assert_eq!(Limbs::from_biguint(&BigUint::one()).bit_len(), 1);
        let v = BigUint::one() << 255usize;
        assert_eq!(Limbs::from_biguint(&v).bit_len(), 256);
    }

    #[test]
    fn test_add_sub() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..50 {
            let a = random_biguint(&mut rng, 40);
            let b = random_biguint(&mut rng, 33);
            let mut l = Limbs::from_biguint(&a);
            l.add_in_place(&Limbs::from_biguint(&b));
            assert_eq!(l.to_biguint(), &a + &b);
            l.sub_in_place(&Limbs::from_biguint(&b));
            assert_eq!(l.to_biguint(), a);
        }
    }

    #[test]
    fn test_mul() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let a = random_biguint(&mut rng, 36);
            let b = random_biguint(&mut rng, 12);
            let mut l = Limbs::from_biguint(&a);
            l.mul_in_place(&Limbs::from_biguint(&b));
            assert_eq!(l.to_biguint(), &a * &b);
        }
    }

    #[test]
    fn test_shr_into() {
        let mut rng = StdRng::seed_from_u64(10);
        for shift in [1u32, 25, 26, 27, 255, 256, 300] {
            let v = random_biguint(&mut rng, 64);
            let mut hi = Limbs::from_biguint(&v);
            let mut lo = Limbs::zero();
            hi.shr_into(shift, &mut lo);
            assert_eq!(hi.to_biguint(), &v >> shift as usize);
            let mask = (BigUint::one() << shift as usize) - BigUint::one();
            assert_eq!(lo.to_biguint(), &v & mask);
        }
    }

    #[test]
    fn test_cmp() {
        let p = BigUint::from_str_radix(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
            16,
        )
        .unwrap();
        let a = Limbs::from_biguint(&p);
        let b = Limbs::from_biguint(&(&p - BigUint::one()));
        assert_eq!(a.cmp(&a), Ordering::Equal);
        assert_eq!(a.cmp(&b), Ordering::Greater);
        assert_eq!(b.cmp(&a), Ordering::Less);
    }
}
