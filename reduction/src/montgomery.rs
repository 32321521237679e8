//! Montgomery (REDC) reduction context.
//!
//! For moduli without pseudo-Mersenne structure, such as a curve group
//! order, multiplication is cheaper in the Montgomery domain: values are
//! scaled by `r = 2^shift`, and REDC replaces the division in each product
//! with shifts and masks.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::errors::ReductionError;
use crate::euclid::invmp;
use crate::limbs::WORD_BITS;
use crate::residue::{ContextId, Residue};
use crate::Reduction;

/// Modulus-`m` arithmetic in the Montgomery domain.
///
/// Residues produced by this context hold domain-encoded values
/// (`x * r mod m`); use [`convert_to`](Reduction::convert_to) /
/// [`convert_from`](Reduction::convert_from) at the boundary.
pub struct Montgomery {
    id: ContextId,
    m: BigUint,
    shift: u32,
    r2: BigUint,
    rinv: BigUint,
    minv: BigUint,
    mask: BigUint,
}

impl Montgomery {
    /// Context for an odd modulus `m > 1`.
    ///
    /// `shift` is the bit length of `m` rounded up to a whole number of
    /// 26-bit words; `r = 2^shift`, `r2 = r^2 mod m`, `rinv = r^-1 mod m`
    /// and `minv = r - ((rinv * r - 1) / m mod r)`, so that
    /// `r * rinv - m * ((rinv * r - 1) / m) == 1`.
    pub fn new(m: BigUint) -> Result<Self, ReductionError> {
        if m <= BigUint::one() || !m.bit(0) {
            return Err(ReductionError::InvalidModulus);
        }

        let mut shift = m.bits() as u32;
        if shift % WORD_BITS != 0 {
            shift += WORD_BITS - shift % WORD_BITS;
        }
        let r = BigUint::one() << shift as usize;
        let r2 = (&r * &r) % &m;
        let rinv = invmp(&r, &m);
        let minv = (&rinv * &r - BigUint::one()) / &m;
        let minv = &r - (minv % &r);

        Ok(Montgomery {
            id: ContextId::next(),
            m,
            shift,
            r2,
            rinv,
            minv,
            mask: r - BigUint::one(),
        })
    }

    /// The domain scale exponent (`r = 2^shift`).
    pub fn shift(&self) -> u32 {
        self.shift
    }
}

impl Reduction for Montgomery {
    fn id(&self) -> ContextId {
        self.id
    }

    fn modulus(&self) -> &BigUint {
        &self.m
    }

    fn reduce(&self, value: BigUint) -> Residue {
        Residue::new(value % &self.m, self.id)
    }

    fn convert_to(&self, value: &BigUint) -> Residue {
        self.reduce(value.clone() << self.shift as usize)
    }

    fn convert_from(&self, a: &Residue) -> BigUint {
        self.verify1(a);
        (a.value() * &self.rinv) % &self.m
    }

    /// REDC product of two domain values.
    fn mul(&self, a: &Residue, b: &Residue) -> Residue {
        self.verify2(a, b);
        if a.is_zero() || b.is_zero() {
            return Residue::new(BigUint::zero(), self.id);
        }

        let t = a.value() * b.value();
        let c = (((&t & &self.mask) * &self.minv) & &self.mask) * &self.m;
        // t - c is an exact multiple of r, possibly negative.
        let mut u = (BigInt::from(t) - BigInt::from(c)) >> self.shift as usize;
        let m_int = BigInt::from(self.m.clone());
        if u.sign() == Sign::Minus {
            u += &m_int;
        } else if u >= m_int {
            u -= &m_int;
        }
        Residue::new(u.to_biguint().expect("REDC result in range"), self.id)
    }

    fn invert(&self, a: &Residue) -> Residue {
        self.verify1(a);
        self.reduce(invmp(a.value(), &self.m) * &self.r2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_below;
    use num_traits::Num;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn order() -> BigUint {
        BigUint::from_str_radix(
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
            16,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_bad_modulus() {
        assert_eq!(
            Montgomery::new(BigUint::zero()).err(),
            Some(ReductionError::InvalidModulus)
        );
        assert_eq!(
            Montgomery::new(BigUint::one()).err(),
            Some(ReductionError::InvalidModulus)
        );
        assert_eq!(
            Montgomery::new(BigUint::from(100u32)).err(),
            Some(ReductionError::InvalidModulus)
        );
        assert!(Montgomery::new(BigUint::from(101u32)).is_ok());
    }

    #[test]
    fn test_shift_is_word_aligned() {
        let mont = Montgomery::new(order()).unwrap();
        assert_eq!(mont.shift() % 26, 0);
        assert!(mont.shift() >= 256);
    }

    #[test]
    fn test_convert_round_trip() {
        let m = order();
        let mont = Montgomery::new(m.clone()).unwrap();
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..50 {
            let a = random_below(&mut rng, &m);
            let domain = mont.convert_to(&a);
            assert_eq!(mont.convert_from(&domain), a);
        }
    }

    #[test]
    fn test_mul_matches_reference() {
        let m = order();
        let mont = Montgomery::new(m.clone()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let a = random_below(&mut rng, &m);
            let b = random_below(&mut rng, &m);
            let product = mont.mul(&mont.convert_to(&a), &mont.convert_to(&b));
            assert_eq!(mont.convert_from(&product), (&a * &b) % &m);
        }
    }

    #[test]
    fn test_mul_zero_fast_path() {
        let mont = Montgomery::new(order()).unwrap();
        let zero = mont.convert_to(&BigUint::zero());
        let a = mont.convert_to(&BigUint::from(12345u32));
        assert!(mont.mul(&a, &zero).is_zero());
        assert!(mont.mul(&zero, &a).is_zero());
    }

    #[test]
    fn test_pow_matches_modpow() {
        // Exercises the shared window exponentiation through REDC.
        let m = order();
        let mont = Montgomery::new(m.clone()).unwrap();
        let mut rng = StdRng::seed_from_u64(43);
        for _ in 0..10 {
            let g = random_below(&mut rng, &m);
            let k = random_below(&mut rng, &m);
            let res = mont.pow(&mont.convert_to(&g), &k);
            assert_eq!(mont.convert_from(&res), g.modpow(&k, &m));
        }
    }

    #[test]
    fn test_pow_matches_modpow_768_bit() {
        let mut rng = StdRng::seed_from_u64(44);
        let mut bytes = [0u8; 96];
        rng.fill_bytes(&mut bytes);
        bytes[0] |= 1;
        bytes[95] |= 0x80;
        let m = BigUint::from_bytes_le(&bytes);
        let mont = Montgomery::new(m.clone()).unwrap();
        let g = random_below(&mut rng, &m);
        let k = random_below(&mut rng, &m);
        let res = mont.pow(&mont.convert_to(&g), &k);
        assert_eq!(mont.convert_from(&res), g.modpow(&k, &m));
    }

    #[test]
    fn test_invert() {
        let m = order();
        let mont = Montgomery::new(m.clone()).unwrap();
        let one = mont.convert_to(&BigUint::one());
        let mut rng = StdRng::seed_from_u64(45);
        for _ in 0..20 {
            let a = mont.convert_to(&random_below(&mut rng, &m));
            if a.is_zero() {
                continue;
            }
            assert_eq!(mont.mul(&a, &mont.invert(&a)), one);
        }
    }

    #[test]
    fn test_sqrt_through_domain() {
        // The shared sqrt works on domain values via pow/mul.
        let m = order();
        let mont = Montgomery::new(m).unwrap();
        let mut rng = StdRng::seed_from_u64(46);
        let a = mont.convert_to(&random_below(&mut rng, mont.modulus()));
        let square = mont.sqr(&a);
        let root = mont.sqrt(&square);
        assert_eq!(mont.sqr(&root), square);
    }
}
