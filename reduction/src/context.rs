//! The reduction-context interface and its generic implementation.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::errors::ReductionError;
use crate::euclid::invmp;
use crate::k256::K256;
use crate::limbs::{Limbs, WORD_BITS};
use crate::mersenne::PseudoMersenne;
use crate::residue::{ContextId, Residue};

/// Arithmetic modulo a fixed modulus `m`.
///
/// Implemented by [`ReductionContext`] (plain or pseudo-Mersenne) and by
/// [`Montgomery`](crate::Montgomery). The provided methods are written
/// against `mul`/`sqr`/`convert_to`, so they are correct in either
/// representation without overrides.
///
/// Every operation first checks that its operands are bound to this context
/// and panics otherwise. That check is the safety net against mixing
/// elements of incompatible fields; implementations must not skip it.
pub trait Reduction {
    /// Identity of this context.
    fn id(&self) -> ContextId;

    /// The modulus `m`.
    fn modulus(&self) -> &BigUint;

    /// Reduce an arbitrary non-negative value into this context.
    fn reduce(&self, value: BigUint) -> Residue;

    /// Product of two residues.
    fn mul(&self, a: &Residue, b: &Residue) -> Residue;

    /// Multiplicative inverse. The caller guarantees `gcd(a, m) == 1`.
    fn invert(&self, a: &Residue) -> Residue;

    /// Bring a plain value into this context.
    fn convert_to(&self, value: &BigUint) -> Residue {
        self.reduce(value.clone())
    }

    /// Leave the context, returning the canonical value.
    fn convert_from(&self, a: &Residue) -> BigUint {
        self.verify1(a);
        a.value().clone()
    }

    /// Panics unless `a` is bound to this context.
    fn verify1(&self, a: &Residue) {
        assert!(
            a.context() == self.id(),
            "residue is not bound to this reduction context"
        );
    }

    /// Panics unless `a` and `b` are both bound to this context.
    fn verify2(&self, a: &Residue, b: &Residue) {
        assert!(
            a.context() == b.context(),
            "residues belong to different reduction contexts"
        );
        self.verify1(a);
    }

    /// Additive inverse: `0` maps to `0`, otherwise `m - a`.
    fn neg(&self, a: &Residue) -> Residue {
        self.verify1(a);
        if a.is_zero() {
            return a.clone();
        }
        Residue::new(self.modulus() - a.value(), self.id())
    }

    /// Sum with a single conditional correction. Valid because both
    /// operands are below `m`.
    fn add(&self, a: &Residue, b: &Residue) -> Residue {
        self.verify2(a, b);
        let mut sum = a.value() + b.value();
        if sum >= *self.modulus() {
            sum -= self.modulus();
        }
        Residue::new(sum, self.id())
    }

    /// In-place form of [`add`](Reduction::add).
    fn add_assign(&self, a: &mut Residue, b: &Residue) {
        self.verify2(a, b);
        *a.value_mut() += b.value();
        if *a.value() >= *self.modulus() {
            *a.value_mut() -= self.modulus();
        }
    }

    /// Difference with a single conditional correction.
    fn sub(&self, a: &Residue, b: &Residue) -> Residue {
        self.verify2(a, b);
        let diff = if a.value() < b.value() {
            a.value() + self.modulus() - b.value()
        } else {
            a.value() - b.value()
        };
        Residue::new(diff, self.id())
    }

    /// In-place form of [`sub`](Reduction::sub).
    fn sub_assign(&self, a: &mut Residue, b: &Residue) {
        self.verify2(a, b);
        if *a.value() < *b.value() {
            *a.value_mut() += self.modulus();
        }
        *a.value_mut() -= b.value();
    }

    /// `a * 2^bits` reduced into the context.
    fn shl(&self, a: &Residue, bits: u32) -> Residue {
        self.verify1(a);
        self.reduce(a.value().clone() << bits as usize)
    }

    /// Square of a residue.
    fn sqr(&self, a: &Residue) -> Residue {
        self.mul(a, a)
    }

    /// In-place square.
    fn sqr_assign(&self, a: &mut Residue) {
        *a = self.mul(a, a);
    }

    /// In-place form of [`mul`](Reduction::mul).
    fn mul_assign(&self, a: &mut Residue, b: &Residue) {
        *a = self.mul(a, b);
    }

    /// `a^exp` by fixed 4-bit-window exponentiation.
    ///
    /// The exponent is scanned 26 bits per word from the top, collecting up
    /// to four bits before each window multiply.
    fn pow(&self, a: &Residue, exp: &BigUint) -> Residue {
        self.verify1(a);
        if exp.is_zero() {
            return self.convert_to(&BigUint::one());
        }
        if *exp == BigUint::one() {
            return a.clone();
        }

        const WINDOW: u32 = 4;
        let mut wnd = Vec::with_capacity(1 << WINDOW);
        wnd.push(self.convert_to(&BigUint::one()));
        wnd.push(a.clone());
        for i in 2..(1usize << WINDOW) {
            let next = self.mul(&wnd[i - 1], a);
            wnd.push(next);
        }

        let mut res = wnd[0].clone();
        let mut res_is_one = true;
        let mut current: u32 = 0;
        let mut current_len: u32 = 0;
        let limbs = Limbs::from_biguint(exp);
        let words = limbs.words();
        let mut start = (exp.bits() % WORD_BITS as u64) as u32;
        if start == 0 {
            start = WORD_BITS;
        }

        for i in (0..words.len()).rev() {
            let word = words[i];
            for j in (0..start).rev() {
                let bit = (word >> j) & 1;
                if !res_is_one {
                    res = self.sqr(&res);
                }
                if bit == 0 && current == 0 {
                    current_len = 0;
                    continue;
                }
                current <<= 1;
                current |= bit;
                current_len += 1;
                if current_len != WINDOW && (i != 0 || j != 0) {
                    continue;
                }
                res = self.mul(&res, &wnd[current as usize]);
                res_is_one = false;
                current_len = 0;
                current = 0;
            }
            start = WORD_BITS;
        }
        res
    }

    /// One square root of `a`, if `a` is a quadratic residue.
    ///
    /// Uses `a^((m+1)/4)` when `m = 3 (mod 4)`, Tonelli-Shanks otherwise.
    /// The returned root is not normalized to the least of the pair.
    /// Panics when `m` is even, or (via the loop bound) when `a` has no
    /// root in the field.
    fn sqrt(&self, a: &Residue) -> Residue {
        self.verify1(a);
        if a.is_zero() {
            return a.clone();
        }

        let m = self.modulus();
        assert!(m.bit(0), "sqrt requires an odd modulus");
        if m.bit(1) {
            // m = 3 (mod 4)
            let e = (m + 1u32) >> 2usize;
            return self.pow(a, &e);
        }

        // Tonelli-Shanks: factor m - 1 = q * 2^s with q odd.
        let mut q: BigUint = m - 1u32;
        let mut s: u32 = 0;
        while !q.is_zero() && !q.bit(0) {
            s += 1;
            q >>= 1usize;
        }
        assert!(!q.is_zero(), "sqrt requires a modulus above 1");

        let one = self.convert_to(&BigUint::one());
        let n_one = self.neg(&one);
        let l_pow = (m - 1u32) >> 1usize;

        // Probe for a quadratic non-residue, starting from 2 * bitLen(m)^2
        // and stepping down by one in the field.
        let bit_len = m.bits();
        let mut z = self.convert_to(&BigUint::from(2 * bit_len * bit_len));
        while self.pow(&z, &l_pow) != n_one {
            self.add_assign(&mut z, &n_one);
        }

        let mut c = self.pow(&z, &q);
        let mut r = self.pow(a, &((&q + 1u32) >> 1usize));
        let mut t = self.pow(a, &q);
        let mut m_ctr = s;

        while t != one {
            let mut tmp = t.clone();
            let mut i: u32 = 0;
            while tmp != one {
                tmp = self.sqr(&tmp);
                i += 1;
            }
            assert!(i < m_ctr, "value has no square root in this field");
            let b = self.pow(&c, &(BigUint::one() << (m_ctr - i - 1) as usize));
            r = self.mul(&r, &b);
            c = self.sqr(&b);
            t = self.mul(&t, &c);
            m_ctr = i;
        }
        r
    }
}

/// Modulus-`m` arithmetic with an optional pseudo-Mersenne fast path.
///
/// Residues hold canonical values in `[0, m)`. When a prime reducer is
/// present, [`reduce`](Reduction::reduce) goes through its shift-and-add
/// loop instead of a division.
pub struct ReductionContext {
    id: ContextId,
    m: BigUint,
    prime: Option<Box<dyn PseudoMersenne>>,
}

impl ReductionContext {
    /// Context for an arbitrary modulus. Fails when `m <= 1`.
    pub fn new(m: BigUint) -> Result<Self, ReductionError> {
        if m <= BigUint::one() {
            return Err(ReductionError::InvalidModulus);
        }
        Ok(ReductionContext {
            id: ContextId::next(),
            m,
            prime: None,
        })
    }

    /// Context for the secp256k1 field prime, with the tuned reducer.
    pub fn k256() -> Self {
        Self::pseudo_mersenne(Box::new(K256::new()))
    }

    /// Context for any pseudo-Mersenne prime.
    pub fn pseudo_mersenne(prime: Box<dyn PseudoMersenne>) -> Self {
        let m = prime.prime().clone();
        ReductionContext {
            id: ContextId::next(),
            m,
            prime: Some(prime),
        }
    }

    /// The prime reducer, when this context has one.
    pub fn prime(&self) -> Option<&dyn PseudoMersenne> {
        self.prime.as_deref()
    }
}

impl Reduction for ReductionContext {
    fn id(&self) -> ContextId {
        self.id
    }

    fn modulus(&self) -> &BigUint {
        &self.m
    }

    fn reduce(&self, value: BigUint) -> Residue {
        match &self.prime {
            Some(prime) => {
                let mut limbs = Limbs::from_biguint(&value);
                prime.ireduce(&mut limbs);
                Residue::new(limbs.to_biguint(), self.id)
            }
            None => Residue::new(value % &self.m, self.id),
        }
    }

    fn mul(&self, a: &Residue, b: &Residue) -> Residue {
        self.verify2(a, b);
        self.reduce(a.value() * b.value())
    }

    fn invert(&self, a: &Residue) -> Residue {
        self.verify1(a);
        self.reduce(invmp(a.value(), &self.m))
    }
}
