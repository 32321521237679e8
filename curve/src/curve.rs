// secp256k1: y^2 = x^3 + 7 over GF(p), p = 2^256 - 2^32 - 977
// Generator: (79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798 :
//             483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8 : 1)
// Group order n: fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
// Cofactor: 1

use num_bigint::BigUint;
use num_traits::{Num, One, Zero};
use rand::Rng;
use reduction::{random_below, Montgomery, Reduction, ReductionContext, Residue};

use crate::affine::Affine;
use crate::jacobian::Jacobian;

/// The curve holder: owns the field reduction context, the order-`n`
/// Montgomery context, and the cached residues point arithmetic leans on.
pub struct Curve {
    red: ReductionContext,
    order: Montgomery,
    p: BigUint,
    n: BigUint,
    a: Residue,
    b: Residue,
    zero: Residue,
    one: Residue,
    red_n: Residue,
    g: Affine,
}

impl Curve {
    /// The secp256k1 curve, with the tuned field reducer.
    pub fn secp256k1() -> Self {
        let n = BigUint::from_str_radix(
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
            16,
        )
        .expect("secp256k1 order literal");
        let gx = BigUint::from_str_radix(
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            16,
        )
        .expect("secp256k1 gx literal");
        let gy = BigUint::from_str_radix(
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
            16,
        )
        .expect("secp256k1 gy literal");

        Self::new(
            ReductionContext::k256(),
            n,
            BigUint::zero(),
            BigUint::from(7u32),
            gx,
            gy,
        )
    }

    fn new(
        red: ReductionContext,
        n: BigUint,
        a: BigUint,
        b: BigUint,
        gx: BigUint,
        gy: BigUint,
    ) -> Self {
        // The doubling formulas in `Jacobian` are the a = 0 pair.
        assert!(a.is_zero(), "only curves with a = 0 are supported");

        let order = Montgomery::new(n.clone()).expect("group order is an odd modulus above 1");
        let p = red.modulus().clone();
        let a = red.convert_to(&a);
        let b = red.convert_to(&b);
        let zero = red.convert_to(&BigUint::zero());
        let one = red.convert_to(&BigUint::one());
        let red_n = red.convert_to(&n);
        let g = Affine::new(red.convert_to(&gx), red.convert_to(&gy));

        Curve {
            red,
            order,
            p,
            n,
            a,
            b,
            zero,
            one,
            red_n,
            g,
        }
    }

    /// The field reduction context.
    #[inline]
    pub fn field(&self) -> &ReductionContext {
        &self.red
    }

    /// The order-`n` Montgomery context, for scalar arithmetic.
    #[inline]
    pub fn order_field(&self) -> &Montgomery {
        &self.order
    }

    /// The field prime `p`.
    #[inline]
    pub fn prime(&self) -> &BigUint {
        &self.p
    }

    /// The group order `n`.
    #[inline]
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Coefficient `a` of `y^2 = x^3 + a*x + b`, as a field residue.
    #[inline]
    pub fn a(&self) -> &Residue {
        &self.a
    }

    /// Coefficient `b`, as a field residue.
    #[inline]
    pub fn b(&self) -> &Residue {
        &self.b
    }

    /// Field zero.
    #[inline]
    pub fn zero(&self) -> &Residue {
        &self.zero
    }

    /// Field one.
    #[inline]
    pub fn one(&self) -> &Residue {
        &self.one
    }

    /// The group order reduced into the field, for x-coordinate probing.
    #[inline]
    pub(crate) fn red_n(&self) -> &Residue {
        &self.red_n
    }

    /// The standard generator point.
    #[inline]
    pub fn generator(&self) -> &Affine {
        &self.g
    }

    /// Uniform scalar in `[0, n)`.
    pub fn random_scalar<R: Rng + ?Sized>(&self, rng: &mut R) -> BigUint {
        random_below(rng, &self.n)
    }

    /// Uniform non-identity point, as `k * G` for a random nonzero `k`.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Jacobian {
        let k = loop {
            let k = self.random_scalar(rng);
            if !k.is_zero() {
                break k;
            }
        };
        self.g.to_jacobian(self).mul(self, &k)
    }
}
