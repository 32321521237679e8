use core::fmt::{self, Debug, Formatter};
use num_bigint::BigUint;
use reduction::{Reduction, Residue};

use crate::affine::Affine;
use crate::curve::Curve;

/// Curve point in Jacobian projective coordinates.
///
/// `(X : Y : Z)` represents the affine point `(X/Z^2, Y/Z^3)`; the point at
/// infinity is any triple with `Z = 0` and is built here as `(1 : 1 : 0)`.
/// Arithmetic methods return new points and never mutate their inputs.
///
/// `z_one` caches `z == 1`, which selects the cheaper doubling formula. It
/// is derived when the point is constructed, so it cannot go stale.
#[derive(Clone)]
pub struct Jacobian {
    x: Residue,
    y: Residue,
    z: Residue,
    z_one: bool,
}

impl Jacobian {
    /// A point from Jacobian coordinates in the curve's field context.
    pub fn new(curve: &Curve, x: Residue, y: Residue, z: Residue) -> Self {
        let z_one = z == *curve.one();
        Jacobian { x, y, z, z_one }
    }

    /// The point at infinity.
    pub fn infinity(curve: &Curve) -> Self {
        Jacobian {
            x: curve.one().clone(),
            y: curve.one().clone(),
            z: curve.zero().clone(),
            z_one: false,
        }
    }

    #[inline]
    pub fn x(&self) -> &Residue {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &Residue {
        &self.y
    }

    #[inline]
    pub fn z(&self) -> &Residue {
        &self.z
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Project down to affine coordinates: `(x * zinv^2, y * zinv^3)`.
    pub fn to_affine(&self, curve: &Curve) -> Affine {
        if self.is_infinity() {
            return Affine::infinity(curve);
        }
        let red = curve.field();
        let zinv = red.invert(&self.z);
        let zinv2 = red.sqr(&zinv);
        let ax = red.mul(&self.x, &zinv2);
        let ay = red.mul(&red.mul(&self.y, &zinv2), &zinv);
        Affine::new(ax, ay)
    }

    /// Negate a point: `(x, -y, z)`.
    pub fn neg(&self, curve: &Curve) -> Self {
        Jacobian::new(
            curve,
            self.x.clone(),
            curve.field().neg(&self.y),
            self.z.clone(),
        )
    }

    /// Sum of two Jacobian points (12M + 4S + 7A).
    pub fn add(&self, curve: &Curve, p: &Jacobian) -> Jacobian {
        if self.is_infinity() {
            return p.clone();
        }
        if p.is_infinity() {
            return self.clone();
        }

        let red = curve.field();
        let pz2 = red.sqr(&p.z);
        let z2 = red.sqr(&self.z);
        let u1 = red.mul(&self.x, &pz2);
        let u2 = red.mul(&p.x, &z2);
        let s1 = red.mul(&self.y, &red.mul(&pz2, &p.z));
        let s2 = red.mul(&p.y, &red.mul(&z2, &self.z));
        let h = red.sub(&u1, &u2);
        let r = red.sub(&s1, &s2);

        if h.is_zero() {
            if !r.is_zero() {
                // Mirror images: P + (-P).
                return Jacobian::infinity(curve);
            }
            // Same point twice; addition formula degenerates.
            return self.dbl(curve);
        }

        let h2 = red.sqr(&h);
        let h3 = red.mul(&h2, &h);
        let v = red.mul(&u1, &h2);

        let mut nx = red.sqr(&r);
        red.add_assign(&mut nx, &h3);
        red.sub_assign(&mut nx, &v);
        red.sub_assign(&mut nx, &v);

        let mut ny = red.mul(&r, &red.sub(&v, &nx));
        red.sub_assign(&mut ny, &red.mul(&s1, &h3));

        let nz = red.mul(&red.mul(&self.z, &p.z), &h);

        Jacobian::new(curve, nx, ny, nz)
    }

    /// Sum with an affine point, exploiting its implicit `z = 1`
    /// (8M + 3S + 7A).
    pub fn mixed_add(&self, curve: &Curve, p: &Affine) -> Jacobian {
        if self.is_infinity() {
            return p.to_jacobian(curve);
        }
        if p.is_infinity() {
            return self.clone();
        }

        let red = curve.field();
        let z2 = red.sqr(&self.z);
        let u1 = &self.x;
        let u2 = red.mul(p.x(), &z2);
        let s1 = &self.y;
        let s2 = red.mul(&red.mul(p.y(), &z2), &self.z);
        let h = red.sub(u1, &u2);
        let r = red.sub(s1, &s2);

        if h.is_zero() {
            if !r.is_zero() {
                return Jacobian::infinity(curve);
            }
            return self.dbl(curve);
        }

        let h2 = red.sqr(&h);
        let h3 = red.mul(&h2, &h);
        let v = red.mul(u1, &h2);

        let mut nx = red.sqr(&r);
        red.add_assign(&mut nx, &h3);
        red.sub_assign(&mut nx, &v);
        red.sub_assign(&mut nx, &v);

        let mut ny = red.mul(&r, &red.sub(&v, &nx));
        red.sub_assign(&mut ny, &red.mul(s1, &h3));

        let nz = red.mul(&self.z, &h);

        Jacobian::new(curve, nx, ny, nz)
    }

    /// Double a point.
    ///
    /// Uses "mdbl-2007-bl" (1M + 5S + 14A) when `z == 1` and "dbl-2009-l"
    /// (2M + 5S + 13A) otherwise. Both are the `a = 0` formulas.
    pub fn dbl(&self, curve: &Curve) -> Jacobian {
        if self.is_infinity() {
            return self.clone();
        }

        let red = curve.field();
        let (nx, ny, nz);

        if self.z_one {
            // mdbl-2007-bl
            let xx = red.sqr(&self.x);
            let yy = red.sqr(&self.y);
            let yyyy = red.sqr(&yy);

            // s = 2 * ((x + yy)^2 - xx - yyyy)
            let mut s = red.sqr(&red.add(&self.x, &yy));
            red.sub_assign(&mut s, &xx);
            red.sub_assign(&mut s, &yyyy);
            let s = red.add(&s, &s);

            // m = 3 * xx
            let m = red.add(&red.add(&xx, &xx), &xx);

            // t = m^2 - 2*s
            let mut t = red.sqr(&m);
            red.sub_assign(&mut t, &s);
            red.sub_assign(&mut t, &s);

            let yyyy2 = red.add(&yyyy, &yyyy);
            let yyyy4 = red.add(&yyyy2, &yyyy2);
            let yyyy8 = red.add(&yyyy4, &yyyy4);

            let mut y_out = red.mul(&m, &red.sub(&s, &t));
            red.sub_assign(&mut y_out, &yyyy8);

            nx = t;
            ny = y_out;
            nz = red.add(&self.y, &self.y);
        } else {
            // dbl-2009-l
            let a = red.sqr(&self.x);
            let b = red.sqr(&self.y);
            let c = red.sqr(&b);

            // d = 2 * ((x + b)^2 - a - c)
            let mut d = red.sqr(&red.add(&self.x, &b));
            red.sub_assign(&mut d, &a);
            red.sub_assign(&mut d, &c);
            let d = red.add(&d, &d);

            // e = 3 * a
            let e = red.add(&red.add(&a, &a), &a);
            let f = red.sqr(&e);

            let c2 = red.add(&c, &c);
            let c4 = red.add(&c2, &c2);
            let c8 = red.add(&c4, &c4);

            let mut x_out = red.sub(&f, &d);
            red.sub_assign(&mut x_out, &d);

            let mut y_out = red.mul(&e, &red.sub(&d, &x_out));
            red.sub_assign(&mut y_out, &c8);

            let yz = red.mul(&self.y, &self.z);

            nx = x_out;
            ny = y_out;
            nz = red.add(&yz, &yz);
        }

        Jacobian::new(curve, nx, ny, nz)
    }

    /// `pow` sequential doublings.
    pub fn dblp(&self, curve: &Curve, pow: usize) -> Jacobian {
        if pow == 0 || self.is_infinity() {
            return self.clone();
        }
        let mut r = self.clone();
        for _ in 0..pow {
            r = r.dbl(curve);
        }
        r
    }

    /// Scalar multiple `k * self` by double-and-add.
    pub fn mul(&self, curve: &Curve, k: &BigUint) -> Jacobian {
        let mut result = Jacobian::infinity(curve);
        let mut addend = self.clone();
        for i in 0..k.bits() {
            if k.bit(i) {
                result = result.add(curve, &addend);
            }
            addend = addend.dbl(curve);
        }
        result
    }

    /// Group equality, without leaving Jacobian coordinates:
    /// `x1*z2^2 == x2*z1^2` and `y1*z2^3 == y2*z1^3`.
    pub fn eq(&self, curve: &Curve, p: &Jacobian) -> bool {
        let red = curve.field();
        let z2 = red.sqr(&self.z);
        let pz2 = red.sqr(&p.z);
        if !red
            .sub(&red.mul(&self.x, &pz2), &red.mul(&p.x, &z2))
            .is_zero()
        {
            return false;
        }
        let z3 = red.mul(&z2, &self.z);
        let pz3 = red.mul(&pz2, &p.z);
        red.sub(&red.mul(&self.y, &pz3), &red.mul(&p.y, &z3))
            .is_zero()
    }

    /// Group equality against an affine point.
    pub fn eq_affine(&self, curve: &Curve, p: &Affine) -> bool {
        self.eq(curve, &p.to_jacobian(curve))
    }

    /// Does this point's x-coordinate equal the scalar `x` modulo `n`?
    ///
    /// Compares against `x * z^2` in the field, then walks `x + n`,
    /// `x + 2n`, ... while the candidate stays below `p`, stepping the
    /// comparand by `n * z^2`. Used to validate a signature's r-value
    /// without an inversion.
    pub fn eq_x(&self, curve: &Curve, x: &BigUint) -> bool {
        let red = curve.field();
        let zs = red.sqr(&self.z);
        let mut rx = red.mul(&red.convert_to(x), &zs);
        if self.x == rx {
            return true;
        }

        let mut xc = x.clone();
        let t = red.mul(curve.red_n(), &zs);
        loop {
            xc += curve.order();
            if xc >= *curve.prime() {
                return false;
            }
            red.add_assign(&mut rx, &t);
            if self.x == rx {
                return true;
            }
        }
    }
}

impl Debug for Jacobian {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_infinity() {
            return write!(f, "Jacobian(infinity)");
        }
        write!(f, "Jacobian(x: {}, y: {}, z: {})", self.x, self.y, self.z)
    }
}
