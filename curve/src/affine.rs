use num_bigint::BigUint;
use reduction::{Reduction, Residue};

use crate::curve::Curve;
use crate::jacobian::Jacobian;

/// Affine point on the curve, or the point at infinity.
///
/// Coordinates are residues of the curve's field context. Group arithmetic
/// runs in Jacobian coordinates; this type is the boundary representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affine {
    x: Residue,
    y: Residue,
    infinity: bool,
}

impl Affine {
    /// A finite point from field coordinates. Not validated; see
    /// [`is_on_curve`](Affine::is_on_curve).
    pub fn new(x: Residue, y: Residue) -> Self {
        Affine {
            x,
            y,
            infinity: false,
        }
    }

    /// The point at infinity (group identity).
    pub fn infinity(curve: &Curve) -> Self {
        Affine {
            x: curve.zero().clone(),
            y: curve.zero().clone(),
            infinity: true,
        }
    }

    /// The x-coordinate. Meaningless for the point at infinity.
    #[inline]
    pub fn x(&self) -> &Residue {
        &self.x
    }

    /// The y-coordinate. Meaningless for the point at infinity.
    #[inline]
    pub fn y(&self) -> &Residue {
        &self.y
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.infinity
    }

    /// Check `y^2 == x^3 + a*x + b`.
    pub fn is_on_curve(&self, curve: &Curve) -> bool {
        if self.infinity {
            return true;
        }
        let red = curve.field();
        let y2 = red.sqr(&self.y);
        let x3 = red.mul(&red.sqr(&self.x), &self.x);
        let ax = red.mul(curve.a(), &self.x);
        let rhs = red.add(&red.add(&x3, &ax), curve.b());
        y2 == rhs
    }

    /// Negate a point.
    pub fn neg(&self, curve: &Curve) -> Self {
        if self.infinity {
            return self.clone();
        }
        Affine::new(self.x.clone(), curve.field().neg(&self.y))
    }

    /// Lift to Jacobian coordinates with `z = 1`.
    pub fn to_jacobian(&self, curve: &Curve) -> Jacobian {
        if self.infinity {
            return Jacobian::infinity(curve);
        }
        Jacobian::new(curve, self.x.clone(), self.y.clone(), curve.one().clone())
    }

    /// Sum of two affine points, through a mixed Jacobian addition.
    pub fn add(&self, curve: &Curve, other: &Affine) -> Affine {
        self.to_jacobian(curve)
            .mixed_add(curve, other)
            .to_affine(curve)
    }

    /// Scalar multiple `k * self`.
    pub fn mul(&self, curve: &Curve, k: &BigUint) -> Affine {
        self.to_jacobian(curve).mul(curve, k).to_affine(curve)
    }
}
