//! secp256k1 curve arithmetic over the reduction engine.
//!
//! This crate provides the curve holder ([`Curve`], owning the field and
//! order reduction contexts), affine points, and Jacobian-coordinate point
//! arithmetic. Scalar multiplication is a plain double-and-add over the
//! Jacobian primitives; signing, key derivation and point encodings live in
//! the layers above.

mod affine;
mod curve;
mod jacobian;

pub use affine::Affine;
pub use curve::Curve;
pub use jacobian::Jacobian;
