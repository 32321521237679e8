//! Uniform sampling of values below a modulus.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

use crate::residue::Residue;
use crate::Reduction;

/// Sample a uniform value in `[0, bound)` by rejection.
///
/// Draws `bitLen(bound)` bits, masks the excess in the top byte and retries
/// until the candidate falls below the bound, so every value is equally
/// likely.
pub fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    assert!(!bound.is_zero(), "bound must be positive");
    let bits = bound.bits();
    let byte_len = bits.div_ceil(8) as usize;
    let top_mask: u8 = if bits % 8 == 0 {
        0xff
    } else {
        (1u8 << (bits % 8)) - 1
    };
    let mut bytes = vec![0u8; byte_len];
    loop {
        rng.fill_bytes(&mut bytes);
        bytes[byte_len - 1] &= top_mask;
        let candidate = BigUint::from_bytes_le(&bytes);
        if candidate < *bound {
            return candidate;
        }
    }
}

/// Sample a uniform residue of `ctx`.
pub fn random_residue<R, C>(rng: &mut R, ctx: &C) -> Residue
where
    R: Rng + ?Sized,
    C: Reduction + ?Sized,
{
    ctx.convert_to(&random_below(rng, ctx.modulus()))
}
