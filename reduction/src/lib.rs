//! Modular-reduction engine for the wallet SDK.
//!
//! This crate provides arithmetic modulo a runtime modulus through
//! *reduction contexts*: a generic [`ReductionContext`] with an optional
//! pseudo-Mersenne fast path (including the tuned secp256k1 field reducer
//! [`K256`]), and a [`Montgomery`] context for moduli without special
//! structure, such as a curve group order. Values that live inside a context
//! are [`Residue`]s, tagged with the identity of their owning context; every
//! operation checks the tag and panics on a mismatch, so two incompatible
//! fields can never be mixed silently.
//!
//! Contexts keep no shared scratch state: the pseudo-Mersenne reduction
//! loop allocates its scratch per call, so a single context instance can
//! serve concurrent callers.
//!
//! None of the arithmetic here is constant-time. Callers that need
//! side-channel resistance must layer it elsewhere.

mod context;
mod errors;
mod euclid;
mod k256;
mod limbs;
mod mersenne;
mod montgomery;
mod random;
mod residue;

pub use context::{Reduction, ReductionContext};
pub use errors::ReductionError;
pub use k256::K256;
pub use limbs::Limbs;
pub use mersenne::{Mersenne, PseudoMersenne};
pub use montgomery::Montgomery;
pub use random::{random_below, random_residue};
pub use residue::{ContextId, Residue};
