//! Context-tagged field elements.

use core::fmt::{self, Debug, Display, Formatter};
use core::sync::atomic::{AtomicU64, Ordering};
use num_bigint::BigUint;
use num_traits::Zero;

/// Identity of a reduction context.
///
/// Every context draws a fresh id from a process-wide counter at
/// construction, so two contexts never share one even if their moduli are
/// equal. Residues carry the id of the context that produced them and the
/// context checks it on every operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

impl ContextId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        ContextId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// An element of a reduction context.
///
/// Holds a canonical value in `[0, m)` for the owning context's modulus `m`
/// (for a Montgomery context the value is in the Montgomery domain). A
/// residue can only be created by a context, via
/// [`Reduction::reduce`](crate::Reduction::reduce) or
/// [`Reduction::convert_to`](crate::Reduction::convert_to), and all
/// arithmetic on it goes through the context as well.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Residue {
    value: BigUint,
    ctx: ContextId,
}

impl Residue {
    pub(crate) fn new(value: BigUint, ctx: ContextId) -> Self {
        Residue { value, ctx }
    }

    /// The raw value. For a Montgomery context this is the domain-encoded
    /// representation, not the canonical integer.
    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Id of the owning context.
    #[inline]
    pub fn context(&self) -> ContextId {
        self.ctx
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub(crate) fn value_mut(&mut self) -> &mut BigUint {
        &mut self.value
    }
}

impl Display for Residue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.value)
    }
}

impl Debug for Residue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Residue({})", self)
    }
}
