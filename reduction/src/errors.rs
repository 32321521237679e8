//! Error types for reduction-context construction.

/// Errors that can occur when building a reduction context.
///
/// Operand-level precondition violations (a residue bound to the wrong
/// context, a square root of a non-residue) are programmer errors and panic
/// instead of returning a value of this type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReductionError {
    /// The modulus cannot back a reduction context.
    ///
    /// Returned when the modulus is zero or one, or, for a Montgomery
    /// context, when it is even (REDC requires an odd modulus).
    InvalidModulus,
}
