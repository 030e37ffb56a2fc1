//! Arithmetic error types

/// Errors produced by the recoverable arithmetic operations.
///
/// Allocation failure is not represented here: growing or shrinking the digit
/// buffer goes through the global allocator, which aborts the process on
/// exhaustion. Likewise, subtracting a value with more digits than the target
/// is a caller bug and panics rather than returning an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigNumError {
    /// A subtraction's borrow could not be satisfied: the subtrahend's
    /// magnitude exceeds the minuend's. The target is left in an unspecified
    /// intermediate state.
    MagnitudeUnderflow,
}

impl std::fmt::Display for BigNumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BigNumError::MagnitudeUnderflow => {
                write!(f, "subtraction underflow: subtrahend exceeds minuend")
            }
        }
    }
}

impl std::error::Error for BigNumError {}
