//! Errors of transforms, differentiation and operator evaluation
use thiserror::Error;

/// Root error type of pdspectral.
///
/// Every failure is a malformed argument; nothing is transient, so
/// nothing is retried and no partial result is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectralError {
    /// A sequence of length zero was passed where a grid is expected.
    #[error("empty sequence, grid size must be at least 1")]
    Empty,

    /// Two sequences on the same grid differ in length.
    #[error("length mismatch, got {found} expected {expected}")]
    LengthMismatch {
        /// Length of the operand that defines the grid
        expected: usize,
        /// Length that was supplied
        found: usize,
    },

    /// Domain length is zero, negative or not finite.
    #[error("domain length must be positive and finite, got {0}")]
    NonPositiveLength(f64),

    /// Derivative order below zero.
    #[error("derivative order must be non-negative, got {0}")]
    NegativeOrder(i32),

    /// Monomial power below zero.
    #[error("power must be non-negative, got {0}")]
    NegativePower(i32),

    /// Grid extension to a grid coarser than the input.
    #[error("cannot extend {n} coefficients onto a grid of {m} points")]
    GridShrink {
        /// Number of input coefficients
        n: usize,
        /// Requested grid size
        m: usize,
    },

    /// Operators summed into one right-hand side live on different domains.
    #[error("operators act on different domain lengths, {0} and {1}")]
    DomainMismatch(f64, f64),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SpectralError>;

/// Fail with [`SpectralError::LengthMismatch`] unless `found == expected`.
pub(crate) fn check_len(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(SpectralError::LengthMismatch { expected, found })
    }
}

/// Fail with [`SpectralError::Empty`] on zero sized grids.
pub(crate) fn check_nonempty(n: usize) -> Result<()> {
    if n == 0 {
        Err(SpectralError::Empty)
    } else {
        Ok(())
    }
}

/// Validate a domain length.
pub(crate) fn check_length(length: f64) -> Result<f64> {
    if length.is_finite() && length > 0. {
        Ok(length)
    } else {
        Err(SpectralError::NonPositiveLength(length))
    }
}

/// Validate a derivative order.
pub(crate) fn check_order(order: i32) -> Result<u32> {
    if order < 0 {
        Err(SpectralError::NegativeOrder(order))
    } else {
        Ok(order as u32)
    }
}

/// Validate a monomial power.
pub(crate) fn check_power(power: i32) -> Result<i32> {
    if power < 0 {
        Err(SpectralError::NegativePower(power))
    } else {
        Ok(power)
    }
}
