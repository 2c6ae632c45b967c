//! Band limited interpolation by zero padding
use super::transform::FftPair;
use crate::error::{check_nonempty, Result, SpectralError};
use crate::types::{Physical, Spectral};
use ndarray::{s, Array1};
use num_traits::Zero;

/// Evaluate the trigonometric polynomial defined by `coeffs` on a
/// grid of `m >= n` points.
///
/// The coefficients are padded with zeros in centered order, so that
/// the zero wavenumber lands at index `m/2` of the new buffer. For even
/// `n` both sides receive `(m-n)/2` zeros, for odd `n` and even `m`
/// the left side receives `(m-n+1)/2` and the right side `(m-n-1)/2`.
/// An odd remainder of odd `m` goes to the right.
///
/// # Errors
/// - `coeffs` is empty
/// - `m < n`
///
/// # Example
/// ```
/// use pdspectral::{extend_to_grid, forward_transform, Physical};
/// let coeffs = forward_transform(&Physical::ones(5)).unwrap();
/// let fine = extend_to_grid(&coeffs, 16).unwrap();
/// assert_eq!(fine.len(), 16);
/// assert!(fine.view().iter().all(|v| (v.re - 1.).abs() < 1e-12));
/// ```
pub fn extend_to_grid(coeffs: &Spectral, m: usize) -> Result<Physical> {
    let n = coeffs.len();
    check_nonempty(n)?;
    if m < n {
        return Err(SpectralError::GridShrink { n, m });
    }
    let (left, right) = padding(n, m);
    log::trace!("extend {} -> {}, padding ({}, {})", n, m, left, right);
    let mut padded = Array1::from_elem(m, crate::Complex::zero());
    padded
        .slice_mut(s![left..m - right])
        .assign(&coeffs.view());
    FftPair::new(m)?.backward(&Spectral::new(padded))
}

/// Number of zeros (left, right) that center `n` coefficients in `m`.
fn padding(n: usize, m: usize) -> (usize, usize) {
    let left = m / 2 - n / 2;
    (left, m - n - left)
}
