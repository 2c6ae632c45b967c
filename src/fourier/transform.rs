//! Forward and inverse transform in centered format
use crate::error::{check_len, check_nonempty, Result};
use crate::types::{Natural, Physical, Spectral};
use crate::Real;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Planned forward/inverse fft of one grid size.
///
/// Operators transform many times per evaluation on the same grid,
/// so they plan once and reuse the pair.
#[derive(Clone)]
pub struct FftPair {
    /// Grid size
    pub n: usize,
    fft: Arc<dyn Fft<Real>>,
    ifft: Arc<dyn Fft<Real>>,
}

impl FftPair {
    /// Plan transforms for grid size `n`.
    ///
    /// # Errors
    /// `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        check_nonempty(n)?;
        let mut planner = FftPlanner::new();
        Ok(FftPair {
            n,
            fft: planner.plan_fft_forward(n),
            ifft: planner.plan_fft_inverse(n),
        })
    }

    /// Physical sample -> centered coefficients, scaled by `1/n`.
    ///
    /// # Errors
    /// Sample length differs from the planned size.
    pub fn forward(&self, sample: &Physical) -> Result<Spectral> {
        check_len(self.n, sample.len())?;
        let mut buffer = sample.to_periodic_origin();
        self.fft.process(&mut buffer);
        Ok(Natural::from(buffer)
            .to_centered()
            .scale(1. / self.n as Real))
    }

    /// Centered coefficients -> physical sample.
    ///
    /// `rustfft` does not normalize the inverse, which already is the
    /// factor `n` that undoes the forward scaling.
    ///
    /// # Errors
    /// Coefficient length differs from the planned size.
    pub fn backward(&self, coeffs: &Spectral) -> Result<Physical> {
        check_len(self.n, coeffs.len())?;
        let mut buffer = coeffs.to_natural().to_buffer();
        self.ifft.process(&mut buffer);
        Ok(Physical::from_periodic_origin(&buffer))
    }
}

/// Transform physical sample to centered Fourier coefficients.
///
/// # Errors
/// Sample is empty.
///
/// # Example
/// ```
/// use pdspectral::{forward_transform, Physical};
/// let coeffs = forward_transform(&Physical::ones(4)).unwrap();
/// // only the zero wavenumber (index n/2) survives
/// assert!((coeffs.view()[2].re - 1.).abs() < 1e-12);
/// assert!(coeffs.view()[0].norm() < 1e-12);
/// ```
pub fn forward_transform(sample: &Physical) -> Result<Spectral> {
    log::trace!("forward transform, n = {}", sample.len());
    FftPair::new(sample.len())?.forward(sample)
}

/// Transform centered Fourier coefficients to physical sample.
///
/// # Errors
/// Coefficients are empty.
pub fn inverse_transform(coeffs: &Spectral) -> Result<Physical> {
    log::trace!("inverse transform, n = {}", coeffs.len());
    FftPair::new(coeffs.len())?.backward(coeffs)
}
