//! # Sequence types
//! Physical samples, centered spectral coefficients and natural ordered
//! coefficients all hold `n` complex values, but the meaning of an index
//! differs. Keeping them apart lets the compiler check every index shift.
//!
//! - [`Physical`]: sample at `x_j = -L/2 + j L / n`
//! - [`Spectral`]: coefficient of wavenumber `k` at index `k + n/2`
//! - [`Natural`]: coefficient of wavenumber `k` at index `k mod n`, the
//!   order expected by the fft primitive
use crate::error::{check_len, Result};
use crate::fourier::shift::{fftshift, ifftshift};
use crate::{Complex, Real};
use ndarray::prelude::*;
use num_traits::{One, Zero};

macro_rules! sequence_basics {
    ($seq: ident) => {
        impl $seq {
            /// Wrap complex array
            pub fn new(data: Array1<Complex>) -> Self {
                Self(data)
            }

            /// Sequence of zeros
            pub fn zeros(n: usize) -> Self {
                Self(Array1::from_elem(n, Complex::zero()))
            }

            /// Sequence of ones
            pub fn ones(n: usize) -> Self {
                Self(Array1::from_elem(n, Complex::one()))
            }

            /// Wrap real array, imaginary parts are zero
            pub fn from_real(data: &Array1<Real>) -> Self {
                Self(data.mapv(|v| Complex::new(v, 0.)))
            }

            /// Grid size
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// True if grid size is zero
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// View of the underlying data
            pub fn view(&self) -> ArrayView1<Complex> {
                self.0.view()
            }

            /// Return underlying array
            pub fn into_inner(self) -> Array1<Complex> {
                self.0
            }

            /// Multiply every entry by `k`
            #[must_use]
            pub fn scale(&self, k: Real) -> Self {
                Self(self.0.mapv(|v| v * k))
            }

            /// Largest absolute difference to `other`
            ///
            /// # Errors
            /// Lengths differ.
            pub fn max_abs_diff(&self, other: &Self) -> Result<Real> {
                check_len(self.len(), other.len())?;
                Ok(self
                    .0
                    .iter()
                    .zip(other.0.iter())
                    .map(|(a, b)| (a - b).norm())
                    .fold(0., Real::max))
            }
        }

        impl From<Array1<Complex>> for $seq {
            fn from(data: Array1<Complex>) -> Self {
                Self(data)
            }
        }

        impl From<Vec<Complex>> for $seq {
            fn from(data: Vec<Complex>) -> Self {
                Self(Array1::from(data))
            }
        }
    };
}

/// Function values on the periodic grid `[-L/2, L/2)`
#[derive(Debug, Clone, PartialEq)]
pub struct Physical(Array1<Complex>);

/// Fourier coefficients in centered order, wavenumbers
/// `-n/2 .. n/2 - 1` (even `n`) or `-(n-1)/2 ..= (n-1)/2` (odd `n`)
#[derive(Debug, Clone, PartialEq)]
pub struct Spectral(Array1<Complex>);

/// Fourier coefficients in natural order, zero wavenumber first
#[derive(Debug, Clone, PartialEq)]
pub struct Natural(Array1<Complex>);

sequence_basics!(Physical);
sequence_basics!(Spectral);
sequence_basics!(Natural);

impl Physical {
    /// Pointwise product of two samples on the same grid
    ///
    /// # Errors
    /// Lengths differ.
    pub fn mul(&self, other: &Physical) -> Result<Physical> {
        check_len(self.len(), other.len())?;
        Ok(Physical(&self.0 * &other.0))
    }

    /// Pointwise integer power
    #[must_use]
    pub fn powi(&self, m: i32) -> Physical {
        Physical(self.0.mapv(|v| v.powi(m)))
    }

    /// Real parts
    pub fn re(&self) -> Array1<Real> {
        self.0.mapv(|v| v.re)
    }

    /// Rotate so that the sample at the domain center `x = 0`
    /// comes first, the input order of the fft primitive.
    pub(crate) fn to_periodic_origin(&self) -> Vec<Complex> {
        ifftshift(&self.0.to_vec())
    }

    /// Inverse of [`Physical::to_periodic_origin`]
    pub(crate) fn from_periodic_origin(data: &[Complex]) -> Physical {
        Physical(Array1::from(fftshift(data)))
    }
}

impl Spectral {
    /// Pointwise product with a multiplier, e.g. wavenumber powers
    ///
    /// # Errors
    /// Lengths differ.
    pub fn mul(&self, other: &Array1<Complex>) -> Result<Spectral> {
        check_len(self.len(), other.len())?;
        Ok(Spectral(&self.0 * other))
    }

    /// Add coefficients of `other`
    ///
    /// # Errors
    /// Lengths differ.
    pub fn add(&self, other: &Spectral) -> Result<Spectral> {
        check_len(self.len(), other.len())?;
        Ok(Spectral(&self.0 + &other.0))
    }

    /// Shift to natural (zero wavenumber first) order
    pub fn to_natural(&self) -> Natural {
        Natural(Array1::from(ifftshift(&self.0.to_vec())))
    }
}

impl Natural {
    /// Shift back to centered order
    pub fn to_centered(&self) -> Spectral {
        Spectral(Array1::from(fftshift(&self.0.to_vec())))
    }

    /// Copy into a contiguous buffer for the fft primitive
    pub(crate) fn to_buffer(&self) -> Vec<Complex> {
        self.0.to_vec()
    }
}
