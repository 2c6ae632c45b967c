//! # Fourier
//! Transforms between physical space and centered Fourier space, band
//! limited interpolation onto finer grids and spectral differentiation.
//!
//! The fft primitive is `rustfft`, which is unnormalized in both
//! directions. The forward transform divides by `n`, so the centered
//! coefficients are the weights of the trigonometric polynomial that
//! interpolates the sample.
pub mod diff;
pub mod extend;
pub mod shift;
pub mod transform;
pub use diff::{centered_wavenumbers, differentiate};
pub use extend::extend_to_grid;
pub use transform::{forward_transform, inverse_transform, FftPair};
