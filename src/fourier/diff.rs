//! Spectral differentiation
use crate::error::{check_length, check_nonempty, check_order, Result};
use crate::types::Spectral;
use crate::{Complex, Real};
use ndarray::Array1;
use std::f64::consts::PI;

/// Wavenumber indices of the centered format.
///
/// Even `n`: `-n/2 .. n/2 - 1`, odd `n`: `-(n-1)/2 ..= (n-1)/2`.
///
/// ```
/// use pdspectral::centered_wavenumbers;
/// assert_eq!(centered_wavenumbers(4), vec![-2, -1, 0, 1]);
/// assert_eq!(centered_wavenumbers(5), vec![-2, -1, 0, 1, 2]);
/// ```
pub fn centered_wavenumbers(n: usize) -> Vec<i64> {
    let n = n as i64;
    if n % 2 == 0 {
        (-n / 2..n / 2).collect()
    } else {
        (-(n - 1) / 2..=(n - 1) / 2).collect()
    }
}

/// Multiplier `(2 pi i k / L)^p` for every centered wavenumber `k`.
fn multiplier(n: usize, order: u32, length: Real) -> Array1<Complex> {
    let order = order as i32;
    centered_wavenumbers(n)
        .into_iter()
        .map(|k| Complex::new(0., 2. * PI * k as Real / length).powi(order))
        .collect()
}

/// Differentiate `order` times in spectral space.
///
/// The Nyquist mode of even grids is multiplied like every other mode,
/// also for odd orders.
///
/// # Errors
/// - `order` is negative
/// - `length` is not positive
/// - `coeffs` is empty
///
/// # Example
/// ```
/// use pdspectral::{differentiate, Spectral};
/// use ndarray::array;
/// let coeffs = Spectral::from_real(&array![0., 0., 0., 1., 0.]);
/// // wavenumber 1 on a domain of length 2 pi
/// let d = differentiate(&coeffs, 2, 2. * std::f64::consts::PI).unwrap();
/// assert!((d.view()[3].re + 1.).abs() < 1e-12);
/// ```
pub fn differentiate(coeffs: &Spectral, order: i32, length: Real) -> Result<Spectral> {
    let order = check_order(order)?;
    let length = check_length(length)?;
    check_nonempty(coeffs.len())?;
    if order == 0 {
        return Ok(coeffs.clone());
    }
    if order % 2 == 1 && coeffs.len() % 2 == 0 {
        log::debug!(
            "odd derivative order {} on even grid {}, Nyquist mode is kept",
            order,
            coeffs.len()
        );
    }
    coeffs.mul(&multiplier(coeffs.len(), order, length))
}
