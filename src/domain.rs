//! # Periodic domain
//! Configuration shared by all operators: the period `L` of the domain
//! `[-L/2, L/2)`. Grid sizes are not part of the domain, they follow
//! from the length of the sequences passed in.
use crate::error::{check_length, Result};
use crate::fourier::centered_wavenumbers;
use crate::types::Physical;
use crate::{Complex, Real};
use ndarray::Array1;
use std::f64::consts::PI;

/// Periodic domain `[-L/2, L/2)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    length: Real,
}

impl Domain {
    /// Return new domain of length `length`.
    ///
    /// # Errors
    /// `length` is not positive and finite.
    ///
    /// # Example
    /// ```
    /// use pdspectral::Domain;
    /// assert!(Domain::new(1.).is_ok());
    /// assert!(Domain::new(0.).is_err());
    /// ```
    pub fn new(length: Real) -> Result<Self> {
        Ok(Domain {
            length: check_length(length)?,
        })
    }

    /// Domain length `L`
    pub fn length(&self) -> Real {
        self.length
    }

    /// Grid points `-L/2 + j L / n`
    pub fn coords(&self, n: usize) -> Array1<Real> {
        let dx = self.length / n as Real;
        Array1::from_shape_fn(n, |j| -self.length / 2. + j as Real * dx)
    }

    /// Physical wavenumbers `2 pi k / L` in centered order
    pub fn wavenumbers(&self, n: usize) -> Array1<Real> {
        centered_wavenumbers(n)
            .into_iter()
            .map(|k| 2. * PI * k as Real / self.length)
            .collect()
    }

    /// Sample a real function on the grid of size `n`
    pub fn sample<F: Fn(Real) -> Real>(&self, n: usize, f: F) -> Physical {
        Physical::from_real(&self.coords(n).mapv(f))
    }

    /// Sample a complex function on the grid of size `n`
    pub fn sample_complex<F: Fn(Real) -> Complex>(&self, n: usize, f: F) -> Physical {
        Physical::new(self.coords(n).mapv(f))
    }
}
