//! # Operators
//! Differential operators acting on centered Fourier coefficients.
//!
//! Implemented:
//! - [`Linear`]: nested derivatives with variable coefficients
//! - [`NonLinear`]: nested derivatives of monomials of the input
//! - [`Rhs`]: sum of operators, the right-hand side of a pde
//!
//! Operators are immutable after construction, `forward` allocates its
//! own buffers. Sharing an operator between threads is fine.
pub mod linear;
pub mod nonlinear;
pub mod rhs;
use crate::domain::Domain;
use crate::error::Result;
use crate::fourier::FftPair;
use crate::types::{Physical, Spectral};
pub use linear::{DiffTerm, Linear, Multiplier, Seed};
pub use nonlinear::{Monomial, NonLinear};
pub use rhs::Rhs;

/// Map Fourier coefficients of a function to the Fourier
/// coefficients of the transformed function.
#[enum_dispatch]
pub trait Operator {
    /// Apply operator, output has the length of the input
    ///
    /// # Errors
    /// Input is empty, or a multiplier does not match the grid size.
    fn forward(&self, coeffs: &Spectral) -> Result<Spectral>;

    /// Domain the operator acts on
    fn domain(&self) -> Domain;
}

/// Enum of all operators that can be summed into a [`Rhs`].
#[enum_dispatch(Operator)]
#[derive(Debug, Clone)]
pub enum OperatorKind {
    /// Linear operator with variable coefficients
    Linear(Linear),
    /// Monomial of the input and its derivatives
    NonLinear(NonLinear),
}

/// Initial accumulator of [`Linear`]: ones in physical space together
/// with their transform.
pub(crate) fn ones_accumulator(pair: &FftPair) -> Result<(Physical, Spectral)> {
    let ones = Physical::ones(pair.n);
    let ones_hat = pair.forward(&ones)?;
    Ok((ones, ones_hat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Complex;

    #[test]
    fn test_ones_accumulator() {
        let pair = FftPair::new(6).unwrap();
        let (ones, ones_hat) = ones_accumulator(&pair).unwrap();
        assert_eq!(ones, Physical::ones(6));
        for (i, v) in ones_hat.view().iter().enumerate() {
            let expected = if i == 3 { 1. } else { 0. };
            assert!((v - Complex::new(expected, 0.)).norm() < 1e-12);
        }
    }

    #[test]
    fn test_dispatch() {
        let lin: OperatorKind = Linear::new(2., vec![DiffTerm::plain(0)], 1.)
            .unwrap()
            .with_seed(Seed::Input)
            .into();
        let coeffs = Spectral::ones(4);
        assert_eq!(lin.forward(&coeffs).unwrap(), coeffs.scale(2.));
        assert_eq!(lin.domain().length(), 1.);
    }
}
