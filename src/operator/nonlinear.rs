//! Nonlinear operator, monomials of the input and its derivatives
use super::Operator;
use crate::domain::Domain;
use crate::error::{check_order, check_power, Result};
use crate::fourier::{differentiate, FftPair};
use crate::types::{Physical, Spectral};
use crate::Real;

/// Derivative order and power of one factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monomial {
    /// Derivative order
    pub order: i32,
    /// Power of the input function
    pub power: i32,
}

impl Monomial {
    /// Return new term
    pub fn new(order: i32, power: i32) -> Self {
        Monomial { order, power }
    }
}

/// Nonlinear operator `kn D^{p_1}(φ^{m_1} D^{p_2}(φ^{m_2} ..))`
///
/// The input is transformed to physical space once. Terms are processed
/// from last to first: multiply `φ^m` with the running product, transform,
/// differentiate, transform back. The running product starts at ones in
/// both spaces, an empty term list therefore returns `kn` everywhere.
///
/// # Example
/// ```
/// use pdspectral::{forward_transform, inverse_transform, Domain, Monomial, NonLinear, Operator};
/// use std::f64::consts::PI;
/// // D(φ^2) with φ = sin(x) is sin(2x)
/// let domain = Domain::new(2. * PI).unwrap();
/// let phi = forward_transform(&domain.sample(16, |x| x.sin())).unwrap();
/// let op = NonLinear::new(1., vec![Monomial::new(1, 2)], 2. * PI).unwrap();
/// let out = inverse_transform(&op.forward(&phi).unwrap()).unwrap();
/// let expected = domain.sample(16, |x| (2. * x).sin());
/// assert!(out.max_abs_diff(&expected).unwrap() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NonLinear {
    /// Scalar coefficient
    pub kn: Real,
    terms: Vec<Monomial>,
    domain: Domain,
}

impl NonLinear {
    /// Return new nonlinear operator
    ///
    /// # Errors
    /// - `length` is not positive
    /// - A term has negative order or power
    pub fn new(kn: Real, terms: Vec<Monomial>, length: Real) -> Result<Self> {
        let domain = Domain::new(length)?;
        for term in &terms {
            check_order(term.order)?;
            check_power(term.power)?;
        }
        log::debug!(
            "nonlinear operator, kn = {}, {} terms, L = {}",
            kn,
            terms.len(),
            length
        );
        Ok(NonLinear { kn, terms, domain })
    }

    /// Terms in construction order
    pub fn terms(&self) -> &[Monomial] {
        &self.terms
    }
}

impl Operator for NonLinear {
    fn forward(&self, coeffs: &Spectral) -> Result<Spectral> {
        let pair = FftPair::new(coeffs.len())?;
        let length = self.domain.length();
        let phi = pair.backward(coeffs)?;
        let mut mul = Physical::ones(pair.n);
        let mut mulhat = Spectral::ones(pair.n);
        for term in self.terms.iter().rev() {
            log::debug!("nonlinear term: order {}, power {}", term.order, term.power);
            let product = phi.powi(term.power).mul(&mul)?;
            mulhat = differentiate(&pair.forward(&product)?, term.order, length)?;
            mul = pair.backward(&mulhat)?;
        }
        Ok(mulhat.scale(self.kn))
    }

    fn domain(&self) -> Domain {
        self.domain
    }
}
