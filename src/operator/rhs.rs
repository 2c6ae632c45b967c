//! Sum of operators, e.g. the right-hand side `dφ/dt = L(φ) + N(φ)`
use super::{Operator, OperatorKind};
use crate::domain::Domain;
use crate::error::{check_nonempty, Result, SpectralError};
use crate::types::Spectral;
use crate::Real;

/// Ordered sum of operators on one domain
///
/// # Example
/// ```
/// use pdspectral::{DiffTerm, Linear, Monomial, NonLinear, Operator, Rhs, Seed};
/// // Burgers: -φ D(φ) + 0.1 D^2(φ)
/// let l = 2. * std::f64::consts::PI;
/// let rhs = Rhs::new(l)
///     .unwrap()
///     .with(NonLinear::new(-0.5, vec![Monomial::new(1, 2)], l).unwrap())
///     .unwrap()
///     .with(
///         Linear::new(0.1, vec![DiffTerm::plain(2)], l)
///             .unwrap()
///             .with_seed(Seed::Input),
///     )
///     .unwrap();
/// assert_eq!(rhs.operators().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Rhs {
    operators: Vec<OperatorKind>,
    domain: Domain,
}

impl Rhs {
    /// Empty sum on a domain of length `length`
    ///
    /// # Errors
    /// `length` is not positive.
    pub fn new(length: Real) -> Result<Self> {
        Ok(Rhs {
            operators: Vec::new(),
            domain: Domain::new(length)?,
        })
    }

    /// Append an operator
    ///
    /// # Errors
    /// The operator lives on a different domain.
    pub fn with<O: Into<OperatorKind>>(mut self, operator: O) -> Result<Self> {
        let operator = operator.into();
        let length = operator.domain().length();
        if (length - self.domain.length()).abs() > Real::EPSILON * self.domain.length() {
            return Err(SpectralError::DomainMismatch(self.domain.length(), length));
        }
        self.operators.push(operator);
        Ok(self)
    }

    /// Operators in summation order
    pub fn operators(&self) -> &[OperatorKind] {
        &self.operators
    }
}

impl Operator for Rhs {
    /// Sum of all operators, zero if there are none
    fn forward(&self, coeffs: &Spectral) -> Result<Spectral> {
        check_nonempty(coeffs.len())?;
        let mut total = Spectral::zeros(coeffs.len());
        for operator in &self.operators {
            total = total.add(&operator.forward(coeffs)?)?;
        }
        Ok(total)
    }

    fn domain(&self) -> Domain {
        self.domain
    }
}
