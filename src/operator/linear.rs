//! Linear operator with variable coefficients
//!
//! Terms `[(p_1, q_1), .., (p_k, q_k)]` represent
//! `D^{p_1}(q_1 D^{p_2}(q_2 .. D^{p_k}(q_k φ)))`.
use super::{ones_accumulator, Operator};
use crate::domain::Domain;
use crate::error::{check_len, check_order, Result};
use crate::fourier::{differentiate, FftPair};
use crate::types::{Physical, Spectral};
use crate::{Complex, Real};
use ndarray::Array1;
use std::fmt;
use std::sync::Arc;

/// Pointwise coefficient `q(x)` of a [`DiffTerm`]
#[derive(Clone)]
pub enum Multiplier {
    /// Values on the grid, must match the grid size of the input
    Sampled(Physical),
    /// Function of the coordinate, sampled on the grid at evaluation
    Function(Arc<dyn Fn(Real) -> Complex + Send + Sync>),
}

impl Multiplier {
    /// Real valued function of the coordinate
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Real) -> Real + Send + Sync + 'static,
    {
        Multiplier::Function(Arc::new(move |x| Complex::new(f(x), 0.)))
    }

    /// Values on a grid of size `n`
    ///
    /// # Errors
    /// Sampled multiplier has a different size.
    pub fn sample(&self, domain: &Domain, n: usize) -> Result<Physical> {
        match self {
            Multiplier::Sampled(q) => {
                check_len(n, q.len())?;
                Ok(q.clone())
            }
            Multiplier::Function(f) => Ok(domain.sample_complex(n, |x| f(x))),
        }
    }
}

impl fmt::Debug for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Multiplier::Sampled(q) => f.debug_tuple("Sampled").field(q).finish(),
            Multiplier::Function(_) => f.write_str("Function"),
        }
    }
}

/// Derivative order and optional multiplier
#[derive(Debug, Clone)]
pub struct DiffTerm {
    /// Derivative order
    pub order: i32,
    /// Pointwise multiplication before differentiation
    pub multiplier: Option<Multiplier>,
}

impl DiffTerm {
    /// Return new term
    pub fn new(order: i32, multiplier: Option<Multiplier>) -> Self {
        DiffTerm { order, multiplier }
    }

    /// Derivative without multiplier
    pub fn plain(order: i32) -> Self {
        Self::new(order, None)
    }

    /// Derivative of the product with sampled values
    pub fn sampled(order: i32, q: Physical) -> Self {
        Self::new(order, Some(Multiplier::Sampled(q)))
    }

    /// Derivative of the product with real sampled values
    pub fn real(order: i32, q: &Array1<Real>) -> Self {
        Self::sampled(order, Physical::from_real(q))
    }

    /// Derivative of the product with a real function of the coordinate
    pub fn function<F>(order: i32, q: F) -> Self
    where
        F: Fn(Real) -> Real + Send + Sync + 'static,
    {
        Self::new(order, Some(Multiplier::from_fn(q)))
    }
}

/// Start value of the accumulator in [`Linear::forward`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// Constant one. The input enters only through the shape of the
    /// grid, all terms act on the multipliers.
    Ones,
    /// The input function itself, `[(p, None)]` is then `kl D^p φ`.
    Input,
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Ones
    }
}

/// Linear differential operator `kl D^{p_1}(q_1 D^{p_2}(q_2 ..))`
///
/// Evaluation keeps a running product in physical and spectral space.
/// Terms are processed from last to first. A term with multiplier
/// multiplies the physical accumulator by `q` and differentiates the
/// transform of the product. A term without multiplier differentiates
/// the spectral accumulator.
///
/// With the default [`Seed::Ones`] the accumulator starts at the
/// constant one, so terms without any multiplier differentiate a
/// constant and vanish past order zero.
///
/// # Example
/// ```
/// use pdspectral::{DiffTerm, Linear, Operator, Spectral};
/// use std::f64::consts::PI;
/// // D(sin(x)) on [-pi, pi)
/// let op = Linear::new(1., vec![DiffTerm::function(1, |x| x.sin())], 2. * PI).unwrap();
/// let out = op.forward(&Spectral::zeros(16)).unwrap();
/// assert_eq!(out.len(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct Linear {
    /// Scalar coefficient
    pub kl: Real,
    terms: Vec<DiffTerm>,
    domain: Domain,
    seed: Seed,
}

impl Linear {
    /// Return new linear operator
    ///
    /// # Errors
    /// - `length` is not positive
    /// - A term has negative order
    pub fn new(kl: Real, terms: Vec<DiffTerm>, length: Real) -> Result<Self> {
        let domain = Domain::new(length)?;
        for term in &terms {
            check_order(term.order)?;
        }
        log::debug!(
            "linear operator, kl = {}, {} terms, L = {}",
            kl,
            terms.len(),
            length
        );
        Ok(Linear {
            kl,
            terms,
            domain,
            seed: Seed::default(),
        })
    }

    /// Change start value of the accumulator
    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Terms in construction order
    pub fn terms(&self) -> &[DiffTerm] {
        &self.terms
    }

    /// Start value of the accumulator
    pub fn seed(&self) -> Seed {
        self.seed
    }
}

impl Operator for Linear {
    fn forward(&self, coeffs: &Spectral) -> Result<Spectral> {
        let n = coeffs.len();
        let pair = FftPair::new(n)?;
        let length = self.domain.length();
        let (mut mul, mut mulhat) = match self.seed {
            Seed::Ones => ones_accumulator(&pair)?,
            Seed::Input => (pair.backward(coeffs)?, coeffs.clone()),
        };
        for term in self.terms.iter().rev() {
            log::debug!(
                "linear term: order {}, multiplier {}",
                term.order,
                term.multiplier.is_some()
            );
            mulhat = match &term.multiplier {
                Some(q) => {
                    let product = q.sample(&self.domain, n)?.mul(&mul)?;
                    differentiate(&pair.forward(&product)?, term.order, length)?
                }
                None => differentiate(&mulhat, term.order, length)?,
            };
            mul = pair.backward(&mulhat)?;
        }
        Ok(mulhat.scale(self.kl))
    }

    fn domain(&self) -> Domain {
        self.domain
    }
}
