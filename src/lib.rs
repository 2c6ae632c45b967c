#![warn(missing_docs)]
//! # pdspectral: pseudo-spectral operators on periodic domains
//!
//! This library evaluates spatial derivatives of periodic functions with
//! the pseudo-spectral method: transform a sample to Fourier space,
//! multiply by a power of the wavenumber and transform back. On top of
//! these primitives it composes
//! - linear operators with variable coefficients, e.g. `D(q(x) D(p(x) φ))`
//! - nonlinear monomials, e.g. `D(φ^m D(φ^n))`
//!
//! as needed for the right-hand side of a partial differential equation.
//!
//! All sequences are exchanged in the *centered* Fourier format, where the
//! coefficient of wavenumber `k` lives at index `k + n/2`. The types
//! [`Physical`], [`Spectral`] and [`Natural`] keep the three orderings apart.
//!
//! ```
//! use pdspectral::{differentiate, forward_transform, inverse_transform, Domain};
//! use std::f64::consts::PI;
//!
//! let domain = Domain::new(2. * PI).unwrap();
//! let phi = domain.sample(32, |x| x.sin());
//! let dphi = inverse_transform(
//!     &differentiate(&forward_transform(&phi).unwrap(), 1, domain.length()).unwrap(),
//! )
//! .unwrap();
//! for (x, v) in domain.coords(32).iter().zip(dphi.view().iter()) {
//!     assert!((v.re - x.cos()).abs() < 1e-6);
//! }
//! ```
#[macro_use]
extern crate enum_dispatch;
pub mod domain;
pub mod error;
pub mod fourier;
pub mod operator;
pub mod types;
pub use domain::Domain;
pub use error::{Result, SpectralError};
pub use fourier::{
    centered_wavenumbers, differentiate, extend_to_grid, forward_transform, inverse_transform,
};
pub use operator::{
    DiffTerm, Linear, Monomial, Multiplier, NonLinear, Operator, OperatorKind, Rhs, Seed,
};
pub use types::{Natural, Physical, Spectral};

/// Real type
pub type Real = f64;

/// Complex type
pub type Complex = num_complex::Complex<Real>;
