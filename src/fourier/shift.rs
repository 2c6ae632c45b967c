//! Index rotation between natural and centered order
//!
//! Natural order puts the zero wavenumber (or the sample at `x = 0`)
//! first, centered order puts the most negative one first.

/// Natural -> centered, rotate right by `n / 2`.
///
/// ```
/// use pdspectral::fourier::shift::fftshift;
/// assert_eq!(fftshift(&[0, 1, 2, -2, -1]), vec![-2, -1, 0, 1, 2]);
/// assert_eq!(fftshift(&[0, 1, -2, -1]), vec![-2, -1, 0, 1]);
/// ```
pub fn fftshift<T: Clone>(input: &[T]) -> Vec<T> {
    let mut out = input.to_vec();
    out.rotate_right(input.len() / 2);
    out
}

/// Centered -> natural, rotate left by `n / 2`. Inverse of [`fftshift`].
///
/// ```
/// use pdspectral::fourier::shift::ifftshift;
/// assert_eq!(ifftshift(&[-2, -1, 0, 1, 2]), vec![0, 1, 2, -2, -1]);
/// ```
pub fn ifftshift<T: Clone>(input: &[T]) -> Vec<T> {
    let mut out = input.to_vec();
    out.rotate_left(input.len() / 2);
    out
}
