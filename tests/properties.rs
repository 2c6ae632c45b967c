//! Property tests of transforms, differentiation and operators.
//!
//! More cases: `PROPTEST_CASES=1000 cargo test --test properties`
use pdspectral::{
    differentiate, extend_to_grid, forward_transform, inverse_transform, Complex, DiffTerm,
    Linear, Monomial, NonLinear, Operator, Physical, Seed, Spectral,
};
use proptest::prelude::*;

fn sequence(max_len: usize) -> impl Strategy<Value = Vec<Complex>> {
    prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 1..max_len)
        .prop_map(|v| {
            v.into_iter()
                .map(|(re, im)| Complex::new(re, im))
                .collect::<Vec<Complex>>()
        })
}

fn pair(max_len: usize) -> impl Strategy<Value = (Vec<Complex>, Vec<Complex>)> {
    (1..max_len).prop_flat_map(|n| {
        (
            prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), n),
            prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), n),
        )
            .prop_map(|(a, b)| {
                let to_complex = |v: Vec<(f64, f64)>| -> Vec<Complex> {
                    v.into_iter().map(|(re, im)| Complex::new(re, im)).collect()
                };
                (to_complex(a), to_complex(b))
            })
    })
}

/// Largest absolute difference relative to the scale of `expected`
fn rel_err(result: &Spectral, expected: &Spectral) -> f64 {
    let scale = expected
        .view()
        .iter()
        .map(|v| v.norm())
        .fold(1.0, f64::max);
    result.max_abs_diff(expected).unwrap() / scale
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn round_trip_physical(data in sequence(1024)) {
        let sample = Physical::from(data);
        let back = inverse_transform(&forward_transform(&sample).unwrap()).unwrap();
        prop_assert!(back.max_abs_diff(&sample).unwrap() < 1e-9);
    }

    #[test]
    fn round_trip_spectral(data in sequence(1024)) {
        let coeffs = Spectral::from(data);
        let back = forward_transform(&inverse_transform(&coeffs).unwrap()).unwrap();
        prop_assert!(back.max_abs_diff(&coeffs).unwrap() < 1e-9);
    }

    #[test]
    fn transform_preserves_length(data in sequence(128), extra in 0usize..64) {
        let n = data.len();
        let coeffs = Spectral::from(data);
        prop_assert_eq!(inverse_transform(&coeffs).unwrap().len(), n);
        prop_assert_eq!(extend_to_grid(&coeffs, n + extra).unwrap().len(), n + extra);
    }

    #[test]
    fn differentiation_linearity(
        (x, y) in pair(64),
        a in -3.0f64..3.0,
        b in -3.0f64..3.0,
        p in 0i32..4,
        l in 0.5f64..10.0,
    ) {
        let x = Spectral::from(x);
        let y = Spectral::from(y);
        let combined = x.scale(a).add(&y.scale(b)).unwrap();
        let lhs = differentiate(&combined, p, l).unwrap();
        let rhs = differentiate(&x, p, l)
            .unwrap()
            .scale(a)
            .add(&differentiate(&y, p, l).unwrap().scale(b))
            .unwrap();
        prop_assert!(rel_err(&lhs, &rhs) < 1e-10);
    }

    #[test]
    fn differentiation_order_additivity(
        x in sequence(64),
        p1 in 0i32..3,
        p2 in 0i32..3,
        l in 0.5f64..10.0,
    ) {
        let x = Spectral::from(x);
        let nested = differentiate(&differentiate(&x, p1, l).unwrap(), p2, l).unwrap();
        let direct = differentiate(&x, p1 + p2, l).unwrap();
        prop_assert!(rel_err(&nested, &direct) < 1e-10);
    }

    #[test]
    fn differentiation_zero_order_identity(x in sequence(64), l in 0.1f64..100.0) {
        let x = Spectral::from(x);
        prop_assert_eq!(differentiate(&x, 0, l).unwrap(), x);
    }

    #[test]
    fn extension_to_same_grid(x in sequence(256)) {
        let coeffs = Spectral::from(x);
        let extended = extend_to_grid(&coeffs, coeffs.len()).unwrap();
        let direct = inverse_transform(&coeffs).unwrap();
        prop_assert!(extended.max_abs_diff(&direct).unwrap() < 1e-9);
    }

    #[test]
    fn linear_plain_term_with_input_seed(
        x in sequence(64),
        kl in -5.0f64..5.0,
        p in 0i32..4,
        l in 0.5f64..10.0,
    ) {
        let x = Spectral::from(x);
        let op = Linear::new(kl, vec![DiffTerm::plain(p)], l)
            .unwrap()
            .with_seed(Seed::Input);
        let expected = differentiate(&x, p, l).unwrap().scale(kl);
        prop_assert_eq!(op.forward(&x).unwrap(), expected);
    }

    #[test]
    fn linear_plain_term_with_ones_seed_ignores_input(
        x in sequence(64),
        p in 1i32..3,
        l in 2.0f64..10.0,
    ) {
        let x = Spectral::from(x);
        let op = Linear::new(1.0, vec![DiffTerm::plain(p)], l).unwrap();
        let out = op.forward(&x).unwrap();
        prop_assert!(out.max_abs_diff(&Spectral::zeros(x.len())).unwrap() < 1e-9);
    }

    #[test]
    fn nonlinear_single_power_one(
        x in sequence(64),
        kn in -5.0f64..5.0,
        p in 0i32..3,
        l in 0.5f64..10.0,
    ) {
        let x = Spectral::from(x);
        let op = NonLinear::new(kn, vec![Monomial::new(p, 1)], l).unwrap();
        let expected = differentiate(&x, p, l).unwrap().scale(kn);
        prop_assert!(rel_err(&op.forward(&x).unwrap(), &expected) < 1e-9);
    }
}
