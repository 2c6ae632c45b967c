use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use ndarray::Array1;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use pdspectral::*;

const SIZES: [usize; 4] = [128, 264, 512, 1024];

pub fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("Transform");
    group.significance_level(0.1).sample_size(10);
    for n in SIZES.iter() {
        let sample = Physical::from_real(&Array1::random(*n, Uniform::new(-1., 1.)));
        let name = format!("Size: {}", *n);
        group.bench_function(&name, |b| b.iter(|| forward_transform(&sample)));
    }
    group.finish();
}

pub fn bench_operator(c: &mut Criterion) {
    let mut group = c.benchmark_group("Operator");
    group.significance_level(0.1).sample_size(10);
    let l = 2. * std::f64::consts::PI;
    for n in SIZES.iter() {
        let domain = Domain::new(l).unwrap();
        let phi = forward_transform(&domain.sample(*n, |x| x.sin())).unwrap();
        let rhs = Rhs::new(l)
            .unwrap()
            .with(NonLinear::new(-3., vec![Monomial::new(1, 2)], l).unwrap())
            .unwrap()
            .with(
                Linear::new(
                    -1.,
                    vec![DiffTerm::function(1, |x| 2. + x.cos()), DiffTerm::plain(1)],
                    l,
                )
                .unwrap()
                .with_seed(Seed::Input),
            )
            .unwrap();
        let name = format!("Size: {}", *n);
        group.bench_function(&name, |b| b.iter(|| rhs.forward(&phi)));
    }
    group.finish();
}

criterion_group!(benches, bench_transform, bench_operator);
criterion_main!(benches);
