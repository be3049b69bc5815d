//! Run both solvers over seeded random point clouds and report timings.
//!
//! Mirrors a typical driver: sample a cloud (uniform or clipped normal),
//! target 80% coverage, solve exactly and approximately, audit both answers
//! with the verifier, and print a console report. Set RUST_LOG=debug to see
//! the solver traces.

use krect::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::time::Instant;

const NUM_POINTS: usize = 1_000;
const SEED: u64 = 42;

/// Uniform samples over the unit square
fn uniform_cloud(rng: &mut StdRng, n: usize) -> PointSet {
    let mut set = PointSet::with_capacity(n);
    for _ in 0..n {
        set.add(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
    }
    set
}

/// Normal samples around the square's center, clipped to the unit square
fn normal_cloud(rng: &mut StdRng, n: usize) -> PointSet {
    let normal = Normal::new(0.5, 0.1).expect("finite standard deviation");
    let mut set = PointSet::with_capacity(n);
    for _ in 0..n {
        let x: f64 = normal.sample(rng);
        let y: f64 = normal.sample(rng);
        set.add(x.clamp(0.0, 1.0), y.clamp(0.0, 1.0));
    }
    set
}

fn report(label: &str, set: &PointSet, k: usize) {
    println!(">>> {label}, n = {}, k = {k}", set.len());

    let start = Instant::now();
    let exact = set.enclose_exact(k).expect("k is 80% of n");
    let exact_time = start.elapsed();
    println!(
        "  exact : {:?}, area {:.6}, covers {:>4}, {:.2}ms",
        exact.rect,
        exact.area,
        set.count_in_rect(&exact.rect),
        exact_time.as_secs_f64() * 1000.0
    );

    let start = Instant::now();
    let approx = set.enclose_approx(k).expect("k is 80% of n");
    let approx_time = start.elapsed();
    println!(
        "  approx: {:?}, area {:.6}, covers {:>4}, {:.2}ms",
        approx.rect,
        approx.area,
        set.count_in_rect(&approx.rect),
        approx_time.as_secs_f64() * 1000.0
    );

    println!();
}

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let k = NUM_POINTS * 8 / 10;

    let uniform = uniform_cloud(&mut rng, NUM_POINTS);
    report("uniform cloud", &uniform, k);

    let normal = normal_cloud(&mut rng, NUM_POINTS);
    report("normal cloud", &normal, k);
}
