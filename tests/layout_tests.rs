// Host-side tests for the sphere position generator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod layout {
    include!("../src/core/layout.rs");
}

use layout::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn generates_exactly_n_points_inside_band() {
    let mut rng = StdRng::seed_from_u64(1);
    for n in 1..=200 {
        let pts = generate_positions(n, 270.0, &mut rng);
        assert_eq!(pts.len(), n);
        for (i, p) in pts.iter().enumerate() {
            assert!(
                (15.0..=165.0).contains(&p.phi),
                "n={n} i={i} phi={} out of band",
                p.phi
            );
            assert!(
                (0.0..360.0).contains(&p.theta),
                "n={n} i={i} theta={} out of range",
                p.theta
            );
        }
    }
}

#[test]
fn zero_items_yield_no_points() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(generate_positions(0, 270.0, &mut rng).is_empty());
}

#[test]
fn radius_is_shared_by_every_point() {
    let mut rng = StdRng::seed_from_u64(9);
    let pts = generate_positions(30, 180.0, &mut rng);
    assert!(pts.iter().all(|p| p.radius == 180.0));
}

#[test]
fn same_seed_reproduces_the_layout() {
    let a = generate_positions(30, 270.0, &mut StdRng::seed_from_u64(42));
    let b = generate_positions(30, 270.0, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn jitter_stays_within_bounds_of_the_regular_lattice() {
    let mut rng = StdRng::seed_from_u64(3);
    let n = 30;
    let pts = generate_positions(n, 270.0, &mut rng);
    for (i, p) in pts.iter().enumerate() {
        let (theta0, phi0) = golden_angle(i, n);
        let phi0 = correct_pole_density(phi0);
        // angular distance on the circle
        let d = (p.theta - theta0).rem_euclid(360.0);
        let d = d.min(360.0 - d);
        assert!(d <= 10.0 + 1e-3, "theta jitter {d} too large at {i}");
        assert!((p.phi - phi0).abs() <= 5.0 + 1e-3, "phi jitter too large at {i}");
    }
}

#[test]
fn golden_angle_starts_at_the_north_pole() {
    let (theta, phi) = golden_angle(0, 10);
    assert_eq!(theta, 0.0);
    assert!(phi.abs() < 1e-4);
    let (_, phi_mid) = golden_angle(5, 10);
    assert!((phi_mid - 90.0).abs() < 1e-3);
}

#[test]
fn golden_angle_azimuth_advances_by_the_golden_angle() {
    let golden = 360.0 / ((1.0 + 5.0_f32.sqrt()) / 2.0);
    let (t1, _) = golden_angle(1, 30);
    assert!((t1 - golden.rem_euclid(360.0)).abs() < 1e-3);
}

#[test]
fn pole_correction_maps_into_reduced_band_and_keeps_order() {
    let mut prev = f32::MIN;
    for step in 0..=180 {
        let phi = correct_pole_density(step as f32);
        assert!((15.0..=165.0).contains(&phi), "phi={phi}");
        assert!(phi >= prev, "correction not monotonic at {step}");
        prev = phi;
    }
    // equator is a fixed point of the correction
    assert!((correct_pole_density(90.0) - 90.0).abs() < 1e-4);
}

#[test]
fn pole_correction_pushes_points_away_from_the_equator() {
    // the bonus pushes toward the poles before the band squeeze; near-equator
    // points end up spread further apart than before
    let a = correct_pole_density(80.0);
    let b = correct_pole_density(100.0);
    assert!(b - a > 20.0 * 150.0 / 180.0);
}
