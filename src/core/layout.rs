use super::constants::*;
use rand::Rng;

/// Angular placement of one item on the sphere surface (degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpherePoint {
    pub theta: f32,
    pub phi: f32,
    pub radius: f32,
}

/// Golden-angle placement before the pole correction and jitter.
///
/// Returns `(theta, phi)` in degrees for item `i` of `count`.
#[inline]
pub fn golden_angle(i: usize, count: usize) -> (f32, f32) {
    let golden_ratio = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let angle_increment = std::f64::consts::TAU / golden_ratio;
    let t = i as f64 / count as f64;
    let inclination = (1.0 - 2.0 * t).clamp(-1.0, 1.0).acos();
    let azimuth = angle_increment * i as f64;
    let theta = azimuth.to_degrees().rem_euclid(360.0) as f32;
    (theta, inclination.to_degrees() as f32)
}

/// Push `phi` away from the poles, then squeeze it into the reduced band.
#[inline]
pub fn correct_pole_density(phi: f32) -> f32 {
    let bonus = ((phi - 90.0).abs() / 90.0).powf(POLE_BONUS_EXPONENT) * POLE_BONUS_DEG;
    let pushed = if phi < 90.0 {
        (phi - bonus).max(POLE_PHI_MIN)
    } else {
        (phi + bonus).min(POLE_PHI_MAX)
    };
    PHI_BAND_MIN + (pushed / 180.0) * (PHI_BAND_MAX - PHI_BAND_MIN)
}

/// Generate `count` points covering the sphere of `radius`.
pub fn generate_positions<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Vec<SpherePoint> {
    (0..count)
        .map(|i| {
            let (theta, phi) = golden_angle(i, count);
            let phi = correct_pole_density(phi);

            let theta_jitter = (rng.gen::<f32>() - 0.5) * THETA_JITTER_DEG;
            let phi_jitter = (rng.gen::<f32>() - 0.5) * PHI_JITTER_DEG;
            let mut theta = (theta + theta_jitter).rem_euclid(360.0);
            // rem_euclid can round up to exactly 360 for tiny negative inputs
            if theta >= 360.0 {
                theta = 0.0;
            }
            let phi = (phi + phi_jitter).clamp(PHI_BAND_MIN, PHI_BAND_MAX);

            SpherePoint { theta, phi, radius }
        })
        .collect()
}
