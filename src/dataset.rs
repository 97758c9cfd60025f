//! Synthetic point sets for demos and tests.

use std::f64::consts::TAU;

use crate::point::Point;
use rand::Rng;

/// Centers of the three demo clusters.
pub const DEMO_CENTERS: [(f64, f64); 3] = [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)];

/// Radius of each demo cluster.
pub const DEMO_RADIUS: f64 = 5.0;

/// Points generated around each demo center.
pub const DEMO_POINTS_PER_CLUSTER: usize = 10;

/// `n` points scattered in a disk of `radius` around `center`.
///
/// Each point takes a uniform angle in `[0, 2π)` and a uniform distance in
/// `[0, radius]`, so density is higher near the center than near the rim.
///
/// # Panics
///
/// Panics if `radius` is negative or not finite.
pub fn disk_cluster<R: Rng + ?Sized>(
    center: (f64, f64),
    radius: f64,
    n: usize,
    rng: &mut R,
) -> Vec<Point> {
    assert!(
        radius.is_finite() && radius >= 0.0,
        "radius must be a finite non-negative number"
    );

    (0..n)
        .map(|_| {
            let angle = rng.gen_range(0.0..TAU);
            let r = rng.gen_range(0.0..=radius);
            Point::new(center.0 + angle.cos() * r, center.1 + angle.sin() * r)
        })
        .collect()
}

/// Three clusters of [`DEMO_POINTS_PER_CLUSTER`] points around
/// [`DEMO_CENTERS`], each of radius [`DEMO_RADIUS`].
pub fn demo_points<R: Rng + ?Sized>(rng: &mut R) -> Vec<Point> {
    DEMO_CENTERS
        .iter()
        .flat_map(|&center| disk_cluster(center, DEMO_RADIUS, DEMO_POINTS_PER_CLUSTER, &mut *rng))
        .collect()
}
