use crate::config::Displacement;
use crate::point::{Centroid, Point, Position};

/// Euclidean distance between two 2-D positions
#[inline]
pub fn euclidean_distance(a: &impl Position, b: &impl Position) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}

/// Index of the centroid closest to `point`.
///
/// Only a strictly smaller distance replaces the current best, so ties go to
/// the lowest index.
///
/// # Panics
///
/// Panics if `centroids` is empty.
pub fn nearest_centroid(point: &impl Position, centroids: &[Centroid]) -> usize {
    assert!(!centroids.is_empty(), "no centroids to search");

    let mut best_idx = 0;
    let mut best_dist = euclidean_distance(point, &centroids[0]);

    for (idx, centroid) in centroids.iter().enumerate().skip(1) {
        let dist = euclidean_distance(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best_idx = idx;
        }
    }

    best_idx
}

/// Relabel every point with the label of its nearest centroid.
pub fn assign_labels(points: &mut [Point], centroids: &[Centroid]) {
    for point in points.iter_mut() {
        let idx = nearest_centroid(&*point, centroids);
        point.set_label(centroids[idx].label);
    }
}

/// Per-axis movement from `old` to `new` under the given rule.
///
/// Returns `(dx, dy)`. Under [`Displacement::Signed`] these are `old - new`
/// and may be negative.
#[inline]
pub fn centroid_displacement(old: &Centroid, new: &Centroid, rule: Displacement) -> (f64, f64) {
    let dx = old.x - new.x;
    let dy = old.y - new.y;
    match rule {
        Displacement::Absolute => (dx.abs(), dy.abs()),
        Displacement::Signed => (dx, dy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Label;
    use approx::assert_relative_eq;

    fn centroids(coords: &[(f64, f64)]) -> Vec<Centroid> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Centroid::new(x, y, Label::new(i as u8)))
            .collect()
    }

    #[test]
    fn test_euclidean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_relative_eq!(euclidean_distance(&a, &b), 5.0, epsilon = 1e-12);
        assert_relative_eq!(euclidean_distance(&b, &a), 5.0, epsilon = 1e-12);
        assert_eq!(euclidean_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_nearest_centroid() {
        let c = centroids(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        assert_eq!(nearest_centroid(&Point::new(1.0, 1.0), &c), 0);
        assert_eq!(nearest_centroid(&Point::new(9.0, 1.0), &c), 1);
        assert_eq!(nearest_centroid(&Point::new(-1.0, 12.0), &c), 2);
    }

    #[test]
    fn test_nearest_centroid_tie_goes_to_first() {
        let c = centroids(&[(0.0, 0.0), (10.0, 0.0), (5.0, 5.0)]);
        // (5, 0) is exactly 5 away from all three
        assert_eq!(nearest_centroid(&Point::new(5.0, 0.0), &c), 0);

        let c = centroids(&[(10.0, 0.0), (0.0, 0.0)]);
        assert_eq!(nearest_centroid(&Point::new(5.0, 0.0), &c), 0);
    }

    #[test]
    fn test_assign_labels() {
        let c = centroids(&[(0.0, 0.0), (10.0, 10.0)]);
        let mut points = vec![
            Point::new(0.5, 0.5),
            Point::new(9.0, 9.5),
            Point::new(5.0, 5.0),
        ];

        assign_labels(&mut points, &c);

        assert_eq!(points[0].label(), Some(Label::new(0)));
        assert_eq!(points[1].label(), Some(Label::new(1)));
        // equidistant, first centroid wins
        assert_eq!(points[2].label(), Some(Label::new(0)));
    }

    #[test]
    fn test_centroid_displacement() {
        let old = Centroid::new(1.0, 1.0, Label::new(0));
        let new = Centroid::new(3.0, 0.5, Label::new(0));

        let (dx, dy) = centroid_displacement(&old, &new, Displacement::Absolute);
        assert_relative_eq!(dx, 2.0);
        assert_relative_eq!(dy, 0.5);

        let (dx, dy) = centroid_displacement(&old, &new, Displacement::Signed);
        assert_relative_eq!(dx, -2.0);
        assert_relative_eq!(dy, 0.5);
    }
}
