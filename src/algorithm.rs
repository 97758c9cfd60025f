use crate::config::{EmptyClusterPolicy, KMeansConfig};
use crate::distance::{assign_labels, centroid_displacement};
use crate::error::KMeansError;
use crate::point::{Centroid, Label, LabelSet, Point};
use rand::Rng;
use tracing::{debug, warn};

/// Result of a single k-means step
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// Recomputed centroids, one per label in label-set order
    pub centroids: Vec<Centroid>,

    /// Whether every centroid stayed within tolerance of its previous position
    pub converged: bool,

    /// Largest per-axis displacement measured under the configured rule
    pub max_displacement: f64,

    /// Labels that had no points and kept their previous centroid
    pub empty_clusters: Vec<Label>,
}

/// Pick `k` seed points and make the first nearest-centroid assignment.
///
/// Seeds are drawn uniformly; a draw whose coordinates match an already chosen
/// seed is discarded and redrawn. Each seed gets at most
/// `config.seed_retry_factor * points.len()` draws. The number of clusters is
/// taken from `labels`.
///
/// Returns one centroid per label, in label order. Every point, seeds
/// included, is relabelled with its nearest centroid.
///
/// # Errors
///
/// - [`KMeansError::InsufficientData`] if there are fewer points than labels
/// - [`KMeansError::SeedSelectionExhausted`] if no unused coordinates turn up
///   within the draw budget
///
/// Points are not modified when an error is returned.
pub fn initialize<R: Rng + ?Sized>(
    points: &mut [Point],
    labels: &LabelSet,
    rng: &mut R,
    config: &KMeansConfig,
) -> Result<Vec<Centroid>, KMeansError> {
    let n_points = points.len();
    let k = labels.k();

    if n_points < k {
        return Err(KMeansError::InsufficientData(format!(
            "Number of points ({}) is less than k ({})",
            n_points, k
        )));
    }

    let max_draws = config.seed_retry_factor.max(1).saturating_mul(n_points);
    let mut seeds: Vec<usize> = Vec::with_capacity(k);

    for cluster in 0..k {
        let mut attempts = 0;
        let seed = loop {
            if attempts == max_draws {
                warn!(
                    cluster = cluster,
                    attempts = attempts,
                    n_points = n_points,
                    "ran out of draws looking for a distinct seed point"
                );
                return Err(KMeansError::SeedSelectionExhausted { cluster, attempts });
            }
            attempts += 1;

            let candidate = rng.gen_range(0..n_points);
            let taken = seeds
                .iter()
                .any(|&s| points[s].same_position(&points[candidate]));
            if !taken {
                break candidate;
            }
        };
        seeds.push(seed);
    }

    let centroids: Vec<Centroid> = seeds
        .iter()
        .zip(labels.iter())
        .map(|(&idx, label)| Centroid::at(&points[idx], label))
        .collect();

    for (&idx, label) in seeds.iter().zip(labels.iter()) {
        points[idx].set_label(label);
    }
    assign_labels(points, &centroids);

    debug!(n_points = n_points, k = k, seeds = ?seeds, "initialized centroids");

    Ok(centroids)
}

/// Run one k-means iteration.
///
/// Recomputes each centroid as the mean of the points carrying its label,
/// relabels every point with its nearest new centroid, and compares the new
/// centroids against `previous` index by index.
///
/// Points whose label is not in `labels` take no part in the recomputation
/// but are relabelled like every other point.
///
/// # Errors
///
/// - [`KMeansError::InvalidDimensions`] if `previous` does not hold one
///   centroid per label
/// - [`KMeansError::EmptyCluster`] if a label has no points and the policy is
///   [`EmptyClusterPolicy::Fail`]; points are left untouched
pub fn step(
    previous: &[Centroid],
    points: &mut [Point],
    labels: &LabelSet,
    config: &KMeansConfig,
) -> Result<StepOutcome, KMeansError> {
    let k = labels.k();

    if previous.len() != k {
        return Err(KMeansError::InvalidDimensions(format!(
            "Expected {} previous centroids, got {}",
            k,
            previous.len()
        )));
    }

    // Accumulate per-label sums and counts
    let mut sums = vec![ClusterSum::default(); k];
    for point in points.iter() {
        if let Some(idx) = point.label().and_then(|label| labels.index_of(label)) {
            sums[idx].add(point);
        }
    }

    // Compute new centroids
    let mut centroids = Vec::with_capacity(k);
    let mut empty_clusters = Vec::new();

    for (idx, sum) in sums.iter().enumerate() {
        let label = labels[idx];
        match sum.mean() {
            Some((x, y)) => centroids.push(Centroid::new(x, y, label)),
            None => match config.empty_clusters {
                EmptyClusterPolicy::Fail => {
                    return Err(KMeansError::EmptyCluster { label });
                }
                EmptyClusterPolicy::KeepPrevious => {
                    warn!(label = %label, "cluster has no points, keeping previous centroid");
                    empty_clusters.push(label);
                    centroids.push(Centroid::new(previous[idx].x, previous[idx].y, label));
                }
            },
        }
    }

    assign_labels(points, &centroids);

    // Check convergence
    let mut converged = true;
    let mut max_displacement = f64::NEG_INFINITY;
    for (old, new) in previous.iter().zip(centroids.iter()) {
        let (dx, dy) = centroid_displacement(old, new, config.displacement);
        max_displacement = max_displacement.max(dx).max(dy);
        if dx > config.tol || dy > config.tol {
            converged = false;
        }
    }

    debug!(
        k = k,
        max_displacement = max_displacement,
        tol = config.tol,
        converged = converged,
        "k-means step complete"
    );

    Ok(StepOutcome {
        centroids,
        converged,
        max_displacement,
        empty_clusters,
    })
}

/// Running coordinate sum for one cluster
#[derive(Debug, Clone, Copy, Default)]
struct ClusterSum {
    x: f64,
    y: f64,
    count: usize,
}

impl ClusterSum {
    fn add(&mut self, point: &Point) {
        self.x += point.x();
        self.y += point.y();
        self.count += 1;
    }

    fn mean(&self) -> Option<(f64, f64)> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some((self.x / n, self.y / n))
    }
}
