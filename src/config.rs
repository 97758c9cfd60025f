/// Upper bound on the number of clusters a session can track.
pub const MAX_CLUSTERS: usize = 5;

/// How the per-axis centroid movement is measured against the tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Displacement {
    /// `|old - new|` on each axis. A centroid moving in either direction counts.
    #[default]
    Absolute,

    /// `old - new` on each axis, compared without taking the absolute value.
    ///
    /// A centroid whose coordinate grew by more than the tolerance still counts
    /// as settled. Matches runs that measured movement as `old - new`.
    Signed,
}

/// What a step does when a cluster ends up with no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyClusterPolicy {
    /// Carry the previous centroid over unchanged and report the label in
    /// [`StepOutcome::empty_clusters`](crate::StepOutcome::empty_clusters).
    #[default]
    KeepPrevious,

    /// Abort the step with [`KMeansError::EmptyCluster`](crate::KMeansError::EmptyCluster)
    /// before any label is rewritten.
    Fail,
}

/// Configuration for the step-wise k-means algorithm
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters, in `1..=MAX_CLUSTERS`
    pub k: usize,

    /// Convergence tolerance. A step converges when no centroid moved more
    /// than this on either axis.
    pub tol: f64,

    /// Random seed for centroid initialization
    pub seed: u64,

    /// Each seed may draw up to `seed_retry_factor * n_points` indices before
    /// initialization gives up on finding a point with unused coordinates.
    pub seed_retry_factor: usize,

    /// Rule used to measure centroid movement
    pub displacement: Displacement,

    /// Policy for clusters that lose every point
    pub empty_clusters: EmptyClusterPolicy,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 3,
            tol: 1e-6,
            seed: 0,
            seed_retry_factor: 10,
            displacement: Displacement::Absolute,
            empty_clusters: EmptyClusterPolicy::KeepPrevious,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the convergence tolerance
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the seed retry factor
    pub fn with_seed_retry_factor(mut self, factor: usize) -> Self {
        self.seed_retry_factor = factor;
        self
    }

    /// Set the displacement rule used by the convergence test
    pub fn with_displacement(mut self, displacement: Displacement) -> Self {
        self.displacement = displacement;
        self
    }

    /// Set the empty-cluster policy
    pub fn with_empty_clusters(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_clusters = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KMeansConfig::default();
        assert_eq!(config.k, 3);
        assert_eq!(config.tol, 1e-6);
        assert_eq!(config.displacement, Displacement::Absolute);
        assert_eq!(config.empty_clusters, EmptyClusterPolicy::KeepPrevious);
    }

    #[test]
    fn test_builder_chain() {
        let config = KMeansConfig::new(5)
            .with_tol(1e-3)
            .with_seed(7)
            .with_seed_retry_factor(2)
            .with_displacement(Displacement::Signed)
            .with_empty_clusters(EmptyClusterPolicy::Fail);

        assert_eq!(config.k, 5);
        assert_eq!(config.tol, 1e-3);
        assert_eq!(config.seed, 7);
        assert_eq!(config.seed_retry_factor, 2);
        assert_eq!(config.displacement, Displacement::Signed);
        assert_eq!(config.empty_clusters, EmptyClusterPolicy::Fail);
    }
}
