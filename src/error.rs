use thiserror::Error;

use crate::point::Label;

/// Error types for the kmeans-stepper library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KMeansError {
    /// The number of clusters k is invalid (must be in [1, 5]) or the label set is malformed
    #[error("Invalid k value: {0}")]
    InvalidK(String),

    /// Not enough data points for the requested number of clusters
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Could not find k points with pairwise distinct coordinates to seed the centroids
    #[error("Seed selection exhausted: no distinct seed for cluster index {cluster} after {attempts} draws")]
    SeedSelectionExhausted { cluster: usize, attempts: usize },

    /// A cluster lost all of its points during centroid recomputation
    #[error("Cluster {label} has no assigned points")]
    EmptyCluster { label: Label },

    /// A point has a NaN or infinite coordinate
    #[error("Point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    /// Shape mismatch between inputs
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),
}
