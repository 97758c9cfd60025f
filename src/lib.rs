//! # kmeans-stepper
//!
//! Step-by-step k-means clustering over 2-D points, built for callers that
//! advance the algorithm one iteration at a time and redraw in between.
//!
//! ## Features
//!
//! - **Two-operation core**: [`initialize`] picks distinct seed points and
//!   labels every point; [`step`] recomputes centroids, relabels, and reports
//!   convergence
//! - **Session object**: [`KMeansSession`] owns the points, centroids and
//!   random source between steps and tracks the
//!   uninitialized / assigned / converged state
//! - **Explicit edge-case policies**: bounded seed retries, a configurable
//!   empty-cluster policy and a configurable displacement rule
//! - **ndarray compatible**: build sessions from `Array2<f64>` and read
//!   centroids and labels back as arrays
//!
//! ## Example
//!
//! ```rust
//! use kmeans_stepper::{dataset, KMeansConfig, KMeansSession};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let points = dataset::demo_points(&mut rng);
//!
//! let mut session = KMeansSession::new(points, KMeansConfig::new(3)).unwrap();
//! loop {
//!     let report = session.advance().unwrap();
//!     if report.newly_converged {
//!         println!("converged after {} iterations", report.iteration);
//!         break;
//!     }
//! }
//! ```
//!
//! ## Driving the core directly
//!
//! ```rust
//! use kmeans_stepper::{initialize, step, KMeansConfig, LabelSet, Point};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(0.0, 10.0),
//! ];
//! let labels = LabelSet::new(3).unwrap();
//! let config = KMeansConfig::new(3);
//! let mut rng = ChaCha8Rng::seed_from_u64(0);
//!
//! let seeds = initialize(&mut points, &labels, &mut rng, &config).unwrap();
//! let outcome = step(&seeds, &mut points, &labels, &config).unwrap();
//! assert!(outcome.converged);
//! ```

mod algorithm;
mod config;
pub mod dataset;
mod distance;
mod error;
mod kmeans;
mod point;

pub use algorithm::{initialize, step, StepOutcome};
pub use config::{Displacement, EmptyClusterPolicy, KMeansConfig, MAX_CLUSTERS};
pub use distance::{assign_labels, centroid_displacement, euclidean_distance, nearest_centroid};
pub use error::KMeansError;
pub use kmeans::{KMeansSession, SessionState, StepReport};
pub use point::{Centroid, Label, LabelSet, Point, Position};
