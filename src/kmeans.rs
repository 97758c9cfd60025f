use crate::algorithm::{initialize, step};
use crate::config::KMeansConfig;
use crate::error::KMeansError;
use crate::point::{Centroid, LabelSet, Point};
use ndarray::{Array1, Array2, ArrayView2};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Where a session is in the k-means state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No centroids yet; the next advance picks seeds.
    Uninitialized,
    /// Points are labelled and the last step had not converged.
    Assigned,
    /// The last step reported convergence.
    Converged,
}

/// What a single [`KMeansSession::advance`] did.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// 0 for the initialization, then 1, 2, ... for each iteration
    pub iteration: usize,

    /// Whether this advance reported convergence. Always `false` for the
    /// initialization.
    pub converged: bool,

    /// `true` only the first time the session converges
    pub newly_converged: bool,

    /// Largest centroid displacement of this iteration, `None` for the
    /// initialization
    pub max_displacement: Option<f64>,
}

/// Step-by-step k-means over a fixed 2-D point set.
///
/// The session owns the points, the label set, the current centroids and the
/// random source used for seeding. Each call to [`advance`](Self::advance)
/// performs one unit of work: the first picks seeds and labels every point,
/// later ones run one iteration each. Iterating past convergence is allowed
/// and keeps reporting convergence while centroids stay put.
///
/// # Example
///
/// ```
/// use kmeans_stepper::{KMeansConfig, KMeansSession, Point, SessionState};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.5, 0.2),
///     Point::new(9.8, 10.1),
///     Point::new(10.0, 10.0),
/// ];
///
/// let mut session = KMeansSession::new(points, KMeansConfig::new(2).with_seed(42)).unwrap();
/// session.run_until_converged(20).unwrap();
///
/// assert_eq!(session.state(), SessionState::Converged);
/// assert_eq!(session.centroids().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct KMeansSession {
    /// Model configuration
    config: KMeansConfig,

    /// Labels `#0..#k`, one per centroid
    labels: LabelSet,

    points: Vec<Point>,

    /// Current centroids (None before the first advance)
    centroids: Option<Vec<Centroid>>,

    state: SessionState,
    iteration: usize,
    has_converged: bool,
    rng: ChaCha8Rng,
}

impl KMeansSession {
    /// Create a session over `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `config.k` is outside `1..=MAX_CLUSTERS`
    /// - There are fewer points than clusters
    /// - A point has a NaN or infinite coordinate
    pub fn new(points: Vec<Point>, config: KMeansConfig) -> Result<Self, KMeansError> {
        let labels = LabelSet::new(config.k)?;

        if let Some(index) = points
            .iter()
            .position(|p| !p.x().is_finite() || !p.y().is_finite())
        {
            return Err(KMeansError::NonFiniteCoordinate { index });
        }

        if points.len() < config.k {
            return Err(KMeansError::InsufficientData(format!(
                "Number of points ({}) is less than k ({})",
                points.len(),
                config.k
            )));
        }

        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            labels,
            points,
            centroids: None,
            state: SessionState::Uninitialized,
            iteration: 0,
            has_converged: false,
        })
    }

    /// Create a session from an `(n_points, 2)` array of coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::InvalidDimensions`] if the array does not have
    /// exactly two columns, plus everything [`new`](Self::new) rejects.
    pub fn from_array(data: &ArrayView2<f64>, config: KMeansConfig) -> Result<Self, KMeansError> {
        if data.ncols() != 2 {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected 2 features, got {}",
                data.ncols()
            )));
        }

        let points = data
            .outer_iter()
            .map(|row| Point::new(row[0], row[1]))
            .collect();

        Self::new(points, config)
    }

    /// Run the next unit of work: initialization on the first call, one
    /// k-means iteration afterwards.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`initialize`](crate::initialize) and
    /// [`step`](crate::step). Points, centroids and state are unchanged when
    /// an error is returned.
    pub fn advance(&mut self) -> Result<StepReport, KMeansError> {
        let Some(previous) = self.centroids.as_deref() else {
            let centroids =
                initialize(&mut self.points, &self.labels, &mut self.rng, &self.config)?;
            debug!(k = self.labels.k(), "session initialized");

            self.centroids = Some(centroids);
            self.state = SessionState::Assigned;
            return Ok(StepReport {
                iteration: 0,
                converged: false,
                newly_converged: false,
                max_displacement: None,
            });
        };

        let outcome = step(previous, &mut self.points, &self.labels, &self.config)?;
        self.iteration += 1;

        let newly_converged = outcome.converged && !self.has_converged;
        if newly_converged {
            self.has_converged = true;
            info!(
                iterations = self.iteration,
                max_displacement = outcome.max_displacement,
                "all centroids converged"
            );
        }

        self.state = if outcome.converged {
            SessionState::Converged
        } else {
            SessionState::Assigned
        };
        self.centroids = Some(outcome.centroids);

        Ok(StepReport {
            iteration: self.iteration,
            converged: outcome.converged,
            newly_converged,
            max_displacement: Some(outcome.max_displacement),
        })
    }

    /// Advance until a step reports convergence or `max_steps` advances have
    /// run, counting the initialization as one.
    ///
    /// Returns the number of advances performed by this call. Stopping on the
    /// step budget is not an error; check [`state`](Self::state).
    pub fn run_until_converged(&mut self, max_steps: usize) -> Result<usize, KMeansError> {
        let mut steps = 0;
        while steps < max_steps {
            let report = self.advance()?;
            steps += 1;
            if report.converged {
                return Ok(steps);
            }
        }

        debug!(max_steps = max_steps, "step budget used up before convergence");
        Ok(steps)
    }

    /// Current state of the session.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of iterations run since initialization.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// The points and their current labels.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Current centroids, `None` before the first advance.
    pub fn centroids(&self) -> Option<&[Centroid]> {
        self.centroids.as_deref()
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }

    /// Centroids as a `(k, 2)` array, `None` before the first advance.
    pub fn centroids_array(&self) -> Option<Array2<f64>> {
        self.centroids.as_ref().map(|centroids| {
            let mut array = Array2::zeros((centroids.len(), 2));
            for (i, c) in centroids.iter().enumerate() {
                array[[i, 0]] = c.x;
                array[[i, 1]] = c.y;
            }
            array
        })
    }

    /// Index of each point's label in the label set, `-1` for unassigned points.
    pub fn labels_array(&self) -> Array1<i64> {
        self.points
            .iter()
            .map(|p| {
                p.label()
                    .and_then(|label| self.labels.index_of(label))
                    .map_or(-1, |idx| idx as i64)
            })
            .collect()
    }
}
