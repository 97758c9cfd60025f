use std::fmt;

use crate::config::MAX_CLUSTERS;
use crate::error::KMeansError;

/// Identifier of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(u8);

impl Label {
    /// Create a label with the given id.
    pub fn new(id: u8) -> Self {
        Self(id)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered set of `k` distinct labels. The position of a label in the set is
/// the index of its centroid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<Label>,
}

impl LabelSet {
    /// Labels `#0..#k`.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::InvalidK`] if `k` is outside `1..=MAX_CLUSTERS`.
    pub fn new(k: usize) -> Result<Self, KMeansError> {
        check_k(k)?;
        Ok(Self {
            labels: (0..k as u8).map(Label).collect(),
        })
    }

    /// Use a caller-chosen ordered set of labels.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::InvalidK`] if the count is outside
    /// `1..=MAX_CLUSTERS` or a label appears twice.
    pub fn from_labels(labels: Vec<Label>) -> Result<Self, KMeansError> {
        check_k(labels.len())?;
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(KMeansError::InvalidK(format!(
                    "label {} appears more than once",
                    label
                )));
            }
        }
        Ok(Self { labels })
    }

    /// Number of labels.
    pub fn k(&self) -> usize {
        self.labels.len()
    }

    /// Position of `label` in the set.
    pub fn index_of(&self, label: Label) -> Option<usize> {
        self.labels.iter().position(|&l| l == label)
    }

    /// Labels in set order.
    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.labels.iter().copied()
    }

    /// Whether `label` is part of this set.
    pub fn contains(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }
}

impl std::ops::Index<usize> for LabelSet {
    type Output = Label;

    fn index(&self, index: usize) -> &Label {
        &self.labels[index]
    }
}

fn check_k(k: usize) -> Result<(), KMeansError> {
    if k == 0 || k > MAX_CLUSTERS {
        return Err(KMeansError::InvalidK(format!(
            "k must be in [1, {}], got {}",
            MAX_CLUSTERS, k
        )));
    }
    Ok(())
}

/// A 2-D data point and the cluster it is currently assigned to.
///
/// Coordinates are fixed at construction; only the label moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    label: Option<Label>,
}

impl Point {
    /// An unassigned point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Cluster this point belongs to, `None` before initialization.
    pub fn label(&self) -> Option<Label> {
        self.label
    }

    pub(crate) fn set_label(&mut self, label: Label) {
        self.label = Some(label);
    }

    /// Coordinate equality, ignoring labels.
    pub fn same_position(&self, other: &impl Position) -> bool {
        self.x == other.x() && self.y == other.y()
    }
}

/// Mean position of a cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
    pub label: Label,
}

impl Centroid {
    pub fn new(x: f64, y: f64, label: Label) -> Self {
        Self { x, y, label }
    }

    /// Centroid sitting exactly on `point`.
    pub fn at(point: &Point, label: Label) -> Self {
        Self::new(point.x, point.y, label)
    }
}

/// Anything with 2-D coordinates.
pub trait Position {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Position for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Position for Centroid {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}
