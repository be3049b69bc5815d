//! Point container shared by the solvers.

use crate::error::{EncloseError, EncloseResult};
use crate::geom::{Point, Rect};

/// An ordered collection of points in the plane.
///
/// The set is append-only: points are added up front, then the solve methods
/// ([`enclose_exact`], [`enclose_approx`], [`count_in_rect`]) operate on
/// sorted copies without ever mutating the stored sequence. All solve methods
/// take `&self`, so a built set can be queried from concurrent callers.
///
/// A bounding box over everything added so far is maintained incrementally.
///
/// [`enclose_exact`]: PointSet::enclose_exact
/// [`enclose_approx`]: PointSet::enclose_approx
/// [`count_in_rect`]: PointSet::count_in_rect
#[derive(Clone, Debug)]
pub struct PointSet {
    points: Vec<Point>,
    /// Bounding box of all points
    bounds: Rect,
}

impl PointSet {
    /// Creates a new empty point set
    pub fn new() -> Self {
        PointSet::with_capacity(0)
    }

    /// Creates a new point set with preallocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        PointSet {
            points: Vec::with_capacity(capacity),
            bounds: Rect::new(f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Adds a point to the set
    ///
    /// Duplicate coordinates are kept; each occurrence counts separately
    /// toward a coverage target.
    pub fn add(&mut self, x: f64, y: f64) {
        self.bounds.min_x = self.bounds.min_x.min(x);
        self.bounds.min_y = self.bounds.min_y.min(y);
        self.bounds.max_x = self.bounds.max_x.max(x);
        self.bounds.max_y = self.bounds.max_y.max(y);

        self.points.push(Point::new(x, y));
    }

    /// Returns the number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The stored points, in insertion order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Bounding box of all points added so far, `None` for an empty set
    pub fn bounds(&self) -> Option<Rect> {
        if self.points.is_empty() {
            None
        } else {
            Some(self.bounds)
        }
    }

    /// Validates a coverage target against the current set size.
    ///
    /// Shared precondition check for both solvers: the set must be non-empty
    /// and `1 <= k <= n`.
    pub(crate) fn check_coverage_target(&self, k: usize) -> EncloseResult<()> {
        let n = self.points.len();
        if n == 0 {
            return Err(EncloseError::InvalidArgument(
                "point set is empty".to_string(),
            ));
        }
        if k < 1 || k > n {
            return Err(EncloseError::InvalidArgument(format!(
                "coverage target k = {k} must be between 1 and {n}"
            )));
        }
        Ok(())
    }
}

impl Default for PointSet {
    fn default() -> Self {
        Self::new()
    }
}
