//! Post-hoc coverage audit for solver results.

use crate::geom::Rect;
use crate::point_set::PointSet;

impl PointSet {
    /// Counts the points lying inside `rect`, borders included.
    ///
    /// A malformed rectangle (min above max on an axis) describes an empty
    /// region and counts 0; it is not an error. This is the audit to run on
    /// [`enclose_approx`] results, whose joint coverage is not guaranteed to
    /// reach the requested target.
    ///
    /// [`enclose_approx`]: PointSet::enclose_approx
    pub fn count_in_rect(&self, rect: &Rect) -> usize {
        self.points().iter().filter(|p| rect.contains(p)).count()
    }
}
