//! Approximate smallest k-enclosing rectangle heuristic.
//!
//! Decouples the two axes: the x-projection and the y-projection are sorted
//! independently, and on each axis the minimal-range window of k1 consecutive
//! values is taken, where k1 scales between k and n by a square root. The
//! product of the two intervals is returned. Fast, but the joint rectangle
//! may cover more or fewer than k points; audit with
//! [`PointSet::count_in_rect`] when the actual coverage matters.

use std::cmp::Ordering;

use log::debug;

use crate::error::EncloseResult;
use crate::geom::{Enclosure, Rect};
use crate::point_set::PointSet;

impl PointSet {
    /// Approximates the minimum-area axis-aligned rectangle covering at
    /// least `k` of the points.
    ///
    /// Each axis extent is individually a minimal-width interval covering
    /// `k1 = floor(n * sqrt(k / n))` sorted coordinate values (clamped to
    /// `1..=n`); equal-width windows resolve to the lowest start. No claim is
    /// made about how many points fall inside the joint rectangle.
    ///
    /// Runs in O(n log n) for the two sorts plus O(n) window passes.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if the set is empty or `k` is outside `1..=n`.
    ///
    /// [`InvalidArgument`]: crate::EncloseError::InvalidArgument
    pub fn enclose_approx(&self, k: usize) -> EncloseResult<Enclosure> {
        self.check_coverage_target(k)?;
        let n = self.len();

        // Per-axis sample size, truncated toward zero then clamped. The
        // clamp is the only silent adjustment the solver performs.
        #[expect(clippy::cast_possible_truncation, reason = "value is in 0..=n before the cast")]
        let k1 = ((n as f64) * (k as f64 / n as f64).sqrt()) as usize;
        let k1 = k1.clamp(1, n);
        debug!("approx solve over {n} points, k = {k}, per-axis window = {k1}");

        let mut xs: Vec<f64> = self.points().iter().map(|p| p.x).collect();
        let mut ys: Vec<f64> = self.points().iter().map(|p| p.y).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        ys.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let (min_x, max_x) = min_range_window(&xs, k1);
        let (min_y, max_y) = min_range_window(&ys, k1);

        Ok(Enclosure::from_rect(Rect::new(min_x, min_y, max_x, max_y)))
    }
}

/// Minimal-range window of `width` consecutive values in an ascending slice.
///
/// Returns the first and last value of the best window. Equal-range windows
/// resolve to the lowest start index.
fn min_range_window(sorted: &[f64], width: usize) -> (f64, f64) {
    debug_assert!(
        width >= 1 && width <= sorted.len(),
        "window width must be within 1..=len"
    );

    let mut best = (sorted[0], sorted[width - 1]);
    for start in 1..=sorted.len() - width {
        let lo = sorted[start];
        let hi = sorted[start + width - 1];
        if hi - lo < best.1 - best.0 {
            best = (lo, hi);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::min_range_window;

    #[test]
    fn test_min_range_window_finds_tightest() {
        let sorted = [0.0, 1.0, 1.5, 1.8, 5.0, 9.0];
        assert_eq!(min_range_window(&sorted, 3), (1.0, 1.8), "Window [1.0, 1.8] has the smallest spread");
    }

    #[test]
    fn test_min_range_window_full_width() {
        let sorted = [2.0, 3.0, 7.0];
        assert_eq!(min_range_window(&sorted, 3), (2.0, 7.0), "Full-width window spans the whole slice");
    }

    #[test]
    fn test_min_range_window_tie_takes_first() {
        // Both [0, 1] and [1, 2] span 1.0; the lower start must win.
        let sorted = [0.0, 1.0, 2.0];
        assert_eq!(min_range_window(&sorted, 2), (0.0, 1.0), "Equal-range windows resolve to the lowest start");
    }

    #[test]
    fn test_min_range_window_single_value() {
        let sorted = [4.0, 6.0];
        assert_eq!(min_range_window(&sorted, 1), (4.0, 4.0), "Width-1 window is a single value");
    }
}
