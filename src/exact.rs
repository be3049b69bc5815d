//! Exact smallest k-enclosing rectangle search.
//!
//! Enumerates every pair of x-sorted points as candidate left/right edges.
//! While the right edge advances through a strip, the strip's y-coordinates
//! are kept in a sorted vector, and a window of k consecutive values slides
//! over it to find the cheapest vertical extent. The optimum over all
//! axis-aligned k-covering rectangles always has edges touching input points,
//! so this candidate space is sufficient.

use std::cmp::Ordering;

use log::debug;

use crate::error::EncloseResult;
use crate::geom::{Enclosure, Rect};
use crate::point_set::PointSet;

impl PointSet {
    /// Finds the minimum-area axis-aligned rectangle covering at least `k`
    /// of the points.
    ///
    /// The returned rectangle is a global optimum: no axis-aligned rectangle
    /// containing `k` or more points of this set has a smaller area. When
    /// several rectangles share the minimal area, the first one found wins,
    /// enumerating left edges in ascending x, then right edges in ascending
    /// x, then windows bottom-up; points with equal x keep insertion order.
    /// The output is therefore deterministic for a given insertion sequence.
    ///
    /// Each of the O(n^2) strip steps costs an O(n) sorted insertion plus a
    /// window slide over the strip; memory stays O(n).
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if the set is empty or `k` is outside `1..=n`.
    ///
    /// [`InvalidArgument`]: crate::EncloseError::InvalidArgument
    pub fn enclose_exact(&self, k: usize) -> EncloseResult<Enclosure> {
        self.check_coverage_target(k)?;
        debug!("exact solve over {} points, k = {}", self.len(), k);

        // Stable sort keeps insertion order as the secondary key for equal
        // x-values, which pins down the tie-break between candidates.
        let mut pts = self.points().to_vec();
        pts.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

        let n = pts.len();
        let mut best_area = f64::INFINITY;
        let mut best_rect = Rect::default();
        let mut strip_ys: Vec<f64> = Vec::with_capacity(n);

        for i in 0..n {
            strip_ys.clear();
            for j in i..n {
                insert_sorted(&mut strip_ys, pts[j].y);
                let width = pts[j].x - pts[i].x;

                // Slide a window of k consecutive y-values up the strip.
                let mut l = 0;
                while l + k - 1 < strip_ys.len() {
                    let y_min = strip_ys[l];
                    let y_max = strip_ys[l + k - 1];
                    let area = width * (y_max - y_min);
                    // Strict comparison: the first candidate at a given area
                    // wins, all later ties lose.
                    if area < best_area {
                        best_area = area;
                        best_rect = Rect::new(pts[i].x, y_min, pts[j].x, y_max);
                    }
                    l += 1;
                }
            }
        }

        debug!("exact solve found area {best_area}");
        Ok(Enclosure { rect: best_rect, area: best_area })
    }
}

/// Inserts `value` into an ascending vector, keeping it sorted.
///
/// Binary search finds the slot; the insert itself shifts the tail. Linear
/// insertion cost is acceptable inside the quadratic sweep.
fn insert_sorted(sorted: &mut Vec<f64>, value: f64) {
    let at = sorted.partition_point(|&v| v < value);
    sorted.insert(at, value);
}
