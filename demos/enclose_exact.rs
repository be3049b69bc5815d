//! Find the smallest rectangle covering at least k points, exactly.
//!
//! This example demonstrates `enclose_exact`, which sweeps every pair of
//! x-sorted points as candidate left/right edges and returns the true
//! minimum-area axis-aligned rectangle. The answer is deterministic: ties
//! resolve to the first candidate found in enumeration order.

use krect::prelude::*;

fn main() {
    let mut set = PointSet::with_capacity(5);

    // Four corners of the unit square plus one far outlier
    set.add(0.0, 0.0); // Point 0
    set.add(1.0, 0.0); // Point 1
    set.add(0.0, 1.0); // Point 2
    set.add(1.0, 1.0); // Point 3
    set.add(5.0, 5.0); // Point 4: costs a 25x larger box if included

    println!("=== Exact K-Enclosing Rectangle Example ===\n");

    // Query 1: cover 4 of the 5 points
    println!("Query 1: Smallest rectangle covering 4 of 5 points:");
    let found = set.enclose_exact(4).expect("4 is a valid target for 5 points");
    println!("  Result: {:?}, area {}", found.rect, found.area);
    println!("  Expected: the unit square, area 1");
    assert_eq!(found.rect, Rect::new(0.0, 0.0, 1.0, 1.0), "Expected the unit square");
    assert_eq!(found.area, 1.0, "Expected area 1");
    println!("  ✓ Correct!\n");

    // Query 2: cover every point
    println!("Query 2: Smallest rectangle covering all 5 points:");
    let full = set.enclose_exact(5).expect("5 is a valid target for 5 points");
    println!("  Result: {:?}, area {}", full.rect, full.area);
    println!("  Expected: the bounding box of the whole set, area 25");
    assert_eq!(Some(full.rect), set.bounds(), "k = n must return the bounding box");
    assert_eq!(full.area, 25.0, "Expected area 25");
    println!("  ✓ Correct!\n");

    // Query 3: cover a single point
    println!("Query 3: Smallest rectangle covering 1 point:");
    let single = set.enclose_exact(1).expect("1 is a valid target for 5 points");
    println!("  Result: {:?}, area {}", single.rect, single.area);
    println!("  Expected: a degenerate rectangle on the leftmost point");
    assert_eq!(single.area, 0.0, "A single point costs nothing to cover");
    println!("  ✓ Correct!\n");

    // Query 4: invalid coverage targets are rejected up front
    println!("Query 4: Invalid targets:");
    assert!(set.enclose_exact(0).is_err(), "k = 0 must be rejected");
    assert!(set.enclose_exact(6).is_err(), "k > n must be rejected");
    if let Err(err) = set.enclose_exact(6) {
        println!("  k = 6 rejected: {err}");
    }
    println!("  ✓ Correct!\n");

    // The audit confirms what the answer actually covers
    let covered = set.count_in_rect(&found.rect);
    println!("Audit: the Query 1 rectangle covers {covered} points (requested 4)");
    assert_eq!(covered, 4, "Unit square covers exactly the four corners");
}
