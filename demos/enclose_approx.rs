//! Approximate the smallest k-enclosing rectangle, then audit it.
//!
//! This example demonstrates `enclose_approx`, which picks the tightest
//! window of k1 = floor(n * sqrt(k / n)) values independently on the sorted
//! x and y projections. The product rectangle is cheap to compute but its
//! joint coverage is not guaranteed, so the answer is always audited with
//! `count_in_rect`.

use krect::prelude::*;

fn main() {
    println!("=== Approximate K-Enclosing Rectangle Example ===\n");

    // Query 1: a friendly layout, where the heuristic matches the optimum
    let mut set = PointSet::with_capacity(5);
    set.add(0.0, 0.0);
    set.add(1.0, 0.0);
    set.add(0.0, 1.0);
    set.add(1.0, 1.0);
    set.add(5.0, 5.0);

    println!("Query 1: 4 of 5 points, unit-square layout:");
    let found = set.enclose_approx(4).expect("4 is a valid target for 5 points");
    let covered = set.count_in_rect(&found.rect);
    println!("  Result: {:?}, area {}", found.rect, found.area);
    println!("  Audit:  covers {covered} points (requested 4)");
    assert_eq!(found.rect, Rect::new(0.0, 0.0, 1.0, 1.0), "Here the heuristic finds the optimum");
    assert_eq!(covered, 4, "Expected full coverage on this layout");
    println!("  ✓ Correct!\n");

    // Query 2: an adversarial layout, where the axes disagree about which
    // points are cheap and the joint coverage falls short
    let mut skewed = PointSet::with_capacity(6);
    skewed.add(0.0, 100.0);
    skewed.add(0.1, 200.0);
    skewed.add(0.2, 300.0);
    skewed.add(100.0, 0.0);
    skewed.add(200.0, 0.1);
    skewed.add(300.0, 0.2);

    println!("Query 2: 4 of 6 points, axis-skewed layout:");
    let guess = skewed.enclose_approx(4).expect("4 is a valid target for 6 points");
    let audited = skewed.count_in_rect(&guess.rect);
    println!("  Result: {:?}, area {}", guess.rect, guess.area);
    println!("  Audit:  covers {audited} points (requested 4) - undercoverage is the trade-off");
    assert!(audited < 4, "This layout must undercover");

    // The exact solver still delivers on the same input, at quadratic cost
    let exact = skewed.enclose_exact(4).expect("4 is a valid target for 6 points");
    println!("  Exact:  {:?}, area {}, covers {}", exact.rect, exact.area, skewed.count_in_rect(&exact.rect));
    assert!(skewed.count_in_rect(&exact.rect) >= 4, "The exact answer always covers its target");
    println!("  ✓ Correct!\n");

    println!("The heuristic trades the coverage guarantee for O(n log n) runtime;");
    println!("audit its output with count_in_rect before relying on it.");
}
