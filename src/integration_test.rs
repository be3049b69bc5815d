#[cfg(test)]
mod integration_tests {
    use crate::PointSet;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_solve_and_audit_pipeline() {
        // End-to-end pass over the public API: build a random cloud, target
        // 80% coverage, run both solvers, audit both answers.
        let mut set = PointSet::with_capacity(200);
        let mut rng = StdRng::seed_from_u64(314159);
        for _ in 0..200 {
            set.add(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
        }
        let k = set.len() * 8 / 10;

        let exact = set.enclose_exact(k).unwrap();
        let bounds = set.bounds().unwrap();

        // The optimum covers its target and never exceeds the full box
        assert!(set.count_in_rect(&exact.rect) >= k, "Exact answer must cover 80% of the cloud");
        assert!(exact.area <= bounds.area(), "Exact answer cannot exceed the bounding box");
        assert!(exact.area > 0.0, "160 random points cannot fit a degenerate rectangle");

        // The heuristic is audited rather than trusted: whatever it covers,
        // a covering answer is never cheaper than the optimum
        let approx = set.enclose_approx(k).unwrap();
        let covered = set.count_in_rect(&approx.rect);
        assert!(approx.area <= bounds.area(), "Heuristic answer cannot exceed the bounding box");
        if covered >= k {
            assert!(approx.area >= exact.area, "A covering heuristic answer cannot beat the optimum");
        }

        // Determinism: a second run over the same set reproduces both answers
        assert_eq!(set.enclose_exact(k).unwrap(), exact, "Exact solve must be deterministic");
        assert_eq!(set.enclose_approx(k).unwrap(), approx, "Approx solve must be deterministic");

        println!(
            "exact area {:.6}, approx area {:.6} covering {covered}/{k}",
            exact.area, approx.area
        );
    }
}
