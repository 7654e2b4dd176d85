use unispline::spline::intervallocator::IntervalLocator;
use unispline::spline::splineerror::SplineError;

const NAME: &str = "test";

#[test]
fn brackets_interior_queries() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let locator = IntervalLocator::new();
    for (q, expected) in [(0.5, 0), (1.5, 1), (2.5, 2), (3.5, 3)] {
        let i = locator.locate(&x, q, true, NAME).unwrap();
        assert_eq!(i, expected);
        assert!(x[i] <= q && q <= x[i + 1]);
    }
}

#[test]
fn boundary_queries_resolve_to_first_and_last_interval() {
    let x = [0.0, 1.0, 2.0];
    let locator = IntervalLocator::new();
    assert_eq!(locator.locate(&x, 0.0, true, NAME).unwrap(), 0);
    assert_eq!(locator.locate(&x, 2.0, true, NAME).unwrap(), 1);
}

#[test]
fn duplicate_node_resolves_to_right_hand_interval() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    let locator = IntervalLocator::new();
    // x = 5 sits on the jump; the zero-width interval [5,5] is skipped and
    // the query lands on the interval starting at the second occurrence.
    assert_eq!(locator.locate(&x, 5.0, true, NAME).unwrap(), 6);
    assert_eq!(locator.locate(&x, 4.5, true, NAME).unwrap(), 4);
    assert_eq!(locator.locate(&x, 5.5, true, NAME).unwrap(), 6);
}

#[test]
fn cache_never_changes_results() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    let locator = IntervalLocator::new();

    // warm the cache just left of the jump, then query the jump itself
    assert_eq!(locator.locate(&x, 4.9, true, NAME).unwrap(), 4);
    assert_eq!(locator.locate(&x, 5.0, true, NAME).unwrap(), 6);

    // replay every query against a cold locator
    let queries = [0.0, 0.3, 4.9, 5.0, 5.1, 9.9, 10.0, 2.5, 2.5, 7.7];
    let warm = IntervalLocator::new();
    let results: Vec<usize> = queries
        .iter()
        .map(|&q| warm.locate(&x, q, true, NAME).unwrap())
        .collect();
    for (k, &q) in queries.iter().enumerate() {
        let cold = IntervalLocator::new();
        assert_eq!(cold.locate(&x, q, true, NAME).unwrap(), results[k]);
    }
}

#[test]
fn sequential_ascending_queries_stay_bracketed() {
    let x = [0.0, 0.5, 1.5, 3.0, 3.25, 8.0];
    let locator = IntervalLocator::new();
    let mut q = 0.0;
    while q <= 8.0 {
        let i = locator.locate(&x, q, true, NAME).unwrap();
        assert!(x[i] <= q && q <= x[i + 1], "q = {q} got interval {i}");
        q += 0.01;
    }
}

#[test]
fn out_of_domain_faults_when_range_checked() {
    let x = [0.0, 1.0, 2.0];
    let locator = IntervalLocator::new();
    let err = locator.locate(&x, -0.1, true, NAME).unwrap_err();
    assert!(matches!(err, SplineError::OutOfDomain { .. }));
    let err = locator.locate(&x, 2.1, true, NAME).unwrap_err();
    assert!(matches!(err, SplineError::OutOfDomain { .. }));
}

#[test]
fn out_of_domain_clamps_when_unchecked() {
    let x = [0.0, 1.0, 2.0];
    let locator = IntervalLocator::new();
    assert_eq!(locator.locate(&x, -5.0, false, NAME).unwrap(), 0);
    assert_eq!(locator.locate(&x, 7.0, false, NAME).unwrap(), 1);
}

#[test]
fn non_finite_queries_fault() {
    let x = [0.0, 1.0, 2.0];
    let locator = IntervalLocator::new();
    for q in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = locator.locate(&x, q, true, NAME).unwrap_err();
        assert!(matches!(err, SplineError::OutOfDomain { .. }));
        // the policy switch only governs finite out-of-range queries
        let err = locator.locate(&x, q, false, NAME).unwrap_err();
        assert!(matches!(err, SplineError::OutOfDomain { .. }));
    }
}

#[test]
fn empty_and_single_point_domains_fault() {
    let locator = IntervalLocator::new();
    let err = locator.locate(&[], 0.0, true, NAME).unwrap_err();
    assert!(matches!(err, SplineError::EmptyDomain { .. }));
    let err = locator.locate(&[1.0], 1.0, true, NAME).unwrap_err();
    assert!(matches!(err, SplineError::DegenerateDomain { .. }));
}

#[test]
fn single_interval_domain_works() {
    let x = [0.0, 1.0];
    let locator = IntervalLocator::new();
    assert_eq!(locator.locate(&x, 0.0, true, NAME).unwrap(), 0);
    assert_eq!(locator.locate(&x, 0.5, true, NAME).unwrap(), 0);
    assert_eq!(locator.locate(&x, 1.0, true, NAME).unwrap(), 0);
}

#[test]
fn leading_duplicate_skipped_at_lower_boundary() {
    let x = [5.0, 5.0, 6.0, 7.0];
    let locator = IntervalLocator::new();
    assert_eq!(locator.locate(&x, 5.0, true, NAME).unwrap(), 1);
}
