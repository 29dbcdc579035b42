mod common;

use linkograph::catalog::{LinkCatalog, LinkId};
use linkograph::geometry::LatticeGeometry;
use rstest::rstest;

#[test]
fn test_four_moves_full_lattice() {
    let catalog = common::four_move_catalog();
    assert_eq!(
        common::ids(&catalog),
        vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
    );
    let diagonals: Vec<usize> = catalog.pairs().iter().map(|p| p.diagonal_index()).collect();
    assert_eq!(diagonals, vec![0, 1, 2, 0, 1, 0]);
    assert!(catalog.pairs().iter().all(|p| !p.selected));
}

#[rstest]
#[case(0)]
#[case(1)]
fn test_too_few_moves_is_empty(#[case] n: usize) {
    let catalog = LinkCatalog::generate(n, usize::MAX);
    assert!(catalog.is_empty());
    assert_eq!(catalog.move_count(), n);
}

#[rstest]
#[case(5, usize::MAX, 10)]
#[case(5, 1, 4)]
#[case(5, 2, 7)]
#[case(10, 0, 0)]
#[case(10, 3, 9 + 8 + 7)]
fn test_pair_counts(#[case] n: usize, #[case] d_max: usize, #[case] expected: usize) {
    assert_eq!(LinkCatalog::generate(n, d_max).len(), expected);
}

#[test]
fn test_bound_cuts_each_row_at_the_same_distance() {
    let catalog = LinkCatalog::generate(6, 2);
    assert_eq!(
        common::ids(&catalog),
        vec![(0, 1), (0, 2), (1, 2), (1, 3), (2, 3), (2, 4), (3, 4), (3, 5), (4, 5)]
    );
    assert!(!catalog.contains(LinkId::new(0, 3)));
    assert!(!catalog.contains(LinkId::new(0, 5)));
}

#[test]
fn test_default_canvas_bound() {
    // 1900px canvas, 40px padding, 30px diagonal spacing
    let geometry = LatticeGeometry::default();
    assert_eq!(geometry.max_diagonal().unwrap(), 60);

    let catalog = LinkCatalog::generate(100, geometry.max_diagonal().unwrap());
    assert!(catalog.contains(LinkId::new(0, 60)));
    assert!(!catalog.contains(LinkId::new(0, 61)));
    assert!(catalog.pairs().iter().all(|p| p.diagonal_index() < 60));
}

#[rstest]
#[case(1900.0, 40.0, 30.0, 60)]
// (1880 - 2*40) / 30 = 60 exactly: the 60th diagonal touches the margin
#[case(1880.0, 40.0, 30.0, 59)]
#[case(200.0, 40.0, 30.0, 3)]
#[case(100.0, 40.0, 30.0, 0)]
#[case(50.0, 40.0, 30.0, 0)]
#[case(1e30, 40.0, 30.0, usize::MAX)]
#[case(1900.0, 40.0, 1e-300, usize::MAX)]
fn test_canvas_derived_bound(
    #[case] height: f64,
    #[case] padding: f64,
    #[case] spacing: f64,
    #[case] expected: usize,
) {
    let geometry = LatticeGeometry {
        canvas_height: height,
        canvas_padding: padding,
        diagonal_spacing: spacing,
        max_diagonal: None,
    };
    assert_eq!(geometry.max_diagonal().unwrap(), expected);
}

#[test]
fn test_explicit_bound_wins_over_canvas() {
    let geometry = LatticeGeometry {
        max_diagonal: Some(3),
        diagonal_spacing: 0.0,
        ..Default::default()
    };
    assert_eq!(geometry.max_diagonal().unwrap(), 3);
}

#[test]
fn test_bad_spacing_is_rejected() {
    let geometry = LatticeGeometry {
        diagonal_spacing: 0.0,
        ..Default::default()
    };
    assert!(geometry.max_diagonal().is_err());
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(LinkCatalog::generate(12, 5), LinkCatalog::generate(12, 5));
}
