//! End-to-end checks of the public call surface on small, hand-checked inputs.

use planar::prelude::*;
use proptest::prelude::*;

const UNIT: [[f64; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

#[test]
fn separation_example() {
    let sep = separate_points_by_polygon(
        &[[0.5, 0.5], [1.0, -0.5], [0.3, 0.2]],
        &UNIT,
        SeparateOpts::default(),
    )
    .unwrap();
    assert_eq!(sep.indices, vec![0, 2, 1]);
    assert_eq!(sep.inside_count, 2);
}

#[test]
fn square_area_both_windings() {
    let sq = [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]];
    let mut rev = sq;
    rev.reverse();
    assert_eq!(polygon_area(&sq).unwrap(), 16.0);
    assert_eq!(polygon_area(&rev).unwrap(), 16.0);
}

#[test]
fn intersection_statuses() {
    let tol = Tolerance::default();
    let x = intersection(&[[0.0, 0.0], [1.0, 1.0]], &[[0.0, 1.0], [1.0, 0.0]], tol).unwrap();
    assert_eq!(x, Intersection::Point(Vec2::new(0.5, 0.5)));

    let overlap = intersection(&[[0.0, 0.0], [2.0, 2.0]], &[[1.0, 1.0], [3.0, 3.0]], tol).unwrap();
    assert_eq!(
        overlap,
        Intersection::CollinearOverlap(Segment::from([[1.0, 1.0], [2.0, 2.0]]))
    );

    let par = intersection(&[[0.0, 0.0], [1.0, 0.0]], &[[0.0, 1.0], [1.0, 1.0]], tol).unwrap();
    assert_eq!(par.status(), Status::Parallel);
}

#[test]
fn holed_polygon_via_exclude() {
    let outer = Polygon::from_xy(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]).unwrap();
    let hole = Polygon::from_xy(&[[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0]]).unwrap();
    let pts = populate_polygon(&outer, 300, Some(99), &[hole.clone()], PopulateCfg::default())
        .unwrap();
    assert_eq!(pts.len(), 300);
    let (inside_hole, _) = in_and_outside_polygon(&pts, &hole, true).unwrap();
    assert!(inside_hole.is_empty());
    assert_eq!(inside_polygon(&pts, &outer, true).unwrap().len(), 300);
}

#[test]
fn polygon_file_round_trip_feeds_classifier() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.csv");
    std::fs::write(&path, "0,0\n1,0\n1,1\n0,1\n").unwrap();
    let verts = read_polygon(&path, ',').unwrap();
    let poly = Polygon::new(verts).unwrap();
    assert!(is_inside_polygon(&[0.25, 0.75], &poly, true).unwrap());
}

proptest! {
    #[test]
    fn classification_is_idempotent_and_exhaustive(
        pts in proptest::collection::vec((-0.5f64..1.5, -0.5f64..1.5), 0..100),
        closed in any::<bool>(),
    ) {
        let pts: Vec<[f64; 2]> = pts.into_iter().map(|(x, y)| [x, y]).collect();
        let opts = SeparateOpts { closed, check_input: true };
        let a = separate_points_by_polygon(&pts, &UNIT, opts).unwrap();
        let b = separate_points_by_polygon(&pts, &UNIT, opts).unwrap();
        prop_assert_eq!(&a, &b);
        let (inside, outside) = in_and_outside_polygon(&pts, &UNIT, closed).unwrap();
        prop_assert_eq!(inside.len() + outside.len(), pts.len());
        for &i in &inside {
            prop_assert!(is_inside_polygon(&pts[i], &UNIT, closed).unwrap());
        }
        for &i in &outside {
            prop_assert!(is_outside_polygon(&pts[i], &UNIT, closed).unwrap());
        }
    }
}
