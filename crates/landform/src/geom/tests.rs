use super::*;
use nalgebra::{vector, Vector2};

fn square_10() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ]
}

#[test]
fn distance_is_euclidean() {
    assert!((distance(vector![0.0, 0.0], vector![3.0, 4.0]) - 5.0).abs() < 1e-12);
    assert_eq!(distance(vector![1.5, -2.0], vector![1.5, -2.0]), 0.0);
}

#[test]
fn segment_projection_clamps_to_endpoints() {
    let a = vector![0.0, 0.0];
    let b = vector![10.0, 0.0];
    // Interior projection.
    let p = nearest_point_on_segment(vector![4.0, 3.0], a, b);
    assert!((p - vector![4.0, 0.0]).norm() < 1e-12);
    // Beyond either end clamps to the endpoint.
    let before = nearest_point_on_segment(vector![-5.0, 2.0], a, b);
    assert!((before - a).norm() < 1e-12);
    let after = nearest_point_on_segment(vector![15.0, -2.0], a, b);
    assert!((after - b).norm() < 1e-12);
}

#[test]
fn zero_length_segment_returns_first_endpoint() {
    let a = vector![2.0, 3.0];
    let p = nearest_point_on_segment(vector![7.0, 7.0], a, a);
    assert!((p - a).norm() < 1e-12);
}

#[test]
fn square_containment() {
    let sq = square_10();
    assert!(point_in_polygon(vector![5.0, 5.0], &sq));
    assert!(!point_in_polygon(vector![15.0, 5.0], &sq));
    assert!(!point_in_polygon(vector![-1.0, -1.0], &sq));
}

#[test]
fn concave_containment() {
    // L-shape: the notch around (7, 7) is outside.
    let l = vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 4.0],
        vector![4.0, 4.0],
        vector![4.0, 10.0],
        vector![0.0, 10.0],
    ];
    assert!(point_in_polygon(vector![2.0, 2.0], &l));
    assert!(point_in_polygon(vector![8.0, 2.0], &l));
    assert!(point_in_polygon(vector![2.0, 8.0], &l));
    assert!(!point_in_polygon(vector![7.0, 7.0], &l));
}

#[test]
fn degenerate_polygon_contains_nothing() {
    assert!(!point_in_polygon(vector![0.0, 0.0], &[]));
    assert!(!point_in_polygon(vector![0.0, 0.0], &[vector![0.0, 0.0]]));
    assert!(!point_in_polygon(
        vector![0.5, 0.0],
        &[vector![0.0, 0.0], vector![1.0, 0.0]]
    ));
}

#[test]
fn aabb_new_normalizes_corners() {
    let b = Aabb::new(vector![5.0, -1.0], vector![-2.0, 3.0]);
    assert_eq!(b.min, vector![-2.0, -1.0]);
    assert_eq!(b.max, vector![5.0, 3.0]);
}

#[test]
fn aabb_overlap_and_touching() {
    let a = Aabb::new(vector![0.0, 0.0], vector![4.0, 4.0]);
    let b = Aabb::new(vector![2.0, 2.0], vector![6.0, 6.0]);
    let apart = Aabb::new(vector![10.0, 0.0], vector![12.0, 2.0]);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(!a.overlaps(&apart));
    // Shared edge counts as overlap (conservative).
    let touching = Aabb::new(vector![4.0, 0.0], vector![8.0, 4.0]);
    assert!(a.overlaps(&touching));
    // Shared corner too.
    let corner = Aabb::new(vector![4.0, 4.0], vector![5.0, 5.0]);
    assert!(a.overlaps(&corner));
}

#[test]
fn degenerate_aabb_is_legal() {
    let point_box = Aabb::new(vector![1.0, 1.0], vector![1.0, 1.0]);
    assert_eq!(point_box.width(), 0.0);
    assert_eq!(point_box.height(), 0.0);
    let a = Aabb::new(vector![0.0, 0.0], vector![2.0, 2.0]);
    assert!(a.overlaps(&point_box));
}

#[test]
fn aabb_expand_and_collapse() {
    let a = Aabb::new(vector![0.0, 0.0], vector![4.0, 2.0]);
    let grown = a.expand(10.0);
    assert_eq!(grown.min, vector![-10.0, -10.0]);
    assert_eq!(grown.max, vector![14.0, 12.0]);
    // Shrinking past zero extent collapses to the center point.
    let collapsed = a.expand(-3.0);
    assert_eq!(collapsed.min, collapsed.max);
    assert_eq!(collapsed.min, a.center());
}

#[test]
fn polygon_bounding_box() {
    let poly = Polygon::new(square_10());
    let bb = poly.bounding_box().unwrap();
    assert_eq!(bb.min, vector![0.0, 0.0]);
    assert_eq!(bb.max, vector![10.0, 10.0]);
    assert!(Polygon::default().bounding_box().is_none());
}
