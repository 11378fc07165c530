// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use echo_geom::{
    segment_aabb, segment_capsule, segment_cylinder, segment_segment,
    sphere_on_or_forward_plane, sphere_oriented_box, Aabb, Capsule, Contact, Cylinder,
    Intersection, OrientedBox, Plane, Referential, Segment, Sphere,
};
use echo_math::{Degrees, Quaternion, Vec3};

fn v(x: f64, y: f64, z: f64) -> Vec3<f64> {
    Vec3::new([x, y, z])
}

fn approx_eq3(a: Vec3<f64>, b: [f64; 3]) {
    for (x, y) in a.iter().zip(b) {
        let diff = (x - y).abs();
        assert!(diff <= 1e-9, "expected {b:?}, got {a:?}");
    }
}

fn assert_contact(contact: &Contact<f64>, point: [f64; 3], normal: Option<[f64; 3]>) {
    approx_eq3(contact.point, point);
    assert_eq!(contact.normal.is_some(), normal.is_some(), "normal presence: {contact:?}");
    if let (Some(got), Some(want)) = (contact.normal, normal) {
        approx_eq3(got, want);
    }
}

fn unit_box_at_five() -> Aabb<f64> {
    Aabb::new(v(5.0, 0.0, 0.0), v(1.0, 1.0, 1.0))
}

#[test]
fn segment_aabb_reports_nearest_entry_face() {
    let seg = Segment::new(v(0.0, 0.0, 0.0), v(10.0, 0.0, 0.0));
    let mut hit = Intersection::new();
    assert!(segment_aabb(&seg, &unit_box_at_five(), &mut hit));
    assert_eq!(hit.len(), 1);
    assert_contact(&hit.contacts()[0], [4.0, 0.0, 0.0], Some([-1.0, 0.0, 0.0]));
}

#[test]
fn segment_aabb_from_inside_reports_exit_face() {
    let seg = Segment::new(v(5.0, 0.0, 0.0), v(10.0, 0.0, 0.0));
    let mut hit = Intersection::new();
    assert!(segment_aabb(&seg, &unit_box_at_five(), &mut hit));
    assert_contact(&hit.contacts()[0], [6.0, 0.0, 0.0], Some([1.0, 0.0, 0.0]));
}

#[test]
fn segment_aabb_inside_or_beside_misses() {
    let mut hit = Intersection::new();
    hit.set_one_intersection(Contact::new(v(9.0, 9.0, 9.0)));
    let inside = Segment::new(v(4.5, 0.0, 0.0), v(5.5, 0.5, 0.0));
    assert!(!segment_aabb(&inside, &unit_box_at_five(), &mut hit));
    assert!(hit.is_empty());

    let beside = Segment::new(v(0.0, 3.0, 0.0), v(10.0, 3.0, 0.0));
    assert!(!segment_aabb(&beside, &unit_box_at_five(), &mut hit));
}

#[test]
fn segment_aabb_diagonal_entry_through_top_face() {
    let seg = Segment::new(v(5.0, 3.0, 0.0), v(5.0, -3.0, 0.0));
    let mut hit = Intersection::new();
    assert!(segment_aabb(&seg, &unit_box_at_five(), &mut hit));
    assert_contact(&hit.contacts()[0], [5.0, 1.0, 0.0], Some([0.0, 1.0, 0.0]));
}

#[test]
fn sphere_plane_half_space() {
    let plane = Plane::new(v(0.0, 1.0, 0.0), 0.5);
    assert!(sphere_on_or_forward_plane(&Sphere::new(v(0.0, 0.0, 0.0), 1.0), &plane));
    assert!(sphere_on_or_forward_plane(&Sphere::new(v(0.0, -0.5, 0.0), 1.0), &plane));
    assert!(sphere_on_or_forward_plane(&Sphere::new(v(0.0, 9.0, 0.0), 0.1), &plane));
    assert!(!sphere_on_or_forward_plane(&Sphere::new(v(0.0, -2.0, 0.0), 1.0), &plane));
}

#[test]
fn skew_segments_do_not_touch() {
    let a = Segment::new(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0));
    let b = Segment::new(v(0.0, 1.0, 1.0), v(1.0, 1.0, 2.0));
    let mut hit = Intersection::new();
    hit.set_one_intersection(Contact::new(v(1.0, 1.0, 1.0)));
    assert!(!segment_segment(&a, &b, &mut hit));
    assert!(hit.is_empty());
    assert!(hit.first().is_none());
}

#[test]
fn crossing_and_overlapping_segments_touch() {
    let a = Segment::new(v(-1.0, 0.0, 0.0), v(1.0, 0.0, 0.0));
    let b = Segment::new(v(0.0, -1.0, 0.0), v(0.0, 1.0, 0.0));
    let mut hit = Intersection::new();
    assert!(segment_segment(&a, &b, &mut hit));
    assert_contact(&hit.contacts()[0], [0.0, 0.0, 0.0], None);

    let c = Segment::new(v(0.0, 0.0, 0.0), v(2.0, 0.0, 0.0));
    let d = Segment::new(v(1.0, 0.0, 0.0), v(3.0, 0.0, 0.0));
    assert!(segment_segment(&c, &d, &mut hit));
    assert_contact(&hit.contacts()[0], [1.0, 0.0, 0.0], None);
}

#[test]
fn long_segments_that_nearly_touch_stay_apart() {
    let a = Segment::new(Vec3::<f32>::new([0.0, 0.0, 0.0]), Vec3::new([10_000.0, 0.0, 0.0]));
    let b = Segment::new(Vec3::<f32>::new([5_000.0, 0.05, -1.0]), Vec3::new([5_000.0, 0.05, 1.0]));
    let mut hit = Intersection::new();
    assert!(!segment_segment(&a, &b, &mut hit));
    assert!(hit.is_empty());

    let c = Segment::new(v(0.0, 0.0, 0.0), v(1.0e6, 0.0, 0.0));
    let d = Segment::new(v(5.0e5, 1.0e-4, -1.0e6), v(5.0e5, 1.0e-4, 1.0e6));
    let mut hit = Intersection::new();
    assert!(!segment_segment(&c, &d, &mut hit));
    assert!(hit.is_empty());
}

#[test]
fn long_crossing_segments_still_touch() {
    let a = Segment::new(v(0.0, 0.0, 0.0), v(1.0e6, 0.0, 0.0));
    let b = Segment::new(v(5.0e5, -1.0, 0.0), v(5.0e5, 1.0, 0.0));
    let mut hit = Intersection::new();
    assert!(segment_segment(&a, &b, &mut hit));
    assert_contact(&hit.contacts()[0], [5.0e5, 0.0, 0.0], None);
}

#[test]
fn sphere_touching_rotated_box_corner_region() {
    let q = Quaternion::from_axis_angle(v(0.0, 0.0, 1.0), Degrees::<f64>::new(45.0));
    let frame = Referential::from_rotation(v(10.0, 0.0, 0.0), &q);
    let obb = OrientedBox::new(frame, 1.0, 1.0, 1.0);
    let mut hit = Intersection::new();

    assert!(sphere_oriented_box(&Sphere::new(v(12.0, 0.0, 0.0), 1.0), &obb, &mut hit));
    let sqrt2 = 2.0_f64.sqrt();
    assert_contact(&hit.contacts()[0], [10.0 + sqrt2, 0.0, 0.0], Some([1.0, 0.0, 0.0]));

    assert!(!sphere_oriented_box(&Sphere::new(v(12.5, 0.0, 0.0), 1.0), &obb, &mut hit));
    assert!(hit.is_empty());
}

#[test]
fn sphere_near_box_edge_uses_true_distance() {
    let obb = OrientedBox::new(Referential::axis_aligned(v(0.0, 0.0, 0.0)), 3.0, 0.5, 0.5);
    let mut hit = Intersection::new();
    // within extent + radius on every axis, but 1.34 from the nearest edge
    let sphere = Sphere::new(v(2.5, 1.45, 1.45), 1.0);
    assert!(!sphere_oriented_box(&sphere, &obb, &mut hit));

    let closer = Sphere::new(v(2.5, 1.2, 1.2), 1.0);
    assert!(sphere_oriented_box(&closer, &obb, &mut hit));
    let diag = 0.5_f64.sqrt();
    assert_contact(&hit.contacts()[0], [2.5, 0.5, 0.5], Some([0.0, diag, diag]));
}

#[test]
fn sphere_centre_inside_box_has_no_normal() {
    let obb = OrientedBox::new(Referential::axis_aligned(v(1.0, 1.0, 1.0)), 1.0, 2.0, 3.0);
    let mut hit = Intersection::new();
    assert!(sphere_oriented_box(&Sphere::new(v(1.5, 1.0, 0.0), 0.25), &obb, &mut hit));
    assert_contact(&hit.contacts()[0], [1.5, 1.0, 0.0], None);

    assert!(!sphere_oriented_box(&Sphere::new(v(5.0, 1.0, 1.0), 1.0), &obb, &mut hit));
}

fn capsule() -> Capsule<f64> {
    Capsule::new(Segment::new(v(0.0, 0.0, 0.0), v(4.0, 0.0, 0.0)), 1.0)
}

#[test]
fn segment_across_capsule_body_enters_and_exits() {
    let seg = Segment::new(v(2.0, -3.0, 0.0), v(2.0, 3.0, 0.0));
    let mut hit = Intersection::new();
    assert!(segment_capsule(&seg, &capsule(), &mut hit));
    assert_eq!(hit.len(), 2);
    assert_contact(&hit.contacts()[0], [2.0, -1.0, 0.0], Some([0.0, -1.0, 0.0]));
    assert_contact(&hit.contacts()[1], [2.0, 1.0, 0.0], Some([0.0, 1.0, 0.0]));
}

#[test]
fn segment_along_capsule_axis_hits_both_caps() {
    let seg = Segment::new(v(-3.0, 0.0, 0.0), v(7.0, 0.0, 0.0));
    let mut hit = Intersection::new();
    assert!(segment_capsule(&seg, &capsule(), &mut hit));
    assert_eq!(hit.len(), 2);
    assert_contact(&hit.contacts()[0], [-1.0, 0.0, 0.0], Some([-1.0, 0.0, 0.0]));
    assert_contact(&hit.contacts()[1], [5.0, 0.0, 0.0], Some([1.0, 0.0, 0.0]));
}

#[test]
fn segment_beyond_left_end_only_tests_left_cap() {
    let mut hit = Intersection::new();
    let far = Segment::new(v(-3.0, -3.0, 0.0), v(-3.0, 3.0, 0.0));
    assert!(!segment_capsule(&far, &capsule(), &mut hit));

    let grazing = Segment::new(v(-0.5, -3.0, 0.0), v(-0.5, 3.0, 0.0));
    assert!(segment_capsule(&grazing, &capsule(), &mut hit));
    let h = 0.75_f64.sqrt();
    assert_contact(&hit.contacts()[0], [-0.5, -h, 0.0], Some([-0.5, -h, 0.0]));
    assert_contact(&hit.contacts()[1], [-0.5, h, 0.0], Some([-0.5, h, 0.0]));
}

#[test]
fn segment_partly_inside_capsule_crosses_once() {
    let mut hit = Intersection::new();
    let inside = Segment::new(v(1.0, 0.0, 0.0), v(3.0, 0.5, 0.0));
    assert!(!segment_capsule(&inside, &capsule(), &mut hit));

    let out_right = Segment::new(v(3.0, 0.0, 0.0), v(6.0, 0.0, 0.0));
    assert!(segment_capsule(&out_right, &capsule(), &mut hit));
    assert_eq!(hit.len(), 1);
    assert_contact(&hit.contacts()[0], [5.0, 0.0, 0.0], Some([1.0, 0.0, 0.0]));

    let from_side = Segment::new(v(2.0, 5.0, 0.0), v(2.0, 0.0, 0.0));
    assert!(segment_capsule(&from_side, &capsule(), &mut hit));
    assert_eq!(hit.len(), 1);
    assert_contact(&hit.contacts()[0], [2.0, 1.0, 0.0], Some([0.0, 1.0, 0.0]));
}

fn cylinder() -> Cylinder<f64> {
    Cylinder::new(v(0.0, 0.0, 0.0), v(0.0, 0.0, 4.0), 1.0)
}

#[test]
fn segment_along_cylinder_axis_crosses_both_caps() {
    let seg = Segment::new(v(0.0, 0.0, -1.0), v(0.0, 0.0, 5.0));
    let mut hit = Intersection::new();
    assert!(segment_cylinder(&seg, &cylinder(), &mut hit));
    assert_eq!(hit.len(), 2);
    assert_contact(&hit.contacts()[0], [0.0, 0.0, 0.0], Some([0.0, 0.0, -1.0]));
    assert_contact(&hit.contacts()[1], [0.0, 0.0, 4.0], Some([0.0, 0.0, 1.0]));
}

#[test]
fn segment_across_cylinder_crosses_lateral_surface() {
    let seg = Segment::new(v(-2.0, 0.0, 2.0), v(2.0, 0.0, 2.0));
    let mut hit = Intersection::new();
    assert!(segment_cylinder(&seg, &cylinder(), &mut hit));
    assert_contact(&hit.contacts()[0], [-1.0, 0.0, 2.0], Some([-1.0, 0.0, 0.0]));
    assert_contact(&hit.contacts()[1], [1.0, 0.0, 2.0], Some([1.0, 0.0, 0.0]));
}

#[test]
fn segment_cylinder_misses_and_inside() {
    let mut hit = Intersection::new();
    let beside = Segment::new(v(5.0, 0.0, -1.0), v(5.0, 0.0, 5.0));
    assert!(!segment_cylinder(&beside, &cylinder(), &mut hit));
    let above = Segment::new(v(-2.0, 0.0, 6.0), v(2.0, 0.0, 6.0));
    assert!(!segment_cylinder(&above, &cylinder(), &mut hit));
    let inside = Segment::new(v(0.0, 0.0, 1.0), v(0.5, 0.0, 3.0));
    assert!(!segment_cylinder(&inside, &cylinder(), &mut hit));
    assert!(hit.is_empty());
}
