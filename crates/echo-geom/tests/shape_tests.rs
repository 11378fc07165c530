// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use echo_geom::{
    Aabb, Capsule, Cylinder, InfiniteCylinder, Line, OrientedBox, Plane, Referential, Segment,
    Sphere,
};
use echo_math::{Degrees, Matrix4, Quaternion, Vec3};

fn v(x: f64, y: f64, z: f64) -> Vec3<f64> {
    Vec3::new([x, y, z])
}

fn approx_eq(a: f64, b: f64) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-9, "expected {b}, got {a} (diff {diff})");
}

fn approx_eq3(a: Vec3<f64>, b: [f64; 3]) {
    for (x, y) in a.iter().zip(b) {
        approx_eq(*x, y);
    }
}

#[test]
fn segment_queries_clamp_to_endpoints() {
    let seg = Segment::new(v(0.0, 0.0, 0.0), v(4.0, 0.0, 0.0));
    assert_eq!(seg.center().to_array(), [2.0, 0.0, 0.0]);
    assert_eq!(seg.length(), 4.0);
    assert_eq!(seg.squared_length(), 16.0);
    assert_eq!(seg.closest_t(&v(-3.0, 1.0, 0.0)), 0.0);
    assert_eq!(seg.closest_point(&v(1.0, 5.0, 0.0)).to_array(), [1.0, 0.0, 0.0]);
    assert_eq!(seg.distance_to_point(&v(7.0, 4.0, 0.0)), 5.0);

    let line: Line<f64> = seg.into();
    assert_eq!(line.direction().to_array(), [1.0, 0.0, 0.0]);
    assert_eq!(line.closest_t(&v(-3.0, 1.0, 0.0)), -3.0);
    assert_eq!(line.distance_to_point(&v(-3.0, 1.0, 0.0)), 1.0);
}

#[test]
fn sphere_surface_distance() {
    let s = Sphere::new(v(1.0, 0.0, 0.0), -2.0);
    assert_eq!(s.radius(), 2.0);
    assert!(s.contains(&v(3.0, 0.0, 0.0)));
    assert!(!s.contains(&v(3.5, 0.0, 0.0)));
    assert_eq!(s.distance_to_point(&v(1.0, 5.0, 0.0)), 3.0);
    assert_eq!(s.distance_to_point(&v(1.5, 0.0, 0.0)), 0.0);
}

#[test]
fn plane_normalises_and_projects() {
    let p = Plane::new(v(0.0, 2.0, 0.0), 1.0);
    assert_eq!(p.normal().to_array(), [0.0, 1.0, 0.0]);
    assert_eq!(p.distance(), 0.5);
    assert_eq!(p.signed_distance(&v(4.0, 3.0, 0.0)), 2.5);
    assert_eq!(p.project(&v(4.0, 3.0, 0.0)).to_array(), [4.0, 0.5, 0.0]);

    let q = Plane::from_point_normal(v(0.0, 0.0, 2.0), v(0.0, 0.0, -3.0));
    assert_eq!(q.distance(), -2.0);
    assert_eq!(q.signed_distance(&v(0.0, 0.0, 0.0)), 2.0);
}

#[test]
fn aabb_corners_and_containment() {
    let b = Aabb::from_min_max(v(2.0, 2.0, 2.0), v(0.0, -2.0, 0.0));
    assert_eq!(b.center().to_array(), [1.0, 0.0, 1.0]);
    assert_eq!(b.half_extents().to_array(), [1.0, 2.0, 1.0]);
    assert_eq!(b.min().to_array(), [0.0, -2.0, 0.0]);
    assert_eq!(b.max().to_array(), [2.0, 2.0, 2.0]);
    assert!(b.contains(&v(2.0, -2.0, 0.0)));
    assert!(!b.contains(&v(2.1, 0.0, 0.0)));
    assert_eq!(b.closest_point(&v(5.0, 0.5, -4.0)).to_array(), [2.0, 0.5, 0.0]);
    assert_eq!(b.distance_to_point(&v(5.0, 0.0, 1.0)), 3.0);
    assert_eq!(b.distance_to_point(&v(1.0, 1.0, 1.0)), 0.0);
}

#[test]
fn aabb_overlap_union_and_transform() {
    let a = Aabb::from_min_max(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0));
    let touching = Aabb::from_min_max(v(1.0, 0.0, 0.0), v(2.0, 1.0, 1.0));
    let apart = Aabb::from_min_max(v(3.0, 0.0, 0.0), v(4.0, 1.0, 1.0));
    assert!(a.overlaps(&touching));
    assert!(!a.overlaps(&apart));

    let u = a.union(&apart);
    assert_eq!(u.min().to_array(), [0.0, 0.0, 0.0]);
    assert_eq!(u.max().to_array(), [4.0, 1.0, 1.0]);
    assert_eq!(a.inflate(0.5).max().to_array(), [1.5, 1.5, 1.5]);

    let moved = a.transformed(&Matrix4::<f64>::translation(v(10.0, 0.0, -1.0)));
    assert_eq!(moved.min().to_array(), [10.0, 0.0, -1.0]);
    assert_eq!(moved.max().to_array(), [11.0, 1.0, 0.0]);

    let spun = a.transformed(&Matrix4::<f64>::rotation_z(Degrees::<f64>::new(90.0)));
    approx_eq3(spun.min(), [-1.0, 0.0, 0.0]);
    approx_eq3(spun.max(), [0.0, 1.0, 1.0]);

    assert!(Aabb::<f64>::from_points(&[]).is_none());
    let pts = Aabb::from_points(&[v(1.0, -1.0, 0.0), v(-2.0, 3.0, 0.5)]);
    assert_eq!(pts.map(|b| b.max().to_array()), Some([1.0, 3.0, 0.5]));
}

#[test]
fn referential_roundtrips_positions_and_directions() {
    let q = Quaternion::from_axis_angle(v(0.0, 1.0, 0.0), Degrees::<f64>::new(30.0));
    let frame = Referential::from_rotation(v(1.0, 2.0, 3.0), &q);
    let p = v(-4.0, 0.5, 2.0);
    let local = frame.global_to_local_position(&p);
    approx_eq3(frame.local_to_global_position(&local), p.to_array());

    let d = v(0.0, 0.0, 1.0);
    let back = frame.local_to_global_direction(&frame.global_to_local_direction(&d));
    approx_eq3(back, [0.0, 0.0, 1.0]);

    let origin_local = frame.global_to_local_position(&frame.origin());
    approx_eq3(origin_local, [0.0, 0.0, 0.0]);
    assert_eq!(Referential::<f64>::default().k().to_array(), [0.0, 0.0, 1.0]);
}

#[test]
fn oriented_box_queries_in_world_space() {
    let q = Quaternion::from_axis_angle(v(0.0, 0.0, 1.0), Degrees::<f64>::new(90.0));
    let obb = OrientedBox::new(Referential::from_rotation(v(0.0, 0.0, 0.0), &q), 2.0, 1.0, 1.0);
    // i now points along +y, so the long side is vertical
    assert!(obb.contains(&v(0.0, 1.9, 0.0)));
    assert!(!obb.contains(&v(1.9, 0.0, 0.0)));
    approx_eq3(obb.closest_point(&v(5.0, 0.0, 0.0)), [1.0, 0.0, 0.0]);
    approx_eq(obb.distance_to_point(&v(0.0, 5.0, 0.0)), 3.0);
    assert_eq!(obb.extents().to_array(), [2.0, 1.0, 1.0]);

    let from_aabb = OrientedBox::from(Aabb::new(v(1.0, 1.0, 1.0), v(0.5, 0.5, 0.5)));
    assert_eq!(from_aabb.center().to_array(), [1.0, 1.0, 1.0]);
    assert!(from_aabb.contains(&v(1.5, 0.5, 1.0)));
}

#[test]
fn cylinder_caps_face_outward() {
    let c = Cylinder::new(v(0.0, 0.0, 1.0), v(0.0, 0.0, 4.0), 0.5);
    assert_eq!(c.height(), 3.0);
    assert_eq!(c.left_plane().normal().to_array(), [0.0, 0.0, -1.0]);
    assert_eq!(c.right_plane().normal().to_array(), [0.0, 0.0, 1.0]);
    assert_eq!(c.left_plane().signed_distance(&v(0.0, 0.0, 0.0)), 1.0);
    assert!(c.contains(&v(0.4, 0.0, 2.0)));
    assert!(!c.contains(&v(0.0, 0.0, 4.5)));
    assert!(c.infinite_cylinder().contains(&v(0.0, 0.4, 40.0)));

    let inf = InfiniteCylinder::new(Line::new(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0)), 2.0);
    assert_eq!(inf.distance_to_axis(&v(-9.0, 0.0, 3.0)), 3.0);
    assert!(!inf.contains(&v(-9.0, 0.0, 3.0)));
}

#[test]
fn capsule_decomposes_into_body_and_caps() {
    let cap = Capsule::from_center(v(0.0, 0.0, 0.0), v(0.0, 1.0, 0.0), 4.0, 1.0);
    assert_eq!(cap.segment().pt1().to_array(), [0.0, -2.0, 0.0]);
    assert_eq!(cap.segment().pt2().to_array(), [0.0, 2.0, 0.0]);
    assert_eq!(cap.center().to_array(), [0.0, 0.0, 0.0]);
    assert_eq!(cap.left_sphere().center().to_array(), [0.0, -2.0, 0.0]);
    assert_eq!(cap.right_sphere().radius(), 1.0);
    assert_eq!(cap.body_cylinder().height(), 4.0);
    assert!(cap.infinite_cylinder().contains(&v(0.5, 100.0, 0.0)));

    assert!(cap.is_inside(&v(0.0, 2.9, 0.0)));
    assert!(!cap.is_inside(&v(0.0, 3.1, 0.0)));
    assert_eq!(cap.distance_to_point(&v(3.0, 0.0, 0.0)), 2.0);
    assert_eq!(cap.distance_to_point(&v(0.0, 0.0, 0.5)), 0.0);
}
