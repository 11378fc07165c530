// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Geometry primitives and intersection tests for Echo.

This crate provides:
- Value-type 3D primitives built on `echo_math::Vec3`: `Line`, `Segment`,
  `Sphere`, `Plane`, `Aabb`, `Referential`, `OrientedBox`,
  `InfiniteCylinder`, `Cylinder`, `Capsule`.
- Pairwise intersection routines filling an `Intersection` with zero, one
  or two `Contact`s: segment against AABB, capsule, cylinder and segment;
  sphere against oriented box; sphere against plane half-space.

Design notes:
- Routines are free functions over concrete shapes; nothing is boxed or
  dynamically dispatched.
- Generic over `T: Real` (default `f32`); geometric slack uses
  `Real::TOLERANCE`.
- Each routine emits a `tracing` trace event naming itself, its pruning
  decision and the number of contacts. No subscriber is installed here.

```
use echo_geom::{segment_aabb, Aabb, Intersection, Segment};
use echo_math::Vec3;

let seg = Segment::new(Vec3::new([0.0, 0.0, 0.0]), Vec3::new([10.0, 0.0, 0.0]));
let aabb = Aabb::new(Vec3::new([5.0, 0.0, 0.0]), Vec3::new([1.0, 1.0, 1.0]));
let mut hit = Intersection::new();
assert!(segment_aabb(&seg, &aabb, &mut hit));
assert_eq!(hit.contacts()[0].point.to_array(), [4.0, 0.0, 0.0]);
```
"]

/// Pairwise intersection routines and their result types.
pub mod intersection;
/// Foundational geometric types.
pub mod shapes;

pub use intersection::{
    capsule_outcode, closest_points_segment_segment, segment_aabb, segment_capsule,
    segment_cylinder, segment_infinite_cylinder, segment_plane, segment_segment, segment_sphere,
    sphere_on_or_forward_plane, sphere_oriented_box, ClosestPoints, Contact, Intersection,
    Outcode,
};
pub use shapes::{
    Aabb, Capsule, Cylinder, InfiniteCylinder, Line, OrientedBox, Plane, Referential, Segment,
    Sphere,
};
