// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Building blocks shared by the composite routines.

use echo_math::{Real, Vec3};
use tracing::trace;

use super::{Contact, Intersection};
use crate::shapes::{InfiniteCylinder, Plane, Segment, Sphere};

/// Room for every candidate a composite routine can produce (two per
/// sub-shape, at most three sub-shapes).
const MAX_HITS: usize = 8;

/// Candidate contacts keyed by their parameter along the tested segment.
pub(crate) struct HitList<T: Real> {
    hits: [(T, Contact<T>); MAX_HITS],
    len: usize,
}

impl<T: Real> HitList<T> {
    pub(crate) fn new() -> Self {
        Self {
            hits: [(T::zero(), Contact::default()); MAX_HITS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, t: T, contact: Contact<T>) {
        if let Some(slot) = self.hits.get_mut(self.len) {
            *slot = (t, contact);
            self.len += 1;
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Sorts by `t`, merges hits closer than `Real::TOLERANCE` and writes
    /// the first two into `out`.
    pub(crate) fn flush_into(mut self, out: &mut Intersection<T>) -> bool {
        let hits = &mut self.hits[..self.len];
        hits.sort_unstable_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(core::cmp::Ordering::Equal));
        out.set_not_intersection();
        let mut last: Option<T> = None;
        for (t, contact) in hits.iter() {
            if last.is_some_and(|prev| (*t - prev).abs() <= T::TOLERANCE) {
                continue;
            }
            if !out.push(*contact) {
                break;
            }
            last = Some(*t);
        }
        out.is_intersecting()
    }
}

/// Unclamped parameter of the projection of `point` on the axis of `segment`.
pub(crate) fn axis_parameter<T: Real>(segment: &Segment<T>, point: &Vec3<T>) -> T {
    let len_sq = segment.squared_length();
    if len_sq <= T::EPSILON {
        return T::zero();
    }
    (*point - segment.pt1()).dot(&segment.direction()) / len_sq
}

fn in_unit_range<T: Real>(t: T) -> bool {
    t >= T::zero() && t <= T::one()
}

/// Roots of `a t^2 + b t + c` in ascending order; `None` without real roots.
fn solve_quadratic<T: Real>(a: T, b: T, c: T) -> Option<(T, T)> {
    let two = T::one() + T::one();
    let disc = b * b - two * two * a * c;
    if disc < T::zero() {
        return None;
    }
    let root = disc.sqrt();
    Some(((-b - root) / (two * a), (-b + root) / (two * a)))
}

pub(crate) fn collect_segment_sphere<T: Real>(
    segment: &Segment<T>,
    sphere: &Sphere<T>,
    hits: &mut HitList<T>,
    keep: impl Fn(&Vec3<T>) -> bool,
) {
    let d = segment.direction();
    let m = segment.pt1() - sphere.center();
    let a = d.dot(&d);
    if a <= T::EPSILON {
        return;
    }
    let two = T::one() + T::one();
    let r = sphere.radius();
    let Some((t0, t1)) = solve_quadratic(a, two * d.dot(&m), m.dot(&m) - r * r) else {
        return;
    };
    for t in [t0, t1] {
        if !in_unit_range(t) {
            continue;
        }
        let point = segment.point_at(t);
        if keep(&point) {
            let normal = (point - sphere.center()).normalize();
            hits.push(t, Contact::with_normal(point, normal));
        }
    }
}

/// With `face_start` the recorded normal faces the segment start, otherwise
/// it is the plane normal as given.
pub(crate) fn collect_segment_plane<T: Real>(
    segment: &Segment<T>,
    plane: &Plane<T>,
    face_start: bool,
    hits: &mut HitList<T>,
    keep: impl Fn(&Vec3<T>) -> bool,
) {
    let d = segment.direction();
    let n = plane.normal();
    let denom = d.dot(&n);
    if denom.abs() <= T::EPSILON {
        return;
    }
    let t = -plane.signed_distance(&segment.pt1()) / denom;
    if !in_unit_range(t) {
        return;
    }
    let point = segment.point_at(t);
    if keep(&point) {
        let normal = if face_start && denom > T::zero() { -n } else { n };
        hits.push(t, Contact::with_normal(point, normal));
    }
}

pub(crate) fn collect_segment_infinite_cylinder<T: Real>(
    segment: &Segment<T>,
    cylinder: &InfiniteCylinder<T>,
    hits: &mut HitList<T>,
    keep: impl Fn(&Vec3<T>) -> bool,
) {
    let axis = cylinder.axis();
    let u = axis.direction();
    let perp = |v: Vec3<T>| v - u * v.dot(&u);
    let d = segment.direction();
    let d_perp = perp(d);
    let m_perp = perp(segment.pt1() - axis.origin());
    let a = d_perp.dot(&d_perp);
    // Parallel to the axis: the segment never crosses the lateral surface.
    if a <= T::EPSILON * d.dot(&d) || a <= T::EPSILON {
        return;
    }
    let two = T::one() + T::one();
    let r = cylinder.radius();
    let Some((t0, t1)) = solve_quadratic(
        a,
        two * d_perp.dot(&m_perp),
        m_perp.dot(&m_perp) - r * r,
    ) else {
        return;
    };
    for t in [t0, t1] {
        if !in_unit_range(t) {
            continue;
        }
        let point = segment.point_at(t);
        if keep(&point) {
            let normal = perp(point - axis.origin()).normalize();
            hits.push(t, Contact::with_normal(point, normal));
        }
    }
}

/// Surface crossings of `segment` with `sphere`, with outward normals.
///
/// A segment lying entirely inside the sphere has no crossing.
pub fn segment_sphere<T: Real>(
    segment: &Segment<T>,
    sphere: &Sphere<T>,
    intersection: &mut Intersection<T>,
) -> bool {
    let mut hits = HitList::new();
    collect_segment_sphere(segment, sphere, &mut hits, |_| true);
    let hit = hits.flush_into(intersection);
    trace!(contacts = intersection.len(), "segment_sphere");
    hit
}

/// Crossing of `segment` with `plane`; the normal faces the segment start.
///
/// Segments parallel to the plane (including ones lying in it) report no
/// crossing.
pub fn segment_plane<T: Real>(
    segment: &Segment<T>,
    plane: &Plane<T>,
    intersection: &mut Intersection<T>,
) -> bool {
    let mut hits = HitList::new();
    collect_segment_plane(segment, plane, true, &mut hits, |_| true);
    let hit = hits.flush_into(intersection);
    trace!(contacts = intersection.len(), "segment_plane");
    hit
}

/// Crossings of `segment` with the lateral surface of an unbounded cylinder,
/// with radial outward normals.
pub fn segment_infinite_cylinder<T: Real>(
    segment: &Segment<T>,
    cylinder: &InfiniteCylinder<T>,
    intersection: &mut Intersection<T>,
) -> bool {
    let mut hits = HitList::new();
    collect_segment_infinite_cylinder(segment, cylinder, &mut hits, |_| true);
    let hit = hits.flush_into(intersection);
    trace!(contacts = intersection.len(), "segment_infinite_cylinder");
    hit
}

/// Closest pair of points between two segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClosestPoints<T: Real = f32> {
    /// Parameter along the first segment, in `[0, 1]`.
    pub s: T,
    /// Parameter along the second segment, in `[0, 1]`.
    pub t: T,
    /// Point on the first segment.
    pub on_first: Vec3<T>,
    /// Point on the second segment.
    pub on_second: Vec3<T>,
}

impl<T: Real> ClosestPoints<T> {
    /// Distance between the two points.
    pub fn distance(&self) -> T {
        (self.on_second - self.on_first).length()
    }

    /// Midpoint between the two points.
    pub fn midpoint(&self) -> Vec3<T> {
        (self.on_first + self.on_second) / (T::one() + T::one())
    }
}

/// Closest points of two segments from the 2x2 system of the line
/// parameters, clamped to both segments.
///
/// Degenerate segments collapse to their start point; parallel segments pin
/// the first parameter to zero before clamping.
pub fn closest_points_segment_segment<T: Real>(
    first: &Segment<T>,
    second: &Segment<T>,
) -> ClosestPoints<T> {
    let (zero, one) = (T::zero(), T::one());
    let d1 = first.direction();
    let d2 = second.direction();
    let r = first.pt1() - second.pt1();
    let a = d1.dot(&d1);
    let e = d2.dot(&d2);
    let f = d2.dot(&r);

    let (s, t) = if a <= T::EPSILON && e <= T::EPSILON {
        (zero, zero)
    } else if a <= T::EPSILON {
        (zero, (f / e).clamp(zero, one))
    } else {
        let c = d1.dot(&r);
        if e <= T::EPSILON {
            ((-c / a).clamp(zero, one), zero)
        } else {
            let b = d1.dot(&d2);
            let denom = a * e - b * b;
            let s = if denom > T::EPSILON * a * e {
                ((b * f - c * e) / denom).clamp(zero, one)
            } else {
                zero
            };
            let t = (b * s + f) / e;
            if t < zero {
                ((-c / a).clamp(zero, one), zero)
            } else if t > one {
                (((b - c) / a).clamp(zero, one), one)
            } else {
                (s, t)
            }
        }
    };

    ClosestPoints {
        s,
        t,
        on_first: first.point_at(s),
        on_second: second.point_at(t),
    }
}
