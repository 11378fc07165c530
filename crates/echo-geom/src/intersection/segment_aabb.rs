// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Real, Vec3};
use tracing::trace;

use super::{Contact, Intersection};
use crate::shapes::{Aabb, Segment};

/// Nearest face crossing of `segment` with `aabb`.
///
/// Each of the six face planes the segment is not parallel to is clipped
/// against `t ∈ [0, 1]`; a crossing counts when the other two coordinates lie
/// within the face (inclusive). The smallest `t` wins, so a segment starting
/// inside the box reports its exit face. The normal is the outward face
/// normal. A segment wholly inside the box crosses no face.
pub fn segment_aabb<T: Real>(
    segment: &Segment<T>,
    aabb: &Aabb<T>,
    intersection: &mut Intersection<T>,
) -> bool {
    let start = segment.pt1();
    let d = segment.direction();
    let (lo, hi) = (aabb.min(), aabb.max());
    let mut nearest: Option<(T, Contact<T>)> = None;

    for axis in 0..3 {
        if d[axis].abs() <= T::EPSILON {
            continue;
        }
        for (face, sign) in [(lo[axis], -T::one()), (hi[axis], T::one())] {
            let t = (face - start[axis]) / d[axis];
            if t < T::zero() || t > T::one() {
                continue;
            }
            if nearest.is_some_and(|(best, _)| t >= best) {
                continue;
            }
            let mut point = segment.point_at(t);
            point[axis] = face;
            let on_face = (0..3)
                .filter(|&k| k != axis)
                .all(|k| point[k] >= lo[k] && point[k] <= hi[k]);
            if on_face {
                let mut normal = Vec3::zero();
                normal[axis] = sign;
                nearest = Some((t, Contact::with_normal(point, normal)));
            }
        }
    }

    match nearest {
        Some((t, contact)) => {
            intersection.set_one_intersection(contact);
            trace!(t = t.to_f64(), contacts = 1, "segment_aabb");
            true
        }
        None => {
            intersection.set_not_intersection();
            trace!(contacts = 0, "segment_aabb");
            false
        }
    }
}
