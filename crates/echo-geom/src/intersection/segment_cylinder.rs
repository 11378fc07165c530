// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::Real;
use tracing::trace;

use super::primitives::{
    axis_parameter, collect_segment_infinite_cylinder, collect_segment_plane, HitList,
};
use super::{closest_points_segment_segment, Intersection};
use crate::shapes::{Cylinder, Segment};

/// Surface crossings of `segment` with a capped `cylinder` (0, 1 or 2).
///
/// Segments whose closest approach to the axis exceeds the radius are
/// rejected up front. Otherwise the lateral surface contributes the
/// unbounded-cylinder crossings lying between the caps, and each cap plane
/// contributes its crossing when it falls inside the cap disc. Contacts come
/// back in segment order with outward normals; a segment wholly inside the
/// cylinder crosses nothing.
pub fn segment_cylinder<T: Real>(
    segment: &Segment<T>,
    cylinder: &Cylinder<T>,
    intersection: &mut Intersection<T>,
) -> bool {
    let axis = cylinder.axis();
    let r = cylinder.radius();
    if axis.squared_length() <= T::EPSILON {
        intersection.set_not_intersection();
        trace!(degenerate = true, contacts = 0, "segment_cylinder");
        return false;
    }

    let approach = closest_points_segment_segment(segment, &axis).distance();
    if approach > r {
        intersection.set_not_intersection();
        trace!(early_reject = true, contacts = 0, "segment_cylinder");
        return false;
    }

    let (lo, hi) = (-T::TOLERANCE, T::one() + T::TOLERANCE);
    let rim = r + T::TOLERANCE;
    let mut hits = HitList::new();
    collect_segment_infinite_cylinder(segment, &cylinder.infinite_cylinder(), &mut hits, |p| {
        let t = axis_parameter(&axis, p);
        t >= lo && t <= hi
    });
    collect_segment_plane(segment, &cylinder.left_plane(), false, &mut hits, |p| {
        (*p - cylinder.pt1()).length() <= rim
    });
    collect_segment_plane(segment, &cylinder.right_plane(), false, &mut hits, |p| {
        (*p - cylinder.pt2()).length() <= rim
    });

    let candidates = hits.len();
    let hit = hits.flush_into(intersection);
    trace!(
        early_reject = false,
        candidates,
        contacts = intersection.len(),
        "segment_cylinder"
    );
    hit
}
