// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::Real;
use tracing::trace;

use super::{closest_points_segment_segment, Contact, Intersection};
use crate::shapes::Segment;

/// Contact between two segments.
///
/// The segments touch when their closest points are within
/// `Real::TOLERANCE`, whatever the segment lengths. The single contact is the
/// midpoint of the closest points and carries no normal. Skew or separated
/// segments leave `intersection` empty.
pub fn segment_segment<T: Real>(
    first: &Segment<T>,
    second: &Segment<T>,
    intersection: &mut Intersection<T>,
) -> bool {
    let closest = closest_points_segment_segment(first, second);
    let distance = closest.distance();
    if distance <= T::TOLERANCE {
        intersection.set_one_intersection(Contact::new(closest.midpoint()));
        trace!(
            s = closest.s.to_f64(),
            t = closest.t.to_f64(),
            contacts = 1,
            "segment_segment"
        );
        true
    } else {
        intersection.set_not_intersection();
        trace!(distance = distance.to_f64(), contacts = 0, "segment_segment");
        false
    }
}
