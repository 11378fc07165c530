// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::Real;
use tracing::trace;

use super::{Contact, Intersection};
use crate::shapes::{OrientedBox, Sphere};

/// Overlap between `sphere` and `oriented_box`.
///
/// Works in the box frame: a per-axis `extent + radius` check rejects
/// distant spheres, then the local centre is clamped into the box to find
/// the nearest box point. The sphere touches when that point is within
/// `radius` of the centre. The contact is the nearest point in world space;
/// its normal points toward the sphere centre and is absent when the centre
/// is inside the box.
pub fn sphere_oriented_box<T: Real>(
    sphere: &Sphere<T>,
    oriented_box: &OrientedBox<T>,
    intersection: &mut Intersection<T>,
) -> bool {
    let frame = oriented_box.referential();
    let local = frame.global_to_local_position(&sphere.center());
    let ext = oriented_box.extents();
    let r = sphere.radius();

    if (0..3).any(|k| local[k].abs() > ext[k] + r) {
        intersection.set_not_intersection();
        trace!(early_reject = true, contacts = 0, "sphere_oriented_box");
        return false;
    }

    let mut nearest = local;
    for k in 0..3 {
        nearest[k] = local[k].clamp(-ext[k], ext[k]);
    }
    let offset = local - nearest;
    if offset.square_length() > r * r {
        intersection.set_not_intersection();
        trace!(early_reject = false, contacts = 0, "sphere_oriented_box");
        return false;
    }

    let point = frame.local_to_global_position(&nearest);
    let contact = if offset.square_length() <= T::EPSILON {
        Contact::new(point)
    } else {
        Contact::with_normal(point, frame.local_to_global_direction(&offset.normalize()))
    };
    intersection.set_one_intersection(contact);
    trace!(early_reject = false, contacts = 1, "sphere_oriented_box");
    true
}
