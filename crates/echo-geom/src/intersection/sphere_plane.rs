// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::Real;
use tracing::trace;

use crate::shapes::{Plane, Sphere};

/// Returns `true` when some part of `sphere` lies on or in front of `plane`
/// (the side its normal points to).
///
/// This is the half-space test used for frustum culling: the sphere is
/// rejected only when it sits wholly behind the plane.
pub fn sphere_on_or_forward_plane<T: Real>(sphere: &Sphere<T>, plane: &Plane<T>) -> bool {
    let distance = plane.signed_distance(&sphere.center());
    let forward = distance >= -sphere.radius();
    trace!(distance = distance.to_f64(), forward, "sphere_on_or_forward_plane");
    forward
}
