// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{BitAnd, BitOr};

use echo_math::{Real, Vec3};
use tracing::trace;

use super::primitives::{
    axis_parameter, collect_segment_infinite_cylinder, collect_segment_sphere, HitList,
};
use super::Intersection;
use crate::shapes::{Capsule, Segment};

/// Region of a point relative to a capsule, as a 4-bit mask.
///
/// Bit 0: before the left end of the axis. Bit 1: past the right end.
/// Bit 2: farther than the radius from the axis line. Bit 3: within the
/// radius of the axis line but beyond one end (inside the extended
/// cylinder, outside the body).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Outcode(u8);

impl Outcode {
    /// Inside the body cylinder.
    pub const INSIDE: Self = Self(0b0000);
    /// Before the left end of the axis.
    pub const LEFT: Self = Self(0b0001);
    /// Past the right end of the axis.
    pub const RIGHT: Self = Self(0b0010);
    /// Farther than the radius from the axis line.
    pub const EXTERNAL: Self = Self(0b0100);
    /// Within the radius of the axis line, beyond an end.
    pub const INTERNAL: Self = Self(0b1000);
    /// `LEFT | INTERNAL`.
    pub const LEFT_INTERNAL: Self = Self(0b1001);
    /// `LEFT | EXTERNAL`.
    pub const LEFT_EXTERNAL: Self = Self(0b0101);
    /// `RIGHT | INTERNAL`.
    pub const RIGHT_INTERNAL: Self = Self(0b1010);
    /// `RIGHT | EXTERNAL`.
    pub const RIGHT_EXTERNAL: Self = Self(0b0110);

    /// Raw bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` when every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` for [`Outcode::INSIDE`].
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Outcode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Outcode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for Outcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Outcode({:04b})", self.0)
    }
}

/// Classifies `point` against the regions of `capsule`.
pub fn capsule_outcode<T: Real>(capsule: &Capsule<T>, point: &Vec3<T>) -> Outcode {
    let axis = capsule.segment();
    let t = axis_parameter(axis, point);
    let within_radius = (*point - axis.point_at(t)).length() <= capsule.radius();
    let side = if t < T::zero() {
        Outcode::LEFT
    } else if t > T::one() {
        Outcode::RIGHT
    } else {
        Outcode::INSIDE
    };
    match (side.is_inside(), within_radius) {
        (true, true) => Outcode::INSIDE,
        (true, false) => Outcode::EXTERNAL,
        (false, true) => side | Outcode::INTERNAL,
        (false, false) => side | Outcode::EXTERNAL,
    }
}

/// Surface crossings of `segment` with `capsule` (0, 1 or 2).
///
/// The endpoint outcodes decide which pieces can be crossed:
/// - both endpoints inside the body: nothing can be crossed;
/// - both before the left end (or both past the right end): only that end
///   sphere;
/// - otherwise the lateral surface between the ends, plus each end sphere an
///   endpoint lies beyond.
///
/// Contacts come back in segment order with outward normals.
pub fn segment_capsule<T: Real>(
    segment: &Segment<T>,
    capsule: &Capsule<T>,
    intersection: &mut Intersection<T>,
) -> bool {
    let code1 = capsule_outcode(capsule, &segment.pt1());
    let code2 = capsule_outcode(capsule, &segment.pt2());
    let axis = capsule.segment();
    let mut hits = HitList::new();

    if code1.is_inside() && code2.is_inside() {
        intersection.set_not_intersection();
        trace!(?code1, ?code2, contacts = 0, "segment_capsule");
        return false;
    }

    let left = |p: &Vec3<T>| axis_parameter(axis, p) <= T::TOLERANCE;
    let right = |p: &Vec3<T>| axis_parameter(axis, p) >= T::one() - T::TOLERANCE;

    if axis.squared_length() <= T::EPSILON {
        collect_segment_sphere(segment, &capsule.left_sphere(), &mut hits, |_| true);
    } else if (code1 & code2).contains(Outcode::LEFT) {
        collect_segment_sphere(segment, &capsule.left_sphere(), &mut hits, left);
    } else if (code1 & code2).contains(Outcode::RIGHT) {
        collect_segment_sphere(segment, &capsule.right_sphere(), &mut hits, right);
    } else {
        let (lo, hi) = (-T::TOLERANCE, T::one() + T::TOLERANCE);
        collect_segment_infinite_cylinder(segment, &capsule.infinite_cylinder(), &mut hits, |p| {
            let t = axis_parameter(axis, p);
            t >= lo && t <= hi
        });
        if (code1 | code2).contains(Outcode::LEFT) {
            collect_segment_sphere(segment, &capsule.left_sphere(), &mut hits, left);
        }
        if (code1 | code2).contains(Outcode::RIGHT) {
            collect_segment_sphere(segment, &capsule.right_sphere(), &mut hits, right);
        }
    }

    let hit = hits.flush_into(intersection);
    trace!(?code1, ?code2, contacts = intersection.len(), "segment_capsule");
    hit
}
