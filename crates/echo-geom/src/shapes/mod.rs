// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Value-type 3D primitives consumed by the intersection engine.

mod aabb;
mod capsule;
mod cylinder;
mod line;
mod oriented_box;
mod plane;
mod referential;
mod segment;
mod sphere;

pub use aabb::Aabb;
pub use capsule::Capsule;
pub use cylinder::{Cylinder, InfiniteCylinder};
pub use line::Line;
pub use oriented_box::OrientedBox;
pub use plane::Plane;
pub use referential::Referential;
pub use segment::Segment;
pub use sphere::Sphere;
