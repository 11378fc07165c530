// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Pairwise intersection tests between primitives.
//!
//! Every routine is a free function taking the two shapes and an
//! [`Intersection`] to fill. The boolean return mirrors
//! [`Intersection::is_intersecting`]; on a miss the result is reset so stale
//! contacts from a previous call never leak through.

mod primitives;
mod segment_aabb;
mod segment_capsule;
mod segment_cylinder;
mod segment_segment;
mod sphere_oriented_box;
mod sphere_plane;

use echo_math::{Real, Vec3};

pub use primitives::{
    closest_points_segment_segment, segment_infinite_cylinder, segment_plane, segment_sphere,
    ClosestPoints,
};
pub use segment_aabb::segment_aabb;
pub use segment_capsule::{capsule_outcode, segment_capsule, Outcode};
pub use segment_cylinder::segment_cylinder;
pub use segment_segment::segment_segment;
pub use sphere_oriented_box::sphere_oriented_box;
pub use sphere_plane::sphere_on_or_forward_plane;

/// A single contact point, optionally with the surface normal there.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact<T: Real = f32> {
    /// World-space position.
    pub point: Vec3<T>,
    /// Unit surface normal, when the routine can define one.
    pub normal: Option<Vec3<T>>,
}

impl<T: Real> Contact<T> {
    /// Contact without a normal.
    #[must_use]
    pub fn new(point: Vec3<T>) -> Self {
        Self {
            point,
            normal: None,
        }
    }

    /// Contact carrying a surface normal.
    #[must_use]
    pub fn with_normal(point: Vec3<T>, normal: Vec3<T>) -> Self {
        Self {
            point,
            normal: Some(normal),
        }
    }
}

impl<T: Real> Default for Contact<T> {
    fn default() -> Self {
        Self::new(Vec3::zero())
    }
}

/// Result of an intersection test: zero, one or two contacts.
///
/// Created empty by the caller and filled by one of the routines in this
/// module. When two contacts are present they are ordered along the tested
/// segment (entry first).
#[derive(Debug, Copy, Clone)]
pub struct Intersection<T: Real = f32> {
    contacts: [Contact<T>; 2],
    count: usize,
}

impl<T: Real> Intersection<T> {
    /// Empty result.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contacts: [Contact::default(); 2],
            count: 0,
        }
    }

    /// Clears every contact.
    pub fn set_not_intersection(&mut self) {
        self.count = 0;
    }

    /// Replaces the contents with a single contact.
    pub fn set_one_intersection(&mut self, contact: Contact<T>) {
        self.contacts[0] = contact;
        self.count = 1;
    }

    /// Replaces the contents with two contacts, kept in the given order.
    pub fn set_two_intersection(&mut self, first: Contact<T>, second: Contact<T>) {
        self.contacts = [first, second];
        self.count = 2;
    }

    /// Appends a contact; returns `false` (and drops it) when already full.
    pub fn push(&mut self, contact: Contact<T>) -> bool {
        match self.contacts.get_mut(self.count) {
            Some(slot) => {
                *slot = contact;
                self.count += 1;
                true
            }
            None => false,
        }
    }

    /// Returns `true` when at least one contact is present.
    pub fn is_intersecting(&self) -> bool {
        self.count > 0
    }

    /// Number of contacts (0, 1 or 2).
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` when no contact is present.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The populated contacts.
    pub fn contacts(&self) -> &[Contact<T>] {
        &self.contacts[..self.count]
    }

    /// The first contact along the tested segment, if any.
    pub fn first(&self) -> Option<&Contact<T>> {
        self.contacts().first()
    }
}

impl<T: Real> PartialEq for Intersection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.contacts() == other.contacts()
    }
}

impl<T: Real> Default for Intersection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Real> IntoIterator for &'a Intersection<T> {
    type Item = &'a Contact<T>;
    type IntoIter = core::slice::Iter<'a, Contact<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(x: f32) -> Contact {
        Contact::new(Vec3::new([x, 0.0, 0.0]))
    }

    #[test]
    fn push_keeps_at_most_two() {
        let mut hit = Intersection::<f32>::new();
        assert!(!hit.is_intersecting());
        assert!(hit.push(contact(1.0)));
        assert!(hit.push(contact(2.0)));
        assert!(!hit.push(contact(3.0)));
        assert_eq!(hit.len(), 2);
        assert_eq!(hit.contacts()[1], contact(2.0));
    }

    #[test]
    fn setters_replace_previous_contents() {
        let mut hit = Intersection::<f32>::new();
        hit.set_two_intersection(contact(1.0), contact(2.0));
        hit.set_one_intersection(contact(5.0));
        assert_eq!(hit.contacts(), &[contact(5.0)]);
        hit.set_not_intersection();
        assert_eq!(hit, Intersection::new());
        assert!(hit.is_empty());
        assert!(hit.first().is_none());
        assert_eq!((&hit).into_iter().count(), 0);
    }
}
