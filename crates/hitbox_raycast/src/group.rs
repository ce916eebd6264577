//! Hitbox groups
//!
//! A group is a passive holder of same-typed hitboxes plus a bounding sphere
//! that its owner keeps conservative. The group never runs intersection tests
//! itself and the ray caster never recomputes or writes the sphere; a stale
//! sphere only makes the broad phase less precise.

use crate::foundation::math::{Real, Vec3};
use crate::hitbox::HitBox;

pub use crate::geometry::BoundingSphere;

/// Collection of hitboxes with an enclosing bounding sphere
pub trait HitBoxGroup {
    /// Member hitbox type
    type HitBox: HitBox;

    /// Members of the group (order is not significant)
    fn hit_boxes(&self) -> &[Self::HitBox];

    /// Sphere enclosing every member at query time
    fn bounding_sphere(&self) -> BoundingSphere;
}

impl<G: HitBoxGroup + ?Sized> HitBoxGroup for &G {
    type HitBox = G::HitBox;

    fn hit_boxes(&self) -> &[Self::HitBox] {
        (**self).hit_boxes()
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        (**self).bounding_sphere()
    }
}

/// Owned hitbox group
#[derive(Debug, Clone, PartialEq)]
pub struct HitBoxGroupData<T> {
    hit_boxes: Vec<T>,
    sphere: BoundingSphere,
}

impl<T: HitBox> HitBoxGroupData<T> {
    /// Create a group from its members and a sphere enclosing all of them
    pub fn new(hit_boxes: Vec<T>, center: Vec3, radius: Real) -> Self {
        Self {
            hit_boxes,
            sphere: BoundingSphere::new(center, radius),
        }
    }

    /// Replace the bounding sphere (after members moved)
    pub fn set_bounding_sphere(&mut self, center: Vec3, radius: Real) {
        self.sphere = BoundingSphere::new(center, radius);
    }

    /// Mutable access to the members
    ///
    /// The caller is responsible for refreshing the bounding sphere afterwards.
    pub fn hit_boxes_mut(&mut self) -> &mut Vec<T> {
        &mut self.hit_boxes
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.hit_boxes.len()
    }

    /// True if the group has no members
    pub fn is_empty(&self) -> bool {
        self.hit_boxes.is_empty()
    }
}

impl<T: HitBox> HitBoxGroup for HitBoxGroupData<T> {
    type HitBox = T;

    fn hit_boxes(&self) -> &[T] {
        &self.hit_boxes
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        self.sphere
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hitbox::HitBoxData;

    #[test]
    fn test_group_reports_members_and_sphere() {
        let group = HitBoxGroupData::new(
            vec![
                HitBoxData::centered(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)),
                HitBoxData::centered(Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0)),
            ],
            Vec3::new(1.0, 0.0, 0.0),
            2.0,
        );

        assert_eq!(group.len(), 2);
        assert!(!group.is_empty());
        assert_eq!(group.hit_boxes().len(), 2);
        assert_eq!(group.bounding_sphere(), BoundingSphere::new(Vec3::new(1.0, 0.0, 0.0), 2.0));
    }

    #[test]
    fn test_group_sphere_update() {
        let mut group: HitBoxGroupData<HitBoxData> = HitBoxGroupData::new(Vec::new(), Vec3::zeros(), 1.0);
        assert!(group.is_empty());

        group.hit_boxes_mut().push(HitBoxData::centered(Vec3::new(5.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0)));
        group.set_bounding_sphere(Vec3::new(5.0, 0.0, 0.0), 1.0);

        let by_ref = &group;
        assert_eq!(by_ref.hit_boxes().len(), 1);
        assert_eq!(by_ref.bounding_sphere().center, Vec3::new(5.0, 0.0, 0.0));
    }
}
