//! Hitbox capability and shape variants
//!
//! A hitbox is a read-only view of one volume's pose: position, non-uniform
//! scale, a left and a right rotation, and a shape kind. Axis-aligned hitboxes
//! additionally report explicit world-space corners.
//!
//! - [`HitBox`] - capability trait implemented by the hosting application
//! - [`HitBoxKind`] - shape kind tag
//! - [`HitBoxShape`] - world-space shape built from a hitbox, ready for testing
//! - [`HitBoxData`] - plain value implementation of [`HitBox`]

pub mod shape;

pub use shape::HitBoxShape;

use crate::foundation::math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Shape kind of a hitbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitBoxKind {
    /// Unit cube anchored at its minimum corner, spanned by full-length edges
    OrientedBox,
    /// Unit cube anchored at its center, spanned by half-length edges
    CenteredBox,
    /// World-space axis-aligned box given by explicit corners
    AxisAlignedBox,
}

/// Read-only pose of one volume
///
/// The transform pipeline applied to oriented and centered boxes is
/// `left_rotation * scale * right_rotation * canonical_basis`, anchored at
/// `position`. Axis-aligned boxes ignore the pose and use
/// [`aabb_min`](HitBox::aabb_min) / [`aabb_max`](HitBox::aabb_max).
pub trait HitBox {
    /// World-space anchor (corner for oriented boxes, center for centered boxes)
    fn position(&self) -> Vec3;

    /// Non-uniform scale applied between the two rotations
    fn scale(&self) -> Vec3;

    /// Rotation applied after scaling
    fn left_rotation(&self) -> Quat;

    /// Rotation applied before scaling
    fn right_rotation(&self) -> Quat;

    /// Shape kind of this hitbox
    fn kind(&self) -> HitBoxKind {
        HitBoxKind::CenteredBox
    }

    /// Minimum world-space corner (axis-aligned boxes only)
    fn aabb_min(&self) -> Option<Vec3> {
        None
    }

    /// Maximum world-space corner (axis-aligned boxes only)
    fn aabb_max(&self) -> Option<Vec3> {
        None
    }
}

impl<T: HitBox + ?Sized> HitBox for &T {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn scale(&self) -> Vec3 {
        (**self).scale()
    }

    fn left_rotation(&self) -> Quat {
        (**self).left_rotation()
    }

    fn right_rotation(&self) -> Quat {
        (**self).right_rotation()
    }

    fn kind(&self) -> HitBoxKind {
        (**self).kind()
    }

    fn aabb_min(&self) -> Option<Vec3> {
        (**self).aabb_min()
    }

    fn aabb_max(&self) -> Option<Vec3> {
        (**self).aabb_max()
    }
}

/// Plain value hitbox
#[derive(Debug, Clone, PartialEq)]
pub struct HitBoxData {
    /// Shape kind
    pub kind: HitBoxKind,
    /// World-space anchor
    pub position: Vec3,
    /// Non-uniform scale
    pub scale: Vec3,
    /// Rotation applied after scaling
    pub left_rotation: Quat,
    /// Rotation applied before scaling
    pub right_rotation: Quat,
    /// Minimum corner, axis-aligned boxes only
    pub aabb_min: Option<Vec3>,
    /// Maximum corner, axis-aligned boxes only
    pub aabb_max: Option<Vec3>,
}

impl HitBoxData {
    /// Corner-anchored box with identity rotations
    pub fn oriented(corner: Vec3, scale: Vec3) -> Self {
        Self::posed(HitBoxKind::OrientedBox, corner, scale)
    }

    /// Center-anchored box with identity rotations
    pub fn centered(center: Vec3, scale: Vec3) -> Self {
        Self::posed(HitBoxKind::CenteredBox, center, scale)
    }

    /// Axis-aligned box from two world-space corners (any order)
    pub fn axis_aligned(min: Vec3, max: Vec3) -> Self {
        Self {
            kind: HitBoxKind::AxisAlignedBox,
            position: (min + max) * 0.5,
            scale: Vec3::new(1.0, 1.0, 1.0),
            left_rotation: Quat::identity(),
            right_rotation: Quat::identity(),
            aabb_min: Some(min),
            aabb_max: Some(max),
        }
    }

    /// Replace both rotations
    pub fn with_rotations(mut self, left: Quat, right: Quat) -> Self {
        self.left_rotation = left;
        self.right_rotation = right;
        self
    }

    fn posed(kind: HitBoxKind, position: Vec3, scale: Vec3) -> Self {
        Self {
            kind,
            position,
            scale,
            left_rotation: Quat::identity(),
            right_rotation: Quat::identity(),
            aabb_min: None,
            aabb_max: None,
        }
    }
}

impl HitBox for HitBoxData {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn left_rotation(&self) -> Quat {
        self.left_rotation
    }

    fn right_rotation(&self) -> Quat {
        self.right_rotation
    }

    fn kind(&self) -> HitBoxKind {
        self.kind
    }

    fn aabb_min(&self) -> Option<Vec3> {
        self.aabb_min
    }

    fn aabb_max(&self) -> Option<Vec3> {
        self.aabb_max
    }
}
