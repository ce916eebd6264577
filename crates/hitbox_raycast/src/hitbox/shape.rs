//! World-space hitbox shapes
//!
//! Hitboxes are stored as poses; they are turned into world-space shapes
//! on demand, right before the intersection test.

use super::{HitBox, HitBoxKind};
use crate::foundation::math::{Basis, Vec3, HALF_BASIS, UNIT_BASIS};
use crate::geometry::{
    intersect_aabb, intersect_centered_box, intersect_oriented_box, rotate_basis, scale_basis,
    Interval, Ray,
};

/// World-space shape (temporary, for testing only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitBoxShape {
    /// Parallelepiped spanned by `edges` from `corner`
    Oriented {
        /// Anchor corner
        corner: Vec3,
        /// Full-length edge vectors
        edges: Basis,
    },
    /// Parallelepiped spanned by `half_edges` on both sides of `center`
    Centered {
        /// Box center
        center: Vec3,
        /// Half-length edge vectors
        half_edges: Basis,
    },
    /// Axis-aligned box
    AxisAligned {
        /// Minimum corner
        min: Vec3,
        /// Maximum corner
        max: Vec3,
    },
}

impl HitBoxShape {
    /// Transform a hitbox's pose into a world-space shape
    ///
    /// Returns `None` for an axis-aligned hitbox that is missing a corner.
    pub fn from_hit_box<H: HitBox + ?Sized>(hit_box: &H) -> Option<Self> {
        match hit_box.kind() {
            HitBoxKind::OrientedBox => Some(Self::Oriented {
                corner: hit_box.position(),
                edges: posed_basis(hit_box, UNIT_BASIS),
            }),
            HitBoxKind::CenteredBox => Some(Self::Centered {
                center: hit_box.position(),
                half_edges: posed_basis(hit_box, HALF_BASIS),
            }),
            HitBoxKind::AxisAlignedBox => Some(Self::AxisAligned {
                min: hit_box.aabb_min()?,
                max: hit_box.aabb_max()?,
            }),
        }
    }

    /// Test ray intersection with this shape
    ///
    /// The raw interval is returned; it may lie partly or fully behind the
    /// ray origin.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Interval> {
        match self {
            Self::Oriented { corner, edges } => intersect_oriented_box(ray, corner, edges),
            Self::Centered { center, half_edges } => intersect_centered_box(ray, center, half_edges),
            Self::AxisAligned { min, max } => intersect_aabb(ray, min, max),
        }
    }
}

/// right rotation -> scale -> left rotation
fn posed_basis<H: HitBox + ?Sized>(hit_box: &H, canonical: Basis) -> Basis {
    let basis = rotate_basis(canonical, &hit_box.right_rotation());
    let basis = scale_basis(basis, &hit_box.scale());
    rotate_basis(basis, &hit_box.left_rotation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Quat;
    use crate::hitbox::HitBoxData;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_oriented_shape_identity_pose() {
        let hit_box = HitBoxData::oriented(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 1.0, 1.0));
        let shape = HitBoxShape::from_hit_box(&hit_box).unwrap();
        assert_eq!(
            shape,
            HitBoxShape::Oriented { corner: Vec3::new(1.0, 2.0, 3.0), edges: UNIT_BASIS }
        );
    }

    #[test]
    fn test_centered_shape_uses_half_basis() {
        let hit_box = HitBoxData::centered(Vec3::zeros(), Vec3::new(2.0, 4.0, 6.0));
        match HitBoxShape::from_hit_box(&hit_box).unwrap() {
            HitBoxShape::Centered { center, half_edges } => {
                assert_eq!(center, Vec3::zeros());
                assert_eq!(half_edges[0], Vec3::new(1.0, 0.0, 0.0));
                assert_eq!(half_edges[1], Vec3::new(0.0, 2.0, 0.0));
                assert_eq!(half_edges[2], Vec3::new(0.0, 0.0, 3.0));
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_pipeline_order_right_scale_left() {
        // Right rotation turns x into y before the scale stretches y;
        // the left rotation then turns the stretched y back onto -x.
        let quarter = Quat::from_axis_angle(&Vec3::z_axis(), FRAC_PI_2);
        let hit_box = HitBoxData::oriented(Vec3::zeros(), Vec3::new(1.0, 3.0, 1.0))
            .with_rotations(quarter, quarter);
        match HitBoxShape::from_hit_box(&hit_box).unwrap() {
            HitBoxShape::Oriented { edges, .. } => {
                assert_relative_eq!(edges[0], Vec3::new(-3.0, 0.0, 0.0), epsilon = EPSILON);
                assert_relative_eq!(edges[1], Vec3::new(0.0, -1.0, 0.0), epsilon = EPSILON);
                assert_relative_eq!(edges[2], Vec3::new(0.0, 0.0, 1.0), epsilon = EPSILON);
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_axis_aligned_missing_corner() {
        let mut hit_box = HitBoxData::axis_aligned(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        hit_box.aabb_max = None;
        assert!(HitBoxShape::from_hit_box(&hit_box).is_none());
    }

    #[test]
    fn test_shape_dispatch_matches_kernel() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::z()).unwrap();
        let hit_box = HitBoxData::axis_aligned(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let interval = HitBoxShape::from_hit_box(&hit_box).unwrap().intersect_ray(&ray).unwrap();
        assert_relative_eq!(interval.near, 4.0);
        assert_relative_eq!(interval.far, 6.0);
    }
}
