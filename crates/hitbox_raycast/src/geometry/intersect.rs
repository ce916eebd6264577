//! Ray-vs-box intersection routines
//!
//! Three solvers share one output type, [`Interval`]:
//! - corner-anchored parallelepipeds ("full" edges, local range `[0, 1]`)
//! - center-anchored parallelepipeds ("half" edges, local range `[-1, 1]`)
//! - axis-aligned boxes (slab test)
//!
//! None of them applies the behind-origin / inside-origin policy; that is
//! the caller's job (see `raycast::RayCastGroup`).

use super::primitives::{Interval, Ray};
use crate::foundation::math::{Basis, Mat3, Quat, Real, Vec3};
use crate::foundation::math::utils::ordered_corners;

/// Rotate each basis vector about the origin
pub fn rotate_basis(basis: Basis, rotation: &Quat) -> Basis {
    basis.map(|v| rotation * v)
}

/// Scale each basis vector component-wise
pub fn scale_basis(basis: Basis, scale: &Vec3) -> Basis {
    basis.map(|v| v.component_mul(scale))
}

/// Intersect a ray with a box spanned by `edges` from the corner `corner`
///
/// Returns `None` if the edges are linearly dependent or the ray misses.
pub fn intersect_oriented_box(ray: &Ray, corner: &Vec3, edges: &Basis) -> Option<Interval> {
    intersect_parallelepiped(ray, corner, edges, 0.0, 1.0)
}

/// Intersect a ray with a box spanned by half-extent `half_edges` around `center`
///
/// Returns `None` if the edges are linearly dependent or the ray misses.
pub fn intersect_centered_box(ray: &Ray, center: &Vec3, half_edges: &Basis) -> Option<Interval> {
    intersect_parallelepiped(ray, center, half_edges, -1.0, 1.0)
}

/// Solve for the t-range where every local coordinate lies in `[low, high]`
///
/// The local coordinates of `origin + t * direction` in the edge basis are
/// the affine function `offset + t * rate`, obtained by inverting the edge
/// matrix once.
fn intersect_parallelepiped(
    ray: &Ray,
    anchor: &Vec3,
    edges: &Basis,
    low: Real,
    high: Real,
) -> Option<Interval> {
    let inverse = Mat3::from_columns(edges).try_inverse()?;
    let offset = inverse * (ray.origin() - anchor);
    let rate = inverse * ray.direction();

    let mut near = Real::NEG_INFINITY;
    let mut far = Real::INFINITY;

    for axis in 0..3 {
        let (start, speed) = (offset[axis], rate[axis]);
        if speed == 0.0 {
            // Constant along the ray on this axis
            if start < low || start > high {
                return None;
            }
            continue;
        }

        let mut t0 = (low - start) / speed;
        let mut t1 = (high - start) / speed;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        near = near.max(t0);
        far = far.min(t1);
        if near > far {
            return None;
        }
    }

    Some(Interval::new(near, far))
}

/// Intersect a ray with an axis-aligned box using the slab method
///
/// Corner order does not matter; they are normalized per axis first.
pub fn intersect_aabb(ray: &Ray, min: &Vec3, max: &Vec3) -> Option<Interval> {
    let (min, max) = ordered_corners(*min, *max);
    let origin = ray.origin();
    let direction = ray.direction();

    let mut t_min = Real::NEG_INFINITY;
    let mut t_max = Real::INFINITY;

    for axis in 0..3 {
        if direction[axis] == 0.0 {
            // Parallel to this slab: inside it or no hit at all
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return None;
            }
            continue;
        }

        let mut t0 = (min[axis] - origin[axis]) / direction[axis];
        let mut t1 = (max[axis] - origin[axis]) / direction[axis];
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > t_min {
            t_min = t0;
        }
        if t1 < t_max {
            t_max = t1;
        }
        if t_min > t_max {
            return None;
        }
    }

    Some(Interval::new(t_min, t_max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{UNIT_BASIS, HALF_BASIS};
    use approx::assert_relative_eq;
    use nalgebra::Unit;
    use std::f64::consts::FRAC_PI_2;
    use std::f64::consts::FRAC_PI_4;

    const EPSILON: Real = 1e-9;

    fn ray(origin: [Real; 3], direction: [Real; 3]) -> Ray {
        Ray::new(Vec3::from(origin), Vec3::from(direction)).unwrap()
    }

    fn unit_cube() -> (Vec3, Vec3) {
        (Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_rotate_basis_quarter_turn() {
        let rotation = Quat::from_axis_angle(&Vec3::z_axis(), FRAC_PI_2);
        let rotated = rotate_basis(UNIT_BASIS, &rotation);
        assert_relative_eq!(rotated[0], Vec3::y(), epsilon = EPSILON);
        assert_relative_eq!(rotated[1], -Vec3::x(), epsilon = EPSILON);
        assert_relative_eq!(rotated[2], Vec3::z(), epsilon = EPSILON);
    }

    #[test]
    fn test_scale_basis_component_wise() {
        let scaled = scale_basis(HALF_BASIS, &Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(scaled[0], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(scaled[1], Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(scaled[2], Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_aabb_hit_from_outside() {
        let (min, max) = unit_cube();
        let hit = intersect_aabb(&ray([0.0, 0.0, -5.0], [0.0, 0.0, 1.0]), &min, &max).unwrap();
        assert_relative_eq!(hit.near, 4.0);
        assert_relative_eq!(hit.far, 6.0);
    }

    #[test]
    fn test_aabb_origin_inside() {
        let (min, max) = unit_cube();
        let hit = intersect_aabb(&ray([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]), &min, &max).unwrap();
        assert!(hit.contains_origin());
        assert_relative_eq!(hit.near, -1.0);
        assert_relative_eq!(hit.far, 1.0);
    }

    #[test]
    fn test_aabb_parallel_outside_slab() {
        let (min, max) = unit_cube();
        assert!(intersect_aabb(&ray([5.0, 0.0, -5.0], [0.0, 0.0, 1.0]), &min, &max).is_none());
    }

    #[test]
    fn test_aabb_swapped_corners() {
        let (min, max) = unit_cube();
        let hit = intersect_aabb(&ray([0.0, 0.0, -5.0], [0.0, 0.0, 1.0]), &max, &min).unwrap();
        assert_relative_eq!(hit.near, 4.0);
        assert_relative_eq!(hit.far, 6.0);
    }

    #[test]
    fn test_aabb_diagonal_miss() {
        let (min, max) = unit_cube();
        // Passes the x slab before reaching the z slab
        assert!(intersect_aabb(&ray([-5.0, 0.0, -10.0], [1.0, 0.0, 0.2]), &min, &max).is_none());
    }

    #[test]
    fn test_aabb_behind_origin_reported_raw() {
        let (min, max) = unit_cube();
        let hit = intersect_aabb(&ray([0.0, 0.0, 5.0], [0.0, 0.0, 1.0]), &min, &max).unwrap();
        assert!(hit.is_behind());
    }

    #[test]
    fn test_oriented_unit_box_matches_aabb() {
        let r = ray([0.5, 0.5, -5.0], [0.0, 0.0, 1.0]);
        let oriented = intersect_oriented_box(&r, &Vec3::zeros(), &UNIT_BASIS).unwrap();
        let aligned = intersect_aabb(&r, &Vec3::zeros(), &Vec3::new(1.0, 1.0, 1.0)).unwrap();
        assert_relative_eq!(oriented.near, 5.0);
        assert_relative_eq!(oriented.far, 6.0);
        assert_relative_eq!(oriented.near, aligned.near);
        assert_relative_eq!(oriented.far, aligned.far);
    }

    #[test]
    fn test_oriented_box_miss_beside() {
        let r = ray([1.5, 0.5, -5.0], [0.0, 0.0, 1.0]);
        assert!(intersect_oriented_box(&r, &Vec3::zeros(), &UNIT_BASIS).is_none());
    }

    #[test]
    fn test_oriented_box_degenerate_edges() {
        let edges = scale_basis(UNIT_BASIS, &Vec3::new(1.0, 0.0, 1.0));
        let r = ray([0.5, 0.0, -5.0], [0.0, 0.0, 1.0]);
        assert!(intersect_oriented_box(&r, &Vec3::zeros(), &edges).is_none());
    }

    #[test]
    fn test_oriented_box_rotated_45_degrees() {
        // Unit cube rotated 45 degrees about Z, ray along X through its middle
        let rotation = Quat::from_axis_angle(&Vec3::z_axis(), FRAC_PI_4);
        let edges = rotate_basis(UNIT_BASIS, &rotation);
        let half_diagonal = std::f64::consts::FRAC_1_SQRT_2;
        let r = ray([-5.0, half_diagonal, 0.5], [1.0, 0.0, 0.0]);
        let hit = intersect_oriented_box(&r, &Vec3::zeros(), &edges).unwrap();
        assert_relative_eq!(hit.near, 5.0 - half_diagonal, epsilon = EPSILON);
        assert_relative_eq!(hit.far, 5.0 + half_diagonal, epsilon = EPSILON);
    }

    #[test]
    fn test_oriented_box_skewed_edges() {
        // Shear the second edge along x; the z range is unaffected
        let edges = [Vec3::x(), Vec3::new(1.0, 1.0, 0.0), Vec3::z()];
        let r = ray([1.0, 0.5, -5.0], [0.0, 0.0, 1.0]);
        let hit = intersect_oriented_box(&r, &Vec3::zeros(), &edges).unwrap();
        assert_relative_eq!(hit.near, 5.0);
        assert_relative_eq!(hit.far, 6.0);

        let outside = ray([1.8, 0.5, -5.0], [0.0, 0.0, 1.0]);
        assert!(intersect_oriented_box(&outside, &Vec3::zeros(), &edges).is_none());
    }

    #[test]
    fn test_centered_box_half_extents() {
        let center = Vec3::new(10.0, 0.0, 0.0);
        let half_edges = scale_basis(HALF_BASIS, &Vec3::new(2.0, 2.0, 2.0));
        let r = ray([10.0, 0.0, -5.0], [0.0, 0.0, 1.0]);
        let hit = intersect_centered_box(&r, &center, &half_edges).unwrap();
        assert_relative_eq!(hit.near, 4.0);
        assert_relative_eq!(hit.far, 6.0);
    }

    #[test]
    fn test_centered_box_with_rotation() {
        let rotation = Unit::new_normalize(nalgebra::Quaternion::new(1.0, 0.0, 1.0, 0.0));
        let half_edges = rotate_basis(scale_basis(HALF_BASIS, &Vec3::new(4.0, 2.0, 2.0)), &rotation);
        // Rotated 90 degrees about Y: the long x axis now lies along z
        let r = ray([0.0, 0.0, -10.0], [0.0, 0.0, 1.0]);
        let hit = intersect_centered_box(&r, &Vec3::zeros(), &half_edges).unwrap();
        assert_relative_eq!(hit.near, 8.0, epsilon = EPSILON);
        assert_relative_eq!(hit.far, 12.0, epsilon = EPSILON);
    }
}
