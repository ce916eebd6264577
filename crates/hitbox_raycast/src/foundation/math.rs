//! Math utilities and types
//!
//! Provides the double precision math types used by the ray casting kernel.
//! Hitbox poses come from world objects whose coordinates can be large, so
//! everything here is `f64`.

pub use nalgebra::{
    Vector3,
    Matrix3,
    Quaternion,
    Unit,
};

/// Scalar type used throughout the crate
pub type Real = f64;

/// 3D vector type
pub type Vec3 = Vector3<Real>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<Real>;

/// Unit quaternion type for rotations
pub type Quat = Unit<Quaternion<Real>>;

/// Three vectors spanning a (possibly skewed) box
pub type Basis = [Vec3; 3];

/// Unit-length canonical basis (edges of a unit cube)
pub const UNIT_BASIS: Basis = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
];

/// Half-length canonical basis (half-extents of a unit cube)
pub const HALF_BASIS: Basis = [
    Vec3::new(0.5, 0.0, 0.0),
    Vec3::new(0.0, 0.5, 0.0),
    Vec3::new(0.0, 0.0, 0.5),
];

/// Build a unit quaternion from `[x, y, z, w]` components
///
/// The components are normalized; a zero quaternion yields the identity.
pub fn quat_from_xyzw(xyzw: [Real; 4]) -> Quat {
    let [x, y, z, w] = xyzw;
    let raw = Quaternion::new(w, x, y, z);
    Unit::try_new(raw, Real::EPSILON).unwrap_or_else(Quat::identity)
}

/// Math utility functions
pub mod utils {
    use super::*;

    /// Component-wise minimum and maximum of two corners
    pub fn ordered_corners(a: Vec3, b: Vec3) -> (Vec3, Vec3) {
        (a.inf(&b), a.sup(&b))
    }
}
