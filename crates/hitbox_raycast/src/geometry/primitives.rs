//! Primitive shapes used by the ray casting kernel
//!
//! Provides rays, bounding spheres and the parametric interval type returned
//! by every intersection routine.

use crate::error::RaycastError;
use crate::foundation::math::{Real, Vec3};

/// A ray for ray casting and picking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Creates a new ray, normalizing the direction
    ///
    /// Fails with [`RaycastError::ZeroDirection`] when the direction has zero
    /// length or a non-finite component.
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self, RaycastError> {
        let invalid = RaycastError::ZeroDirection(direction.x, direction.y, direction.z);
        if direction.iter().any(|c| !c.is_finite()) {
            return Err(invalid);
        }

        // Pre-scale by the largest component so norm() cannot overflow or underflow
        let largest = direction.amax();
        if largest == 0.0 {
            return Err(invalid);
        }
        let scaled = direction / largest;
        Ok(Self {
            origin,
            direction: scaled / scaled.norm(),
        })
    }

    /// The origin point of the ray in world space
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// The normalized direction of the ray
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: Real) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Parametric range `[near, far]` along a ray where it is inside a volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Ray parameter where the ray enters the volume (may be negative)
    pub near: Real,
    /// Ray parameter where the ray leaves the volume
    pub far: Real,
}

impl Interval {
    /// Creates a new interval
    pub fn new(near: Real, far: Real) -> Self {
        Self { near, far }
    }

    /// True when the whole volume lies behind the ray origin
    pub fn is_behind(&self) -> bool {
        self.far < 0.0
    }

    /// True when the ray origin lies inside the volume
    pub fn contains_origin(&self) -> bool {
        self.near < 0.0 && self.far >= 0.0
    }
}

/// A bounding sphere enclosing a group of hitboxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: Real) -> Self {
        Self { center, radius }
    }

    /// Check if a point lies inside or on the sphere
    pub fn contains_point(&self, point: Vec3) -> bool {
        (point - self.center).norm_squared() <= self.radius * self.radius
    }

    /// Test ray intersection with this sphere
    ///
    /// Returns the `(inlet, outlet)` parameters of the ray's passage through
    /// the sphere, or `None` if the ray misses it or the sphere lies entirely
    /// behind the origin. `inlet` is negative when the origin is inside.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<(Real, Real)> {
        let delta = ray.origin - self.center;
        // Direction is unit length, so the quadratic's `a` term is 1
        let c = delta.norm_squared() - self.radius * self.radius;
        let half_b = delta.dot(&ray.direction);
        let discriminant = half_b * half_b - c;

        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        // Both roots behind the origin
        if sqrt_discriminant < half_b {
            return None;
        }

        Some((-half_b - sqrt_discriminant, -half_b + sqrt_discriminant))
    }
}
