//! Lazily materialized points along a ray

use crate::foundation::math::{Real, Vec3};
use crate::geometry::Ray;

/// A point `origin + direction * distance` kept in parametric form
///
/// Equality compares the `(origin, direction, distance)` triple, not the
/// materialized coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativePoint {
    origin: Vec3,
    direction: Vec3,
    distance: Real,
}

impl RelativePoint {
    /// Point at `distance` along `ray`
    pub fn on_ray(ray: &Ray, distance: Real) -> Self {
        Self {
            origin: ray.origin(),
            direction: ray.direction(),
            distance,
        }
    }

    /// Parametric distance from the ray origin
    pub fn distance(&self) -> Real {
        self.distance
    }

    /// Ray origin this point is relative to
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Ray direction this point is relative to
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Materialize the world-space point
    pub fn point(&self) -> Vec3 {
        self.origin + self.direction * self.distance
    }
}
