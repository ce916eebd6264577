//! Geometry kernel for ray casting
//!
//! Pure, stateless math: rays, bounding spheres, basis transforms and the
//! three ray-vs-box solvers used by the narrow phase.
//!
//! # Module Organization
//!
//! - [`primitives`] - Rays, bounding spheres and parametric intervals
//! - [`intersect`] - Basis transforms and ray-vs-box intersection routines

pub mod primitives;
pub mod intersect;

pub use primitives::{Ray, BoundingSphere, Interval};
pub use intersect::{
    rotate_basis,
    scale_basis,
    intersect_oriented_box,
    intersect_centered_box,
    intersect_aabb,
};
