//! Ray casting against hitbox groups
//!
//! # Key Types
//!
//! - [`RayCastGroup`] - one ray against one group: broad phase on creation,
//!   memoized narrow phase on first read
//! - [`Collision`] - entry or exit event of the ray through one hitbox
//! - [`Cursor`] - forward-only traversal of a cast's sorted collisions
//! - [`RelativePoint`] - point along the ray kept in parametric form
//! - [`MergedCursor`] - lazy, globally ordered walk over many casts
//!
//! # Example
//!
//! ```
//! use hitbox_raycast::prelude::*;
//!
//! let group = HitBoxGroupData::new(
//!     vec![HitBoxData::axis_aligned(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0))],
//!     Vec3::zeros(),
//!     2.0,
//! );
//! let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::z())?;
//!
//! let cast = RayCastGroup::cast(&group, &ray).expect("ray crosses the bounding sphere");
//! assert_eq!(cast.actual_inlet(), Some(4.0));
//! assert_eq!(cast.actual_outlet(), Some(6.0));
//! # Ok::<(), RaycastError>(())
//! ```

pub mod cast;
pub mod collision;
pub mod cursor;
pub mod multi;
pub mod relative_point;


pub use crate::geometry::Ray;
pub use cast::RayCastGroup;
pub use collision::{Collision, CollisionKind};
pub use cursor::{Cursor, CursorDistance};
pub use multi::{cast_groups, first_collision, MergedCursor};
pub use relative_point::RelativePoint;
