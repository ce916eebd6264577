//! # Hitbox Raycast
//!
//! Ray casting against groups of hitboxes, as used for picking and
//! line-of-sight queries.
//!
//! ## Features
//!
//! - **Broad Phase**: cheap ray-vs-bounding-sphere rejection per group
//! - **Narrow Phase**: oriented boxes, centered boxes and axis-aligned boxes
//! - **Ordered Events**: entry and exit collisions sorted by distance
//! - **Lazy Evaluation**: per-group narrow phase runs once, on first read
//! - **Scene Files**: groups and rays described in TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use hitbox_raycast::prelude::*;
//!
//! let groups = vec![HitBoxGroupData::new(
//!     vec![HitBoxData::centered(Vec3::new(0.0, 0.0, 10.0), Vec3::new(2.0, 2.0, 2.0))],
//!     Vec3::new(0.0, 0.0, 10.0),
//!     2.0,
//! )];
//! let ray = Ray::new(Vec3::zeros(), Vec3::z())?;
//!
//! let casts = cast_groups(&groups, &ray);
//! let hit = first_collision(&casts).expect("box is in front of the ray");
//! assert!((hit.distance() - 9.0).abs() < 1e-9);
//! # Ok::<(), RaycastError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate)]

pub mod foundation;
pub mod geometry;
pub mod hitbox;
pub mod group;
pub mod raycast;
pub mod config;

mod error;

pub use error::RaycastError;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        RaycastError,
        foundation::math::{Real, Vec3, Quat, quat_from_xyzw},
        geometry::{Ray, BoundingSphere},
        hitbox::{HitBox, HitBoxData, HitBoxKind, HitBoxShape},
        group::{HitBoxGroup, HitBoxGroupData},
        raycast::{
            RayCastGroup, Collision, CollisionKind, Cursor, CursorDistance,
            MergedCursor, RelativePoint, cast_groups, first_collision,
        },
        config::{Config, ConfigError, SceneConfig},
    };
}
