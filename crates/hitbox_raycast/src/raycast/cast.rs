//! Ray cast against a single hitbox group
//!
//! Two phases, following the usual broad/narrow split:
//! - broad phase: ray vs the group's bounding sphere, done eagerly by
//!   [`RayCastGroup::cast`]; a miss creates nothing
//! - narrow phase: ray vs every member's exact shape, done on the first read
//!   of the results and cached for the lifetime of the cast

use std::cmp::Ordering;
use std::fmt;

use once_cell::sync::OnceCell;

use super::collision::{Collision, CollisionKind};
use super::cursor::Cursor;
use super::relative_point::RelativePoint;
use crate::error::RaycastError;
use crate::foundation::logging::{debug, trace};
use crate::foundation::math::{Real, Vec3};
use crate::geometry::Ray;
use crate::group::HitBoxGroup;
use crate::hitbox::HitBoxShape;

/// One (ray, group) pairing that passed the bounding sphere test
///
/// Casts of the same ray against different groups are ordered by ascending
/// [`inlet`](RayCastGroup::inlet), so a caller can visit the nearest groups
/// first and stop as soon as a confirmed hit is closer than the next inlet.
///
/// The collision list is computed once and never refreshed; create a new cast
/// after the group's geometry changes.
pub struct RayCastGroup<'g, G: HitBoxGroup + ?Sized> {
    group: &'g G,
    ray: Ray,
    inlet: Real,
    outlet: Real,
    collisions: OnceCell<Vec<Collision<'g, G>>>,
}

impl<'g, G: HitBoxGroup + ?Sized> RayCastGroup<'g, G> {
    /// Broad phase: intersect `ray` with the group's bounding sphere
    ///
    /// Returns `None` if the ray misses the sphere or the sphere lies entirely
    /// behind the ray origin.
    pub fn cast(group: &'g G, ray: &Ray) -> Option<Self> {
        let sphere = group.bounding_sphere();
        match sphere.intersect_ray(ray) {
            Some((inlet, outlet)) => {
                trace!("Ray enters group sphere at {inlet:.3}, leaves at {outlet:.3}");
                Some(Self {
                    group,
                    ray: *ray,
                    inlet,
                    outlet,
                    collisions: OnceCell::new(),
                })
            }
            None => {
                trace!(
                    "Ray misses group sphere (center {:?}, radius {})",
                    sphere.center,
                    sphere.radius
                );
                None
            }
        }
    }

    /// Like [`cast`](RayCastGroup::cast) but from a raw origin and direction
    ///
    /// Fails fast on a zero-length direction.
    pub fn cast_from(group: &'g G, origin: Vec3, direction: Vec3) -> Result<Option<Self>, RaycastError> {
        let ray = Ray::new(origin, direction)?;
        Ok(Self::cast(group, &ray))
    }

    /// Distance at which the ray enters the bounding sphere (negative if it starts inside)
    pub fn inlet(&self) -> Real {
        self.inlet
    }

    /// Distance at which the ray leaves the bounding sphere
    pub fn outlet(&self) -> Real {
        self.outlet
    }

    /// The group being cast against
    pub fn group(&self) -> &'g G {
        self.group
    }

    /// The (normalized) ray
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    /// True once the narrow phase has run
    pub fn is_evaluated(&self) -> bool {
        self.collisions.get().is_some()
    }

    /// All collisions, sorted by ascending distance (runs the narrow phase on first call)
    pub fn collisions(&self) -> &[Collision<'g, G>] {
        self.collisions.get_or_init(|| self.narrow_phase())
    }

    /// Distance to the first collision, `None` if no member is hit
    pub fn actual_inlet(&self) -> Option<Real> {
        self.collisions().first().map(Collision::distance)
    }

    /// Distance to the last collision, `None` if no member is hit
    pub fn actual_outlet(&self) -> Option<Real> {
        self.collisions().last().map(Collision::distance)
    }

    /// Fresh cursor over the sorted collisions
    pub fn cursor(&self) -> Cursor<'_, 'g, G> {
        Cursor::new(self.collisions())
    }

    /// Compare two casts by inlet
    pub fn cmp_inlet(&self, other: &Self) -> Ordering {
        self.inlet.total_cmp(&other.inlet)
    }

    /// Narrow phase: exact test of every member
    ///
    /// Records are gathered in discovery order and stably sorted, so exact
    /// ties keep discovery order and a hitbox's entry precedes its exit.
    fn narrow_phase(&self) -> Vec<Collision<'g, G>> {
        let group: &'g G = self.group;
        let hit_boxes = group.hit_boxes();
        let mut collisions = Vec::new();

        for (index, hit_box) in hit_boxes.iter().enumerate() {
            let Some(shape) = HitBoxShape::from_hit_box(hit_box) else {
                trace!("Hitbox #{index} is axis-aligned but missing a corner, skipped");
                continue;
            };
            let Some(interval) = shape.intersect_ray(&self.ray) else {
                continue;
            };
            if interval.is_behind() {
                continue;
            }

            // Origin inside the volume: entry clamps to the origin itself.
            // + 0.0 turns -0.0 into 0.0 so total_cmp keeps discovery order at the origin
            let entry = RelativePoint::on_ray(&self.ray, interval.near.max(0.0) + 0.0);
            let exit = RelativePoint::on_ray(&self.ray, interval.far + 0.0);

            collisions.push(Collision::new(group, hit_box, entry, exit, CollisionKind::Entry));
            collisions.push(Collision::new(group, hit_box, entry, exit, CollisionKind::Exit));
        }

        collisions.sort_by(|a, b| a.distance().total_cmp(&b.distance()));

        debug!(
            "Narrow phase tested {} hitboxes, {} collisions",
            hit_boxes.len(),
            collisions.len()
        );
        collisions
    }
}

impl<G: HitBoxGroup + ?Sized> PartialEq for RayCastGroup<'_, G> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_inlet(other) == Ordering::Equal
    }
}

impl<G: HitBoxGroup + ?Sized> Eq for RayCastGroup<'_, G> {}

impl<G: HitBoxGroup + ?Sized> PartialOrd for RayCastGroup<'_, G> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Casts order by inlet only
impl<G: HitBoxGroup + ?Sized> Ord for RayCastGroup<'_, G> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_inlet(other)
    }
}

impl<G: HitBoxGroup + ?Sized> fmt::Debug for RayCastGroup<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RayCastGroup")
            .field("ray", &self.ray)
            .field("inlet", &self.inlet)
            .field("outlet", &self.outlet)
            .field("collisions", &self.collisions.get())
            .finish()
    }
}
