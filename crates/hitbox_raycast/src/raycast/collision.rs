//! Collision events produced by a ray cast

use std::fmt;

use super::relative_point::RelativePoint;
use crate::foundation::math::Real;
use crate::group::HitBoxGroup;

/// Which boundary crossing a [`Collision`] represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionKind {
    /// The ray enters the hitbox (or starts inside it)
    Entry,
    /// The ray leaves the hitbox
    Exit,
}

/// One entry or exit event of a ray through a hitbox
///
/// Every intersected hitbox yields an entry and an exit collision sharing the
/// same pair of points.
pub struct Collision<'g, G: HitBoxGroup + ?Sized> {
    group: &'g G,
    hit_box: &'g G::HitBox,
    entry: RelativePoint,
    exit: RelativePoint,
    kind: CollisionKind,
}

impl<'g, G: HitBoxGroup + ?Sized> Collision<'g, G> {
    pub(crate) fn new(
        group: &'g G,
        hit_box: &'g G::HitBox,
        entry: RelativePoint,
        exit: RelativePoint,
        kind: CollisionKind,
    ) -> Self {
        Self { group, hit_box, entry, exit, kind }
    }

    /// Group that owns the hitbox
    pub fn group(&self) -> &'g G {
        self.group
    }

    /// Hitbox that was crossed
    pub fn hit_box(&self) -> &'g G::HitBox {
        self.hit_box
    }

    /// Point where the ray enters the hitbox (the ray origin if it starts inside)
    pub fn entry(&self) -> RelativePoint {
        self.entry
    }

    /// Point where the ray leaves the hitbox
    pub fn exit(&self) -> RelativePoint {
        self.exit
    }

    /// Entry or exit
    pub fn kind(&self) -> CollisionKind {
        self.kind
    }

    /// True for the entry event
    pub fn is_entry(&self) -> bool {
        self.kind == CollisionKind::Entry
    }

    /// The point this event refers to
    pub fn point(&self) -> RelativePoint {
        match self.kind {
            CollisionKind::Entry => self.entry,
            CollisionKind::Exit => self.exit,
        }
    }

    /// Distance along the ray of this event
    pub fn distance(&self) -> Real {
        self.point().distance()
    }
}

impl<G: HitBoxGroup + ?Sized> Clone for Collision<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: HitBoxGroup + ?Sized> Copy for Collision<'_, G> {}

impl<G: HitBoxGroup + ?Sized> fmt::Debug for Collision<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collision")
            .field("kind", &self.kind)
            .field("distance", &self.distance())
            .field("entry", &self.entry.distance())
            .field("exit", &self.exit.distance())
            .finish()
    }
}
