//! Ray casting across many groups
//!
//! Groups are visited nearest-inlet first. A group's narrow phase only runs
//! once the walk reaches a distance where that group could contribute, so
//! far-away groups behind a confirmed hit are never evaluated.

use std::fmt;

use super::cast::RayCastGroup;
use super::collision::Collision;
use super::cursor::{Cursor, CursorDistance};
use crate::foundation::logging::debug;
use crate::foundation::math::Real;
use crate::geometry::Ray;
use crate::group::HitBoxGroup;

/// Broad phase over many groups, sorted by ascending inlet
///
/// Groups whose bounding sphere the ray misses are dropped. Casts with equal
/// inlets keep the order of `groups`.
pub fn cast_groups<'g, G, I>(groups: I, ray: &Ray) -> Vec<RayCastGroup<'g, G>>
where
    G: HitBoxGroup + ?Sized + 'g,
    I: IntoIterator<Item = &'g G>,
{
    let mut total = 0usize;
    let mut casts: Vec<_> = groups
        .into_iter()
        .inspect(|_| total += 1)
        .filter_map(|group| RayCastGroup::cast(group, ray))
        .collect();
    casts.sort();

    debug!("Broad phase kept {} of {} groups", casts.len(), total);
    casts
}

/// Nearest collision across casts sorted by inlet
///
/// Stops as soon as the best confirmed hit is closer than the next cast's
/// inlet; the remaining casts are never evaluated. With several hits at the
/// same distance the one from the earliest cast wins.
pub fn first_collision<'c, 'g, G>(casts: &'c [RayCastGroup<'g, G>]) -> Option<&'c Collision<'g, G>>
where
    G: HitBoxGroup + ?Sized,
{
    debug_assert!(
        casts.windows(2).all(|pair| pair[0].inlet() <= pair[1].inlet()),
        "casts must be sorted by inlet"
    );

    let mut best: Option<&'c Collision<'g, G>> = None;
    for cast in casts {
        if let Some(found) = best {
            if found.distance() < cast.inlet() {
                break;
            }
        }
        if let Some(candidate) = cast.collisions().first() {
            if best.map_or(true, |found| candidate.distance() < found.distance()) {
                best = Some(candidate);
            }
        }
    }
    best
}

/// Lazy merge of the collision sequences of several casts
///
/// Yields every collision of every cast in ascending distance order without
/// building a combined list. Casts must be sorted by inlet (as returned by
/// [`cast_groups`]); a cast is only evaluated once the merge reaches its
/// inlet. Ties go to the earlier cast.
pub struct MergedCursor<'c, 'g, G: HitBoxGroup + ?Sized> {
    casts: &'c [RayCastGroup<'g, G>],
    active: Vec<Cursor<'c, 'g, G>>,
    started: bool,
    current: Option<&'c Collision<'g, G>>,
}

impl<'c, 'g, G: HitBoxGroup + ?Sized> MergedCursor<'c, 'g, G> {
    /// Merge cursor positioned before the first collision
    pub fn new(casts: &'c [RayCastGroup<'g, G>]) -> Self {
        debug_assert!(
            casts.windows(2).all(|pair| pair[0].inlet() <= pair[1].inlet()),
            "casts must be sorted by inlet"
        );
        Self {
            casts,
            active: Vec::new(),
            started: false,
            current: None,
        }
    }

    /// Move to the next collision in global distance order
    pub fn advance(&mut self) -> Option<&'c Collision<'g, G>> {
        self.started = true;
        let casts = self.casts;
        loop {
            let pending = casts.get(self.active.len());
            match (self.nearest_active(), pending) {
                (None, Some(_)) => self.activate_next(),
                (Some((_, distance)), Some(cast)) if cast.inlet() <= distance => self.activate_next(),
                (Some((index, _)), _) => {
                    self.current = self.active[index].advance();
                    return self.current;
                }
                (None, None) => {
                    self.current = None;
                    return None;
                }
            }
        }
    }

    /// Collision under the cursor, if positioned on one
    pub fn current(&self) -> Option<&'c Collision<'g, G>> {
        self.current
    }

    /// Distance of the current position, with sentinels outside the sequence
    pub fn distance(&self) -> CursorDistance {
        match (self.started, self.current) {
            (false, _) => CursorDistance::BeforeStart,
            (true, Some(collision)) => CursorDistance::At(collision.distance()),
            (true, None) => CursorDistance::PastEnd,
        }
    }

    /// Number of casts whose narrow phase has been requested so far
    pub fn activated_casts(&self) -> usize {
        self.active.len()
    }

    fn activate_next(&mut self) {
        let casts = self.casts;
        self.active.push(casts[self.active.len()].cursor());
    }

    /// Active cursor with the nearest next element; lowest index on ties
    fn nearest_active(&self) -> Option<(usize, Real)> {
        let mut nearest: Option<(usize, Real)> = None;
        for (index, cursor) in self.active.iter().enumerate() {
            if let Some(next) = cursor.peek() {
                let distance = next.distance();
                if nearest.map_or(true, |(_, best)| distance < best) {
                    nearest = Some((index, distance));
                }
            }
        }
        nearest
    }
}

impl<'c, 'g, G: HitBoxGroup + ?Sized> Iterator for MergedCursor<'c, 'g, G> {
    type Item = &'c Collision<'g, G>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

impl<G: HitBoxGroup + ?Sized> fmt::Debug for MergedCursor<'_, '_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergedCursor")
            .field("casts", &self.casts.len())
            .field("active", &self.active.len())
            .field("distance", &self.distance())
            .finish()
    }
}
