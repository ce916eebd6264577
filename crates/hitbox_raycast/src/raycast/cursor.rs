//! Forward-only cursor over the collisions of a ray cast

use std::fmt;

use super::collision::Collision;
use crate::foundation::math::Real;
use crate::group::HitBoxGroup;

/// Distance reported by a [`Cursor`] in any state
///
/// Variants are ordered, so `BeforeStart < At(d) < PastEnd` for every `d`.
/// This lets callers merge-walk several cursors by comparing distances alone.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum CursorDistance {
    /// Cursor has not been advanced yet
    BeforeStart,
    /// Cursor is positioned on a collision at this distance
    At(Real),
    /// Cursor ran past the last collision
    PastEnd,
}

impl CursorDistance {
    /// Numeric form, with the sentinels mapped to negative and positive infinity
    pub fn as_f64(self) -> Real {
        match self {
            Self::BeforeStart => Real::NEG_INFINITY,
            Self::At(distance) => distance,
            Self::PastEnd => Real::INFINITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    BeforeStart,
    At(usize),
    Exhausted,
}

/// Read-only, forward-only traversal of a sorted collision sequence
///
/// A fresh cursor sits before the first element; [`advance`](Cursor::advance)
/// moves it one step. Reading [`current`](Cursor::current) while unpositioned
/// or exhausted yields `None`, never a stale element.
pub struct Cursor<'c, 'g, G: HitBoxGroup + ?Sized> {
    collisions: &'c [Collision<'g, G>],
    position: Position,
}

impl<'c, 'g, G: HitBoxGroup + ?Sized> Cursor<'c, 'g, G> {
    /// Cursor positioned before the first of `collisions`
    pub fn new(collisions: &'c [Collision<'g, G>]) -> Self {
        Self {
            collisions,
            position: Position::BeforeStart,
        }
    }

    /// True if [`advance`](Cursor::advance) would land on an element
    pub fn has_next(&self) -> bool {
        self.next_index().is_some()
    }

    /// Move one step forward and return the new current element
    ///
    /// Returns `None` (and becomes exhausted) when there are no more elements.
    pub fn advance(&mut self) -> Option<&'c Collision<'g, G>> {
        match self.next_index() {
            Some(index) => {
                self.position = Position::At(index);
                Some(&self.collisions[index])
            }
            None => {
                self.position = Position::Exhausted;
                None
            }
        }
    }

    /// Element under the cursor, if positioned on one
    pub fn current(&self) -> Option<&'c Collision<'g, G>> {
        match self.position {
            Position::At(index) => self.collisions.get(index),
            Position::BeforeStart | Position::Exhausted => None,
        }
    }

    /// Element the next [`advance`](Cursor::advance) would return
    pub fn peek(&self) -> Option<&'c Collision<'g, G>> {
        self.next_index().map(|index| &self.collisions[index])
    }

    /// Distance of the current position, with sentinels outside the sequence
    pub fn distance(&self) -> CursorDistance {
        match self.position {
            Position::BeforeStart => CursorDistance::BeforeStart,
            Position::At(index) => CursorDistance::At(self.collisions[index].distance()),
            Position::Exhausted => CursorDistance::PastEnd,
        }
    }

    /// True once the cursor has run past the last element
    pub fn is_exhausted(&self) -> bool {
        self.position == Position::Exhausted
    }

    fn next_index(&self) -> Option<usize> {
        let index = match self.position {
            Position::BeforeStart => 0,
            Position::At(index) => index + 1,
            Position::Exhausted => return None,
        };
        (index < self.collisions.len()).then_some(index)
    }
}

impl<'c, 'g, G: HitBoxGroup + ?Sized> Iterator for Cursor<'c, 'g, G> {
    type Item = &'c Collision<'g, G>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.position {
            Position::BeforeStart => self.collisions.len(),
            Position::At(index) => self.collisions.len() - index - 1,
            Position::Exhausted => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<G: HitBoxGroup + ?Sized> Clone for Cursor<'_, '_, G> {
    fn clone(&self) -> Self {
        Self {
            collisions: self.collisions,
            position: self.position,
        }
    }
}

impl<G: HitBoxGroup + ?Sized> fmt::Debug for Cursor<'_, '_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("len", &self.collisions.len())
            .field("position", &self.position)
            .finish()
    }
}
