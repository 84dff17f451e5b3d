//! Drawable and moving objects
//!
//! A [`VisualObject`] keeps three positions: `pos` is the one committed to
//! the display, `pos_last` the one it replaced, and `pos_next` the one the
//! physics step wants shown on the next frame.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::region::Region;
use super::shape::{Geometry, Shape};
use crate::color::Color;

/// A shape placed on screen with a fixed color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualObject {
    pub shape: Shape,
    pub pos: IVec2,
    pub pos_last: IVec2,
    pub pos_next: IVec2,
    pub color: Color,
}

impl VisualObject {
    /// New object with all three position slots at `pos`
    pub const fn new(shape: Shape, pos: IVec2, color: Color) -> Self {
        Self {
            shape,
            pos,
            pos_last: pos,
            pos_next: pos,
            color,
        }
    }

    /// Bounds at the committed position
    #[inline]
    pub fn bounds(&self) -> Region {
        self.shape.bounds(self.pos)
    }

    /// Whether the object covers `pixel` at its committed position
    #[inline]
    pub fn covers(&self, pixel: IVec2) -> bool {
        self.shape.contains(self.pos, pixel)
    }

    /// Commit the pending position: last <- current, current <- next
    #[inline]
    pub fn promote(&mut self) {
        self.pos_last = self.pos;
        self.pos = self.pos_next;
    }
}

/// Velocity attached to one visual object (by index into the z-ordered list)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingObject {
    pub object: usize,
    pub velocity: IVec2,
}

impl MovingObject {
    pub const fn new(object: usize, velocity: IVec2) -> Self {
        Self { object, velocity }
    }
}
