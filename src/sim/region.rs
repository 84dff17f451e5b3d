//! Axis-aligned rectangular regions
//!
//! Corners are inclusive pixel coordinates: a region covering exactly one
//! pixel has `top_left == bot_right`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Horizontal axis index
pub const AXIS_X: usize = 0;
/// Vertical axis index
pub const AXIS_Y: usize = 1;

/// Rectangle given by its top-left and bottom-right corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub top_left: IVec2,
    pub bot_right: IVec2,
}

impl Region {
    pub const fn new(top_left: IVec2, bot_right: IVec2) -> Self {
        Self {
            top_left,
            bot_right,
        }
    }

    /// Region spanning `center ± half_size`
    pub fn centered(center: IVec2, half_size: IVec2) -> Self {
        Self::new(center - half_size, center + half_size)
    }

    /// Overlap of two regions (componentwise max of top-lefts, min of bottom-rights).
    ///
    /// The result may be degenerate; check with [`Region::is_degenerate`].
    pub fn intersect(&self, other: &Region) -> Region {
        Region::new(
            self.top_left.max(other.top_left),
            self.bot_right.min(other.bot_right),
        )
    }

    /// True unless `top_left < bot_right` strictly on both axes
    pub fn is_degenerate(&self) -> bool {
        self.top_left.x >= self.bot_right.x || self.top_left.y >= self.bot_right.y
    }

    /// Whether `point` lies inside the region (edges included)
    pub fn contains(&self, point: IVec2) -> bool {
        point.cmpge(self.top_left).all() && point.cmple(self.bot_right).all()
    }

    /// True if the region pokes out of `fence` on either side of `axis`
    pub fn crosses(&self, fence: &Region, axis: usize) -> bool {
        self.top_left[axis] < fence.top_left[axis] || self.bot_right[axis] > fence.bot_right[axis]
    }

    /// Clamp the region to the visible screen
    pub fn clip_to_screen(&self) -> Region {
        let max = IVec2::new(SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1);
        Region::new(
            self.top_left.clamp(IVec2::ZERO, max),
            self.bot_right.clamp(IVec2::ZERO, max),
        )
    }

    /// Number of pixels covered (0 if the corners are inverted)
    pub fn area(&self) -> usize {
        let size = self.bot_right - self.top_left + IVec2::ONE;
        if size.x <= 0 || size.y <= 0 {
            0
        } else {
            (size.x as usize) * (size.y as usize)
        }
    }

    /// Iterate every pixel row-major, top row first
    pub fn pixels(&self) -> impl Iterator<Item = IVec2> + '_ {
        (self.top_left.y..=self.bot_right.y)
            .flat_map(move |row| (self.top_left.x..=self.bot_right.x).map(move |col| IVec2::new(col, row)))
    }
}
