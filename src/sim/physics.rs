//! Fence-bounded bounce physics
//!
//! Each moving object steps by its velocity from its pending position. On an
//! axis where the stepped bounds leave the fence, the velocity component is
//! negated and twice the new component is added back, which both reverses
//! direction and folds the overshoot inside the fence.
//!
//! Ball/paddle overlap (at the committed positions) applies the same
//! correction to every moving object on every axis. When the ball overlaps a
//! paddle the ball flips on both axes, and on an axis that also hit the fence
//! the two folds cancel out (no net bounce).

use glam::IVec2;

use super::collision::ball_paddle_hits;
use super::region::{AXIS_X, AXIS_Y};
use super::shape::Geometry;
use super::state::{GameState, MOVER_COUNT};

/// Result of one physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Per mover: pending position + velocity, before any correction
    pub tentative: [IVec2; MOVER_COUNT],
    /// Ball overlapping paddle 1 / paddle 2
    pub hits: [bool; 2],
}

/// Reverse `velocity` on `axis` and fold `pos` back by twice the new component
#[inline]
pub fn fold_back(velocity: &mut IVec2, pos: &mut IVec2, axis: usize) {
    velocity[axis] = -velocity[axis];
    pos[axis] += 2 * velocity[axis];
}

/// Advance every moving object by one tick, writing `pos_next` and velocities
pub fn advance(state: &mut GameState) -> Advance {
    let hits = ball_paddle_hits(state);
    let fence = state.fence;
    let mut tentative = [IVec2::ZERO; MOVER_COUNT];

    for (i, mover) in state.movers.iter_mut().enumerate() {
        let obj = &mut state.objects[mover.object];
        let start = obj.pos_next + mover.velocity;
        tentative[i] = start;

        let bounds = obj.shape.bounds(start);
        let mut pos = start;
        for axis in [AXIS_X, AXIS_Y] {
            if bounds.crosses(&fence, axis) {
                fold_back(&mut mover.velocity, &mut pos, axis);
            }
            for _ in hits.iter().filter(|&&hit| hit) {
                fold_back(&mut mover.velocity, &mut pos, axis);
            }
        }
        obj.pos_next = pos;
    }

    Advance { tentative, hits }
}
