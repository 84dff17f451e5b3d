//! Ball/paddle collision detection
//!
//! Pure bounding-box overlap at the committed positions: no exact-shape test
//! and no contact normal.

use super::object::VisualObject;
use super::state::{BALL_MOVER, GameState, PADDLE1_MOVER, PADDLE2_MOVER};

/// True if the bounding boxes of `a` and `b` overlap with positive area
pub fn is_collision(a: &VisualObject, b: &VisualObject) -> bool {
    !a.bounds().intersect(&b.bounds()).is_degenerate()
}

/// Ball overlap with paddle 1 and paddle 2, in that order
pub fn ball_paddle_hits(state: &GameState) -> [bool; 2] {
    let ball = state.mover_object(BALL_MOVER);
    [
        is_collision(ball, state.mover_object(PADDLE1_MOVER)),
        is_collision(ball, state.mover_object(PADDLE2_MOVER)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::shape::Shape;
    use glam::IVec2;
    use proptest::prelude::*;

    fn rect_at(x: i32, y: i32, hw: i32, hh: i32) -> VisualObject {
        VisualObject::new(Shape::rect(IVec2::new(hw, hh)), IVec2::new(x, y), 0)
    }

    #[test]
    fn test_overlap() {
        let ball = VisualObject::new(Shape::circle(8), IVec2::new(20, 80), 0);
        let paddle = rect_at(12, 80, 2, 10);
        assert!(is_collision(&ball, &paddle));
    }

    #[test]
    fn test_edge_contact_is_not_collision() {
        // Ball spans x 14..30, paddle spans x 10..14: they share one column only
        let ball = VisualObject::new(Shape::circle(8), IVec2::new(22, 80), 0);
        let paddle = rect_at(12, 80, 2, 10);
        assert!(!is_collision(&ball, &paddle));
    }

    #[test]
    fn test_uses_committed_position() {
        let mut ball = VisualObject::new(Shape::circle(8), IVec2::new(60, 80), 0);
        let paddle = rect_at(12, 80, 2, 10);
        ball.pos_next = IVec2::new(14, 80);
        assert!(!is_collision(&ball, &paddle));
        ball.promote();
        assert!(is_collision(&ball, &paddle));
    }

    #[test]
    fn test_initial_layout_has_no_hits() {
        let state = GameState::new();
        assert_eq!(ball_paddle_hits(&state), [false, false]);
    }

    proptest! {
        #[test]
        fn prop_collision_symmetric(
            ax in 0i32..128, ay in 0i32..160, aw in 1i32..12, ah in 1i32..12,
            bx in 0i32..128, by in 0i32..160, bw in 1i32..12, bh in 1i32..12,
        ) {
            let a = rect_at(ax, ay, aw, ah);
            let b = rect_at(bx, by, bw, bh);
            prop_assert_eq!(is_collision(&a, &b), is_collision(&b, &a));
        }

        #[test]
        fn prop_self_collision(x in 0i32..128, y in 0i32..160, w in 1i32..12, h in 1i32..12) {
            let a = rect_at(x, y, w, h);
            prop_assert!(is_collision(&a, &a));
        }
    }
}
