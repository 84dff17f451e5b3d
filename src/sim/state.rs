//! Game state and the fixed object layout
//!
//! Everything the logic tick mutates and the compositor reads lives in
//! [`GameState`]. Object identity and count are fixed at construction.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::object::{MovingObject, VisualObject};
use super::region::Region;
use super::shape::Shape;
use crate::color;
use crate::consts::*;
use crate::screen_center;

/// Indices into [`GameState::objects`]. The array order is the z-order:
/// earlier entries are painted on top of later ones.
pub const BALL: usize = 0;
pub const FIELD: usize = 1;
pub const PADDLE2: usize = 2;
pub const PADDLE1: usize = 3;
pub const OBJECT_COUNT: usize = 4;

/// Indices into [`GameState::movers`], in physics/redraw iteration order
pub const BALL_MOVER: usize = 0;
pub const PADDLE1_MOVER: usize = 1;
pub const PADDLE2_MOVER: usize = 2;
pub const MOVER_COUNT: usize = 3;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

/// Score pair, reset together on a win
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub p1: u8,
    pub p2: u8,
}

impl Scores {
    pub fn add(&mut self, player: Player) {
        match player {
            Player::One => self.p1 = self.p1.saturating_add(1),
            Player::Two => self.p2 = self.p2.saturating_add(1),
        }
    }

    /// The player who reached the win threshold, if any
    pub fn winner(&self) -> Option<Player> {
        if self.p1 >= WIN_SCORE {
            Some(Player::One)
        } else if self.p2 >= WIN_SCORE {
            Some(Player::Two)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Overlay text `<p1>|<p2>`, one ASCII digit each.
    ///
    /// Scores above 9 show as `9` rather than running past the digits.
    pub fn text(&self) -> [u8; 3] {
        let digit = |s: u8| b'0' + s.min(9);
        [digit(self.p1), b'|', digit(self.p2)]
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Visual objects in z-order (topmost first)
    pub objects: [VisualObject; OBJECT_COUNT],
    /// Moving objects in iteration order (ball, paddle 1, paddle 2)
    pub movers: [MovingObject; MOVER_COUNT],
    /// Physics boundary, taken once from the field outline
    pub fence: Region,
    pub scores: Scores,
    /// Logic ticks executed so far
    pub time_ticks: u64,
    /// Set by a tick, cleared when the compositor picks the frame up
    pub redraw_pending: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Build the one-ball, two-paddle, one-field layout
    pub fn new() -> Self {
        let center = screen_center();

        let ball = VisualObject::new(
            Shape::circle(BALL_RADIUS),
            center + BALL_START_OFFSET,
            color::GREEN,
        );
        let field = VisualObject::new(Shape::outline(FIELD_HALF_SIZE), center, color::BLACK);
        let paddle2 = VisualObject::new(
            Shape::rect(PADDLE_HALF_SIZE),
            IVec2::new(SCREEN_WIDTH - PADDLE_INSET, center.y),
            color::BLUE,
        );
        let paddle1 = VisualObject::new(
            Shape::rect(PADDLE_HALF_SIZE),
            IVec2::new(PADDLE_INSET, center.y),
            color::RED,
        );

        let objects = [ball, field, paddle2, paddle1];
        let fence = objects[FIELD].bounds();

        Self {
            objects,
            movers: [
                MovingObject::new(BALL, BALL_START_VELOCITY),
                MovingObject::new(PADDLE1, IVec2::ZERO),
                MovingObject::new(PADDLE2, IVec2::ZERO),
            ],
            fence,
            scores: Scores::default(),
            time_ticks: 0,
            redraw_pending: true,
        }
    }

    /// Visual object driven by the given mover
    #[inline]
    pub fn mover_object(&self, mover: usize) -> &VisualObject {
        &self.objects[self.movers[mover].object]
    }

    /// Promote every moving object's pending position in one step
    pub fn promote_all(&mut self) {
        for mover in &self.movers {
            self.objects[mover.object].promote();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let state = GameState::new();
        assert_eq!(state.mover_object(BALL_MOVER).color, color::GREEN);
        assert_eq!(state.mover_object(PADDLE1_MOVER).color, color::RED);
        assert_eq!(state.mover_object(PADDLE2_MOVER).color, color::BLUE);
        assert_eq!(state.fence, state.objects[FIELD].bounds());
        assert!(state.redraw_pending);

        // Everything starts inside the fence
        for i in 0..MOVER_COUNT {
            let b = state.mover_object(i).bounds();
            assert_eq!(b.intersect(&state.fence), b);
        }
    }

    #[test]
    fn test_score_text_clamps() {
        let mut s = Scores::default();
        assert_eq!(&s.text(), b"0|0");
        s.p1 = 7;
        s.p2 = 12;
        assert_eq!(&s.text(), b"7|9");
    }

    #[test]
    fn test_winner() {
        let mut s = Scores { p1: 9, p2: 3 };
        assert_eq!(s.winner(), None);
        s.add(Player::One);
        assert_eq!(s.winner(), Some(Player::One));
        s.reset();
        assert_eq!(s, Scores::default());
    }
}
