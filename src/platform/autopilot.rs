//! Demo-mode auto-pilot: both paddles played by a simple tracker
//!
//! Each paddle follows the ball while it approaches and drifts back to the
//! middle otherwise. A seeded RNG adds aim jitter and the occasional missed
//! input so rallies end.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::Buttons;
use crate::screen_center;
use crate::sim::state::{BALL_MOVER, GameState, PADDLE1_MOVER, PADDLE2_MOVER};
use crate::sim::tick::{BTN_NONE, BTN_P1_DOWN, BTN_P1_UP, BTN_P2_DOWN, BTN_P2_UP};

/// Pixels of slack before a paddle bothers to move
const DEAD_ZONE: i32 = 2;
/// Percent chance per paddle per tick of not pressing anything
const MISS_CHANCE: u32 = 15;

/// Seeded button source that plays both sides
#[derive(Debug, Clone)]
pub struct AutoPilot {
    rng: Pcg32,
    /// Per-paddle aim offset, re-rolled on every rally direction change
    aim: [i32; 2],
    last_dir: i32,
}

impl AutoPilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            aim: [0, 0],
            last_dir: 0,
        }
    }

    fn steer(&mut self, paddle_y: i32, target_y: i32, up: u8, down: u8) -> u8 {
        if self.rng.random_range(0..100) < MISS_CHANCE {
            return 0;
        }
        if paddle_y > target_y + DEAD_ZONE {
            up
        } else if paddle_y < target_y - DEAD_ZONE {
            down
        } else {
            0
        }
    }
}

impl Buttons for AutoPilot {
    fn read(&mut self, state: &GameState) -> u8 {
        let ball = state.mover_object(BALL_MOVER).pos;
        let dir = state.movers[BALL_MOVER].velocity.x.signum();
        if dir != self.last_dir {
            self.last_dir = dir;
            self.aim = [self.rng.random_range(-8..=8), self.rng.random_range(-8..=8)];
        }

        let middle = screen_center().y;
        let p1_target = if dir < 0 { ball.y + self.aim[0] } else { middle };
        let p2_target = if dir > 0 { ball.y + self.aim[1] } else { middle };

        let p1_y = state.mover_object(PADDLE1_MOVER).pos.y;
        let p2_y = state.mover_object(PADDLE2_MOVER).pos.y;
        let pressed = self.steer(p1_y, p1_target, BTN_P1_UP, BTN_P1_DOWN)
            | self.steer(p2_y, p2_target, BTN_P2_UP, BTN_P2_DOWN);

        BTN_NONE & !pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};
    use glam::IVec2;

    #[test]
    fn test_same_seed_same_inputs() {
        let mut a = AutoPilot::new(7);
        let mut b = AutoPilot::new(7);
        let mut state = GameState::new();
        for _ in 0..200 {
            let wa = a.read(&state);
            let wb = b.read(&state);
            assert_eq!(wa, wb);
            tick(&mut state, &TickInput { buttons: wa });
            state.promote_all();
        }
    }

    #[test]
    fn test_never_presses_up_and_down_together() {
        let mut pilot = AutoPilot::new(1);
        let mut state = GameState::new();
        for _ in 0..500 {
            let word = pilot.read(&state);
            let input = TickInput { buttons: word };
            assert!(!(input.is_down(BTN_P1_UP) && input.is_down(BTN_P1_DOWN)));
            assert!(!(input.is_down(BTN_P2_UP) && input.is_down(BTN_P2_DOWN)));
            tick(&mut state, &input);
            state.promote_all();
        }
    }

    #[test]
    fn test_tracks_approaching_ball() {
        let mut state = GameState::new();
        // Ball far above paddle 2 and heading right
        state.objects[state.movers[BALL_MOVER].object].pos = IVec2::new(90, 30);
        state.movers[BALL_MOVER].velocity = IVec2::new(2, 0);

        let mut pilot = AutoPilot::new(3);
        let ups = (0..50)
            .filter(|_| TickInput { buttons: pilot.read(&state) }.is_down(BTN_P2_UP))
            .count();
        assert!(ups > 25);
    }
}
