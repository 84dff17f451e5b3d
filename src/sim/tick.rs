//! Game-logic tick
//!
//! One call advances the game by one divided-down timer step: paddle input,
//! bounce physics, scoring, tone selection and the win check.

use glam::IVec2;

use super::physics::advance;
use super::region::AXIS_Y;
use super::shape::Geometry;
use super::state::{BALL_MOVER, GameState, PADDLE1_MOVER, PADDLE2_MOVER, Player};
use crate::consts::PADDLE_SPEED;

/// Button line bits (active-low: a cleared bit means pressed)
pub const BTN_P1_UP: u8 = 1 << 0;
pub const BTN_P1_DOWN: u8 = 1 << 1;
pub const BTN_P2_UP: u8 = 1 << 2;
pub const BTN_P2_DOWN: u8 = 1 << 3;
/// All four lines released
pub const BTN_NONE: u8 = 0x0f;

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInput {
    /// Raw active-low button word, as read from the switch port
    pub buttons: u8,
}

impl Default for TickInput {
    fn default() -> Self {
        Self { buttons: BTN_NONE }
    }
}

impl TickInput {
    /// Input with the given (active-high) button mask held down
    pub fn pressed(mask: u8) -> Self {
        Self {
            buttons: BTN_NONE & !mask,
        }
    }

    #[inline]
    pub fn is_down(&self, button: u8) -> bool {
        self.buttons & button == 0
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Ball overlapping paddle 1 / paddle 2
    pub hits: [bool; 2],
    /// Player credited by each side of the field (left edge, right edge)
    pub scored: [Option<Player>; 2],
    /// Scores were reset by a win this tick
    pub winner: Option<Player>,
}

impl TickReport {
    pub fn any_hit(&self) -> bool {
        self.hits.iter().any(|&h| h)
    }
}

/// Vertical paddle velocity for an up/down button pair (down wins if both held)
fn paddle_velocity(input: &TickInput, up: u8, down: u8) -> i32 {
    let mut vy = 0;
    if input.is_down(up) {
        vy = -PADDLE_SPEED;
    }
    if input.is_down(down) {
        vy = PADDLE_SPEED;
    }
    vy
}

/// Advance the game by one logic tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    state.time_ticks += 1;
    let mut report = TickReport::default();

    // Paddles carry no vertical momentum between ticks: zero unless held
    for (mover, up, down) in [
        (PADDLE1_MOVER, BTN_P1_UP, BTN_P1_DOWN),
        (PADDLE2_MOVER, BTN_P2_UP, BTN_P2_DOWN),
    ] {
        state.movers[mover].velocity[AXIS_Y] = paddle_velocity(input, up, down);
    }

    let adv = advance(state);
    report.hits = adv.hits;
    if report.any_hit() {
        log::debug!("tick {}: ball/paddle contact {:?}", state.time_ticks, adv.hits);
    }

    report.scored = check_score(state, adv.tentative[BALL_MOVER]);
    for player in report.scored.into_iter().flatten() {
        state.scores.add(player);
        log::debug!(
            "tick {}: {:?} scores ({}:{})",
            state.time_ticks,
            player,
            state.scores.p1,
            state.scores.p2
        );
    }

    // Ball position and velocity carry over into the next round
    if let Some(winner) = state.scores.winner() {
        log::info!(
            "{:?} wins {}:{}, resetting scores",
            winner,
            state.scores.p1,
            state.scores.p2
        );
        state.scores.reset();
        report.winner = Some(winner);
    }

    state.redraw_pending = true;
    report
}

/// Score against the fence using the ball's uncorrected tentative position.
///
/// Leaving on the left credits player two, on the right player one. The two
/// sides are checked independently.
fn check_score(state: &GameState, tentative: IVec2) -> [Option<Player>; 2] {
    let bounds = state.mover_object(BALL_MOVER).shape.bounds(tentative);
    let left = (bounds.top_left.x < state.fence.top_left.x).then_some(Player::Two);
    let right = (bounds.bot_right.x > state.fence.bot_right.x).then_some(Player::One);
    [left, right]
}
