//! Dirty-region compositor
//!
//! A render pass first promotes every moving object's pending position in one
//! step, then repaints each moving object's bounding box at its new position
//! by probing the z-ordered object list per pixel.
//!
//! Only the new bounding box is repainted. If an object jumps far enough that
//! its old and new boxes do not overlap, the old pixels stay on screen until
//! some other repaint covers them. Moving objects are repainted in iteration
//! order, so overlapping boxes end with the later object's pass.

use glam::IVec2;

use super::display::Display;
use crate::color::{self, Color};
use crate::consts::{SCORE_LABEL_POS, SCORE_TEXT_POS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::object::VisualObject;
use crate::sim::state::{GameState, MOVER_COUNT, OBJECT_COUNT, Scores};
use crate::sim::Region;

/// Everything a repaint reads, captured at promotion time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub objects: [VisualObject; OBJECT_COUNT],
    /// Object index of each moving object, in iteration order
    pub movers: [usize; MOVER_COUNT],
    pub scores: Scores,
}

/// Promote all pending positions together and capture the frame to paint.
///
/// Callers sharing `state` with the logic tick must hold the game lock for
/// the duration of this call; the repaint itself runs unlocked.
pub fn promote(state: &mut GameState) -> Frame {
    state.promote_all();
    state.redraw_pending = false;
    Frame {
        objects: state.objects,
        movers: state.movers.map(|m| m.object),
        scores: state.scores,
    }
}

/// Color of the topmost object covering `pixel`, or the background
pub fn probe(objects: &[VisualObject], pixel: IVec2) -> Color {
    objects
        .iter()
        .find(|obj| obj.covers(pixel))
        .map_or(color::BACKGROUND, |obj| obj.color)
}

/// Paint `area` (clipped to the screen) pixel by pixel
pub fn paint_region(objects: &[VisualObject], area: Region, display: &mut impl Display) {
    let area = area.clip_to_screen();
    if area.area() == 0 {
        return;
    }
    display.set_area(area);
    for pixel in area.pixels() {
        display.write_color(probe(objects, pixel));
    }
}

/// Draw the score string overlay
pub fn draw_score(scores: &Scores, display: &mut impl Display) {
    let text: String = scores.text().iter().map(|&b| b as char).collect();
    display.draw_text(SCORE_TEXT_POS, &text, color::BLACK, color::BACKGROUND);
}

/// Repaint the score and every moving object's bounding box
pub fn repaint(frame: &Frame, display: &mut impl Display) {
    draw_score(&frame.scores, display);
    for &index in &frame.movers {
        let bounds = frame.objects[index].bounds();
        log::trace!("repaint object {} at {:?}", index, bounds);
        paint_region(&frame.objects, bounds, display);
    }
}

/// One full render pass on a state the caller owns exclusively
pub fn render(state: &mut GameState, display: &mut impl Display) {
    let frame = promote(state);
    repaint(&frame, display);
}

/// Initial paint: the whole screen plus the static score label
pub fn draw_all(state: &GameState, display: &mut impl Display) {
    let screen = Region::new(IVec2::ZERO, IVec2::new(SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1));
    paint_region(&state.objects, screen, display);
    display.draw_text(SCORE_LABEL_POS, "score:", color::BLACK, color::BACKGROUND);
    draw_score(&state.scores, display);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::display::FrameBuffer;
    use crate::sim::state::{BALL, FIELD, PADDLE1};
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_probe_z_order() {
        let state = GameState::new();
        let ball = state.objects[BALL];
        assert_eq!(probe(&state.objects, ball.pos), color::GREEN);

        // Ball on top of the field outline where they overlap
        let mut objects = state.objects;
        objects[BALL].pos = objects[FIELD].bounds().top_left + IVec2::new(3, 0);
        assert_eq!(probe(&objects, objects[FIELD].bounds().top_left + IVec2::new(3, 0)), color::GREEN);
        assert_eq!(probe(&objects, objects[FIELD].bounds().bot_right), color::BLACK);

        // Nothing there: background
        assert_eq!(probe(&state.objects, IVec2::new(40, 40)), color::BACKGROUND);
    }

    #[test]
    fn test_draw_all_paints_everything() {
        let state = GameState::new();
        let mut fb = FrameBuffer::new();
        draw_all(&state, &mut fb);

        let paddle = state.objects[PADDLE1].pos;
        assert_eq!(fb.pixel(paddle.x, paddle.y), Some(color::RED));
        assert_eq!(fb.pixel(0, 0), Some(color::BACKGROUND));
        assert_eq!(fb.text_at(SCORE_LABEL_POS), Some("score:"));
        assert_eq!(fb.text_at(SCORE_TEXT_POS), Some("0|0"));
    }

    #[test]
    fn test_render_promotes_and_repaints_new_box() {
        let mut state = GameState::new();
        let mut fb = FrameBuffer::new();
        draw_all(&state, &mut fb);

        let old = state.objects[BALL].pos;
        tick(&mut state, &TickInput::default());
        assert!(state.redraw_pending);
        render(&mut state, &mut fb);
        assert!(!state.redraw_pending);

        let ball = state.objects[BALL];
        assert_eq!(ball.pos_last, old);
        assert_eq!(ball.pos, old + IVec2::new(2, 1));
        assert_eq!(fb.pixel(ball.pos.x, ball.pos.y), Some(color::GREEN));
        for pixel in ball.bounds().pixels() {
            assert_eq!(fb.pixel(pixel.x, pixel.y), Some(probe(&state.objects, pixel)));
        }
    }

    #[test]
    fn test_stale_pixels_left_behind() {
        let mut state = GameState::new();
        let mut fb = FrameBuffer::new();
        draw_all(&state, &mut fb);

        // Teleport the ball so the old and new boxes are disjoint
        let old = state.objects[BALL].pos;
        state.objects[BALL].pos_next = old + IVec2::new(0, 30);
        render(&mut state, &mut fb);
        assert_eq!(fb.pixel(old.x, old.y), Some(color::GREEN));
        assert_eq!(probe(&state.objects, old), color::BACKGROUND);
    }

    #[test]
    fn test_repaint_deterministic() {
        let mut state = GameState::new();
        for _ in 0..7 {
            tick(&mut state, &TickInput::default());
        }
        let frame = promote(&mut state);

        let mut a = FrameBuffer::new();
        let mut b = FrameBuffer::new();
        repaint(&frame, &mut a);
        repaint(&frame, &mut a);
        repaint(&frame, &mut b);
        assert_eq!(a.pixels(), b.pixels());
        assert_eq!(a.texts(), b.texts());
    }

    #[test]
    fn test_score_overlay_follows_frame() {
        let mut state = GameState::new();
        state.scores = Scores { p1: 3, p2: 5 };
        let mut fb = FrameBuffer::new();
        render(&mut state, &mut fb);
        assert_eq!(fb.text_at(SCORE_TEXT_POS), Some("3|5"));
    }
}
