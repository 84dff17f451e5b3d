//! LCD Pong - a two-paddle bouncing-ball game for a small fixed display
//!
//! Core modules:
//! - `sim`: Game model (shapes, objects, bounce physics, collisions, tick)
//! - `render`: Display abstraction and the dirty-region compositor
//! - `scheduler`: Timer-divided logic task and signalled render task
//! - `platform`: Buttons, status indicator and host peripherals
//! - `audio`: Tone generator and sound effects
//! - `settings`: Host runner settings

pub mod audio;
pub mod error;
pub mod platform;
pub mod render;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use error::Error;
pub use settings::Settings;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Screen dimensions (portrait 128x160 LCD)
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 160;

    /// Hardware timer interrupt rate
    pub const TIMER_HZ: u32 = 250;
    /// Interrupts per game-logic tick (~16.7 ticks/s at 250 Hz)
    pub const TICK_DIVIDER: u16 = 15;

    /// Either score reaching this resets both
    pub const WIN_SCORE: u8 = 10;

    /// Vertical paddle speed while a button is held (pixels/tick)
    pub const PADDLE_SPEED: i32 = 1;
    /// Paddle half extents (2x10 rectangle)
    pub const PADDLE_HALF_SIZE: IVec2 = IVec2::new(2, 10);
    /// Paddle distance from the left/right screen edge
    pub const PADDLE_INSET: i32 = 12;

    /// Ball radius and launch velocity
    pub const BALL_RADIUS: i32 = 8;
    pub const BALL_START_VELOCITY: IVec2 = IVec2::new(2, 1);
    /// Ball start offset from screen center (a bit below and right)
    pub const BALL_START_OFFSET: IVec2 = IVec2::new(10, 5);

    /// Field outline half extents
    pub const FIELD_HALF_SIZE: IVec2 = IVec2::new(SCREEN_WIDTH / 2 - 1, SCREEN_HEIGHT / 2 - 20);

    /// Tone pitches (Hz) for ball/paddle contact
    pub const PADDLE1_TONE_HZ: u32 = 2000;
    pub const PADDLE2_TONE_HZ: u32 = 2500;

    /// Score overlay anchors
    pub const SCORE_LABEL_POS: IVec2 = IVec2::new(SCREEN_WIDTH / 2 - 15, 0);
    pub const SCORE_TEXT_POS: IVec2 = IVec2::new(SCREEN_WIDTH / 2 - 5, 10);
}

/// RGB565 colors used by the game
pub mod color {
    pub type Color = u16;

    pub const BLACK: Color = 0x0000;
    pub const WHITE: Color = 0xffff;
    pub const RED: Color = 0xf800;
    pub const GREEN: Color = 0x07e0;
    pub const BLUE: Color = 0x001f;
    pub const VIOLET: Color = 0xec1d;

    /// Painted wherever no object covers a pixel
    pub const BACKGROUND: Color = VIOLET;

    /// Expand an RGB565 value to 8-bit RGB
    #[inline]
    pub fn to_rgb888(c: Color) -> [u8; 3] {
        let r = ((c >> 11) & 0x1f) as u8;
        let g = ((c >> 5) & 0x3f) as u8;
        let b = (c & 0x1f) as u8;
        [(r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2)]
    }
}

/// Screen center
#[inline]
pub fn screen_center() -> IVec2 {
    IVec2::new(consts::SCREEN_WIDTH / 2, consts::SCREEN_HEIGHT / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb888_expansion() {
        assert_eq!(color::to_rgb888(color::BLACK), [0, 0, 0]);
        assert_eq!(color::to_rgb888(color::WHITE), [255, 255, 255]);
        assert_eq!(color::to_rgb888(color::RED), [255, 0, 0]);
    }

    #[test]
    fn test_field_fits_screen() {
        let c = screen_center();
        assert!(c.x - consts::FIELD_HALF_SIZE.x >= 0);
        assert!(c.x + consts::FIELD_HALF_SIZE.x < consts::SCREEN_WIDTH);
        assert!(c.y - consts::FIELD_HALF_SIZE.y >= 0);
        assert!(c.y + consts::FIELD_HALF_SIZE.y < consts::SCREEN_HEIGHT);
    }
}
