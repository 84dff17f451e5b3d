//! Display abstraction and a software framebuffer
//!
//! The display is driven like a small SPI LCD: address an inclusive window,
//! then stream colors into it row-major.

use std::io::Write;
use std::path::Path;

use glam::IVec2;

use crate::color::{self, Color};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::Error;
use crate::sim::Region;

/// Pixel sink for the compositor
pub trait Display {
    /// Address an inclusive on-screen window; following writes fill it row-major
    fn set_area(&mut self, area: Region);
    /// Write the next pixel of the current window
    fn write_color(&mut self, color: Color);
    /// Draw a fixed-position text overlay
    fn draw_text(&mut self, pos: IVec2, text: &str, fg: Color, bg: Color);
}

/// A text overlay placed on the framebuffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOverlay {
    pub pos: IVec2,
    pub text: String,
    pub fg: Color,
    pub bg: Color,
}

/// RGB565 framebuffer implementing [`Display`]
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pixels: Vec<Color>,
    window: Region,
    cursor: usize,
    texts: Vec<TextOverlay>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Screen-sized buffer cleared to black
    pub fn new() -> Self {
        let window = Region::new(IVec2::ZERO, IVec2::new(SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1));
        Self {
            pixels: vec![color::BLACK; window.area()],
            window,
            cursor: 0,
            texts: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        SCREEN_WIDTH
    }

    pub fn height(&self) -> i32 {
        SCREEN_HEIGHT
    }

    /// Color at `(x, y)`, `None` off screen
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return None;
        }
        self.pixels.get((y * SCREEN_WIDTH + x) as usize).copied()
    }

    /// Raw pixels, row-major
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Current text overlays (one per position, latest wins)
    pub fn texts(&self) -> &[TextOverlay] {
        &self.texts
    }

    /// Text drawn at `pos`, if any
    pub fn text_at(&self, pos: IVec2) -> Option<&str> {
        self.texts
            .iter()
            .find(|t| t.pos == pos)
            .map(|t| t.text.as_str())
    }

    /// Write the buffer as a binary PPM image (text overlays not rasterized)
    pub fn write_ppm(&self, path: &Path) -> Result<(), Error> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3 + 32);
        write!(out, "P6\n{} {}\n255\n", SCREEN_WIDTH, SCREEN_HEIGHT)?;
        for &c in &self.pixels {
            out.extend_from_slice(&color::to_rgb888(c));
        }
        std::fs::write(path, out)?;
        log::info!("Frame written to {}", path.display());
        Ok(())
    }
}

impl Display for FrameBuffer {
    fn set_area(&mut self, area: Region) {
        self.window = area.clip_to_screen();
        self.cursor = 0;
    }

    fn write_color(&mut self, color: Color) {
        let area = self.window.area();
        if area == 0 {
            return;
        }
        // Writes past the end of the window wrap to its start, like the LCD
        let i = self.cursor % area;
        let w = (self.window.bot_right.x - self.window.top_left.x + 1) as usize;
        let x = self.window.top_left.x + (i % w) as i32;
        let y = self.window.top_left.y + (i / w) as i32;
        self.pixels[(y * SCREEN_WIDTH + x) as usize] = color;
        self.cursor += 1;
    }

    fn draw_text(&mut self, pos: IVec2, text: &str, fg: Color, bg: Color) {
        let overlay = TextOverlay {
            pos,
            text: text.to_string(),
            fg,
            bg,
        };
        match self.texts.iter_mut().find(|t| t.pos == pos) {
            Some(existing) => *existing = overlay,
            None => self.texts.push(overlay),
        }
    }
}
