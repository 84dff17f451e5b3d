//! Software rendering module
//!
//! Per-pixel z-order probing into a windowed display; no GPU.

pub mod compositor;
pub mod display;

pub use compositor::{Frame, draw_all, promote, render, repaint};
pub use display::{Display, FrameBuffer, TextOverlay};
