//! Game simulation module
//!
//! All gameplay logic lives here and is deterministic:
//! - Integer positions and velocities only
//! - Fixed object set, fixed iteration and z-order
//! - No display, audio or platform dependencies

pub mod collision;
pub mod object;
pub mod physics;
pub mod region;
pub mod shape;
pub mod state;
pub mod tick;

pub use collision::{ball_paddle_hits, is_collision};
pub use object::{MovingObject, VisualObject};
pub use physics::{Advance, advance, fold_back};
pub use region::{AXIS_X, AXIS_Y, Region};
pub use shape::{Arrow, Circle, Geometry, Rect, RectOutline, Shape};
pub use state::{GameState, Player, Scores};
pub use tick::{TickInput, TickReport, tick};
