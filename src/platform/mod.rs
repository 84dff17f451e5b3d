//! Platform abstraction layer
//!
//! Handles the board peripherals around the game:
//! - Button lines (active-low switch port)
//! - Status indicator (CPU activity LED)
//! - Host stand-ins for both

pub mod autopilot;

pub use autopilot::AutoPilot;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::sim::GameState;
use crate::sim::tick::BTN_NONE;

/// Source of the four button lines
pub trait Buttons {
    /// Raw active-low word: bits 0..3 clear while the matching button is held.
    /// `state` is what a player would see on screen.
    fn read(&mut self, state: &GameState) -> u8;
}

/// Activity indicator: on while the processor works, off while it idles
pub trait StatusLed {
    fn set(&mut self, on: bool);
}

/// Buttons that are never pressed
#[derive(Debug, Default, Clone, Copy)]
pub struct Released;

impl Buttons for Released {
    fn read(&mut self, _state: &GameState) -> u8 {
        BTN_NONE
    }
}

/// Replays a fixed sequence of button words, then releases everything
#[derive(Debug, Default, Clone)]
pub struct ScriptedButtons {
    script: VecDeque<u8>,
}

impl ScriptedButtons {
    pub fn new(words: impl IntoIterator<Item = u8>) -> Self {
        Self {
            script: words.into_iter().collect(),
        }
    }
}

impl Buttons for ScriptedButtons {
    fn read(&mut self, _state: &GameState) -> u8 {
        self.script.pop_front().unwrap_or(BTN_NONE)
    }
}

/// Host LED: counts on-transitions, logs at trace level
#[derive(Debug, Default)]
pub struct LogLed {
    on: bool,
    /// Number of off->on transitions
    pub wakeups: u64,
}

impl LogLed {
    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl StatusLed for LogLed {
    fn set(&mut self, on: bool) {
        if on && !self.on {
            self.wakeups += 1;
        }
        if on != self.on {
            log::trace!("status led {}", if on { "on" } else { "off" });
        }
        self.on = on;
    }
}

/// One LED driven from both the interrupt and the foreground context
#[derive(Debug)]
pub struct SharedLed<L: StatusLed>(Arc<Mutex<L>>);

impl<L: StatusLed> SharedLed<L> {
    pub fn new(led: L) -> Self {
        Self(Arc::new(Mutex::new(led)))
    }

    /// Run `f` against the underlying LED
    pub fn with<R>(&self, f: impl FnOnce(&L) -> R) -> R {
        f(&self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl<L: StatusLed> Clone for SharedLed<L> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<L: StatusLed> StatusLed for SharedLed<L> {
    fn set(&mut self, on: bool) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).set(on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::BTN_P1_UP;

    #[test]
    fn test_scripted_then_released() {
        let state = GameState::new();
        let mut b = ScriptedButtons::new([BTN_NONE & !BTN_P1_UP]);
        assert_eq!(b.read(&state), 0b1110);
        assert_eq!(b.read(&state), BTN_NONE);
        assert_eq!(Released.read(&state), BTN_NONE);
    }

    #[test]
    fn test_led_wakeups() {
        let mut led = LogLed::default();
        led.set(true);
        led.set(true);
        led.set(false);
        led.set(true);
        assert!(led.is_on());
        assert_eq!(led.wakeups, 2);
    }

    #[test]
    fn test_shared_led_clones_drive_one_led() {
        let mut a = SharedLed::new(LogLed::default());
        let mut b = a.clone();
        a.set(true);
        b.set(false);
        b.set(true);
        assert_eq!(a.with(|led| led.wakeups), 2);
        assert!(a.with(LogLed::is_on));
    }
}
