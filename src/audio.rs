//! Audio: a single monophonic tone generator
//!
//! Sound effects are plain square-wave pitches; frequency 0 is silence.

use crate::consts::{PADDLE1_TONE_HZ, PADDLE2_TONE_HZ};
use crate::sim::TickReport;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball touching paddle 1
    Paddle1Hit,
    /// Ball touching paddle 2
    Paddle2Hit,
}

impl SoundEffect {
    pub fn frequency(&self) -> u32 {
        match self {
            SoundEffect::Paddle1Hit => PADDLE1_TONE_HZ,
            SoundEffect::Paddle2Hit => PADDLE2_TONE_HZ,
        }
    }
}

/// Tone output (buzzer driver)
pub trait ToneGenerator {
    /// Start a tone at `hz`, replacing any current tone; 0 silences
    fn play(&mut self, hz: u32);
}

/// Buzzer manager for the game
pub struct Buzzer<T: ToneGenerator> {
    tone: T,
}

impl<T: ToneGenerator> Buzzer<T> {
    pub fn new(tone: T) -> Self {
        Self { tone }
    }

    pub fn silence(&mut self) {
        self.tone.play(0);
    }

    pub fn play(&mut self, effect: SoundEffect) {
        self.tone.play(effect.frequency());
    }

    /// Silence, then sound every paddle contact of the tick (paddle 2 last)
    pub fn apply(&mut self, report: &TickReport) {
        self.silence();
        if report.hits[0] {
            self.play(SoundEffect::Paddle1Hit);
        }
        if report.hits[1] {
            self.play(SoundEffect::Paddle2Hit);
        }
    }

    pub fn generator(&self) -> &T {
        &self.tone
    }
}

/// Host tone generator: remembers the current pitch and logs changes
#[derive(Debug, Default)]
pub struct LogTone {
    current: u32,
    /// Number of non-silent tones started
    pub started: u64,
}

impl LogTone {
    pub fn current(&self) -> u32 {
        self.current
    }
}

impl ToneGenerator for LogTone {
    fn play(&mut self, hz: u32) {
        if hz != self.current {
            if hz == 0 {
                log::trace!("tone off");
            } else {
                log::debug!("tone {} Hz", hz);
            }
        }
        if hz != 0 {
            self.started += 1;
        }
        self.current = hz;
    }
}
