//! Host runner settings
//!
//! These configure the desktop harness (timer emulation, run length, demo
//! input, frame dump). Game rules stay compile-time constants.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::TIMER_HZ;
use crate::error::Error;

/// Runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Emulated timer interrupt rate (Hz)
    pub interrupt_hz: u32,
    /// Stop after this many logic ticks (`None` runs forever)
    pub run_ticks: Option<u64>,
    /// Drive the buttons from the auto-pilot instead of leaving them released
    pub autoplay: bool,
    /// Seed for the auto-pilot
    pub seed: u64,
    /// Write the final frame here as a PPM image
    pub frame_dump: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interrupt_hz: TIMER_HZ,
            run_ticks: Some(600),
            autoplay: true,
            seed: 0x5eed,
            frame_dump: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings from {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Interrupt period for the timer emulation
    pub fn interrupt_period(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.interrupt_hz as f64)
    }

    fn sanitized(mut self) -> Self {
        if self.interrupt_hz == 0 {
            log::warn!("interrupt_hz must be positive, using {}", TIMER_HZ);
            self.interrupt_hz = TIMER_HZ;
        }
        self
    }
}
