//! Runtime settings
//!
//! Timer cadence and render quality knobs. The defaults reproduce the classic
//! look: 5 ms ticks after a one second start delay, overlay shown.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("tick period must be at least 1 ms")]
    ZeroTickPeriod,
    #[error("max ticks per frame must be at least 1")]
    ZeroTickBudget,
    #[error("ovals need at least {min} segments, got {got}")]
    TooFewSegments { min: u32, got: u32 },
    #[error("msaa sample count must be 1 or 4, got {0}")]
    UnsupportedSampleCount(u32),
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Animation and render settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Milliseconds between ticks
    pub tick_period_ms: u64,
    /// Milliseconds before the first tick
    pub start_delay_ms: u64,
    /// Catch-up ticks allowed per frame before backlog is dropped
    pub max_ticks_per_frame: u32,

    // === Initial toggles ===
    pub show_overlay: bool,
    pub start_paused: bool,

    // === Rendering ===
    /// Triangle segments per oval
    pub oval_segments: u32,
    /// Multisample anti-aliasing (1 = off)
    pub msaa_samples: u32,
    /// Present with vsync
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_period_ms: 5,
            start_delay_ms: 1000,
            max_ticks_per_frame: 8,

            show_overlay: true,
            start_paused: false,

            oval_segments: 64,
            msaa_samples: 4,
            vsync: true,
        }
    }
}

impl Settings {
    /// Fewest segments that still read as an oval
    pub const MIN_OVAL_SEGMENTS: u32 = 8;

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_period_ms == 0 {
            return Err(SettingsError::ZeroTickPeriod);
        }
        if self.max_ticks_per_frame == 0 {
            return Err(SettingsError::ZeroTickBudget);
        }
        if self.oval_segments < Self::MIN_OVAL_SEGMENTS {
            return Err(SettingsError::TooFewSegments {
                min: Self::MIN_OVAL_SEGMENTS,
                got: self.oval_segments,
            });
        }
        if !matches!(self.msaa_samples, 1 | 4) {
            return Err(SettingsError::UnsupportedSampleCount(self.msaa_samples));
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }
}
