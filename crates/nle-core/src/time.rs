//! Frame rate and frame-step sizing.
//!
//! Frame rates are plain frames-per-second values. The step used by
//! single-frame transport is quantized to hundredths of a second once, when
//! the configuration is resolved, so every step moves by the same amount.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places kept when quantizing the frame step.
const FRAME_STEP_DECIMALS: i32 = 2;

/// Frames per second of the media being controlled.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameRate(f64);

impl FrameRate {
    /// Create a frame rate. No validation is performed.
    #[inline]
    pub const fn new(fps: f64) -> Self {
        Self(fps)
    }

    /// Frames per second as f64.
    #[inline]
    pub fn fps(self) -> f64 {
        self.0
    }

    /// Exact duration of a single frame in seconds.
    #[inline]
    pub fn frame_duration(self) -> f64 {
        1.0 / self.0
    }

    /// Seek distance for a one-frame step: `1 / fps` rounded to two decimals,
    /// ties away from zero (24 fps steps by 0.04s, 30 fps by 0.03s).
    pub fn frame_step(self) -> f64 {
        round_to_decimals(self.frame_duration(), FRAME_STEP_DECIMALS)
    }

    /// Common frame rates
    pub const FPS_23_976: Self = Self::new(24000.0 / 1001.0);
    pub const FPS_24: Self = Self::new(24.0);
    pub const FPS_25: Self = Self::new(25.0);
    pub const FPS_29_97: Self = Self::new(30000.0 / 1001.0);
    pub const FPS_30: Self = Self::new(30.0);
    pub const FPS_50: Self = Self::new(50.0);
    pub const FPS_60: Self = Self::new(60.0);
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::FPS_24
    }
}

impl From<f64> for FrameRate {
    fn from(fps: f64) -> Self {
        Self::new(fps)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fps = self.0;
        if (fps - fps.round()).abs() < 0.001 {
            write!(f, "{} fps", fps.round())
        } else {
            write!(f, "{:.3} fps", fps)
        }
    }
}

fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
