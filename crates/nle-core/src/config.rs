//! Integrator options and the configuration resolved from them.
//!
//! Options are what an integrator passes in (all optional, JSON-shaped).
//! [`NleConfig`] is the immutable value resolved from them once, at attach
//! time, and shared by the transport and the timecode display.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::host::PlaybackClock;
use crate::time::FrameRate;

/// Options recognized by the controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NleOptions {
    /// Frames per second. Zero or absent means 24.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framerate: Option<f64>,
    /// Fixed media duration in seconds. Zero or absent means "ask the host".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Enable arrow-key frame stepping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_controls: Option<bool>,
    /// Enable the SMPTE timecode display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smpte_timecode: Option<bool>,
}

impl NleOptions {
    /// Parse an options object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Layer `overrides` on top of `self`. Fields set in `overrides` win.
    pub fn merge(self, overrides: NleOptions) -> Self {
        Self {
            framerate: overrides.framerate.or(self.framerate),
            duration: overrides.duration.or(self.duration),
            frame_controls: overrides.frame_controls.or(self.frame_controls),
            smpte_timecode: overrides.smpte_timecode.or(self.smpte_timecode),
        }
    }
}

/// How the media duration is obtained. Chosen once, never switched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationResolver {
    /// A duration fixed by the integrator.
    Fixed(f64),
    /// Query the host clock on every call.
    Live,
}

impl DurationResolver {
    pub fn resolve<C: PlaybackClock + ?Sized>(&self, clock: &C) -> f64 {
        match *self {
            Self::Fixed(duration) => duration,
            Self::Live => clock.duration(),
        }
    }
}

/// Configuration resolved from [`NleOptions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NleConfig {
    pub frame_rate: FrameRate,
    /// Seek distance of one frame step, see [`FrameRate::frame_step`].
    pub frame_step: f64,
    pub duration: DurationResolver,
    pub frame_controls: bool,
    pub smpte_timecode: bool,
}

impl NleConfig {
    pub fn from_options(options: &NleOptions) -> Self {
        let frame_rate = nonzero(options.framerate)
            .map(FrameRate::new)
            .unwrap_or_default();
        let duration = nonzero(options.duration)
            .map(DurationResolver::Fixed)
            .unwrap_or(DurationResolver::Live);

        Self {
            frame_rate,
            frame_step: frame_rate.frame_step(),
            duration,
            frame_controls: options.frame_controls.unwrap_or(false),
            smpte_timecode: options.smpte_timecode.unwrap_or(false),
        }
    }
}

impl Default for NleConfig {
    fn default() -> Self {
        Self::from_options(&NleOptions::default())
    }
}

/// Zero and NaN count as unset.
fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
