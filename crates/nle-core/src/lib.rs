//! NLE Core - Foundation types for frame-accurate player controls
//!
//! This crate provides the pieces shared by the transport and the timecode
//! display:
//! - Frame rate and the quantized frame-step size
//! - SMPTE (HH:MM:SS:FF) timecode encoding
//! - Integrator options and the configuration resolved from them
//! - The capability traits a playback host implements

pub mod config;
pub mod error;
pub mod host;
pub mod time;
pub mod timecode;

pub use config::{DurationResolver, NleConfig, NleOptions};
pub use error::{NleError, Result};
pub use host::{
    DisplaySlot, DisplayTarget, DisplayTargets, EventHandler, EventKind, HostContext, HostEvent,
    PlaybackClock, PlayerHost, KEY_ARROW_LEFT, KEY_ARROW_RIGHT,
};
pub use time::FrameRate;
pub use timecode::{to_smpte, Timecode};
