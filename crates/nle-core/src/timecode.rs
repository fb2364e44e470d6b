//! SMPTE (HH:MM:SS:FF) timecode derived from elapsed seconds.
//!
//! Non-drop-frame only. The minutes field counts every elapsed minute and is
//! not reduced modulo 60, so one hour and one minute renders as `01:61:..`.
//! Seconds are taken within the current minute and frames within the current
//! second.
//!
//! No input validation is done: a negative time or a zero frame rate yields
//! degenerate fields, never a panic.

use std::fmt;

use crate::time::FrameRate;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// A timecode split into its four displayed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Timecode {
    pub hours: i64,
    /// Total elapsed minutes, not wrapped at 60.
    pub minutes: i64,
    pub seconds: i64,
    pub frames: i64,
}

impl Timecode {
    /// Split `current_time` seconds into timecode fields at `rate`.
    pub fn from_seconds(current_time: f64, rate: FrameRate) -> Self {
        let fps = rate.fps();
        let total_frames = (current_time * fps).trunc();
        let hours = (current_time / SECONDS_PER_HOUR).floor();
        let minutes = (current_time / SECONDS_PER_MINUTE).floor();
        let minute_of_hour = minutes - hours * SECONDS_PER_MINUTE;
        let seconds =
            (current_time - hours * SECONDS_PER_HOUR - minute_of_hour * SECONDS_PER_MINUTE).trunc();
        // NaN for a zero rate; the cast below maps it to 0
        let frames = (total_frames % fps).trunc();

        Self {
            hours: hours as i64,
            minutes: minutes as i64,
            seconds: seconds as i64,
            frames: frames as i64,
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_field(f, self.hours)?;
        f.write_str(":")?;
        write_field(f, self.minutes)?;
        f.write_str(":")?;
        write_field(f, self.seconds)?;
        f.write_str(":")?;
        write_field(f, self.frames)
    }
}

/// Values under 10 get a leading zero; wider values are never truncated.
fn write_field(f: &mut fmt::Formatter<'_>, value: i64) -> fmt::Result {
    if value < 10 {
        write!(f, "0{}", value)
    } else {
        write!(f, "{}", value)
    }
}

/// Encode `current_time` seconds as an `HH:MM:SS:FF` string.
pub fn to_smpte(current_time: f64, rate: FrameRate) -> String {
    Timecode::from_seconds(current_time, rate).to_string()
}
