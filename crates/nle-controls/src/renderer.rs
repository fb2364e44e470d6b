//! SMPTE timecode readouts refreshed on every time update.
//!
//! The elapsed timecode goes into the progress bar's dataset, where it is
//! available to stylesheets and scripts without changing visible text. The
//! remaining-time display is fully overwritten with `elapsed / duration`.

use nle_core::{
    to_smpte, DisplaySlot, DurationResolver, EventHandler, FrameRate, HostContext, NleConfig,
    NleError, PlaybackClock, Result,
};
use tracing::trace;

/// Dataset key holding the elapsed timecode on the progress bar.
pub const CURRENT_TIME_DATA_KEY: &str = "currentTime";

/// Accessible label preceding the remaining-time readout.
const REMAINING_TIME_LABEL: &str = "Remaining Time";

/// Renders timecodes for the host's control-bar displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimecodeRenderer {
    frame_rate: FrameRate,
    duration: DurationResolver,
}

impl TimecodeRenderer {
    pub fn new(config: &NleConfig) -> Self {
        Self {
            frame_rate: config.frame_rate,
            duration: config.duration,
        }
    }

    /// Timecode of the current position.
    pub fn elapsed<C: PlaybackClock + ?Sized>(&self, clock: &C) -> String {
        to_smpte(clock.current_time(), self.frame_rate)
    }

    /// Timecode of the media duration.
    pub fn total<C: PlaybackClock + ?Sized>(&self, clock: &C) -> String {
        to_smpte(self.duration.resolve(clock), self.frame_rate)
    }

    /// Write the elapsed timecode to the progress bar's dataset.
    pub fn render_elapsed<H: HostContext + ?Sized>(&self, host: &mut H) -> Result<()> {
        let timecode = self.elapsed(&*host);
        let target = host
            .progress_bar()
            .ok_or(NleError::MissingDisplay(DisplaySlot::ProgressBar))?;
        target.set_data(CURRENT_TIME_DATA_KEY, &timecode);
        trace!(%timecode, "Rendered elapsed timecode");
        Ok(())
    }

    /// Overwrite the remaining-time display with `elapsed / duration`.
    pub fn render_remaining<H: HostContext + ?Sized>(&self, host: &mut H) -> Result<()> {
        let elapsed = self.elapsed(&*host);
        let total = self.total(&*host);
        let target = host
            .remaining_time_display()
            .ok_or(NleError::MissingDisplay(DisplaySlot::RemainingTime))?;
        target.set_inner_html(&remaining_time_markup(&elapsed, &total));
        trace!(%elapsed, %total, "Rendered remaining time");
        Ok(())
    }

    /// `timeupdate` handler for the elapsed readout.
    pub fn elapsed_handler(self) -> EventHandler {
        Box::new(move |host, _| self.render_elapsed(host))
    }

    /// `timeupdate` handler for the remaining-time readout.
    pub fn remaining_handler(self) -> EventHandler {
        Box::new(move |host, _| self.render_remaining(host))
    }
}

/// Markup for the remaining-time display.
pub fn remaining_time_markup(elapsed: &str, total: &str) -> String {
    format!(
        "<div class=\"vjs-remaining-time-display\" aria-live=\"off\">\
         <span class=\"vjs-control-text\">{}</span>{} / {}</div>",
        REMAINING_TIME_LABEL, elapsed, total
    )
}
