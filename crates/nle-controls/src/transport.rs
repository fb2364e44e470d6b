//! Single-frame transport driven by arrow keys.
//!
//! Each accepted key issues exactly one seek against the position read at
//! that moment. Nothing is batched or debounced; key repeat produces one seek
//! per event and the host serializes them.

use nle_core::{
    DurationResolver, EventHandler, HostEvent, NleConfig, PlaybackClock, KEY_ARROW_LEFT,
    KEY_ARROW_RIGHT,
};
use tracing::{debug, trace};

/// Steps the playhead by one quantized frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransport {
    frame_step: f64,
    duration: DurationResolver,
}

impl FrameTransport {
    pub fn new(config: &NleConfig) -> Self {
        Self {
            frame_step: config.frame_step,
            duration: config.duration,
        }
    }

    /// Seek distance of one step in seconds.
    pub fn frame_step(&self) -> f64 {
        self.frame_step
    }

    /// Route a key code. Returns the seek target if a seek was issued.
    pub fn handle_key<C: PlaybackClock + ?Sized>(
        &self,
        clock: &mut C,
        key_code: u32,
    ) -> Option<f64> {
        match key_code {
            KEY_ARROW_LEFT => self.step_backward(clock),
            KEY_ARROW_RIGHT => self.step_forward(clock),
            _ => {
                trace!(key_code, "Ignoring key");
                None
            }
        }
    }

    /// Seek one frame back. No-op at position 0.
    ///
    /// The target is not clamped: stepping back from 0.01s at 24 fps requests
    /// -0.03s and leaves clamping to the host.
    pub fn step_backward<C: PlaybackClock + ?Sized>(&self, clock: &mut C) -> Option<f64> {
        let current = clock.current_time();
        if current > 0.0 {
            let target = current - self.frame_step;
            debug!(from = current, to = target, "Frame step backward");
            clock.seek(target);
            Some(target)
        } else {
            None
        }
    }

    /// Seek one frame forward, never past the duration. No-op at the end.
    pub fn step_forward<C: PlaybackClock + ?Sized>(&self, clock: &mut C) -> Option<f64> {
        let current = clock.current_time();
        let duration = self.duration.resolve(&*clock);
        if current < duration {
            let target = duration.min(current + self.frame_step);
            debug!(from = current, to = target, "Frame step forward");
            clock.seek(target);
            Some(target)
        } else {
            None
        }
    }

    /// Wrap this transport as a `keydown` handler.
    pub fn into_handler(self) -> EventHandler {
        Box::new(move |host, event| {
            if let HostEvent::KeyDown { key_code } = *event {
                self.handle_key(host, key_code);
            }
            Ok(())
        })
    }
}
