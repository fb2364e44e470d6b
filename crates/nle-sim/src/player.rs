//! Simulated player host.
//!
//! Events are queued and delivered strictly in order. A seek applies the
//! position immediately and queues a `timeupdate`, which is delivered after
//! the event currently being dispatched has reached every handler.

use std::collections::VecDeque;

use nle_core::{
    DisplayTarget, DisplayTargets, EventHandler, EventKind, HostContext, HostEvent, NleError,
    PlaybackClock, PlayerHost,
};
use tracing::{trace, warn};

use crate::display::DisplayElement;

struct Subscription {
    kind: EventKind,
    handler: EventHandler,
}

/// A headless player: a clock, a control bar with two displays, and an
/// event bus.
pub struct SimulatedPlayer {
    current_time: f64,
    duration: f64,
    classes: Vec<String>,
    subscriptions: Vec<Subscription>,
    progress_bar: Option<DisplayElement>,
    remaining_time: Option<DisplayElement>,
    seek_log: Vec<f64>,
    pending: VecDeque<HostEvent>,
}

impl SimulatedPlayer {
    /// Create a player at position 0 with both displays present.
    pub fn new(duration: f64) -> Self {
        Self {
            current_time: 0.0,
            duration,
            classes: Vec::new(),
            subscriptions: Vec::new(),
            progress_bar: Some(DisplayElement::new()),
            remaining_time: Some(DisplayElement::new()),
            seek_log: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Start at `time` without firing any event.
    pub fn with_current_time(mut self, time: f64) -> Self {
        self.current_time = time;
        self
    }

    pub fn without_progress_bar(mut self) -> Self {
        self.progress_bar = None;
        self
    }

    pub fn without_remaining_time_display(mut self) -> Self {
        self.remaining_time = None;
        self
    }

    /// Deliver a `keydown` for `key_code`.
    pub fn press_key(&mut self, key_code: u32) -> Vec<NleError> {
        self.dispatch(HostEvent::KeyDown { key_code })
    }

    /// Move the playhead to `time` and fire `timeupdate`.
    pub fn set_time(&mut self, time: f64) -> Vec<NleError> {
        self.current_time = time;
        self.dispatch(HostEvent::TimeUpdate)
    }

    /// Advance playback by `delta` seconds, stopping at the end.
    pub fn advance(&mut self, delta: f64) -> Vec<NleError> {
        let time = (self.current_time + delta).min(self.duration);
        self.set_time(time)
    }

    /// Deliver `event` and anything it queues. Returns every handler error.
    pub fn dispatch(&mut self, event: HostEvent) -> Vec<NleError> {
        self.pending.push_back(event);
        let mut errors = Vec::new();
        while let Some(event) = self.pending.pop_front() {
            self.deliver(&event, &mut errors);
        }
        errors
    }

    fn deliver(&mut self, event: &HostEvent, errors: &mut Vec<NleError>) {
        let kind = event.kind();
        trace!(event = kind.name(), time = self.current_time, "Dispatching event");

        // Handlers registered while dispatching land in `self.subscriptions`
        // and are appended after the existing ones.
        let mut subscriptions = std::mem::take(&mut self.subscriptions);
        for sub in subscriptions.iter_mut().filter(|sub| sub.kind == kind) {
            let host: &mut dyn HostContext = &mut *self;
            if let Err(err) = (sub.handler)(host, event) {
                warn!(event = kind.name(), error = %err, "Event handler failed");
                errors.push(err);
            }
        }
        subscriptions.append(&mut self.subscriptions);
        self.subscriptions = subscriptions;
    }

    /// Every seek target requested so far, before clamping.
    pub fn seek_log(&self) -> &[f64] {
        &self.seek_log
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscriptions.iter().filter(|sub| sub.kind == kind).count()
    }

    pub fn progress_bar_element(&self) -> Option<&DisplayElement> {
        self.progress_bar.as_ref()
    }

    pub fn remaining_time_element(&self) -> Option<&DisplayElement> {
        self.remaining_time.as_ref()
    }
}

impl PlaybackClock for SimulatedPlayer {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn seek(&mut self, time: f64) {
        self.seek_log.push(time);
        // Media elements clamp to the playable range.
        self.current_time = time.max(0.0).min(self.duration);
        self.pending.push_back(HostEvent::TimeUpdate);
    }
}

impl DisplayTargets for SimulatedPlayer {
    fn progress_bar(&mut self) -> Option<&mut dyn DisplayTarget> {
        self.progress_bar
            .as_mut()
            .map(|el| el as &mut dyn DisplayTarget)
    }

    fn remaining_time_display(&mut self) -> Option<&mut dyn DisplayTarget> {
        self.remaining_time
            .as_mut()
            .map(|el| el as &mut dyn DisplayTarget)
    }
}

impl PlayerHost for SimulatedPlayer {
    fn subscribe(&mut self, kind: EventKind, handler: EventHandler) {
        self.subscriptions.push(Subscription { kind, handler });
    }

    fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }
}
