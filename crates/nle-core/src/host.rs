//! Capability traits implemented by a playback host.
//!
//! The controls never reach into a global player registry. A host hands over
//! its clock, its display targets and an event subscription point, and the
//! controls are wired up against exactly that.

use std::fmt;

use crate::error::Result;

/// Key code for the left arrow key.
pub const KEY_ARROW_LEFT: u32 = 37;
/// Key code for the right arrow key.
pub const KEY_ARROW_RIGHT: u32 = 39;

/// The host's authoritative playback position and media length.
pub trait PlaybackClock {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Media duration in seconds.
    fn duration(&self) -> f64;

    /// Request a seek. The host decides how to apply it.
    fn seek(&mut self, time: f64);
}

/// A writable display node.
pub trait DisplayTarget {
    /// Set a metadata entry. Must not change visible content.
    fn set_data(&mut self, key: &str, value: &str);

    /// Replace the node's content with `markup`.
    fn set_inner_html(&mut self, markup: &str);
}

/// Named display nodes owned by the host's control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplaySlot {
    /// The play-progress bar inside the seek bar.
    ProgressBar,
    /// The remaining-time readout.
    RemainingTime,
}

impl fmt::Display for DisplaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProgressBar => f.write_str("progress bar"),
            Self::RemainingTime => f.write_str("remaining time display"),
        }
    }
}

/// Lookup of the host's display nodes. `None` means the node is absent.
pub trait DisplayTargets {
    fn progress_bar(&mut self) -> Option<&mut dyn DisplayTarget>;

    fn remaining_time_display(&mut self) -> Option<&mut dyn DisplayTarget>;

    /// Look up a node by slot.
    fn display(&mut self, slot: DisplaySlot) -> Option<&mut dyn DisplayTarget> {
        match slot {
            DisplaySlot::ProgressBar => self.progress_bar(),
            DisplaySlot::RemainingTime => self.remaining_time_display(),
        }
    }
}

/// Everything a handler may touch while it runs.
pub trait HostContext: PlaybackClock + DisplayTargets {}

impl<T: PlaybackClock + DisplayTargets + ?Sized> HostContext for T {}

/// Events delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    KeyDown { key_code: u32 },
    TimeUpdate,
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::KeyDown { .. } => EventKind::KeyDown,
            Self::TimeUpdate => EventKind::TimeUpdate,
        }
    }
}

/// Subscription key for [`HostEvent`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    TimeUpdate,
}

impl EventKind {
    /// Host-side event name.
    pub fn name(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::TimeUpdate => "timeupdate",
        }
    }
}

/// An event callback. An `Err` aborts the rest of that handler only; the host
/// still runs the other handlers registered for the event.
pub type EventHandler = Box<dyn FnMut(&mut dyn HostContext, &HostEvent) -> Result<()>>;

/// A player the controls can be attached to.
pub trait PlayerHost: HostContext {
    /// Register `handler` for `kind`. There is no unsubscribe.
    fn subscribe(&mut self, kind: EventKind, handler: EventHandler);

    /// Tag the player's root element with a CSS class.
    fn add_class(&mut self, class: &str);
}
