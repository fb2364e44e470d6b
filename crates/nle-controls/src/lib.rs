//! NLE Controls - Editor-style navigation for a media player
//!
//! Two independent components, attached to a host through the capability
//! traits in `nle-core`:
//! - `FrameTransport`: left/right arrow keys step one frame back/forward
//! - `TimecodeRenderer`: SMPTE elapsed/remaining readouts on every time update

pub mod plugin;
pub mod renderer;
pub mod transport;

pub use plugin::{attach, attach_config, PLUGIN_NAME, ROOT_CLASS, VERSION};
pub use renderer::{remaining_time_markup, TimecodeRenderer, CURRENT_TIME_DATA_KEY};
pub use transport::FrameTransport;
