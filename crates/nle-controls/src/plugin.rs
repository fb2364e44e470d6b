//! Attaching the controls to a player host.

use nle_core::{EventKind, NleConfig, NleOptions, PlayerHost};
use tracing::debug;

use crate::renderer::TimecodeRenderer;
use crate::transport::FrameTransport;

/// Name the controls are known by to integrators.
pub const PLUGIN_NAME: &str = "nle";

/// Crate version, reported alongside the plugin name.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CSS class added to the player's root element.
pub const ROOT_CLASS: &str = "vjs-nle-controls";

/// Resolve `options` and attach the enabled components to `host`.
///
/// The host must be ready: its displays are looked up on every event, not
/// now. Returns the configuration the handlers were built from.
pub fn attach<H: PlayerHost + ?Sized>(host: &mut H, options: NleOptions) -> NleConfig {
    let options = NleOptions::default().merge(options);
    attach_config(host, NleConfig::from_options(&options))
}

/// Attach with an already resolved configuration.
pub fn attach_config<H: PlayerHost + ?Sized>(host: &mut H, config: NleConfig) -> NleConfig {
    host.add_class(ROOT_CLASS);

    if config.frame_controls {
        let transport = FrameTransport::new(&config);
        host.subscribe(EventKind::KeyDown, transport.into_handler());
    }

    if config.smpte_timecode {
        let renderer = TimecodeRenderer::new(&config);
        host.subscribe(EventKind::TimeUpdate, renderer.elapsed_handler());
        host.subscribe(EventKind::TimeUpdate, renderer.remaining_handler());
    }

    debug!(
        plugin = PLUGIN_NAME,
        frame_rate = %config.frame_rate,
        frame_step = config.frame_step,
        frame_controls = config.frame_controls,
        smpte_timecode = config.smpte_timecode,
        "NLE controls attached"
    );
    config
}
