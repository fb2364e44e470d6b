//! NLE controls demo
//!
//! Attaches the controls to a simulated player, plays one second of media,
//! then steps with the arrow keys and logs what the displays show.
//!
//! Usage: `nle-demo [options.json]`

use anyhow::{Context, Result};
use nle_controls::{CURRENT_TIME_DATA_KEY, PLUGIN_NAME, VERSION};
use nle_core::{NleError, NleOptions, PlaybackClock, KEY_ARROW_LEFT, KEY_ARROW_RIGHT};
use nle_sim::SimulatedPlayer;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Length of the simulated clip in seconds.
const DEMO_DURATION: f64 = 10.0;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("NLE controls demo starting...");

    let options = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read options from {}", path.display()))?;
            NleOptions::from_json(&json)?
        }
        None => NleOptions {
            frame_controls: Some(true),
            smpte_timecode: Some(true),
            ..Default::default()
        },
    };

    let mut player = SimulatedPlayer::new(DEMO_DURATION);
    let config = nle_controls::attach(&mut player, options);
    info!(
        plugin = PLUGIN_NAME,
        version = VERSION,
        frame_rate = %config.frame_rate,
        "Controls attached"
    );

    // One second of playback, one time update per frame
    let tick = config.frame_rate.frame_duration();
    let frames = config.frame_rate.fps().max(0.0).round() as usize;
    for _ in 0..frames {
        report_errors(player.advance(tick));
    }
    report(&player, "play");

    for key in [
        KEY_ARROW_RIGHT,
        KEY_ARROW_RIGHT,
        KEY_ARROW_RIGHT,
        KEY_ARROW_LEFT,
        KEY_ARROW_LEFT,
    ] {
        report_errors(player.press_key(key));
        let label = if key == KEY_ARROW_LEFT { "step back" } else { "step forward" };
        report(&player, label);
    }

    info!(seeks = player.seek_log().len(), "Demo finished");
    Ok(())
}

fn report(player: &SimulatedPlayer, action: &str) {
    let elapsed = player
        .progress_bar_element()
        .and_then(|el| el.data(CURRENT_TIME_DATA_KEY))
        .unwrap_or("-");
    let remaining = player
        .remaining_time_element()
        .map(|el| el.inner_html())
        .unwrap_or("-");
    info!(
        action,
        time = player.current_time(),
        elapsed,
        remaining,
        "Display"
    );
}

fn report_errors(errors: Vec<NleError>) {
    for err in errors {
        warn!(error = %err, "Handler failed");
    }
}
