//! Integration tests for the SMPTE timecode displays.

use nle_controls::{attach, remaining_time_markup, CURRENT_TIME_DATA_KEY};
use nle_core::{DisplaySlot, EventKind, HostEvent, NleError, NleOptions, KEY_ARROW_RIGHT};
use nle_sim::SimulatedPlayer;

// ── Helpers ────────────────────────────────────────────────────

fn attach_timecode(player: &mut SimulatedPlayer, options: NleOptions) {
    attach(
        player,
        NleOptions {
            smpte_timecode: Some(true),
            ..Default::default()
        }
        .merge(options),
    );
}

fn elapsed(player: &SimulatedPlayer) -> Option<&str> {
    player
        .progress_bar_element()
        .and_then(|el| el.data(CURRENT_TIME_DATA_KEY))
}

fn remaining(player: &SimulatedPlayer) -> &str {
    player.remaining_time_element().unwrap().inner_html()
}

// ── Rendering ──────────────────────────────────────────────────

#[test]
fn one_time_update_writes_each_display_once() {
    let mut player = SimulatedPlayer::new(120.0);
    attach_timecode(&mut player, NleOptions::default());

    assert!(player.dispatch(HostEvent::TimeUpdate).is_empty());
    assert_eq!(player.progress_bar_element().unwrap().write_count(), 1);
    assert_eq!(player.remaining_time_element().unwrap().write_count(), 1);
}

#[test]
fn displays_follow_playback() {
    let mut player = SimulatedPlayer::new(120.0);
    attach_timecode(&mut player, NleOptions::default());

    player.set_time(61.5);
    assert_eq!(elapsed(&player), Some("00:01:01:12"));
    assert_eq!(
        remaining(&player),
        remaining_time_markup("00:01:01:12", "00:02:00:00")
    );

    player.set_time(62.0);
    assert_eq!(elapsed(&player), Some("00:01:02:00"));
    assert_eq!(player.progress_bar_element().unwrap().write_count(), 2);
}

#[test]
fn progress_bar_text_is_untouched() {
    let mut player = SimulatedPlayer::new(10.0);
    attach_timecode(&mut player, NleOptions::default());
    player.set_time(1.0);
    assert_eq!(player.progress_bar_element().unwrap().inner_html(), "");
}

#[test]
fn framerate_option_drives_frame_field() {
    let mut player = SimulatedPlayer::new(10.0);
    attach_timecode(
        &mut player,
        NleOptions {
            framerate: Some(30.0),
            ..Default::default()
        },
    );
    player.set_time(1.5);
    assert_eq!(elapsed(&player), Some("00:00:01:15"));
}

#[test]
fn fixed_duration_shows_in_remaining_display() {
    let mut player = SimulatedPlayer::new(10.0);
    attach_timecode(
        &mut player,
        NleOptions {
            duration: Some(3661.5),
            ..Default::default()
        },
    );
    player.set_time(0.0);
    assert!(remaining(&player).contains("00:00:00:00 / 01:61:01:12"));
}

#[test]
fn frame_step_refreshes_displays() {
    let mut player = SimulatedPlayer::new(10.0).with_current_time(1.0);
    attach(
        &mut player,
        NleOptions {
            frame_controls: Some(true),
            smpte_timecode: Some(true),
            ..Default::default()
        },
    );

    player.press_key(KEY_ARROW_RIGHT);
    // 1.04s at 24 fps
    assert_eq!(elapsed(&player), Some("00:00:01:00"));
    player.press_key(KEY_ARROW_RIGHT);
    // 1.08s at 24 fps
    assert_eq!(elapsed(&player), Some("00:00:01:01"));
}

// ── Missing displays ───────────────────────────────────────────

#[test]
fn missing_progress_bar_does_not_block_remaining_time() {
    let mut player = SimulatedPlayer::new(10.0).without_progress_bar();
    attach_timecode(&mut player, NleOptions::default());

    let errors = player.set_time(2.0);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0],
        NleError::MissingDisplay(DisplaySlot::ProgressBar)
    ));
    assert_eq!(player.remaining_time_element().unwrap().write_count(), 1);
}

#[test]
fn timecode_disabled_registers_nothing() {
    let mut player = SimulatedPlayer::new(10.0);
    attach(&mut player, NleOptions::default());
    assert_eq!(player.subscriber_count(EventKind::TimeUpdate), 0);
    player.set_time(1.0);
    assert_eq!(player.progress_bar_element().unwrap().write_count(), 0);
}
