//! Integration tests for arrow-key frame stepping.

use nle_controls::attach;
use nle_core::{EventKind, NleOptions, PlaybackClock, KEY_ARROW_LEFT, KEY_ARROW_RIGHT};
use nle_sim::SimulatedPlayer;

// ── Helpers ────────────────────────────────────────────────────

fn player_with_steps(framerate: f64, duration: f64, start: f64) -> SimulatedPlayer {
    let mut player = SimulatedPlayer::new(duration).with_current_time(start);
    attach(
        &mut player,
        NleOptions {
            framerate: Some(framerate),
            frame_controls: Some(true),
            ..Default::default()
        },
    );
    player
}

// ── Registration ───────────────────────────────────────────────

#[test]
fn frame_controls_without_timecode_registers_keydown_only() {
    let mut player = SimulatedPlayer::new(10.0);
    let options =
        NleOptions::from_json(r#"{"framerate": 30, "frameControls": true, "smpteTimecode": false}"#)
            .unwrap();
    attach(&mut player, options);

    assert_eq!(player.subscriber_count(EventKind::KeyDown), 1);
    assert_eq!(player.subscriber_count(EventKind::TimeUpdate), 0);
    assert_eq!(player.classes(), &["vjs-nle-controls".to_string()]);
}

// ── Boundaries ─────────────────────────────────────────────────

#[test]
fn left_arrow_at_start_does_nothing() {
    let mut player = player_with_steps(24.0, 10.0, 0.0);
    assert!(player.press_key(KEY_ARROW_LEFT).is_empty());
    assert!(player.seek_log().is_empty());
    assert_eq!(player.current_time(), 0.0);
}

#[test]
fn right_arrow_at_end_does_nothing() {
    let mut player = player_with_steps(24.0, 10.0, 10.0);
    player.press_key(KEY_ARROW_RIGHT);
    assert!(player.seek_log().is_empty());
    assert_eq!(player.current_time(), 10.0);
}

#[test]
fn right_arrow_near_end_lands_on_duration() {
    let mut player = player_with_steps(24.0, 10.0, 9.98);
    player.press_key(KEY_ARROW_RIGHT);
    assert_eq!(player.seek_log(), &[10.0]);
    assert_eq!(player.current_time(), 10.0);
}

#[test]
fn left_arrow_near_start_requests_negative_time() {
    let mut player = player_with_steps(24.0, 10.0, 0.02);
    player.press_key(KEY_ARROW_LEFT);
    assert!(player.seek_log()[0] < 0.0);
    // the host clamps the applied position
    assert_eq!(player.current_time(), 0.0);
}

#[test]
fn other_keys_are_ignored() {
    let mut player = player_with_steps(24.0, 10.0, 5.0);
    for key in [32, 38, 40, 13, 27] {
        assert!(player.press_key(key).is_empty());
    }
    assert!(player.seek_log().is_empty());
    assert_eq!(player.current_time(), 5.0);
}

// ── Stepping ───────────────────────────────────────────────────

#[test]
fn forward_then_back_returns_within_one_step() {
    let mut player = player_with_steps(24.0, 10.0, 4.5);
    for _ in 0..12 {
        player.press_key(KEY_ARROW_RIGHT);
    }
    assert!((player.current_time() - 4.98).abs() < 1e-9);
    for _ in 0..12 {
        player.press_key(KEY_ARROW_LEFT);
    }
    assert!((player.current_time() - 4.5).abs() <= 0.04);
    assert_eq!(player.seek_log().len(), 24);
}

#[test]
fn fixed_duration_overrides_host_duration() {
    let mut player = SimulatedPlayer::new(10.0).with_current_time(2.0);
    attach(
        &mut player,
        NleOptions {
            duration: Some(2.0),
            frame_controls: Some(true),
            ..Default::default()
        },
    );
    player.press_key(KEY_ARROW_RIGHT);
    assert!(player.seek_log().is_empty());
}
