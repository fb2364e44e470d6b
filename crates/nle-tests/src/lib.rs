//! Integration test crate for NLE controls.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It attaches the controls to the simulated player and drives them through
//! the host's event surface.

#[cfg(test)]
mod stepping;

#[cfg(test)]
mod timecode_display;
