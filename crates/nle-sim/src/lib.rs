//! NLE Sim - Headless playback host
//!
//! Architecture:
//! - `SimulatedPlayer`: clock, event dispatch and control-bar displays in memory
//! - `DisplayElement`: a display node that records what was written to it

pub mod display;
pub mod player;

pub use display::DisplayElement;
pub use player::SimulatedPlayer;
